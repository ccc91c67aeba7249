//! Progress events and the reporter capability that displays them.

use std::ops::ControlFlow;
use std::path::Path;

/// A single progress observation made during a transfer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProgressEvent {
    /// The total size is unknown.
    Indeterminate,
    /// Fraction of the body received, in `[0, 1]`.
    Fraction(f64),
}

impl ProgressEvent {
    /// Translates transport counters into an event.
    ///
    /// A `total` of zero means the size is unknown. A server that sends more
    /// than it announced is clamped to `1.0`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn from_counts(received: u64, total: u64) -> Self {
        if total == 0 {
            return Self::Indeterminate;
        }
        Self::Fraction((received as f64 / total as f64).min(1.0))
    }

    /// Forwards the event to the matching reporter method.
    pub fn report_to(self, reporter: &mut dyn ProgressReporter) -> ControlFlow<()> {
        match self {
            Self::Indeterminate => reporter.pulse(),
            Self::Fraction(fraction) => reporter.set_fraction(fraction),
        }
    }
}

/// UI-facing sink for transfer progress.
///
/// The caller calls [`start`](Self::start) before handing the reporter to a
/// [`Downloader`](super::Downloader); the downloader then drives it and calls
/// [`finish`](Self::finish) exactly once before returning.
///
/// `pulse` and `set_fraction` run on the transfer path and must not block.
/// Returning `ControlFlow::Break(())` from either cancels the transfer.
pub trait ProgressReporter: Send {
    /// Shows the progress display.
    fn start(&mut self, title: &str, subtitle: &str);

    /// Indeterminate tick: data is flowing but the total is unknown.
    fn pulse(&mut self) -> ControlFlow<()>;

    /// Sets the completed fraction.
    fn set_fraction(&mut self, fraction: f64) -> ControlFlow<()>;

    /// Tears the display down.
    fn finish(&mut self);
}

/// Reporter for headless callers. Never cancels.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullReporter;

impl ProgressReporter for NullReporter {
    fn start(&mut self, _title: &str, _subtitle: &str) {}

    fn pulse(&mut self) -> ControlFlow<()> {
        ControlFlow::Continue(())
    }

    fn set_fraction(&mut self, _fraction: f64) -> ControlFlow<()> {
        ControlFlow::Continue(())
    }

    fn finish(&mut self) {}
}

/// Human-readable progress title for a destination, e.g. `Updating data/list.txt`.
#[must_use]
pub fn progress_title(destination: &Path) -> String {
    format!("Updating {}", destination.display())
}
