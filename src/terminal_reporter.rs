//! Terminal progress bar for the CLI.

use std::ops::ControlFlow;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use indicatif::{ProgressBar, ProgressStyle};
use update_fetch::ProgressReporter;

/// Resolution of the bar; fractions are mapped onto `0..=BAR_LENGTH`.
const BAR_LENGTH: u64 = 1000;

/// `indicatif` progress bar that cancels once `cancel` is set (Ctrl-C).
pub(crate) struct TerminalReporter {
    bar: ProgressBar,
    cancel: Arc<AtomicBool>,
}

impl TerminalReporter {
    pub(crate) fn new(visible: bool, cancel: Arc<AtomicBool>) -> Self {
        let bar = if visible {
            ProgressBar::new(BAR_LENGTH)
        } else {
            ProgressBar::hidden()
        };
        bar.set_style(
            ProgressStyle::with_template("{prefix}\n{spinner} [{wide_bar}] {percent:>3}% {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        Self { bar, cancel }
    }

    fn flow(&self) -> ControlFlow<()> {
        if self.cancel.load(Ordering::SeqCst) {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    }
}

impl ProgressReporter for TerminalReporter {
    fn start(&mut self, title: &str, subtitle: &str) {
        self.bar.set_prefix(title.to_string());
        self.bar.set_message(subtitle.to_string());
        self.bar.set_position(0);
    }

    fn pulse(&mut self) -> ControlFlow<()> {
        self.bar.tick();
        self.flow()
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn set_fraction(&mut self, fraction: f64) -> ControlFlow<()> {
        let position = (fraction.clamp(0.0, 1.0) * BAR_LENGTH as f64).round() as u64;
        self.bar.set_position(position);
        self.flow()
    }

    fn finish(&mut self) {
        self.bar.finish_and_clear();
    }
}
