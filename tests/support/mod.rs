//! Shared test doubles for integration tests.

use std::ops::ControlFlow;

use update_fetch::ProgressReporter;

/// One call made on a [`RecordingReporter`].
#[derive(Debug, Clone, PartialEq)]
pub enum ReporterCall {
    Pulse,
    Fraction(f64),
    Finish,
}

/// Reporter that records every call and can cancel after N progress updates.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    pub calls: Vec<ReporterCall>,
    cancel_after: Option<usize>,
}

impl RecordingReporter {
    /// Cancels on the `updates`-th progress update.
    pub fn cancelling_after(updates: usize) -> Self {
        Self {
            calls: Vec::new(),
            cancel_after: Some(updates),
        }
    }

    pub fn finish_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| **call == ReporterCall::Finish)
            .count()
    }

    pub fn fractions(&self) -> Vec<f64> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                ReporterCall::Fraction(f) => Some(*f),
                _ => None,
            })
            .collect()
    }

    fn record(&mut self, call: ReporterCall) -> ControlFlow<()> {
        self.calls.push(call);
        match self.cancel_after {
            Some(limit) if self.calls.len() >= limit => ControlFlow::Break(()),
            _ => ControlFlow::Continue(()),
        }
    }
}

impl ProgressReporter for RecordingReporter {
    fn start(&mut self, _title: &str, _subtitle: &str) {}

    fn pulse(&mut self) -> ControlFlow<()> {
        self.record(ReporterCall::Pulse)
    }

    fn set_fraction(&mut self, fraction: f64) -> ControlFlow<()> {
        self.record(ReporterCall::Fraction(fraction))
    }

    fn finish(&mut self) {
        self.calls.push(ReporterCall::Finish);
    }
}
