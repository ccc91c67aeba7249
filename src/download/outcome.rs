//! Result value returned by every download attempt.

use std::path::PathBuf;

use thiserror::Error;

use super::error::DownloadError;

/// The partial file left behind by a failed transfer could not be removed.
///
/// This never turns a failure into anything else; it is attached to the
/// failed [`DownloadOutcome`] so the caller can tell the user where the
/// leftover file is.
#[derive(Debug, Error)]
#[error("could not remove partial download {path}: {source}")]
pub struct RollbackWarning {
    /// Path of the file that could not be removed.
    pub path: PathBuf,
    /// The underlying IO error.
    #[source]
    pub source: std::io::Error,
}

/// How a single download attempt ended.
#[derive(Debug)]
#[must_use = "a download outcome reports whether the destination was written"]
pub struct DownloadOutcome {
    result: Result<u64, DownloadError>,
    rollback_warning: Option<RollbackWarning>,
}

impl DownloadOutcome {
    /// The destination now holds `bytes_written` bytes served by the remote.
    pub fn completed(bytes_written: u64) -> Self {
        Self {
            result: Ok(bytes_written),
            rollback_warning: None,
        }
    }

    /// The attempt failed; the destination is absent.
    pub fn failed(error: DownloadError) -> Self {
        Self {
            result: Err(error),
            rollback_warning: None,
        }
    }

    pub(crate) fn with_rollback_warning(mut self, warning: RollbackWarning) -> Self {
        self.rollback_warning = Some(warning);
        self
    }

    /// Returns true when the destination file was fully written.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }

    /// Number of bytes written on success.
    #[must_use]
    pub fn bytes_written(&self) -> Option<u64> {
        self.result.as_ref().ok().copied()
    }

    /// The error that ended a failed attempt.
    #[must_use]
    pub fn error(&self) -> Option<&DownloadError> {
        self.result.as_ref().err()
    }

    /// Set when a failed attempt could not remove its partial file.
    #[must_use]
    pub fn rollback_warning(&self) -> Option<&RollbackWarning> {
        self.rollback_warning.as_ref()
    }

    /// Converts into a plain `Result`, dropping any rollback warning.
    ///
    /// # Errors
    ///
    /// Returns the [`DownloadError`] of a failed attempt.
    pub fn into_result(self) -> Result<u64, DownloadError> {
        self.result
    }
}
