//! The immutable input of a download.

use std::path::{Path, PathBuf};

use super::error::DownloadError;

/// What to fetch and where to put it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadRequest {
    source_url: String,
    destination: PathBuf,
}

impl DownloadRequest {
    /// Creates a request, rejecting empty fields.
    ///
    /// # Errors
    ///
    /// Returns [`DownloadError::InvalidRequest`] if the URL or the destination
    /// path is empty (or the URL is only whitespace).
    pub fn new(
        source_url: impl Into<String>,
        destination: impl Into<PathBuf>,
    ) -> Result<Self, DownloadError> {
        let source_url = source_url.into();
        let destination = destination.into();

        if source_url.trim().is_empty() {
            return Err(DownloadError::invalid_request("source_url"));
        }
        if destination.as_os_str().is_empty() {
            return Err(DownloadError::invalid_request("destination"));
        }

        Ok(Self {
            source_url,
            destination,
        })
    }

    /// The remote URL.
    #[must_use]
    pub fn source_url(&self) -> &str {
        &self.source_url
    }

    /// The local destination path.
    #[must_use]
    pub fn destination(&self) -> &Path {
        &self.destination
    }
}
