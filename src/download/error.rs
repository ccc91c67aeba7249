//! Error types for the download module.
//!
//! [`DownloadError`] is what a caller sees in a failed
//! [`DownloadOutcome`](super::DownloadOutcome). [`TransportError`] is the
//! reason a transport gives when the HTTP transfer itself fails, and is
//! carried inside [`DownloadError::TransferFailed`].

use std::path::PathBuf;

use thiserror::Error;

/// Boxed error used for network failures so that any transport can report them.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that end a single download attempt.
#[derive(Debug, Error)]
pub enum DownloadError {
    /// A required request field was empty.
    #[error("invalid download request: {field} must not be empty")]
    InvalidRequest {
        /// Name of the empty field.
        field: &'static str,
    },

    /// A configuration value was rejected.
    #[error("invalid download config `{field}`: {reason}")]
    InvalidConfig {
        /// Name of the rejected field.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },

    /// The HTTP transport could not be constructed. No file was touched.
    #[error("could not initialize HTTP transport: {source}")]
    TransportInit {
        /// The underlying client builder error.
        #[source]
        source: reqwest::Error,
    },

    /// The destination directory could not be created (strict directory policy only).
    #[error("could not create directory {path}: {source}")]
    DirectoryCreation {
        /// The directory that could not be created.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The destination file could not be opened for writing.
    #[error("destination file could not be opened: {path}: {source}")]
    DestinationUnwritable {
        /// The destination path.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The transfer failed after the destination was opened.
    #[error("failed to fetch {url}: {source}")]
    TransferFailed {
        /// The source URL.
        url: String,
        /// Why the transport gave up.
        #[source]
        source: TransportError,
    },
}

impl DownloadError {
    /// Creates an invalid request error.
    pub fn invalid_request(field: &'static str) -> Self {
        Self::InvalidRequest { field }
    }

    /// Creates an invalid config error.
    pub fn invalid_config(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field,
            reason: reason.into(),
        }
    }

    /// Creates a transport initialization error.
    pub fn transport_init(source: reqwest::Error) -> Self {
        Self::TransportInit { source }
    }

    /// Creates a directory creation error.
    pub fn directory_creation(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::DirectoryCreation {
            path: path.into(),
            source,
        }
    }

    /// Creates a destination unwritable error.
    pub fn destination_unwritable(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::DestinationUnwritable {
            path: path.into(),
            source,
        }
    }

    /// Creates a transfer failure error.
    pub fn transfer_failed(url: impl Into<String>, source: TransportError) -> Self {
        Self::TransferFailed {
            url: url.into(),
            source,
        }
    }

    /// Returns true if the attempt ended because the reporter asked to cancel.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        matches!(
            self,
            Self::TransferFailed {
                source: TransportError::Cancelled,
                ..
            }
        )
    }
}

/// Reasons a transport reports for a failed transfer.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The URL could not be parsed.
    #[error("invalid URL: {url}")]
    InvalidUrl {
        /// The rejected URL string.
        url: String,
    },

    /// Network-level failure (DNS, connection refused, TLS, broken body stream).
    #[error("network error: {source}")]
    Network {
        /// The underlying error.
        #[source]
        source: BoxError,
    },

    /// The request or the body read timed out.
    #[error("transfer timed out")]
    Timeout,

    /// The server answered with a non-success status.
    #[error("HTTP {status}")]
    HttpStatus {
        /// The HTTP status code.
        status: u16,
    },

    /// The progress callback asked the transport to stop.
    #[error("transfer cancelled")]
    Cancelled,

    /// Writing the body to the destination failed.
    #[error("write to destination failed: {source}")]
    Sink {
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },
}

impl TransportError {
    /// Creates an invalid URL error.
    pub fn invalid_url(url: impl Into<String>) -> Self {
        Self::InvalidUrl { url: url.into() }
    }

    /// Creates a network error from any error type.
    pub fn network(source: impl Into<BoxError>) -> Self {
        Self::Network {
            source: source.into(),
        }
    }

    /// Creates an HTTP status error.
    pub fn http_status(status: u16) -> Self {
        Self::HttpStatus { status }
    }

    /// Creates a sink write error.
    pub fn sink(source: std::io::Error) -> Self {
        Self::Sink { source }
    }
}

// No `From<std::io::Error>` for either enum: an IO error can mean an
// unwritable destination, a failed directory, or a failed sink write, and
// only the call site knows which.
