//! Reliable single-file HTTP download.
//!
//! This module fetches one remote resource into one local file and makes sure
//! the destination is either the complete file or absent.
//!
//! # Features
//!
//! - Streaming transfer (the body is never held in memory)
//! - Missing parent directories are created
//! - Progress forwarded to a [`ProgressReporter`], which may cancel
//! - Partial files removed on any failure
//! - Pluggable [`Transport`]; [`HttpClient`] is the `reqwest` implementation
//!
//! # Example
//!
//! ```no_run
//! use update_fetch::download::{
//!     DEFAULT_PROGRESS_SUBTITLE, DownloadConfig, DownloadRequest, NullReporter,
//!     ProgressReporter, download_file, progress_title,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let request = DownloadRequest::new("https://example.com/atr.txt", "data/atr.txt")?;
//! let config = DownloadConfig::new("myapp/1.0.0")?;
//! let mut reporter = NullReporter;
//! reporter.start(&progress_title(request.destination()), DEFAULT_PROGRESS_SUBTITLE);
//!
//! let bytes = download_file(&request, config, &mut reporter).await.into_result()?;
//! println!("wrote {bytes} bytes");
//! # Ok(())
//! # }
//! ```

mod client;
mod config;
mod constants;
mod downloader;
mod error;
pub mod fs;
mod outcome;
mod progress;
mod request;
mod transport;

pub use client::HttpClient;
pub use config::{DirectoryPolicy, DownloadConfig};
pub use constants::{CONNECT_TIMEOUT_SECS, DEFAULT_PROGRESS_SUBTITLE, MAX_TIMEOUT_SECS};
pub use downloader::{Downloader, download_file};
pub use error::{BoxError, DownloadError, TransportError};
pub use outcome::{DownloadOutcome, RollbackWarning};
pub use progress::{NullReporter, ProgressEvent, ProgressReporter, progress_title};
pub use request::DownloadRequest;
pub use transport::{Transport, TransportRequest};

// Note: we do NOT define module-local Result aliases.
// Use `Result<T, DownloadError>` explicitly in function signatures.
