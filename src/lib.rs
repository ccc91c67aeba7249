//! update-fetch Library
//!
//! This library downloads a single file over HTTP(S) for a host application
//! (typically an "update data files" feature). It streams the body to the
//! destination, reports progress to a UI-agnostic reporter, and guarantees
//! the destination is either the complete file or absent.
//!
//! # Architecture
//!
//! - [`download`] - Downloader, transport capability, progress reporting, rollback
//! - [`user_agent`] - User-Agent construction for host applications

// Clippy lints - strict for library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod download;
pub mod user_agent;

// Re-export commonly used types
pub use download::{
    DEFAULT_PROGRESS_SUBTITLE, DirectoryPolicy, DownloadConfig, DownloadError, DownloadOutcome,
    DownloadRequest, Downloader, HttpClient, NullReporter, ProgressEvent, ProgressReporter,
    RollbackWarning, Transport, TransportError, TransportRequest, download_file, progress_title,
};
