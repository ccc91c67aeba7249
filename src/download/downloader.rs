//! Single-file download orchestration.
//!
//! A download moves through these stages:
//!
//! ```text
//! Init -> DirPrepared -> FileOpen -> Transferring -> Committed  -> Finished
//!                                                 \-> RolledBack -> Finished
//! ```
//!
//! `Committed` leaves the complete file at the destination. `RolledBack`
//! removes whatever was written. `Finished` always tears the progress
//! reporter down.

use std::path::Path;

use tokio::fs::File;
use tokio::io::{AsyncWriteExt, BufWriter};
use tracing::{debug, error, info, instrument, warn};

use super::client::HttpClient;
use super::config::{DirectoryPolicy, DownloadConfig};
use super::error::{DownloadError, TransportError};
use super::fs;
use super::outcome::{DownloadOutcome, RollbackWarning};
use super::progress::{ProgressEvent, ProgressReporter};
use super::request::DownloadRequest;
use super::transport::{Transport, TransportRequest};

/// Runs one download attempt per call through a [`Transport`].
///
/// Calls for different destinations may run concurrently on separate tasks.
/// Calls for the same destination race and must be serialized by the caller.
#[derive(Debug, Clone)]
pub struct Downloader<T> {
    transport: T,
    config: DownloadConfig,
}

impl Downloader<HttpClient> {
    /// Creates a downloader backed by a `reqwest` client built from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`DownloadError::TransportInit`] if the client cannot be built.
    pub fn with_http_client(config: DownloadConfig) -> Result<Self, DownloadError> {
        let transport = HttpClient::from_config(&config)?;
        Ok(Self::new(transport, config))
    }
}

impl<T: Transport> Downloader<T> {
    /// Creates a downloader over any transport.
    pub fn new(transport: T, config: DownloadConfig) -> Self {
        Self { transport, config }
    }

    /// The configuration every download uses.
    #[must_use]
    pub fn config(&self) -> &DownloadConfig {
        &self.config
    }

    /// Downloads `request.source_url()` to `request.destination()`.
    ///
    /// The caller starts `reporter` beforehand; this method drives it and
    /// calls [`ProgressReporter::finish`] exactly once before returning,
    /// whatever the outcome. On failure the destination does not exist
    /// afterwards. No retries are made.
    #[instrument(
        skip(self, request, reporter),
        fields(url = %request.source_url(), destination = %request.destination().display())
    )]
    pub async fn download(
        &self,
        request: &DownloadRequest,
        reporter: &mut dyn ProgressReporter,
    ) -> DownloadOutcome {
        let outcome = self.run(request, reporter).await;
        reporter.finish();
        debug!(success = outcome.is_success(), "download finished");
        outcome
    }

    async fn run(
        &self,
        request: &DownloadRequest,
        reporter: &mut dyn ProgressReporter,
    ) -> DownloadOutcome {
        let destination = request.destination();

        if let Err(error) = self.prepare_directory(destination).await {
            return DownloadOutcome::failed(error);
        }

        let file = match fs::create_file_for_write(destination).await {
            Ok(file) => file,
            Err(source) => {
                error!(
                    path = %destination.display(),
                    error = %source,
                    "destination file could not be opened"
                );
                return DownloadOutcome::failed(DownloadError::destination_unwritable(
                    destination,
                    source,
                ));
            }
        };
        debug!("destination opened");

        match self.transfer(request.source_url(), file, reporter).await {
            Ok(bytes) => {
                info!(bytes, "download complete");
                DownloadOutcome::completed(bytes)
            }
            Err(source) => {
                error!(error = %source, "failed to fetch");
                let outcome = DownloadOutcome::failed(DownloadError::transfer_failed(
                    request.source_url(),
                    source,
                ));
                match fs::delete_file(destination).await {
                    Ok(()) => {
                        debug!("partial destination removed");
                        outcome
                    }
                    Err(source) => {
                        warn!(
                            path = %destination.display(),
                            error = %source,
                            "could not remove partial download"
                        );
                        outcome.with_rollback_warning(RollbackWarning {
                            path: destination.to_path_buf(),
                            source,
                        })
                    }
                }
            }
        }
    }

    async fn prepare_directory(&self, destination: &Path) -> Result<(), DownloadError> {
        let Some(parent) = destination.parent() else {
            return Ok(());
        };

        match fs::ensure_directory(parent).await {
            Ok(()) => Ok(()),
            Err(source) => match self.config.directory_policy() {
                DirectoryPolicy::Permissive => {
                    warn!(
                        path = %parent.display(),
                        error = %source,
                        "could not create destination directory, trying to open destination anyway"
                    );
                    Ok(())
                }
                DirectoryPolicy::Strict => {
                    error!(
                        path = %parent.display(),
                        error = %source,
                        "could not create destination directory"
                    );
                    Err(DownloadError::directory_creation(parent, source))
                }
            },
        }
    }

    /// Streams the body into `file` and closes it.
    ///
    /// The file handle is closed on every path so rollback can remove it.
    async fn transfer(
        &self,
        url: &str,
        file: File,
        reporter: &mut dyn ProgressReporter,
    ) -> Result<u64, TransportError> {
        let transport_request = TransportRequest {
            url,
            user_agent: self.config.user_agent(),
            follow_redirects: self.config.follow_redirects(),
            fail_on_http_error: self.config.fail_on_http_error(),
        };

        let mut writer = BufWriter::new(file);
        let mut on_progress = |received: u64, total: u64| {
            let flow = ProgressEvent::from_counts(received, total).report_to(&mut *reporter);
            if flow.is_break() {
                debug!(received, total, "progress reporter requested cancellation");
            }
            flow.is_continue()
        };

        let transferred = self
            .transport
            .get(&transport_request, &mut writer, &mut on_progress)
            .await;
        let closed = writer.shutdown().await;

        let bytes = transferred?;
        closed.map_err(TransportError::sink)?;
        Ok(bytes)
    }
}

/// Builds an [`HttpClient`] from `config` and runs one download.
///
/// If the client cannot be built, the filesystem is not touched and the
/// outcome carries [`DownloadError::TransportInit`]. The reporter is finished
/// on every path.
pub async fn download_file(
    request: &DownloadRequest,
    config: DownloadConfig,
    reporter: &mut dyn ProgressReporter,
) -> DownloadOutcome {
    match Downloader::with_http_client(config) {
        Ok(downloader) => downloader.download(request, reporter).await,
        Err(error) => transport_unavailable(error, reporter),
    }
}

fn transport_unavailable(
    error: DownloadError,
    reporter: &mut dyn ProgressReporter,
) -> DownloadOutcome {
    error!(error = %error, "could not initialize HTTP transport");
    reporter.finish();
    DownloadOutcome::failed(error)
}
