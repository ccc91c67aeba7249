//! The HTTP transport capability the downloader depends on.
//!
//! [`HttpClient`](super::HttpClient) is the production implementation; tests
//! plug in their own.

use async_trait::async_trait;
use tokio::io::AsyncWrite;

use super::error::TransportError;

/// Parameters of one streaming GET.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransportRequest<'a> {
    /// URL to fetch.
    pub url: &'a str,
    /// Value of the `User-Agent` header.
    pub user_agent: &'a str,
    /// Whether redirects are followed.
    pub follow_redirects: bool,
    /// Whether a non-success status fails the transfer before any body is written.
    pub fail_on_http_error: bool,
}

/// Streams a remote resource into a byte sink.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Performs a GET and writes the body to `sink` as it arrives.
    ///
    /// `on_progress(received, total)` is called after each chunk and also
    /// periodically while waiting for headers or body data, with a
    /// non-decreasing `received` and a `total` of `0` when the size is
    /// unknown. When it returns `false` the transport stops and returns
    /// [`TransportError::Cancelled`]. Implementations must not buffer the
    /// whole body in memory.
    ///
    /// Returns the number of body bytes written to `sink`.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] describing why the transfer failed.
    async fn get(
        &self,
        request: &TransportRequest<'_>,
        sink: &mut (dyn AsyncWrite + Unpin + Send),
        on_progress: &mut (dyn FnMut(u64, u64) -> bool + Send),
    ) -> Result<u64, TransportError>;
}
