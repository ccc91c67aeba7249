//! `reqwest`-backed transport.
//!
//! [`HttpClient`] streams response bodies chunk by chunk into the sink it is
//! given, reporting progress after every chunk and on a fixed tick while
//! the server is silent.

use std::time::Duration;

use async_trait::async_trait;
use futures_util::StreamExt;
use reqwest::header::USER_AGENT;
use reqwest::redirect::Policy;
use reqwest::{Client, ClientBuilder};
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::time::{Instant, Interval, MissedTickBehavior};
use tracing::{debug, instrument};
use url::Url;

use super::config::DownloadConfig;
use super::constants::{CONNECT_TIMEOUT_SECS, MAX_REDIRECTS, PROGRESS_TICK_MILLIS};
use super::error::{DownloadError, TransportError};
use super::transport::{Transport, TransportRequest};

/// HTTP transport for downloads.
///
/// Create it once and reuse it; the underlying clients pool connections.
/// Two clients are kept because `reqwest` fixes the redirect policy at build
/// time.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    no_redirect_client: Client,
}

impl HttpClient {
    /// Creates a client with the default 30 second connect timeout and no
    /// read timeout.
    ///
    /// # Errors
    ///
    /// Returns the `reqwest` builder error if the TLS backend or resolver
    /// cannot be initialized.
    pub fn new() -> Result<Self, reqwest::Error> {
        Self::with_timeouts(Some(Duration::from_secs(CONNECT_TIMEOUT_SECS)), None)
    }

    /// Creates a client with explicit timeouts. `None` disables a timeout.
    ///
    /// # Errors
    ///
    /// Returns the `reqwest` builder error if the client cannot be built.
    pub fn with_timeouts(
        connect_timeout: Option<Duration>,
        read_timeout: Option<Duration>,
    ) -> Result<Self, reqwest::Error> {
        let client = base_client_builder(connect_timeout, read_timeout)
            .redirect(Policy::limited(MAX_REDIRECTS))
            .build()?;
        let no_redirect_client = base_client_builder(connect_timeout, read_timeout)
            .redirect(Policy::none())
            .build()?;
        Ok(Self {
            client,
            no_redirect_client,
        })
    }

    /// Creates a client using the timeouts from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`DownloadError::TransportInit`] if the client cannot be built.
    #[instrument(level = "debug", skip(config))]
    pub fn from_config(config: &DownloadConfig) -> Result<Self, DownloadError> {
        Self::with_timeouts(config.connect_timeout(), config.read_timeout())
            .map_err(DownloadError::transport_init)
    }

    fn client_for(&self, follow_redirects: bool) -> &Client {
        if follow_redirects {
            &self.client
        } else {
            &self.no_redirect_client
        }
    }
}

#[async_trait]
impl Transport for HttpClient {
    #[instrument(level = "debug", skip(self, sink, on_progress), fields(url = %request.url))]
    async fn get(
        &self,
        request: &TransportRequest<'_>,
        sink: &mut (dyn AsyncWrite + Unpin + Send),
        on_progress: &mut (dyn FnMut(u64, u64) -> bool + Send),
    ) -> Result<u64, TransportError> {
        let url = Url::parse(request.url).map_err(|_| TransportError::invalid_url(request.url))?;

        let mut ticker = progress_ticker();
        let send = self
            .client_for(request.follow_redirects)
            .get(url)
            .header(USER_AGENT, request.user_agent)
            .send();
        tokio::pin!(send);

        let response = loop {
            tokio::select! {
                result = &mut send => break result.map_err(map_reqwest_error)?,
                _ = ticker.tick() => {
                    if !on_progress(0, 0) {
                        debug!("transfer cancelled while waiting for response headers");
                        return Err(TransportError::Cancelled);
                    }
                }
            }
        };

        let status = response.status();
        if request.fail_on_http_error && !status.is_success() {
            debug!(status = status.as_u16(), "server returned error status");
            return Err(TransportError::http_status(status.as_u16()));
        }

        let total = response.content_length().unwrap_or(0);
        debug!(
            status = status.as_u16(),
            total,
            final_url = %response.url(),
            "response headers received"
        );

        if !on_progress(0, total) {
            return Err(TransportError::Cancelled);
        }

        stream_to_sink(response, sink, total, &mut ticker, on_progress).await
    }
}

/// Streams the response body to `sink`, returning bytes written.
///
/// `on_progress` runs after every chunk and on every `ticker` tick, so a
/// stalled body can still be cancelled.
async fn stream_to_sink(
    response: reqwest::Response,
    sink: &mut (dyn AsyncWrite + Unpin + Send),
    total: u64,
    ticker: &mut Interval,
    on_progress: &mut (dyn FnMut(u64, u64) -> bool + Send),
) -> Result<u64, TransportError> {
    let mut stream = response.bytes_stream();
    let mut received: u64 = 0;

    loop {
        tokio::select! {
            next = stream.next() => {
                let Some(chunk_result) = next else {
                    break;
                };
                let chunk = chunk_result.map_err(map_reqwest_error)?;

                sink.write_all(&chunk).await.map_err(TransportError::sink)?;
                received += chunk.len() as u64;
                ticker.reset();

                if !on_progress(received, total) {
                    debug!(received, total, "transfer cancelled by progress callback");
                    return Err(TransportError::Cancelled);
                }
            }
            _ = ticker.tick() => {
                if !on_progress(received, total) {
                    debug!(received, total, "transfer cancelled while waiting for data");
                    return Err(TransportError::Cancelled);
                }
            }
        }
    }

    Ok(received)
}

/// Ticker whose first tick fires one period from now.
fn progress_ticker() -> Interval {
    let period = Duration::from_millis(PROGRESS_TICK_MILLIS);
    let mut ticker = tokio::time::interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    ticker
}

fn map_reqwest_error(error: reqwest::Error) -> TransportError {
    if error.is_timeout() {
        TransportError::Timeout
    } else {
        TransportError::network(error)
    }
}

fn base_client_builder(
    connect_timeout: Option<Duration>,
    read_timeout: Option<Duration>,
) -> ClientBuilder {
    let mut builder = Client::builder();
    if let Some(timeout) = connect_timeout {
        builder = builder.connect_timeout(timeout);
    }
    if let Some(timeout) = read_timeout {
        builder = builder.read_timeout(timeout);
    }
    builder
}
