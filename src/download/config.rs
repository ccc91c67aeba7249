//! Per-downloader configuration supplied by the host application.

use std::time::Duration;

use super::constants::{CONNECT_TIMEOUT_SECS, MAX_TIMEOUT_SECS};
use super::error::DownloadError;

/// What to do when the destination's parent directory cannot be created.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DirectoryPolicy {
    /// Log and carry on; opening the destination reports the real error.
    #[default]
    Permissive,
    /// Fail the attempt with [`DownloadError::DirectoryCreation`].
    Strict,
}

/// Settings shared by every download a [`Downloader`](super::Downloader) runs.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use update_fetch::{DirectoryPolicy, DownloadConfig};
///
/// # fn example() -> Result<(), update_fetch::DownloadError> {
/// let config = DownloadConfig::new("myapp/1.2.0")?
///     .with_directory_policy(DirectoryPolicy::Strict)
///     .with_read_timeout(Some(Duration::from_secs(120)))?;
/// assert_eq!(config.user_agent(), "myapp/1.2.0");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadConfig {
    user_agent: String,
    directory_policy: DirectoryPolicy,
    follow_redirects: bool,
    fail_on_http_error: bool,
    connect_timeout: Option<Duration>,
    read_timeout: Option<Duration>,
}

impl DownloadConfig {
    /// Creates a config with the given user agent and default settings:
    /// permissive directories, redirects followed, HTTP errors fatal,
    /// 30 second connect timeout and no read timeout.
    ///
    /// # Errors
    ///
    /// Returns [`DownloadError::InvalidConfig`] for an empty user agent.
    pub fn new(user_agent: impl Into<String>) -> Result<Self, DownloadError> {
        let user_agent = user_agent.into();
        if user_agent.trim().is_empty() {
            return Err(DownloadError::invalid_config(
                "user_agent",
                "must not be empty",
            ));
        }
        Ok(Self {
            user_agent,
            directory_policy: DirectoryPolicy::default(),
            follow_redirects: true,
            fail_on_http_error: true,
            connect_timeout: Some(Duration::from_secs(CONNECT_TIMEOUT_SECS)),
            read_timeout: None,
        })
    }

    /// Sets the directory policy.
    #[must_use]
    pub fn with_directory_policy(mut self, policy: DirectoryPolicy) -> Self {
        self.directory_policy = policy;
        self
    }

    /// Enables or disables redirect following.
    #[must_use]
    pub fn with_follow_redirects(mut self, follow: bool) -> Self {
        self.follow_redirects = follow;
        self
    }

    /// Enables or disables failing on non-success HTTP status.
    #[must_use]
    pub fn with_fail_on_http_error(mut self, fail: bool) -> Self {
        self.fail_on_http_error = fail;
        self
    }

    /// Sets the connect timeout; `None` waits indefinitely.
    ///
    /// # Errors
    ///
    /// Returns [`DownloadError::InvalidConfig`] outside 1..=3600 seconds.
    pub fn with_connect_timeout(mut self, timeout: Option<Duration>) -> Result<Self, DownloadError> {
        validate_timeout("connect_timeout", timeout)?;
        self.connect_timeout = timeout;
        Ok(self)
    }

    /// Sets the per-read timeout; `None` waits indefinitely.
    ///
    /// # Errors
    ///
    /// Returns [`DownloadError::InvalidConfig`] outside 1..=3600 seconds.
    pub fn with_read_timeout(mut self, timeout: Option<Duration>) -> Result<Self, DownloadError> {
        validate_timeout("read_timeout", timeout)?;
        self.read_timeout = timeout;
        Ok(self)
    }

    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    #[must_use]
    pub fn directory_policy(&self) -> DirectoryPolicy {
        self.directory_policy
    }

    #[must_use]
    pub fn follow_redirects(&self) -> bool {
        self.follow_redirects
    }

    #[must_use]
    pub fn fail_on_http_error(&self) -> bool {
        self.fail_on_http_error
    }

    #[must_use]
    pub fn connect_timeout(&self) -> Option<Duration> {
        self.connect_timeout
    }

    #[must_use]
    pub fn read_timeout(&self) -> Option<Duration> {
        self.read_timeout
    }
}

fn validate_timeout(field: &'static str, value: Option<Duration>) -> Result<(), DownloadError> {
    let Some(value) = value else {
        return Ok(());
    };
    if !(1..=MAX_TIMEOUT_SECS).contains(&value.as_secs()) {
        return Err(DownloadError::invalid_config(
            field,
            format!(
                "{}s is outside the accepted range 1..={MAX_TIMEOUT_SECS} seconds",
                value.as_secs()
            ),
        ));
    }
    Ok(())
}
