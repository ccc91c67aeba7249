//! Constants for the download module (timeouts, progress labels).

/// Default HTTP connect timeout (30 seconds).
pub const CONNECT_TIMEOUT_SECS: u64 = 30;

/// Upper bound accepted for any configured timeout (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// Maximum number of redirect hops followed when redirects are enabled.
pub const MAX_REDIRECTS: usize = 10;

/// Subtitle shown by progress reporters while a download runs.
pub const DEFAULT_PROGRESS_SUBTITLE: &str = "Please wait...";

/// Interval at which the transport reports progress while no data arrives.
pub const PROGRESS_TICK_MILLIS: u64 = 100;
