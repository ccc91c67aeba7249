//! User-Agent strings for host applications.
//!
//! The downloader never reads a version on its own; the host builds the
//! string here and passes it in through
//! [`DownloadConfig`](crate::DownloadConfig).

/// `name/version`, e.g. `cardreader/0.9.1`.
#[must_use]
pub fn for_application(name: &str, version: &str) -> String {
    format!("{name}/{version}")
}

/// User-Agent identifying this crate itself, for hosts without their own name.
#[must_use]
pub fn default_user_agent() -> String {
    for_application(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}
