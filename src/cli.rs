//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::Parser;

use update_fetch::download::{CONNECT_TIMEOUT_SECS, MAX_TIMEOUT_SECS};

/// Download a single file over HTTP(S) with progress reporting.
///
/// The destination is either written completely or not at all: a failed or
/// cancelled (Ctrl-C) download removes the partial file.
#[derive(Parser, Debug)]
#[command(name = "update-fetch")]
#[command(author, version, about)]
pub struct Args {
    /// URL to download
    pub url: String,

    /// Destination file (missing parent directories are created)
    pub destination: PathBuf,

    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-error output (also hides the progress bar)
    #[arg(short, long)]
    pub quiet: bool,

    /// Override the User-Agent header (default: update-fetch/<version>)
    #[arg(long)]
    pub user_agent: Option<String>,

    /// Fail immediately if the destination directory cannot be created
    #[arg(long)]
    pub strict_dirs: bool,

    /// Do not follow HTTP redirects
    #[arg(long)]
    pub no_follow_redirects: bool,

    /// Connect timeout in seconds
    #[arg(long, default_value_t = CONNECT_TIMEOUT_SECS, value_parser = clap::value_parser!(u64).range(1..=MAX_TIMEOUT_SECS))]
    pub connect_timeout: u64,

    /// Per-read timeout in seconds (default: none)
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..=MAX_TIMEOUT_SECS))]
    pub read_timeout: Option<u64>,

    /// Hide the progress bar
    #[arg(long)]
    pub no_progress: bool,
}
