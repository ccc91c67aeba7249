//! CLI entry point for update-fetch.

use std::io::IsTerminal;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info, warn};
use update_fetch::{
    DEFAULT_PROGRESS_SUBTITLE, DirectoryPolicy, DownloadConfig, DownloadRequest,
    ProgressReporter, download_file, progress_title, user_agent,
};

mod cli;
mod terminal_reporter;

use cli::Args;
use terminal_reporter::TerminalReporter;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments first (before tracing, so --help works without logs)
    let args = Args::parse();

    // Priority: RUST_LOG env var > quiet flag > verbose flag > default (info)
    let default_level = if args.quiet {
        "error"
    } else {
        match args.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    debug!(?args, "CLI arguments parsed");

    let request = DownloadRequest::new(args.url.clone(), args.destination.clone())?;
    let config = build_config(&args)?;

    let cancel = Arc::new(AtomicBool::new(false));
    spawn_cancel_on_ctrl_c(Arc::clone(&cancel));

    let show_progress = !args.quiet && !args.no_progress && std::io::stderr().is_terminal();
    let mut reporter = TerminalReporter::new(show_progress, cancel);
    reporter.start(
        &progress_title(request.destination()),
        DEFAULT_PROGRESS_SUBTITLE,
    );

    let outcome = download_file(&request, config, &mut reporter).await;

    if let Some(warning) = outcome.rollback_warning() {
        warn!(%warning, "partial file left behind");
    }

    let bytes = outcome
        .into_result()
        .with_context(|| format!("download of {} failed", request.source_url()))?;

    info!(
        bytes,
        path = %request.destination().display(),
        "Download complete"
    );

    Ok(())
}

fn build_config(args: &Args) -> Result<DownloadConfig> {
    let user_agent = args
        .user_agent
        .clone()
        .unwrap_or_else(user_agent::default_user_agent);
    let directory_policy = if args.strict_dirs {
        DirectoryPolicy::Strict
    } else {
        DirectoryPolicy::Permissive
    };

    let config = DownloadConfig::new(user_agent)?
        .with_directory_policy(directory_policy)
        .with_follow_redirects(!args.no_follow_redirects)
        .with_connect_timeout(Some(Duration::from_secs(args.connect_timeout)))?
        .with_read_timeout(args.read_timeout.map(Duration::from_secs))?;
    Ok(config)
}

/// Sets `cancel` on Ctrl-C. The reporter sees it on the next progress tick
/// and the download rolls back before `main` returns.
fn spawn_cancel_on_ctrl_c(cancel: Arc<AtomicBool>) {
    tokio::spawn(async move {
        while tokio::signal::ctrl_c().await.is_ok() {
            debug!("interrupt received, cancelling download");
            cancel.store(true, Ordering::SeqCst);
        }
    });
}
