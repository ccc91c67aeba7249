//! Filesystem operations used around a transfer.

use std::io;
use std::path::Path;

use tokio::fs::File;
use tracing::debug;

/// Creates `path` and all missing ancestors. Succeeds if it already exists.
///
/// An empty path (the parent of a bare file name) means the current
/// directory and is a no-op.
///
/// # Errors
///
/// Returns the IO error if a component could not be created, e.g. because an
/// ancestor is a regular file.
pub async fn ensure_directory(path: &Path) -> io::Result<()> {
    if path.as_os_str().is_empty() {
        return Ok(());
    }
    tokio::fs::create_dir_all(path).await
}

/// Opens `path` for writing, creating it or truncating existing content.
///
/// # Errors
///
/// Returns the IO error from the open call.
pub async fn create_file_for_write(path: &Path) -> io::Result<File> {
    File::create(path).await
}

/// Removes `path`. A file that is already gone counts as removed.
///
/// # Errors
///
/// Returns the IO error for any failure other than `NotFound`.
pub async fn delete_file(path: &Path) -> io::Result<()> {
    match tokio::fs::remove_file(path).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "file already absent");
            Ok(())
        }
        Err(e) => Err(e),
    }
}
