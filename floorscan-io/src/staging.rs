//! Staged file replacement
//!
//! Output is written to a hidden sibling file and renamed over the
//! destination, so readers never observe a half-written scene.

use crate::error::{IoError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

static STAGING_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// Sibling path used while `destination` is being written
pub fn staging_path(destination: &Path) -> PathBuf {
    let file_name = destination
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    let unique = STAGING_COUNTER.fetch_add(1, Ordering::Relaxed);
    destination.with_file_name(format!(".{}.{}-{}.partial", file_name, std::process::id(), unique))
}

/// Replace `destination` with whatever `write` produces
///
/// Missing parent directories are created and any existing file at the
/// destination is removed before writing starts. On failure the staging
/// file is cleaned up and the destination is left absent.
pub fn write_staged<F>(destination: &Path, write: F) -> Result<()>
where
    F: FnOnce(&Path) -> Result<()>,
{
    if destination.file_name().is_none() {
        return Err(IoError::WriteError {
            message: format!("'{}' is not a file path", destination.display()),
        });
    }

    if let Some(parent) = destination.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    if destination.exists() {
        tracing::debug!(path = %destination.display(), "Removing existing output");
        fs::remove_file(destination)?;
    }

    let staging = staging_path(destination);
    let outcome = write(staging.as_path()).and_then(|()| fs::rename(&staging, destination).map_err(IoError::from));
    if outcome.is_err() {
        // The write error wins over any cleanup error
        let _ = fs::remove_file(&staging);
    }
    outcome
}
