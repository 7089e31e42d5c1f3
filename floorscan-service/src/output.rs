//! Output path generation for combined scans

use floorscan_io::SceneFormat;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

/// Timestamped destination for a project's combined scan
///
/// Produces `<documents_dir>/scans/combined/combined_scan_<project_id>_<unix_secs>.<ext>`.
/// Directories are not created here; the writer does that.
pub fn generate_output_path(project_id: &str, documents_dir: &Path, format: SceneFormat) -> PathBuf {
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default();
    generate_output_path_at(project_id, documents_dir, format, timestamp)
}

/// Same as [`generate_output_path`] with an explicit timestamp
pub fn generate_output_path_at(
    project_id: &str,
    documents_dir: &Path,
    format: SceneFormat,
    unix_secs: u64,
) -> PathBuf {
    documents_dir
        .join("scans")
        .join("combined")
        .join(format!("combined_scan_{}_{}.{}", project_id, unix_secs, format.extension()))
}
