//! Outline extraction entry points

use crate::report::ErrorReport;
use crate::request::OutlineRequest;
use floorscan_algorithms::{extract_outline_from_asset, Outline, OutlineConfig};
use floorscan_combine::{AssetLoader, FileAssetLoader};
use floorscan_core::{ErrorKind, Polygon, Result};
use serde_json::{json, Value};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Load a scan from disk and extract its floor outline
///
/// # Arguments
/// * `path` - Scan file (`.obj`, `.ply` or `.json`)
/// * `config` - Floor band and simplification tolerance
///
/// # Returns
/// * `Result<Polygon>` - Outline vertices as `(x, z)` pairs, `LoadFailure`
///   if the scan cannot be read, `InsufficientData` if it has no usable floor
pub fn extract_outline_from_path<P: AsRef<Path>>(path: P, config: &OutlineConfig) -> Result<Polygon> {
    let asset = FileAssetLoader.load(path.as_ref())?;
    Ok(extract_outline_from_asset(&asset, config)?.polygon)
}

/// Outline extraction with a pluggable loader
#[derive(Clone)]
pub struct OutlineService {
    loader: Arc<dyn AssetLoader>,
    config: OutlineConfig,
}

impl OutlineService {
    /// Service reading scans from disk
    pub fn new(config: OutlineConfig) -> Self {
        Self::with_loader(Arc::new(FileAssetLoader), config)
    }

    pub fn with_loader(loader: Arc<dyn AssetLoader>, config: OutlineConfig) -> Self {
        Self { loader, config }
    }

    pub fn config(&self) -> &OutlineConfig {
        &self.config
    }

    fn run(&self, path: &Path, config: &OutlineConfig) -> Result<Outline> {
        let asset = self.loader.load(path)?;
        let outline = extract_outline_from_asset(&asset, config)?;
        tracing::info!(
            path = %path.display(),
            vertices = outline.vertex_count,
            floor_vertices = outline.floor_vertex_count,
            hull = outline.hull_size,
            outline = outline.polygon.len(),
            "Extracted floor outline"
        );
        Ok(outline)
    }

    fn extract_with(&self, path: &Path, config: &OutlineConfig) -> std::result::Result<Polygon, ErrorReport> {
        self.run(path, config).map(|o| o.polygon).map_err(|e| {
            tracing::warn!(path = %path.display(), code = e.kind().code(), error = %e, "Outline extraction failed");
            ErrorReport::from(e)
        })
    }

    /// Blocking extraction with the service configuration
    pub fn extract_outline(&self, path: &Path) -> std::result::Result<Polygon, ErrorReport> {
        self.extract_with(path, &self.config)
    }

    /// Run [`Self::extract_outline`] on the blocking thread pool
    pub async fn extract_outline_async(&self, path: impl Into<PathBuf>) -> std::result::Result<Polygon, ErrorReport> {
        let service = self.clone();
        let path = path.into();
        tokio::task::spawn_blocking(move || service.extract_outline(&path))
            .await
            .map_err(|e| ErrorReport::worker_failure(ErrorKind::LoadFailure, e))?
    }

    /// Handle a JSON request, answering `{ "outline": [[x, z], ...] }`
    ///
    /// `floorEpsilon` and `simplifyTolerance` in the request override the
    /// service configuration for this call only.
    pub async fn handle_json(&self, request: Value) -> std::result::Result<Value, ErrorReport> {
        let request = OutlineRequest::from_json(&request).map_err(ErrorReport::from)?;
        let mut config = self.config;
        if let Some(floor_epsilon) = request.floor_epsilon {
            config.floor_epsilon = floor_epsilon;
        }
        if let Some(simplify_tolerance) = request.simplify_tolerance {
            config.simplify_tolerance = simplify_tolerance;
        }

        let service = self.clone();
        let path = PathBuf::from(request.path);
        let polygon = tokio::task::spawn_blocking(move || service.extract_with(&path, &config))
            .await
            .map_err(|e| ErrorReport::worker_failure(ErrorKind::LoadFailure, e))??;
        Ok(json!({ "outline": polygon }))
    }
}
