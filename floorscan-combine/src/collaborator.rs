//! Loader and writer seams
//!
//! The combination pipeline talks to the file system only through these
//! traits, so tests and embedders can supply their own storage.

use crate::composite::CompositeScene;
use floorscan_core::{Error, MeshAsset, Result};
use std::path::Path;

/// Loads a scan from a path
pub trait AssetLoader: Send + Sync {
    /// Failures must be reported as `LoadFailure`
    fn load(&self, path: &Path) -> Result<MeshAsset>;
}

/// Persists a composite scene
pub trait CompositeWriter: Send + Sync {
    /// Failures must be reported as `ExportFailure`; no partial output may
    /// remain at `path`
    fn write(&self, scene: &CompositeScene, path: &Path) -> Result<()>;
}

/// Loads OBJ, PLY and JSON scenes from disk
#[derive(Debug, Clone, Copy, Default)]
pub struct FileAssetLoader;

impl AssetLoader for FileAssetLoader {
    fn load(&self, path: &Path) -> Result<MeshAsset> {
        floorscan_io::read_asset(path).map_err(|e| Error::load(path.display(), e))
    }
}

/// Writes composites to disk, format chosen by extension
#[derive(Debug, Clone, Copy, Default)]
pub struct FileSceneWriter;

impl CompositeWriter for FileSceneWriter {
    fn write(&self, scene: &CompositeScene, path: &Path) -> Result<()> {
        floorscan_io::write_scene(&scene.to_scene_node(), path).map_err(|e| Error::export(path.display(), e))
    }
}
