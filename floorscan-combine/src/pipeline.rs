//! End-to-end combination: load, combine, write

use crate::collaborator::{AssetLoader, CompositeWriter};
use crate::combiner::{check_counts, SceneCombiner};
use crate::config::CombineConfig;
use floorscan_core::{MeshAsset, Result, ScanTransform};
use rayon::prelude::*;
use std::path::Path;

/// Load every scan, combine them and write the composite to `output_path`
///
/// Counts, settings and placements are checked before anything is loaded. Scans are loaded in
/// parallel but keep their input order in the composite. If several loads
/// fail, which failure is reported is unspecified.
///
/// # Arguments
/// * `paths` - Scan files, one per transform
/// * `transforms` - Canvas placement of each scan
/// * `output_path` - Destination; any existing file there is replaced
/// * `loader` - Source of scan assets
/// * `writer` - Sink for the composite
/// * `config` - Canvas scale and node naming
///
/// # Returns
/// * `Result<String>` - `output_path`, unchanged
///
/// # Example
/// ```rust,no_run
/// use floorscan_core::ScanTransform;
/// use floorscan_combine::{combine_scans, CombineConfig, FileAssetLoader, FileSceneWriter};
///
/// fn main() -> floorscan_core::Result<()> {
///     let written = combine_scans(
///         &["kitchen.obj", "hall.obj"],
///         &[ScanTransform::identity(), ScanTransform::new(150.0, 0.0, 90.0, 1.0)],
///         "out/combined.json",
///         &FileAssetLoader,
///         &FileSceneWriter,
///         &CombineConfig::default(),
///     )?;
///     assert_eq!(written, "out/combined.json");
///     Ok(())
/// }
/// ```
pub fn combine_scans<P>(
    paths: &[P],
    transforms: &[ScanTransform],
    output_path: &str,
    loader: &dyn AssetLoader,
    writer: &dyn CompositeWriter,
    config: &CombineConfig,
) -> Result<String>
where
    P: AsRef<Path> + Sync,
{
    check_counts(paths.len(), transforms.len())?;
    config.validate()?;
    let combiner = SceneCombiner::new(config.clone());
    // Reject bad placements before paying for any loads
    combiner.resolve_poses(transforms)?;

    let assets = paths
        .par_iter()
        .map(|p| loader.load(p.as_ref()))
        .collect::<Result<Vec<MeshAsset>>>()?;
    tracing::info!(
        scans = assets.len(),
        vertices = assets.iter().map(MeshAsset::vertex_count).sum::<usize>(),
        "Loaded scans"
    );

    let scene = combiner.combine(&assets, transforms)?;
    writer.write(&scene, Path::new(output_path))?;
    tracing::info!(output = output_path, scans = scene.len(), "Wrote combined scene");

    Ok(output_path.to_string())
}
