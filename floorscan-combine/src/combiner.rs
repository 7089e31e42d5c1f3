//! Scene combination

use crate::composite::{CompositeEntry, CompositeScene};
use crate::config::CombineConfig;
use floorscan_core::{Error, MeshAsset, Pose3, Result, ScanTransform, SceneNode, MIN_SCANS_TO_COMBINE};

/// Check the input counts: equal lengths first, then at least two scans
///
/// Runs before any settings or per-scan validation.
pub fn check_counts(scans: usize, transforms: usize) -> Result<()> {
    if scans != transforms {
        return Err(Error::ArgumentMismatch {
            paths: scans,
            transforms,
        });
    }
    if scans < MIN_SCANS_TO_COMBINE {
        return Err(Error::InsufficientData(format!(
            "need at least {} scans to combine, got {}",
            MIN_SCANS_TO_COMBINE, scans
        )));
    }
    Ok(())
}

/// Combines loaded assets into a composite scene
#[derive(Debug, Clone, Default)]
pub struct SceneCombiner {
    config: CombineConfig,
}

impl SceneCombiner {
    pub fn new(config: CombineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CombineConfig {
        &self.config
    }

    /// Resolve every transform, naming the first bad one by index
    pub fn resolve_poses(&self, transforms: &[ScanTransform]) -> Result<Vec<Pose3>> {
        transforms
            .iter()
            .enumerate()
            .map(|(i, t)| Pose3::resolve_with_scale(t, self.config.canvas_scale).map_err(|e| e.at_index(i)))
            .collect()
    }

    /// Place each asset in its own container under a single composite root
    ///
    /// All poses are resolved before anything is cloned, so a bad transform
    /// fails the call without doing any work. Input assets are not modified.
    ///
    /// # Arguments
    /// * `assets` - Loaded scans, in output order
    /// * `transforms` - One canvas placement per asset
    ///
    /// # Returns
    /// * `Result<CompositeScene>` - `ArgumentMismatch` if the counts differ,
    ///   `InsufficientData` for fewer than two scans, `ValidationFailure` for
    ///   a bad transform, `LoadFailure` for an asset with nothing to clone
    pub fn combine(&self, assets: &[MeshAsset], transforms: &[ScanTransform]) -> Result<CompositeScene> {
        check_counts(assets.len(), transforms.len())?;
        self.config.validate()?;
        let poses = self.resolve_poses(transforms)?;

        let mut scene = CompositeScene::new(self.config.root_name.clone());
        for (index, (asset, pose)) in assets.iter().zip(poses).enumerate() {
            let children = asset.clone_subtree();
            if children.is_empty() {
                return Err(Error::load(
                    asset.display_name(),
                    format!("scan {} has no nodes to clone", index),
                ));
            }

            let mut container = SceneNode::named(self.config.container_name(index))
                .with_transform(pose.to_transform());
            container.children = children;

            tracing::info!(
                index,
                source = %asset.display_name(),
                nodes = container.node_count() - 1,
                yaw_radians = pose.yaw_radians,
                scale = pose.uniform_scale,
                "Placed scan in composite"
            );

            scene.push(CompositeEntry {
                source_index: index,
                source_name: asset.display_name(),
                container,
                pose,
            });
        }
        Ok(scene)
    }
}
