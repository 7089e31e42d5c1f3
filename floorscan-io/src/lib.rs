//! Scene loading and writing
//!
//! This crate reads room scans into [`MeshAsset`]s and writes composite
//! scenes to disk. Formats are chosen by file extension:
//!
//! * `.obj` - Wavefront OBJ; objects and groups become root-level nodes
//! * `.ply` - Stanford PLY; one mesh, scenes are flattened on write
//! * `.json` - floorscan scene document; keeps the full hierarchy

pub mod error;
pub mod json;
pub mod obj;
pub mod ply;
pub mod staging;

pub use error::*;
pub use json::{JsonSceneReader, JsonSceneWriter, SceneDocument};
pub use obj::{ObjReader, ObjWriter};
pub use ply::{PlyReader, PlyWriter};

use floorscan_core::{MeshAsset, SceneNode};
use std::path::Path;

/// Trait for reading scene hierarchies from files
pub trait SceneReader {
    fn read_scene<P: AsRef<Path>>(path: P) -> Result<SceneNode>;
}

/// Trait for writing scene hierarchies to files
pub trait SceneWriter {
    fn write_scene<P: AsRef<Path>>(root: &SceneNode, path: P) -> Result<()>;
}

/// Supported scene file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneFormat {
    Obj,
    Ply,
    Json,
}

impl SceneFormat {
    /// Detect the format from a file extension, case-insensitively
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|s| s.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("obj") => Ok(SceneFormat::Obj),
            Some("ply") => Ok(SceneFormat::Ply),
            Some("json") => Ok(SceneFormat::Json),
            Some(other) => Err(IoError::UnsupportedFormat {
                format: other.to_string(),
            }),
            None => Err(IoError::UnsupportedFormat {
                format: format!("{} (no extension)", path.display()),
            }),
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            SceneFormat::Obj => "obj",
            SceneFormat::Ply => "ply",
            SceneFormat::Json => "json",
        }
    }

    /// Whether node transforms and names survive a write
    pub fn preserves_hierarchy(&self) -> bool {
        matches!(self, SceneFormat::Json)
    }
}

/// Auto-detect format and load a scan as a mesh asset
///
/// # Arguments
/// * `path` - Path to an `.obj`, `.ply` or `.json` scene
///
/// # Returns
/// * `Result<MeshAsset>` - The loaded hierarchy, tagged with its source path
pub fn read_asset<P: AsRef<Path>>(path: P) -> Result<MeshAsset> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(IoError::FileNotFound {
            path: path.display().to_string(),
        });
    }

    let root = match SceneFormat::from_path(path)? {
        SceneFormat::Obj => ObjReader::read_scene(path)?,
        SceneFormat::Ply => PlyReader::read_scene(path)?,
        SceneFormat::Json => JsonSceneReader::read_scene(path)?,
    };
    let asset = MeshAsset::new(root).with_source(path);
    tracing::debug!(
        path = %path.display(),
        nodes = asset.root.node_count(),
        vertices = asset.vertex_count(),
        "Loaded scene"
    );
    Ok(asset)
}

/// Auto-detect format and write a scene, replacing any existing file
///
/// The format is checked before anything on disk is touched. Parent
/// directories are created as needed and the file is written through a
/// staging sibling, see [`staging::write_staged`].
pub fn write_scene<P: AsRef<Path>>(root: &SceneNode, path: P) -> Result<()> {
    let path = path.as_ref();
    let format = SceneFormat::from_path(path)?;

    staging::write_staged(path, |staging| match format {
        SceneFormat::Obj => ObjWriter::write_scene(root, staging),
        SceneFormat::Ply => PlyWriter::write_scene(root, staging),
        SceneFormat::Json => JsonSceneWriter::write_scene(root, staging),
    })?;

    tracing::debug!(path = %path.display(), format = format.extension(), "Wrote scene");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use floorscan_core::{Point3d, Transform3D, TriangleMesh, Vector3d};
    use std::fs;
    use std::path::PathBuf;

    fn scratch(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("floorscan_io_{}_{}", std::process::id(), name))
    }

    fn sample_scene() -> SceneNode {
        let mesh = TriangleMesh::from_vertices_and_faces(
            vec![Point3d::new(0.0, 0.0, 0.0), Point3d::new(1.0, 0.0, 0.0), Point3d::new(0.0, 0.0, 1.0)],
            vec![[0, 1, 2]],
        );
        SceneNode::named("combined").with_child(
            SceneNode::named("scan_0")
                .with_transform(Transform3D::translation(Vector3d::new(0.0, 0.0, 2.0)))
                .with_child(SceneNode::named("room").with_mesh(mesh)),
        )
    }

    #[test]
    fn test_format_detection() {
        assert_eq!(SceneFormat::from_path("a/b/scan.OBJ").unwrap(), SceneFormat::Obj);
        assert_eq!(SceneFormat::from_path("scan.ply").unwrap(), SceneFormat::Ply);
        assert_eq!(SceneFormat::from_path("scene.json").unwrap(), SceneFormat::Json);
        assert!(matches!(
            SceneFormat::from_path("scan.usdz"),
            Err(IoError::UnsupportedFormat { .. })
        ));
        assert!(SceneFormat::from_path("scan").is_err());
        assert!(SceneFormat::Json.preserves_hierarchy());
        assert!(!SceneFormat::Obj.preserves_hierarchy());
    }

    #[test]
    fn test_missing_file() {
        let err = read_asset(scratch("does_not_exist.obj")).unwrap_err();
        assert!(matches!(err, IoError::FileNotFound { .. }));
    }

    #[test]
    fn test_write_then_read_every_format() {
        let dir = scratch("formats");
        let scene = sample_scene();

        for format in [SceneFormat::Obj, SceneFormat::Ply, SceneFormat::Json] {
            let path = dir.join(format!("scene.{}", format.extension()));
            write_scene(&scene, &path).unwrap();

            let asset = read_asset(&path).unwrap();
            assert_eq!(asset.source_path(), Some(path.as_path()));
            // World-space geometry survives every format
            assert_eq!(asset.world_vertices()[2], Point3d::new(0.0, 0.0, 3.0));
            if format.preserves_hierarchy() {
                assert_eq!(asset.root, scene);
            }
        }

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_unsupported_output_leaves_disk_alone() {
        let dir = scratch("unsupported");
        let result = write_scene(&sample_scene(), dir.join("out.usdz"));
        assert!(matches!(result, Err(IoError::UnsupportedFormat { .. })));
        assert!(!dir.exists());
    }
}
