//! # floorscan
//!
//! Floor-plan outlines and combined scenes from 3D room scans.
//!
//! This is the umbrella crate that provides convenient access to all floorscan
//! functionality. You can use this crate to get everything in one place, or use
//! individual crates for more granular control over dependencies.
//!
//! ## Features
//!
//! - **Core**: Points, polygons, meshes, scene hierarchies, transforms and errors
//! - **Algorithms**: Floor selection, convex hull, polyline simplification, outlines
//! - **I/O**: OBJ, PLY and JSON scene files
//! - **Combine**: Placing several scans into one composite scene
//! - **Service**: JSON requests, structured error reports and async entry points
//!
//! ## Quick Start
//!
//! ```rust
//! use floorscan::prelude::*;
//!
//! let vertices = vec![
//!     Point3d::new(0.0, 0.0, 0.0),
//!     Point3d::new(3.0, 0.0, 0.0),
//!     Point3d::new(3.0, 0.0, 2.0),
//!     Point3d::new(0.0, 0.0, 2.0),
//!     Point3d::new(1.5, 2.4, 1.0),
//! ];
//! let outline = extract_outline(&vertices, &OutlineConfig::default()).unwrap();
//! assert_eq!(outline.polygon.len(), 4);
//! ```
//!
//! ## Feature Flags
//!
//! - `default`: Enables algorithms, io, combine and service
//! - `algorithms`: Outline extraction
//! - `io`: Scene file formats
//! - `combine`: Multi-scan combination
//! - `service`: Request handling and async wrappers
//! - `all`: Enables all features

// Re-export core functionality
pub use floorscan_core::*;

// Re-export sub-crates
#[cfg(feature = "algorithms")]
pub use floorscan_algorithms as algorithms;

#[cfg(feature = "io")]
pub use floorscan_io as io;

#[cfg(feature = "combine")]
pub use floorscan_combine as combine;

#[cfg(feature = "service")]
pub use floorscan_service as service;

/// Convenient imports for common use cases
pub mod prelude {
    pub use floorscan_core::{
        Bounded, Error, ErrorKind, MeshAsset, Point2d, Point3d, Polygon, Pose3, Result, ScanTransform,
        SceneNode, Transform3D, TriangleMesh, Vector2d, Vector3d,
    };

    #[cfg(feature = "algorithms")]
    pub use floorscan_algorithms::{
        convex_hull, extract_outline, extract_outline_from_asset, simplify, FloorProjector, Outline,
        OutlineConfig,
    };

    #[cfg(feature = "io")]
    pub use floorscan_io::{read_asset, write_scene, IoError, SceneFormat};

    #[cfg(feature = "combine")]
    pub use floorscan_combine::{
        combine_scans, AssetLoader, CombineConfig, CompositeScene, CompositeWriter, FileAssetLoader,
        FileSceneWriter, SceneCombiner,
    };

    #[cfg(feature = "service")]
    pub use floorscan_service::{
        generate_output_path, CombineRequest, CombineService, ErrorReport, OutlineRequest, OutlineService,
        ServiceConfig,
    };
}
