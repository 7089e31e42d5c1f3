//! Core data structures and traits for floorscan
//!
//! This crate provides the fundamental types shared by outline extraction and
//! scan combination: points and polygons, triangle meshes, scene node
//! hierarchies, placement transforms and the error taxonomy.

pub mod point;
pub mod polygon;
pub mod mesh;
pub mod scene;
pub mod traits;
pub mod transform;
pub mod config;
pub mod error;

pub use point::*;
pub use polygon::*;
pub use mesh::*;
pub use scene::*;
pub use traits::*;
pub use transform::*;
pub use config::*;
pub use error::*;

/// Re-export commonly used types from nalgebra
pub use nalgebra::{Point2, Point3, Vector2, Vector3, Matrix4, UnitQuaternion};
