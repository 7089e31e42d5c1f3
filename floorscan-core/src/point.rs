//! Point types and related functionality

use nalgebra::{Point2, Point3, Vector2, Vector3};

/// A 3D point with double precision coordinates, in world units (meters)
pub type Point3d = Point3<f64>;

/// A 2D point with double precision coordinates
///
/// Floor-plane projections store the world Z axis in the second coordinate.
pub type Point2d = Point2<f64>;

/// A 3D vector with double precision components
pub type Vector3d = Vector3<f64>;

/// A 2D vector with double precision components
pub type Vector2d = Vector2<f64>;

/// Project a world-space point onto the floor plane, `(x, y, z) -> (x, z)`
#[inline]
pub fn floor_projection(point: &Point3d) -> Point2d {
    Point2d::new(point.x, point.z)
}
