//! Floor-level vertex selection and projection onto the floor plane

use floorscan_core::{floor_projection, Point2d, Point3d, DEFAULT_FLOOR_EPSILON};
use rayon::prelude::*;

/// Selects floor vertices of a world-space point cloud and flattens them
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloorProjector {
    /// Height band above the lowest vertex, in meters
    pub epsilon: f64,
}

impl FloorProjector {
    pub fn new(epsilon: f64) -> Self {
        Self { epsilon }
    }

    /// Vertices within `epsilon` of the lowest one
    pub fn select_floor(&self, vertices: &[Point3d]) -> Vec<Point3d> {
        select_floor(vertices, self.epsilon)
    }

    /// Select floor vertices and map them onto the XZ plane
    pub fn project_floor(&self, vertices: &[Point3d]) -> Vec<Point2d> {
        project(&self.select_floor(vertices))
    }
}

impl Default for FloorProjector {
    fn default() -> Self {
        Self::new(DEFAULT_FLOOR_EPSILON)
    }
}

/// Height of the lowest vertex, `None` for an empty cloud
pub fn floor_level(vertices: &[Point3d]) -> Option<f64> {
    if vertices.is_empty() {
        return None;
    }
    Some(
        vertices
            .par_iter()
            .map(|v| v.y)
            .reduce(|| f64::INFINITY, f64::min),
    )
}

/// Keep every vertex with `y <= min_y + epsilon`
///
/// Input order is preserved. An empty input has no floor and yields an
/// empty result.
///
/// # Arguments
/// * `vertices` - World-space vertices, Y up
/// * `epsilon` - Height band above the lowest vertex, in meters
///
/// # Returns
/// * `Vec<Point3d>` - Floor-level vertices
pub fn select_floor(vertices: &[Point3d], epsilon: f64) -> Vec<Point3d> {
    let Some(min_y) = floor_level(vertices) else {
        return Vec::new();
    };
    let threshold = min_y + epsilon;

    vertices
        .par_iter()
        .filter(|v| v.y <= threshold)
        .copied()
        .collect()
}

/// Map `(x, y, z)` to `(x, z)`, preserving order
pub fn project(vertices: &[Point3d]) -> Vec<Point2d> {
    vertices.iter().map(floor_projection).collect()
}
