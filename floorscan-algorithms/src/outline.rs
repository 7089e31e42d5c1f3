//! Floor-plan outline extraction pipeline

use crate::convex_hull::convex_hull;
use crate::floor::{project, select_floor};
use crate::simplify::simplify;
use floorscan_core::{
    Error, MeshAsset, Point3d, Polygon, Result, DEFAULT_FLOOR_EPSILON,
    DEFAULT_SIMPLIFY_TOLERANCE, MIN_FLOOR_VERTICES,
};

/// Configuration for outline extraction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutlineConfig {
    /// Height band above the lowest vertex that counts as floor, in meters
    pub floor_epsilon: f64,
    /// Simplification tolerance, in meters
    pub simplify_tolerance: f64,
}

impl Default for OutlineConfig {
    fn default() -> Self {
        Self {
            floor_epsilon: DEFAULT_FLOOR_EPSILON,
            simplify_tolerance: DEFAULT_SIMPLIFY_TOLERANCE,
        }
    }
}

impl OutlineConfig {
    pub fn with_floor_epsilon(mut self, floor_epsilon: f64) -> Self {
        self.floor_epsilon = floor_epsilon;
        self
    }

    pub fn with_simplify_tolerance(mut self, simplify_tolerance: f64) -> Self {
        self.simplify_tolerance = simplify_tolerance;
        self
    }

    /// Both thresholds must be finite and non-negative
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("floor_epsilon", self.floor_epsilon),
            ("simplify_tolerance", self.simplify_tolerance),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::validation(format!(
                    "{} must be a non-negative number, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

/// Outline plus the sizes of each pipeline stage
#[derive(Debug, Clone, PartialEq)]
pub struct Outline {
    pub polygon: Polygon,
    pub vertex_count: usize,
    pub floor_vertex_count: usize,
    pub hull_size: usize,
}

/// Extract a floor-plan outline from world-space vertices
///
/// Selects floor-level vertices, projects them to `(x, z)`, computes their
/// convex hull and simplifies it.
///
/// # Arguments
/// * `vertices` - World-space mesh vertices, Y up
/// * `config` - Floor band and simplification tolerance
///
/// # Returns
/// * `Result<Outline>` - `InsufficientData` when the cloud is empty, fewer
///   than 3 vertices lie on the floor, or the floor points are collinear
///
/// # Example
/// ```rust
/// use floorscan_core::Point3d;
/// use floorscan_algorithms::{extract_outline, OutlineConfig};
///
/// fn main() -> floorscan_core::Result<()> {
///     let vertices = vec![
///         Point3d::new(0.0, 0.0, 0.0),
///         Point3d::new(1.0, 0.0, 0.0),
///         Point3d::new(1.0, 0.0, 1.0),
///         Point3d::new(0.0, 0.0, 1.0),
///         Point3d::new(0.5, 2.5, 0.5),
///     ];
///     let outline = extract_outline(&vertices, &OutlineConfig::default())?;
///     assert_eq!(outline.polygon.len(), 4);
///     Ok(())
/// }
/// ```
pub fn extract_outline(vertices: &[Point3d], config: &OutlineConfig) -> Result<Outline> {
    config.validate()?;

    if vertices.is_empty() {
        return Err(Error::InsufficientData("no vertices found in scene".to_string()));
    }

    let floor = select_floor(vertices, config.floor_epsilon);
    tracing::debug!(
        vertex_count = vertices.len(),
        floor_vertex_count = floor.len(),
        "Selected floor vertices"
    );
    if floor.len() < MIN_FLOOR_VERTICES {
        return Err(Error::InsufficientData(format!(
            "not enough floor vertices found: {} (need {})",
            floor.len(),
            MIN_FLOOR_VERTICES
        )));
    }

    let hull = convex_hull(&project(&floor));
    if !hull.is_valid() {
        return Err(Error::InsufficientData(format!(
            "floor vertices are collinear; hull has {} points",
            hull.len()
        )));
    }

    let polygon = simplify(hull.as_slice(), config.simplify_tolerance);
    tracing::debug!(hull_size = hull.len(), outline_size = polygon.len(), "Simplified hull");

    Ok(Outline {
        polygon,
        vertex_count: vertices.len(),
        floor_vertex_count: floor.len(),
        hull_size: hull.len(),
    })
}

/// Extract an outline from every mesh of a loaded asset
pub fn extract_outline_from_asset(asset: &MeshAsset, config: &OutlineConfig) -> Result<Outline> {
    let vertices = asset.world_vertices();
    tracing::debug!(source = %asset.display_name(), vertex_count = vertices.len(), "Collected world vertices");
    extract_outline(&vertices, config)
}
