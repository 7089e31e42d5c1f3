//! Named constants shared by the outline and combination pipelines
//!
//! All lengths are meters. Room scans are assumed to be authored in meters;
//! the source asset's declared unit system is not inspected.

/// Height band above the lowest vertex that still counts as floor, in meters
pub const DEFAULT_FLOOR_EPSILON: f64 = 0.05;

/// Perpendicular distance under which outline vertices are dropped, in meters
pub const DEFAULT_SIMPLIFY_TOLERANCE: f64 = 0.05;

/// Meters per canvas unit (canvas pixels to world meters)
pub const CANVAS_UNITS_TO_METERS: f64 = 0.01;

/// Name prefix of the per-scan container nodes in a composite scene
pub const SCAN_CONTAINER_PREFIX: &str = "scan_";

/// Name of the synthetic root of a composite scene
pub const COMPOSITE_ROOT_NAME: &str = "combined";

/// Minimum number of scans a combination needs
pub const MIN_SCANS_TO_COMBINE: usize = 2;

/// Minimum number of floor vertices an outline needs
pub const MIN_FLOOR_VERTICES: usize = 3;
