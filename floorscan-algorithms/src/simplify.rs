//! Ramer–Douglas–Peucker polyline simplification

use crate::point_ops::perpendicular_distance;
use floorscan_core::{Point2d, Polygon};

/// Simplify an open polyline with the Ramer–Douglas–Peucker algorithm
///
/// The first and last points are anchors and are always kept; the closing
/// edge of a polygon is not considered. A point is kept only when its
/// distance to the current chord is strictly greater than `tolerance`.
/// Negative tolerances behave like zero.
///
/// The recursion is unrolled onto an explicit work stack, so adversarial
/// inputs cannot exhaust the call stack. The output is the same as the
/// textbook recursive formulation.
///
/// # Arguments
/// * `points` - Polyline vertices
/// * `tolerance` - Distance threshold in the same units as the coordinates
///
/// # Returns
/// * `Polygon` - The retained vertices in input order
///
/// # Example
/// ```rust
/// use floorscan_core::Point2d;
/// use floorscan_algorithms::simplify;
///
/// let line = [
///     Point2d::new(0.0, 0.0),
///     Point2d::new(1.0, 0.01),
///     Point2d::new(2.0, 0.0),
/// ];
/// assert_eq!(simplify(&line, 0.05).len(), 2);
/// ```
pub fn simplify(points: &[Point2d], tolerance: f64) -> Polygon {
    if points.len() <= 2 {
        return Polygon::from_points(points.to_vec());
    }
    let tolerance = tolerance.max(0.0);

    let last = points.len() - 1;
    let mut keep = vec![false; points.len()];
    keep[0] = true;
    keep[last] = true;

    let mut stack = vec![(0usize, last)];
    while let Some((start, end)) = stack.pop() {
        if end - start < 2 {
            continue;
        }

        if let Some((index, max_distance)) = farthest_interior(points, start, end) {
            if max_distance > tolerance {
                keep[index] = true;
                stack.push((index, end));
                stack.push((start, index));
            }
        }
    }

    points
        .iter()
        .zip(keep)
        .filter_map(|(p, kept)| kept.then_some(*p))
        .collect()
}

/// Interior point of `points[start..=end]` farthest from the chord; the first one wins ties
fn farthest_interior(points: &[Point2d], start: usize, end: usize) -> Option<(usize, f64)> {
    let (a, b) = (&points[start], &points[end]);
    let mut best: Option<(usize, f64)> = None;
    let mut max_distance = 0.0;

    for (i, p) in points.iter().enumerate().take(end).skip(start + 1) {
        let d = perpendicular_distance(p, a, b);
        if d > max_distance {
            max_distance = d;
            best = Some((i, d));
        }
    }
    best
}
