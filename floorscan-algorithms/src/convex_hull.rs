//! Graham-scan convex hull over 2D point sets

use crate::point_ops::{cross, distance, polar_angle};
use floorscan_core::{Point2d, Polygon};
use itertools::Itertools;
use std::cmp::Ordering;

/// Compute the convex hull of a 2D point set using the Graham scan
///
/// The result is counter-clockwise, starts at the pivot (lowest y, then
/// lowest x) and contains no collinear vertices. Fewer than 3 input points
/// are returned unchanged. Collinear input degenerates to its two extreme
/// points; callers decide whether that is usable.
///
/// # Arguments
/// * `points` - Input points in any order, duplicates allowed
///
/// # Returns
/// * `Polygon` - Hull vertices in counter-clockwise order
///
/// # Example
/// ```rust
/// use floorscan_core::Point2d;
/// use floorscan_algorithms::convex_hull;
///
/// let hull = convex_hull(&[
///     Point2d::new(0.0, 0.0),
///     Point2d::new(2.0, 0.0),
///     Point2d::new(1.0, 0.5),
///     Point2d::new(2.0, 2.0),
///     Point2d::new(0.0, 2.0),
/// ]);
/// assert_eq!(hull.len(), 4);
/// ```
pub fn convex_hull(points: &[Point2d]) -> Polygon {
    if points.len() < 3 {
        return Polygon::from_points(points.to_vec());
    }

    let pivot = find_pivot(points);

    let mut sorted = points.to_vec();
    sorted.sort_by(|a, b| compare_around_pivot(&pivot, a, b));

    let mut hull: Vec<Point2d> = Vec::with_capacity(sorted.len());
    for point in sorted {
        // Pop while the last two points and the new one fail to turn left
        while hull.len() >= 2 {
            let n = hull.len();
            if cross(&hull[n - 2], &hull[n - 1], &point) <= 0.0 {
                hull.pop();
            } else {
                break;
            }
        }
        hull.push(point);
    }

    Polygon::from_points(hull)
}

/// Lowest y, ties broken by lowest x
fn find_pivot(points: &[Point2d]) -> Point2d {
    let mut pivot = points[0];
    for p in &points[1..] {
        if p.y < pivot.y || (p.y == pivot.y && p.x < pivot.x) {
            pivot = *p;
        }
    }
    pivot
}

/// Ascending polar angle, nearer point first on equal angles
fn compare_around_pivot(pivot: &Point2d, a: &Point2d, b: &Point2d) -> Ordering {
    polar_angle(pivot, a)
        .total_cmp(&polar_angle(pivot, b))
        .then_with(|| distance(pivot, a).total_cmp(&distance(pivot, b)))
}

/// Check that every consecutive triple turns strictly left
///
/// `epsilon` is the largest cross product still treated as "not a left turn".
pub fn is_convex_ccw(polygon: &Polygon, epsilon: f64) -> bool {
    if polygon.len() < 3 {
        return false;
    }
    polygon
        .iter()
        .circular_tuple_windows::<(_, _, _)>()
        .all(|(a, b, c)| cross(a, b, c) > epsilon)
}

/// Check whether `point` lies inside or on the boundary of a counter-clockwise convex polygon
pub fn contains_point(polygon: &Polygon, point: &Point2d, epsilon: f64) -> bool {
    if polygon.len() < 3 {
        return false;
    }
    polygon
        .iter()
        .circular_tuple_windows::<(_, _)>()
        .all(|(a, b)| cross(a, b, point) >= -epsilon)
}
