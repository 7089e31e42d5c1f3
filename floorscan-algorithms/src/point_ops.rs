//! 2D point primitives

use floorscan_core::Point2d;

/// Direction of the turn `a -> b -> c`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    CounterClockwise,
    Clockwise,
    Collinear,
}

/// Signed cross product of `(b - a) x (c - a)`
///
/// Positive for a counter-clockwise (left) turn, negative for clockwise,
/// zero when the three points are collinear.
#[inline]
pub fn cross(a: &Point2d, b: &Point2d, c: &Point2d) -> f64 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

/// Euclidean distance between two points
#[inline]
pub fn distance(a: &Point2d, b: &Point2d) -> f64 {
    nalgebra::distance(a, b)
}

/// Polar angle of `p` around `pivot`, in `(-pi, pi]`
#[inline]
pub fn polar_angle(pivot: &Point2d, p: &Point2d) -> f64 {
    (p.y - pivot.y).atan2(p.x - pivot.x)
}

/// Exact orientation of the turn `a -> b -> c`
pub fn orientation(a: &Point2d, b: &Point2d, c: &Point2d) -> Orientation {
    let value = cross(a, b, c);
    if value > 0.0 {
        Orientation::CounterClockwise
    } else if value < 0.0 {
        Orientation::Clockwise
    } else {
        Orientation::Collinear
    }
}

/// Collinearity test with an area tolerance
///
/// `epsilon` bounds twice the area of the triangle `a, b, c`.
pub fn is_collinear(a: &Point2d, b: &Point2d, c: &Point2d, epsilon: f64) -> bool {
    cross(a, b, c).abs() <= epsilon
}

/// Perpendicular distance from `p` to the infinite line through `a` and `b`
///
/// Defined as 0 when `a == b`.
pub fn perpendicular_distance(p: &Point2d, a: &Point2d, b: &Point2d) -> f64 {
    let length = distance(a, b);
    if length == 0.0 {
        return 0.0;
    }
    cross(a, b, p).abs() / length
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_cross_sign() {
        let a = Point2d::new(0.0, 0.0);
        let b = Point2d::new(1.0, 0.0);
        assert!(cross(&a, &b, &Point2d::new(1.0, 1.0)) > 0.0);
        assert!(cross(&a, &b, &Point2d::new(1.0, -1.0)) < 0.0);
        assert_eq!(cross(&a, &b, &Point2d::new(2.0, 0.0)), 0.0);
    }

    #[test]
    fn test_orientation() {
        let a = Point2d::new(0.0, 0.0);
        let b = Point2d::new(2.0, 2.0);
        assert_eq!(orientation(&a, &b, &Point2d::new(0.0, 2.0)), Orientation::CounterClockwise);
        assert_eq!(orientation(&a, &b, &Point2d::new(2.0, 0.0)), Orientation::Clockwise);
        assert_eq!(orientation(&a, &b, &Point2d::new(3.0, 3.0)), Orientation::Collinear);
    }

    #[test]
    fn test_is_collinear_with_tolerance() {
        let a = Point2d::new(0.0, 0.0);
        let b = Point2d::new(1.0, 0.0);
        let c = Point2d::new(2.0, 1e-9);
        assert!(is_collinear(&a, &b, &c, 1e-6));
        assert!(!is_collinear(&a, &b, &c, 0.0));
    }

    #[test]
    fn test_perpendicular_distance() {
        let a = Point2d::new(0.0, 0.0);
        let b = Point2d::new(4.0, 0.0);
        assert_relative_eq!(perpendicular_distance(&Point2d::new(2.0, 3.0), &a, &b), 3.0);
        // Measured to the line, not the segment
        assert_relative_eq!(perpendicular_distance(&Point2d::new(10.0, -1.0), &a, &b), 1.0);
        assert_eq!(perpendicular_distance(&Point2d::new(5.0, 5.0), &a, &a), 0.0);
    }

    #[test]
    fn test_polar_angle() {
        let pivot = Point2d::new(1.0, 1.0);
        assert_relative_eq!(polar_angle(&pivot, &Point2d::new(2.0, 1.0)), 0.0);
        assert_relative_eq!(polar_angle(&pivot, &Point2d::new(1.0, 2.0)), std::f64::consts::FRAC_PI_2);
        assert_relative_eq!(distance(&pivot, &Point2d::new(4.0, 5.0)), 5.0);
    }
}
