//! Polygon container for floor outlines

use crate::point::*;
use serde::{Deserialize, Serialize};
use std::ops::Index;

/// An implicitly closed 2D polygon
///
/// The last point connects back to the first. Outlines are serialized as an
/// ordered list of `[x, z]` pairs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<[f64; 2]>", into = "Vec<[f64; 2]>")]
pub struct Polygon {
    pub points: Vec<Point2d>,
}

impl Polygon {
    /// Create a new empty polygon
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Create a polygon from a vector of points
    pub fn from_points(points: Vec<Point2d>) -> Self {
        Self { points }
    }

    /// Get the number of vertices
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the polygon has no vertices
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// A polygon needs at least a triangle to enclose any area
    pub fn is_valid(&self) -> bool {
        self.points.len() >= 3
    }

    pub fn first(&self) -> Option<&Point2d> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&Point2d> {
        self.points.last()
    }

    /// Get an iterator over the vertices
    pub fn iter(&self) -> std::slice::Iter<'_, Point2d> {
        self.points.iter()
    }

    pub fn as_slice(&self) -> &[Point2d] {
        &self.points
    }

    /// Signed area via the shoelace formula; positive for counter-clockwise winding
    pub fn signed_area(&self) -> f64 {
        if self.points.len() < 3 {
            return 0.0;
        }
        let n = self.points.len();
        let twice_area: f64 = (0..n)
            .map(|i| {
                let a = self.points[i];
                let b = self.points[(i + 1) % n];
                a.x * b.y - b.x * a.y
            })
            .sum();
        twice_area / 2.0
    }

    /// Absolute enclosed area
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// Sum of edge lengths including the closing edge
    pub fn perimeter(&self) -> f64 {
        let n = self.points.len();
        if n < 2 {
            return 0.0;
        }
        (0..n)
            .map(|i| nalgebra::distance(&self.points[i], &self.points[(i + 1) % n]))
            .sum()
    }

    /// Vertices as `[x, z]` pairs for transport
    pub fn to_pairs(&self) -> Vec<[f64; 2]> {
        self.points.iter().map(|p| [p.x, p.y]).collect()
    }
}

impl Default for Polygon {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<usize> for Polygon {
    type Output = Point2d;

    fn index(&self, index: usize) -> &Self::Output {
        &self.points[index]
    }
}

impl IntoIterator for Polygon {
    type Item = Point2d;
    type IntoIter = std::vec::IntoIter<Point2d>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}

impl<'a> IntoIterator for &'a Polygon {
    type Item = &'a Point2d;
    type IntoIter = std::slice::Iter<'a, Point2d>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl FromIterator<Point2d> for Polygon {
    fn from_iter<I: IntoIterator<Item = Point2d>>(iter: I) -> Self {
        Self {
            points: Vec::from_iter(iter),
        }
    }
}

impl From<Vec<[f64; 2]>> for Polygon {
    fn from(pairs: Vec<[f64; 2]>) -> Self {
        pairs.into_iter().map(|[x, z]| Point2d::new(x, z)).collect()
    }
}

impl From<Polygon> for Vec<[f64; 2]> {
    fn from(polygon: Polygon) -> Self {
        polygon.to_pairs()
    }
}
