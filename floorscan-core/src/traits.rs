//! Core traits for floorscan

use crate::{mesh::*, point::*, polygon::Polygon, scene::MeshAsset, transform::Transform3D};

/// Trait for objects with an axis-aligned extent
pub trait Bounded {
    type Point;

    /// Get the bounding box of the object, `None` when it has no points
    fn bounding_box(&self) -> Option<(Self::Point, Self::Point)>;
}

/// Trait for objects that can be transformed
pub trait Transformable {
    /// Apply a transformation to the object
    fn transform(&mut self, transform: &Transform3D);
}

fn bounds_3d<'a>(points: impl IntoIterator<Item = &'a Point3d>) -> Option<(Point3d, Point3d)> {
    let mut iter = points.into_iter();
    let first = *iter.next()?;
    Some(iter.fold((first, first), |(min, max), p| {
        (min.inf(p), max.sup(p))
    }))
}

impl Bounded for Polygon {
    type Point = Point2d;

    fn bounding_box(&self) -> Option<(Point2d, Point2d)> {
        let mut iter = self.iter();
        let first = *iter.next()?;
        Some(iter.fold((first, first), |(min, max), p| {
            (min.inf(p), max.sup(p))
        }))
    }
}

impl Bounded for TriangleMesh {
    type Point = Point3d;

    fn bounding_box(&self) -> Option<(Point3d, Point3d)> {
        bounds_3d(&self.vertices)
    }
}

impl Bounded for MeshAsset {
    type Point = Point3d;

    /// World-space bounds over every mesh in the hierarchy
    fn bounding_box(&self) -> Option<(Point3d, Point3d)> {
        bounds_3d(&self.world_vertices())
    }
}

impl Transformable for TriangleMesh {
    fn transform(&mut self, transform: &Transform3D) {
        for vertex in &mut self.vertices {
            *vertex = transform.transform_point(vertex);
        }
        if let Some(normals) = &mut self.normals {
            for normal in normals.iter_mut() {
                let n = transform.transform_vector(normal);
                *normal = if n.norm() > 0.0 { n.normalize() } else { n };
            }
        }
    }
}
