//! 3D transformation utilities and scan placement poses

use crate::config::CANVAS_UNITS_TO_METERS;
use crate::error::{Error, Result};
use nalgebra::{Matrix4, Point3, Rotation3, Vector3};
use serde::{Deserialize, Serialize};

/// A 3D transformation that can be applied to points and scene nodes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform3D {
    pub matrix: Matrix4<f64>,
}

impl Transform3D {
    /// Create an identity transformation
    pub fn identity() -> Self {
        Self {
            matrix: Matrix4::identity(),
        }
    }

    /// Create a translation transformation
    pub fn translation(translation: Vector3<f64>) -> Self {
        Self {
            matrix: Matrix4::new_translation(&translation),
        }
    }

    /// Create a rotation about the vertical (+Y) axis
    pub fn rotation_y(angle: f64) -> Self {
        Self {
            matrix: Rotation3::from_axis_angle(&Vector3::y_axis(), angle).to_homogeneous(),
        }
    }

    /// Create a uniform scaling transformation
    pub fn uniform_scaling(scale: f64) -> Self {
        Self {
            matrix: Matrix4::new_scaling(scale),
        }
    }

    /// Apply the transformation to a point
    pub fn transform_point(&self, point: &Point3<f64>) -> Point3<f64> {
        let homogeneous = self.matrix * point.to_homogeneous();
        Point3::from_homogeneous(homogeneous).unwrap_or(*point)
    }

    /// Apply the transformation to a vector
    pub fn transform_vector(&self, vector: &Vector3<f64>) -> Vector3<f64> {
        self.matrix.fixed_view::<3, 3>(0, 0) * vector
    }

    /// Compose this transformation with another (`self` applied last)
    pub fn compose(self, other: Self) -> Self {
        Self {
            matrix: self.matrix * other.matrix,
        }
    }

    /// Translation component of the matrix
    pub fn translation_part(&self) -> Vector3<f64> {
        Vector3::new(self.matrix[(0, 3)], self.matrix[(1, 3)], self.matrix[(2, 3)])
    }

    /// Check if this is approximately the identity transformation
    pub fn is_identity(&self, epsilon: f64) -> bool {
        (self.matrix - Matrix4::identity()).norm() < epsilon
    }
}

impl Default for Transform3D {
    fn default() -> Self {
        Self::identity()
    }
}

impl std::ops::Mul for Transform3D {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.compose(rhs)
    }
}

/// Placement of one scan on the 2D authoring canvas
///
/// Positions are in canvas units, rotation in degrees (any value, the
/// trigonometry wraps it), scale is a uniform factor that must be positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanTransform {
    pub position_x: f64,
    pub position_y: f64,
    pub rotation: f64,
    pub scale: f64,
}

impl ScanTransform {
    pub fn new(position_x: f64, position_y: f64, rotation: f64, scale: f64) -> Self {
        Self {
            position_x,
            position_y,
            rotation,
            scale,
        }
    }

    /// Placement at the canvas origin with no rotation and unit scale
    pub fn identity() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }

    /// Reject non-finite fields and non-positive scales
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("positionX", self.position_x),
            ("positionY", self.position_y),
            ("rotation", self.rotation),
            ("scale", self.scale),
        ];
        if let Some((name, value)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(Error::validation(format!("{} must be finite, got {}", name, value)));
        }
        if self.scale <= 0.0 {
            return Err(Error::validation(format!(
                "scale must be positive, got {}",
                self.scale
            )));
        }
        Ok(())
    }
}

impl Default for ScanTransform {
    fn default() -> Self {
        Self::identity()
    }
}

/// Planar similarity pose of one scan inside a composite scene
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose3 {
    /// World translation in meters; the vertical component is always zero
    pub translation: Vector3<f64>,
    /// Rotation about the vertical axis
    pub yaw_radians: f64,
    pub uniform_scale: f64,
}

impl Pose3 {
    /// Resolve a canvas placement with the default canvas scale
    ///
    /// # Example
    /// ```rust
    /// use floorscan_core::{Pose3, ScanTransform};
    ///
    /// let pose = Pose3::resolve(&ScanTransform::new(200.0, 100.0, 0.0, 1.0)).unwrap();
    /// assert!((pose.translation.x - 2.0).abs() < 1e-12);
    /// assert!((pose.translation.z - 1.0).abs() < 1e-12);
    /// ```
    pub fn resolve(transform: &ScanTransform) -> Result<Self> {
        Self::resolve_with_scale(transform, CANVAS_UNITS_TO_METERS)
    }

    /// Resolve a canvas placement, mapping canvas `(x, y)` to world `(x, 0, z)`
    ///
    /// # Arguments
    /// * `transform` - Canvas placement of the scan
    /// * `canvas_scale` - Meters per canvas unit
    ///
    /// # Returns
    /// * `Result<Pose3>` - The pose, or `ValidationFailure` for a bad transform
    pub fn resolve_with_scale(transform: &ScanTransform, canvas_scale: f64) -> Result<Self> {
        transform.validate()?;
        Ok(Self {
            translation: Vector3::new(
                transform.position_x * canvas_scale,
                0.0,
                transform.position_y * canvas_scale,
            ),
            yaw_radians: transform.rotation.to_radians(),
            uniform_scale: transform.scale,
        })
    }

    /// Homogeneous matrix: translate, then yaw, then scale (applied right to left)
    pub fn to_transform(&self) -> Transform3D {
        Transform3D::translation(self.translation)
            * Transform3D::rotation_y(self.yaw_radians)
            * Transform3D::uniform_scaling(self.uniform_scale)
    }
}

impl Default for Pose3 {
    fn default() -> Self {
        Self {
            translation: Vector3::zeros(),
            yaw_radians: 0.0,
            uniform_scale: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_resolve_translation_uses_canvas_scale() {
        let pose = Pose3::resolve(&ScanTransform::new(200.0, 100.0, 0.0, 1.0)).unwrap();
        assert_relative_eq!(pose.translation.x, 2.0);
        assert_eq!(pose.translation.y, 0.0);
        assert_relative_eq!(pose.translation.z, 1.0);
        assert_eq!(pose.uniform_scale, 1.0);
    }

    #[test]
    fn test_resolve_rotation_to_radians() {
        let pose = Pose3::resolve(&ScanTransform::new(0.0, 0.0, 90.0, 1.0)).unwrap();
        assert!((pose.yaw_radians - FRAC_PI_2).abs() < 1e-6);

        let pose = Pose3::resolve(&ScanTransform::new(0.0, 0.0, -180.0, 1.0)).unwrap();
        assert_relative_eq!(pose.yaw_radians, -PI);
    }

    #[test]
    fn test_resolve_rejects_non_positive_scale() {
        for scale in [0.0, -1.0] {
            let err = Pose3::resolve(&ScanTransform::new(0.0, 0.0, 0.0, scale)).unwrap_err();
            assert!(matches!(err, Error::ValidationFailure { index: None, .. }));
        }
    }

    #[test]
    fn test_resolve_rejects_non_finite_fields() {
        let err = Pose3::resolve(&ScanTransform::new(f64::NAN, 0.0, 0.0, 1.0)).unwrap_err();
        assert!(err.to_string().contains("positionX"));
    }

    #[test]
    fn test_resolve_with_custom_scale() {
        let pose = Pose3::resolve_with_scale(&ScanTransform::new(3.0, 4.0, 0.0, 2.0), 1.0).unwrap();
        assert_eq!(pose.translation, Vector3::new(3.0, 0.0, 4.0));
        assert_eq!(pose.uniform_scale, 2.0);
    }

    #[test]
    fn test_pose_transform_order() {
        // Scale first, then yaw, then translate
        let pose = Pose3 {
            translation: Vector3::new(10.0, 0.0, 0.0),
            yaw_radians: FRAC_PI_2,
            uniform_scale: 2.0,
        };
        let moved = pose.to_transform().transform_point(&Point3::new(1.0, 1.0, 0.0));

        // (1, 1, 0) * 2 = (2, 2, 0); +90 deg about Y sends +X to -Z
        assert_relative_eq!(moved.x, 10.0, epsilon = 1e-12);
        assert_relative_eq!(moved.y, 2.0, epsilon = 1e-12);
        assert_relative_eq!(moved.z, -2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_translation_part() {
        let t = Transform3D::translation(Vector3::new(1.0, 2.0, 3.0)) * Transform3D::rotation_y(0.3);
        assert_eq!(t.translation_part(), Vector3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_scan_transform_serde_keys() {
        let t: ScanTransform = serde_json::from_str(
            r#"{"positionX": 150.0, "positionY": 0.0, "rotation": 90.0, "scale": 1.0}"#,
        )
        .unwrap();
        assert_eq!(t, ScanTransform::new(150.0, 0.0, 90.0, 1.0));
    }
}
