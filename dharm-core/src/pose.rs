use nalgebra::{Point3, Vector3};
use serde::Serialize;

/// Position and orientation of a joint frame in the base frame.
///
/// The axes form a right-handed orthonormal basis.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct JointPose {
    /// Frame origin in meters.
    pub position: Point3<f64>,
    /// Frame X axis.
    pub x_axis: Vector3<f64>,
    /// Frame Y axis.
    pub y_axis: Vector3<f64>,
    /// Frame Z axis, the joint axis.
    pub z_axis: Vector3<f64>,
}

impl JointPose {
    /// Pose of the base frame.
    pub fn base() -> Self {
        Self {
            position: Point3::origin(),
            x_axis: Vector3::x(),
            y_axis: Vector3::y(),
            z_axis: Vector3::z(),
        }
    }

    /// Check whether the axes are unit length, mutually perpendicular and
    /// right-handed within `tolerance`.
    pub fn is_orthonormal(&self, tolerance: f64) -> bool {
        let unit = [self.x_axis, self.y_axis, self.z_axis]
            .iter()
            .all(|axis| (axis.norm() - 1.0).abs() < tolerance);

        let orthogonal = self.x_axis.dot(&self.y_axis).abs() < tolerance
            && self.y_axis.dot(&self.z_axis).abs() < tolerance
            && self.z_axis.dot(&self.x_axis).abs() < tolerance;

        let right_handed = (self.x_axis.cross(&self.y_axis) - self.z_axis).norm() < tolerance;

        unit && orthogonal && right_handed
    }
}

impl std::fmt::Display for JointPose {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{:.3}, {:.3}, {:.3}] X=({:+.3}, {:+.3}, {:+.3}) Y=({:+.3}, {:+.3}, {:+.3}) Z=({:+.3}, {:+.3}, {:+.3})",
            self.position.x,
            self.position.y,
            self.position.z,
            self.x_axis.x,
            self.x_axis.y,
            self.x_axis.z,
            self.y_axis.x,
            self.y_axis.y,
            self.y_axis.z,
            self.z_axis.x,
            self.z_axis.y,
            self.z_axis.z,
        )
    }
}
