use nalgebra::Vector3;

use crate::pose::JointPose;
use crate::transform::Transform;

/// Vectors with a norm at or below this value are left unnormalized.
pub const NORM_EPSILON: f64 = 1e-12;

#[inline]
fn normalize_guarded(vector: Vector3<f64>) -> Vector3<f64> {
    let norm = vector.norm();
    if norm > NORM_EPSILON {
        vector / norm
    } else {
        vector
    }
}

/// Interpret a cumulative transform as a joint pose.
///
/// The basis is rebuilt with Z as anchor: Z is normalized, X is made
/// orthogonal to Z and Y is reconstructed as `Z x X`. The raw middle
/// column is never read, so the result is right-handed even when the
/// rotation block drifted.
pub fn interpret(transform: &Transform) -> JointPose {
    let position = transform.translation();

    let z_axis = normalize_guarded(transform.rotation_column(2));

    let x_raw = transform.rotation_column(0);
    let x_axis = normalize_guarded(x_raw - z_axis * x_raw.dot(&z_axis));

    let y_axis = normalize_guarded(z_axis.cross(&x_axis));

    JointPose {
        position,
        x_axis,
        y_axis,
        z_axis,
    }
}

/// Interpret every transform, preserving order.
pub fn interpret_all(transforms: &[Transform]) -> Vec<JointPose> {
    transforms.iter().map(interpret).collect()
}
