use crate::joint::NormalizedJoint;
use crate::transform::Transform;

/// Compose the base-to-joint transform for every joint.
///
/// The running transform starts at identity and each local transform is
/// chained on the right. An empty chain yields no transforms.
pub fn compose_all(joints: &[NormalizedJoint]) -> Vec<Transform> {
    let mut transforms = Vec::with_capacity(joints.len());

    let mut cumulative = Transform::identity();

    for joint in joints {
        cumulative = cumulative * Transform::from_dh(joint);
        transforms.push(cumulative);
    }

    transforms
}
