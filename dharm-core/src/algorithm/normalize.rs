use crate::joint::{JointParameters, NormalizedJoint};

/// Convert every joint angle from degrees to radians.
///
/// Lengths and the link twist are passed through unchanged.
pub fn normalize_units(joints: &[JointParameters]) -> Vec<NormalizedJoint> {
    joints.iter().map(JointParameters::normalize).collect()
}
