//! Denavit-Hartenberg forward kinematics.
//!
//! Given an ordered list of joints, [`compute`] returns the position and
//! orientation of every joint frame expressed in the base frame.

pub mod algorithm;
pub mod joint;
pub mod pose;
pub mod preset;
pub mod transform;

pub use nalgebra;

pub use self::joint::{JointList, JointParameters, NormalizedJoint};
pub use self::pose::JointPose;
pub use self::preset::{default_joint_list, joint_names, COLUMN_HEADERS, DEFAULT_DOF};
pub use self::transform::Transform;

/// Compute the pose of every joint.
///
/// The result has the same length and order as the input. The function is
/// total: non-finite parameters propagate into the poses.
pub fn compute(joints: &[JointParameters]) -> Vec<JointPose> {
    algorithm::ForwardKinematics::from(joints).solve()
}
