use crate::joint::{JointList, JointParameters};
use crate::pose::JointPose;
use crate::transform::Transform;

/// Forward kinematics over a snapshot of joint parameters.
pub struct ForwardKinematics {
    joints: JointList,
}

impl ForwardKinematics {
    /// Construct a solver over a snapshot of joints.
    pub fn new(joints: JointList) -> Self {
        Self { joints }
    }

    /// Input snapshot.
    #[inline]
    pub fn joints(&self) -> &[JointParameters] {
        &self.joints
    }

    /// Cumulative base-to-joint transforms, one per joint.
    pub fn transforms(&self) -> Vec<Transform> {
        let normalized = super::normalize_units(&self.joints);
        super::compose_all(&normalized)
    }

    /// Pose of every joint frame in the base frame.
    pub fn solve(&self) -> Vec<JointPose> {
        let transforms = self.transforms();
        log::trace!("Composed {} joint transforms", transforms.len());

        if log::log_enabled!(log::Level::Trace) {
            for (idx, transform) in transforms.iter().enumerate() {
                log::trace!("Joint {} transform:\n{}", idx + 1, transform);
            }
        }

        super::interpret_all(&transforms)
    }
}

impl From<&[JointParameters]> for ForwardKinematics {
    fn from(value: &[JointParameters]) -> Self {
        Self::new(value.to_vec())
    }
}
