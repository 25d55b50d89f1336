use std::f64::consts::FRAC_PI_2;

use crate::joint::{JointList, JointParameters};

/// Number of joints in the reference arm.
pub const DEFAULT_DOF: usize = 6;

/// Reference six joint arm.
pub const REFERENCE_ARM: [JointParameters; DEFAULT_DOF] = [
    JointParameters::new(15.0, 0.0, 0.213, FRAC_PI_2),
    JointParameters::new(-50.0, -0.8, 0.193, 0.0),
    JointParameters::new(-60.0, -0.590, -0.160, 0.0),
    JointParameters::new(95.0, 0.0, 0.250, FRAC_PI_2),
    JointParameters::new(50.0, 0.0, 0.280, -FRAC_PI_2),
    JointParameters::new(0.0, 0.0, 0.250, 0.0),
];

/// Column headers, with units.
pub const COLUMN_HEADERS: [&str; 4] = ["theta (deg)", "a (m)", "d (m)", "alpha (rad)"];

/// Reference joint list of `count` joints.
///
/// The reference arm is truncated when fewer joints are requested and
/// padded with zero joints when more are requested.
pub fn default_joint_list(count: usize) -> JointList {
    REFERENCE_ARM
        .iter()
        .copied()
        .chain(std::iter::repeat(JointParameters::zero()))
        .take(count)
        .collect()
}

/// Display names for `count` joints, counting from one.
pub fn joint_names(count: usize) -> Vec<String> {
    (1..=count).map(|idx| format!("Joint {}", idx)).collect()
}
