use dharm_core::{JointList, JointParameters};
use serde::Deserialize;

pub trait Configurable: Clone {
    fn global(&self) -> &GlobalConfig;
}

/// Dharm global configuration.
#[derive(Clone, Debug)]
pub struct GlobalConfig {
    /// Name of the binary.
    pub bin_name: String,

    /// Whether the application runs as daemon.
    pub daemon: bool,
}

impl Configurable for GlobalConfig {
    fn global(&self) -> &GlobalConfig {
        self
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            bin_name: String::new(),
            daemon: false,
        }
    }
}

/// Arm description.
///
/// Explicit joints take precedence over the preset. Without either the
/// reference arm is used.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct ArmConfig {
    /// Arm name.
    pub name: Option<String>,
    /// Number of joints taken from the reference arm.
    pub preset: Option<usize>,
    /// Joints, base first.
    #[serde(default, rename = "joint")]
    pub joints: Vec<JointParameters>,
}

impl ArmConfig {
    /// Joint list described by this configuration.
    pub fn joint_list(&self) -> JointList {
        if !self.joints.is_empty() {
            self.joints.clone()
        } else {
            dharm_core::default_joint_list(self.preset.unwrap_or(dharm_core::DEFAULT_DOF))
        }
    }

    /// Display name of the arm.
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("unnamed")
    }
}
