use serde::{Deserialize, Serialize};

/// Joint described by its Denavit-Hartenberg parameters.
///
/// The joint angle is expressed in degrees, as entered by an operator.
/// The link twist is already in radians and is never converted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct JointParameters {
    /// Joint angle in degrees.
    #[serde(default)]
    pub theta: f64,
    /// Link length in meters.
    #[serde(default)]
    pub a: f64,
    /// Link offset in meters.
    #[serde(default)]
    pub d: f64,
    /// Link twist in radians.
    #[serde(default)]
    pub alpha: f64,
}

impl JointParameters {
    /// Construct a new joint.
    pub const fn new(theta: f64, a: f64, d: f64, alpha: f64) -> Self {
        Self { theta, a, d, alpha }
    }

    /// Joint with all parameters set to zero.
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    /// Convert the joint into the canonical radians/meters representation.
    #[inline]
    pub fn normalize(&self) -> NormalizedJoint {
        NormalizedJoint {
            theta: self.theta.to_radians(),
            a: self.a,
            d: self.d,
            alpha: self.alpha,
        }
    }
}

impl std::fmt::Display for JointParameters {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "θ={:.3}° a={:.3}m d={:.3}m α={:.3}rad",
            self.theta, self.a, self.d, self.alpha
        )
    }
}

/// Joint with every angle in radians.
///
/// Produced by [`JointParameters::normalize`]. The composer only accepts
/// this type, so a joint cannot be converted twice.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NormalizedJoint {
    /// Joint angle in radians.
    pub theta: f64,
    /// Link length in meters.
    pub a: f64,
    /// Link offset in meters.
    pub d: f64,
    /// Link twist in radians.
    pub alpha: f64,
}

/// Ordered list of joints, base first.
pub type JointList = Vec<JointParameters>;
