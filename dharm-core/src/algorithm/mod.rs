//! Forward kinematics pipeline.
//!
//! Raw joints are normalized, composed into cumulative transforms and
//! finally interpreted as joint poses. Every stage is a pure function.

pub mod compose;
pub mod fk;
pub mod interpret;
pub mod normalize;

pub use self::compose::compose_all;
pub use self::fk::ForwardKinematics;
pub use self::interpret::{interpret, interpret_all, NORM_EPSILON};
pub use self::normalize::normalize_units;
