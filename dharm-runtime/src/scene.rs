//! Scene geometry for presenting an arm in 3D.
//!
//! The scene is independent of any rendering toolkit. A presenter draws
//! thin axes for every joint frame, thick links between frames and a
//! marker at the tool center point.

use dharm_core::JointPose;
use nalgebra::{Point3, Vector3};
use serde::Serialize;

/// Links shorter than this are not drawn along Z.
const Z_LINK_EPSILON: f64 = 1e-6;
/// Links shorter than this are not drawn along X.
const X_LINK_EPSILON: f64 = 1e-5;

/// Axis length of the idle scene.
const IDLE_AXIS_LENGTH: f64 = 0.6;
const IDLE_AXIS_RADIUS: f64 = 0.006;
const IDLE_TUBE_RADIUS: f64 = 0.018;

/// Straight segment.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Segment {
    /// Segment start.
    pub start: Point3<f64>,
    /// Unit direction.
    pub direction: Vector3<f64>,
    /// Segment length, never negative.
    pub length: f64,
}

impl Segment {
    /// Segment end.
    #[inline]
    pub fn end(&self) -> Point3<f64> {
        self.start + self.direction * self.length
    }

    /// Segment from `start` along the signed projection of `delta` on `axis`.
    fn projected(start: Point3<f64>, delta: &Vector3<f64>, axis: &Vector3<f64>) -> Self {
        let projection = signed_projection(delta, axis);

        let unit = axis.try_normalize(1e-12).unwrap_or(*axis);

        Self {
            start,
            direction: if projection >= 0.0 { unit } else { -unit },
            length: projection.abs(),
        }
    }
}

fn signed_projection(vector: &Vector3<f64>, axis: &Vector3<f64>) -> f64 {
    let norm = axis.norm();
    if norm < 1e-12 {
        0.0
    } else {
        vector.dot(axis) / norm
    }
}

/// Axes and links of a single joint frame.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct FrameGlyph {
    /// Joint pose.
    pub pose: JointPose,
    /// Displayed length of the X axis, absent when there is no X link.
    pub x_axis_length: Option<f64>,
    /// Displayed length of the Y axis.
    pub y_axis_length: f64,
    /// Displayed length of the Z axis.
    pub z_axis_length: f64,
    /// Link along X, from the previous joint axis towards this frame.
    pub x_link: Option<Segment>,
    /// Link along Z, from this frame towards the next frame.
    pub z_link: Option<Segment>,
}

/// Everything a presenter needs to draw an arm.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Scene {
    /// Length of the base frame axes.
    pub base_axis_length: f64,
    /// Radius of thin axes.
    pub axis_radius: f64,
    /// Radius of links.
    pub tube_radius: f64,
    /// Link along the base Z axis.
    pub base_link: Option<Segment>,
    /// One glyph per joint, base first.
    pub frames: Vec<FrameGlyph>,
    /// Tool center point.
    pub tcp: Option<Point3<f64>>,
}

impl Scene {
    /// Scene shown before anything is computed.
    pub fn idle() -> Self {
        Self {
            base_axis_length: IDLE_AXIS_LENGTH,
            axis_radius: IDLE_AXIS_RADIUS,
            tube_radius: IDLE_TUBE_RADIUS,
            base_link: Some(Segment {
                start: Point3::origin(),
                direction: Vector3::z(),
                length: IDLE_AXIS_LENGTH * 0.5,
            }),
            frames: vec![],
            tcp: None,
        }
    }

    /// Build the scene for a list of joint poses.
    pub fn from_poses(poses: &[JointPose]) -> Self {
        let reach = poses
            .iter()
            .map(|pose| pose.position.coords.norm())
            .fold(1.0_f64, f64::max);

        let base_axis_length = (reach * 0.3).max(0.3);
        let axis_radius = (reach * 0.01).max(0.006);
        let tube_radius = (reach * 0.018).max(0.009) * 2.0;

        let base_link = poses.first().and_then(|first| {
            let link = Segment::projected(Point3::origin(), &first.position.coords, &Vector3::z());
            (link.length > Z_LINK_EPSILON).then_some(link)
        });

        let frames = poses
            .iter()
            .enumerate()
            .map(|(idx, pose)| {
                let next = poses.get(idx + 1);
                let previous = idx.checked_sub(1).map(|prev| &poses[prev]);
                Self::frame(pose, previous, next, base_axis_length)
            })
            .collect();

        Self {
            base_axis_length,
            axis_radius,
            tube_radius,
            base_link,
            frames,
            tcp: poses.last().map(|pose| pose.position),
        }
    }

    fn frame(
        pose: &JointPose,
        previous: Option<&JointPose>,
        next: Option<&JointPose>,
        base_axis_length: f64,
    ) -> FrameGlyph {
        let z_link = next.map(|next| {
            Segment::projected(pose.position, &(next.position - pose.position), &pose.z_axis)
        });

        let z_length = z_link.map_or(0.0, |link| link.length);
        let z_axis_length = if z_length > 0.0 {
            z_length * 1.5
        } else {
            base_axis_length * 0.6
        };

        // Foot of this origin on the previous joint axis.
        let (axis_origin, axis_direction) = match previous {
            Some(previous) => (previous.position, previous.z_axis),
            None => (Point3::origin(), Vector3::z()),
        };
        let foot = axis_origin
            + axis_direction * (pose.position - axis_origin).dot(&axis_direction);

        let x_link = Segment::projected(foot, &(pose.position - foot), &pose.x_axis);
        let x_link = (x_link.length > X_LINK_EPSILON).then_some(x_link);

        FrameGlyph {
            pose: *pose,
            x_axis_length: x_link.map(|link| link.length * 1.5),
            y_axis_length: z_axis_length,
            z_axis_length,
            x_link,
            z_link: z_link.filter(|link| link.length > Z_LINK_EPSILON),
        }
    }
}

#[cfg(test)]
mod tests {
    use dharm_core::JointParameters;

    use super::*;

    const TOLERANCE: f64 = 1e-9;

    #[test]
    fn test_idle_scene() {
        let scene = Scene::idle();

        assert!(scene.frames.is_empty());
        assert!(scene.tcp.is_none());
        assert_eq!(scene.base_link.unwrap().length, 0.3);
    }

    #[test]
    fn test_empty_scene() {
        let scene = Scene::from_poses(&[]);

        assert!(scene.frames.is_empty());
        assert!(scene.base_link.is_none());
        assert!(scene.tcp.is_none());
        assert_eq!(scene.base_axis_length, 0.3);
    }

    #[test]
    fn test_scale_follows_reach() {
        let poses = dharm_core::compute(&[JointParameters::new(0.0, 10.0, 0.0, 0.0)]);

        let scene = Scene::from_poses(&poses);

        assert!((scene.base_axis_length - 3.0).abs() < TOLERANCE);
        assert!((scene.axis_radius - 0.1).abs() < TOLERANCE);
        assert!((scene.tube_radius - 0.36).abs() < TOLERANCE);
    }

    #[test]
    fn test_two_link_planar() {
        let poses = dharm_core::compute(&[
            JointParameters::new(0.0, 1.0, 0.5, 0.0),
            JointParameters::new(90.0, 2.0, 0.0, 0.0),
        ]);

        let scene = Scene::from_poses(&poses);

        let base_link = scene.base_link.unwrap();
        assert!((base_link.length - 0.5).abs() < TOLERANCE);
        assert!((base_link.direction - Vector3::z()).norm() < TOLERANCE);

        assert_eq!(scene.frames.len(), 2);

        // Base axis foot is (0, 0, 0.5), first frame origin is (1, 0, 0.5).
        let x_link = scene.frames[0].x_link.unwrap();
        assert!((x_link.start - Point3::new(0.0, 0.0, 0.5)).norm() < TOLERANCE);
        assert!((x_link.length - 1.0).abs() < TOLERANCE);
        assert!((x_link.end() - poses[0].position).norm() < TOLERANCE);

        // Both origins share the same height, no Z link between them.
        assert!(scene.frames[0].z_link.is_none());
        assert!((scene.frames[0].z_axis_length - scene.base_axis_length * 0.6).abs() < TOLERANCE);

        let x_link = scene.frames[1].x_link.unwrap();
        assert!((x_link.length - 2.0).abs() < TOLERANCE);
        assert!((scene.frames[1].x_axis_length.unwrap() - 3.0).abs() < TOLERANCE);

        assert!((scene.tcp.unwrap() - poses[1].position).norm() < TOLERANCE);
    }

    #[test]
    fn test_z_link_direction() {
        let poses = dharm_core::compute(&[
            JointParameters::new(0.0, 0.0, 0.0, 0.0),
            JointParameters::new(0.0, 0.0, -0.4, 0.0),
        ]);

        let scene = Scene::from_poses(&poses);

        let z_link = scene.frames[0].z_link.unwrap();
        assert!((z_link.length - 0.4).abs() < TOLERANCE);
        assert!((z_link.direction + Vector3::z()).norm() < TOLERANCE);
        assert!((scene.frames[0].z_axis_length - 0.6).abs() < TOLERANCE);

        assert!(scene.frames[0].x_link.is_none());
        assert!(scene.frames[0].x_axis_length.is_none());
        assert!(scene.frames[1].z_link.is_none());
    }

    #[test]
    fn test_reference_arm_scene() {
        let poses = dharm_core::compute(&dharm_core::default_joint_list(6));

        let scene = Scene::from_poses(&poses);

        assert_eq!(scene.frames.len(), 6);
        assert!(scene.frames[5].z_link.is_none());
        for frame in &scene.frames {
            if let Some(link) = frame.x_link {
                assert!((link.direction.norm() - 1.0).abs() < TOLERANCE);
                assert!(link.length > 0.0);
            }
        }
    }
}
