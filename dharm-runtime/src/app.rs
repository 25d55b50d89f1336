use dharm_core::algorithm::ForwardKinematics;
use dharm_core::JointPose;
use nalgebra::Point3;

use crate::scene::Scene;
use crate::table::JointTable;

/// Presentation layer for computed poses.
pub trait Presenter {
    /// Present the poses of the last computation.
    fn show(&mut self, poses: &[JointPose], scene: &Scene);

    /// Drop any presented poses and show the idle scene.
    fn reset_to_idle(&mut self);
}

/// Numeric display of the tool center point.
pub trait Readout {
    /// Show the tool center point position.
    fn display(&mut self, position: Point3<f64>);
}

/// Application service coordinating the joint table, the kinematics engine
/// and the presentation collaborators.
pub struct App<P: Presenter, R: Readout> {
    presenter: P,
    readout: R,
    poses: Vec<JointPose>,
}

impl<P: Presenter, R: Readout> App<P, R> {
    pub fn new(presenter: P, readout: R) -> Self {
        Self {
            presenter,
            readout,
            poses: vec![],
        }
    }

    /// Compute the poses for the current table and present them.
    pub fn calculate(&mut self, table: &JointTable) -> &[JointPose] {
        self.poses = ForwardKinematics::new(table.joint_list()).solve();

        log::debug!("Computed {} joint poses", self.poses.len());

        let scene = Scene::from_poses(&self.poses);
        self.presenter.show(&self.poses, &scene);

        if let Some(tcp) = self.poses.last() {
            log::info!(
                "TCP [{:.3}, {:.3}, {:.3}]",
                tcp.position.x,
                tcp.position.y,
                tcp.position.z
            );
            self.readout.display(tcp.position);
        }

        &self.poses
    }

    /// Reduce the table to a single zero row and reset the presentation.
    pub fn clear(&mut self, table: &mut JointTable) {
        table.clear();
        self.poses.clear();
        self.presenter.reset_to_idle();
    }

    /// Restore the reference arm in the table.
    pub fn reset(&mut self, table: &mut JointTable) {
        table.reset();
    }

    /// Poses of the last computation.
    #[inline]
    pub fn poses(&self) -> &[JointPose] {
        &self.poses
    }

    #[inline]
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    #[inline]
    pub fn readout(&self) -> &R {
        &self.readout
    }

    /// Release the presentation collaborators.
    pub fn into_inner(self) -> (P, R) {
        (self.presenter, self.readout)
    }
}
