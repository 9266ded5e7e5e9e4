use eyre::Result;
use tracing::debug;

use crate::{
    generate, ArmConfig, CartesianPoint, JointAngles, MoveError, PlanarKinematics, Trajectory,
    TrajectoryConfig,
};

/// Owned state of the arm: current joint angles, the TCP position derived
/// from them, and the Cartesian path of the last accepted move (kept for
/// trail rendering).
///
/// The TCP position is always the forward-kinematics image of the current
/// joint angles; it is recomputed on every update, never set independently.
/// `move_to` is the only writer path. It takes `&mut self`, so the
/// read-then-replace sequence is a critical section by construction; callers
/// that share the state across threads wrap it in a mutex.
pub struct ArmState {
    kinematics: PlanarKinematics,
    trajectory_config: TrajectoryConfig,
    home: CartesianPoint,
    current_angles: JointAngles,
    current_position: CartesianPoint,
    display_path: Vec<CartesianPoint>,
}

impl ArmState {
    /// Create the arm at its configured home position.
    ///
    /// Joint angles are solved from the home point, and the position is the
    /// forward-kinematics image of those angles, so the state invariant holds
    /// from construction. The display path starts as a degenerate
    /// home-to-home trajectory.
    pub fn new(config: &ArmConfig) -> Result<Self> {
        let kinematics = PlanarKinematics::new(config.links);
        let home = CartesianPoint::new(config.home[0], config.home[1]);

        let angles = kinematics
            .solve_inverse(&home)
            .map_err(|e| eyre::eyre!("Home position ({}, {}) is unreachable: {}", home.x, home.y, e))?;
        let position = kinematics.solve_forward(&angles);

        let initial = generate(&angles, &angles, &kinematics, &config.trajectory);

        Ok(Self {
            kinematics,
            trajectory_config: config.trajectory,
            home,
            current_angles: angles,
            current_position: position,
            display_path: initial.cartesian_path(),
        })
    }

    /// Move the TCP to `point`, returning the full trajectory for rendering
    /// and plotting collaborators.
    ///
    /// Rejected moves leave the state untouched: the reachability check, the
    /// inverse solve, and the trajectory generation are all read-only, and
    /// the state fields are only replaced once all three have succeeded.
    pub fn move_to(&mut self, point: &CartesianPoint) -> Result<Trajectory, MoveError> {
        if !point.is_finite() {
            return Err(MoveError::InvalidInput);
        }

        if !self.kinematics.reachable(point) {
            return Err(MoveError::OutOfWorkspace {
                x: point.x,
                y: point.y,
            });
        }

        // The annulus test and the solver's |D| <= 1 test use different
        // arithmetic and can disagree right at the workspace boundary, so
        // the solver failure is handled rather than assumed impossible.
        let angles = self.kinematics.solve_inverse(point)?;

        let trajectory = generate(
            &self.current_angles,
            &angles,
            &self.kinematics,
            &self.trajectory_config,
        );

        debug!(
            "Move accepted: target ({:.4}, {:.4}) -> q1 {:.4}, q2 {:.4}, {} samples",
            point.x,
            point.y,
            angles.q1,
            angles.q2,
            trajectory.len()
        );

        self.current_angles = angles;
        self.current_position = self.kinematics.solve_forward(&angles);
        self.display_path = trajectory.cartesian_path();

        Ok(trajectory)
    }

    /// Move back to the configured home position.
    pub fn home(&mut self) -> Result<Trajectory, MoveError> {
        let home = self.home;
        self.move_to(&home)
    }

    pub fn current_angles(&self) -> &JointAngles {
        &self.current_angles
    }

    pub fn current_position(&self) -> &CartesianPoint {
        &self.current_position
    }

    /// Cartesian path of the last accepted move, for trail rendering.
    pub fn display_path(&self) -> &[CartesianPoint] {
        &self.display_path
    }

    pub fn home_position(&self) -> &CartesianPoint {
        &self.home
    }

    pub fn kinematics(&self) -> &PlanarKinematics {
        &self.kinematics
    }
}
