// 2-Link Planar Arm Kinematics

use nalgebra::{Rotation2, Vector2};

use crate::{CartesianPoint, JointAngles, KinematicsError, LinkConfig};

/// Closed-form kinematics for a 2-link planar arm.
///
/// The inverse solution uses the law of cosines:
///
/// D = (x² + y² - l1² - l2²) / (2·l1·l2)
/// q2 = atan2(√(1 - D²), D)
/// q1 = atan2(y, x) - atan2(l2·sin(q2), l1 + l2·cos(q2))
///
/// Of the two mirror solutions, only the elbow-up branch (sin(q2) ≥ 0) is
/// ever returned. This is a fixed policy, not a configurable parameter.
pub struct PlanarKinematics {
    links: LinkConfig,
}

impl PlanarKinematics {
    pub fn new(links: LinkConfig) -> Self {
        Self { links }
    }

    pub fn links(&self) -> &LinkConfig {
        &self.links
    }

    /// Annulus reachability test: |l1 - l2| ≤ ‖p‖ ≤ l1 + l2.
    ///
    /// Callers use this for early feedback; [`solve_inverse`] still guards
    /// independently against floating-point boundary cases.
    ///
    /// [`solve_inverse`]: Self::solve_inverse
    pub fn reachable(&self, point: &CartesianPoint) -> bool {
        let distance = Vector2::new(point.x, point.y).norm();
        distance <= self.links.l1 + self.links.l2
            && distance >= (self.links.l1 - self.links.l2).abs()
    }

    /// Solve inverse kinematics for the given TCP target, elbow-up branch.
    ///
    /// D = ±1 is accepted and yields the fully extended (q2 = 0) or fully
    /// folded (q2 = π) configuration.
    pub fn solve_inverse(&self, point: &CartesianPoint) -> Result<JointAngles, KinematicsError> {
        let l1 = self.links.l1;
        let l2 = self.links.l2;
        let (x, y) = (point.x, point.y);

        let d = (x * x + y * y - l1 * l1 - l2 * l2) / (2.0 * l1 * l2);

        if d.abs() > 1.0 {
            return Err(KinematicsError::Unreachable);
        }

        let q2 = (1.0 - d * d).sqrt().atan2(d);
        let q1 = y.atan2(x) - (l2 * q2.sin()).atan2(l1 + l2 * q2.cos());

        Ok(JointAngles::new(q1, q2))
    }

    /// Forward kinematics: TCP position for the given joint angles. Total
    /// over all real angles.
    pub fn solve_forward(&self, angles: &JointAngles) -> CartesianPoint {
        let tcp = self.elbow_vector(angles)
            + Rotation2::new(angles.q1 + angles.q2) * Vector2::new(self.links.l2, 0.0);
        CartesianPoint::new(tcp.x, tcp.y)
    }

    /// Position of the elbow joint, for link rendering.
    pub fn elbow_position(&self, angles: &JointAngles) -> CartesianPoint {
        let elbow = self.elbow_vector(angles);
        CartesianPoint::new(elbow.x, elbow.y)
    }

    /// End of the gripper segment past the TCP, for gripper rendering.
    pub fn gripper_tip(&self, angles: &JointAngles) -> CartesianPoint {
        let tcp = self.solve_forward(angles);
        let tip = Vector2::new(tcp.x, tcp.y)
            + Rotation2::new(angles.q1 + angles.q2) * Vector2::new(self.links.gripper_length, 0.0);
        CartesianPoint::new(tip.x, tip.y)
    }

    fn elbow_vector(&self, angles: &JointAngles) -> Vector2<f64> {
        Rotation2::new(angles.q1) * Vector2::new(self.links.l1, 0.0)
    }
}
