use thiserror::Error;

/// Solver-internal failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum KinematicsError {
    /// The law-of-cosines ratio fell outside [-1, 1]: the target is outside
    /// the workspace. Checked independently of the annulus pre-check since
    /// the two use different arithmetic and can disagree right at the
    /// workspace boundary.
    #[error("target is outside the reachable workspace")]
    Unreachable,
}

/// Why a move command was rejected. A rejected move never mutates the arm
/// state.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum MoveError {
    /// Target coordinates were NaN or infinite; rejected before the solver
    /// sees them.
    #[error("target coordinates must be finite numbers")]
    InvalidInput,

    /// Target failed the annulus reachability test. Carries the rejected
    /// point so callers can report it.
    #[error("target ({x:.3}, {y:.3}) is outside the robot workspace")]
    OutOfWorkspace { x: f64, y: f64 },

    /// The inverse kinematics solver failed even though the reachability
    /// pre-check passed. Only possible through floating-point disagreement
    /// at the workspace boundary.
    #[error("inverse kinematics failed for a point that passed the reachability check")]
    IkFailure,
}

impl From<KinematicsError> for MoveError {
    fn from(_: KinematicsError) -> Self {
        MoveError::IkFailure
    }
}
