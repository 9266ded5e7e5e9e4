pub mod kinematics;
pub mod tracing;
pub mod trajectory;

pub use kinematics::*;
pub use self::tracing::*;
pub use trajectory::*;
