//! # Planar Arm Library
//!
//! Shared types and utilities for a 2-link planar robotic arm: inverse and
//! forward kinematics, workspace reachability, quintic trajectory blending,
//! and the arm state owned by the controller node. Rendering and plotting
//! collaborators consume the data this library produces; they live outside
//! this crate.

pub mod types;
pub mod utils;

// Re-export everything for convenience
pub use types::*;
pub use utils::*;
