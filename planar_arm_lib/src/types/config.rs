use eyre::Result;
use serde::{Deserialize, Serialize};
use std::fs;

/// Fixed geometry of the 2-link arm. Loaded once at startup, never mutated.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LinkConfig {
    /// Length of link 1 (m)
    pub l1: f64,
    /// Length of link 2 (m)
    pub l2: f64,
    /// Length of the gripper segment past the TCP (m), rendering only
    pub gripper_length: f64,
}

/// Sampling parameters for generated trajectories.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TrajectoryConfig {
    /// Number of samples including both endpoints
    pub sample_count: usize,
    /// Duration of the blend (s)
    pub duration_s: f64,
}

impl Default for TrajectoryConfig {
    fn default() -> Self {
        Self {
            sample_count: 101,
            duration_s: 20.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArmConfig {
    pub name: String,
    pub links: LinkConfig,
    /// Home TCP position [x, y] in meters
    pub home: [f64; 2],
    #[serde(default)]
    pub trajectory: TrajectoryConfig,
}

impl ArmConfig {
    pub fn load_from_file(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: ArmConfig = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.links.l1 <= 0.0 || self.links.l2 <= 0.0 {
            return Err(eyre::eyre!(
                "Link lengths must be positive, got l1={}, l2={}",
                self.links.l1,
                self.links.l2
            ));
        }

        if self.links.gripper_length < 0.0 {
            return Err(eyre::eyre!(
                "Gripper length must be non-negative, got {}",
                self.links.gripper_length
            ));
        }

        let [hx, hy] = self.home;
        let home_distance = (hx * hx + hy * hy).sqrt();
        let min = (self.links.l1 - self.links.l2).abs();
        let max = self.links.l1 + self.links.l2;
        if home_distance < min || home_distance > max {
            return Err(eyre::eyre!(
                "Home position ({}, {}) is outside the workspace annulus [{}, {}]",
                hx,
                hy,
                min,
                max
            ));
        }

        if self.trajectory.sample_count < 2 {
            return Err(eyre::eyre!(
                "Trajectory sample count must be at least 2, got {}",
                self.trajectory.sample_count
            ));
        }

        if self.trajectory.duration_s <= 0.0 {
            return Err(eyre::eyre!(
                "Trajectory duration must be positive, got {}",
                self.trajectory.duration_s
            ));
        }

        Ok(())
    }
}
