use serde::{Deserialize, Serialize};

/// Joint configuration of the arm.
///
/// `q1` is the shoulder angle measured from the positive x-axis, `q2` is the
/// elbow angle relative to the direction of link 1. Both in radians.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JointAngles {
    pub q1: f64,
    pub q2: f64,
}

impl JointAngles {
    pub fn new(q1: f64, q2: f64) -> Self {
        Self { q1, q2 }
    }
}

/// TCP position in the robot base frame, meters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CartesianPoint {
    pub x: f64,
    pub y: f64,
}

impl CartesianPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// One time sample of a joint-space trajectory, with the corresponding
/// Cartesian TCP position from forward kinematics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrajectorySample {
    /// Time from trajectory start (s)
    pub t: f64,
    pub q1: f64,
    pub q2: f64,
    pub x: f64,
    pub y: f64,
}

/// A complete sampled joint-space trajectory.
///
/// Produced eagerly per move command so plotting and trail-rendering
/// collaborators get random access and a known length. Immutable once built;
/// each accepted move replaces the previous trajectory wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trajectory {
    pub samples: Vec<TrajectorySample>,
    pub duration_s: f64,
}

impl Trajectory {
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Final sample of the trajectory, i.e. the pose the arm ends up in.
    pub fn last(&self) -> Option<&TrajectorySample> {
        self.samples.last()
    }

    /// Time axis for plotting, aligned by index with [`q1_values`] and
    /// [`q2_values`].
    ///
    /// [`q1_values`]: Self::q1_values
    /// [`q2_values`]: Self::q2_values
    pub fn time_values(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.t).collect()
    }

    pub fn q1_values(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.q1).collect()
    }

    pub fn q2_values(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.q2).collect()
    }

    /// Cartesian TCP path for trail rendering.
    pub fn cartesian_path(&self) -> Vec<CartesianPoint> {
        self.samples
            .iter()
            .map(|s| CartesianPoint::new(s.x, s.y))
            .collect()
    }
}
