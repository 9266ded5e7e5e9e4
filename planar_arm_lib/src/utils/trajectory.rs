// Quintic joint-space trajectory generation

use crate::{JointAngles, PlanarKinematics, Trajectory, TrajectoryConfig, TrajectorySample};

/// Quintic blend polynomial h(τ) = 10τ³ - 15τ⁴ + 6τ⁵ for τ ∈ [0, 1].
///
/// h(0) = 0, h(1) = 1, and the first and second derivatives vanish at both
/// ends, so a blend between two joint configurations starts and stops with
/// zero velocity and zero acceleration.
pub fn quintic_blend(tau: f64) -> f64 {
    tau * tau * tau * (10.0 - 15.0 * tau + 6.0 * tau * tau)
}

/// Generate a smooth joint-space trajectory from `start` to `target`.
///
/// Produces `sample_count` evenly spaced samples over `[0, duration_s]`,
/// both endpoints included, with the Cartesian TCP position of every sample
/// filled in by forward kinematics. Pure function of its inputs; it does not
/// read or mutate any arm state.
///
/// Joint angles interpolate as `(1 - h)·start + h·target` so the first and
/// last samples equal `start` and `target` exactly, not just within
/// floating-point error.
pub fn generate(
    start: &JointAngles,
    target: &JointAngles,
    kinematics: &PlanarKinematics,
    config: &TrajectoryConfig,
) -> Trajectory {
    // sample_count < 2 is rejected by ArmConfig::validate; clamp anyway so
    // the interval division below stays well defined.
    let sample_count = config.sample_count.max(2);
    let intervals = (sample_count - 1) as f64;

    let mut samples = Vec::with_capacity(sample_count);

    for i in 0..sample_count {
        let tau = i as f64 / intervals;
        let h = quintic_blend(tau);

        let angles = JointAngles::new(
            (1.0 - h) * start.q1 + h * target.q1,
            (1.0 - h) * start.q2 + h * target.q2,
        );
        let position = kinematics.solve_forward(&angles);

        samples.push(TrajectorySample {
            t: tau * config.duration_s,
            q1: angles.q1,
            q2: angles.q2,
            x: position.x,
            y: position.y,
        });
    }

    Trajectory {
        samples,
        duration_s: config.duration_s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LinkConfig;

    fn test_kinematics() -> PlanarKinematics {
        PlanarKinematics::new(LinkConfig {
            l1: 0.12,
            l2: 0.12,
            gripper_length: 0.02,
        })
    }

    #[test]
    fn test_blend_boundary_values() {
        assert_eq!(quintic_blend(0.0), 0.0);
        assert_eq!(quintic_blend(1.0), 1.0);
        assert!((quintic_blend(0.5) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_endpoints_are_exact() {
        // 0.1 and 0.3 are not exactly representable; the naive
        // start + (target - start) * h form misses the target endpoint here.
        let start = JointAngles::new(0.1, 0.3);
        let target = JointAngles::new(0.3, 0.7);
        let trajectory = generate(
            &start,
            &target,
            &test_kinematics(),
            &TrajectoryConfig::default(),
        );

        let first = trajectory.samples.first().unwrap();
        let last = trajectory.samples.last().unwrap();
        assert_eq!(first.q1, start.q1);
        assert_eq!(first.q2, start.q2);
        assert_eq!(last.q1, target.q1);
        assert_eq!(last.q2, target.q2);
        assert_eq!(first.t, 0.0);
        assert_eq!(last.t, 20.0);
    }

    #[test]
    fn test_sample_count_and_spacing() {
        let config = TrajectoryConfig {
            sample_count: 101,
            duration_s: 20.0,
        };
        let trajectory = generate(
            &JointAngles::new(0.0, 0.0),
            &JointAngles::new(1.0, 0.5),
            &test_kinematics(),
            &config,
        );

        assert_eq!(trajectory.len(), 101);
        assert_eq!(trajectory.duration_s, 20.0);

        // 100 evenly spaced intervals of 0.2 s
        for pair in trajectory.samples.windows(2) {
            assert!((pair[1].t - pair[0].t - 0.2).abs() < 1e-12);
        }
    }

    #[test]
    fn test_zero_boundary_velocity_and_acceleration() {
        // Dense sampling so the finite differences resolve the boundary
        // derivatives rather than discretization error.
        let config = TrajectoryConfig {
            sample_count: 1001,
            duration_s: 20.0,
        };
        let trajectory = generate(
            &JointAngles::new(0.2, 0.4),
            &JointAngles::new(1.2, 1.4),
            &test_kinematics(),
            &config,
        );

        let q1 = trajectory.q1_values();
        let dt = 20.0 / 1000.0;
        let n = q1.len();

        let vel_start = (q1[1] - q1[0]) / dt;
        let vel_end = (q1[n - 1] - q1[n - 2]) / dt;
        assert!(vel_start.abs() < 1e-5);
        assert!(vel_end.abs() < 1e-5);

        let acc_start = (q1[2] - 2.0 * q1[1] + q1[0]) / (dt * dt);
        let acc_end = (q1[n - 1] - 2.0 * q1[n - 2] + q1[n - 3]) / (dt * dt);
        assert!(acc_start.abs() < 1e-3);
        assert!(acc_end.abs() < 1e-3);
    }

    #[test]
    fn test_monotone_interpolation() {
        let trajectory = generate(
            &JointAngles::new(0.0, 1.5),
            &JointAngles::new(1.0, 0.5),
            &test_kinematics(),
            &TrajectoryConfig::default(),
        );

        // q1 increases, q2 decreases; both monotonically for monotone deltas
        for pair in trajectory.samples.windows(2) {
            assert!(pair[1].q1 >= pair[0].q1);
            assert!(pair[1].q2 <= pair[0].q2);
        }
    }

    #[test]
    fn test_cartesian_path_matches_forward_kinematics() {
        let kin = test_kinematics();
        let trajectory = generate(
            &JointAngles::new(0.3, 0.9),
            &JointAngles::new(0.8, 0.2),
            &kin,
            &TrajectoryConfig::default(),
        );

        for sample in &trajectory.samples {
            let point = kin.solve_forward(&JointAngles::new(sample.q1, sample.q2));
            assert_eq!(sample.x, point.x);
            assert_eq!(sample.y, point.y);
        }
    }

    #[test]
    fn test_degenerate_move_holds_pose() {
        let angles = JointAngles::new(0.1658, 1.2011);
        let trajectory = generate(
            &angles,
            &angles,
            &test_kinematics(),
            &TrajectoryConfig::default(),
        );

        for sample in &trajectory.samples {
            assert!((sample.q1 - angles.q1).abs() < 1e-12);
            assert!((sample.q2 - angles.q2).abs() < 1e-12);
        }
    }
}
