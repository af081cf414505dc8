//! Critically damped spring steps for camera transitions.
//!
//! Same curve as the classic "smooth damp" (Game Programming Gems 4,
//! ch. 1.10): the value approaches its goal without overshoot and settles
//! in roughly `smooth_time` seconds regardless of frame rate.

use glam::Vec3;

/// Lower bound on the smoothing time to keep `omega` finite.
const MIN_SMOOTH_TIME: f32 = 0.0001;

#[inline]
fn decay(omega: f32, dt: f32) -> f32 {
    // Polynomial approximation of exp(-x), accurate for the x range a
    // frame step produces.
    let x = omega * dt;
    1.0 / (1.0 + x + 0.48 * x * x + 0.235 * x * x * x)
}

/// Advance a scalar toward `goal`. `velocity` carries the spring state
/// between calls and must start at zero.
pub fn smooth_damp(
    current: f32,
    goal: f32,
    velocity: &mut f32,
    smooth_time: f32,
    dt: f32,
) -> f32 {
    if dt <= 0.0 {
        return current;
    }
    let omega = 2.0 / smooth_time.max(MIN_SMOOTH_TIME);
    let exp = decay(omega, dt);

    let change = current - goal;
    let temp = (*velocity + omega * change) * dt;
    *velocity = (*velocity - omega * temp) * exp;
    let mut output = goal + (change + temp) * exp;

    // Never overshoot.
    if (goal - current > 0.0) == (output > goal) {
        output = goal;
        *velocity = 0.0;
    }
    output
}

/// Vector form of [`smooth_damp`].
pub fn smooth_damp_vec3(
    current: Vec3,
    goal: Vec3,
    velocity: &mut Vec3,
    smooth_time: f32,
    dt: f32,
) -> Vec3 {
    if dt <= 0.0 {
        return current;
    }
    let omega = 2.0 / smooth_time.max(MIN_SMOOTH_TIME);
    let exp = decay(omega, dt);

    let change = current - goal;
    let temp = (*velocity + omega * change) * dt;
    *velocity = (*velocity - omega * temp) * exp;
    let mut output = goal + (change + temp) * exp;

    if (goal - current).dot(output - goal) > 0.0 {
        output = goal;
        *velocity = Vec3::ZERO;
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_converges_without_overshoot() {
        let mut value = 0.0;
        let mut velocity = 0.0;
        for _ in 0..600 {
            value = smooth_damp(value, 100.0, &mut velocity, 0.8, 1.0 / 60.0);
            assert!(value <= 100.0, "overshot to {value}");
        }
        assert!((value - 100.0).abs() < 1e-2);
    }

    #[test]
    fn scalar_moves_toward_lower_goal() {
        let mut velocity = 0.0;
        let value = smooth_damp(50.0, 10.0, &mut velocity, 0.8, 1.0 / 60.0);
        assert!(value < 50.0 && value > 10.0);
        assert!(velocity < 0.0);
    }

    #[test]
    fn zero_dt_is_a_no_op() {
        let mut velocity = 3.0;
        assert_eq!(smooth_damp(1.0, 5.0, &mut velocity, 0.8, 0.0), 1.0);
        assert_eq!(velocity, 3.0);
    }

    #[test]
    fn vector_converges() {
        let goal = Vec3::new(-2000.0, 1000.0, 1000.0);
        let mut value = Vec3::ZERO;
        let mut velocity = Vec3::ZERO;
        for _ in 0..600 {
            value =
                smooth_damp_vec3(value, goal, &mut velocity, 0.8, 1.0 / 60.0);
        }
        assert!(value.distance(goal) < 1.0);
    }

    #[test]
    fn shorter_smooth_time_settles_faster() {
        let step = |smooth_time| {
            let mut velocity = 0.0;
            smooth_damp(0.0, 1.0, &mut velocity, smooth_time, 0.1)
        };
        assert!(step(0.2) > step(0.8));
    }
}
