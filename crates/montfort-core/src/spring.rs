use crate::constants::{MAX_FRAME_DT_SEC, SPRING_SETTLE_EPS};

/// Damped harmonic oscillator tracking a moving target.
///
/// Stepped with semi-implicit Euler once per frame:
///
/// ```text
/// a = stiffness * (target - current) - damping * velocity
/// v += a * dt
/// x += v * dt
/// ```
///
/// dt is capped at [`MAX_FRAME_DT_SEC`] so a dropped frame (or a restored
/// background tab) cannot blow up the integration. There is no discrete
/// done-state; callers sample `current` continuously and may check
/// [`Spring::settled`] for a convergence tolerance.
#[derive(Clone, Copy, Debug)]
pub struct Spring {
    pub current: f32,
    pub velocity: f32,
    pub target: f32,
    pub stiffness: f32,
    pub damping: f32,
}

impl Spring {
    pub fn new(initial: f32, stiffness: f32, damping: f32) -> Self {
        Self {
            current: initial,
            velocity: 0.0,
            target: initial,
            stiffness,
            damping,
        }
    }

    /// Damping at or above this keeps the spring from sustained oscillation.
    #[inline]
    pub fn critical_damping(stiffness: f32) -> f32 {
        2.0 * stiffness.max(0.0).sqrt()
    }

    #[inline]
    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    /// Snap to a value and kill all motion. Used when a follower should not
    /// animate from its stale resting place, e.g. the first pointer sample.
    pub fn reset_to(&mut self, value: f32) {
        self.current = value;
        self.target = value;
        self.velocity = 0.0;
    }

    /// Advance one frame. Returns the new current value.
    pub fn step(&mut self, dt_sec: f32) -> f32 {
        let dt = dt_sec.clamp(0.0, MAX_FRAME_DT_SEC);
        if dt <= 0.0 {
            return self.current;
        }
        let accel = self.stiffness * (self.target - self.current) - self.damping * self.velocity;
        self.velocity += accel * dt;
        self.current += self.velocity * dt;
        self.current
    }

    #[inline]
    pub fn settled(&self, tolerance: f32) -> bool {
        (self.target - self.current).abs() < tolerance && self.velocity.abs() < tolerance
    }

    #[inline]
    pub fn is_settled(&self) -> bool {
        self.settled(SPRING_SETTLE_EPS)
    }
}
