//! Spring physics animation
//!
//! RK4-integrated spring physics. The gallery drives its dismissal with a
//! spring over normalized progress (0 to 1) so a release velocity can be
//! carried into the closing motion.

/// Configuration for a spring animation
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
}

/// Natural frequency multiplier used by [`SpringConfig::settling_in`]
///
/// A critically damped spring with `ω·t = 9` is within 0.15% of its target.
const SETTLE_OMEGA_T: f32 = 9.0;

/// Largest `ω·h` of a single RK4 sub-step
const MAX_OMEGA_STEP: f32 = 0.5;

/// Sub-steps per frame never exceed this
const MAX_SUBSTEPS: u32 = 1024;

impl SpringConfig {
    /// Create a new spring configuration
    pub fn new(stiffness: f32, damping: f32, mass: f32) -> Self {
        Self {
            stiffness,
            damping,
            mass,
        }
    }

    /// Spring with unit mass from a natural frequency and damping ratio
    ///
    /// A ratio of 1.0 is critically damped, below 1.0 oscillates.
    pub fn from_damping_ratio(omega: f32, damping_ratio: f32) -> Self {
        Self {
            stiffness: omega * omega,
            damping: 2.0 * damping_ratio * omega,
            mass: 1.0,
        }
    }

    /// Spring that visually settles within `duration_secs`
    pub fn settling_in(duration_secs: f32, damping_ratio: f32) -> Self {
        let omega = SETTLE_OMEGA_T / duration_secs.max(f32::EPSILON);
        Self::from_damping_ratio(omega, damping_ratio)
    }

    /// Calculate critical damping for this spring's stiffness and mass
    pub fn critical_damping(&self) -> f32 {
        2.0 * (self.stiffness * self.mass).sqrt()
    }

    /// Ratio of actual damping to critical damping
    pub fn damping_ratio(&self) -> f32 {
        self.damping / self.critical_damping()
    }

    /// Check if the spring is underdamped (will oscillate)
    pub fn is_underdamped(&self) -> bool {
        self.damping < self.critical_damping()
    }

    /// Check if the spring is critically damped (no oscillation, fastest settling)
    pub fn is_critically_damped(&self) -> bool {
        (self.damping - self.critical_damping()).abs() < 0.01
    }

    /// Undamped natural frequency in radians per second
    pub fn natural_frequency(&self) -> f32 {
        (self.stiffness / self.mass).sqrt()
    }
}

/// A spring-based animator
#[derive(Clone, Copy, Debug)]
pub struct Spring {
    config: SpringConfig,
    value: f32,
    velocity: f32,
    target: f32,
    rest_epsilon: f32,
    rest_velocity: f32,
}

impl Spring {
    pub fn new(config: SpringConfig, initial: f32) -> Self {
        // Pixel-scale defaults: within 0.5pt and under 5pt/s is imperceptible
        Self {
            config,
            value: initial,
            velocity: 0.0,
            target: initial,
            rest_epsilon: 0.5,
            rest_velocity: 5.0,
        }
    }

    /// Spring over normalized progress, moving from 0.0 toward 1.0
    pub fn progress(config: SpringConfig) -> Self {
        let mut spring = Self::new(config, 0.0).with_rest_threshold(0.001, 0.01);
        spring.set_target(1.0);
        spring
    }

    /// Start the spring already moving
    pub fn with_velocity(mut self, velocity: f32) -> Self {
        self.velocity = if velocity.is_finite() { velocity } else { 0.0 };
        self
    }

    /// Distance and speed under which the spring counts as settled
    pub fn with_rest_threshold(mut self, epsilon: f32, velocity: f32) -> Self {
        self.rest_epsilon = epsilon;
        self.rest_velocity = velocity;
        self
    }

    pub fn config(&self) -> SpringConfig {
        self.config
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    /// Jump to the target and stop
    pub fn snap_to_target(&mut self) {
        self.value = self.target;
        self.velocity = 0.0;
    }

    /// Check if the spring has settled (within epsilon of target with minimal velocity)
    pub fn is_settled(&self) -> bool {
        (self.value - self.target).abs() < self.rest_epsilon
            && self.velocity.abs() < self.rest_velocity
    }

    /// Advance the spring by `dt` seconds
    ///
    /// A frame is split into RK4 sub-steps of at most `0.5 / ω` seconds, so
    /// stiff springs stay stable at any frame rate.
    pub fn step(&mut self, dt: f32) {
        if !(dt.is_finite() && dt > 0.0) {
            return;
        }
        let omega = self.config.natural_frequency();
        let substeps = if omega.is_finite() && omega * dt > MAX_OMEGA_STEP {
            ((omega * dt / MAX_OMEGA_STEP).ceil() as u32).min(MAX_SUBSTEPS)
        } else {
            1
        };
        let h = dt / substeps as f32;

        for _ in 0..substeps {
            if self.is_settled() {
                self.snap_to_target();
                return;
            }
            self.integrate(h);
        }
    }

    /// One RK4 step
    fn integrate(&mut self, dt: f32) {
        let k1_v = self.acceleration(self.value, self.velocity);
        let k1_x = self.velocity;

        let k2_v = self.acceleration(
            self.value + k1_x * dt * 0.5,
            self.velocity + k1_v * dt * 0.5,
        );
        let k2_x = self.velocity + k1_v * dt * 0.5;

        let k3_v = self.acceleration(
            self.value + k2_x * dt * 0.5,
            self.velocity + k2_v * dt * 0.5,
        );
        let k3_x = self.velocity + k2_v * dt * 0.5;

        let k4_v = self.acceleration(self.value + k3_x * dt, self.velocity + k3_v * dt);
        let k4_x = self.velocity + k3_v * dt;

        self.velocity += (k1_v + 2.0 * k2_v + 2.0 * k3_v + k4_v) * dt / 6.0;
        self.value += (k1_x + 2.0 * k2_x + 2.0 * k3_x + k4_x) * dt / 6.0;
    }

    fn acceleration(&self, x: f32, v: f32) -> f32 {
        let spring_force = -self.config.stiffness * (x - self.target);
        let damping_force = -self.config.damping * v;
        (spring_force + damping_force) / self.config.mass
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snappy() -> SpringConfig {
        SpringConfig::new(400.0, 30.0, 1.0)
    }

    #[test]
    fn test_spring_settles_to_target() {
        let mut spring = Spring::new(snappy(), 0.0);
        spring.set_target(100.0);

        // Simulate for 2 seconds at 60fps
        for _ in 0..120 {
            spring.step(1.0 / 60.0);
        }

        assert!(spring.is_settled());
        assert!((spring.value() - 100.0).abs() < 0.01);
    }

    #[test]
    fn test_damping_ratio_construction() {
        let critical = SpringConfig::from_damping_ratio(10.0, 1.0);
        assert!(critical.is_critically_damped());
        assert!((critical.damping_ratio() - 1.0).abs() < 1e-5);

        let bouncy = SpringConfig::from_damping_ratio(10.0, 0.5);
        assert!(bouncy.is_underdamped());
    }

    #[test]
    fn test_progress_spring_settles_within_duration() {
        let mut spring = Spring::progress(SpringConfig::settling_in(0.5, 1.0));

        // 0.5s at 120fps
        for _ in 0..60 {
            spring.step(1.0 / 120.0);
        }

        assert!((spring.value() - 1.0).abs() < 0.01);
    }

    #[test]
    fn test_initial_velocity_moves_faster() {
        let config = SpringConfig::settling_in(1.0, 1.0);
        let mut resting = Spring::progress(config);
        let mut thrown = Spring::progress(config).with_velocity(6.0);

        for _ in 0..6 {
            resting.step(1.0 / 60.0);
            thrown.step(1.0 / 60.0);
        }

        assert!(thrown.value() > resting.value());
    }

    #[test]
    fn test_non_finite_velocity_is_ignored() {
        let spring = Spring::progress(snappy()).with_velocity(f32::NAN);
        assert_eq!(spring.velocity(), 0.0);
    }

    #[test]
    fn test_spring_rk4_stability() {
        let mut spring = Spring::new(snappy(), 0.0);
        spring.set_target(1000.0);

        // Large time step that might cause instability with Euler integration
        for _ in 0..100 {
            spring.step(0.1);
            assert!(spring.value() < 2000.0);
            assert!(spring.value() > -500.0);
        }
    }

    #[test]
    fn test_stiff_spring_stays_on_path_at_frame_rate() {
        // ω·dt = 3 at 60fps, past where a single RK4 step diverges
        let mut spring = Spring::progress(SpringConfig::settling_in(0.05, 1.0));
        for _ in 0..6 {
            spring.step(1.0 / 60.0);
            assert!(spring.value() >= -1e-3 && spring.value() <= 1.0 + 1e-3);
        }
        assert!(spring.is_settled());
    }

    #[test]
    fn test_empty_frame_does_not_move() {
        let mut spring = Spring::progress(snappy()).with_velocity(3.0);
        spring.step(0.0);
        spring.step(f32::NAN);
        assert_eq!(spring.value(), 0.0);
        assert_eq!(spring.velocity(), 3.0);
    }
}
