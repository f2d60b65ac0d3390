//! Fixed-duration eased progress

use crate::easing::Easing;

/// Progress from 0 to 1 over a fixed duration
#[derive(Clone, Copy, Debug)]
pub struct Tween {
    duration: f32,
    elapsed: f32,
    easing: Easing,
}

impl Tween {
    /// Create a tween lasting `duration_secs`
    ///
    /// A zero or negative duration finishes on the first step.
    pub fn new(duration_secs: f32, easing: Easing) -> Self {
        Self {
            duration: duration_secs.max(0.0),
            elapsed: 0.0,
            easing,
        }
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Linear time fraction in [0, 1]
    pub fn raw_progress(&self) -> f32 {
        if self.duration <= 0.0 {
            return if self.elapsed > 0.0 { 1.0 } else { 0.0 };
        }
        (self.elapsed / self.duration).clamp(0.0, 1.0)
    }

    /// Eased progress in [0, 1]
    pub fn progress(&self) -> f32 {
        self.easing.apply(self.raw_progress())
    }

    pub fn is_finished(&self) -> bool {
        self.raw_progress() >= 1.0
    }

    pub fn step(&mut self, dt: f32) {
        // Zero-duration tweens still need one positive step to finish
        let dt = if self.duration <= 0.0 { dt.max(f32::EPSILON) } else { dt };
        self.elapsed = (self.elapsed + dt.max(0.0)).min(self.duration.max(f32::EPSILON));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tween_reaches_end_exactly() {
        let mut tween = Tween::new(0.3, Easing::Linear);
        for _ in 0..10 {
            tween.step(1.0 / 60.0);
        }
        assert!(!tween.is_finished());
        assert!((tween.progress() - 10.0 / 18.0).abs() < 1e-4);

        for _ in 0..20 {
            tween.step(1.0 / 60.0);
        }
        assert!(tween.is_finished());
        assert_eq!(tween.progress(), 1.0);
    }

    #[test]
    fn test_zero_duration_finishes_on_first_step() {
        let mut tween = Tween::new(0.0, Easing::EaseInOut);
        assert!(!tween.is_finished());
        tween.step(0.0);
        assert!(tween.is_finished());
    }
}
