//! Drag gesture samples and velocity estimation
//!
//! Hosts report a dismissal drag as a translation from the touch-down
//! point. Hosts whose gesture recognizer already measures velocity pass it
//! along; otherwise the velocity is estimated from recent samples.

use lightbox_core::Vec2;
use smallvec::SmallVec;

/// Only samples this recent (seconds) contribute to the velocity estimate
const VELOCITY_WINDOW: f32 = 0.1;

/// One update of an interactive drag
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GestureSample {
    /// Offset of the finger from where the drag began
    pub translation: Vec2,
    /// Velocity measured by the host, in points per second
    pub velocity: Option<Vec2>,
}

impl GestureSample {
    pub fn new(translation: Vec2) -> Self {
        Self {
            translation,
            velocity: None,
        }
    }

    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = Some(velocity);
        self
    }
}

#[derive(Clone, Copy, Debug)]
struct TrackedPoint {
    time: f32,
    position: Vec2,
}

/// Estimates drag velocity from timestamped positions
#[derive(Clone, Debug, Default)]
pub struct VelocityTracker {
    samples: SmallVec<[TrackedPoint; 8]>,
}

impl VelocityTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a position at `time` seconds
    ///
    /// Samples older than the estimation window are dropped. A sample that
    /// goes back in time resets the tracker.
    pub fn push(&mut self, time: f32, position: Vec2) {
        if self.samples.last().is_some_and(|last| time < last.time) {
            self.samples.clear();
        }
        self.samples.push(TrackedPoint { time, position });

        // Two samples always stay so slow frames still give an estimate
        let cutoff = time - VELOCITY_WINDOW;
        while self.samples.len() > 2 && self.samples[0].time < cutoff {
            self.samples.remove(0);
        }
    }

    /// Velocity across the tracked window, zero with fewer than two samples
    pub fn velocity(&self) -> Vec2 {
        match (self.samples.first(), self.samples.last()) {
            (Some(first), Some(last)) if last.time > first.time => {
                let dt = last.time - first.time;
                Vec2::new(
                    (last.position.x - first.position.x) / dt,
                    (last.position.y - first.position.y) / dt,
                )
            }
            _ => Vec2::ZERO,
        }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_drag_velocity() {
        let mut tracker = VelocityTracker::new();
        for frame in 0..10 {
            let t = frame as f32 / 60.0;
            tracker.push(t, Vec2::new(0.0, 600.0 * t));
        }
        let v = tracker.velocity();
        assert!((v.y - 600.0).abs() < 1.0, "velocity was {v:?}");
        assert!(v.x.abs() < 1e-3);
    }

    #[test]
    fn test_old_samples_are_dropped() {
        let mut tracker = VelocityTracker::new();
        // Slow drag, then a fast flick
        tracker.push(0.0, Vec2::ZERO);
        tracker.push(0.5, Vec2::new(0.0, 10.0));
        tracker.push(0.55, Vec2::new(0.0, 60.0));
        tracker.push(0.6, Vec2::new(0.0, 110.0));

        assert_eq!(tracker.len(), 3);
        assert!((tracker.velocity().y - 1000.0).abs() < 1.0);
    }

    #[test]
    fn test_single_sample_has_no_velocity() {
        let mut tracker = VelocityTracker::new();
        assert_eq!(tracker.velocity(), Vec2::ZERO);
        tracker.push(1.0, Vec2::new(5.0, 5.0));
        assert_eq!(tracker.velocity(), Vec2::ZERO);
    }

    #[test]
    fn test_time_going_backwards_resets() {
        let mut tracker = VelocityTracker::new();
        tracker.push(1.0, Vec2::ZERO);
        tracker.push(1.1, Vec2::new(0.0, 100.0));
        tracker.push(0.0, Vec2::ZERO);
        assert_eq!(tracker.len(), 1);
    }
}
