//! Interactive dismissal tracking
//!
//! While the user drags the frontmost image, the image follows the finger
//! and the rest of the gallery fades with the vertical drag distance. On
//! release the drag either commits (the image flies home) or cancels (the
//! image springs back to its page). Both paths start with the release
//! velocity so the motion continues from the finger instead of from rest.

use lightbox_core::{Rect, Vec2};

use crate::config::DismissConfig;
use crate::gesture::{GestureSample, VelocityTracker};

/// Distances shorter than this (points) get no initial spring velocity
const MIN_VELOCITY_DISTANCE: f32 = 1.0;

/// A drag in progress on the frontmost page
#[derive(Clone, Debug)]
pub struct InteractiveDismissal {
    page: usize,
    origin_frame: Rect,
    viewport_height: f32,
    translation: Vec2,
    reported_velocity: Option<Vec2>,
    tracker: VelocityTracker,
    released: bool,
}

impl InteractiveDismissal {
    /// Start tracking a drag of the image on `page`, currently at `origin_frame`
    pub fn new(page: usize, origin_frame: Rect, viewport_height: f32) -> Self {
        Self {
            page,
            origin_frame,
            viewport_height,
            translation: Vec2::ZERO,
            reported_velocity: None,
            tracker: VelocityTracker::new(),
            released: false,
        }
    }

    /// Record a gesture update received at `time` seconds
    pub fn update(&mut self, time: f32, sample: GestureSample) {
        self.translation = sample.translation;
        self.reported_velocity = sample.velocity;
        self.tracker.push(time, sample.translation);
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn translation(&self) -> Vec2 {
        self.translation
    }

    pub fn is_released(&self) -> bool {
        self.released
    }

    pub(crate) fn release(&mut self) {
        self.released = true;
    }

    /// Where the dragged image is drawn
    pub fn current_frame(&self) -> Rect {
        self.origin_frame.translate(self.translation)
    }

    /// Vertical drag distance as a fraction of the viewport height, in [0, 1]
    pub fn progress(&self) -> f32 {
        if self.viewport_height <= 0.0 {
            return 0.0;
        }
        (self.translation.y.abs() / self.viewport_height).min(1.0)
    }

    /// Release velocity: the host's measurement if it gave one, else the estimate
    pub fn velocity(&self) -> Vec2 {
        self.reported_velocity
            .unwrap_or_else(|| self.tracker.velocity())
    }

    /// Whether releasing now should complete the dismissal
    ///
    /// Commits when the drag passed `commit_fraction` of the viewport
    /// height, or when the finger was flung at least `fling_velocity` away
    /// from the page.
    pub fn should_commit(&self, config: &DismissConfig) -> bool {
        if self.progress() >= config.commit_fraction {
            return true;
        }

        let vy = self.velocity().y;
        let moving_away = self.translation.y == 0.0 || vy.signum() == self.translation.y.signum();
        moving_away && vy.abs() >= config.fling_velocity
    }
}

/// Initial velocity of a progress spring moving a frame from `from` to `to`
///
/// A drag velocity in points per second becomes progress per second by
/// dividing by the vertical distance the image's center still has to
/// travel. Nearly zero distances give zero velocity.
pub fn initial_spring_velocity(velocity_y: f32, from: Rect, to: Rect) -> f32 {
    let distance = to.center().y - from.center().y;
    if distance.abs() < MIN_VELOCITY_DISTANCE || !velocity_y.is_finite() {
        return 0.0;
    }
    velocity_y / distance
}
