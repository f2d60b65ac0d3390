//! Frame scheduler
//!
//! Owns every running motion and steps them once per frame. The host's frame
//! callback calls [`FrameScheduler::tick`] with the elapsed time; the
//! scheduler reports each motion that finished during that tick exactly once.
//!
//! Everything runs on the UI thread. There is no background thread and no
//! locking; the host decides when frames happen.

use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;

use crate::spring::Spring;
use crate::tween::Tween;

new_key_type! {
    /// Handle to a running motion
    pub struct MotionId;
}

/// A progress source stepped by the scheduler
#[derive(Clone, Copy, Debug)]
pub enum Motion {
    /// Eased progress over a fixed duration
    Tween(Tween),
    /// Spring-driven value, optionally forced to finish after a time limit
    Spring {
        spring: Spring,
        elapsed: f32,
        limit: Option<f32>,
    },
}

impl Motion {
    pub fn tween(tween: Tween) -> Self {
        Motion::Tween(tween)
    }

    /// Spring that settles on its own or snaps to its target once `limit_secs` passes
    pub fn spring(spring: Spring, limit_secs: Option<f32>) -> Self {
        Motion::Spring {
            spring,
            elapsed: 0.0,
            limit: limit_secs,
        }
    }

    /// Current value (eased progress for tweens)
    pub fn value(&self) -> f32 {
        match self {
            Motion::Tween(tween) => tween.progress(),
            Motion::Spring { spring, .. } => spring.value(),
        }
    }

    /// Current velocity in value units per second
    pub fn velocity(&self) -> f32 {
        match self {
            Motion::Tween(_) => 0.0,
            Motion::Spring { spring, .. } => spring.velocity(),
        }
    }

    pub fn is_finished(&self) -> bool {
        match self {
            Motion::Tween(tween) => tween.is_finished(),
            Motion::Spring { spring, .. } => spring.is_settled(),
        }
    }

    fn step(&mut self, dt: f32) {
        match self {
            Motion::Tween(tween) => tween.step(dt),
            Motion::Spring {
                spring,
                elapsed,
                limit,
            } => {
                *elapsed += dt;
                if limit.is_some_and(|limit| *elapsed >= limit) {
                    spring.snap_to_target();
                } else {
                    spring.step(dt);
                }
            }
        }
    }
}

struct MotionEntry {
    motion: Motion,
    reported: bool,
}

/// Steps running motions and reports completions
#[derive(Default)]
pub struct FrameScheduler {
    motions: SlotMap<MotionId, MotionEntry>,
    frame: u64,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a motion; it advances on the next tick
    pub fn start(&mut self, motion: Motion) -> MotionId {
        self.motions.insert(MotionEntry {
            motion,
            reported: false,
        })
    }

    /// Tick all motions
    ///
    /// Returns the motions that finished during this tick. A motion is
    /// reported once; it stays readable until removed.
    pub fn tick(&mut self, dt: f32) -> SmallVec<[MotionId; 4]> {
        self.frame += 1;
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };

        let mut finished = SmallVec::new();
        for (id, entry) in self.motions.iter_mut() {
            if entry.reported {
                continue;
            }
            entry.motion.step(dt);
            if entry.motion.is_finished() {
                entry.reported = true;
                finished.push(id);
            }
        }

        if !finished.is_empty() {
            tracing::trace!(frame = self.frame, count = finished.len(), "motions finished");
        }
        finished
    }

    pub fn value(&self, id: MotionId) -> Option<f32> {
        self.motions.get(id).map(|entry| entry.motion.value())
    }

    pub fn velocity(&self, id: MotionId) -> Option<f32> {
        self.motions.get(id).map(|entry| entry.motion.velocity())
    }

    /// True once the motion finished (or if it no longer exists)
    pub fn is_finished(&self, id: MotionId) -> bool {
        self.motions
            .get(id)
            .map_or(true, |entry| entry.motion.is_finished())
    }

    pub fn remove(&mut self, id: MotionId) -> Option<Motion> {
        self.motions.remove(id).map(|entry| entry.motion)
    }

    /// Check if any motions are still moving
    pub fn has_active_motions(&self) -> bool {
        self.motions.values().any(|entry| !entry.reported)
    }

    /// Number of registered motions, finished or not
    pub fn len(&self) -> usize {
        self.motions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.motions.is_empty()
    }

    /// Number of ticks so far
    pub fn frame(&self) -> u64 {
        self.frame
    }
}
