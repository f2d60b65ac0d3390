//! Animators handed to the host's transition system
//!
//! The host asks the controller for an animator when its navigation layer
//! starts a present or dismiss transition, reads the duration, and runs it.
//! The completion fires exactly once, after the state machine and the
//! surfaces have settled.

use std::time::Duration;

use lightbox_core::SelectableImage;

use crate::controller::TransitionController;
use crate::state::TransitionDirection;

/// How a transition ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionOutcome {
    /// The transition reached its destination
    Completed,
    /// An interactive dismissal was released short of the threshold and
    /// the gallery stayed presented, or the session was aborted
    Cancelled,
}

impl TransitionOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, TransitionOutcome::Completed)
    }
}

/// A transition the host can time and run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionAnimator {
    Present { duration: Duration },
    Dismiss { duration: Duration },
}

impl TransitionAnimator {
    pub fn for_direction(direction: TransitionDirection, duration: Duration) -> Self {
        match direction {
            TransitionDirection::Presenting => TransitionAnimator::Present { duration },
            TransitionDirection::Dismissing => TransitionAnimator::Dismiss { duration },
        }
    }

    pub fn direction(&self) -> TransitionDirection {
        match self {
            TransitionAnimator::Present { .. } => TransitionDirection::Presenting,
            TransitionAnimator::Dismiss { .. } => TransitionDirection::Dismissing,
        }
    }

    /// How long the transition takes
    pub fn duration(&self) -> Duration {
        match self {
            TransitionAnimator::Present { duration } | TransitionAnimator::Dismiss { duration } => {
                *duration
            }
        }
    }

    /// Start the transition on `controller`
    ///
    /// Frames advance through [`TransitionController::tick`]. `completion`
    /// is called once when the transition ends.
    ///
    /// # Panics
    ///
    /// Panics if the controller is not in the matching transition state.
    pub fn run<H: SelectableImage>(
        self,
        controller: &mut TransitionController<H>,
        completion: impl FnOnce(TransitionOutcome) + 'static,
    ) {
        match self.direction() {
            TransitionDirection::Presenting => controller.run_present(Box::new(completion)),
            TransitionDirection::Dismissing => controller.run_dismiss(Box::new(completion)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_and_duration() {
        let animator =
            TransitionAnimator::for_direction(TransitionDirection::Dismissing, Duration::from_millis(350));
        assert_eq!(animator.direction(), TransitionDirection::Dismissing);
        assert_eq!(animator.duration(), Duration::from_millis(350));
        assert!(matches!(animator, TransitionAnimator::Dismiss { .. }));
    }
}
