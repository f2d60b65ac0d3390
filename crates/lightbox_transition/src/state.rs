//! Transition state machine
//!
//! ```text
//!            BEGIN_PRESENT           PRESENT_DONE
//!   Idle ─────────────────► Presenting ─────────────► Presented
//!    ▲                                                 │    ▲
//!    │ DISMISS_DONE                       BEGIN_DISMISS │    │ DISMISS_CANCELLED
//!    │                                                 ▼    │
//!    └───────────────────────────────────────────── Dismissing
//! ```
//!
//! Transitions are a pure table: `on_event` returns the next state or
//! `None` when the event is not accepted in the current state.

/// Events that drive [`TransitionState`]
pub mod transition_events {
    /// The host asked for the gallery to be presented
    pub const BEGIN_PRESENT: u32 = 20000;
    /// The present animation finished
    pub const PRESENT_DONE: u32 = 20001;
    /// The host asked for dismissal, or an interactive dismissal began
    pub const BEGIN_DISMISS: u32 = 20002;
    /// The dismissal animation finished and surfaces went home
    pub const DISMISS_DONE: u32 = 20003;
    /// An interactive dismissal was released short of the threshold and
    /// settled back on the paged layout
    pub const DISMISS_CANCELLED: u32 = 20004;
}

/// Lifecycle of a gallery session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TransitionState {
    /// No session
    #[default]
    Idle,
    /// Images morphing from thumbnails into pages
    Presenting,
    /// Paged gallery on screen
    Presented,
    /// Frontmost image heading back to its thumbnail (or being dragged)
    Dismissing,
}

impl TransitionState {
    /// Handle an event and return the new state, or None if no transition
    pub fn on_event(&self, event: u32) -> Option<Self> {
        use transition_events::*;

        match (self, event) {
            (TransitionState::Idle, BEGIN_PRESENT) => Some(TransitionState::Presenting),
            (TransitionState::Presenting, PRESENT_DONE) => Some(TransitionState::Presented),
            (TransitionState::Presented, BEGIN_DISMISS) => Some(TransitionState::Dismissing),
            (TransitionState::Dismissing, DISMISS_DONE) => Some(TransitionState::Idle),
            (TransitionState::Dismissing, DISMISS_CANCELLED) => Some(TransitionState::Presented),
            _ => None,
        }
    }

    /// Direction a transition in this state runs, if one is running
    pub fn direction(&self) -> Option<TransitionDirection> {
        match self {
            TransitionState::Presenting => Some(TransitionDirection::Presenting),
            TransitionState::Dismissing => Some(TransitionDirection::Dismissing),
            TransitionState::Idle | TransitionState::Presented => None,
        }
    }

    /// Returns true if a session exists
    pub fn is_active(&self) -> bool {
        !matches!(self, TransitionState::Idle)
    }

    pub fn name(&self) -> &'static str {
        match self {
            TransitionState::Idle => "idle",
            TransitionState::Presenting => "presenting",
            TransitionState::Presented => "presented",
            TransitionState::Dismissing => "dismissing",
        }
    }
}

/// Which way a transition runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransitionDirection {
    Presenting,
    Dismissing,
}
