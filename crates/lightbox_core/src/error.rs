//! Caller contract violations
//!
//! These are programmer errors, not operational failures. Constructors that
//! can check a precondition up front return them as values; controller entry
//! points report them and fail fast.

use thiserror::Error;

/// A precondition the caller of the gallery transition broke
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContractViolation {
    /// A presentation was requested with no selectable images
    #[error("gallery presentation requires at least one selectable image")]
    EmptyHandles,

    /// The selected index is not a position in the handle sequence
    #[error("selected index {index} is out of range for {count} selectable images")]
    SelectedIndexOutOfRange { index: usize, count: usize },

    /// `begin_presentation` was called without a prior `prepare`
    #[error("gallery presentation started without prepare()")]
    NotPrepared,

    /// The thumbnail at `index` did not hold its image surface when the
    /// gallery tried to take it
    #[error("selectable image {index} has no image surface to hand over")]
    SurfaceUnavailable { index: usize },

    /// An operation required a different transition state
    #[error("{operation} is not allowed while the gallery is {state}")]
    InvalidState {
        operation: &'static str,
        state: &'static str,
    },
}

impl ContractViolation {
    /// Shorthand for [`ContractViolation::InvalidState`]
    pub fn invalid_state(operation: &'static str, state: &'static str) -> Self {
        Self::InvalidState { operation, state }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_problem() {
        let err = ContractViolation::SelectedIndexOutOfRange { index: 3, count: 2 };
        assert_eq!(
            err.to_string(),
            "selected index 3 is out of range for 2 selectable images"
        );

        let err = ContractViolation::invalid_state("begin_dismissal", "idle");
        assert_eq!(
            err.to_string(),
            "begin_dismissal is not allowed while the gallery is idle"
        );
    }
}
