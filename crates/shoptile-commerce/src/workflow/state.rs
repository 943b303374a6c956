//! Submission workflow states.

use serde::{Deserialize, Serialize};

/// Phases of a single add-to-cart attempt.
///
/// Attempts move `Idle -> Validating -> Submitting -> Succeeded | Failed`
/// and collapse back to `Idle` once the outcome is delivered. Rejections
/// during validation skip `Submitting` entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum WorkflowState {
    /// No attempt in flight, ready to accept a submit.
    #[default]
    Idle,
    /// Stock and selection preconditions being checked.
    Validating,
    /// Remote add-to-cart call in flight.
    Submitting,
    /// The attempt put an item in the cart.
    Succeeded,
    /// The attempt was rejected or the remote call failed.
    Failed,
}

impl WorkflowState {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkflowState::Idle => "idle",
            WorkflowState::Validating => "validating",
            WorkflowState::Submitting => "submitting",
            WorkflowState::Succeeded => "succeeded",
            WorkflowState::Failed => "failed",
        }
    }

    /// True while a submit attempt owns the workflow. Render layers
    /// disable the add-to-cart control while this holds.
    pub fn is_busy(&self) -> bool {
        !matches!(self, WorkflowState::Idle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state_is_idle() {
        assert_eq!(WorkflowState::default(), WorkflowState::Idle);
    }

    #[test]
    fn test_as_str() {
        assert_eq!(WorkflowState::Idle.as_str(), "idle");
        assert_eq!(WorkflowState::Validating.as_str(), "validating");
        assert_eq!(WorkflowState::Submitting.as_str(), "submitting");
        assert_eq!(WorkflowState::Succeeded.as_str(), "succeeded");
        assert_eq!(WorkflowState::Failed.as_str(), "failed");
    }

    #[test]
    fn test_only_idle_is_not_busy() {
        assert!(!WorkflowState::Idle.is_busy());
        assert!(WorkflowState::Validating.is_busy());
        assert!(WorkflowState::Submitting.is_busy());
        assert!(WorkflowState::Succeeded.is_busy());
        assert!(WorkflowState::Failed.is_busy());
    }
}
