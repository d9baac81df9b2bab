// Copyright 2025 Cowboy AI, LLC.

//! Record status state machine
//!
//! Both workflow kinds share one progression:
//!
//! ```text
//! Initiated --(rejecting approval)--> PendingApproval --(re-approval)--> Approved
//! Initiated --(all approvals true)--> Approved
//! Approved  --(checklist flags applied)--> InProgress
//! InProgress --(completion gate)--> Completed
//! ```
//!
//! `Completed` is terminal and only the completion gate may enter it.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug};

/// Trait for types that can be used as states in a state machine
pub trait State: Debug + Clone + PartialEq + Eq + Send + Sync {
    /// Get the name of this state for logging/debugging
    fn name(&self) -> &'static str;

    /// Check if this is a terminal state
    fn is_terminal(&self) -> bool {
        false
    }

    /// Check if a transition to the target state is valid
    fn can_transition_to(&self, target: &Self) -> bool;

    /// Get all valid target states from this state
    fn valid_transitions(&self) -> Vec<Self>;
}

/// Lifecycle status of an onboarding or offboarding record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum RecordStatus {
    /// Record created, no decision yet
    Initiated,
    /// At least one approver rejected; waiting for a fresh decision
    PendingApproval,
    /// Both roles approved
    Approved,
    /// Checklist work has started
    InProgress,
    /// Terminal state
    Completed,
}

impl RecordStatus {
    /// Every status, in progression order
    pub const ALL: [RecordStatus; 5] = [
        Self::Initiated,
        Self::PendingApproval,
        Self::Approved,
        Self::InProgress,
        Self::Completed,
    ];
}

impl State for RecordStatus {
    fn name(&self) -> &'static str {
        match self {
            Self::Initiated => "Initiated",
            Self::PendingApproval => "PendingApproval",
            Self::Approved => "Approved",
            Self::InProgress => "InProgress",
            Self::Completed => "Completed",
        }
    }

    fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed)
    }

    fn can_transition_to(&self, target: &Self) -> bool {
        match (self, target) {
            (Self::Completed, _) => false,
            (Self::Approved | Self::InProgress, Self::Completed) => true,
            (_, Self::Completed) => false,
            // Initiated is only ever entered at creation
            (_, Self::Initiated) => false,
            _ => true,
        }
    }

    fn valid_transitions(&self) -> Vec<Self> {
        Self::ALL
            .iter()
            .copied()
            .filter(|target| self.can_transition_to(target))
            .collect()
    }
}

impl fmt::Display for RecordStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_completed_is_terminal() {
        assert!(RecordStatus::Completed.is_terminal());
        assert!(RecordStatus::Completed.valid_transitions().is_empty());
        for status in RecordStatus::ALL {
            if status != RecordStatus::Completed {
                assert!(!status.is_terminal(), "{status} should not be terminal");
            }
        }
    }

    #[test]
    fn test_completion_only_from_approved_or_in_progress() {
        assert!(RecordStatus::Approved.can_transition_to(&RecordStatus::Completed));
        assert!(RecordStatus::InProgress.can_transition_to(&RecordStatus::Completed));
        assert!(!RecordStatus::Initiated.can_transition_to(&RecordStatus::Completed));
        assert!(!RecordStatus::PendingApproval.can_transition_to(&RecordStatus::Completed));
    }

    #[test]
    fn test_nothing_returns_to_initiated() {
        for status in RecordStatus::ALL {
            assert!(!status.can_transition_to(&RecordStatus::Initiated));
        }
    }

    #[test]
    fn test_rejection_and_provisioning_edges() {
        // Rejections revert to PendingApproval from any open state
        for status in [
            RecordStatus::Initiated,
            RecordStatus::PendingApproval,
            RecordStatus::Approved,
            RecordStatus::InProgress,
        ] {
            assert!(status.can_transition_to(&RecordStatus::PendingApproval));
            assert!(status.can_transition_to(&RecordStatus::InProgress));
        }

        assert_eq!(
            RecordStatus::Initiated.valid_transitions(),
            vec![
                RecordStatus::PendingApproval,
                RecordStatus::Approved,
                RecordStatus::InProgress,
            ]
        );
    }

    #[test]
    fn test_display_names_match_serialization() {
        for status in RecordStatus::ALL {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.name()));
            let back: RecordStatus = serde_json::from_str(&json).unwrap();
            assert_eq!(back, status);
        }
    }
}
