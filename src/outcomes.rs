// Copyright 2025 Cowboy AI, LLC.

//! Plain result objects returned by the engines
//!
//! Outcomes are data only. The dispatcher adds `success: true` when it turns
//! them into JSON.

use crate::identifiers::EmployeeId;
use crate::state_machine::RecordStatus;
use crate::workflow::ApprovalRole;
use serde::{Deserialize, Serialize};

/// Result of starting a workflow
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitiationOutcome {
    /// Identifier of the new record
    pub employee_id: EmployeeId,
    /// Always `Initiated`
    pub status: RecordStatus,
    /// Human-readable summary
    pub message: String,
    /// Approvals the record now waits for
    pub next_steps: Vec<String>,
}

impl InitiationOutcome {
    pub(crate) fn new(employee_id: EmployeeId, message: String) -> Self {
        Self {
            employee_id,
            status: RecordStatus::Initiated,
            message,
            next_steps: vec!["HR Approval".to_string(), "Manager Approval".to_string()],
        }
    }
}

/// Result of one approval decision
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApprovalOutcome {
    /// Decided record
    pub employee_id: EmployeeId,
    /// Deciding role
    pub role: ApprovalRole,
    /// The decision
    pub approved: bool,
    /// Status after the decision
    pub status: RecordStatus,
    /// What happens next
    pub next_steps: Vec<String>,
    /// Human-readable summary
    pub message: String,
}

/// Result of a checklist tracker update.
///
/// `flags` holds the full tracker state after the update, not the delta.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistOutcome<T> {
    /// Updated record
    pub employee_id: EmployeeId,
    /// Status after the update
    pub status: RecordStatus,
    /// Tracker state
    pub flags: T,
    /// Whether every flag of the tracker is set
    pub all_set: bool,
    /// System names that were not recognised
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ignored: Vec<String>,
    /// Human-readable summary
    pub message: String,
}

/// Result of a successful completion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionOutcome {
    /// Completed record
    pub employee_id: EmployeeId,
    /// Always `Completed`
    pub status: RecordStatus,
    /// Who signed off
    pub completed_by: String,
    /// Notifications for the delivery layer
    pub notifications: Vec<String>,
    /// Human-readable summary
    pub message: String,
}
