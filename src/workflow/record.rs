// Copyright 2025 Cowboy AI, LLC.

//! Behaviour shared by onboarding and offboarding records

use super::approval::{Approvals, PendingApprovals};
use super::completion::CompletionChecklist;
use crate::audit::AuditTrail;
use crate::entity::{AggregateRoot, WorkflowKind};
use crate::errors::{LifecycleError, LifecycleResult};
use crate::identifiers::EmployeeId;
use crate::state_machine::{RecordStatus, State};
use serde::Serialize;
use tracing::debug;

/// Read access to a lifecycle record
pub trait LifecycleRecord: AggregateRoot<Id = EmployeeId> + Clone + Send + Sync + Serialize {
    /// Which workflow this record belongs to
    const KIND: WorkflowKind;

    /// The employee's identifier
    fn employee_id(&self) -> &EmployeeId;

    /// The employee's display name
    fn employee_name(&self) -> &str;

    /// Current status
    fn status(&self) -> RecordStatus;

    /// Role decisions
    fn approvals(&self) -> &Approvals;

    /// Audit trail, oldest entry first
    fn audit_trail(&self) -> &AuditTrail;

    /// Evaluate every completion precondition
    fn completion_checklist(&self) -> CompletionChecklist;

    /// Notifications to hand to the delivery layer once completed
    fn completion_notifications(&self) -> Vec<String>;

    /// Whether the record reached its terminal state
    fn is_completed(&self) -> bool {
        self.status().is_terminal()
    }

    /// Per-role pending flags
    fn pending_approvals(&self) -> PendingApprovals {
        self.approvals().pending()
    }
}

/// Mutation hooks used by the gates. Kept crate-private so that status can
/// only move through the engine.
pub(crate) trait RecordMut: LifecycleRecord {
    fn status_mut(&mut self) -> &mut RecordStatus;

    fn approvals_mut(&mut self) -> &mut Approvals;

    fn audit_trail_mut(&mut self) -> &mut AuditTrail;

    /// Fail if the record is terminal
    fn ensure_open(&self) -> LifecycleResult<()> {
        if self.is_completed() {
            return Err(LifecycleError::invalid_state(format!(
                "{} for employee {} is already completed",
                Self::KIND,
                self.employee_id()
            )));
        }
        Ok(())
    }

    /// Move to `target` if the state machine allows it
    fn transition_to(&mut self, target: RecordStatus) -> LifecycleResult<()> {
        let current = self.status();
        if !current.can_transition_to(&target) {
            let allowed: Vec<&str> = current.valid_transitions().iter().map(State::name).collect();
            return Err(LifecycleError::invalid_state(format!(
                "{} for employee {} cannot move from {current} to {target} (allowed: {})",
                Self::KIND,
                self.employee_id(),
                allowed.join(", ")
            )));
        }

        debug!(
            employee_id = %self.employee_id(),
            from = %current,
            to = %target,
            "Status transition"
        );
        *self.status_mut() = target;
        Ok(())
    }

    /// Append exactly one audit entry and bump the version
    fn record_action(
        &mut self,
        action: impl Into<String>,
        actor: impl Into<String>,
        details: impl Into<String>,
    ) {
        self.audit_trail_mut().record(action, actor, details);
        self.increment_version();
    }
}
