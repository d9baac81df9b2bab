// Copyright 2025 Cowboy AI, LLC.

//! Completion gate
//!
//! The only path into `Completed`. Every precondition is evaluated before
//! anything is touched, so a failed attempt leaves the record exactly as it was.

use super::record::RecordMut;
use crate::errors::{LifecycleError, LifecycleResult};
use crate::state_machine::RecordStatus;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{info, warn};

/// Named completion preconditions and whether each holds
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompletionChecklist {
    items: IndexMap<String, bool>,
}

impl CompletionChecklist {
    /// Create an empty checklist
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, name: impl Into<String>, satisfied: bool) -> Self {
        self.insert(name, satisfied);
        self
    }

    /// Set a precondition's value
    pub fn insert(&mut self, name: impl Into<String>, satisfied: bool) {
        self.items.insert(name.into(), satisfied);
    }

    /// Value of one precondition
    pub fn get(&self, name: &str) -> Option<bool> {
        self.items.get(name).copied()
    }

    /// Whether every precondition holds
    pub fn is_satisfied(&self) -> bool {
        self.items.values().all(|ok| *ok)
    }

    /// Names of the preconditions that do not hold, in checklist order
    pub fn failing(&self) -> Vec<&str> {
        self.items
            .iter()
            .filter(|(_, ok)| !**ok)
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// All preconditions in checklist order
    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.items.iter().map(|(name, ok)| (name.as_str(), *ok))
    }
}

impl fmt::Display for CompletionChecklist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let items: Vec<String> = self.iter().map(|(name, ok)| format!("{name}: {ok}")).collect();
        f.write_str(&items.join(", "))
    }
}

/// Move a record to `Completed` if, and only if, every precondition holds.
///
/// Returns the notifications to dispatch. On failure the record is not
/// modified and the error carries the evaluated checklist.
pub(crate) fn complete<R: RecordMut>(
    record: &mut R,
    completed_by: &str,
) -> LifecycleResult<Vec<String>> {
    record.ensure_open()?;

    let checklist = record.completion_checklist();
    if !checklist.is_satisfied() {
        let failing = checklist.failing().join(", ");
        warn!(
            employee_id = %record.employee_id(),
            kind = %R::KIND,
            failing = %failing,
            "Completion rejected"
        );
        return Err(LifecycleError::InvalidState {
            reason: format!(
                "Cannot complete {} for employee {}: incomplete items: {failing}",
                R::KIND.name().to_lowercase(),
                record.employee_id()
            ),
            checklist: Some(checklist),
        });
    }

    record.transition_to(RecordStatus::Completed)?;
    record.record_action(
        format!("{} Completed", R::KIND),
        completed_by,
        format!("{} process completed for {}", R::KIND, record.employee_name()),
    );

    info!(
        employee_id = %record.employee_id(),
        kind = %R::KIND,
        completed_by = %completed_by,
        "Workflow completed"
    );

    Ok(record.completion_notifications())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_checklist_reports_failures_in_order() {
        let checklist = CompletionChecklist::new()
            .with("approvals", true)
            .with("systemProvisioning", false)
            .with("compliance", true)
            .with("financeEnrollment", false);

        assert!(!checklist.is_satisfied());
        assert_eq!(checklist.failing(), vec!["systemProvisioning", "financeEnrollment"]);
        assert_eq!(checklist.get("compliance"), Some(true));
        assert_eq!(checklist.get("unknown"), None);
        assert_eq!(
            checklist.to_string(),
            "approvals: true, systemProvisioning: false, compliance: true, financeEnrollment: false"
        );
    }

    #[test]
    fn test_checklist_serializes_as_object() {
        let checklist = CompletionChecklist::new()
            .with("approvals", true)
            .with("systemProvisioning", false);
        assert_eq!(
            serde_json::to_value(&checklist).unwrap(),
            serde_json::json!({"approvals": true, "systemProvisioning": false})
        );
    }

    #[test]
    fn test_empty_checklist_is_satisfied() {
        assert!(CompletionChecklist::new().is_satisfied());
    }
}
