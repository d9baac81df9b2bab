// Copyright 2025 Cowboy AI, LLC.

//! Approval gate
//!
//! Two independent role decisions are folded into one aggregate status.

use super::record::{LifecycleRecord, RecordMut};
use crate::errors::LifecycleResult;
use crate::state_machine::RecordStatus;
use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{de, Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::info;

/// Role whose sign-off a workflow requires
///
/// Decoded case-insensitively, so `"HR"` and `"Manager"` are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ApprovalRole {
    /// Human resources
    Hr,
    /// The employee's manager
    Manager,
}

impl ApprovalRole {
    /// Both roles
    pub const ALL: [ApprovalRole; 2] = [Self::Hr, Self::Manager];

    /// Wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hr => "hr",
            Self::Manager => "manager",
        }
    }
}

impl fmt::Display for ApprovalRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApprovalRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hr" => Ok(Self::Hr),
            "manager" => Ok(Self::Manager),
            other => Err(format!("unknown approval role: {other}")),
        }
    }
}

impl<'de> Deserialize<'de> for ApprovalRole {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer)?.parse().map_err(de::Error::custom)
    }
}

/// One role's decision
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApprovalSlot {
    /// Whether the role has signed off
    pub approved: bool,
    /// Who decided, once a decision exists
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approver: Option<String>,
    /// When the decision was made
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,
}

/// Decisions for both roles of a record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Approvals {
    /// HR decision
    pub hr: ApprovalSlot,
    /// Manager decision
    pub manager: ApprovalSlot,
}

impl Approvals {
    /// The slot for a role
    pub fn slot(&self, role: ApprovalRole) -> &ApprovalSlot {
        match role {
            ApprovalRole::Hr => &self.hr,
            ApprovalRole::Manager => &self.manager,
        }
    }

    fn slot_mut(&mut self, role: ApprovalRole) -> &mut ApprovalSlot {
        match role {
            ApprovalRole::Hr => &mut self.hr,
            ApprovalRole::Manager => &mut self.manager,
        }
    }

    /// Overwrite a role's slot with a new decision
    pub fn record(
        &mut self,
        role: ApprovalRole,
        approver: &str,
        approved: bool,
        at: DateTime<Utc>,
    ) {
        *self.slot_mut(role) = ApprovalSlot {
            approved,
            approver: Some(approver.to_string()),
            date: Some(at),
        };
    }

    /// Whether both roles show `approved = true`
    pub fn all_approved(&self) -> bool {
        self.hr.approved && self.manager.approved
    }

    /// Per-role pending flags
    pub fn pending(&self) -> PendingApprovals {
        PendingApprovals {
            hr: !self.hr.approved,
            manager: !self.manager.approved,
        }
    }
}

/// Which roles have not yet approved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingApprovals {
    /// HR still pending
    pub hr: bool,
    /// Manager still pending
    pub manager: bool,
}

impl PendingApprovals {
    /// Whether any role is still pending
    pub fn any(&self) -> bool {
        self.hr || self.manager
    }
}

/// A role's binary decision on a record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApprovalDecision {
    /// Deciding role
    pub role: ApprovalRole,
    /// Name of the person deciding
    pub approver: String,
    /// Approve or reject
    pub approved: bool,
    /// Optional comment, used as the audit details
    pub comments: Option<String>,
}

/// Status after a decision has been written into `approvals`.
///
/// Both approved wins; otherwise a rejection reverts to `PendingApproval`;
/// a lone approval leaves `current` untouched.
pub fn derive_status(current: RecordStatus, approvals: &Approvals, approved: bool) -> RecordStatus {
    if approvals.all_approved() {
        RecordStatus::Approved
    } else if !approved {
        RecordStatus::PendingApproval
    } else {
        current
    }
}

/// Next-step hint for an approval outcome
pub fn next_steps<R: LifecycleRecord>(record: &R) -> Vec<String> {
    if record.approvals().all_approved() {
        R::KIND.approved_next_steps()
    } else {
        vec!["Pending other approvals".to_string()]
    }
}

/// Apply a decision to a record, append its audit entry and return the new status
pub(crate) fn record_decision<R: RecordMut>(
    record: &mut R,
    decision: &ApprovalDecision,
) -> LifecycleResult<RecordStatus> {
    record.ensure_open()?;

    record
        .approvals_mut()
        .record(decision.role, &decision.approver, decision.approved, Utc::now());

    let status = derive_status(record.status(), record.approvals(), decision.approved);
    if status != record.status() {
        record.transition_to(status)?;
    }

    let verdict = if decision.approved { "Approved" } else { "Rejected" };
    let details = decision.comments.clone().unwrap_or_else(|| {
        format!(
            "{} {} by {} ({})",
            R::KIND,
            verdict.to_lowercase(),
            decision.approver,
            decision.role
        )
    });
    record.record_action(
        format!("{} {verdict}", decision.role.as_str().to_uppercase()),
        decision.approver.clone(),
        details,
    );

    info!(
        employee_id = %record.employee_id(),
        kind = %R::KIND,
        role = %decision.role,
        approved = decision.approved,
        status = %status,
        "Approval decision recorded"
    );

    Ok(status)
}
