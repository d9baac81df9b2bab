// Copyright 2025 Cowboy AI, LLC.

//! Query handlers
//!
//! Read-only projections over both record stores. Queries never touch the
//! audit trail or the version counter.

use crate::entity::{KindFilter, WorkflowKind};
use crate::errors::{LifecycleError, LifecycleResult};
use crate::identifiers::EmployeeId;
use crate::persistence::RecordRepository;
use crate::state_machine::RecordStatus;
use crate::workflow::{LifecycleRecord, OffboardingRecord, OnboardingRecord, PendingApprovals};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Query handler trait that returns data directly
pub trait DirectQueryHandler<Q, R> {
    /// Handle the query and return the result
    fn handle(&self, query: Q) -> LifecycleResult<R>;
}

/// Full onboarding record snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetOnboardingStatus {
    /// Employee to look up
    pub employee_id: EmployeeId,
}

/// Full offboarding record snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetOffboardingStatus {
    /// Employee to look up
    pub employee_id: EmployeeId,
}

/// Records still waiting on at least one approval
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListPendingApprovals {
    /// `onboarding`, `offboarding` or `all` (default)
    #[serde(default, alias = "type")]
    pub kind: KindFilter,
}

/// Whichever record exists for an employee, onboarding first
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetEmployeeDetails {
    /// Employee to look up
    pub employee_id: EmployeeId,
}

/// One row of the pending approvals report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingApprovalEntry {
    /// Employee
    pub employee_id: EmployeeId,
    /// Display name
    pub employee_name: String,
    /// Workflow the record belongs to
    #[serde(rename = "type")]
    pub kind: WorkflowKind,
    /// Current status
    pub status: RecordStatus,
    /// Roles that have not approved
    pub pending_approvals: PendingApprovals,
}

impl PendingApprovalEntry {
    fn from_record<R: LifecycleRecord>(record: &R) -> Self {
        Self {
            employee_id: record.employee_id().clone(),
            employee_name: record.employee_name().to_string(),
            kind: R::KIND,
            status: record.status(),
            pending_approvals: record.pending_approvals(),
        }
    }
}

/// Pending approvals across the selected stores
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingApprovalsReport {
    /// Onboarding rows first, then offboarding, each in store order
    pub pending: Vec<PendingApprovalEntry>,
    /// Number of rows
    pub total: usize,
}

/// Result of an employee lookup, tagged with the store it came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "source", content = "record", rename_all = "lowercase")]
pub enum EmployeeDetails {
    /// Found in the onboarding store
    Onboarding(Box<OnboardingRecord>),
    /// Found in the offboarding store
    Offboarding(Box<OffboardingRecord>),
}

impl EmployeeDetails {
    /// Which store answered
    pub fn source(&self) -> WorkflowKind {
        match self {
            Self::Onboarding(_) => WorkflowKind::Onboarding,
            Self::Offboarding(_) => WorkflowKind::Offboarding,
        }
    }
}

fn pending_in<R, S>(store: &S, rows: &mut Vec<PendingApprovalEntry>) -> LifecycleResult<()>
where
    R: LifecycleRecord,
    S: RecordRepository<R>,
{
    rows.extend(
        store
            .list()?
            .iter()
            .filter(|record| record.pending_approvals().any())
            .map(PendingApprovalEntry::from_record),
    );
    Ok(())
}

/// Query handler over both record stores
#[derive(Debug)]
pub struct LifecycleQueryHandler<'a, On, Off> {
    onboarding: &'a On,
    offboarding: &'a Off,
}

impl<'a, On, Off> LifecycleQueryHandler<'a, On, Off>
where
    On: RecordRepository<OnboardingRecord>,
    Off: RecordRepository<OffboardingRecord>,
{
    /// Borrow both stores
    pub fn new(onboarding: &'a On, offboarding: &'a Off) -> Self {
        Self {
            onboarding,
            offboarding,
        }
    }
}

impl<On, Off> DirectQueryHandler<GetOnboardingStatus, OnboardingRecord>
    for LifecycleQueryHandler<'_, On, Off>
where
    On: RecordRepository<OnboardingRecord>,
    Off: RecordRepository<OffboardingRecord>,
{
    fn handle(&self, query: GetOnboardingStatus) -> LifecycleResult<OnboardingRecord> {
        debug!(employee_id = %query.employee_id, "Onboarding status query");
        self.onboarding.require(&query.employee_id)
    }
}

impl<On, Off> DirectQueryHandler<GetOffboardingStatus, OffboardingRecord>
    for LifecycleQueryHandler<'_, On, Off>
where
    On: RecordRepository<OnboardingRecord>,
    Off: RecordRepository<OffboardingRecord>,
{
    fn handle(&self, query: GetOffboardingStatus) -> LifecycleResult<OffboardingRecord> {
        debug!(employee_id = %query.employee_id, "Offboarding status query");
        self.offboarding.require(&query.employee_id)
    }
}

impl<On, Off> DirectQueryHandler<ListPendingApprovals, PendingApprovalsReport>
    for LifecycleQueryHandler<'_, On, Off>
where
    On: RecordRepository<OnboardingRecord>,
    Off: RecordRepository<OffboardingRecord>,
{
    fn handle(&self, query: ListPendingApprovals) -> LifecycleResult<PendingApprovalsReport> {
        let mut pending = Vec::new();
        if query.kind.includes(WorkflowKind::Onboarding) {
            pending_in::<OnboardingRecord, _>(self.onboarding, &mut pending)?;
        }
        if query.kind.includes(WorkflowKind::Offboarding) {
            pending_in::<OffboardingRecord, _>(self.offboarding, &mut pending)?;
        }

        debug!(kind = ?query.kind, total = pending.len(), "Pending approvals query");
        Ok(PendingApprovalsReport {
            total: pending.len(),
            pending,
        })
    }
}

impl<On, Off> DirectQueryHandler<GetEmployeeDetails, EmployeeDetails>
    for LifecycleQueryHandler<'_, On, Off>
where
    On: RecordRepository<OnboardingRecord>,
    Off: RecordRepository<OffboardingRecord>,
{
    fn handle(&self, query: GetEmployeeDetails) -> LifecycleResult<EmployeeDetails> {
        debug!(employee_id = %query.employee_id, "Employee details query");
        if let Some(record) = self.onboarding.get(&query.employee_id)? {
            return Ok(EmployeeDetails::Onboarding(Box::new(record)));
        }
        if let Some(record) = self.offboarding.get(&query.employee_id)? {
            return Ok(EmployeeDetails::Offboarding(Box::new(record)));
        }
        Err(LifecycleError::EmployeeNotFound(query.employee_id.to_string()))
    }
}
