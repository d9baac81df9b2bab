// Copyright 2025 Cowboy AI, LLC.

//! Onboarding record

use super::approval::Approvals;
use super::checklist::{Checklist, FinanceEnrollment, OnboardingCompliance, SystemAccess};
use super::completion::CompletionChecklist;
use super::record::{LifecycleRecord, RecordMut};
use crate::audit::AuditTrail;
use crate::entity::{AggregateRoot, WorkflowKind};
use crate::identifiers::EmployeeId;
use crate::state_machine::RecordStatus;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// The person being onboarded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Identifier assigned at initiation
    pub id: EmployeeId,
    /// Full name
    pub name: String,
    /// Work email address
    pub email: String,
    /// First working day
    pub date_of_joining: NaiveDate,
    /// Department
    pub department: String,
    /// Job title
    pub designation: String,
    /// Reporting manager
    pub manager: String,
    /// Office or `Remote`
    pub work_location: String,
    /// Contact phone number
    pub contact_phone: String,
    /// e.g. `Full-time`, `Contract`
    pub employment_type: String,
    /// Initial project, if already known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_assignment: Option<String>,
}

/// Onboarding state for one employee
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingRecord {
    employee: Employee,
    status: RecordStatus,
    approvals: Approvals,
    system_provisioning: SystemAccess,
    compliance: OnboardingCompliance,
    finance_enrollment: FinanceEnrollment,
    audit_trail: AuditTrail,
    initiated_at: DateTime<Utc>,
    #[serde(default)]
    version: u64,
}

impl OnboardingRecord {
    /// Seed a record: status `Initiated`, every flag false, approvals unset,
    /// and a single `Onboarding Initiated` audit entry.
    pub fn initiate(employee: Employee, initiated_by: &str) -> Self {
        let details = format!(
            "Onboarding initiated for {} ({}, {})",
            employee.name, employee.designation, employee.department
        );
        let mut record = Self {
            employee,
            status: RecordStatus::Initiated,
            approvals: Approvals::default(),
            system_provisioning: SystemAccess::default(),
            compliance: OnboardingCompliance::default(),
            finance_enrollment: FinanceEnrollment::default(),
            audit_trail: AuditTrail::new(),
            initiated_at: Utc::now(),
            version: 0,
        };
        record.record_action("Onboarding Initiated", initiated_by, details);
        record
    }

    /// The employee being onboarded
    pub fn employee(&self) -> &Employee {
        &self.employee
    }

    /// Provisioning flags
    pub fn system_provisioning(&self) -> &SystemAccess {
        &self.system_provisioning
    }

    /// Compliance flags
    pub fn compliance(&self) -> &OnboardingCompliance {
        &self.compliance
    }

    /// Finance enrollment flags
    pub fn finance_enrollment(&self) -> &FinanceEnrollment {
        &self.finance_enrollment
    }

    /// When the record was created
    pub fn initiated_at(&self) -> DateTime<Utc> {
        self.initiated_at
    }

    pub(crate) fn system_provisioning_mut(&mut self) -> &mut SystemAccess {
        &mut self.system_provisioning
    }

    pub(crate) fn compliance_mut(&mut self) -> &mut OnboardingCompliance {
        &mut self.compliance
    }

    pub(crate) fn finance_enrollment_mut(&mut self) -> &mut FinanceEnrollment {
        &mut self.finance_enrollment
    }
}

impl AggregateRoot for OnboardingRecord {
    type Id = EmployeeId;

    fn id(&self) -> Self::Id {
        self.employee.id.clone()
    }

    fn version(&self) -> u64 {
        self.version
    }

    fn increment_version(&mut self) {
        self.version += 1;
    }
}

impl LifecycleRecord for OnboardingRecord {
    const KIND: WorkflowKind = WorkflowKind::Onboarding;

    fn employee_id(&self) -> &EmployeeId {
        &self.employee.id
    }

    fn employee_name(&self) -> &str {
        &self.employee.name
    }

    fn status(&self) -> RecordStatus {
        self.status
    }

    fn approvals(&self) -> &Approvals {
        &self.approvals
    }

    fn audit_trail(&self) -> &AuditTrail {
        &self.audit_trail
    }

    fn completion_checklist(&self) -> CompletionChecklist {
        CompletionChecklist::new()
            .with("approvals", self.approvals.all_approved())
            .with("systemProvisioning", self.system_provisioning.all_set())
            .with("compliance", self.compliance.all_set())
            .with("financeEnrollment", self.finance_enrollment.all_set())
    }

    fn completion_notifications(&self) -> Vec<String> {
        vec![
            format!("Welcome email sent to {} <{}>", self.employee.name, self.employee.email),
            format!(
                "Manager {} notified that {} is ready to start on {}",
                self.employee.manager, self.employee.name, self.employee.date_of_joining
            ),
            format!("HR notified: onboarding completed for {}", self.employee.name),
        ]
    }
}

impl RecordMut for OnboardingRecord {
    fn status_mut(&mut self) -> &mut RecordStatus {
        &mut self.status
    }

    fn approvals_mut(&mut self) -> &mut Approvals {
        &mut self.approvals
    }

    fn audit_trail_mut(&mut self) -> &mut AuditTrail {
        &mut self.audit_trail
    }
}
