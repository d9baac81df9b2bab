// Copyright 2025 Cowboy AI, LLC.

//! Offboarding record

use super::approval::Approvals;
use super::checklist::{Checklist, FinalPayroll, OffboardingCompliance, SystemAccess};
use super::completion::CompletionChecklist;
use super::record::{LifecycleRecord, RecordMut};
use crate::audit::AuditTrail;
use crate::entity::{AggregateRoot, WorkflowKind};
use crate::identifiers::EmployeeId;
use crate::state_machine::RecordStatus;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Who is leaving, when and why
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Departure {
    /// Identifier of the departing employee
    pub employee_id: EmployeeId,
    /// Full name
    pub employee_name: String,
    /// Final working day
    pub last_working_day: NaiveDate,
    /// Resignation, termination, retirement, ...
    pub reason: String,
    /// Department
    pub department: String,
    /// Reporting manager
    pub manager: String,
}

/// Offboarding state for one employee
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OffboardingRecord {
    employee_id: EmployeeId,
    employee_name: String,
    last_working_day: NaiveDate,
    reason: String,
    department: String,
    manager: String,
    status: RecordStatus,
    approvals: Approvals,
    system_deprovisioning: SystemAccess,
    compliance: OffboardingCompliance,
    final_payroll: FinalPayroll,
    audit_trail: AuditTrail,
    initiated_at: DateTime<Utc>,
    #[serde(default)]
    version: u64,
}

impl OffboardingRecord {
    /// Seed a record: status `Initiated`, every flag false, approvals unset,
    /// and a single `Offboarding Initiated` audit entry.
    pub fn initiate(departure: Departure, initiated_by: &str) -> Self {
        let details = format!(
            "Offboarding initiated for {}; last working day {}; reason: {}",
            departure.employee_name, departure.last_working_day, departure.reason
        );
        let mut record = Self {
            employee_id: departure.employee_id,
            employee_name: departure.employee_name,
            last_working_day: departure.last_working_day,
            reason: departure.reason,
            department: departure.department,
            manager: departure.manager,
            status: RecordStatus::Initiated,
            approvals: Approvals::default(),
            system_deprovisioning: SystemAccess::default(),
            compliance: OffboardingCompliance::default(),
            final_payroll: FinalPayroll::default(),
            audit_trail: AuditTrail::new(),
            initiated_at: Utc::now(),
            version: 0,
        };
        record.record_action("Offboarding Initiated", initiated_by, details);
        record
    }

    /// Final working day
    pub fn last_working_day(&self) -> NaiveDate {
        self.last_working_day
    }

    /// Reason for leaving
    pub fn reason(&self) -> &str {
        &self.reason
    }

    /// Department
    pub fn department(&self) -> &str {
        &self.department
    }

    /// Reporting manager
    pub fn manager(&self) -> &str {
        &self.manager
    }

    /// Deprovisioning flags
    pub fn system_deprovisioning(&self) -> &SystemAccess {
        &self.system_deprovisioning
    }

    /// Exit compliance flags
    pub fn compliance(&self) -> &OffboardingCompliance {
        &self.compliance
    }

    /// Final payroll flags
    pub fn final_payroll(&self) -> &FinalPayroll {
        &self.final_payroll
    }

    /// When the record was created
    pub fn initiated_at(&self) -> DateTime<Utc> {
        self.initiated_at
    }

    pub(crate) fn system_deprovisioning_mut(&mut self) -> &mut SystemAccess {
        &mut self.system_deprovisioning
    }

    pub(crate) fn compliance_mut(&mut self) -> &mut OffboardingCompliance {
        &mut self.compliance
    }

    pub(crate) fn final_payroll_mut(&mut self) -> &mut FinalPayroll {
        &mut self.final_payroll
    }
}

impl AggregateRoot for OffboardingRecord {
    type Id = EmployeeId;

    fn id(&self) -> Self::Id {
        self.employee_id.clone()
    }

    fn version(&self) -> u64 {
        self.version
    }

    fn increment_version(&mut self) {
        self.version += 1;
    }
}

impl LifecycleRecord for OffboardingRecord {
    const KIND: WorkflowKind = WorkflowKind::Offboarding;

    fn employee_id(&self) -> &EmployeeId {
        &self.employee_id
    }

    fn employee_name(&self) -> &str {
        &self.employee_name
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
            .with("systemDeprovisioning", self.system_deprovisioning.all_set())
            .with("compliance", self.compliance.all_set())
            .with("finalPayroll", self.final_payroll.all_set())
    }

    fn completion_notifications(&self) -> Vec<String> {
        vec![
            format!(
                "Farewell notice prepared for {} (last working day {})",
                self.employee_name, self.last_working_day
            ),
            format!(
                "Manager {} notified that offboarding of {} is complete",
                self.manager, self.employee_name
            ),
            format!("HR and IT notified: offboarding closed for {}", self.employee_name),
        ]
    }
}

impl RecordMut for OffboardingRecord {
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

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn departure(id: &str) -> Departure {
        Departure {
            employee_id: EmployeeId::from(id),
            employee_name: "Carol".to_string(),
            last_working_day: NaiveDate::from_ymd_opt(2024, 6, 28).unwrap(),
            reason: "Resignation".to_string(),
            department: "Sales".to_string(),
            manager: "Dave".to_string(),
        }
    }

    #[test]
    fn test_initiate_seeds_defaults() {
        let record = OffboardingRecord::initiate(departure("E-7"), "HR2");

        assert_eq!(record.status(), RecordStatus::Initiated);
        assert_eq!(record.employee_id(), &EmployeeId::from("E-7"));
        assert_eq!(record.employee_name(), "Carol");
        assert_eq!(record.system_deprovisioning().set_count(), 0);
        assert_eq!(record.compliance().set_count(), 0);
        assert_eq!(record.final_payroll().set_count(), 0);
        assert_eq!(record.audit_trail().actions(), vec!["Offboarding Initiated"]);
        assert!(record.pending_approvals().any());
    }

    #[test]
    fn test_checklist_names() {
        let record = OffboardingRecord::initiate(departure("E-7"), "HR2");
        let checklist = record.completion_checklist();
        let names: Vec<&str> = checklist.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["approvals", "systemDeprovisioning", "compliance", "finalPayroll"]);
    }

    #[test]
    fn test_snapshot_uses_flat_fields() {
        let record = OffboardingRecord::initiate(departure("E-7"), "HR2");
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["employeeId"], "E-7");
        assert_eq!(json["employeeName"], "Carol");
        assert_eq!(json["lastWorkingDay"], "2024-06-28");
        assert_eq!(json["finalPayroll"]["benefitsTerminated"], false);
        assert_eq!(json["compliance"]["clearanceCertificate"], false);
    }
}
