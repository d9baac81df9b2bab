// Copyright 2025 Cowboy AI, LLC.

//! Commands accepted by the lifecycle engines
//!
//! Commands arrive already decoded from the caller's named arguments
//! (camelCase on the wire). Their JSON Schemas double as tool input schemas.

use crate::identifiers::EmployeeId;
use crate::workflow::ApprovalRole;
use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Start onboarding a new employee
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct InitiateOnboarding {
    /// Full name
    pub name: String,
    /// Work email address
    pub email: String,
    /// First working day (YYYY-MM-DD)
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
    /// e.g. `Full-time`
    pub employment_type: String,
    /// Initial project, if known
    #[serde(default)]
    pub project_assignment: Option<String>,
    /// Who started the process
    pub initiated_by: String,
}

/// Record one role's decision on a record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecordApproval {
    /// Employee whose record is being decided
    pub employee_id: EmployeeId,
    /// `hr` or `manager`
    pub role: ApprovalRole,
    /// Name of the person deciding
    pub approver_name: String,
    /// Approve (`true`) or reject (`false`)
    pub approved: bool,
    /// Optional comment stored as the audit details
    #[serde(default)]
    pub comments: Option<String>,
}

/// Mark systems as provisioned (onboarding) or deprovisioned (offboarding).
///
/// Names outside `hrms`, `email`, `network`, `projectTools` are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSystems {
    /// Employee whose record is updated
    pub employee_id: EmployeeId,
    /// System names
    pub systems: Vec<String>,
    /// Audit actor; defaults to the configured IT system name
    #[serde(default, alias = "provisionedBy", alias = "deprovisionedBy")]
    pub performed_by: Option<String>,
}

/// Update onboarding compliance checks; absent fields are left alone
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOnboardingCompliance {
    /// Employee whose record is updated
    pub employee_id: EmployeeId,
    /// NDA signed
    #[serde(default)]
    pub nda_signed: Option<bool>,
    /// Identity verified
    #[serde(default)]
    pub id_verified: Option<bool>,
    /// Background check cleared
    #[serde(default)]
    pub background_check: Option<bool>,
    /// Audit actor; defaults to the configured compliance system name
    #[serde(default)]
    pub verified_by: Option<String>,
}

/// Update payroll and benefits enrollment; absent fields are left alone
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct EnrollFinance {
    /// Employee whose record is updated
    pub employee_id: EmployeeId,
    /// Added to payroll
    #[serde(default)]
    pub payroll: Option<bool>,
    /// Enrolled in benefits
    #[serde(default)]
    pub benefits: Option<bool>,
    /// Audit actor; defaults to the configured finance system name
    #[serde(default)]
    pub processed_by: Option<String>,
}

/// Attempt the terminal transition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompleteWorkflow {
    /// Employee whose record is completed
    pub employee_id: EmployeeId,
    /// Who signs off the completion
    pub completed_by: String,
}

/// Start offboarding an existing employee
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct InitiateOffboarding {
    /// Identifier of the departing employee
    pub employee_id: EmployeeId,
    /// Full name
    pub employee_name: String,
    /// Final working day (YYYY-MM-DD)
    pub last_working_day: NaiveDate,
    /// Reason for leaving
    pub reason: String,
    /// Department
    pub department: String,
    /// Reporting manager
    pub manager: String,
    /// Who started the process
    pub initiated_by: String,
}

/// Update exit compliance checks; absent fields are left alone
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOffboardingCompliance {
    /// Employee whose record is updated
    pub employee_id: EmployeeId,
    /// Exit form submitted
    #[serde(default)]
    pub exit_form_submitted: Option<bool>,
    /// Company assets returned
    #[serde(default)]
    pub assets_returned: Option<bool>,
    /// Clearance certificate issued
    #[serde(default)]
    pub clearance_certificate: Option<bool>,
    /// Audit actor; defaults to the configured compliance system name
    #[serde(default)]
    pub verified_by: Option<String>,
}

/// Settle the final payroll; absent fields are left alone
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProcessFinalPayroll {
    /// Employee whose record is updated
    pub employee_id: EmployeeId,
    /// Final salary processed
    #[serde(default)]
    pub processed: Option<bool>,
    /// Benefits terminated
    #[serde(default)]
    pub benefits_terminated: Option<bool>,
    /// Audit actor; defaults to the configured finance system name
    #[serde(default)]
    pub processed_by: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_initiate_onboarding_from_camel_case() {
        let cmd: InitiateOnboarding = serde_json::from_value(json!({
            "name": "Alice",
            "email": "a@x.com",
            "dateOfJoining": "2024-01-01",
            "department": "Eng",
            "designation": "SWE",
            "manager": "Bob",
            "workLocation": "Remote",
            "contactPhone": "555-0100",
            "employmentType": "Full-time",
            "initiatedBy": "HR1"
        }))
        .unwrap();

        assert_eq!(cmd.date_of_joining, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert!(cmd.project_assignment.is_none());
    }

    #[test]
    fn test_optional_flags_default_to_absent() {
        let cmd: EnrollFinance =
            serde_json::from_value(json!({"employeeId": "EMP-1", "payroll": true})).unwrap();
        assert_eq!(cmd.payroll, Some(true));
        assert_eq!(cmd.benefits, None);
        assert_eq!(cmd.processed_by, None);
    }

    #[test]
    fn test_approval_rejects_unknown_role() {
        let result = serde_json::from_value::<RecordApproval>(json!({
            "employeeId": "EMP-1",
            "role": "ceo",
            "approverName": "Zed",
            "approved": true
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_schema_lists_required_fields() {
        let schema = serde_json::to_value(schemars::schema_for!(CompleteWorkflow)).unwrap();
        let required: Vec<&str> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|v| v.as_str())
            .collect();
        assert!(required.contains(&"employeeId"));
        assert!(required.contains(&"completedBy"));
    }
}
