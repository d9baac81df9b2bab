//! Offboarding through the engine API and the dispatcher

use chrono::NaiveDate;
use employee_lifecycle::{
    ApprovalRole, CompleteWorkflow, DirectQueryHandler, EmployeeDetails, EmployeeId, EngineConfig,
    GetEmployeeDetails, InitiateOffboarding, LifecycleError, LifecycleRecord, ProcessFinalPayroll,
    RecordApproval, RecordRepository, RecordStatus, ToolDispatcher, UpdateOffboardingCompliance,
    UpdateSystems, WorkflowKind,
};
use pretty_assertions::assert_eq;
use serde_json::json;

fn departure(id: &str) -> InitiateOffboarding {
    InitiateOffboarding {
        employee_id: EmployeeId::from(id),
        employee_name: "Carol".to_string(),
        last_working_day: NaiveDate::from_ymd_opt(2024, 6, 28).unwrap(),
        reason: "Resignation".to_string(),
        department: "Sales".to_string(),
        manager: "Dave".to_string(),
        initiated_by: "HR2".to_string(),
    }
}

fn approval(id: &str, role: ApprovalRole) -> RecordApproval {
    RecordApproval {
        employee_id: EmployeeId::from(id),
        role,
        approver_name: "Approver".to_string(),
        approved: true,
        comments: Some("Handover agreed".to_string()),
    }
}

#[test]
fn offboarding_runs_to_completion() {
    let tools = ToolDispatcher::in_memory(EngineConfig::default());
    let engine = tools.offboarding();

    let started = engine.initiate(departure("EMP-42")).unwrap();
    assert_eq!(started.status, RecordStatus::Initiated);

    engine.approve(approval("EMP-42", ApprovalRole::Manager)).unwrap();
    let approved = engine.approve(approval("EMP-42", ApprovalRole::Hr)).unwrap();
    assert_eq!(approved.status, RecordStatus::Approved);
    assert_eq!(
        approved.next_steps,
        vec!["System Deprovisioning", "Compliance Checks", "Final Payroll"]
    );

    let systems = engine
        .deprovision_systems(UpdateSystems {
            employee_id: EmployeeId::from("EMP-42"),
            systems: vec!["hrms".into(), "email".into(), "network".into(), "projectTools".into()],
            performed_by: Some("Helpdesk".to_string()),
        })
        .unwrap();
    assert!(systems.all_set);
    assert_eq!(systems.status, RecordStatus::InProgress);

    engine
        .update_compliance(UpdateOffboardingCompliance {
            employee_id: EmployeeId::from("EMP-42"),
            exit_form_submitted: Some(true),
            assets_returned: Some(true),
            clearance_certificate: Some(true),
            verified_by: None,
        })
        .unwrap();

    let complete = CompleteWorkflow {
        employee_id: EmployeeId::from("EMP-42"),
        completed_by: "HR2".to_string(),
    };
    let refused = engine.complete(complete.clone()).unwrap_err();
    assert_eq!(
        refused.checklist().unwrap().failing(),
        vec!["finalPayroll"]
    );

    engine
        .process_final_payroll(ProcessFinalPayroll {
            employee_id: EmployeeId::from("EMP-42"),
            processed: Some(true),
            benefits_terminated: Some(true),
            processed_by: None,
        })
        .unwrap();
    let done = engine.complete(complete).unwrap();
    assert_eq!(done.status, RecordStatus::Completed);

    let record = engine.store().require(&EmployeeId::from("EMP-42")).unwrap();
    assert_eq!(
        record.audit_trail().actions(),
        vec![
            "Offboarding Initiated",
            "MANAGER Approved",
            "HR Approved",
            "Systems Deprovisioned",
            "Exit Compliance Updated",
            "Final Payroll Processed",
            "Offboarding Completed",
        ]
    );
    let actors: Vec<&str> = record
        .audit_trail()
        .iter()
        .map(|entry| entry.actor.as_str())
        .collect();
    assert_eq!(actors[3], "Helpdesk");
    assert_eq!(actors[4], "Compliance System");
    assert_eq!(actors[5], "Finance System");
    assert_eq!(record.audit_trail().entries()[2].details, "Handover agreed");
}

#[test]
fn duplicate_offboarding_is_rejected() {
    let tools = ToolDispatcher::in_memory(EngineConfig::default());
    tools.offboarding().initiate(departure("EMP-42")).unwrap();

    let err = tools.offboarding().initiate(departure("EMP-42")).unwrap_err();
    assert!(matches!(
        err,
        LifecycleError::DuplicateId { kind: WorkflowKind::Offboarding, .. }
    ));
}

#[test]
fn employee_details_fall_back_to_offboarding() {
    let tools = ToolDispatcher::in_memory(EngineConfig::default());
    tools.offboarding().initiate(departure("EMP-42")).unwrap();

    let details = tools
        .queries()
        .handle(GetEmployeeDetails { employee_id: EmployeeId::from("EMP-42") })
        .unwrap();
    match details {
        EmployeeDetails::Offboarding(record) => assert_eq!(record.employee_name(), "Carol"),
        other => panic!("expected offboarding record, got {other:?}"),
    }

    let missing = tools.call("get_employee_details", json!({"employeeId": "EMP-0"}));
    assert_eq!(missing["success"], false);
}

#[test]
fn dispatcher_accepts_deprovisioned_by_alias() {
    let tools = ToolDispatcher::in_memory(EngineConfig::default());
    let started = tools.call(
        "initiate_offboarding",
        json!({
            "employeeId": "EMP-7",
            "employeeName": "Erin",
            "lastWorkingDay": "2024-07-31",
            "reason": "Relocation",
            "department": "Ops",
            "manager": "Fay",
            "initiatedBy": "HR3"
        }),
    );
    assert_eq!(started["success"], true, "{started}");
    assert_eq!(started["employeeId"], "EMP-7");

    let response = tools.call(
        "deprovision_systems",
        json!({"employeeId": "EMP-7", "systems": ["email"], "deprovisionedBy": "Ops Bot"}),
    );
    assert_eq!(response["success"], true, "{response}");

    let record = tools.call("get_offboarding_status", json!({"employeeId": "EMP-7"}));
    let trail = record["record"]["auditTrail"].as_array().unwrap();
    assert_eq!(trail.last().unwrap()["actor"], "Ops Bot");

    let pending = tools.call("list_pending_approvals", json!({"kind": "offboarding"}));
    assert_eq!(pending["total"], 1);
    assert_eq!(pending["pending"][0]["status"], "InProgress");
    let none = tools.call("list_pending_approvals", json!({"kind": "onboarding"}));
    assert_eq!(none["total"], 0);
}
