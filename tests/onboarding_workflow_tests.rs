//! Onboarding scenarios driven through the tool dispatcher

use employee_lifecycle::{EngineConfig, ToolDispatcher};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

fn dispatcher() -> ToolDispatcher {
    ToolDispatcher::in_memory(EngineConfig::default())
}

fn initiate(tools: &ToolDispatcher) -> String {
    let response = tools.call(
        "initiate_onboarding",
        json!({
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
        }),
    );
    assert_eq!(response["success"], true, "{response}");
    response["employeeId"].as_str().unwrap().to_string()
}

fn approve(tools: &ToolDispatcher, id: &str, role: &str, approved: bool) -> Value {
    tools.call(
        "approve_onboarding",
        json!({
            "employeeId": id,
            "role": role,
            "approverName": format!("{role} lead"),
            "approved": approved
        }),
    )
}

fn record(tools: &ToolDispatcher, id: &str) -> Value {
    let response = tools.call("get_onboarding_status", json!({"employeeId": id}));
    assert_eq!(response["success"], true, "{response}");
    response["record"].clone()
}

fn audit_len(tools: &ToolDispatcher, id: &str) -> usize {
    record(tools, id)["auditTrail"].as_array().unwrap().len()
}

fn satisfy_checklists(tools: &ToolDispatcher, id: &str) {
    tools.call(
        "provision_systems",
        json!({"employeeId": id, "systems": ["hrms", "email", "network", "projectTools"]}),
    );
    tools.call(
        "update_compliance",
        json!({"employeeId": id, "ndaSigned": true, "idVerified": true, "backgroundCheck": true}),
    );
    tools.call(
        "enroll_finance",
        json!({"employeeId": id, "payroll": true, "benefits": true}),
    );
}

#[test]
fn initiation_seeds_an_empty_record() {
    let tools = dispatcher();
    let id = initiate(&tools);
    assert!(id.starts_with("EMP-"));

    let record = record(&tools, &id);
    assert_eq!(record["status"], "Initiated");
    assert_eq!(record["approvals"]["hr"]["approved"], false);
    assert_eq!(record["approvals"]["manager"]["approved"], false);
    assert_eq!(
        record["systemProvisioning"],
        json!({"hrms": false, "email": false, "network": false, "projectTools": false})
    );
    assert_eq!(
        record["compliance"],
        json!({"ndaSigned": false, "idVerified": false, "backgroundCheck": false})
    );
    assert_eq!(record["financeEnrollment"], json!({"payroll": false, "benefits": false}));
    assert_eq!(record["auditTrail"].as_array().unwrap().len(), 1);
    assert_eq!(record["auditTrail"][0]["action"], "Onboarding Initiated");
}

#[test]
fn both_approvals_move_to_approved() {
    let tools = dispatcher();
    let id = initiate(&tools);

    let first = approve(&tools, &id, "hr", true);
    assert_eq!(first["status"], "Initiated");
    assert_eq!(first["nextSteps"], json!(["Pending other approvals"]));

    let second = approve(&tools, &id, "manager", true);
    assert_eq!(second["success"], true);
    assert_eq!(second["status"], "Approved");
    assert_eq!(
        second["nextSteps"],
        json!(["System Provisioning", "Compliance Checks", "Finance"])
    );
}

#[test]
fn rejection_reverts_to_pending_approval() {
    let tools = dispatcher();
    let id = initiate(&tools);
    approve(&tools, &id, "hr", true);
    approve(&tools, &id, "manager", true);

    let rejected = approve(&tools, &id, "hr", false);
    assert_eq!(rejected["status"], "PendingApproval");

    let trail = record(&tools, &id)["auditTrail"].clone();
    assert_eq!(trail.as_array().unwrap().last().unwrap()["action"], "HR Rejected");
}

#[test]
fn completion_with_unprovisioned_systems_is_refused() {
    let tools = dispatcher();
    let id = initiate(&tools);
    approve(&tools, &id, "hr", true);
    approve(&tools, &id, "manager", true);
    let before = audit_len(&tools, &id);

    let response = tools.call(
        "complete_onboarding",
        json!({"employeeId": id, "completedBy": "HR1"}),
    );

    assert_eq!(response["success"], false);
    assert_eq!(response["checklist"]["approvals"], true);
    assert_eq!(response["checklist"]["systemProvisioning"], false);
    assert!(response["error"].as_str().unwrap().contains("systemProvisioning"));
    assert_eq!(record(&tools, &id)["status"], "Approved");
    assert_eq!(audit_len(&tools, &id), before);
}

#[test]
fn provisioning_accumulates_and_forces_in_progress() {
    let tools = dispatcher();
    let id = initiate(&tools);

    let first = tools.call(
        "provision_systems",
        json!({"employeeId": id, "systems": ["email", "network"]}),
    );
    assert_eq!(first["status"], "InProgress");
    assert_eq!(first["allSet"], false);

    let second = tools.call(
        "provision_systems",
        json!({"employeeId": id, "systems": ["hrms", "projectTools", "printer"]}),
    );
    assert_eq!(second["status"], "InProgress");
    assert_eq!(second["allSet"], true);
    assert_eq!(second["ignored"], json!(["printer"]));
    assert_eq!(
        record(&tools, &id)["systemProvisioning"],
        json!({"hrms": true, "email": true, "network": true, "projectTools": true})
    );
}

#[test]
fn completion_succeeds_once_everything_holds() {
    let tools = dispatcher();
    let id = initiate(&tools);
    approve(&tools, &id, "hr", true);
    approve(&tools, &id, "manager", true);
    satisfy_checklists(&tools, &id);
    let before = audit_len(&tools, &id);

    let response = tools.call(
        "complete_onboarding",
        json!({"employeeId": id, "completedBy": "HR1"}),
    );

    assert_eq!(response["success"], true, "{response}");
    assert_eq!(response["status"], "Completed");
    assert_eq!(response["notifications"].as_array().unwrap().len(), 3);

    let record = record(&tools, &id);
    let trail = record["auditTrail"].as_array().unwrap();
    assert_eq!(trail.len(), before + 1);
    assert_eq!(trail.last().unwrap()["action"], "Onboarding Completed");
    assert_eq!(trail.last().unwrap()["actor"], "HR1");
}

#[test]
fn completed_records_reject_further_changes() {
    let tools = dispatcher();
    let id = initiate(&tools);
    approve(&tools, &id, "hr", true);
    approve(&tools, &id, "manager", true);
    satisfy_checklists(&tools, &id);
    tools.call("complete_onboarding", json!({"employeeId": id, "completedBy": "HR1"}));
    let before = audit_len(&tools, &id);

    let response = approve(&tools, &id, "hr", false);
    assert_eq!(response["success"], false);
    assert_eq!(record(&tools, &id)["status"], "Completed");
    assert_eq!(audit_len(&tools, &id), before);
}

#[test]
fn fresh_record_shows_up_as_pending() {
    let tools = dispatcher();
    let id = initiate(&tools);

    let response = tools.call("list_pending_approvals", json!({"kind": "all"}));

    assert_eq!(response["total"], 1);
    assert_eq!(response["pending"][0]["employeeId"], id.as_str());
    assert_eq!(response["pending"][0]["type"], "onboarding");
    assert_eq!(
        response["pending"][0]["pendingApprovals"],
        json!({"hr": true, "manager": true})
    );
}

#[test]
fn reads_do_not_touch_the_audit_trail() {
    let tools = dispatcher();
    let id = initiate(&tools);

    tools.call("get_onboarding_status", json!({"employeeId": id}));
    tools.call("list_pending_approvals", json!({}));
    tools.call("get_employee_details", json!({"employeeId": id}));

    assert_eq!(audit_len(&tools, &id), 1);
    assert_eq!(record(&tools, &id)["version"], 1);
}

#[test]
fn unknown_employee_is_reported() {
    let tools = dispatcher();
    let response = tools.call("get_onboarding_status", json!({"employeeId": "EMP-NOPE"}));
    assert_eq!(response["success"], false);
    assert_eq!(
        response["error"],
        "Onboarding record not found for employee EMP-NOPE"
    );
}

#[test]
fn kind_and_role_arguments_ignore_case() {
    let tools = dispatcher();
    let id = initiate(&tools);

    let offboarding = tools.call("list_pending_approvals", json!({"kind": "Offboarding"}));
    assert_eq!(offboarding["success"], true);
    assert_eq!(offboarding["total"], 0);

    let onboarding = tools.call("list_pending_approvals", json!({"type": "ONBOARDING"}));
    assert_eq!(onboarding["total"], 1);

    let first = approve(&tools, &id, "HR", true);
    assert_eq!(first["success"], true);
    let second = approve(&tools, &id, "Manager", true);
    assert_eq!(second["status"], "Approved");

    let unknown = tools.call("list_pending_approvals", json!({"kind": "payroll"}));
    assert_eq!(unknown["success"], false);
}
