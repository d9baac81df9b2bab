// Copyright 2025 Cowboy AI, LLC.

//! Tool dispatch
//!
//! Maps operation names and JSON arguments onto the engines and the query
//! handler, and turns every result into a plain JSON object. Transport
//! framing (JSON-RPC, HTTP) belongs to the caller.

use crate::command_handlers::{OffboardingEngine, OnboardingEngine};
use crate::commands::{
    CompleteWorkflow, EnrollFinance, InitiateOffboarding, InitiateOnboarding, ProcessFinalPayroll,
    RecordApproval, UpdateOffboardingCompliance, UpdateOnboardingCompliance, UpdateSystems,
};
use crate::config::EngineConfig;
use crate::errors::{LifecycleError, LifecycleResult};
use crate::persistence::{InMemoryRepository, RecordRepository};
use crate::query_handlers::{
    DirectQueryHandler, GetEmployeeDetails, GetOffboardingStatus, GetOnboardingStatus,
    LifecycleQueryHandler, ListPendingApprovals,
};
use crate::workflow::{OffboardingRecord, OnboardingRecord};
use schemars::schema_for;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, warn};

/// Every operation the dispatcher understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Start onboarding
    InitiateOnboarding,
    /// HR or manager decision on onboarding
    ApproveOnboarding,
    /// Mark systems provisioned
    ProvisionSystems,
    /// Onboarding compliance checks
    UpdateCompliance,
    /// Payroll and benefits enrollment
    EnrollFinance,
    /// Finish onboarding
    CompleteOnboarding,
    /// Onboarding record snapshot
    GetOnboardingStatus,
    /// Start offboarding
    InitiateOffboarding,
    /// HR or manager decision on offboarding
    ApproveOffboarding,
    /// Mark systems deprovisioned
    DeprovisionSystems,
    /// Exit compliance checks
    UpdateOffboardingCompliance,
    /// Final salary and benefits termination
    ProcessFinalPayroll,
    /// Finish offboarding
    CompleteOffboarding,
    /// Offboarding record snapshot
    GetOffboardingStatus,
    /// Records waiting on approvals
    ListPendingApprovals,
    /// Any record for an employee
    GetEmployeeDetails,
}

impl Operation {
    /// Every operation, onboarding first
    pub const ALL: [Operation; 16] = [
        Self::InitiateOnboarding,
        Self::ApproveOnboarding,
        Self::ProvisionSystems,
        Self::UpdateCompliance,
        Self::EnrollFinance,
        Self::CompleteOnboarding,
        Self::GetOnboardingStatus,
        Self::InitiateOffboarding,
        Self::ApproveOffboarding,
        Self::DeprovisionSystems,
        Self::UpdateOffboardingCompliance,
        Self::ProcessFinalPayroll,
        Self::CompleteOffboarding,
        Self::GetOffboardingStatus,
        Self::ListPendingApprovals,
        Self::GetEmployeeDetails,
    ];

    /// Wire name
    pub fn name(&self) -> &'static str {
        match self {
            Self::InitiateOnboarding => "initiate_onboarding",
            Self::ApproveOnboarding => "approve_onboarding",
            Self::ProvisionSystems => "provision_systems",
            Self::UpdateCompliance => "update_compliance",
            Self::EnrollFinance => "enroll_finance",
            Self::CompleteOnboarding => "complete_onboarding",
            Self::GetOnboardingStatus => "get_onboarding_status",
            Self::InitiateOffboarding => "initiate_offboarding",
            Self::ApproveOffboarding => "approve_offboarding",
            Self::DeprovisionSystems => "deprovision_systems",
            Self::UpdateOffboardingCompliance => "update_offboarding_compliance",
            Self::ProcessFinalPayroll => "process_final_payroll",
            Self::CompleteOffboarding => "complete_offboarding",
            Self::GetOffboardingStatus => "get_offboarding_status",
            Self::ListPendingApprovals => "list_pending_approvals",
            Self::GetEmployeeDetails => "get_employee_details",
        }
    }

    /// One-line description for tool listings
    pub fn description(&self) -> &'static str {
        match self {
            Self::InitiateOnboarding => "Start the onboarding process for a new employee",
            Self::ApproveOnboarding => "Record an HR or manager decision on an onboarding request",
            Self::ProvisionSystems => {
                "Mark HRMS, email, network and project tool access as provisioned"
            }
            Self::UpdateCompliance => {
                "Update NDA, identity verification and background check status"
            }
            Self::EnrollFinance => "Update payroll and benefits enrollment",
            Self::CompleteOnboarding => "Complete onboarding once every precondition holds",
            Self::GetOnboardingStatus => "Get the full onboarding record for an employee",
            Self::InitiateOffboarding => "Start the offboarding process for a departing employee",
            Self::ApproveOffboarding => {
                "Record an HR or manager decision on an offboarding request"
            }
            Self::DeprovisionSystems => {
                "Mark HRMS, email, network and project tool access as revoked"
            }
            Self::UpdateOffboardingCompliance => {
                "Update exit form, asset return and clearance status"
            }
            Self::ProcessFinalPayroll => "Update final salary processing and benefits termination",
            Self::CompleteOffboarding => "Complete offboarding once every precondition holds",
            Self::GetOffboardingStatus => "Get the full offboarding record for an employee",
            Self::ListPendingApprovals => {
                "List onboarding and offboarding records awaiting approval"
            }
            Self::GetEmployeeDetails => "Get whichever lifecycle record exists for an employee",
        }
    }

    /// JSON Schema of the operation's arguments
    pub fn input_schema(&self) -> LifecycleResult<Value> {
        let schema = match self {
            Self::InitiateOnboarding => schema_for!(InitiateOnboarding),
            Self::ApproveOnboarding | Self::ApproveOffboarding => schema_for!(RecordApproval),
            Self::ProvisionSystems | Self::DeprovisionSystems => schema_for!(UpdateSystems),
            Self::UpdateCompliance => schema_for!(UpdateOnboardingCompliance),
            Self::EnrollFinance => schema_for!(EnrollFinance),
            Self::CompleteOnboarding | Self::CompleteOffboarding => schema_for!(CompleteWorkflow),
            Self::GetOnboardingStatus => schema_for!(GetOnboardingStatus),
            Self::InitiateOffboarding => schema_for!(InitiateOffboarding),
            Self::UpdateOffboardingCompliance => schema_for!(UpdateOffboardingCompliance),
            Self::ProcessFinalPayroll => schema_for!(ProcessFinalPayroll),
            Self::GetOffboardingStatus => schema_for!(GetOffboardingStatus),
            Self::ListPendingApprovals => schema_for!(ListPendingApprovals),
            Self::GetEmployeeDetails => schema_for!(GetEmployeeDetails),
        };
        Ok(serde_json::to_value(schema)?)
    }

    /// Decode call arguments, reporting failures against this operation
    fn decode<T: DeserializeOwned>(&self, arguments: Value) -> LifecycleResult<T> {
        let arguments = match arguments {
            Value::Null => Value::Object(Map::new()),
            other => other,
        };
        serde_json::from_value(arguments).map_err(|e| LifecycleError::InvalidArguments {
            operation: self.name().to_string(),
            reason: e.to_string(),
        })
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = LifecycleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|op| op.name() == s)
            .ok_or_else(|| LifecycleError::UnknownOperation(s.to_string()))
    }
}

/// A tool listing entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDescriptor {
    /// Operation name
    pub name: String,
    /// What the operation does
    pub description: String,
    /// JSON Schema of the arguments
    pub input_schema: Value,
}

/// Record snapshot response body
#[derive(Serialize)]
struct Snapshot<R> {
    record: R,
}

/// Serialize an outcome and mark it successful
fn success<T: Serialize>(outcome: &T) -> LifecycleResult<Value> {
    match serde_json::to_value(outcome)? {
        Value::Object(mut fields) => {
            fields.insert("success".to_string(), Value::Bool(true));
            Ok(Value::Object(fields))
        }
        other => {
            let mut fields = Map::new();
            fields.insert("success".to_string(), Value::Bool(true));
            fields.insert("result".to_string(), other);
            Ok(Value::Object(fields))
        }
    }
}

/// Failure response: `success: false`, the message and, for completion
/// failures, the checklist
pub fn failure(err: &LifecycleError) -> Value {
    let mut fields = Map::new();
    fields.insert("success".to_string(), Value::Bool(false));
    fields.insert("error".to_string(), Value::String(err.to_string()));
    if let Some(checklist) = err.checklist() {
        if let Ok(value) = serde_json::to_value(checklist) {
            fields.insert("checklist".to_string(), value);
        }
    }
    Value::Object(fields)
}

/// Routes named operations to the engines
#[derive(Debug, Clone)]
pub struct ToolDispatcher<
    On = InMemoryRepository<OnboardingRecord>,
    Off = InMemoryRepository<OffboardingRecord>,
> {
    onboarding: OnboardingEngine<On>,
    offboarding: OffboardingEngine<Off>,
}

impl ToolDispatcher {
    /// Dispatcher over fresh in-memory stores
    pub fn in_memory(config: EngineConfig) -> Self {
        Self::new(
            OnboardingEngine::in_memory(config.clone()),
            OffboardingEngine::in_memory(config),
        )
    }
}

impl<On, Off> ToolDispatcher<On, Off>
where
    On: RecordRepository<OnboardingRecord>,
    Off: RecordRepository<OffboardingRecord>,
{
    /// Dispatcher over existing engines
    pub fn new(onboarding: OnboardingEngine<On>, offboarding: OffboardingEngine<Off>) -> Self {
        Self {
            onboarding,
            offboarding,
        }
    }

    /// The onboarding engine
    pub fn onboarding(&self) -> &OnboardingEngine<On> {
        &self.onboarding
    }

    /// The offboarding engine
    pub fn offboarding(&self) -> &OffboardingEngine<Off> {
        &self.offboarding
    }

    /// Query handler over both stores
    pub fn queries(&self) -> LifecycleQueryHandler<'_, On, Off> {
        LifecycleQueryHandler::new(self.onboarding.store(), self.offboarding.store())
    }

    /// Every operation with its argument schema
    pub fn tools(&self) -> LifecycleResult<Vec<ToolDescriptor>> {
        Operation::ALL
            .iter()
            .map(|op| {
                Ok(ToolDescriptor {
                    name: op.name().to_string(),
                    description: op.description().to_string(),
                    input_schema: op.input_schema()?,
                })
            })
            .collect()
    }

    /// Run an operation; errors stay typed
    pub fn dispatch(&self, operation: &str, arguments: Value) -> LifecycleResult<Value> {
        let op: Operation = operation.parse()?;
        debug!(operation = %op, "Dispatching operation");

        match op {
            Operation::InitiateOnboarding => {
                success(&self.onboarding.initiate(op.decode(arguments)?)?)
            }
            Operation::ApproveOnboarding => {
                success(&self.onboarding.approve(op.decode(arguments)?)?)
            }
            Operation::ProvisionSystems => {
                success(&self.onboarding.provision_systems(op.decode(arguments)?)?)
            }
            Operation::UpdateCompliance => {
                success(&self.onboarding.update_compliance(op.decode(arguments)?)?)
            }
            Operation::EnrollFinance => {
                success(&self.onboarding.enroll_finance(op.decode(arguments)?)?)
            }
            Operation::CompleteOnboarding => {
                success(&self.onboarding.complete(op.decode(arguments)?)?)
            }
            Operation::GetOnboardingStatus => {
                let query: GetOnboardingStatus = op.decode(arguments)?;
                success(&Snapshot {
                    record: self.queries().handle(query)?,
                })
            }
            Operation::InitiateOffboarding => {
                success(&self.offboarding.initiate(op.decode(arguments)?)?)
            }
            Operation::ApproveOffboarding => {
                success(&self.offboarding.approve(op.decode(arguments)?)?)
            }
            Operation::DeprovisionSystems => {
                success(&self.offboarding.deprovision_systems(op.decode(arguments)?)?)
            }
            Operation::UpdateOffboardingCompliance => {
                success(&self.offboarding.update_compliance(op.decode(arguments)?)?)
            }
            Operation::ProcessFinalPayroll => {
                success(&self.offboarding.process_final_payroll(op.decode(arguments)?)?)
            }
            Operation::CompleteOffboarding => {
                success(&self.offboarding.complete(op.decode(arguments)?)?)
            }
            Operation::GetOffboardingStatus => {
                let query: GetOffboardingStatus = op.decode(arguments)?;
                success(&Snapshot {
                    record: self.queries().handle(query)?,
                })
            }
            Operation::ListPendingApprovals => {
                let query: ListPendingApprovals = op.decode(arguments)?;
                success(&self.queries().handle(query)?)
            }
            Operation::GetEmployeeDetails => {
                let query: GetEmployeeDetails = op.decode(arguments)?;
                success(&self.queries().handle(query)?)
            }
        }
    }

    /// Run an operation and always answer with a JSON object
    pub fn call(&self, operation: &str, arguments: Value) -> Value {
        match self.dispatch(operation, arguments) {
            Ok(response) => response,
            Err(err) => {
                warn!(operation = %operation, error = %err, "Operation failed");
                failure(&err)
            }
        }
    }
}
