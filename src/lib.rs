// Copyright 2025 Cowboy AI, LLC.

//! # Employee Lifecycle
//!
//! Workflow state engine for employee onboarding and offboarding.
//!
//! A record moves through `Initiated`, `PendingApproval`, `Approved`,
//! `InProgress` and finally `Completed`. The crate provides:
//! - **Approval gate**: HR and manager decisions folded into one status
//! - **Checklist trackers**: monotone flags for systems, compliance and finance work
//! - **Completion gate**: atomic terminal transition with a checklist on failure
//! - **Audit trail**: one append-only entry per mutating operation
//! - **Record store**: a repository trait with an in-memory implementation
//! - **Queries**: status snapshots, pending approvals, employee lookup
//! - **Tool dispatch**: named operations with JSON arguments and JSON Schemas
//!
//! ## Design Principles
//!
//! 1. **Controlled State**: status only changes through the engines
//! 2. **Atomic Commands**: a failed command leaves the stored record untouched
//! 3. **Plain Results**: engines return data; transport framing lives elsewhere
//!
//! ```
//! use employee_lifecycle::{EngineConfig, ToolDispatcher};
//! use serde_json::json;
//!
//! let tools = ToolDispatcher::in_memory(EngineConfig::default());
//! let response = tools.call("list_pending_approvals", json!({"kind": "all"}));
//! assert_eq!(response["success"], true);
//! assert_eq!(response["total"], 0);
//! ```

#![warn(missing_docs)]

mod audit;
mod command_handlers;
mod commands;
mod entity;
mod errors;
mod identifiers;
mod outcomes;
mod query_handlers;
mod state_machine;
pub mod config;
pub mod persistence;
pub mod telemetry;
pub mod tools;
pub mod workflow;

// Re-export core types
pub use audit::{AuditEntry, AuditTrail};
pub use entity::{AggregateRoot, KindFilter, WorkflowKind};
pub use errors::{LifecycleError, LifecycleResult};
pub use identifiers::EmployeeId;
pub use state_machine::{RecordStatus, State};

pub use commands::{
    CompleteWorkflow, EnrollFinance, InitiateOffboarding, InitiateOnboarding, ProcessFinalPayroll,
    RecordApproval, UpdateOffboardingCompliance, UpdateOnboardingCompliance, UpdateSystems,
};

pub use command_handlers::{OffboardingEngine, OnboardingEngine, MAX_ID_ATTEMPTS};

pub use query_handlers::{
    DirectQueryHandler, EmployeeDetails, GetEmployeeDetails, GetOffboardingStatus,
    GetOnboardingStatus, LifecycleQueryHandler, ListPendingApprovals, PendingApprovalEntry,
    PendingApprovalsReport,
};

pub use outcomes::{ApprovalOutcome, ChecklistOutcome, CompletionOutcome, InitiationOutcome};

pub use config::{ActorNames, EngineConfig, LoggingConfig};
pub use persistence::{InMemoryRepository, RecordRepository};
pub use tools::{Operation, ToolDescriptor, ToolDispatcher};
pub use workflow::{
    ApprovalRole, Approvals, Checklist, CompletionChecklist, LifecycleRecord, OffboardingRecord,
    OnboardingRecord, PendingApprovals, SystemAccess,
};
