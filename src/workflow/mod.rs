// Copyright 2025 Cowboy AI, LLC.

//! Onboarding and offboarding workflow model
//!
//! Records, the approval gate, checklist trackers and the completion gate.
//! Both workflow kinds share the same shape; the gates are written once
//! against [`LifecycleRecord`] and applied to either record type.

pub mod approval;
pub mod checklist;
pub mod completion;
pub mod offboarding;
pub mod onboarding;
pub mod record;

pub use approval::{ApprovalDecision, ApprovalRole, ApprovalSlot, Approvals, PendingApprovals};
pub use checklist::{
    Checklist, FinalPayroll, FinanceEnrollment, ManagedSystem, OffboardingCompliance,
    OnboardingCompliance, SystemAccess, SystemSelection,
};
pub use completion::CompletionChecklist;
pub use offboarding::{Departure, OffboardingRecord};
pub use onboarding::{Employee, OnboardingRecord};
pub use record::LifecycleRecord;
