// Copyright 2025 Cowboy AI, LLC.

//! Command handlers for the onboarding and offboarding workflows
//!
//! Each engine loads a record from its store, applies one command to a copy
//! and writes the copy back only if the command succeeded. A failed command
//! therefore never leaves a partially updated record behind.

use crate::commands::{
    CompleteWorkflow, EnrollFinance, InitiateOffboarding, InitiateOnboarding, ProcessFinalPayroll,
    RecordApproval, UpdateOffboardingCompliance, UpdateOnboardingCompliance, UpdateSystems,
};
use crate::config::EngineConfig;
use crate::errors::{LifecycleError, LifecycleResult};
use crate::identifiers::EmployeeId;
use crate::outcomes::{ApprovalOutcome, ChecklistOutcome, CompletionOutcome, InitiationOutcome};
use crate::persistence::{InMemoryRepository, RecordRepository};
use crate::state_machine::RecordStatus;
use crate::workflow::approval::{self, ApprovalDecision};
use crate::workflow::completion;
use crate::workflow::record::RecordMut;
use crate::workflow::{
    Checklist, Departure, Employee, FinalPayroll, FinanceEnrollment, LifecycleRecord,
    OffboardingCompliance, OffboardingRecord, OnboardingCompliance, OnboardingRecord,
    SystemAccess, SystemSelection,
};
use tracing::{info, warn};

/// Load, mutate a copy, save. Completed records are rejected before `op` runs.
fn mutate<R, S, T, F>(store: &S, id: &EmployeeId, op: F) -> LifecycleResult<(R, T)>
where
    R: RecordMut,
    S: RecordRepository<R>,
    F: FnOnce(&mut R) -> LifecycleResult<T>,
{
    let mut record = store.require(id)?;
    record.ensure_open()?;
    let value = op(&mut record)?;
    store.put(record.clone())?;
    Ok((record, value))
}

fn approve<R, S>(store: &S, cmd: RecordApproval) -> LifecycleResult<ApprovalOutcome>
where
    R: RecordMut,
    S: RecordRepository<R>,
{
    let decision = ApprovalDecision {
        role: cmd.role,
        approver: cmd.approver_name,
        approved: cmd.approved,
        comments: cmd.comments,
    };

    let (record, status) = mutate(store, &cmd.employee_id, |record: &mut R| {
        approval::record_decision(record, &decision)
    })?;

    let verdict = if decision.approved { "approved" } else { "rejected" };
    Ok(ApprovalOutcome {
        employee_id: cmd.employee_id,
        role: decision.role,
        approved: decision.approved,
        status,
        next_steps: approval::next_steps(&record),
        message: format!(
            "{} {verdict} by {} ({})",
            R::KIND,
            decision.approver,
            decision.role
        ),
    })
}

fn complete<R, S>(store: &S, cmd: CompleteWorkflow) -> LifecycleResult<CompletionOutcome>
where
    R: RecordMut,
    S: RecordRepository<R>,
{
    let (record, notifications) = mutate(store, &cmd.employee_id, |record: &mut R| {
        completion::complete(record, &cmd.completed_by)
    })?;

    Ok(CompletionOutcome {
        employee_id: cmd.employee_id,
        status: record.status(),
        message: format!(
            "{} completed for {}",
            R::KIND,
            record.employee_name()
        ),
        completed_by: cmd.completed_by,
        notifications,
    })
}

/// Force `InProgress` after systems work, whatever the open status was
fn mark_in_progress<R: RecordMut>(record: &mut R) -> LifecycleResult<()> {
    if record.status() != RecordStatus::InProgress {
        record.transition_to(RecordStatus::InProgress)?;
    }
    Ok(())
}

fn checklist_outcome<R, T>(
    record: &R,
    flags: T,
    ignored: Vec<String>,
    message: String,
) -> ChecklistOutcome<T>
where
    R: LifecycleRecord,
    T: Checklist,
{
    ChecklistOutcome {
        employee_id: record.employee_id().clone(),
        status: record.status(),
        all_set: flags.all_set(),
        flags,
        ignored,
        message,
    }
}

/// How many identifiers onboarding generates before giving up on a collision
pub const MAX_ID_ATTEMPTS: usize = 8;

/// Onboarding workflow engine
#[derive(Debug, Clone)]
pub struct OnboardingEngine<S = InMemoryRepository<OnboardingRecord>> {
    store: S,
    config: EngineConfig,
}

impl OnboardingEngine {
    /// Engine backed by a fresh in-memory store
    pub fn in_memory(config: EngineConfig) -> Self {
        Self::new(InMemoryRepository::new(), config)
    }
}

impl<S: RecordRepository<OnboardingRecord>> OnboardingEngine<S> {
    /// Engine over an existing store
    pub fn new(store: S, config: EngineConfig) -> Self {
        Self { store, config }
    }

    /// The backing store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The active configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Create a record under a freshly generated identifier.
    ///
    /// A generated identifier that is already taken is replaced by a new one,
    /// up to [`MAX_ID_ATTEMPTS`] tries.
    pub fn initiate(&self, cmd: InitiateOnboarding) -> LifecycleResult<InitiationOutcome> {
        let mut employee = Employee {
            id: EmployeeId::generate(&self.config.employee_id_prefix),
            name: cmd.name,
            email: cmd.email,
            date_of_joining: cmd.date_of_joining,
            department: cmd.department,
            designation: cmd.designation,
            manager: cmd.manager,
            work_location: cmd.work_location,
            contact_phone: cmd.contact_phone,
            employment_type: cmd.employment_type,
            project_assignment: cmd.project_assignment,
        };

        let mut attempt = 1;
        loop {
            let record = OnboardingRecord::initiate(employee.clone(), &cmd.initiated_by);
            match self.store.create(record) {
                Ok(()) => break,
                Err(LifecycleError::DuplicateId { .. }) if attempt < MAX_ID_ATTEMPTS => {
                    warn!(
                        employee_id = %employee.id,
                        attempt,
                        "Generated employee id taken, regenerating"
                    );
                    employee.id = EmployeeId::generate(&self.config.employee_id_prefix);
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        }

        let id = employee.id;
        let message = format!("Onboarding initiated for {}. Employee ID: {id}", employee.name);
        info!(employee_id = %id, initiated_by = %cmd.initiated_by, "Onboarding initiated");
        Ok(InitiationOutcome::new(id, message))
    }

    /// Record an HR or manager decision
    pub fn approve(&self, cmd: RecordApproval) -> LifecycleResult<ApprovalOutcome> {
        approve(&self.store, cmd)
    }

    /// Mark systems as provisioned and move the record to `InProgress`
    pub fn provision_systems(
        &self,
        cmd: UpdateSystems,
    ) -> LifecycleResult<ChecklistOutcome<SystemAccess>> {
        let selection = SystemSelection::from_names(&cmd.systems);
        let actor = cmd
            .performed_by
            .unwrap_or_else(|| self.config.actors.it_system.clone());

        let (record, ()) = mutate(&self.store, &cmd.employee_id, |record: &mut OnboardingRecord| {
            record.system_provisioning_mut().apply(&selection);
            mark_in_progress(record)?;
            let summary = record.system_provisioning().summary();
            record.record_action("Systems Provisioned", actor.as_str(), summary);
            Ok(())
        })?;

        info!(
            employee_id = %cmd.employee_id,
            applied = selection.applied.len(),
            ignored = selection.ignored.len(),
            "Systems provisioned"
        );
        let flags = *record.system_provisioning();
        let message = format!("System provisioning updated for {}", record.employee_name());
        Ok(checklist_outcome(&record, flags, selection.ignored, message))
    }

    /// Update compliance checks
    pub fn update_compliance(
        &self,
        cmd: UpdateOnboardingCompliance,
    ) -> LifecycleResult<ChecklistOutcome<OnboardingCompliance>> {
        let actor = cmd
            .verified_by
            .unwrap_or_else(|| self.config.actors.compliance_system.clone());

        let (record, ()) = mutate(&self.store, &cmd.employee_id, |record: &mut OnboardingRecord| {
            record
                .compliance_mut()
                .apply(cmd.nda_signed, cmd.id_verified, cmd.background_check);
            let summary = record.compliance().summary();
            record.record_action("Compliance Updated", actor.as_str(), summary);
            Ok(())
        })?;

        info!(employee_id = %cmd.employee_id, "Onboarding compliance updated");
        let flags = *record.compliance();
        let message = format!("Compliance checks updated for {}", record.employee_name());
        Ok(checklist_outcome(&record, flags, Vec::new(), message))
    }

    /// Update payroll and benefits enrollment
    pub fn enroll_finance(
        &self,
        cmd: EnrollFinance,
    ) -> LifecycleResult<ChecklistOutcome<FinanceEnrollment>> {
        let actor = cmd
            .processed_by
            .unwrap_or_else(|| self.config.actors.finance_system.clone());

        let (record, ()) = mutate(&self.store, &cmd.employee_id, |record: &mut OnboardingRecord| {
            record.finance_enrollment_mut().apply(cmd.payroll, cmd.benefits);
            let summary = record.finance_enrollment().summary();
            record.record_action("Finance Enrollment Updated", actor.as_str(), summary);
            Ok(())
        })?;

        info!(employee_id = %cmd.employee_id, "Finance enrollment updated");
        let flags = *record.finance_enrollment();
        let message = format!("Finance enrollment updated for {}", record.employee_name());
        Ok(checklist_outcome(&record, flags, Vec::new(), message))
    }

    /// Attempt the terminal transition
    pub fn complete(&self, cmd: CompleteWorkflow) -> LifecycleResult<CompletionOutcome> {
        complete(&self.store, cmd)
    }
}

/// Offboarding workflow engine
#[derive(Debug, Clone)]
pub struct OffboardingEngine<S = InMemoryRepository<OffboardingRecord>> {
    store: S,
    config: EngineConfig,
}

impl OffboardingEngine {
    /// Engine backed by a fresh in-memory store
    pub fn in_memory(config: EngineConfig) -> Self {
        Self::new(InMemoryRepository::new(), config)
    }
}

impl<S: RecordRepository<OffboardingRecord>> OffboardingEngine<S> {
    /// Engine over an existing store
    pub fn new(store: S, config: EngineConfig) -> Self {
        Self { store, config }
    }

    /// The backing store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The active configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Create a record for an existing employee; fails with `DuplicateId`
    /// if one is already on file
    pub fn initiate(&self, cmd: InitiateOffboarding) -> LifecycleResult<InitiationOutcome> {
        let departure = Departure {
            employee_id: cmd.employee_id.clone(),
            employee_name: cmd.employee_name,
            last_working_day: cmd.last_working_day,
            reason: cmd.reason,
            department: cmd.department,
            manager: cmd.manager,
        };
        let message = format!(
            "Offboarding initiated for {}. Last working day: {}",
            departure.employee_name, departure.last_working_day
        );

        self.store
            .create(OffboardingRecord::initiate(departure, &cmd.initiated_by))?;

        info!(
            employee_id = %cmd.employee_id,
            initiated_by = %cmd.initiated_by,
            "Offboarding initiated"
        );
        Ok(InitiationOutcome::new(cmd.employee_id, message))
    }

    /// Record an HR or manager decision
    pub fn approve(&self, cmd: RecordApproval) -> LifecycleResult<ApprovalOutcome> {
        approve(&self.store, cmd)
    }

    /// Mark systems as deprovisioned and move the record to `InProgress`
    pub fn deprovision_systems(
        &self,
        cmd: UpdateSystems,
    ) -> LifecycleResult<ChecklistOutcome<SystemAccess>> {
        let selection = SystemSelection::from_names(&cmd.systems);
        let actor = cmd
            .performed_by
            .unwrap_or_else(|| self.config.actors.it_system.clone());

        let (record, ()) = mutate(&self.store, &cmd.employee_id, |record: &mut OffboardingRecord| {
            record.system_deprovisioning_mut().apply(&selection);
            mark_in_progress(record)?;
            let summary = record.system_deprovisioning().summary();
            record.record_action("Systems Deprovisioned", actor.as_str(), summary);
            Ok(())
        })?;

        info!(
            employee_id = %cmd.employee_id,
            applied = selection.applied.len(),
            ignored = selection.ignored.len(),
            "Systems deprovisioned"
        );
        let flags = *record.system_deprovisioning();
        let message = format!("System deprovisioning updated for {}", record.employee_name());
        Ok(checklist_outcome(&record, flags, selection.ignored, message))
    }

    /// Update exit compliance checks
    pub fn update_compliance(
        &self,
        cmd: UpdateOffboardingCompliance,
    ) -> LifecycleResult<ChecklistOutcome<OffboardingCompliance>> {
        let actor = cmd
            .verified_by
            .unwrap_or_else(|| self.config.actors.compliance_system.clone());

        let (record, ()) = mutate(&self.store, &cmd.employee_id, |record: &mut OffboardingRecord| {
            record.compliance_mut().apply(
                cmd.exit_form_submitted,
                cmd.assets_returned,
                cmd.clearance_certificate,
            );
            let summary = record.compliance().summary();
            record.record_action("Exit Compliance Updated", actor.as_str(), summary);
            Ok(())
        })?;

        info!(employee_id = %cmd.employee_id, "Exit compliance updated");
        let flags = *record.compliance();
        let message = format!("Exit compliance updated for {}", record.employee_name());
        Ok(checklist_outcome(&record, flags, Vec::new(), message))
    }

    /// Settle the final payroll
    pub fn process_final_payroll(
        &self,
        cmd: ProcessFinalPayroll,
    ) -> LifecycleResult<ChecklistOutcome<FinalPayroll>> {
        let actor = cmd
            .processed_by
            .unwrap_or_else(|| self.config.actors.finance_system.clone());

        let (record, ()) = mutate(&self.store, &cmd.employee_id, |record: &mut OffboardingRecord| {
            record
                .final_payroll_mut()
                .apply(cmd.processed, cmd.benefits_terminated);
            let summary = record.final_payroll().summary();
            record.record_action("Final Payroll Processed", actor.as_str(), summary);
            Ok(())
        })?;

        info!(employee_id = %cmd.employee_id, "Final payroll processed");
        let flags = *record.final_payroll();
        let message = format!("Final payroll updated for {}", record.employee_name());
        Ok(checklist_outcome(&record, flags, Vec::new(), message))
    }

    /// Attempt the terminal transition
    pub fn complete(&self, cmd: CompleteWorkflow) -> LifecycleResult<CompletionOutcome> {
        complete(&self.store, cmd)
    }
}
