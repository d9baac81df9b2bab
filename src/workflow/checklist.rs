// Copyright 2025 Cowboy AI, LLC.

//! Checklist trackers
//!
//! Each tracker is a fixed set of named booleans. Flags only ever move from
//! `false` to `true`; nothing in the engine clears them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A fixed set of named boolean flags
pub trait Checklist {
    /// Flag names paired with their current values, in display order
    fn flags(&self) -> Vec<(&'static str, bool)>;

    /// Logical AND across every flag
    fn all_set(&self) -> bool {
        self.flags().iter().all(|(_, set)| *set)
    }

    /// How many flags are set
    fn set_count(&self) -> usize {
        self.flags().iter().filter(|(_, set)| *set).count()
    }

    /// `name: value` pairs joined for audit details
    fn summary(&self) -> String {
        self.flags()
            .iter()
            .map(|(name, set)| format!("{name}: {set}"))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Raise `flag` when the update explicitly sets it. `false` and `None` are no-ops.
fn raise(flag: &mut bool, update: Option<bool>) {
    if update == Some(true) {
        *flag = true;
    }
}

/// Systems an employee is granted (onboarding) or revoked from (offboarding)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ManagedSystem {
    /// HR management system account
    Hrms,
    /// Corporate mailbox
    Email,
    /// Network / VPN access
    Network,
    /// Project tooling (tracker, repositories, wiki)
    ProjectTools,
}

impl ManagedSystem {
    /// Every system, in display order
    pub const ALL: [ManagedSystem; 4] =
        [Self::Hrms, Self::Email, Self::Network, Self::ProjectTools];

    /// Wire name of the system
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hrms => "hrms",
            Self::Email => "email",
            Self::Network => "network",
            Self::ProjectTools => "projectTools",
        }
    }
}

impl fmt::Display for ManagedSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ManagedSystem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|system| system.as_str() == s)
            .ok_or_else(|| s.to_string())
    }
}

/// Result of filtering a list of system names against the known vocabulary
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SystemSelection {
    /// Known systems, deduplicated, in request order
    pub applied: Vec<ManagedSystem>,
    /// Names outside the vocabulary, in request order
    pub ignored: Vec<String>,
}

impl SystemSelection {
    /// Split `names` into known systems and ignored names
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut selection = Self::default();
        for name in names {
            match name.as_ref().parse::<ManagedSystem>() {
                Ok(system) if !selection.applied.contains(&system) => {
                    selection.applied.push(system)
                }
                Ok(_) => {}
                Err(unknown) => selection.ignored.push(unknown),
            }
        }
        selection
    }
}

/// Per-system access flags
///
/// Used for provisioning during onboarding and deprovisioning during
/// offboarding; a `true` flag means the work for that system is done.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemAccess {
    /// HRMS
    pub hrms: bool,
    /// Email
    pub email: bool,
    /// Network
    pub network: bool,
    /// Project tools
    pub project_tools: bool,
}

impl SystemAccess {
    /// Mark one system as done
    pub fn mark(&mut self, system: ManagedSystem) {
        match system {
            ManagedSystem::Hrms => self.hrms = true,
            ManagedSystem::Email => self.email = true,
            ManagedSystem::Network => self.network = true,
            ManagedSystem::ProjectTools => self.project_tools = true,
        }
    }

    /// Mark every system in the selection as done
    pub fn apply(&mut self, selection: &SystemSelection) {
        for system in &selection.applied {
            self.mark(*system);
        }
    }

    /// Whether the given system is done
    pub fn is_marked(&self, system: ManagedSystem) -> bool {
        match system {
            ManagedSystem::Hrms => self.hrms,
            ManagedSystem::Email => self.email,
            ManagedSystem::Network => self.network,
            ManagedSystem::ProjectTools => self.project_tools,
        }
    }
}

impl Checklist for SystemAccess {
    fn flags(&self) -> Vec<(&'static str, bool)> {
        ManagedSystem::ALL
            .iter()
            .map(|system| (system.as_str(), self.is_marked(*system)))
            .collect()
    }
}

/// Onboarding compliance checks
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingCompliance {
    /// Non-disclosure agreement signed
    pub nda_signed: bool,
    /// Identity documents verified
    pub id_verified: bool,
    /// Background check cleared
    pub background_check: bool,
}

impl OnboardingCompliance {
    /// Apply the flags present in an update
    pub fn apply(
        &mut self,
        nda_signed: Option<bool>,
        id_verified: Option<bool>,
        background_check: Option<bool>,
    ) {
        raise(&mut self.nda_signed, nda_signed);
        raise(&mut self.id_verified, id_verified);
        raise(&mut self.background_check, background_check);
    }
}

impl Checklist for OnboardingCompliance {
    fn flags(&self) -> Vec<(&'static str, bool)> {
        vec![
            ("ndaSigned", self.nda_signed),
            ("idVerified", self.id_verified),
            ("backgroundCheck", self.background_check),
        ]
    }
}

/// Payroll and benefits enrollment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinanceEnrollment {
    /// Added to payroll
    pub payroll: bool,
    /// Enrolled in benefits
    pub benefits: bool,
}

impl FinanceEnrollment {
    /// Apply the flags present in an update
    pub fn apply(&mut self, payroll: Option<bool>, benefits: Option<bool>) {
        raise(&mut self.payroll, payroll);
        raise(&mut self.benefits, benefits);
    }
}

impl Checklist for FinanceEnrollment {
    fn flags(&self) -> Vec<(&'static str, bool)> {
        vec![("payroll", self.payroll), ("benefits", self.benefits)]
    }
}

/// Exit compliance checks
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OffboardingCompliance {
    /// Exit form submitted
    pub exit_form_submitted: bool,
    /// Company assets returned
    pub assets_returned: bool,
    /// Clearance certificate issued
    pub clearance_certificate: bool,
}

impl OffboardingCompliance {
    /// Apply the flags present in an update
    pub fn apply(
        &mut self,
        exit_form_submitted: Option<bool>,
        assets_returned: Option<bool>,
        clearance_certificate: Option<bool>,
    ) {
        raise(&mut self.exit_form_submitted, exit_form_submitted);
        raise(&mut self.assets_returned, assets_returned);
        raise(&mut self.clearance_certificate, clearance_certificate);
    }
}

impl Checklist for OffboardingCompliance {
    fn flags(&self) -> Vec<(&'static str, bool)> {
        vec![
            ("exitFormSubmitted", self.exit_form_submitted),
            ("assetsReturned", self.assets_returned),
            ("clearanceCertificate", self.clearance_certificate),
        ]
    }
}

/// Final payroll settlement
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinalPayroll {
    /// Final salary processed
    pub processed: bool,
    /// Benefits terminated
    pub benefits_terminated: bool,
}

impl FinalPayroll {
    /// Apply the flags present in an update
    pub fn apply(&mut self, processed: Option<bool>, benefits_terminated: Option<bool>) {
        raise(&mut self.processed, processed);
        raise(&mut self.benefits_terminated, benefits_terminated);
    }
}

impl Checklist for FinalPayroll {
    fn flags(&self) -> Vec<(&'static str, bool)> {
        vec![
            ("processed", self.processed),
            ("benefitsTerminated", self.benefits_terminated),
        ]
    }
}
