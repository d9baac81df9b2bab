// Copyright 2025 Cowboy AI, LLC.

//! Aggregate roots and workflow kinds

use schemars::JsonSchema;
use serde::{de, Deserialize, Deserializer, Serialize};
use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

/// Marker trait for aggregate roots
///
/// Aggregate roots are the entry points for modifying aggregates.
/// All changes to entities within an aggregate must go through the root.
///
/// # Examples
///
/// ```rust
/// use employee_lifecycle::AggregateRoot;
///
/// struct Badge {
///     serial: u32,
///     version: u64,
/// }
///
/// impl AggregateRoot for Badge {
///     type Id = u32;
///
///     fn id(&self) -> Self::Id {
///         self.serial
///     }
///
///     fn version(&self) -> u64 {
///         self.version
///     }
///
///     fn increment_version(&mut self) {
///         self.version += 1;
///     }
/// }
///
/// let mut badge = Badge { serial: 7, version: 0 };
/// badge.increment_version();
/// assert_eq!(badge.version(), 1);
/// ```
pub trait AggregateRoot: Sized {
    /// The type of ID for this aggregate
    type Id: Clone + Eq + Hash + Send + Sync;

    /// Get the aggregate's ID
    fn id(&self) -> Self::Id;

    /// Number of mutations applied to the aggregate.
    ///
    /// Informational only; stores do not compare versions on write.
    fn version(&self) -> u64;

    /// Increment the version
    fn increment_version(&mut self);
}

/// The two employee lifecycle workflows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum WorkflowKind {
    /// Bringing a new employee in
    Onboarding,
    /// Taking a departing employee out
    Offboarding,
}

impl WorkflowKind {
    /// Name used in audit actions and messages
    pub fn name(&self) -> &'static str {
        match self {
            Self::Onboarding => "Onboarding",
            Self::Offboarding => "Offboarding",
        }
    }

    /// Next steps once both approvals are in
    pub fn approved_next_steps(&self) -> Vec<String> {
        let steps: [&str; 3] = match self {
            Self::Onboarding => ["System Provisioning", "Compliance Checks", "Finance"],
            Self::Offboarding => ["System Deprovisioning", "Compliance Checks", "Final Payroll"],
        };
        steps.iter().map(|s| s.to_string()).collect()
    }
}

impl fmt::Display for WorkflowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Selects which workflow kinds a query scans
///
/// Decoding goes through [`FromStr`], so `"Offboarding"` and `"ALL"` are accepted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum KindFilter {
    /// Onboarding records only
    Onboarding,
    /// Offboarding records only
    Offboarding,
    /// Both stores
    #[default]
    All,
}

impl KindFilter {
    /// Whether records of `kind` pass this filter
    pub fn includes(&self, kind: WorkflowKind) -> bool {
        match self {
            Self::All => true,
            Self::Onboarding => kind == WorkflowKind::Onboarding,
            Self::Offboarding => kind == WorkflowKind::Offboarding,
        }
    }
}

impl FromStr for KindFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "onboarding" => Ok(Self::Onboarding),
            "offboarding" => Ok(Self::Offboarding),
            "all" => Ok(Self::All),
            other => Err(format!("unknown workflow kind filter: {other}")),
        }
    }
}

impl<'de> Deserialize<'de> for KindFilter {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer)?.parse().map_err(de::Error::custom)
    }
}
