// Copyright 2025 Cowboy AI, LLC.

//! Append-only audit trail embedded in every record

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One action taken against a record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the action was recorded
    pub date: DateTime<Utc>,
    /// What happened, e.g. `HR Approved`
    pub action: String,
    /// Who or what performed it
    pub actor: String,
    /// Free-form description
    pub details: String,
}

impl AuditEntry {
    /// Create an entry stamped with the current time
    pub fn new(
        action: impl Into<String>,
        actor: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            date: Utc::now(),
            action: action.into(),
            actor: actor.into(),
            details: details.into(),
        }
    }
}

/// Ordered, append-only sequence of [`AuditEntry`]
///
/// Insertion order is chronological order. Entries can be added but never
/// edited or removed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuditTrail {
    entries: Vec<AuditEntry>,
}

impl AuditTrail {
    /// Create an empty trail
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry and return it
    pub fn record(
        &mut self,
        action: impl Into<String>,
        actor: impl Into<String>,
        details: impl Into<String>,
    ) -> &AuditEntry {
        let index = self.entries.len();
        self.entries.push(AuditEntry::new(action, actor, details));
        &self.entries[index]
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the trail has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries, oldest first
    pub fn entries(&self) -> &[AuditEntry] {
        &self.entries
    }

    /// Most recent entry
    pub fn last(&self) -> Option<&AuditEntry> {
        self.entries.last()
    }

    /// Iterate over entries, oldest first
    pub fn iter(&self) -> impl Iterator<Item = &AuditEntry> {
        self.entries.iter()
    }

    /// Actions in chronological order
    pub fn actions(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.action.as_str()).collect()
    }
}
