// Copyright 2025 Cowboy AI, LLC.

//! Employee identifiers

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identifier of an employee record
///
/// The same identifier keys an employee's onboarding and offboarding
/// records. Generated identifiers look like `EMP-1A2B3C4D`; identifiers
/// supplied by callers are taken verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct EmployeeId(String);

impl EmployeeId {
    /// Wrap an existing identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh identifier with the given prefix
    pub fn generate(prefix: &str) -> Self {
        let suffix: String = Uuid::new_v4()
            .simple()
            .to_string()
            .chars()
            .take(8)
            .collect();
        Self(format!("{prefix}-{}", suffix.to_uppercase()))
    }

    /// Borrow the identifier as a string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EmployeeId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for EmployeeId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<EmployeeId> for String {
    fn from(id: EmployeeId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_are_prefixed_and_distinct() {
        let a = EmployeeId::generate("EMP");
        let b = EmployeeId::generate("EMP");

        assert!(a.as_str().starts_with("EMP-"));
        assert_eq!(a.as_str().len(), "EMP-".len() + 8);
        assert!(a.as_str()[4..].chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_lowercase()));
        assert_ne!(a, b);
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let id = EmployeeId::from("E-100");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"E-100\"");
        let back: EmployeeId = serde_json::from_str("\"E-100\"").unwrap();
        assert_eq!(back, id);
        assert_eq!(id.to_string(), "E-100");
    }
}
