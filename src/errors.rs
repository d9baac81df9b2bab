// Copyright 2025 Cowboy AI, LLC.

//! Error types for lifecycle operations

use crate::entity::WorkflowKind;
use crate::workflow::CompletionChecklist;
use thiserror::Error;

/// Errors that can occur in lifecycle operations
#[derive(Debug, Clone, Error)]
pub enum LifecycleError {
    /// No record exists for the identifier in the relevant store
    #[error("{kind} record not found for employee {id}")]
    NotFound {
        /// Store that was searched
        kind: WorkflowKind,
        /// Identifier that was searched for
        id: String,
    },

    /// The operation is not permitted in the record's current state
    #[error("{reason}")]
    InvalidState {
        /// Human-readable explanation
        reason: String,
        /// Completion preconditions, present when a completion attempt failed
        checklist: Option<CompletionChecklist>,
    },

    /// The identifier is absent from both stores
    #[error("Employee {0} not found in onboarding or offboarding records")]
    EmployeeNotFound(String),

    /// A record already exists for the identifier
    #[error("{kind} record already exists for employee {id}")]
    DuplicateId {
        /// Store that already holds the identifier
        kind: WorkflowKind,
        /// The colliding identifier
        id: String,
    },

    /// Call arguments could not be decoded for the named operation
    #[error("Invalid arguments for {operation}: {reason}")]
    InvalidArguments {
        /// Operation name
        operation: String,
        /// Decoder message
        reason: String,
    },

    /// Operation name is not recognised by the dispatcher
    #[error("Unknown operation: {0}")]
    UnknownOperation(String),

    /// Record store failure
    #[error("Storage error: {0}")]
    Storage(String),

    /// Configuration could not be loaded or applied
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Result type for lifecycle operations
pub type LifecycleResult<T> = Result<T, LifecycleError>;

impl From<serde_json::Error> for LifecycleError {
    fn from(err: serde_json::Error) -> Self {
        LifecycleError::SerializationError(err.to_string())
    }
}

impl From<config::ConfigError> for LifecycleError {
    fn from(err: config::ConfigError) -> Self {
        LifecycleError::Configuration(err.to_string())
    }
}

impl LifecycleError {
    /// Create a not found error for the given store and identifier
    pub fn not_found(kind: WorkflowKind, id: impl Into<String>) -> Self {
        LifecycleError::NotFound {
            kind,
            id: id.into(),
        }
    }

    /// Create an invalid state error without a checklist
    pub fn invalid_state(reason: impl Into<String>) -> Self {
        LifecycleError::InvalidState {
            reason: reason.into(),
            checklist: None,
        }
    }

    /// Check if this is a not found error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            LifecycleError::NotFound { .. } | LifecycleError::EmployeeNotFound(_)
        )
    }

    /// Check if this is an invalid state error
    pub fn is_invalid_state(&self) -> bool {
        matches!(self, LifecycleError::InvalidState { .. })
    }

    /// The failed completion checklist, if this error carries one
    pub fn checklist(&self) -> Option<&CompletionChecklist> {
        match self {
            LifecycleError::InvalidState { checklist, .. } => checklist.as_ref(),
            _ => None,
        }
    }
}
