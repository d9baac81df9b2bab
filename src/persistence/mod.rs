// Copyright 2025 Cowboy AI, LLC.

//! # Record Store
//!
//! Keyed storage of lifecycle records, one store per workflow kind.
//!
//! Engines read a record, mutate a copy and write it back. Stores do not
//! serialize those read-modify-write cycles: two unsynchronised writers
//! against the same employee resolve as last-write-wins. Callers that need
//! stronger guarantees serialize calls per employee themselves.

mod in_memory;

pub use in_memory::InMemoryRepository;

use crate::errors::{LifecycleError, LifecycleResult};
use crate::identifiers::EmployeeId;
use crate::workflow::LifecycleRecord;

/// Repository of lifecycle records keyed by employee identifier
pub trait RecordRepository<R: LifecycleRecord>: Send + Sync {
    /// Load a record, `None` if absent
    fn get(&self, id: &EmployeeId) -> LifecycleResult<Option<R>>;

    /// Insert a new record; fails with `DuplicateId` if the key is taken
    fn create(&self, record: R) -> LifecycleResult<()>;

    /// Insert or replace a record
    fn put(&self, record: R) -> LifecycleResult<()>;

    /// Every record, in a stable order
    fn list(&self) -> LifecycleResult<Vec<R>>;

    /// Whether a record exists for the identifier
    fn contains(&self, id: &EmployeeId) -> LifecycleResult<bool> {
        self.get(id).map(|record| record.is_some())
    }

    /// Load a record or fail with `NotFound`
    fn require(&self, id: &EmployeeId) -> LifecycleResult<R> {
        self.get(id)?
            .ok_or_else(|| LifecycleError::not_found(R::KIND, id.as_str()))
    }
}
