// Copyright 2025 Cowboy AI, LLC.

//! In-memory record store

use super::RecordRepository;
use crate::errors::{LifecycleError, LifecycleResult};
use crate::identifiers::EmployeeId;
use crate::workflow::LifecycleRecord;
use indexmap::IndexMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// In-memory repository
///
/// Clones share the same underlying map. Records are listed in insertion
/// order.
#[derive(Debug)]
pub struct InMemoryRepository<R> {
    storage: Arc<RwLock<IndexMap<EmployeeId, R>>>,
}

impl<R> Clone for InMemoryRepository<R> {
    fn clone(&self) -> Self {
        Self {
            storage: Arc::clone(&self.storage),
        }
    }
}

impl<R> Default for InMemoryRepository<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> InMemoryRepository<R> {
    /// Create an empty repository
    pub fn new() -> Self {
        Self {
            storage: Arc::new(RwLock::new(IndexMap::new())),
        }
    }

    fn read(&self) -> LifecycleResult<RwLockReadGuard<'_, IndexMap<EmployeeId, R>>> {
        self.storage
            .read()
            .map_err(|_| LifecycleError::Storage("record store lock poisoned".to_string()))
    }

    fn write(&self) -> LifecycleResult<RwLockWriteGuard<'_, IndexMap<EmployeeId, R>>> {
        self.storage
            .write()
            .map_err(|_| LifecycleError::Storage("record store lock poisoned".to_string()))
    }

    /// Number of stored records
    pub fn len(&self) -> LifecycleResult<usize> {
        Ok(self.read()?.len())
    }

    /// Whether the store is empty
    pub fn is_empty(&self) -> LifecycleResult<bool> {
        Ok(self.read()?.is_empty())
    }
}

impl<R: LifecycleRecord> RecordRepository<R> for InMemoryRepository<R> {
    fn get(&self, id: &EmployeeId) -> LifecycleResult<Option<R>> {
        Ok(self.read()?.get(id).cloned())
    }

    fn create(&self, record: R) -> LifecycleResult<()> {
        let mut storage = self.write()?;
        let id = record.employee_id().clone();
        if storage.contains_key(&id) {
            return Err(LifecycleError::DuplicateId {
                kind: R::KIND,
                id: id.to_string(),
            });
        }
        storage.insert(id, record);
        Ok(())
    }

    fn put(&self, record: R) -> LifecycleResult<()> {
        self.write()?.insert(record.employee_id().clone(), record);
        Ok(())
    }

    fn list(&self) -> LifecycleResult<Vec<R>> {
        Ok(self.read()?.values().cloned().collect())
    }
}
