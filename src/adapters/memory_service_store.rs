use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::adapters::store_state::StoreState;
use crate::domain::{AppError, Relationship, ServiceConfig, StoredService};
use crate::ports::ServiceStore;

/// In-memory service store.
///
/// Clones share the same underlying state.
#[derive(Debug, Clone, Default)]
pub struct MemoryServiceStore {
    state: Arc<Mutex<StoreState>>,
}

impl MemoryServiceStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, StoreState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ServiceStore for MemoryServiceStore {
    fn list(&self) -> Result<Vec<StoredService>, AppError> {
        Ok(self.state().list())
    }

    fn get(&self, id: u64) -> Result<Option<StoredService>, AppError> {
        Ok(self.state().get(id))
    }

    fn insert(&self, config: ServiceConfig) -> Result<StoredService, AppError> {
        Ok(self.state().insert(config))
    }

    fn update(&self, id: u64, config: ServiceConfig) -> Result<StoredService, AppError> {
        self.state().update(id, config)
    }

    fn update_dependencies(
        &self,
        id: u64,
        dependencies: Vec<String>,
    ) -> Result<StoredService, AppError> {
        self.state().update_dependencies(id, dependencies)
    }

    fn update_relationships(
        &self,
        id: u64,
        relationships: Vec<Relationship>,
    ) -> Result<StoredService, AppError> {
        self.state().update_relationships(id, relationships)
    }

    fn delete(&self, id: u64) -> Result<(), AppError> {
        self.state().delete(id)
    }
}
