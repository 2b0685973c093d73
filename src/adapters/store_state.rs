//! Store contents shared by the service store adapters.

use serde::{Deserialize, Serialize};

use crate::domain::{AppError, Relationship, ServiceConfig, StoredService};

/// Services plus the id counter that owns them.
///
/// `services` stays sorted by id because ids are only ever issued in
/// increasing order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreState {
    next_id: u64,
    #[serde(default)]
    services: Vec<StoredService>,
}

impl Default for StoreState {
    fn default() -> Self {
        Self { next_id: 1, services: Vec::new() }
    }
}

impl StoreState {
    pub fn list(&self) -> Vec<StoredService> {
        self.services.clone()
    }

    pub fn get(&self, id: u64) -> Option<StoredService> {
        self.services.iter().find(|s| s.id == id).cloned()
    }

    pub fn insert(&mut self, config: ServiceConfig) -> StoredService {
        let id = self.next_id;
        self.next_id += 1;
        let stored = StoredService { id, config };
        self.services.push(stored.clone());
        stored
    }

    pub fn update(&mut self, id: u64, mut config: ServiceConfig) -> Result<StoredService, AppError> {
        self.modify(id, |existing| {
            config.relationships = std::mem::take(&mut existing.relationships);
            *existing = config;
        })
    }

    pub fn update_dependencies(
        &mut self,
        id: u64,
        dependencies: Vec<String>,
    ) -> Result<StoredService, AppError> {
        self.modify(id, |existing| existing.dependencies = dependencies)
    }

    pub fn update_relationships(
        &mut self,
        id: u64,
        relationships: Vec<Relationship>,
    ) -> Result<StoredService, AppError> {
        self.modify(id, |existing| existing.relationships = relationships)
    }

    pub fn delete(&mut self, id: u64) -> Result<(), AppError> {
        let index = self.position(id)?;
        self.services.remove(index);
        Ok(())
    }

    /// Check the counter is ahead of every stored id; guards hand-edited files.
    pub fn is_consistent(&self) -> bool {
        self.services.iter().all(|s| s.id < self.next_id)
            && self.services.windows(2).all(|w| w[0].id < w[1].id)
    }

    fn position(&self, id: u64) -> Result<usize, AppError> {
        self.services.iter().position(|s| s.id == id).ok_or(AppError::ServiceNotFound(id))
    }

    fn modify(
        &mut self,
        id: u64,
        apply: impl FnOnce(&mut ServiceConfig),
    ) -> Result<StoredService, AppError> {
        let index = self.position(id)?;
        let stored = &mut self.services[index];
        apply(&mut stored.config);
        Ok(stored.clone())
    }
}
