//! Service store port definition.

use crate::domain::{AppError, Relationship, ServiceConfig, StoredService};

/// Keyed storage of service definitions.
///
/// Ids are issued by the store, start at 1, and are never reused. Operations
/// on a missing id fail with `AppError::ServiceNotFound`.
pub trait ServiceStore {
    /// All stored services in ascending id order.
    fn list(&self) -> Result<Vec<StoredService>, AppError>;

    fn get(&self, id: u64) -> Result<Option<StoredService>, AppError>;

    /// Store a new service under a fresh id.
    fn insert(&self, config: ServiceConfig) -> Result<StoredService, AppError>;

    /// Replace a service's metadata, keeping its stored relationships.
    fn update(&self, id: u64, config: ServiceConfig) -> Result<StoredService, AppError>;

    fn update_dependencies(
        &self,
        id: u64,
        dependencies: Vec<String>,
    ) -> Result<StoredService, AppError>;

    fn update_relationships(
        &self,
        id: u64,
        relationships: Vec<Relationship>,
    ) -> Result<StoredService, AppError>;

    fn delete(&self, id: u64) -> Result<(), AppError>;

    /// Fetch a service that must exist.
    fn require(&self, id: u64) -> Result<StoredService, AppError> {
        self.get(id)?.ok_or(AppError::ServiceNotFound(id))
    }
}
