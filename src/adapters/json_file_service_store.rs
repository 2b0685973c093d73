//! Service store persisted as a single JSON document.

use std::fs;
use std::path::PathBuf;

use crate::adapters::store_state::StoreState;
use crate::domain::{AppError, Relationship, ServiceConfig, StoredService};
use crate::ports::ServiceStore;

/// File-backed service store.
///
/// Every operation reads the whole document and every mutation rewrites it
/// through a temporary file followed by a rename. A missing file is an empty
/// store.
#[derive(Debug, Clone)]
pub struct JsonFileServiceStore {
    path: PathBuf,
}

impl JsonFileServiceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn load(&self) -> Result<StoreState, AppError> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "store: no state file found, starting fresh");
            return Ok(StoreState::default());
        }
        let content = fs::read_to_string(&self.path)?;
        let state: StoreState = serde_json::from_str(&content).map_err(|e| AppError::ParseError {
            what: format!("service store {}", self.path.display()),
            details: e.to_string(),
        })?;
        if !state.is_consistent() {
            return Err(AppError::ParseError {
                what: format!("service store {}", self.path.display()),
                details: "nextId must exceed every stored id and ids must be ascending".into(),
            });
        }
        Ok(state)
    }

    fn save(&self, state: &StoreState) -> Result<(), AppError> {
        let json = serde_json::to_string_pretty(state)?;
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        tracing::debug!(path = %self.path.display(), "store: state saved");
        Ok(())
    }

    fn mutate<T>(&self, apply: impl FnOnce(&mut StoreState) -> Result<T, AppError>) -> Result<T, AppError> {
        let mut state = self.load()?;
        let out = apply(&mut state)?;
        self.save(&state)?;
        Ok(out)
    }
}

impl ServiceStore for JsonFileServiceStore {
    fn list(&self) -> Result<Vec<StoredService>, AppError> {
        Ok(self.load()?.list())
    }

    fn get(&self, id: u64) -> Result<Option<StoredService>, AppError> {
        Ok(self.load()?.get(id))
    }

    fn insert(&self, config: ServiceConfig) -> Result<StoredService, AppError> {
        self.mutate(|state| Ok(state.insert(config)))
    }

    fn update(&self, id: u64, config: ServiceConfig) -> Result<StoredService, AppError> {
        self.mutate(|state| state.update(id, config))
    }

    fn update_dependencies(
        &self,
        id: u64,
        dependencies: Vec<String>,
    ) -> Result<StoredService, AppError> {
        self.mutate(|state| state.update_dependencies(id, dependencies))
    }

    fn update_relationships(
        &self,
        id: u64,
        relationships: Vec<Relationship>,
    ) -> Result<StoredService, AppError> {
        self.mutate(|state| state.update_relationships(id, relationships))
    }

    fn delete(&self, id: u64) -> Result<(), AppError> {
        self.mutate(|state| state.delete(id))
    }
}
