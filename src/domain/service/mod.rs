//! Service definitions: configuration record, relationships, and naming rules.

pub mod config;
pub mod naming;
pub mod relationship;

pub use config::{BuildSystem, Language, Packaging, ServiceConfig, ServiceDraft};
pub use relationship::Relationship;

/// A service definition together with its store-issued identifier.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct StoredService {
    pub id: u64,
    #[serde(flatten)]
    pub config: ServiceConfig,
}
