pub mod catalog;
pub mod error;
pub mod identifiers;
pub mod project;
pub mod render;
pub mod service;

pub use catalog::{CatalogEntry, DependencyGroup, DependencyId, DependencySet};
pub use error::AppError;
pub use project::{ProjectFile, project_files};
pub use service::{
    BuildSystem, Language, Packaging, Relationship, ServiceConfig, ServiceDraft, StoredService,
};
