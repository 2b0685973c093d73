//! msforge: define Spring Boot microservices and generate their project archives.
//!
//! A service definition ([`ServiceConfig`]) renders into a build manifest,
//! `application.properties`, an application entry point, and an optional
//! sample REST controller. [`generate_project`] packages one service as a zip;
//! [`generate_projects`] nests several service archives in one outer zip.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

use services::ProjectArchiver;

pub use app::AppContext;
pub use app::commands::generate::GeneratedArchive;
pub use domain::{
    AppError, BuildSystem, CatalogEntry, DependencyGroup, Language, Packaging, ProjectFile,
    Relationship, ServiceConfig, ServiceDraft, StoredService, project_files,
};
pub use ports::ServiceStore;

/// Render one service and package it as `<name>/...` entries in a zip archive.
pub fn generate_project(config: &ServiceConfig) -> Result<Vec<u8>, AppError> {
    ProjectArchiver::generate(config)
}

/// Package each service's archive as `<name>.zip` inside one outer archive.
///
/// An empty slice yields a valid empty archive.
pub fn generate_projects(configs: &[ServiceConfig]) -> Result<Vec<u8>, AppError> {
    ProjectArchiver::generate_all(configs)
}
