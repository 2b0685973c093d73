//! Project layout: where each rendered artifact lives inside a generated project.

use crate::domain::catalog::{DependencyId, DependencySet};
use crate::domain::render::{self, handler::CONTROLLER_PACKAGE};
use crate::domain::service::ServiceConfig;
use crate::domain::service::naming::{application_class_name, controller_class_name};

pub const PROPERTIES_PATH: &str = "src/main/resources/application.properties";

/// A rendered file and its path relative to the archive root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectFile {
    pub path: String,
    pub contents: String,
}

impl ProjectFile {
    fn new(path: String, contents: String) -> Self {
        Self { path, contents }
    }
}

/// Render every file of a service's project, rooted under `<name>/`.
///
/// Order is fixed: manifest, properties, entry point, then the sample
/// handler when the web starter is selected.
pub fn project_files(config: &ServiceConfig) -> Vec<ProjectFile> {
    let root = &config.name;
    let ext = config.language.extension();
    let source_root =
        format!("{root}/src/main/{}/{}", config.language.source_dir(), config.package_path());

    let mut files = vec![
        ProjectFile::new(
            format!("{root}/{}", config.build_system.manifest_file_name()),
            render::render_manifest(config),
        ),
        ProjectFile::new(format!("{root}/{PROPERTIES_PATH}"), render::render_properties(config)),
        ProjectFile::new(
            format!("{source_root}/{}{ext}", application_class_name(&config.name)),
            render::render_entry_point(config),
        ),
    ];

    if includes_sample_handler(config) {
        files.push(ProjectFile::new(
            format!("{source_root}/{CONTROLLER_PACKAGE}/{}{ext}", controller_class_name(&config.name)),
            render::render_handler(config),
        ));
    }

    files
}

/// The sample controller is only generated for servlet web services.
pub fn includes_sample_handler(config: &ServiceConfig) -> bool {
    DependencySet::from_ids(&config.dependencies).contains(DependencyId::Web)
}
