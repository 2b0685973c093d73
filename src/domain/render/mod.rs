//! Pure renderers turning a service configuration into generated file contents.

pub mod entry_point;
pub mod gradle;
pub mod handler;
pub mod maven;
pub mod properties;

pub use entry_point::render_entry_point;
pub use gradle::GradleDsl;
pub use handler::render_handler;
pub use properties::render_properties;

use crate::domain::service::{BuildSystem, ServiceConfig};

pub const PROJECT_VERSION: &str = "0.0.1-SNAPSHOT";
pub const SPRING_CLOUD_VERSION: &str = "2023.0.0";
pub const DEPENDENCY_MANAGEMENT_PLUGIN_VERSION: &str = "1.1.4";
pub const KOTLIN_PLUGIN_VERSION: &str = "1.9.20";

/// Render the build manifest for the service's build system.
pub fn render_manifest(config: &ServiceConfig) -> String {
    match config.build_system {
        BuildSystem::Maven => maven::render_pom(config),
        BuildSystem::GradleGroovy => gradle::render_build_script(config, GradleDsl::Groovy),
        BuildSystem::GradleKotlin => gradle::render_build_script(config, GradleDsl::Kotlin),
    }
}
