//! Shared fixtures for unit tests.

use crate::domain::{BuildSystem, Language, Packaging, ServiceConfig};

/// Maven/Java service with the default `web` + `actuator` selection.
///
/// The package is `com.example.<name without hyphens>`.
pub fn sample_config(name: &str) -> ServiceConfig {
    ServiceConfig {
        name: name.to_string(),
        build_system: BuildSystem::Maven,
        language: Language::Java,
        spring_boot_version: "3.4.4".to_string(),
        group: "com.example".to_string(),
        artifact: name.to_string(),
        description: format!("Demo project for {name}"),
        package_name: format!("com.example.{}", name.replace('-', "")),
        packaging: Packaging::Jar,
        java_version: "17".to_string(),
        dependencies: vec!["web".to_string(), "actuator".to_string()],
        relationships: Vec::new(),
    }
}
