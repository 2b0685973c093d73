//! Service configuration model and schema validation.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::AppError;
use crate::domain::identifiers::{validate_identifier, validate_package_name};
use crate::domain::service::Relationship;

pub const DEFAULT_SPRING_BOOT_VERSION: &str = "3.4.4";
pub const DEFAULT_JAVA_VERSION: &str = "17";
pub const DEFAULT_DEPENDENCIES: [&str; 2] = ["web", "actuator"];

/// Java versions a service may target.
pub const SUPPORTED_JAVA_VERSIONS: [&str; 3] = ["17", "21", "24"];

/// Build tool used by a generated project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BuildSystem {
    #[default]
    Maven,
    GradleGroovy,
    GradleKotlin,
}

impl BuildSystem {
    pub const ALL: [BuildSystem; 3] =
        [BuildSystem::Maven, BuildSystem::GradleGroovy, BuildSystem::GradleKotlin];

    /// Identifier as it appears in service definitions.
    pub fn id(&self) -> &'static str {
        match self {
            BuildSystem::Maven => "maven",
            BuildSystem::GradleGroovy => "gradle-groovy",
            BuildSystem::GradleKotlin => "gradle-kotlin",
        }
    }

    /// File name of the build manifest at the project root.
    pub fn manifest_file_name(&self) -> &'static str {
        match self {
            BuildSystem::Maven => "pom.xml",
            BuildSystem::GradleGroovy => "build.gradle",
            BuildSystem::GradleKotlin => "build.gradle.kts",
        }
    }

    pub fn from_id(id: &str) -> Option<BuildSystem> {
        BuildSystem::ALL.into_iter().find(|b| b.id() == id)
    }
}

impl fmt::Display for BuildSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Source language of a generated project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Java,
    Kotlin,
    Groovy,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::Java, Language::Kotlin, Language::Groovy];

    pub fn id(&self) -> &'static str {
        match self {
            Language::Java => "java",
            Language::Kotlin => "kotlin",
            Language::Groovy => "groovy",
        }
    }

    /// Directory segment under `src/main/` holding sources.
    pub fn source_dir(&self) -> &'static str {
        match self {
            Language::Java => "java",
            Language::Kotlin => "kotlin",
            Language::Groovy => "groovy",
        }
    }

    /// Extension (with leading dot) of every generated source file.
    pub fn extension(&self) -> &'static str {
        match self {
            Language::Java => ".java",
            Language::Kotlin => ".kt",
            Language::Groovy => ".groovy",
        }
    }

    pub fn from_id(id: &str) -> Option<Language> {
        Language::ALL.into_iter().find(|l| l.id() == id)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Artifact packaging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Packaging {
    #[default]
    Jar,
    War,
}

impl fmt::Display for Packaging {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Packaging::Jar => "jar",
            Packaging::War => "war",
        })
    }
}

/// Everything the generator needs to scaffold one service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceConfig {
    pub name: String,
    pub build_system: BuildSystem,
    pub language: Language,
    pub spring_boot_version: String,
    pub group: String,
    pub artifact: String,
    #[serde(default)]
    pub description: String,
    pub package_name: String,
    pub packaging: Packaging,
    pub java_version: String,
    /// Dependency identifiers; only membership matters.
    #[serde(default)]
    pub dependencies: Vec<String>,
    #[serde(default)]
    pub relationships: Vec<Relationship>,
}

impl ServiceConfig {
    /// Schema check applied before a definition reaches the store.
    pub fn validate(&self) -> Result<(), AppError> {
        require_non_empty("name", &self.name)?;
        if !validate_identifier(&self.name, false) {
            return Err(AppError::invalid(
                "name",
                "must contain only alphanumeric characters, hyphens, or underscores",
            ));
        }
        require_non_empty("springBootVersion", &self.spring_boot_version)?;
        require_non_empty("group", &self.group)?;
        require_non_empty("artifact", &self.artifact)?;
        require_non_empty("packageName", &self.package_name)?;
        if !validate_package_name(&self.package_name) {
            return Err(AppError::invalid(
                "packageName",
                "must be dot-separated identifiers (e.g. com.example.demo)",
            ));
        }
        if !SUPPORTED_JAVA_VERSIONS.contains(&self.java_version.as_str()) {
            return Err(AppError::invalid(
                "javaVersion",
                format!("must be one of {}", SUPPORTED_JAVA_VERSIONS.join(", ")),
            ));
        }
        Ok(())
    }

    /// Package name converted to a `/`-separated directory path.
    pub fn package_path(&self) -> String {
        self.package_name.replace('.', "/")
    }

    pub fn has_dependency(&self, id: &str) -> bool {
        self.dependencies.iter().any(|d| d == id)
    }
}

fn require_non_empty(field: &'static str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::invalid(field, "is required"));
    }
    Ok(())
}

/// A service definition as written by a user, before defaults are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ServiceDraft {
    pub name: String,
    pub group: String,
    pub artifact: String,
    pub package_name: String,
    #[serde(default)]
    pub description: String,
    pub build_system: Option<BuildSystem>,
    pub language: Option<Language>,
    pub spring_boot_version: Option<String>,
    pub packaging: Option<Packaging>,
    pub java_version: Option<String>,
    pub dependencies: Option<Vec<String>>,
    #[serde(default)]
    pub relationships: Vec<Relationship>,
}

impl ServiceDraft {
    /// Fill omitted fields with the default project settings.
    pub fn into_config(self) -> ServiceConfig {
        ServiceConfig {
            name: self.name,
            build_system: self.build_system.unwrap_or_default(),
            language: self.language.unwrap_or_default(),
            spring_boot_version: self
                .spring_boot_version
                .unwrap_or_else(|| DEFAULT_SPRING_BOOT_VERSION.to_string()),
            group: self.group,
            artifact: self.artifact,
            description: self.description,
            package_name: self.package_name,
            packaging: self.packaging.unwrap_or_default(),
            java_version: self.java_version.unwrap_or_else(|| DEFAULT_JAVA_VERSION.to_string()),
            dependencies: self
                .dependencies
                .unwrap_or_else(|| DEFAULT_DEPENDENCIES.iter().map(|d| d.to_string()).collect()),
            relationships: self.relationships,
        }
    }
}
