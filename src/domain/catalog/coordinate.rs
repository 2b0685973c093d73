use crate::domain::service::BuildSystem;

/// Classpath scope of a manifest dependency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Compile,
    Runtime,
    Test,
}

impl Scope {
    /// Gradle configuration keyword for this scope.
    pub fn gradle_configuration(&self) -> &'static str {
        match self {
            Scope::Compile => "implementation",
            Scope::Runtime => "runtimeOnly",
            Scope::Test => "testImplementation",
        }
    }

    /// Maven `<scope>` value; compile scope is implicit.
    pub fn maven_scope(&self) -> Option<&'static str> {
        match self {
            Scope::Compile => None,
            Scope::Runtime => Some("runtime"),
            Scope::Test => Some("test"),
        }
    }
}

/// Maven coordinates of a version-managed dependency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coordinate {
    pub group: &'static str,
    pub artifact: &'static str,
    pub scope: Scope,
}

/// Test starter added to every generated manifest.
pub const TEST_STARTER: Coordinate = Coordinate {
    group: "org.springframework.boot",
    artifact: "spring-boot-starter-test",
    scope: Scope::Test,
};

impl Coordinate {
    pub const fn compile(group: &'static str, artifact: &'static str) -> Self {
        Self { group, artifact, scope: Scope::Compile }
    }

    pub const fn runtime(group: &'static str, artifact: &'static str) -> Self {
        Self { group, artifact, scope: Scope::Runtime }
    }

    /// Manifest fragment declaring this dependency.
    ///
    /// Maven fragments are indented for the `<dependencies>` element; Gradle
    /// fragments are a single line without indentation.
    pub fn fragment(&self, build_system: BuildSystem) -> String {
        match build_system {
            BuildSystem::Maven => {
                let scope = self
                    .scope
                    .maven_scope()
                    .map(|s| format!("\n            <scope>{s}</scope>"))
                    .unwrap_or_default();
                format!(
                    "        <dependency>\n            <groupId>{}</groupId>\n            <artifactId>{}</artifactId>{scope}\n        </dependency>",
                    self.group, self.artifact
                )
            }
            BuildSystem::GradleGroovy => {
                format!("{} '{}:{}'", self.scope.gradle_configuration(), self.group, self.artifact)
            }
            BuildSystem::GradleKotlin => {
                format!("{}(\"{}:{}\")", self.scope.gradle_configuration(), self.group, self.artifact)
            }
        }
    }
}
