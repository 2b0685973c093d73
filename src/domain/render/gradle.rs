//! Gradle build script renderers (Groovy and Kotlin DSL).

use crate::domain::catalog::{DependencySet, TEST_STARTER};
use crate::domain::render::{
    DEPENDENCY_MANAGEMENT_PLUGIN_VERSION, KOTLIN_PLUGIN_VERSION, PROJECT_VERSION,
    SPRING_CLOUD_VERSION,
};
use crate::domain::service::{BuildSystem, Language, Packaging, ServiceConfig};

/// Script language of a Gradle build file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradleDsl {
    /// `build.gradle`
    Groovy,
    /// `build.gradle.kts`
    Kotlin,
}

pub fn render_build_script(config: &ServiceConfig, dsl: GradleDsl) -> String {
    match dsl {
        GradleDsl::Groovy => render_groovy_dsl(config),
        GradleDsl::Kotlin => render_kotlin_dsl(config),
    }
}

fn dependency_lines(deps: &DependencySet, build_system: BuildSystem) -> String {
    deps.coordinates()
        .chain(std::iter::once(TEST_STARTER))
        .map(|c| c.fragment(build_system))
        .collect::<Vec<_>>()
        .join("\n    ")
}

fn render_groovy_dsl(config: &ServiceConfig) -> String {
    let deps = DependencySet::from_ids(&config.dependencies);

    let mut plugins = vec![
        "id 'java'".to_string(),
        format!("id 'org.springframework.boot' version '{}'", config.spring_boot_version),
        format!("id 'io.spring.dependency-management' version '{DEPENDENCY_MANAGEMENT_PLUGIN_VERSION}'"),
    ];
    if config.packaging == Packaging::War {
        plugins.push("id 'war'".to_string());
    }
    if config.language == Language::Kotlin {
        plugins.push(format!("id 'org.jetbrains.kotlin.jvm' version '{KOTLIN_PLUGIN_VERSION}'"));
        plugins.push(format!(
            "id 'org.jetbrains.kotlin.plugin.spring' version '{KOTLIN_PLUGIN_VERSION}'"
        ));
    }

    let cloud = if deps.needs_cloud_bom() {
        format!(
            r#"
ext {{
    set('springCloudVersion', "{SPRING_CLOUD_VERSION}")
}}

dependencyManagement {{
    imports {{
        mavenBom "org.springframework.cloud:spring-cloud-dependencies:${{springCloudVersion}}"
    }}
}}
"#
        )
    } else {
        String::new()
    };

    format!(
        r#"plugins {{
    {plugins}
}}

group = '{group}'
version = '{PROJECT_VERSION}'
sourceCompatibility = '{java}'

repositories {{
    mavenCentral()
}}
{cloud}
dependencies {{
    {dependencies}
}}

tasks.named('test') {{
    useJUnitPlatform()
}}
"#,
        plugins = plugins.join("\n    "),
        group = config.group,
        java = config.java_version,
        dependencies = dependency_lines(&deps, BuildSystem::GradleGroovy),
    )
}

fn render_kotlin_dsl(config: &ServiceConfig) -> String {
    let deps = DependencySet::from_ids(&config.dependencies);

    let mut plugins = vec![
        "java".to_string(),
        format!("id(\"org.springframework.boot\") version \"{}\"", config.spring_boot_version),
        format!(
            "id(\"io.spring.dependency-management\") version \"{DEPENDENCY_MANAGEMENT_PLUGIN_VERSION}\""
        ),
    ];
    if config.packaging == Packaging::War {
        plugins.push("war".to_string());
    }
    if config.language == Language::Kotlin {
        plugins.push(format!("kotlin(\"jvm\") version \"{KOTLIN_PLUGIN_VERSION}\""));
        plugins.push(format!("kotlin(\"plugin.spring\") version \"{KOTLIN_PLUGIN_VERSION}\""));
    }

    let cloud = if deps.needs_cloud_bom() {
        format!(
            r#"
extra["springCloudVersion"] = "{SPRING_CLOUD_VERSION}"

dependencyManagement {{
    imports {{
        mavenBom("org.springframework.cloud:spring-cloud-dependencies:${{property("springCloudVersion")}}")
    }}
}}
"#
        )
    } else {
        String::new()
    };

    format!(
        r#"plugins {{
    {plugins}
}}

group = "{group}"
version = "{PROJECT_VERSION}"
java.sourceCompatibility = JavaVersion.VERSION_{java}

repositories {{
    mavenCentral()
}}
{cloud}
dependencies {{
    {dependencies}
}}

tasks.withType<Test> {{
    useJUnitPlatform()
}}

tasks.withType<org.jetbrains.kotlin.gradle.tasks.KotlinCompile> {{
    kotlinOptions {{
        freeCompilerArgs = listOf("-Xjsr305=strict")
        jvmTarget = "{java}"
    }}
}}
"#,
        plugins = plugins.join("\n    "),
        group = config.group,
        java = config.java_version,
        dependencies = dependency_lines(&deps, BuildSystem::GradleKotlin),
    )
}
