//! Main application class renderer.

use crate::domain::catalog::{DependencyId, DependencySet};
use crate::domain::service::naming::application_class_name;
use crate::domain::service::{Language, ServiceConfig};

const EUREKA_ANNOTATION: &str = "org.springframework.cloud.netflix.eureka.EnableEurekaClient";

pub fn render_entry_point(config: &ServiceConfig) -> String {
    let class_name = application_class_name(&config.name);
    let discovery = DependencySet::from_ids(&config.dependencies).contains(DependencyId::Eureka);

    let mut imports = match config.language {
        Language::Java => vec![
            "org.springframework.boot.SpringApplication",
            "org.springframework.boot.autoconfigure.SpringBootApplication",
        ],
        Language::Kotlin => vec![
            "org.springframework.boot.autoconfigure.SpringBootApplication",
            "org.springframework.boot.runApplication",
        ],
        Language::Groovy => vec![
            "org.springframework.boot.SpringApplication",
            "org.springframework.boot.autoconfigure.SpringBootApplication",
        ],
    };
    let mut annotations = vec!["@SpringBootApplication"];
    if discovery {
        imports.push(EUREKA_ANNOTATION);
        annotations.push("@EnableEurekaClient");
    }

    let terminator = if config.language == Language::Java { ";" } else { "" };
    let imports = imports
        .iter()
        .map(|i| format!("import {i}{terminator}"))
        .collect::<Vec<_>>()
        .join("\n");
    let annotations = annotations.join("\n");
    let package = &config.package_name;

    match config.language {
        Language::Java => format!(
            r#"package {package};

{imports}

{annotations}
public class {class_name} {{

    public static void main(String[] args) {{
        SpringApplication.run({class_name}.class, args);
    }}

}}
"#
        ),
        Language::Kotlin => format!(
            r#"package {package}

{imports}

{annotations}
class {class_name}

fun main(args: Array<String>) {{
    runApplication<{class_name}>(*args)
}}
"#
        ),
        Language::Groovy => format!(
            r#"package {package}

{imports}

{annotations}
class {class_name} {{

    static void main(String[] args) {{
        SpringApplication.run({class_name}, args)
    }}

}}
"#
        ),
    }
}
