//! Sample REST controller renderer.

use crate::domain::service::naming::controller_class_name;
use crate::domain::service::{Language, ServiceConfig};

/// Sub-package (relative to the service package) holding the sample controller.
pub const CONTROLLER_PACKAGE: &str = "controller";

pub fn render_handler(config: &ServiceConfig) -> String {
    let class_name = controller_class_name(&config.name);
    let package = format!("{}.{CONTROLLER_PACKAGE}", config.package_name);
    let name = &config.name;

    match config.language {
        Language::Java => format!(
            r#"package {package};

import org.springframework.web.bind.annotation.GetMapping;
import org.springframework.web.bind.annotation.RestController;
import org.springframework.http.ResponseEntity;
import java.util.HashMap;
import java.util.Map;

@RestController
public class {class_name} {{

    @GetMapping("/")
    public ResponseEntity<Map<String, String>> hello() {{
        Map<String, String> response = new HashMap<>();
        response.put("message", "Hello from {name}!");
        response.put("service", "{name}");
        return ResponseEntity.ok(response);
    }}
}}
"#
        ),
        Language::Kotlin => format!(
            r#"package {package}

import org.springframework.web.bind.annotation.GetMapping
import org.springframework.web.bind.annotation.RestController
import org.springframework.http.ResponseEntity

@RestController
class {class_name} {{

    @GetMapping("/")
    fun hello(): ResponseEntity<Map<String, String>> {{
        val response = mapOf(
            "message" to "Hello from {name}!",
            "service" to "{name}"
        )
        return ResponseEntity.ok(response)
    }}
}}
"#
        ),
        Language::Groovy => format!(
            r#"package {package}

import org.springframework.web.bind.annotation.GetMapping
import org.springframework.web.bind.annotation.RestController
import org.springframework.http.ResponseEntity

@RestController
class {class_name} {{

    @GetMapping("/")
    ResponseEntity<Map<String, String>> hello() {{
        def response = [
            message: "Hello from {name}!",
            service: "{name}"
        ]
        return ResponseEntity.ok(response)
    }}
}}
"#
        ),
    }
}
