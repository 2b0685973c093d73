use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn generate_writes_named_archive() {
    let ctx = TestContext::new();
    ctx.add_service("user-service");

    ctx.cli()
        .args(["generate", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Generated"))
        .stdout(predicate::str::contains("user-service.zip"));

    let archive = ctx.work_dir().join("user-service.zip");
    assert_eq!(
        ctx.archive_entries(&archive),
        vec![
            "user-service/pom.xml",
            "user-service/src/main/resources/application.properties",
            "user-service/src/main/java/com/example/userservice/UserServiceApplication.java",
            "user-service/src/main/java/com/example/userservice/controller/UserServiceController.java",
        ]
    );

    let properties =
        ctx.archive_text(&archive, "user-service/src/main/resources/application.properties");
    assert_eq!(properties, "spring.application.name=user-service\nserver.port=8080\n");
}

#[test]
fn generate_honours_output_path() {
    let ctx = TestContext::new();
    ctx.add_service_with("catalog", "buildSystem: gradle-kotlin\nlanguage: kotlin\n");

    ctx.cli().args(["g", "1", "-o", "out/catalog-project.zip"]).assert().success();

    let archive = ctx.work_dir().join("out/catalog-project.zip");
    let entries = ctx.archive_entries(&archive);
    assert_eq!(entries[0], "catalog/build.gradle.kts");
    assert!(entries.contains(
        &"catalog/src/main/kotlin/com/example/catalog/CatalogApplication.kt".to_string()
    ));

    let script = ctx.archive_text(&archive, "catalog/build.gradle.kts");
    assert!(script.contains("kotlin(\"jvm\")"));
    assert!(script.contains("implementation(\"org.springframework.boot:spring-boot-starter-web\")"));
}

#[test]
fn generate_without_web_omits_controller() {
    let ctx = TestContext::new();
    ctx.add_service_with("worker", "dependencies:\n  - actuator\n");

    ctx.cli().args(["generate", "1"]).assert().success();

    let entries = ctx.archive_entries(&ctx.work_dir().join("worker.zip"));
    assert_eq!(entries.len(), 3);
    assert!(entries.iter().all(|e| !e.contains("/controller/")));
}

#[test]
fn generate_is_deterministic() {
    let ctx = TestContext::new();
    ctx.add_service("user-service");

    ctx.cli().args(["generate", "1", "-o", "a.zip"]).assert().success();
    ctx.cli().args(["generate", "1", "-o", "b.zip"]).assert().success();

    let a = std::fs::read(ctx.work_dir().join("a.zip")).unwrap();
    let b = std::fs::read(ctx.work_dir().join("b.zip")).unwrap();
    assert_eq!(a, b);
}
