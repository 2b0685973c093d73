use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn list_reports_empty_store() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["service", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No services defined"));
}

#[test]
fn list_shows_services_in_id_order() {
    let ctx = TestContext::new();
    ctx.add_service("gateway");
    ctx.add_service_with("order-service", "language: kotlin\nbuildSystem: gradle-groovy\n");

    let output = ctx.cli().args(["service", "ls"]).output().expect("Failed to run list");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);

    let gateway = stdout.find("gateway").expect("gateway listed");
    let order = stdout.find("order-service").expect("order-service listed");
    assert!(gateway < order);
    assert!(stdout.contains("gradle-groovy"));
    assert!(stdout.contains("kotlin"));
}

#[test]
fn show_prints_definition_as_json() {
    let ctx = TestContext::new();
    ctx.add_service("user-service");

    let output = ctx.cli().args(["service", "show", "1"]).output().expect("Failed to run show");
    assert!(output.status.success());
    let shown: serde_json::Value = serde_json::from_slice(&output.stdout).expect("JSON output");
    assert_eq!(shown["id"], 1);
    assert_eq!(shown["name"], "user-service");
    assert_eq!(shown["packageName"], "com.example.userservice");
    assert_eq!(shown["relationships"], serde_json::json!([]));
}

#[test]
fn update_replaces_metadata_and_keeps_relationships() {
    let ctx = TestContext::new();
    ctx.add_service("gateway");
    ctx.add_service("user-service");
    ctx.cli().args(["service", "link", "1", "--target", "2"]).assert().success();

    ctx.write_definition(
        "gateway-v2.yml",
        "name: edge\ngroup: org.acme\nartifact: edge\npackageName: org.acme.edge\njavaVersion: \"21\"\n",
    );
    ctx.cli()
        .args(["service", "update", "1", "gateway-v2.yml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated service 'edge'"));

    let store = ctx.read_store();
    let service = &store["services"][0];
    assert_eq!(service["name"], "edge");
    assert_eq!(service["javaVersion"], "21");
    assert_eq!(service["relationships"][0]["targetServiceId"], 2);
}

#[test]
fn update_keeps_dependencies_omitted_from_definition() {
    let ctx = TestContext::new();
    ctx.add_service("user-service");
    ctx.cli().args(["service", "deps", "1", "webflux", "h2"]).assert().success();

    ctx.write_definition(
        "user-v2.yml",
        "name: user-service\ngroup: com.example\nartifact: user-service\npackageName: com.example.userservice\ndescription: Users\n",
    );
    ctx.cli().args(["service", "update", "1", "user-v2.yml"]).assert().success();

    let service = &ctx.read_store()["services"][0];
    assert_eq!(service["description"], "Users");
    assert_eq!(service["dependencies"], serde_json::json!(["webflux", "h2"]));
}
