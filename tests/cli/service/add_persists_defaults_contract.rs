use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn add_assigns_id_and_applies_defaults() {
    let ctx = TestContext::new();
    ctx.write_definition(
        "user.yml",
        "name: user-service\ngroup: com.example\nartifact: user-service\npackageName: com.example.users\n",
    );

    ctx.cli()
        .args(["service", "add", "user.yml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added service 'user-service' with ID 1"));

    let store = ctx.read_store();
    let service = &store["services"][0];
    assert_eq!(store["nextId"], 2);
    assert_eq!(service["id"], 1);
    assert_eq!(service["buildSystem"], "maven");
    assert_eq!(service["language"], "java");
    assert_eq!(service["springBootVersion"], "3.4.4");
    assert_eq!(service["packaging"], "jar");
    assert_eq!(service["javaVersion"], "17");
    assert_eq!(service["dependencies"], serde_json::json!(["web", "actuator"]));
}

#[test]
fn add_accepts_json_definitions() {
    let ctx = TestContext::new();
    ctx.write_definition(
        "gateway.json",
        r#"{"name":"gateway","group":"com.example","artifact":"gateway","packageName":"com.example.gateway","buildSystem":"gradle-kotlin","language":"kotlin","dependencies":["gateway","eureka"]}"#,
    );

    ctx.cli().args(["s", "a", "gateway.json"]).assert().success();

    let store = ctx.read_store();
    assert_eq!(store["services"][0]["buildSystem"], "gradle-kotlin");
    assert_eq!(store["services"][0]["dependencies"], serde_json::json!(["gateway", "eureka"]));
}

#[test]
fn ids_are_never_reused_after_removal() {
    let ctx = TestContext::new();
    ctx.add_service("first");
    ctx.cli().args(["service", "remove", "1"]).assert().success();
    ctx.write_definition(
        "second.yml",
        "name: second\ngroup: com.example\nartifact: second\npackageName: com.example.second\n",
    );

    ctx.cli()
        .args(["service", "add", "second.yml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("with ID 2"));
}
