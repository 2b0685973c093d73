use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn add_rejects_name_already_in_store() {
    let ctx = TestContext::new();
    ctx.add_service("user-service");
    ctx.write_definition(
        "again.yml",
        "name: user-service\ngroup: org.acme\nartifact: users\npackageName: org.acme.users\n",
    );

    ctx.cli()
        .args(["service", "add", "again.yml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("'name'"))
        .stderr(predicate::str::contains("already used by service 1"));

    let store = ctx.read_store();
    assert_eq!(store["services"].as_array().map(Vec::len), Some(1));
    ctx.cli().args(["generate-all"]).assert().success();
}

#[test]
fn update_rejects_name_of_another_service() {
    let ctx = TestContext::new();
    ctx.add_service("gateway");
    ctx.add_service("user-service");
    ctx.write_definition(
        "rename.yml",
        "name: gateway\ngroup: com.example\nartifact: gateway\npackageName: com.example.gateway\n",
    );

    ctx.cli()
        .args(["service", "update", "2", "rename.yml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already used by service 1"));

    assert_eq!(ctx.read_store()["services"][1]["name"], "user-service");
}
