use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn remove_deletes_service() {
    let ctx = TestContext::new();
    ctx.add_service("user-service");

    ctx.cli()
        .args(["service", "rm", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed service 1"));

    let store = ctx.read_store();
    assert_eq!(store["services"], serde_json::json!([]));
}

#[test]
fn missing_ids_fail_with_not_found() {
    let ctx = TestContext::new();

    for args in [
        vec!["service", "show", "7"],
        vec!["service", "remove", "7"],
        vec!["service", "deps", "7", "web"],
        vec!["generate", "7"],
    ] {
        ctx.cli()
            .args(&args)
            .assert()
            .failure()
            .stderr(predicate::str::contains("Error: Service with ID 7 not found"));
    }
}
