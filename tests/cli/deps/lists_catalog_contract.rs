use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn deps_lists_every_group() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["deps"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Web:"))
        .stdout(predicate::str::contains("Cloud:"))
        .stdout(predicate::str::contains("web - Spring Web"))
        .stdout(predicate::str::contains("kafka - Spring for Apache Kafka (listing only)"));
}

#[test]
fn deps_filters_by_group() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["d", "--group", "sql"])
        .assert()
        .success()
        .stdout(predicate::str::contains("SQL:"))
        .stdout(predicate::str::contains("h2 - H2 Database"))
        .stdout(predicate::str::contains("Spring Web").not());
}

#[test]
fn deps_rejects_unknown_group() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["deps", "--group", "frontend"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown dependency group 'frontend'"));
}
