use crate::harness::TestContext;
use predicates::prelude::*;
use std::fs;

#[test]
fn store_flag_overrides_default_location() {
    let ctx = TestContext::new();
    ctx.write_definition(
        "svc.yml",
        "name: svc\ngroup: com.example\nartifact: svc\npackageName: com.example.svc\n",
    );

    ctx.cli().args(["--store", "custom/store.json", "service", "add", "svc.yml"]).assert().success();

    assert!(ctx.work_dir().join("custom/store.json").exists());
    assert!(!ctx.store_path().exists());
}

#[test]
fn environment_variable_selects_store() {
    let ctx = TestContext::new();
    ctx.write_definition(
        "svc.yml",
        "name: svc\ngroup: com.example\nartifact: svc\npackageName: com.example.svc\n",
    );

    ctx.cli().env("MSFORGE_STORE", "env-store.json").args(["service", "add", "svc.yml"]).assert().success();

    assert!(ctx.work_dir().join("env-store.json").exists());
}

#[test]
fn config_file_selects_store() {
    let ctx = TestContext::new();
    fs::write(ctx.work_dir().join("msforge.toml"), "[store]\npath = \"data/services.json\"\n")
        .unwrap();
    ctx.add_service("svc");

    assert!(ctx.work_dir().join("data/services.json").exists());
}

#[test]
fn malformed_store_is_reported() {
    let ctx = TestContext::new();
    fs::create_dir_all(ctx.store_path().parent().unwrap()).unwrap();
    fs::write(ctx.store_path(), "{ not json").unwrap();

    ctx.cli()
        .args(["service", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse"));
}

#[test]
fn invalid_config_file_is_reported() {
    let ctx = TestContext::new();
    fs::write(ctx.work_dir().join("msforge.toml"), "[store]\nlocation = 3\n").unwrap();

    ctx.cli()
        .args(["service", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("TOML parse error"));
}
