use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn cmd(root: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("meatycapture").unwrap();
    cmd.env("MEATYCAPTURE_HOME", root.path());
    cmd.env_remove("MEATYCAPTURE_API_URL");
    cmd.env_remove("MEATYCAPTURE_PROJECT");
    cmd
}

#[test]
fn project_add_and_list_json() {
    let root = TempDir::new().unwrap();

    cmd(&root)
        .args([
            "project",
            "add",
            "--id",
            "docs",
            "--name",
            "Docs",
            "--default-path",
            "/tmp/docs",
            "--non-interactive",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Registered project 'docs'"));

    cmd(&root)
        .args(["project", "list", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"id\": \"docs\""))
        .stdout(predicate::str::contains("\"enabled\": true"));
}

#[test]
fn invalid_slug_is_rejected() {
    let root = TempDir::new().unwrap();

    cmd(&root)
        .args([
            "project",
            "add",
            "--id",
            "Not A Slug",
            "--name",
            "Bad",
            "--default-path",
            "/tmp/bad",
            "--non-interactive",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("lowercase"));
}

#[test]
fn config_set_get_roundtrip() {
    let root = TempDir::new().unwrap();

    cmd(&root)
        .args(["config", "set", "default_project", "docs"])
        .assert()
        .success();

    cmd(&root)
        .args(["config", "get"])
        .assert()
        .success()
        .stdout(predicate::str::contains("default_project: docs"));
}

#[test]
fn unknown_config_key_fails() {
    let root = TempDir::new().unwrap();

    cmd(&root)
        .args(["config", "set", "retention_days", "30"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown configuration key"));
}

#[test]
fn remove_requires_yes_in_non_interactive_mode() {
    let root = TempDir::new().unwrap();

    cmd(&root)
        .args([
            "project",
            "add",
            "--id",
            "docs",
            "--name",
            "Docs",
            "--default-path",
            "/tmp/docs",
            "--non-interactive",
        ])
        .assert()
        .success();

    cmd(&root)
        .args(["project", "remove", "docs", "--non-interactive"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--yes is required"));

    // Still there.
    cmd(&root)
        .args(["project", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("docs"));

    cmd(&root)
        .args(["project", "remove", "docs", "--non-interactive", "--yes"])
        .assert()
        .success();

    cmd(&root)
        .args(["project", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No projects registered."));
}

#[test]
fn quiet_suppresses_success_chatter() {
    let root = TempDir::new().unwrap();

    cmd(&root)
        .args([
            "--quiet",
            "project",
            "add",
            "--id",
            "docs",
            "--name",
            "Docs",
            "--default-path",
            "/tmp/docs",
            "--non-interactive",
        ])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn field_list_seeds_global_catalog() {
    let root = TempDir::new().unwrap();

    cmd(&root)
        .args(["field", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("status"));

    assert!(root.path().join("fields.json").exists());
}
