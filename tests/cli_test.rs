//! Command-line behaviour of the `uv-migrator` binary.

#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn uv_migrator() -> Command {
    Command::cargo_bin("uv-migrator").expect("uv-migrator binary")
}

fn create_project() -> TempDir {
    let td = tempfile::tempdir().expect("tempdir");
    let root = td.path();

    fs::create_dir_all(root.join("utils").join("logger_util")).unwrap();
    fs::write(
        root.join("utils").join("logger_util").join("init.yaml"),
        "version: \"0.3.0\"\ntype: util\n",
    )
    .unwrap();

    fs::create_dir_all(root.join("managers").join("config_manager")).unwrap();
    fs::write(
        root.join("managers").join("config_manager").join("init.yaml"),
        "type: manager\nrequirements:\n  - https://github.com/org/Logger_Util.git\n",
    )
    .unwrap();

    td
}

#[test]
fn test_migrate_requires_module_or_all() {
    let project = create_project();

    uv_migrator()
        .args(["migrate", "--root"])
        .arg(project.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains(
            "Please specify a module name or use --all",
        ));
}

#[test]
fn test_migrate_rejects_module_and_all_without_side_effects() {
    let project = create_project();

    uv_migrator()
        .args(["migrate", "logger_util", "--all", "--root"])
        .arg(project.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains(
            "Cannot specify both module name and --all",
        ));

    assert!(!project
        .path()
        .join("utils/logger_util/pyproject.toml")
        .exists());
}

#[test]
fn test_migrate_single_module_writes_manifest() {
    let project = create_project();

    uv_migrator()
        .args(["migrate", "logger_util", "--root"])
        .arg(project.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ Generated pyproject.toml"));

    let content =
        fs::read_to_string(project.path().join("utils/logger_util/pyproject.toml")).unwrap();
    assert!(content.contains("name = \"logger-util\""));
    assert!(content.contains("version = \"0.3.0\""));
}

#[test]
fn test_dry_run_prints_manifest() {
    let project = create_project();

    uv_migrator()
        .args(["migrate", "config_manager", "--dry-run", "--root"])
        .arg(project.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("logger-util = { workspace = true }"));

    assert!(!project
        .path()
        .join("managers/config_manager/pyproject.toml")
        .exists());
}

#[test]
fn test_unknown_module_fails() {
    let project = create_project();

    uv_migrator()
        .args(["migrate", "ghost_core", "--root"])
        .arg(project.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Module 'ghost_core' not found"));
}

#[test]
fn test_migrate_all_json_report() {
    let project = create_project();

    let output = uv_migrator()
        .args(["migrate", "--all", "--json", "--root"])
        .arg(project.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let results = report["results"].as_array().unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0]["module_name"], "config_manager");
    assert_eq!(results[1]["module_name"], "logger_util");
    assert!(results.iter().all(|r| r["success"] == true));
}

#[test]
fn test_preview_and_list() {
    let project = create_project();

    uv_migrator()
        .args(["preview", "logger_util", "--root"])
        .arg(project.path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("[project]\n"));

    uv_migrator()
        .args(["list", "--root"])
        .arg(project.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("config_manager"))
        .stdout(predicate::str::contains("logger_util"));
}

#[test]
fn test_invalid_config_aborts_before_migrating() {
    let project = create_project();
    fs::write(
        project.path().join("uv-migrator.toml"),
        "[project]\nrequires_python = \"  \"\n",
    )
    .unwrap();

    uv_migrator()
        .args(["migrate", "--all", "--root"])
        .arg(project.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration problem"));

    assert!(!project
        .path()
        .join("utils/logger_util/pyproject.toml")
        .exists());
}
