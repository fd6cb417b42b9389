//! Integration tests for init and config commands

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::mtag_cmd;

#[test]
fn test_init_creates_config_and_store() {
    let temp = TempDir::new().unwrap();

    mtag_cmd().arg("init").arg(temp.path()).assert().success();

    // Check .mtag directory exists
    assert!(temp.path().join(".mtag").exists());

    // Check config.toml exists with defaults
    let config_path = temp.path().join(".mtag/config.toml");
    assert!(config_path.exists());

    let content = fs::read_to_string(config_path).unwrap();
    assert!(content.contains("taggable_type = \"Record\""));
    assert!(content.contains("delimiter = \",\""));
    assert!(content.contains("created"));

    // Check the empty store document exists
    let store_path = temp.path().join(".mtag/store.toml");
    assert!(store_path.exists());
    let store_content = fs::read_to_string(store_path).unwrap();
    assert!(store_content.contains("taggable_type = \"Record\""));
}

#[test]
fn test_init_with_custom_taggable_type() {
    let temp = TempDir::new().unwrap();

    mtag_cmd()
        .arg("init")
        .arg(temp.path())
        .arg("--taggable-type")
        .arg("Bookmark")
        .assert()
        .success();

    let config_path = temp.path().join(".mtag/config.toml");
    let content = fs::read_to_string(config_path).unwrap();
    assert!(content.contains("taggable_type = \"Bookmark\""));
}

#[test]
fn test_init_already_initialized_fails() {
    let temp = TempDir::new().unwrap();

    mtag_cmd().arg("init").arg(temp.path()).assert().success();

    mtag_cmd()
        .arg("init")
        .arg(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("already initialized"));
}

#[test]
fn test_config_get_and_set_delimiter() {
    let temp = TempDir::new().unwrap();

    mtag_cmd().arg("init").arg(temp.path()).assert().success();

    mtag_cmd()
        .current_dir(temp.path())
        .args(["config", "delimiter", ";"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Set delimiter = ;"));

    mtag_cmd()
        .current_dir(temp.path())
        .args(["config", "delimiter"])
        .assert()
        .success()
        .stdout(predicate::str::contains(";"));
}

#[test]
fn test_config_taggable_type_is_read_only() {
    let temp = TempDir::new().unwrap();

    mtag_cmd().arg("init").arg(temp.path()).assert().success();

    mtag_cmd()
        .current_dir(temp.path())
        .args(["config", "taggable_type", "Bookmark"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("read-only"));
}

#[test]
fn test_config_list() {
    let temp = TempDir::new().unwrap();

    mtag_cmd().arg("init").arg(temp.path()).assert().success();

    mtag_cmd()
        .current_dir(temp.path())
        .args(["config", "--list"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("taggable_type = Record")
                .and(predicate::str::contains("delimiter = ,"))
                .and(predicate::str::contains("created = ")),
        );
}

#[test]
fn test_config_unknown_key() {
    let temp = TempDir::new().unwrap();

    mtag_cmd().arg("init").arg(temp.path()).assert().success();

    mtag_cmd()
        .current_dir(temp.path())
        .args(["config", "mode"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn test_commands_outside_store_fail() {
    let temp = TempDir::new().unwrap();

    mtag_cmd()
        .current_dir(temp.path())
        .args(["tags"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Not an mtag store"));
}
