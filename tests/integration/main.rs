//! Integration tests for the printstrip CLI
//!
//! These drive the real binary against throwaway Dart trees.

use assert_cmd::cargo;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const HOME: &str = "void f() {\n  print('hello');\n  debugPrint('world');\n}\n";
const CLEANED_HOME: &str =
    "void f() {\n  // Debug logging removed\n  // Debug logging removed\n}\n";
const LOGGER: &str = "void log(String m) {\n  debugPrint(m);\n}\n";

/// Helper function to create a printstrip command
fn printstrip() -> assert_cmd::Command {
    assert_cmd::Command::new(cargo::cargo_bin!("printstrip"))
}

/// Helper to lay out a Dart tree under `root`
fn write_tree(root: &Path) {
    fs::create_dir_all(root.join("widgets")).unwrap();
    fs::create_dir_all(root.join("utils")).unwrap();
    fs::write(root.join("widgets/home.dart"), HOME).unwrap();
    fs::write(root.join("utils/app_logger.dart"), LOGGER).unwrap();
}

#[test]
fn test_version() {
    printstrip()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("printstrip"));
}

#[test]
fn test_help() {
    printstrip()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Debug logging removed"));
}

#[test]
fn test_cleans_given_root() {
    let temp = TempDir::new().unwrap();
    write_tree(temp.path());

    printstrip()
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("🚀 Starting print statement removal"))
        .stdout(predicate::str::contains("Removed ~2 print statements"))
        .stdout(predicate::str::contains("(logging utility)"))
        .stdout(predicate::str::contains("Processed 2 files"))
        .stdout(predicate::str::contains("Total print statements removed: ~2"))
        .stdout(predicate::str::contains("Run this to verify:"));

    assert_eq!(fs::read_to_string(temp.path().join("widgets/home.dart")).unwrap(), CLEANED_HOME);
    assert_eq!(fs::read_to_string(temp.path().join("utils/app_logger.dart")).unwrap(), LOGGER);
}

#[test]
fn test_info_logs_shown_without_verbose() {
    let temp = TempDir::new().unwrap();
    write_tree(temp.path());

    printstrip()
        .arg(temp.path())
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stderr(predicate::str::contains("with scan strategy"))
        .stderr(predicate::str::contains("statement(s)").not());
}

#[test]
fn test_default_root_from_cwd() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("ruwaq_jawi/lib/core");
    write_tree(&root);

    printstrip()
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("ruwaq_jawi/lib/core"));

    assert_eq!(fs::read_to_string(root.join("widgets/home.dart")).unwrap(), CLEANED_HOME);
}

#[test]
fn test_missing_root_fails_before_touching_files() {
    let temp = TempDir::new().unwrap();

    printstrip()
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("path not found"))
        .stdout(predicate::str::contains("Starting").not());
}

#[test]
fn test_config_file_sets_root_and_exclude() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("app/lib");
    write_tree(&root);
    fs::write(
        temp.path().join(".printstrip.toml"),
        "root = \"app/lib\"\nexclude = \"home.dart\"\n",
    )
    .unwrap();

    printstrip().current_dir(temp.path()).assert().success();

    // home.dart is excluded now, app_logger.dart is fair game
    assert_eq!(fs::read_to_string(root.join("widgets/home.dart")).unwrap(), HOME);
    assert_eq!(
        fs::read_to_string(root.join("utils/app_logger.dart")).unwrap(),
        "void log(String m) {\n  // Debug logging removed\n}\n"
    );
}

#[test]
fn test_explicit_missing_config_fails() {
    let temp = TempDir::new().unwrap();

    printstrip()
        .args(["--config", "nope.toml"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("config not found"));
}

#[test]
fn test_dry_run_leaves_files() {
    let temp = TempDir::new().unwrap();
    write_tree(temp.path());

    printstrip()
        .arg(temp.path())
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("Would remove ~2"))
        .stdout(predicate::str::contains("Dry run: no files were written."));

    assert_eq!(fs::read_to_string(temp.path().join("widgets/home.dart")).unwrap(), HOME);
}

#[test]
fn test_legacy_strategy() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("a.dart"), "  debugPrint(jsonEncode(x));\n").unwrap();

    printstrip()
        .arg(temp.path())
        .arg("--legacy")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total print statements removed: ~0"));

    assert_eq!(
        fs::read_to_string(temp.path().join("a.dart")).unwrap(),
        "  // Debug logging removed\n"
    );
}

#[test]
fn test_json_output() {
    let temp = TempDir::new().unwrap();
    write_tree(temp.path());
    fs::write(temp.path().join("broken.dart"), [0xffu8, 0xfe]).unwrap();

    let output = printstrip().arg(temp.path()).arg("--json").output().unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["files_processed"], 2);
    assert_eq!(json["files_failed"], 1);
    assert_eq!(json["total_removed"], 2);
}

#[test]
fn test_failing_file_does_not_abort() {
    let temp = TempDir::new().unwrap();
    write_tree(temp.path());
    fs::write(temp.path().join("aaa.dart"), [0xc3u8, 0x28]).unwrap();

    printstrip()
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("❌ Error processing"))
        .stdout(predicate::str::contains("1 file(s) could not be processed"));

    assert_eq!(fs::read_to_string(temp.path().join("widgets/home.dart")).unwrap(), CLEANED_HOME);
}
