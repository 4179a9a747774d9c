use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a temporary output directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a Command with --no-color flag for testing
fn cuj_cmd(output_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("cuj").expect("Failed to find cuj binary");
    cmd.arg("--no-color")
        .arg("--output-dir")
        .arg(output_dir.path());
    cmd
}

#[test]
fn test_cli_session_exports_titled_journey() {
    let temp_dir = create_cli_test_environment();

    cuj_cmd(&temp_dir)
        .write_stdin(
            "set title Signup\n\
             set platform android\n\
             edit 1 action Tap button\n\
             edit 1 pain-points Slow load\n\
             export\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("Success: Exported journey to"));

    let written = fs::read_to_string(temp_dir.path().join("Signup.md")).unwrap();
    assert!(written.starts_with("# Signup\n\n"));
    assert!(written.contains("**Platform:** Android\n\n"));
    assert!(written.contains("## Step 1: Tap button\n\n"));
    assert!(written.contains("**Pain Points:** Slow load\n\n"));
    assert!(!written.contains("**Notes:**"));
}

#[test]
fn test_cli_untitled_journey_exports_default_name() {
    let temp_dir = create_cli_test_environment();

    cuj_cmd(&temp_dir)
        .arg("session")
        .write_stdin("export\n")
        .assert()
        .success();

    let written = fs::read_to_string(temp_dir.path().join("cuj.md")).unwrap();
    assert!(written.starts_with("# Customer User Journey\n\n"));
    assert!(written.contains("## Step 1: Untitled Step\n\n"));
}

#[test]
fn test_cli_export_stdout_writes_nothing_to_disk() {
    let temp_dir = create_cli_test_environment();

    cuj_cmd(&temp_dir)
        .write_stdin("set goal Create account\nexport --stdout\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("**Goal:** Create account\n\n"));

    assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 0);
}

#[test]
fn test_cli_remove_renumbers_steps() {
    let temp_dir = create_cli_test_environment();

    cuj_cmd(&temp_dir)
        .write_stdin(
            "add\nadd\n\
             edit 3 action Confirm\n\
             remove 2\n\
             export --stdout\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("## Step 2: Confirm"))
        .stdout(predicate::str::contains("## Step 3").not());
}

#[test]
fn test_cli_rejects_unknown_platform() {
    let temp_dir = create_cli_test_environment();

    cuj_cmd(&temp_dir)
        .write_stdin("set platform Tizen\nexport --stdout\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Error:"))
        .stdout(predicate::str::contains("**Platform:** iOS"));
}

#[test]
fn test_cli_quit_stops_reading() {
    let temp_dir = create_cli_test_environment();

    cuj_cmd(&temp_dir)
        .write_stdin("quit\nexport\n")
        .assert()
        .success();

    assert!(!temp_dir.path().join("cuj.md").exists());
}

#[test]
fn test_cli_session_help_and_unknown_command() {
    let temp_dir = create_cli_test_environment();

    cuj_cmd(&temp_dir)
        .write_stdin("help\nfrobnicate\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("export"))
        .stdout(predicate::str::contains("frobnicate"));
}

#[test]
fn test_cli_help() {
    Command::cargo_bin("cuj")
        .expect("Failed to find cuj binary")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("session"))
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("--output-dir"));
}

#[test]
fn test_cli_values_may_look_like_flags() {
    let temp_dir = create_cli_test_environment();

    cuj_cmd(&temp_dir)
        .write_stdin("edit 1 action --help\nedit 1 notes -- see -h\nexport --stdout\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("## Step 1: --help\n\n"))
        .stdout(predicate::str::contains("**Notes:** -- see -h\n\n"));
}

#[test]
fn test_cli_session_survives_invalid_utf8() {
    let temp_dir = create_cli_test_environment();

    cuj_cmd(&temp_dir)
        .write_stdin(&b"set title Caf\xe9\nset goal Reached\nexport --stdout\n"[..])
        .assert()
        .success()
        .stdout(predicate::str::contains("**Goal:** Reached\n\n"));
}
