//! Integration tests for the `td` binary.
//!
//! The TUI needs a terminal, so these only cover what happens before it
//! starts: argument parsing and config loading.

use std::fs;
use std::path::PathBuf;
use std::process::Command;

/// Get the path to the built `td` binary.
fn td_bin() -> PathBuf {
    // cargo test builds to target/debug/
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // remove test binary name
    path.pop(); // remove deps/
    path.push("td");
    path
}

#[test]
fn help_lists_flags() {
    let output = Command::new(td_bin()).arg("--help").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--config"));
    assert!(stdout.contains("--log-file"));
    assert!(stdout.contains("--dump-json"));
}

#[test]
fn missing_explicit_config_fails_before_tui() {
    let tmp = tempfile::TempDir::new().unwrap();
    let output = Command::new(td_bin())
        .current_dir(tmp.path())
        .args(["--config", "absent.toml"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.starts_with("error: could not read"));
    assert!(stderr.contains("absent.toml"));
}

#[test]
fn malformed_default_config_fails_before_tui() {
    let tmp = tempfile::TempDir::new().unwrap();
    fs::write(
        tmp.path().join("taskdeck.toml"),
        "[workspace]\non_project_delete = \"sometimes\"\n",
    )
    .unwrap();
    let output = Command::new(td_bin())
        .current_dir(tmp.path())
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("could not parse"));
}
