//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run with HOME pointed at a
//! temporary directory so they never touch real user state.

use std::path::Path;
use std::process::Command;

fn run_cli(home: &Path, args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .args(["run", "-p", "etime-cli", "--"])
        .args(args)
        .env("HOME", home)
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

#[test]
fn clock_show_prints_time_and_date() {
    let home = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(home.path(), &["clock", "show"]);
    assert_eq!(code, 0);
    // Two lines: HH:MM:SS and the date line.
    assert_eq!(stdout.trim().lines().count(), 2);
    assert!(stdout.contains(':'));
}

#[test]
fn clock_show_analog_emits_svg() {
    let home = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(home.path(), &["clock", "show", "--mode", "analog"]);
    assert_eq!(code, 0);
    assert!(stdout.starts_with("<svg"));
    assert!(stdout.contains("</svg>"));
}

#[test]
fn task_lifecycle_round_trips() {
    let home = tempfile::tempdir().unwrap();

    let (stdout, _, code) = run_cli(home.path(), &["task", "add", "Test Task"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Task created:"));

    let (stdout, _, code) = run_cli(home.path(), &["task", "list"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Test Task"));
}

#[test]
fn blank_task_is_rejected() {
    let home = tempfile::tempdir().unwrap();
    let (_, stderr, code) = run_cli(home.path(), &["task", "add", "   "]);
    assert_ne!(code, 0);
    assert!(stderr.contains("empty"));
}

#[test]
fn format_preference_persists_between_invocations() {
    let home = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(home.path(), &["config", "set-format", "12"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("12-hour"));

    let (stdout, _, code) = run_cli(home.path(), &["config", "show"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("format: 12-hour"));
}

#[test]
fn background_presets_and_validation() {
    let home = tempfile::tempdir().unwrap();

    let (stdout, _, code) = run_cli(home.path(), &["background", "presets"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("linear-gradient"));

    let (_, stderr, code) = run_cli(home.path(), &["background", "set-url", "notanimage"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("valid image URL"));

    let (stdout, _, code) =
        run_cli(home.path(), &["background", "set-url", "https://x.com/a.jpg"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("https://x.com/a.jpg"));
}
