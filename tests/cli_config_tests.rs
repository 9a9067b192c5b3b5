//! End-to-end tests for `splitboard config` commands.

use std::path::Path;
use std::process::Command;

/// Path to the splitboard binary
fn splitboard_bin() -> &'static str {
    env!("CARGO_BIN_EXE_splitboard")
}

/// Creates a Command with an isolated config directory for testing.
fn isolated_config_command(args: &[&str], config_dir: &Path) -> Command {
    let mut cmd = Command::new(splitboard_bin());
    cmd.env("SPLITBOARD_CONFIG_DIR", config_dir);
    cmd.args(args);
    cmd
}

#[test]
fn test_config_show_defaults() {
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");

    let output = isolated_config_command(&["config", "show", "--json"], temp_dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "show should succeed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    let result: serde_json::Value =
        serde_json::from_str(&stdout).expect("Should parse JSON output");

    assert_eq!(result["width_percent"], 15.0);
    assert_eq!(result["current_layer"], "default");
}

#[test]
fn test_config_set_and_show_round_trip() {
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");

    let output = isolated_config_command(
        &["config", "set", "--width-percent", "22.5", "--layer", "numbers"],
        temp_dir.path(),
    )
    .output()
    .expect("Failed to execute command");
    assert_eq!(
        output.status.code(),
        Some(0),
        "set should succeed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let output = isolated_config_command(&["config", "show", "--json"], temp_dir.path())
        .output()
        .expect("Failed to execute command");
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    let result: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(result["width_percent"], 22.5);
    assert_eq!(result["current_layer"], "numbers");

    // The config file itself landed in the isolated directory
    assert!(temp_dir.path().join("config.toml").exists());
}

#[test]
fn test_config_set_rejects_out_of_range_width() {
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");

    let output = isolated_config_command(
        &["config", "set", "--width-percent", "55"],
        temp_dir.path(),
    )
    .output()
    .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("allowed range"));
}

#[test]
fn test_config_set_rejects_unknown_layer() {
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");

    let output = isolated_config_command(
        &["config", "set", "--layer", "emoji"],
        temp_dir.path(),
    )
    .output()
    .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unknown layer"));
}

#[test]
fn test_config_set_requires_an_option() {
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");

    let output = isolated_config_command(&["config", "set"], temp_dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
}
