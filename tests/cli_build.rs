//! E2E tests for `relaunch build`
#![cfg(unix)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::tempdir;

fn write_config(dir: &Path, build_script: &str) -> PathBuf {
    let path = dir.join("relaunch.toml");
    let config = format!(
        r#"[build]
scheme = "Demo"
command = ["sh", "-c", "{build_script}"]
"#
    );
    fs::write(&path, config).unwrap();
    path
}

fn relaunch(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_relaunch"))
        .args(args)
        .current_dir(dir)
        .env("XDG_CONFIG_HOME", dir.join("xdg"))
        .env("NO_COLOR", "1")
        .output()
        .expect("Failed to run relaunch")
}

#[test]
fn successful_build_exits_zero() {
    let temp = tempdir().unwrap();
    write_config(temp.path(), "echo compiled");

    let output = relaunch(temp.path(), &["build"]);

    assert!(output.status.success(), "{output:?}");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Building..."), "stdout: {stdout}");
    assert!(stdout.contains("Build succeeded."), "stdout: {stdout}");
}

#[test]
fn failing_build_exits_one_and_shows_output() {
    let temp = tempdir().unwrap();
    write_config(temp.path(), "echo 'error: missing symbol' >&2; exit 65");

    let output = relaunch(temp.path(), &["build"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Build failed:"), "stderr: {stderr}");
    assert!(stderr.contains("(exit code 65)"), "stderr: {stderr}");
    assert!(stderr.contains("error: missing symbol"), "stderr: {stderr}");
}

#[test]
fn build_json_reports_events() {
    let temp = tempdir().unwrap();
    write_config(temp.path(), "exit 2");

    let output = relaunch(temp.path(), &["build", "--json"]);

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let events: Vec<serde_json::Value> = stdout
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(events[0]["event"], "build_started");
    assert_eq!(events[0]["command"], "sh -c exit 2");
    assert_eq!(events[1]["event"], "build_failed");
    assert_eq!(events[1]["exit_code"], 2);
}

#[test]
fn missing_build_tool_is_a_failed_build() {
    let temp = tempdir().unwrap();
    fs::write(
        temp.path().join("relaunch.toml"),
        "[build]\ncommand = [\"relaunch-no-such-build-tool\"]\n",
    )
    .unwrap();

    let output = relaunch(temp.path(), &["build"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("failed to start 'relaunch-no-such-build-tool'"),
        "stderr: {stderr}"
    );
}

#[test]
fn invalid_config_is_reported() {
    let temp = tempdir().unwrap();
    fs::write(temp.path().join("relaunch.toml"), "[build\nscheme = 1").unwrap();

    let output = relaunch(temp.path(), &["build"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid config in"), "stderr: {stderr}");
}

#[test]
fn unknown_config_key_warns_with_suggestion() {
    let temp = tempdir().unwrap();
    fs::write(
        temp.path().join("relaunch.toml"),
        "[build]\nschme = \"Demo\"\ncommand = [\"true\"]\n",
    )
    .unwrap();

    let output = relaunch(temp.path(), &["build"]);

    assert!(output.status.success(), "{output:?}");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unknown config key 'schme'"), "stderr: {stderr}");
    assert!(stderr.contains("Did you mean 'scheme'?"), "stderr: {stderr}");
}
