//! End-to-end tests for the `bubblestep log` subcommand

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn bubblestep(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("bubblestep").expect("binary should build");
    cmd.arg("--data-dir").arg(data_dir.path());
    cmd
}

#[test]
fn test_log_prints_full_process() {
    let dir = TempDir::new().unwrap();
    bubblestep(&dir)
        .args(["log", "3, 1, 2"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("=".repeat(80)))
        .stdout(predicate::str::contains("COMPLETE BUBBLE SORT PROCESS"))
        .stdout(predicate::str::contains("STEP 2: Pass 1: SWAPPED! Now: [1, 3, 2]"))
        .stdout(predicate::str::contains("STEP 8: COMPLETE: [1, 2, 3]"));
}

#[test]
fn test_log_rejects_invalid_input() {
    let dir = TempDir::new().unwrap();
    bubblestep(&dir)
        .args(["log", "a, 2"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("'a' not a number"));
}

#[test]
fn test_log_json_format() {
    let dir = TempDir::new().unwrap();
    let output = bubblestep(&dir)
        .args(["log", "2, 1", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let steps: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let steps = steps.as_array().unwrap();
    assert_eq!(steps.len(), 4);
    assert_eq!(steps[2]["kind"], "swap");
}

#[test]
fn test_skip_no_swap_flag() {
    let dir = TempDir::new().unwrap();
    bubblestep(&dir)
        .args(["log", "1, 2, 3", "--skip-no-swap"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No swap").not())
        .stdout(predicate::str::contains("Pass 1: Sorted!"));
}

#[test]
fn test_writes_config_and_log_into_data_dir() {
    let dir = TempDir::new().unwrap();
    bubblestep(&dir).args(["log", "1"]).assert().success();
    assert!(dir.path().join("config.toml").exists());
    assert!(dir.path().join("logs").join("bubblestep.log").exists());
}

#[test]
fn test_config_limit_applies_to_log() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.toml"), "[input]\nmax_values = 2\n").unwrap();
    bubblestep(&dir)
        .args(["log", "3, 2, 1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Too many numbers (3, at most 2)"));
}
