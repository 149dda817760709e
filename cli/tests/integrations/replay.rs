use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_cli_replay_events_file() {
    let temp_dir = TempDir::new().unwrap();
    let events_file = temp_dir.path().join("events.json");

    fs::write(
        &events_file,
        r#"[
    {"type": "add-digit", "payload": {"digit": "1"}},
    {"type": "add-digit", "payload": {"digit": "0"}},
    {"type": "choose", "payload": {"symbol": "/"}},
    {"type": "add-digit", "payload": {"digit": "4"}},
    {"type": "evaluate"}
]"#,
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("calc").unwrap();
    cmd.arg("replay").arg(&events_file).arg("--raw");

    cmd.assert().success().stdout("2.5\n");
}

#[test]
fn test_cli_replay_from_stdin() {
    let mut cmd = Command::cargo_bin("calc").unwrap();
    cmd.args(["replay", "-", "--raw"]).write_stdin(
        r#"[{"type": "add-digit", "payload": {"digit": "5"}}, {"type": "delete-digit"}, {"type": "delete-digit"}]"#,
    );

    cmd.assert().success().stdout("\n");
}

#[test]
fn test_cli_replay_invalid_event() {
    let temp_dir = TempDir::new().unwrap();
    let events_file = temp_dir.path().join("events.json");
    fs::write(&events_file, r#"[{"type": "add-digit", "payload": {"digit": "x"}}]"#).unwrap();

    let mut cmd = Command::cargo_bin("calc").unwrap();
    cmd.arg("replay").arg(&events_file);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid events"));
}

#[test]
fn test_cli_replay_missing_file() {
    let temp_dir = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("calc").unwrap();
    cmd.arg("replay").arg(temp_dir.path().join("missing.json"));

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read events file"));
}
