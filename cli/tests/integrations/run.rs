use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_cli_run_chained_expression() {
    let mut cmd = Command::cargo_bin("calc").unwrap();
    cmd.arg("run").arg("12+3-4=");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("11"));
}

#[test]
fn test_cli_run_raw_output() {
    let mut cmd = Command::cargo_bin("calc").unwrap();
    cmd.args(["run", "--raw", "10/4="]);

    cmd.assert().success().stdout("2.5\n");
}

#[test]
fn test_cli_run_keys_across_arguments() {
    let mut cmd = Command::cargo_bin("calc").unwrap();
    cmd.args(["run", "-r", "9", "-", "4", "="]);

    cmd.assert().success().stdout("5\n");
}

#[test]
fn test_cli_run_left_to_right() {
    let mut cmd = Command::cargo_bin("calc").unwrap();
    cmd.args(["run", "--raw", "2+3x4="]);

    cmd.assert().success().stdout("20\n");
}

#[test]
fn test_cli_run_pending_operation_display() {
    let mut cmd = Command::cargo_bin("calc").unwrap();
    cmd.args(["run", "12+"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("12 +"));
}

#[test]
fn test_cli_run_json_output() {
    let mut cmd = Command::cargo_bin("calc").unwrap();
    cmd.args(["run", "--json", "7-"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(r#""currentOperand": """#))
        .stdout(predicate::str::contains(r#""previousOperand": "7""#))
        .stdout(predicate::str::contains(r#""operation": "-""#));
}

#[test]
fn test_cli_run_trace_output() {
    let mut cmd = Command::cargo_bin("calc").unwrap();
    cmd.args(["run", "--trace", "7x6="]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("add-digit(7)"))
        .stdout(predicate::str::contains("choose-operation(*)"))
        .stdout(predicate::str::contains("42"));
}

#[test]
fn test_cli_run_division_by_zero() {
    let mut cmd = Command::cargo_bin("calc").unwrap();
    cmd.args(["run", "--raw", "1/0="]);

    cmd.assert().success().stdout("Infinity\n");
}

#[test]
fn test_cli_run_stray_keys_are_ignored() {
    let mut cmd = Command::cargo_bin("calc").unwrap();
    cmd.args(["run", "--raw", "+=d5..5"]);

    cmd.assert().success().stdout("5.5\n");
}

#[test]
fn test_cli_run_unknown_key() {
    let mut cmd = Command::cargo_bin("calc").unwrap();
    cmd.args(["run", "1+q"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Unknown key 'q'"));
}

#[test]
fn test_cli_run_requires_keys() {
    let mut cmd = Command::cargo_bin("calc").unwrap();
    cmd.arg("run");

    cmd.assert().failure();
}

#[test]
fn test_cli_run_json_conflicts_with_raw() {
    let mut cmd = Command::cargo_bin("calc").unwrap();
    cmd.args(["run", "--json", "--raw", "1"]);

    cmd.assert().failure();
}
