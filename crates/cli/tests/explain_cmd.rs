//! CLI tests for the `textops explain` subcommand.

use std::process::Command;

use assert_cmd::cargo;

fn textops_cmd() -> Command {
    Command::new(cargo::cargo_bin!("textops"))
}

#[test]
fn explain_known_code() {
    let output = textops_cmd()
        .args(["explain", "TXT1001"])
        .output()
        .expect("run explain");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("TXT1001: "), "got: {stdout}");
    assert!(stdout.contains("comments"), "got: {stdout}");
}

#[test]
fn explain_unknown_code_fails() {
    let output = textops_cmd()
        .args(["explain", "TXT9999"])
        .output()
        .expect("run explain on unknown code");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown diagnostic code"), "got: {stderr}");
}
