//! CLI tests for the cleanup subcommands: trim, empty-lines, whitespace,
//! number.

use std::fs;
use std::process::Command;

use assert_cmd::cargo;

fn textops_cmd() -> Command {
    Command::new(cargo::cargo_bin!("textops"))
}

fn write_temp(content: &str) -> (tempfile::TempDir, String) {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("selection.txt");
    fs::write(&path, content).expect("write temp input");
    (dir, path.to_string_lossy().to_string())
}

fn run_pretty(args: &[&str]) -> String {
    let output = textops_cmd()
        .args(args)
        .arg("--output")
        .arg("pretty")
        .output()
        .expect("run textops");
    assert!(
        output.status.success(),
        "expected success, stderr={}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn trim_defaults_to_both() {
    let (_dir, path) = write_temp("  a  \n\tb\t\n");
    assert_eq!(run_pretty(&["trim", &path]), "a\nb\n");
}

#[test]
fn trim_leading_only() {
    let (_dir, path) = write_temp("  a  \n");
    assert_eq!(run_pretty(&["trim", &path, "--how", "leading"]), "a  \n");
}

#[test]
fn empty_lines_remove_all() {
    let (_dir, path) = write_temp("a\n\n\nb\n");
    assert_eq!(run_pretty(&["empty-lines", &path]), "a\nb\n");
}

#[test]
fn empty_lines_normalize() {
    let (_dir, path) = write_temp("a\n\n\n\nb\n");
    assert_eq!(
        run_pretty(&["empty-lines", &path, "--how", "normalize"]),
        "a\n\nb\n"
    );
}

#[test]
fn whitespace_keep_eol() {
    let (_dir, path) = write_temp("a b\tc\nd\n");
    assert_eq!(
        run_pretty(&["whitespace", &path, "--how", "keep-eol"]),
        "abc\nd\n"
    );
}

#[test]
fn number_prefixes_lines() {
    let (_dir, path) = write_temp("a\nb\nc\n");
    assert_eq!(run_pretty(&["number", &path]), "1 a\n2 b\n3 c\n");
}

#[test]
fn json_output_mode_wraps_text() {
    let (_dir, path) = write_temp("  a\n");
    let output = textops_cmd()
        .args(["trim", &path, "--output", "json"])
        .output()
        .expect("run trim json mode");
    assert!(output.status.success());
    let v: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("json envelope");
    assert_eq!(v["text"], "a\n");
}

#[test]
fn missing_input_file_fails_with_context() {
    let output = textops_cmd()
        .args(["trim", "/no/such/file"])
        .output()
        .expect("run trim on missing file");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("/no/such/file"), "got: {stderr}");
}
