use assert_cmd::cargo::cargo_bin_cmd;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Output;
use tempfile::TempDir;

fn write_input(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("numbers.txt");
    fs::write(&path, contents).expect("write input");
    path
}

fn run_raw(dir: &Path, args: &[&str]) -> Output {
    cargo_bin_cmd!("nanpsort")
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("run command")
}

fn run_cmd(dir: &Path, args: &[&str]) -> String {
    let output = run_raw(dir, args);
    assert!(output.status.success(), "command failed: {:?}", output);
    String::from_utf8(output.stdout).expect("utf8")
}

#[test]
fn cli_prints_sorted_valid_numbers() {
    let temp = TempDir::new().expect("temp dir");
    let input = write_input(
        temp.path(),
        "Bob\t(312) 555-0000\nAmy\t1-800-FLOWERS\nCid\t122-1111\nDee\t+1 202.555.1234\n",
    );

    let stdout = run_cmd(temp.path(), &[input.to_str().expect("path")]);
    assert_eq!(
        stdout,
        "(202) 555-1234\tDee\n(312) 555-0000\tBob\n(800) 356-9377\tAmy\n"
    );
}

#[test]
fn cli_emits_json_when_asked() {
    let temp = TempDir::new().expect("temp dir");
    let input = write_input(temp.path(), "Bob\t3125550000\nAmy\t2025551234\n");

    let stdout = run_cmd(temp.path(), &["--json", input.to_str().expect("path")]);
    let value: Value = serde_json::from_str(&stdout).expect("parse json");
    let items = value.as_array().expect("array");
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["name"], "Amy");
    assert_eq!(items[0]["number"], "2025551234");
    assert_eq!(items[1]["display"], "(312) 555-0000");
}

#[test]
fn cli_fails_on_malformed_line() {
    let temp = TempDir::new().expect("temp dir");
    let input = write_input(temp.path(), "Amy\t2025551234\nno tab here\n");

    let output = run_raw(temp.path(), &[input.to_str().expect("path")]);
    assert_eq!(output.status.code(), Some(3));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).expect("utf8");
    assert!(stderr.contains("error:"), "{stderr}");
}

#[test]
fn cli_skips_malformed_line_with_config() {
    let temp = TempDir::new().expect("temp dir");
    let input = write_input(temp.path(), "Amy\t2025551234\nno tab here\n");
    let config = temp.path().join("config.toml");
    fs::write(&config, "malformed_lines = \"skip\"\n").expect("write config");

    let stdout = run_cmd(
        temp.path(),
        &[
            "--config",
            config.to_str().expect("config path"),
            input.to_str().expect("path"),
        ],
    );
    assert_eq!(stdout, "(202) 555-1234\tAmy\n");
}

#[test]
fn cli_reports_missing_input_file() {
    let temp = TempDir::new().expect("temp dir");
    let missing = temp.path().join("missing.txt");

    let output = run_raw(temp.path(), &[missing.to_str().expect("path")]);
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8(output.stderr).expect("utf8");
    assert!(stderr.contains("not found"), "{stderr}");
}

#[test]
fn cli_reports_missing_explicit_config() {
    let temp = TempDir::new().expect("temp dir");
    let input = write_input(temp.path(), "Amy\t2025551234\n");
    let config = temp.path().join("nope.toml");

    let output = run_raw(
        temp.path(),
        &[
            "--config",
            config.to_str().expect("config path"),
            input.to_str().expect("path"),
        ],
    );
    assert_eq!(output.status.code(), Some(3));
}

#[test]
fn cli_needs_only_the_input_path() {
    let temp = TempDir::new().expect("temp dir");
    write_input(temp.path(), "Bob\t3125550000\nAmy\t2025551234\n");

    let stdout = run_cmd(temp.path(), &["numbers.txt"]);
    assert_eq!(stdout, "(202) 555-1234\tAmy\n(312) 555-0000\tBob\n");

    let output = run_raw(temp.path(), &[]);
    assert!(!output.status.success());
}

#[test]
fn cli_verbose_prints_error_causes() {
    let temp = TempDir::new().expect("temp dir");
    let input = write_input(temp.path(), "no tab here\n");

    let output = run_raw(temp.path(), &["-v", input.to_str().expect("path")]);
    assert_eq!(output.status.code(), Some(3));
    let stderr = String::from_utf8(output.stderr).expect("utf8");
    assert!(stderr.contains("caused by: malformed record on line 1"), "{stderr}");
}
