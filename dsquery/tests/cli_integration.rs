//! Integration tests for dsquery CLI

use std::fs;
use std::path::Path;
use std::process::Command;

use tempfile::tempdir;

const DATASTORE: &str = "\"STB\"|\"TITLE\"|\"PROVIDER\"|\"DATE\"|\"REV\"|\"VIEW_TIME\"
\"stb1\"|\"the matrix\"|\"warner bros\"|\"2014-04-01\"|\"4.00\"|\"1:30\"
\"stb1\"|\"unbreakable\"|\"buena vista\"|\"2014-04-03\"|\"6.00\"|\"2:05\"
\"stb2\"|\"the hobbit\"|\"warner bros\"|\"2014-04-02\"|\"8.00\"|\"2:45\"
\"stb3\"|\"the matrix\"|\"warner bros\"|\"2014-04-02\"|\"4.00\"|\"1:05\"
";

fn run_dsquery(dir: &Path, args: &[&str]) -> (String, String, bool) {
    let output = Command::new(env!("CARGO_BIN_EXE_dsquery"))
        .args(args)
        .current_dir(dir)
        .env_remove("DSQUERY_OUTPUT_DIR")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();

    (stdout, stderr, success)
}

fn datastore_dir() -> tempfile::TempDir {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("output")).unwrap();
    fs::write(dir.path().join("output/datastore.csv"), DATASTORE).unwrap();
    dir
}

#[test]
fn test_cli_help() {
    let dir = tempdir().unwrap();
    let (stdout, _, success) = run_dsquery(dir.path(), &["--help"]);

    assert!(success);
    assert!(stdout.contains("dsquery"));
    assert!(stdout.contains("--select"));
    assert!(stdout.contains("--order"));
    assert!(stdout.contains("--filter"));
    assert!(stdout.contains("--output"));
}

#[test]
fn test_cli_version() {
    let dir = tempdir().unwrap();
    let (stdout, _, success) = run_dsquery(dir.path(), &["--version"]);

    assert!(success);
    assert!(stdout.contains("dsquery"));
}

#[test]
fn test_all_rows_from_default_directory() {
    let dir = datastore_dir();
    let (stdout, _, success) = run_dsquery(dir.path(), &[]);

    assert!(success);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(
        lines[0],
        "stb1, the matrix, warner bros, 2014-04-01, 4.00, 1:30"
    );
}

#[test]
fn test_select_order_filter() {
    let dir = datastore_dir();
    let (stdout, _, success) = run_dsquery(
        dir.path(),
        &["-s", "TITLE,PROVIDER,REV", "-o", "REV", "-f", "PROVIDER=warner bros"],
    );

    assert!(success);
    assert_eq!(
        stdout,
        "the matrix, warner bros, 4.00\n\
         the matrix, warner bros, 4.00\n\
         the hobbit, warner bros, 8.00\n"
    );
}

#[test]
fn test_root_flag() {
    let dir = datastore_dir();
    let elsewhere = tempdir().unwrap();
    let root = dir.path().join("output");
    let (stdout, _, success) = run_dsquery(
        elsewhere.path(),
        &["--root", root.to_str().unwrap(), "-s", "STB", "-f", "DATE=2014-04-03"],
    );

    assert!(success);
    assert_eq!(stdout, "stb1\n");
}

#[test]
fn test_missing_directory_prints_nothing() {
    let dir = tempdir().unwrap();
    let (stdout, _, success) = run_dsquery(dir.path(), &["-s", "TITLE"]);

    assert!(success);
    assert!(stdout.is_empty());
}

#[test]
fn test_json_output() {
    let dir = datastore_dir();
    let (stdout, _, success) =
        run_dsquery(dir.path(), &["-s", "TITLE,REV", "-o", "REV", "--output", "json"]);

    assert!(success);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("Invalid JSON output");
    let rows = parsed.as_array().unwrap();
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[0]["TITLE"], "the matrix");
    assert_eq!(rows[3]["REV"], "8.00");
}

#[test]
fn test_include_filter() {
    let dir = datastore_dir();
    fs::write(dir.path().join("output/notes.txt"), "STB\nnot-a-row\n").unwrap();

    let (stdout, _, success) = run_dsquery(dir.path(), &["-s", "STB", "--include", "*.csv"]);
    assert!(success);
    assert!(!stdout.contains("not-a-row"));
    assert_eq!(stdout.lines().count(), 4);
}

#[test]
fn test_repeated_select_column() {
    let dir = datastore_dir();
    let (stdout, _, success) =
        run_dsquery(dir.path(), &["-s", "STB,REV,STB", "-f", "DATE=2014-04-03"]);

    assert!(success);
    assert_eq!(stdout, "stb1, 6.00, stb1\n");
}

#[test]
fn test_invalid_filter() {
    let dir = datastore_dir();
    let (_, stderr, success) = run_dsquery(dir.path(), &["-f", "DATE"]);

    assert!(!success);
    assert!(stderr.contains("Error:"));
    assert!(stderr.contains("COLUMN=VALUE"));
}
