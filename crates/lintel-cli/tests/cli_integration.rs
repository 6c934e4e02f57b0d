//! End-to-end tests for the lintel binary: input handling, report shape,
//! and exit codes.

use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

fn lintel() -> Command {
    Command::cargo_bin("lintel").unwrap()
}

fn write_list(dir: &TempDir, entries: &str) -> std::path::PathBuf {
    let list = dir.path().join("files.json");
    fs::write(&list, entries).unwrap();
    list
}

fn parse_report(stdout: &[u8]) -> Value {
    serde_json::from_slice(stdout).expect("stdout should be a JSON report")
}

#[test]
fn test_clean_file_reports_success_and_exits_zero() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("ok.js"), "const answer = 42;\n").unwrap();
    let list = write_list(&dir, r#"["ok.js"]"#);

    let output = lintel()
        .arg(&list)
        .arg("--root")
        .arg(dir.path())
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    let report = parse_report(&output.stdout);
    assert_eq!(report["summary"]["files_analyzed"], 1);
    assert_eq!(report["summary"]["succeeded"], 1);
    assert_eq!(report["summary"]["failed"], 0);
    assert_eq!(report["summary"]["total_issues"], 0);
    assert_eq!(report["files"][0]["path"], "ok.js");
    assert_eq!(report["files"][0]["success"], true);
    assert!(report["timestamp"].is_string());
}

#[test]
fn test_inline_json_list_argument_is_accepted() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a.js"), "const total = 12;\n").unwrap();

    let output = lintel()
        .arg(r#"["a.js"]"#)
        .arg("--root")
        .arg(dir.path())
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    let report = parse_report(&output.stdout);
    assert_eq!(report["summary"]["files_analyzed"], 1);
    assert_eq!(report["summary"]["succeeded"], 1);
}

#[test]
fn test_malformed_inline_list_exits_two() {
    let dir = TempDir::new().unwrap();

    let output = lintel()
        .arg(r#"["unclosed.js""#)
        .arg("--root")
        .arg(dir.path())
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("JSON array"), "stderr was: {stderr}");
}

#[test]
fn test_rule_violations_keep_exit_zero() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("app.js"), "var greeting = \"hello world\";\n").unwrap();
    let list = write_list(&dir, r#"["app.js"]"#);

    let output = lintel()
        .arg(&list)
        .arg("--root")
        .arg(dir.path())
        .output()
        .unwrap();

    // Issues are findings, not failures.
    assert_eq!(output.status.code(), Some(0));
    let report = parse_report(&output.stdout);
    assert_eq!(report["summary"]["total_issues"], 1);
    assert_eq!(report["issues"][0]["id"], "app.js:1:no-var:0");
    assert_eq!(report["issues"][0]["rule"], "no-var");
    assert_eq!(report["issues"][0]["severity"], "warning");
}

#[test]
fn test_failed_file_exits_one_but_still_reports() {
    let dir = TempDir::new().unwrap();
    let list = write_list(&dir, r#"["missing.js"]"#);

    let output = lintel()
        .arg(&list)
        .arg("--root")
        .arg(dir.path())
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let report = parse_report(&output.stdout);
    assert_eq!(report["summary"]["failed"], 1);
    assert_eq!(report["files"][0]["success"], false);
    assert!(report["files"][0]["error"].is_string());
}

#[test]
fn test_malformed_input_exits_two() {
    let dir = TempDir::new().unwrap();
    let list = write_list(&dir, r#"{"files": ["a.js"]}"#);

    let output = lintel()
        .arg(&list)
        .arg("--root")
        .arg(dir.path())
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("JSON array"), "stderr was: {stderr}");
}

#[test]
fn test_list_is_read_from_stdin_by_default() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("tiny.py"), "total = 1 + 2\n").unwrap();

    let output = lintel()
        .arg("--root")
        .arg(dir.path())
        .write_stdin(r#"["tiny.py"]"#)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    let report = parse_report(&output.stdout);
    assert_eq!(report["summary"]["files_analyzed"], 1);
    assert_eq!(report["files"][0]["language"], "python");
}

#[test]
fn test_empty_list_emits_empty_report_and_exits_zero() {
    let dir = TempDir::new().unwrap();

    let output = lintel()
        .arg("--root")
        .arg(dir.path())
        .write_stdin("[]")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    let report = parse_report(&output.stdout);
    assert_eq!(report["summary"]["files_analyzed"], 0);
    assert_eq!(report["files"], Value::Array(vec![]));
    assert_eq!(report["issues"], Value::Array(vec![]));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("no files to analyze"), "stderr was: {stderr}");
}

#[test]
fn test_human_output_renders_a_summary() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("app.js"), "var greeting = \"hello world\";\n").unwrap();
    let list = write_list(&dir, r#"["app.js"]"#);

    let output = lintel()
        .arg(&list)
        .arg("--root")
        .arg(dir.path())
        .arg("--output")
        .arg("human")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Lintel Analysis Results"));
    assert!(stdout.contains("no-var"));
    // Per-file headers name the resolved language.
    assert!(stdout.contains("(JavaScript, 1):"), "stdout was: {stdout}");
}

#[test]
fn test_config_in_root_is_discovered() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("lintel.toml"), "[limits]\nmax_line_length = 20\n").unwrap();
    fs::write(
        dir.path().join("long.js"),
        "const reallyLongName = \"stretch this line\";\n",
    )
    .unwrap();
    let list = write_list(&dir, r#"["long.js"]"#);

    let output = lintel()
        .arg(&list)
        .arg("--root")
        .arg(dir.path())
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    let report = parse_report(&output.stdout);
    let rules: Vec<&str> = report["issues"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|i| i["rule"].as_str())
        .collect();
    assert!(rules.contains(&"line-length"), "rules were: {rules:?}");
}

#[test]
fn test_explicit_missing_config_exits_two() {
    let dir = TempDir::new().unwrap();
    let list = write_list(&dir, "[]");

    let output = lintel()
        .arg(&list)
        .arg("--root")
        .arg(dir.path())
        .arg("--config")
        .arg(dir.path().join("nope.toml"))
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to load config"), "stderr was: {stderr}");
}

#[test]
fn test_mixed_run_keeps_order_and_flattens_issues() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a.js"), "var first = \"one two three\";\n").unwrap();
    fs::write(dir.path().join("b.py"), "print(\"direct output\")\n").unwrap();
    let list = write_list(&dir, r#"["a.js", "gone.go", "b.py"]"#);

    let output = lintel()
        .arg(&list)
        .arg("--root")
        .arg(dir.path())
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let report = parse_report(&output.stdout);

    let paths: Vec<&str> = report["files"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|f| f["path"].as_str())
        .collect();
    assert_eq!(paths, vec!["a.js", "gone.go", "b.py"]);

    let ids: Vec<&str> = report["issues"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|i| i["id"].as_str())
        .collect();
    assert_eq!(ids, vec!["a.js:1:no-var:0", "b.py:1:no-print:0"]);
}
