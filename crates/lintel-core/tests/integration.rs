//! End-to-end tests for the analysis engine against real files on disk.

use lintel_core::{Engine, Language, RunnerOptions, Severity, Thresholds};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tempfile::TempDir;

fn engine_in(dir: &TempDir) -> Engine {
    Engine::new(Thresholds::default()).with_root(dir.path())
}

#[tokio::test]
async fn test_messy_javascript_file_reports_expected_rules() {
    let dir = TempDir::new().unwrap();
    let source = r#"var apiKey = "12345";
function Process_Data(input) {
  if (input == null) {
    console.log("empty");
  }
  return input;
}
"#;
    fs::write(dir.path().join("app.js"), source).unwrap();

    let result = engine_in(&dir).analyze_file(Path::new("app.js")).await;

    assert!(result.success, "unexpected failure: {:?}", result.error);
    assert_eq!(result.language, Some(Language::JavaScript));

    let rules: Vec<&str> = result.issues.iter().map(|i| i.rule.as_str()).collect();
    assert_eq!(
        rules,
        vec![
            "no-var",
            "naming-convention-function",
            "prefer-strict-equality",
            "no-console",
        ]
    );
    let lines: Vec<u32> = result.issues.iter().map(|i| i.line).collect();
    assert_eq!(lines, vec![1, 2, 3, 4]);

    let stats = result.stats.unwrap();
    assert_eq!(stats.size, source.len() as u64);
    assert_eq!(stats.line_count, 8);

    let metrics = result.metrics.unwrap();
    assert_eq!(metrics.analyzers_run, 5);
    assert_eq!(metrics.content_length, source.len());
}

#[tokio::test]
async fn test_python_file_reports_bare_except_and_print() {
    let dir = TempDir::new().unwrap();
    let source = r#"def process(data):
    try:
        value = data[0]
    except:
        print("oops")
        value = None
    return value
"#;
    fs::write(dir.path().join("worker.py"), source).unwrap();

    let result = engine_in(&dir).analyze_file(Path::new("worker.py")).await;

    assert!(result.success);
    assert_eq!(result.language, Some(Language::Python));
    assert_eq!(result.issues.len(), 2);
    assert_eq!(result.issues[0].rule, "no-bare-except");
    assert_eq!(result.issues[0].line, 4);
    assert_eq!(result.issues[0].severity, Severity::Warning);
    assert_eq!(result.issues[1].rule, "no-print");
    assert_eq!(result.issues[1].line, 5);
    assert_eq!(result.issues[1].severity, Severity::Info);
}

#[tokio::test]
async fn test_trivial_file_succeeds_without_running_analyzers() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("tiny.js"), "ok\n").unwrap();

    let result = engine_in(&dir).analyze_file(Path::new("tiny.js")).await;

    assert!(result.success);
    assert!(result.issues.is_empty());
    assert_eq!(result.language, Some(Language::JavaScript));
    assert_eq!(result.metrics.unwrap().analyzers_run, 0);
    assert_eq!(result.stats.unwrap().line_count, 2);
}

#[tokio::test]
async fn test_file_over_the_size_limit_fails() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("big.js"), "const x = 1;\n").unwrap();

    let thresholds = Thresholds {
        max_file_size: 10,
        ..Thresholds::default()
    };
    let engine = Engine::new(thresholds).with_root(dir.path());
    let result = engine.analyze_file(Path::new("big.js")).await;

    assert!(!result.success);
    assert!(result.error.as_deref().is_some_and(|e| e.contains("too large")));
    assert!(result.issues.is_empty());
}

#[tokio::test]
async fn test_missing_file_is_reported_as_not_accessible() {
    let dir = TempDir::new().unwrap();

    let result = engine_in(&dir).analyze_file(Path::new("missing.js")).await;

    assert!(!result.success);
    assert!(result.error.as_deref().is_some_and(|e| e.contains("Cannot access")));
}

#[tokio::test]
async fn test_empty_file_fails() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("blank.go"), "").unwrap();

    let result = engine_in(&dir).analyze_file(Path::new("blank.go")).await;

    assert!(!result.success);
    assert!(result.error.as_deref().is_some_and(|e| e.contains("empty")));
}

#[tokio::test]
async fn test_invalid_utf8_fails() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("bin.js"), [0xff_u8, 0xfe, 0x00, 0x01]).unwrap();

    let result = engine_in(&dir).analyze_file(Path::new("bin.js")).await;

    assert!(!result.success);
    assert!(result.error.as_deref().is_some_and(|e| e.contains("UTF-8")));
}

#[tokio::test]
async fn test_run_preserves_input_order_and_counts() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("good.js"), "let total = 10;\n").unwrap();
    fs::write(dir.path().join("also.ts"), "let n: any = 1;\n").unwrap();

    let paths = vec![
        PathBuf::from("good.js"),
        PathBuf::from("missing.py"),
        PathBuf::from("also.ts"),
    ];
    let run = engine_in(&dir).analyze_files(&paths).await;

    let reported: Vec<&Path> = run.files.iter().map(|f| f.path.as_path()).collect();
    assert_eq!(
        reported,
        vec![
            Path::new("good.js"),
            Path::new("missing.py"),
            Path::new("also.ts"),
        ]
    );

    assert_eq!(run.summary.files_analyzed, 3);
    assert_eq!(run.summary.succeeded, 2);
    assert_eq!(run.summary.failed, 1);
    assert!(run.has_failures());

    // also.ts carries both a short variable name and an `any` annotation.
    let ts = &run.files[2];
    let rules: Vec<&str> = ts.issues.iter().map(|i| i.rule.as_str()).collect();
    assert_eq!(rules, vec!["naming-short-variable", "no-any-type"]);
    assert_eq!(run.summary.total_issues, 2);
}

#[tokio::test]
async fn test_repeat_runs_report_identical_issues() {
    let dir = TempDir::new().unwrap();
    let source = "var a1 = 1;\nvar b2 = 2;\nconsole.log(a1 == b2);\n";
    fs::write(dir.path().join("repeat.js"), source).unwrap();
    let engine = engine_in(&dir);

    let first = engine.analyze_file(Path::new("repeat.js")).await;
    let second = engine.analyze_file(Path::new("repeat.js")).await;

    assert!(first.success && second.success);
    assert_eq!(first.issues, second.issues);
    assert!(!first.issues.is_empty());
}

#[tokio::test]
async fn test_zero_time_budget_times_out() {
    let dir = TempDir::new().unwrap();
    // Large enough that reading and analyzing cannot complete inside the
    // first poll of the timed future, so the zero budget always elapses.
    let mut source = String::with_capacity(256 * 1024);
    for i in 0..4000 {
        source.push_str(&format!("fn generated_{i}() {{ let value_{i} = {i}; }}\n"));
    }
    fs::write(dir.path().join("slow.rs"), source).unwrap();

    let runner = RunnerOptions {
        workers: 2,
        file_timeout: Duration::ZERO,
    };
    let engine = Engine::with_runner(Thresholds::default(), runner).with_root(dir.path());
    let run = engine.analyze_files(&[PathBuf::from("slow.rs")]).await;

    assert_eq!(run.summary.failed, 1);
    let error = run.files[0].error.as_deref().unwrap();
    assert!(error.contains("timed out"), "got: {error}");
}
