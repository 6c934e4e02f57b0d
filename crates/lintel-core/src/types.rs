//! Core data types for lintel analysis results.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::Error;
use crate::language::Language;

/// Severity of a detected issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational, no action required.
    Info,
    /// Should be fixed, does not block.
    Warning,
    /// Must be fixed.
    Error,
}

impl Severity {
    /// Returns the display name for this severity
    pub fn display_name(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

/// One detected rule violation in a source file.
///
/// Issues are immutable once produced. Within a file they are ordered by
/// ascending line number after the final merge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    /// File the issue was found in, as given in the input list.
    pub file: PathBuf,

    /// 1-based line number, always within `[1, line_count]` of the file.
    pub line: u32,

    /// 1-based column number. Computed against normalized content for most
    /// rules, so it is approximate where stripping shortened the line.
    pub column: u32,

    /// How serious the finding is.
    pub severity: Severity,

    /// Stable rule identifier, e.g. `no-var` or `function-length`.
    pub rule: String,

    /// Human-readable description of the violation.
    pub message: String,

    /// Suggested fix, when the rule can offer one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl Issue {
    /// Create an issue without a suggestion.
    pub fn new(
        file: &Path,
        line: u32,
        column: u32,
        severity: Severity,
        rule: &str,
        message: impl Into<String>,
    ) -> Self {
        Self {
            file: file.to_path_buf(),
            line,
            column,
            severity,
            rule: rule.to_string(),
            message: message.into(),
            suggestion: None,
        }
    }

    /// Attach a suggested fix.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

/// Filesystem facts about an analyzed file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileStats {
    /// File size in bytes.
    pub size: u64,

    /// Number of lines (newline count plus one).
    pub line_count: u32,

    /// Last modification time, when the platform reports one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified: Option<DateTime<Utc>>,
}

/// Lightweight metrics about one file's analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisMetrics {
    /// Length of the original content in bytes.
    pub content_length: usize,

    /// Length of the normalized content in bytes.
    pub cleaned_length: usize,

    /// Number of lines in the file.
    pub line_count: u32,

    /// How many analyzers ran against the file.
    pub analyzers_run: usize,

    /// Wall-clock time spent on this file.
    pub duration_ms: u64,
}

/// Outcome of analyzing a single file. Terminal: produced once, never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileAnalysisResult {
    /// File path as given in the input list.
    pub path: PathBuf,

    /// Whether analysis completed. A failed file always has empty `issues`
    /// and a non-empty `error`.
    pub success: bool,

    /// Resolved language, when the extension was recognized.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<Language>,

    /// Issues found, sorted by ascending line number.
    pub issues: Vec<Issue>,

    /// Filesystem facts, present when the file was read.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<FileStats>,

    /// Analysis metrics, present on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<AnalysisMetrics>,

    /// Human-readable failure description, present when `success` is false.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FileAnalysisResult {
    /// Successful outcome with sorted issues.
    pub fn success(
        path: PathBuf,
        language: Language,
        issues: Vec<Issue>,
        stats: FileStats,
        metrics: AnalysisMetrics,
    ) -> Self {
        Self {
            path,
            success: true,
            language: Some(language),
            issues,
            stats: Some(stats),
            metrics: Some(metrics),
            error: None,
        }
    }

    /// Failed outcome carrying the rendered error.
    pub fn failure(path: &Path, error: &Error) -> Self {
        Self {
            path: path.to_path_buf(),
            success: false,
            language: Language::from_path(path),
            issues: Vec::new(),
            stats: None,
            metrics: None,
            error: Some(error.to_string()),
        }
    }
}

/// Summary counters for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Total number of files in the input list.
    pub files_analyzed: usize,

    /// Files that completed analysis.
    pub succeeded: usize,

    /// Files that failed a gate or errored during analysis.
    pub failed: usize,

    /// Issues across all successful files.
    pub total_issues: usize,

    /// Wall-clock duration of the whole run.
    pub duration_ms: u64,
}

/// All per-file results of one invocation plus summary counters.
///
/// Created when the engine starts a run and finalized once every file has
/// been processed; never persisted beyond process output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRun {
    /// Per-file outcomes, in input order.
    pub files: Vec<FileAnalysisResult>,

    /// Aggregated counters.
    pub summary: RunSummary,
}

impl AnalysisRun {
    /// Build a run record from per-file results, computing the summary.
    pub fn finalize(files: Vec<FileAnalysisResult>, duration_ms: u64) -> Self {
        let succeeded = files.iter().filter(|f| f.success).count();
        let total_issues = files.iter().map(|f| f.issues.len()).sum();
        let summary = RunSummary {
            files_analyzed: files.len(),
            succeeded,
            failed: files.len() - succeeded,
            total_issues,
            duration_ms,
        };
        Self { files, summary }
    }

    /// Whether any file failed analysis.
    pub fn has_failures(&self) -> bool {
        self.summary.failed > 0
    }
}
