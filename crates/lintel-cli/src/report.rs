//! Final report assembly.
//!
//! Wraps the engine's run record with a timestamp and a flat issue list
//! whose identifiers are deterministic. Two runs over the same content
//! produce byte-identical issue ids, so downstream consumers can diff or
//! deduplicate reports across runs.

use chrono::{DateTime, Utc};
use lintel_core::{AnalysisRun, FileAnalysisResult, Issue, RunSummary};
use serde::Serialize;
use std::collections::HashMap;
use std::path::PathBuf;

/// An issue enriched with its stable identifier.
#[derive(Debug, Clone, Serialize)]
pub struct ReportIssue {
    /// `<file>:<line>:<rule>:<occurrence>`. The occurrence counter
    /// disambiguates repeats of the same rule on the same line.
    pub id: String,

    #[serde(flatten)]
    pub issue: Issue,
}

/// Top-level output document.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// When the report was produced.
    pub timestamp: DateTime<Utc>,

    /// Aggregated counters for the run.
    pub summary: RunSummary,

    /// Per-file outcomes, in input order.
    pub files: Vec<FileAnalysisResult>,

    /// Every issue across all files, flattened, with stable ids.
    pub issues: Vec<ReportIssue>,
}

impl Report {
    /// Build the report from a finished run.
    pub fn from_run(run: AnalysisRun) -> Self {
        let issues = collect_issues(&run.files);
        Self {
            timestamp: Utc::now(),
            summary: run.summary,
            files: run.files,
            issues,
        }
    }
}

fn collect_issues(files: &[FileAnalysisResult]) -> Vec<ReportIssue> {
    let mut occurrences: HashMap<(PathBuf, u32, String), u32> = HashMap::new();
    let mut collected = Vec::new();

    for file in files {
        for issue in &file.issues {
            let key = (issue.file.clone(), issue.line, issue.rule.clone());
            let occurrence = occurrences.entry(key).or_insert(0);
            let id = format!(
                "{}:{}:{}:{}",
                issue.file.display(),
                issue.line,
                issue.rule,
                occurrence
            );
            *occurrence += 1;
            collected.push(ReportIssue {
                id,
                issue: issue.clone(),
            });
        }
    }

    collected
}
