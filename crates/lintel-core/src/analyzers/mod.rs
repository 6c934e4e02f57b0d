//! Rule analyzers.
//!
//! Each analyzer focuses on one concern:
//! - `naming`: identifier conventions and too-short names
//! - `function_length`: overlong function bodies
//! - `line_length`: overlong lines
//! - `duplication`: repeated blocks of consecutive lines
//! - `language_rules`: per-language anti-patterns (`var`, bare `except`, ...)
//!
//! Every analyzer is a pure function of one [`FileContext`]: no shared
//! mutable state, safe to run concurrently against the same content. Each
//! returns issues in its own discovery order; the engine flattens the
//! combined set and sorts it by line number.

pub mod duplication;
pub mod function_length;
pub mod language_rules;
pub mod line_length;
pub mod naming;

use std::path::PathBuf;

use crate::language::Language;
use crate::thresholds::Thresholds;
use crate::types::Issue;

/// Immutable per-file input shared by every analyzer.
#[derive(Debug, Clone)]
pub struct FileContext {
    /// File path as given in the input list.
    pub path: PathBuf,

    /// Language resolved from the extension.
    pub language: Language,

    /// Original content, untouched.
    pub source: String,

    /// Normalized content: comments stripped, literals emptied, one newline
    /// per original newline.
    pub cleaned: String,

    /// Limits in effect for this run.
    pub thresholds: Thresholds,
}

impl FileContext {
    /// Build a context, normalizing `source` for `language`.
    pub fn new(
        path: PathBuf,
        language: Language,
        source: String,
        thresholds: Thresholds,
    ) -> Self {
        let cleaned = crate::normalize::strip(&source, language);
        Self {
            path,
            language,
            source,
            cleaned,
            thresholds,
        }
    }
}

/// Signature shared by all analyzers.
pub type AnalyzerFn = fn(&FileContext) -> Vec<Issue>;

/// All analyzers with their names, in a fixed order.
pub fn all() -> [(&'static str, AnalyzerFn); 5] {
    [
        ("naming", naming::analyze),
        ("function-length", function_length::analyze),
        ("line-length", line_length::analyze),
        ("duplication", duplication::analyze),
        ("language-rules", language_rules::analyze),
    ]
}

/// Run every analyzer sequentially and collect the raw issue stream.
/// The engine prefers the concurrent path; this is for tests and simple
/// callers.
pub fn run_all(context: &FileContext) -> Vec<Issue> {
    all()
        .iter()
        .flat_map(|(_, analyze)| analyze(context))
        .collect()
}

/// Byte offsets of line starts, for translating regex match offsets into
/// line and column numbers.
pub(crate) struct LineIndex {
    starts: Vec<usize>,
}

impl LineIndex {
    pub fn new(text: &str) -> Self {
        let mut starts = vec![0];
        starts.extend(text.match_indices('\n').map(|(pos, _)| pos + 1));
        Self { starts }
    }

    /// 1-based (line, column) of a byte offset. Column counts characters
    /// from the start of the line.
    pub fn position(&self, text: &str, offset: usize) -> (u32, u32) {
        let line = self.starts.partition_point(|&start| start <= offset);
        let line_start = self.starts[line - 1];
        let column = text[line_start..offset].chars().count() + 1;
        (line as u32, column as u32)
    }
}
