//! Core analysis library for lintel.
//!
//! Everything here is deterministic: the same file content and thresholds
//! always produce the same issues in the same order. The engine accepts a
//! list of relative source paths, walks each file through validation,
//! reading and normalization, fans out to the rule analyzers, and folds
//! every per-file failure into the run report instead of aborting it.

pub mod analyzers;
pub mod engine;
pub mod error;
pub mod language;
pub mod normalize;
pub mod patterns;
pub mod reader;
pub mod thresholds;
pub mod types;
pub mod validate;

pub use engine::{Engine, RunnerOptions};
pub use error::{Error, Result};
pub use language::Language;
pub use thresholds::Thresholds;
pub use types::{
    AnalysisMetrics, AnalysisRun, FileAnalysisResult, FileStats, Issue, RunSummary, Severity,
};
