//! Per-file orchestration and the multi-file runner.
//!
//! [`Engine::analyze_file`] walks one file through the gate sequence:
//! validate path, resolve language, read, short-circuit near-empty content,
//! normalize, run analyzers, sort issues. Every rejection becomes a failed
//! [`FileAnalysisResult`]; nothing escapes the per-file boundary.
//!
//! [`Engine::analyze_files`] runs many files with a bounded number of
//! concurrent workers and a per-file time budget, preserving input order.

use futures::stream::{self, StreamExt};
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::task;
use tracing::{debug, warn};

use crate::analyzers::{self, FileContext};
use crate::error::{Error, Result};
use crate::language::Language;
use crate::reader::{self, SourceFile};
use crate::thresholds::Thresholds;
use crate::types::{AnalysisMetrics, AnalysisRun, FileAnalysisResult, Issue};
use crate::validate;

/// Options for the multi-file runner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunnerOptions {
    /// Maximum number of files analyzed concurrently.
    pub workers: usize,

    /// Per-file time budget. A file exceeding it is recorded as a timeout
    /// failure and the run continues; its worker tasks finish in the
    /// background and are discarded.
    pub file_timeout: Duration,
}

impl Default for RunnerOptions {
    fn default() -> Self {
        Self {
            workers: std::thread::available_parallelism()
                .map(NonZeroUsize::get)
                .unwrap_or(4),
            file_timeout: Duration::from_secs(30),
        }
    }
}

/// The analysis engine.
///
/// Holds the immutable thresholds and runner options for one run. Input
/// paths must be relative; they are resolved against the engine's working
/// root (the process working directory unless overridden).
#[derive(Debug, Clone)]
pub struct Engine {
    thresholds: Thresholds,
    runner: RunnerOptions,
    root: PathBuf,
}

impl Engine {
    /// Engine with default runner options, rooted at the working directory.
    pub fn new(thresholds: Thresholds) -> Self {
        Self::with_runner(thresholds, RunnerOptions::default())
    }

    /// Engine with explicit runner options.
    pub fn with_runner(thresholds: Thresholds, runner: RunnerOptions) -> Self {
        Self {
            thresholds,
            runner,
            root: PathBuf::from("."),
        }
    }

    /// Resolve input paths against `root` instead of the working directory.
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    /// Analyze one file through the full gate sequence.
    ///
    /// Never returns an error: every failure is folded into the result.
    pub async fn analyze_file(&self, path: &Path) -> FileAnalysisResult {
        let started = Instant::now();
        match self.try_analyze(path, started).await {
            Ok(result) => result,
            Err(error) => {
                warn!(path = %path.display(), %error, "file analysis failed");
                FileAnalysisResult::failure(path, &error)
            }
        }
    }

    async fn try_analyze(&self, path: &Path, started: Instant) -> Result<FileAnalysisResult> {
        validate::validate_path(path)?;
        let Some(language) = Language::from_path(path) else {
            // Unreachable after validation, but the gate stays explicit.
            return Err(Error::UnsupportedExtension {
                path: path.to_path_buf(),
                supported: Language::known_extensions().join(", "),
            });
        };

        let source = self.read(path).await?;

        // Near-empty files succeed with zero issues and no analyzer work.
        if source.content.trim().chars().count() < self.thresholds.min_content_length {
            debug!(path = %path.display(), "content below minimum length, skipping analyzers");
            let metrics = AnalysisMetrics {
                content_length: source.content.len(),
                cleaned_length: source.content.len(),
                line_count: source.stats.line_count,
                analyzers_run: 0,
                duration_ms: started.elapsed().as_millis() as u64,
            };
            return Ok(FileAnalysisResult::success(
                path.to_path_buf(),
                language,
                Vec::new(),
                source.stats,
                metrics,
            ));
        }

        let stats = source.stats.clone();
        let context = Arc::new(FileContext::new(
            path.to_path_buf(),
            language,
            source.content,
            self.thresholds,
        ));

        let mut issues = self.run_analyzers(&context).await?;
        // Stable sort: issues on the same line keep analyzer discovery order.
        issues.sort_by_key(|issue| issue.line);

        let metrics = AnalysisMetrics {
            content_length: context.source.len(),
            cleaned_length: context.cleaned.len(),
            line_count: stats.line_count,
            analyzers_run: analyzers::all().len(),
            duration_ms: started.elapsed().as_millis() as u64,
        };
        debug!(path = %path.display(), issues = issues.len(), "file analyzed");
        Ok(FileAnalysisResult::success(
            path.to_path_buf(),
            language,
            issues,
            stats,
            metrics,
        ))
    }

    /// Single read per file, off the async runtime.
    async fn read(&self, path: &Path) -> Result<SourceFile> {
        let resolved = self.root.join(path);
        let max_size = self.thresholds.max_file_size;
        let handle = task::spawn_blocking(move || reader::read_source(&resolved, max_size));
        match handle.await {
            Ok(result) => result,
            Err(join_error) => Err(Error::AnalysisFailed {
                path: path.to_path_buf(),
                message: format!("reader task failed: {join_error}"),
            }),
        }
    }

    /// Run all analyzers concurrently against the shared context and join
    /// their results. A panicking analyzer fails the whole file.
    async fn run_analyzers(&self, context: &Arc<FileContext>) -> Result<Vec<Issue>> {
        let handles: Vec<_> = analyzers::all()
            .iter()
            .map(|&(name, analyze)| {
                let context = Arc::clone(context);
                (name, task::spawn_blocking(move || analyze(&context)))
            })
            .collect();

        let mut issues = Vec::new();
        for (name, handle) in handles {
            match handle.await {
                Ok(found) => issues.extend(found),
                Err(join_error) => {
                    return Err(Error::AnalysisFailed {
                        path: context.path.clone(),
                        message: format!("analyzer '{name}' panicked: {join_error}"),
                    });
                }
            }
        }
        Ok(issues)
    }

    /// Analyze many files with bounded concurrency, preserving input order.
    ///
    /// An empty input list finalizes immediately with all-zero counters.
    pub async fn analyze_files(&self, paths: &[PathBuf]) -> AnalysisRun {
        let started = Instant::now();
        let workers = self.runner.workers.max(1);
        let budget = self.runner.file_timeout;

        let results: Vec<FileAnalysisResult> = stream::iter(paths.to_vec())
            .map(|path| async move {
                match tokio::time::timeout(budget, self.analyze_file(&path)).await {
                    Ok(result) => result,
                    Err(_) => {
                        warn!(path = %path.display(), seconds = budget.as_secs(), "analysis timed out");
                        FileAnalysisResult::failure(
                            &path,
                            &Error::AnalysisTimeout {
                                path: path.clone(),
                                seconds: budget.as_secs(),
                            },
                        )
                    }
                }
            })
            .buffered(workers)
            .collect()
            .await;

        AnalysisRun::finalize(results, started.elapsed().as_millis() as u64)
    }
}
