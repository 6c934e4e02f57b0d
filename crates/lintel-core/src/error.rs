//! Error types for the lintel engine.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for lintel operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while validating, reading, or analyzing a file.
///
/// Every variant is recovered at the per-file boundary: the engine turns it
/// into a failed [`FileAnalysisResult`](crate::types::FileAnalysisResult) and
/// keeps going with the remaining files.
#[derive(Debug, Error)]
pub enum Error {
    /// Path failed the safety gate before any filesystem access.
    #[error("Invalid path {path:?}: {reason}")]
    InvalidPath {
        /// The path as it appeared in the input list.
        path: PathBuf,
        /// Why it was rejected.
        reason: String,
    },

    /// No supported language claims the file's extension.
    #[error("Unsupported file extension for {path:?} (supported: {supported})")]
    UnsupportedExtension {
        path: PathBuf,
        /// Comma-separated list of extensions the engine understands.
        supported: String,
    },

    /// The file could not be stat'ed or opened.
    #[error("Cannot access {path:?}: {source}")]
    NotAccessible {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The path exists but is not a regular file.
    #[error("Not a regular file: {path:?}")]
    NotAFile { path: PathBuf },

    /// The file exceeds the configured size limit.
    #[error("File too large: {path:?} is {size} bytes, limit is {limit} bytes")]
    FileTooLarge {
        path: PathBuf,
        size: u64,
        limit: u64,
    },

    /// The file is empty.
    #[error("File is empty: {path:?}")]
    EmptyFile { path: PathBuf },

    /// The file is not valid UTF-8 text.
    #[error("Not valid UTF-8 text: {path:?}")]
    NotValidText { path: PathBuf },

    /// Analysis of one file exceeded the per-file time budget.
    #[error("Analysis timed out after {seconds}s: {path:?}")]
    AnalysisTimeout { path: PathBuf, seconds: u64 },

    /// An analyzer task failed unexpectedly.
    #[error("Analysis of {path:?} failed: {message}")]
    AnalysisFailed { path: PathBuf, message: String },
}
