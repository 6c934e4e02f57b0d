//! Input list parsing.
//!
//! The CLI accepts the set of files to analyze as a JSON array of paths,
//! matching what change-detection tooling emits. The array is usually
//! passed inline as the argument itself; a file name or `-` for stdin
//! work too. Anything that is not a JSON array of strings is a fatal
//! input error; per-file problems are handled later by the engine.

use anyhow::{Context, Result};
use std::io::Read;
use std::path::PathBuf;

/// Read the path list from `source`: an inline JSON array, a file path,
/// or `-` for stdin.
pub fn read_paths(source: &str) -> Result<Vec<PathBuf>> {
    if source == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("failed to read the file list from stdin")?;
        return parse_paths(&buffer);
    }

    // An argument opening a JSON array is the list itself, never a file
    // name. A malformed inline list must surface as a parse error rather
    // than a miss on a file that was never meant to exist.
    if source.trim_start().starts_with('[') {
        return parse_paths(source);
    }

    let raw = std::fs::read_to_string(source)
        .with_context(|| format!("failed to read the file list from {source}"))?;
    parse_paths(&raw)
}

/// Parse a JSON array of file paths.
pub fn parse_paths(raw: &str) -> Result<Vec<PathBuf>> {
    serde_json::from_str(raw).context("input must be a JSON array of file paths")
}
