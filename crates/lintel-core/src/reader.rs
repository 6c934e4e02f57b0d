//! Safe file reading with size and content gates.
//!
//! Reading happens exactly once per analyzed file, after validation. All
//! functions here are synchronous; the engine wraps them in
//! `tokio::task::spawn_blocking` so the async runtime never blocks on disk.

use chrono::{DateTime, Utc};
use std::path::Path;

use crate::error::{Error, Result};
use crate::types::FileStats;

/// Content and stats of one successfully read source file.
#[derive(Debug, Clone)]
pub struct SourceFile {
    /// Full file content, unmodified.
    pub content: String,

    /// Filesystem facts captured at read time.
    pub stats: FileStats,
}

/// Read a source file, enforcing the gates in order: must exist, must be a
/// regular file, must not exceed `max_size` bytes, must not be empty, must
/// decode as UTF-8.
///
/// OS-level failures surface as [`Error::NotAccessible`] with the underlying
/// cause attached; nothing is thrown past this boundary.
pub fn read_source(path: &Path, max_size: u64) -> Result<SourceFile> {
    let metadata = std::fs::metadata(path).map_err(|source| Error::NotAccessible {
        path: path.to_path_buf(),
        source,
    })?;

    if !metadata.is_file() {
        return Err(Error::NotAFile {
            path: path.to_path_buf(),
        });
    }

    let size = metadata.len();
    if size > max_size {
        return Err(Error::FileTooLarge {
            path: path.to_path_buf(),
            size,
            limit: max_size,
        });
    }
    if size == 0 {
        return Err(Error::EmptyFile {
            path: path.to_path_buf(),
        });
    }

    let bytes = std::fs::read(path).map_err(|source| Error::NotAccessible {
        path: path.to_path_buf(),
        source,
    })?;
    let content = String::from_utf8(bytes).map_err(|_| Error::NotValidText {
        path: path.to_path_buf(),
    })?;

    let line_count = content.matches('\n').count() as u32 + 1;
    let modified = metadata.modified().ok().map(DateTime::<Utc>::from);

    Ok(SourceFile {
        content,
        stats: FileStats {
            size,
            line_count,
            modified,
        },
    })
}
