//! Input validation and path safety checks.
//!
//! The validator runs before any filesystem access and has no side effects.
//! Paths come straight from caller input, so everything that could escape
//! the working tree is rejected up front.

use std::path::Path;

use crate::error::{Error, Result};
use crate::language::Language;

/// Validates a path from the input list (prevents path traversal).
///
/// Rejects, in order: empty paths, paths containing `..` or `~`, absolute
/// paths, and paths whose extension no supported language claims. The first
/// failing check wins.
pub fn validate_path(path: &Path) -> Result<()> {
    let raw = path.to_string_lossy();

    if raw.trim().is_empty() {
        return Err(Error::InvalidPath {
            path: path.to_path_buf(),
            reason: "path is empty".to_string(),
        });
    }

    if raw.contains("..") || raw.contains('~') {
        return Err(Error::InvalidPath {
            path: path.to_path_buf(),
            reason: "path traversal is not allowed".to_string(),
        });
    }

    if path.is_absolute() {
        return Err(Error::InvalidPath {
            path: path.to_path_buf(),
            reason: "absolute paths are not allowed".to_string(),
        });
    }

    if Language::from_path(path).is_none() {
        return Err(Error::UnsupportedExtension {
            path: path.to_path_buf(),
            supported: Language::known_extensions().join(", "),
        });
    }

    Ok(())
}
