//! Supported languages and extension-based dispatch.
//!
//! A file's language is resolved exactly once, from its extension, before any
//! content is read. Everything downstream (normalization, pattern selection,
//! language-specific rules) branches on the resulting [`Language`] value.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::patterns::{self, SyntaxProfile};

/// Languages the engine knows how to scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    JavaScript,
    TypeScript,
    Python,
    Java,
    Go,
    Rust,
}

impl Language {
    /// All supported languages, in display order.
    pub fn all() -> &'static [Language] {
        &[
            Language::JavaScript,
            Language::TypeScript,
            Language::Python,
            Language::Java,
            Language::Go,
            Language::Rust,
        ]
    }

    /// Human-readable name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::JavaScript => "JavaScript",
            Language::TypeScript => "TypeScript",
            Language::Python => "Python",
            Language::Java => "Java",
            Language::Go => "Go",
            Language::Rust => "Rust",
        }
    }

    /// File extensions (without the dot) owned by this language.
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            Language::JavaScript => &["js", "jsx", "mjs", "cjs"],
            Language::TypeScript => &["ts", "tsx"],
            Language::Python => &["py"],
            Language::Java => &["java"],
            Language::Go => &["go"],
            Language::Rust => &["rs"],
        }
    }

    /// Look up the language owning `ext` (case-insensitive, no dot).
    pub fn from_extension(ext: &str) -> Option<Language> {
        Language::all()
            .iter()
            .copied()
            .find(|lang| lang.extensions().iter().any(|e| e.eq_ignore_ascii_case(ext)))
    }

    /// Resolve the language from a path's extension.
    pub fn from_path(path: &Path) -> Option<Language> {
        let ext = path.extension()?.to_str()?;
        Language::from_extension(ext)
    }

    /// Every extension the engine understands, for error messages.
    pub fn known_extensions() -> Vec<&'static str> {
        Language::all()
            .iter()
            .flat_map(|lang| lang.extensions().iter().copied())
            .collect()
    }

    /// JavaScript and TypeScript share their syntax rules.
    pub fn is_js_family(&self) -> bool {
        matches!(self, Language::JavaScript | Language::TypeScript)
    }

    /// The static syntax profile (patterns, comment and string syntax) for
    /// this language.
    pub fn profile(&self) -> &'static SyntaxProfile {
        patterns::profile(*self)
    }
}
