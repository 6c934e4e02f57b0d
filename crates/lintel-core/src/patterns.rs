//! Per-language pattern tables.
//!
//! One static [`SyntaxProfile`] per supported language, compiled on first use
//! and shared for the lifetime of the process. The profiles drive everything
//! regex-based in the engine: finding function and variable definitions,
//! stripping comments and string literals, and picking the naming convention.
//!
//! The patterns are heuristics, not a lexer. They deliberately trade grammar
//! coverage for simplicity: class methods without modifiers, destructuring
//! declarations and similar constructs are not matched. Callers must treat
//! misses as expected behavior.

use regex::{Regex, RegexBuilder};
use std::sync::LazyLock;

use crate::language::Language;

/// Maximum pattern length (500 characters)
///
/// Keeps the built-in table honest: anything longer than this is a sign the
/// pattern should be split or the check moved out of regex land.
const MAX_PATTERN_LENGTH: usize = 500;

/// Compiled regex size limit (10MB)
///
/// Limits memory usage of compiled patterns, applied via RegexBuilder.
const REGEX_SIZE_LIMIT: usize = 10_000_000; // 10MB

/// Regex DFA size limit (2MB)
///
/// Limits the size of the lazy DFA the regex engine builds while matching.
const REGEX_DFA_SIZE_LIMIT: usize = 2_000_000; // 2MB

/// Compile a built-in pattern with size limits.
///
/// Every built-in pattern is a compile-time literal, so a failure here is a
/// bug in the table itself and panics at first use rather than being
/// propagated to callers.
pub(crate) fn compile(pattern: &str) -> Regex {
    assert!(
        pattern.len() <= MAX_PATTERN_LENGTH,
        "built-in pattern exceeds {MAX_PATTERN_LENGTH} characters"
    );
    RegexBuilder::new(pattern)
        .size_limit(REGEX_SIZE_LIMIT)
        .dfa_size_limit(REGEX_DFA_SIZE_LIMIT)
        .build()
        .unwrap_or_else(|err| panic!("built-in pattern {pattern:?} failed to compile: {err}"))
}

/// One kind of string or character literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuoteStyle {
    /// Opening and closing delimiter.
    pub delimiter: &'static str,
    /// Whether a backslash escapes the next character inside the literal.
    pub escape: bool,
    /// Whether the literal may span lines. Newlines inside are preserved
    /// when the literal is stripped.
    pub multiline: bool,
    /// Character-literal rule: only treat the delimiter as opening a literal
    /// when a closing delimiter follows within at most one (possibly escaped)
    /// character. Keeps Rust lifetimes and Go/Java generics readable as code.
    pub char_like: bool,
}

/// Comment syntax for one language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommentStyle {
    /// Line comment marker.
    pub line: &'static str,
    /// Block comment open/close markers, if the language has them.
    pub block: Option<(&'static str, &'static str)>,
}

/// How function bodies are delimited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyStyle {
    /// Body enclosed in `{` .. `}`; length is measured by brace depth.
    Braces,
    /// Body delimited by indentation below the definition line.
    Indentation,
}

/// Identifier convention enforced for function names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamingStyle {
    CamelCase,
    SnakeCase,
}

static CAMEL_CASE: LazyLock<Regex> = LazyLock::new(|| compile(r"^[a-z][a-zA-Z0-9]*$"));
static SNAKE_CASE: LazyLock<Regex> = LazyLock::new(|| compile(r"^[a-z][a-z0-9_]*$"));

impl NamingStyle {
    /// Name of the convention as it appears in messages.
    pub fn describe(&self) -> &'static str {
        match self {
            NamingStyle::CamelCase => "camelCase",
            NamingStyle::SnakeCase => "snake_case",
        }
    }

    /// Whether `name` already follows the convention.
    pub fn matches(&self, name: &str) -> bool {
        match self {
            NamingStyle::CamelCase => CAMEL_CASE.is_match(name),
            NamingStyle::SnakeCase => SNAKE_CASE.is_match(name),
        }
    }

    /// Names the convention never applies to: `constructor` in the JS family,
    /// dunder-prefixed names in Python.
    pub fn is_exempt(&self, name: &str) -> bool {
        match self {
            NamingStyle::CamelCase => name == "constructor",
            NamingStyle::SnakeCase => name.starts_with("__"),
        }
    }

    /// Case-folding heuristic producing a suggested rewrite of `name`.
    pub fn suggest(&self, name: &str) -> String {
        match self {
            NamingStyle::CamelCase => {
                let mut chars = name.chars();
                match chars.next() {
                    Some(first) => first.to_lowercase().chain(chars).collect(),
                    None => String::new(),
                }
            }
            NamingStyle::SnakeCase => {
                let mut out = String::with_capacity(name.len() + 4);
                for ch in name.chars() {
                    if ch.is_uppercase() {
                        if !out.is_empty() && !out.ends_with('_') {
                            out.push('_');
                        }
                        out.extend(ch.to_lowercase());
                    } else {
                        out.push(ch);
                    }
                }
                out
            }
        }
    }
}

/// Static syntax description for one language.
///
/// `function_def` and `variable_def` carry the defined name as the first
/// non-empty capture group; use [`first_capture`] to extract it.
#[derive(Debug)]
pub struct SyntaxProfile {
    pub language: Language,
    pub function_def: Regex,
    pub variable_def: Regex,
    pub comments: CommentStyle,
    pub quotes: &'static [QuoteStyle],
    pub body: BodyStyle,
    pub naming: Option<NamingStyle>,
}

/// First non-empty capture group of a match, skipping the implicit group 0.
pub fn first_capture<'t>(caps: &regex::Captures<'t>) -> Option<regex::Match<'t>> {
    caps.iter().skip(1).flatten().next()
}

const JS_QUOTES: &[QuoteStyle] = &[
    QuoteStyle { delimiter: "`", escape: true, multiline: true, char_like: false },
    QuoteStyle { delimiter: "\"", escape: true, multiline: false, char_like: false },
    QuoteStyle { delimiter: "'", escape: true, multiline: false, char_like: false },
];

// Order matters: triple quotes must be tried before their single-char forms.
const PYTHON_QUOTES: &[QuoteStyle] = &[
    QuoteStyle { delimiter: "\"\"\"", escape: true, multiline: true, char_like: false },
    QuoteStyle { delimiter: "'''", escape: true, multiline: true, char_like: false },
    QuoteStyle { delimiter: "\"", escape: true, multiline: false, char_like: false },
    QuoteStyle { delimiter: "'", escape: true, multiline: false, char_like: false },
];

const JAVA_QUOTES: &[QuoteStyle] = &[
    QuoteStyle { delimiter: "\"", escape: true, multiline: false, char_like: false },
    QuoteStyle { delimiter: "'", escape: true, multiline: false, char_like: true },
];

const GO_QUOTES: &[QuoteStyle] = &[
    QuoteStyle { delimiter: "`", escape: false, multiline: true, char_like: false },
    QuoteStyle { delimiter: "\"", escape: true, multiline: false, char_like: false },
    QuoteStyle { delimiter: "'", escape: true, multiline: false, char_like: true },
];

const RUST_QUOTES: &[QuoteStyle] = &[
    QuoteStyle { delimiter: "\"", escape: true, multiline: true, char_like: false },
    QuoteStyle { delimiter: "'", escape: true, multiline: false, char_like: true },
];

const SLASH_COMMENTS: CommentStyle = CommentStyle {
    line: "//",
    block: Some(("/*", "*/")),
};

const HASH_COMMENTS: CommentStyle = CommentStyle {
    line: "#",
    block: None,
};

// Function declarations, `const f = function`, and arrow assignments with or
// without a parameter list. Object and class methods are not matched.
const JS_FUNCTION: &str = concat!(
    r"\bfunction\s+([A-Za-z_$][A-Za-z0-9_$]*)\s*\(",
    r"|\b(?:const|let|var)\s+([A-Za-z_$][A-Za-z0-9_$]*)\s*=\s*(?:async\s+)?function\b",
    r"|\b(?:const|let|var)\s+([A-Za-z_$][A-Za-z0-9_$]*)\s*=\s*(?:async\s+)?\([^)\n]*\)\s*=>",
    r"|\b(?:const|let|var)\s+([A-Za-z_$][A-Za-z0-9_$]*)\s*=\s*(?:async\s+)?[A-Za-z_$][A-Za-z0-9_$]*\s*=>",
);

const JS_VARIABLE: &str = r"\b(?:const|let|var)\s+([A-Za-z_$][A-Za-z0-9_$]*)\b";

const PYTHON_FUNCTION: &str = r"\bdef\s+([A-Za-z_][A-Za-z0-9_]*)\s*\(";

// Simple assignments at statement level. Annotated and augmented assignments
// are not matched.
const PYTHON_VARIABLE: &str = r"(?m)^\s*([A-Za-z_][A-Za-z0-9_]*)\s*=\s*[^=\n]";

// Requires at least one modifier and a return type, which conveniently skips
// constructors and keyword-guarded blocks like `if (...) {`.
const JAVA_FUNCTION: &str = concat!(
    r"(?m)^\s*(?:(?:public|private|protected|static|final|abstract|synchronized|native|default)\s+)+",
    r"(?:[\w$]+(?:<[^>\n]*>)?(?:\[\])*\s+)+([A-Za-z_$][A-Za-z0-9_$]*)\s*\([^)\n]*\)\s*\{",
);

const JAVA_VARIABLE: &str =
    r"\b(?:int|long|short|byte|double|float|boolean|char|String|var)\s+([A-Za-z_$][A-Za-z0-9_$]*)\s*[=;]";

const GO_FUNCTION: &str = r"\bfunc\s+(?:\([^)\n]*\)\s*)?([A-Za-z_][A-Za-z0-9_]*)\s*\(";

const GO_VARIABLE: &str = r"\bvar\s+([A-Za-z_][A-Za-z0-9_]*)|([A-Za-z_][A-Za-z0-9_]*)\s*:=";

const RUST_FUNCTION: &str = r"\bfn\s+([A-Za-z_][A-Za-z0-9_]*)";

const RUST_VARIABLE: &str = r"\blet\s+(?:mut\s+)?([A-Za-z_][A-Za-z0-9_]*)";

fn js_family_profile(language: Language, naming: Option<NamingStyle>) -> SyntaxProfile {
    SyntaxProfile {
        language,
        function_def: compile(JS_FUNCTION),
        variable_def: compile(JS_VARIABLE),
        comments: SLASH_COMMENTS,
        quotes: JS_QUOTES,
        body: BodyStyle::Braces,
        naming,
    }
}

static PROFILES: LazyLock<[SyntaxProfile; 6]> = LazyLock::new(|| {
    [
        js_family_profile(Language::JavaScript, Some(NamingStyle::CamelCase)),
        js_family_profile(Language::TypeScript, Some(NamingStyle::CamelCase)),
        SyntaxProfile {
            language: Language::Python,
            function_def: compile(PYTHON_FUNCTION),
            variable_def: compile(PYTHON_VARIABLE),
            comments: HASH_COMMENTS,
            quotes: PYTHON_QUOTES,
            body: BodyStyle::Indentation,
            naming: Some(NamingStyle::SnakeCase),
        },
        SyntaxProfile {
            language: Language::Java,
            function_def: compile(JAVA_FUNCTION),
            variable_def: compile(JAVA_VARIABLE),
            comments: SLASH_COMMENTS,
            quotes: JAVA_QUOTES,
            body: BodyStyle::Braces,
            naming: None,
        },
        SyntaxProfile {
            language: Language::Go,
            function_def: compile(GO_FUNCTION),
            variable_def: compile(GO_VARIABLE),
            comments: SLASH_COMMENTS,
            quotes: GO_QUOTES,
            body: BodyStyle::Braces,
            naming: None,
        },
        SyntaxProfile {
            language: Language::Rust,
            function_def: compile(RUST_FUNCTION),
            variable_def: compile(RUST_VARIABLE),
            comments: SLASH_COMMENTS,
            quotes: RUST_QUOTES,
            body: BodyStyle::Braces,
            naming: None,
        },
    ]
});

/// The profile for `language`.
pub fn profile(language: Language) -> &'static SyntaxProfile {
    let index = match language {
        Language::JavaScript => 0,
        Language::TypeScript => 1,
        Language::Python => 2,
        Language::Java => 3,
        Language::Go => 4,
        Language::Rust => 5,
    };
    &PROFILES[index]
}
