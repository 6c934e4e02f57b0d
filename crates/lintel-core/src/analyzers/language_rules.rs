//! Per-language anti-pattern checks.
//!
//! JS family: `console.*` calls, `var` declarations, loose equality, `any`
//! annotations (TypeScript only) and TODO-style comments. Python: bare
//! `except:`, `print(` calls and `global` statements. Other languages have
//! no specific rules yet.
//!
//! Everything except the TODO check runs against cleaned content so string
//! contents cannot trigger rules; the TODO check needs the comments and so
//! runs against the original.

use regex::Regex;
use std::sync::LazyLock;

use super::FileContext;
use crate::language::Language;
use crate::patterns::compile;
use crate::types::{Issue, Severity};

static CONSOLE_CALL: LazyLock<Regex> =
    LazyLock::new(|| compile(r"\bconsole\s*\.\s*[a-zA-Z_$][A-Za-z0-9_$]*\s*\("));
static VAR_DECLARATION: LazyLock<Regex> = LazyLock::new(|| compile(r"\bvar\s+[A-Za-z_$]"));
static ANY_ANNOTATION: LazyLock<Regex> = LazyLock::new(|| compile(r":\s*any\b"));
static TODO_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)//\s*(?:TODO|FIXME|HACK|XXX)\b"));

static BARE_EXCEPT: LazyLock<Regex> = LazyLock::new(|| compile(r"^\s*except\s*:"));
static PRINT_CALL: LazyLock<Regex> = LazyLock::new(|| compile(r"\bprint\s*\("));
static GLOBAL_STATEMENT: LazyLock<Regex> = LazyLock::new(|| compile(r"^\s*global\s+[A-Za-z_]"));

pub fn analyze(context: &FileContext) -> Vec<Issue> {
    if context.language.is_js_family() {
        js_rules(context)
    } else if context.language == Language::Python {
        python_rules(context)
    } else {
        Vec::new()
    }
}

fn js_rules(context: &FileContext) -> Vec<Issue> {
    let mut issues = Vec::new();

    for (idx, line) in context.cleaned.lines().enumerate() {
        let line_no = idx as u32 + 1;

        if let Some(m) = CONSOLE_CALL.find(line) {
            issues.push(
                Issue::new(
                    &context.path,
                    line_no,
                    column_of(line, m.start()),
                    Severity::Warning,
                    "no-console",
                    "Unexpected console statement",
                )
                .with_suggestion("Use a logger instead of console"),
            );
        }

        if let Some(m) = VAR_DECLARATION.find(line) {
            issues.push(
                Issue::new(
                    &context.path,
                    line_no,
                    column_of(line, m.start()),
                    Severity::Warning,
                    "no-var",
                    "Unexpected var, use let or const instead",
                )
                .with_suggestion("Replace var with let or const"),
            );
        }

        for start in loose_equality_offsets(line) {
            let wanted = if line[start..].starts_with("==") { "===" } else { "!==" };
            issues.push(
                Issue::new(
                    &context.path,
                    line_no,
                    column_of(line, start),
                    Severity::Warning,
                    "prefer-strict-equality",
                    format!("Use {wanted} instead of {}", &line[start..start + 2]),
                )
                .with_suggestion(format!("Replace with {wanted}")),
            );
        }

        if context.language == Language::TypeScript {
            if let Some(m) = ANY_ANNOTATION.find(line) {
                issues.push(
                    Issue::new(
                        &context.path,
                        line_no,
                        column_of(line, m.start()),
                        Severity::Warning,
                        "no-any-type",
                        "Avoid the any type",
                    )
                    .with_suggestion("Use a concrete type or unknown"),
                );
            }
        }
    }

    // Comments are stripped from cleaned content, so this scan needs the
    // original.
    for (idx, line) in context.source.lines().enumerate() {
        if let Some(m) = TODO_COMMENT.find(line) {
            issues.push(Issue::new(
                &context.path,
                idx as u32 + 1,
                column_of(line, m.start()),
                Severity::Info,
                "todo-comment",
                "Unresolved TODO-style comment",
            ));
        }
    }

    issues
}

fn python_rules(context: &FileContext) -> Vec<Issue> {
    let mut issues = Vec::new();

    for (idx, line) in context.cleaned.lines().enumerate() {
        let line_no = idx as u32 + 1;

        if let Some(m) = BARE_EXCEPT.find(line) {
            let except_at = m.as_str().find("except").unwrap_or(0);
            issues.push(
                Issue::new(
                    &context.path,
                    line_no,
                    column_of(line, m.start() + except_at),
                    Severity::Warning,
                    "no-bare-except",
                    "Bare except clause swallows every exception",
                )
                .with_suggestion("Catch a specific exception type"),
            );
        }

        if let Some(m) = PRINT_CALL.find(line) {
            issues.push(
                Issue::new(
                    &context.path,
                    line_no,
                    column_of(line, m.start()),
                    Severity::Info,
                    "no-print",
                    "print call in library code",
                )
                .with_suggestion("Use logging instead of print"),
            );
        }

        if let Some(m) = GLOBAL_STATEMENT.find(line) {
            issues.push(
                Issue::new(
                    &context.path,
                    line_no,
                    column_of(line, m.start()),
                    Severity::Warning,
                    "no-global",
                    "Avoid mutating global state",
                )
                .with_suggestion("Pass state explicitly or use a class"),
            );
        }
    }

    issues
}

/// Byte offsets of `==` and `!=` operators that are not part of `===`,
/// `!==` or `<=`-style comparisons. The regex crate has no lookbehind, so
/// the neighbor characters are checked by hand.
fn loose_equality_offsets(line: &str) -> Vec<usize> {
    let mut offsets = Vec::new();

    for (pos, _) in line.match_indices("==") {
        let prev = line[..pos].chars().next_back();
        let next = line[pos + 2..].chars().next();
        if matches!(prev, Some('=') | Some('!') | Some('<') | Some('>')) {
            continue;
        }
        if next == Some('=') {
            continue;
        }
        offsets.push(pos);
    }

    for (pos, _) in line.match_indices("!=") {
        if line[pos + 2..].starts_with('=') {
            continue;
        }
        offsets.push(pos);
    }

    offsets.sort_unstable();
    offsets
}

/// 1-based character column of a byte offset within one line.
fn column_of(line: &str, offset: usize) -> u32 {
    line[..offset].chars().count() as u32 + 1
}
