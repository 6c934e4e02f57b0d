//! Identifier naming checks.
//!
//! Function names are checked against the language's convention (camelCase
//! for the JS family, snake_case for Python) and against a minimum length.
//! Variable declarations are only checked for single-character names.

use super::{FileContext, LineIndex};
use crate::patterns::first_capture;
use crate::types::{Issue, Severity};

/// Single letters conventionally fine as variable names.
const ALLOWED_SINGLE_NAMES: &[&str] = &["i", "j", "k", "x", "y", "z"];

pub fn analyze(context: &FileContext) -> Vec<Issue> {
    let profile = context.language.profile();
    let index = LineIndex::new(&context.cleaned);
    let mut issues = Vec::new();

    for caps in profile.function_def.captures_iter(&context.cleaned) {
        let Some(name_match) = first_capture(&caps) else {
            continue;
        };
        let name = name_match.as_str();
        let (line, column) = index.position(&context.cleaned, name_match.start());

        if let Some(style) = profile.naming {
            if !style.is_exempt(name) && !style.matches(name) {
                issues.push(
                    Issue::new(
                        &context.path,
                        line,
                        column,
                        Severity::Warning,
                        "naming-convention-function",
                        format!(
                            "Function '{name}' does not follow {} naming",
                            style.describe()
                        ),
                    )
                    .with_suggestion(format!("Rename to '{}'", style.suggest(name))),
                );
            }
        }

        if is_too_short(name, context.thresholds.min_name_length) {
            issues.push(
                Issue::new(
                    &context.path,
                    line,
                    column,
                    Severity::Warning,
                    "naming-short-name",
                    format!("Function name '{name}' is too short"),
                )
                .with_suggestion("Use a descriptive name"),
            );
        }
    }

    for caps in profile.variable_def.captures_iter(&context.cleaned) {
        let Some(name_match) = first_capture(&caps) else {
            continue;
        };
        let name = name_match.as_str();
        if name.chars().count() == 1 && !ALLOWED_SINGLE_NAMES.contains(&name) {
            let (line, column) = index.position(&context.cleaned, name_match.start());
            issues.push(
                Issue::new(
                    &context.path,
                    line,
                    column,
                    Severity::Info,
                    "naming-short-variable",
                    format!("Single-character variable name '{name}'"),
                )
                .with_suggestion("Use a descriptive name"),
            );
        }
    }

    issues
}

/// Shorter than the minimum, unless it is a lone lowercase letter.
fn is_too_short(name: &str, min_length: usize) -> bool {
    let length = name.chars().count();
    if length >= min_length {
        return false;
    }
    !(length == 1 && name.chars().all(|c| c.is_ascii_lowercase()))
}
