//! Function body length checks.
//!
//! Brace languages: scan forward from a function signature match to the
//! first `{` and track nesting depth until it closes. Python: the body is
//! every subsequent non-blank line indented deeper than the `def` line.
//! Both are heuristics over cleaned content; braces inside stripped strings
//! and comments no longer exist, which is what makes the depth count work.

use super::{FileContext, LineIndex};
use crate::patterns::{first_capture, BodyStyle};
use crate::types::{Issue, Severity};

const RULE: &str = "function-length";

pub fn analyze(context: &FileContext) -> Vec<Issue> {
    match context.language.profile().body {
        BodyStyle::Braces => braced_functions(context),
        BodyStyle::Indentation => indented_functions(context),
    }
}

fn braced_functions(context: &FileContext) -> Vec<Issue> {
    let profile = context.language.profile();
    let index = LineIndex::new(&context.cleaned);
    let max_lines = context.thresholds.max_function_lines;
    let mut issues = Vec::new();

    for caps in profile.function_def.captures_iter(&context.cleaned) {
        let Some(name_match) = first_capture(&caps) else {
            continue;
        };
        let Some(body_end) = matching_brace_end(&context.cleaned, name_match.end()) else {
            continue;
        };
        let (start_line, column) = index.position(&context.cleaned, name_match.start());
        let (end_line, _) = index.position(&context.cleaned, body_end);
        let length = (end_line - start_line + 1) as usize;
        if length > max_lines {
            issues.push(long_function(
                context,
                name_match.as_str(),
                start_line,
                column,
                length,
                max_lines,
            ));
        }
    }

    issues
}

/// Offset of the `}` closing the first `{` at or after `from`, or `None`
/// when braces never balance.
fn matching_brace_end(text: &str, from: usize) -> Option<usize> {
    let open = from + text[from..].find('{')?;
    let mut depth = 0usize;
    for (pos, ch) in text[open..].char_indices() {
        match ch {
            '{' => depth += 1,
            '}' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(open + pos);
                }
            }
            _ => {}
        }
    }
    None
}

fn indented_functions(context: &FileContext) -> Vec<Issue> {
    let profile = context.language.profile();
    let max_lines = context.thresholds.max_function_lines;
    let lines: Vec<&str> = context.cleaned.lines().collect();
    let mut issues = Vec::new();

    for (def_idx, def_line) in lines.iter().enumerate() {
        let Some(caps) = profile.function_def.captures(def_line) else {
            continue;
        };
        let Some(name_match) = first_capture(&caps) else {
            continue;
        };
        let def_indent = indent_width(def_line);

        // Body runs until the next non-blank line at or above the def's
        // indentation; trailing blank lines are not part of the body.
        let mut end_idx = def_idx;
        for (idx, line) in lines.iter().enumerate().skip(def_idx + 1) {
            if line.trim().is_empty() {
                continue;
            }
            if indent_width(line) <= def_indent {
                break;
            }
            end_idx = idx;
        }

        let length = end_idx - def_idx + 1;
        if length > max_lines {
            let column = (def_line[..name_match.start()].chars().count() + 1) as u32;
            issues.push(long_function(
                context,
                name_match.as_str(),
                def_idx as u32 + 1,
                column,
                length,
                max_lines,
            ));
        }
    }

    issues
}

fn indent_width(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count()
}

fn long_function(
    context: &FileContext,
    name: &str,
    line: u32,
    column: u32,
    length: usize,
    max_lines: usize,
) -> Issue {
    Issue::new(
        &context.path,
        line,
        column,
        Severity::Warning,
        RULE,
        format!("Function '{name}' has {length} lines (maximum: {max_lines})"),
    )
    .with_suggestion("Extract logical sections into separate functions")
}
