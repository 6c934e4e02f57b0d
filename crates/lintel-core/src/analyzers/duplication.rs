//! Duplicate block detection.
//!
//! Slides a window of N consecutive lines over the cleaned content, after
//! trimming whitespace and dropping blank lines, and records every starting
//! line where the same joined window recurs. Windows below a character
//! minimum are skipped so boilerplate like runs of closing braces does not
//! drown the report.

use std::collections::HashMap;

use super::FileContext;
use crate::types::{Issue, Severity};

pub fn analyze(context: &FileContext) -> Vec<Issue> {
    let window = context.thresholds.duplication_window;
    let min_chars = context.thresholds.duplication_min_chars;

    // (original line number, trimmed text) for every non-blank line.
    let lines: Vec<(u32, &str)> = context
        .cleaned
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx as u32 + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
        .collect();

    if lines.len() < window {
        return Vec::new();
    }

    let mut occurrences: HashMap<String, Vec<u32>> = HashMap::new();
    for chunk in lines.windows(window) {
        let key = chunk
            .iter()
            .map(|(_, text)| *text)
            .collect::<Vec<_>>()
            .join("\n");
        if key.chars().count() < min_chars {
            continue;
        }
        occurrences.entry(key).or_default().push(chunk[0].0);
    }

    // HashMap iteration order is not deterministic; sort groups by first
    // occurrence so repeated runs report identically.
    let mut groups: Vec<&Vec<u32>> = occurrences
        .values()
        .filter(|starts| starts.len() > 1)
        .collect();
    groups.sort_by_key(|starts| starts[0]);

    let mut issues = Vec::new();
    for starts in groups {
        for (position, &line) in starts.iter().enumerate() {
            let others: Vec<String> = starts
                .iter()
                .enumerate()
                .filter(|(other, _)| *other != position)
                .map(|(_, l)| l.to_string())
                .collect();
            let location = if others.len() == 1 {
                format!("line {}", others[0])
            } else {
                format!("lines {}", others.join(", "))
            };
            issues.push(
                Issue::new(
                    &context.path,
                    line,
                    1,
                    Severity::Warning,
                    "code-duplication",
                    format!("Duplicated block of {window} lines (also at {location})"),
                )
                .with_suggestion("Extract the repeated block into a shared function"),
            );
        }
    }

    issues
}
