//! Line length checks.
//!
//! Runs against the original content, not the cleaned content: a line that
//! is long because of a comment or string is still a long line.

use super::FileContext;
use crate::types::{Issue, Severity};

pub fn analyze(context: &FileContext) -> Vec<Issue> {
    let max_length = context.thresholds.max_line_length;
    let mut issues = Vec::new();

    for (idx, line) in context.source.lines().enumerate() {
        let length = line.chars().count();
        if length > max_length {
            issues.push(
                Issue::new(
                    &context.path,
                    idx as u32 + 1,
                    max_length as u32 + 1,
                    Severity::Warning,
                    "line-length",
                    format!("Line has {length} characters (maximum: {max_length})"),
                )
                .with_suggestion("Break this line into shorter ones"),
            );
        }
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::Language;
    use crate::thresholds::Thresholds;
    use std::path::PathBuf;

    fn run_with_max(source: &str, max_line_length: usize) -> Vec<Issue> {
        analyze(&FileContext::new(
            PathBuf::from("test.js"),
            Language::JavaScript,
            source.to_string(),
            Thresholds {
                max_line_length,
                ..Default::default()
            },
        ))
    }

    #[test]
    fn test_lines_at_the_limit_pass() {
        let issues = run_with_max("a = 1;\nbb = 2;\n", 7);
        assert!(issues.is_empty());
    }

    #[test]
    fn test_flags_each_long_line_once() {
        let source = "short\nthis line is much too long\nshort again\nanother very long line here\n";
        let issues = run_with_max(source, 12);
        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].line, 2);
        assert_eq!(issues[1].line, 4);
        assert!(issues.iter().all(|i| i.rule == "line-length"));
    }

    #[test]
    fn test_column_points_just_past_the_limit() {
        let issues = run_with_max("abcdefghij\n", 5);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].column, 6);
        assert!(issues[0].message.contains("10 characters"));
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        // Five two-byte characters are five characters.
        let issues = run_with_max("ééééé\n", 5);
        assert!(issues.is_empty());
    }

    #[test]
    fn test_long_comment_lines_still_count() {
        let source = "// this comment alone stretches far beyond the limit\n";
        let issues = run_with_max(source, 20);
        assert_eq!(issues.len(), 1);
    }
}
