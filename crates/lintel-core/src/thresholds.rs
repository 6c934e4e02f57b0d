//! Detection thresholds.
//!
//! An immutable [`Thresholds`] value is passed into the engine at
//! construction. There is no ambient global: tests and callers can vary
//! thresholds freely and deterministically.

use serde::{Deserialize, Serialize};

/// Overridable limits applied by the analyzers and the reader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct Thresholds {
    /// Maximum function body length in lines before flagging.
    #[serde(default = "default_max_function_lines")]
    pub max_function_lines: usize,

    /// Maximum line length in characters before flagging.
    #[serde(default = "default_max_line_length")]
    pub max_line_length: usize,

    /// Minimum identifier length; shorter function names are flagged.
    #[serde(default = "default_min_name_length")]
    pub min_name_length: usize,

    /// Maximum file size in bytes the reader will accept.
    #[serde(default = "default_max_file_size")]
    pub max_file_size: u64,

    /// Files whose trimmed content is shorter than this are skipped
    /// without running any analyzer.
    #[serde(default = "default_min_content_length")]
    pub min_content_length: usize,

    /// Number of consecutive lines compared by the duplication analyzer.
    #[serde(default = "default_duplication_window")]
    pub duplication_window: usize,

    /// Minimum joined-window length in characters; shorter windows are
    /// ignored to avoid flagging trivial repetition.
    #[serde(default = "default_duplication_min_chars")]
    pub duplication_min_chars: usize,
}

fn default_max_function_lines() -> usize {
    50
}

fn default_max_line_length() -> usize {
    120
}

fn default_min_name_length() -> usize {
    2
}

fn default_max_file_size() -> u64 {
    5 * 1024 * 1024 // 5MB
}

fn default_min_content_length() -> usize {
    10
}

fn default_duplication_window() -> usize {
    5
}

fn default_duplication_min_chars() -> usize {
    50
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            max_function_lines: default_max_function_lines(),
            max_line_length: default_max_line_length(),
            min_name_length: default_min_name_length(),
            max_file_size: default_max_file_size(),
            min_content_length: default_min_content_length(),
            duplication_window: default_duplication_window(),
            duplication_min_chars: default_duplication_min_chars(),
        }
    }
}

impl Thresholds {
    /// Validates threshold values at load time so misconfiguration fails
    /// fast instead of producing nonsense results mid-run.
    ///
    /// # Errors
    /// Returns a message describing the first invalid value.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_function_lines == 0 {
            return Err("max_function_lines must be > 0".to_string());
        }
        if self.max_function_lines > 10000 {
            return Err("max_function_lines unreasonably large (>10000)".to_string());
        }

        if self.max_line_length == 0 {
            return Err("max_line_length must be > 0".to_string());
        }
        if self.max_line_length > 10000 {
            return Err("max_line_length unreasonably large (>10000)".to_string());
        }

        if self.min_name_length == 0 {
            return Err("min_name_length must be > 0".to_string());
        }
        if self.min_name_length > 100 {
            return Err("min_name_length unreasonably large (>100)".to_string());
        }

        if self.max_file_size == 0 {
            return Err("max_file_size must be > 0".to_string());
        }

        if self.duplication_window < 2 {
            return Err("duplication_window must be >= 2".to_string());
        }
        if self.duplication_window > 100 {
            return Err("duplication_window unreasonably large (>100)".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let thresholds = Thresholds::default();
        assert!(thresholds.validate().is_ok());
        assert_eq!(thresholds.max_function_lines, 50);
        assert_eq!(thresholds.max_line_length, 120);
        assert_eq!(thresholds.min_name_length, 2);
        assert_eq!(thresholds.max_file_size, 5 * 1024 * 1024);
        assert_eq!(thresholds.duplication_window, 5);
    }

    #[test]
    fn test_rejects_zero_thresholds() {
        let thresholds = Thresholds {
            max_function_lines: 0,
            ..Default::default()
        };
        assert!(thresholds.validate().is_err());
    }

    #[test]
    fn test_rejects_tiny_duplication_window() {
        let thresholds = Thresholds {
            duplication_window: 1,
            ..Default::default()
        };
        assert!(thresholds.validate().is_err());
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let parsed: Thresholds = serde_json::from_str(r#"{"max_line_length": 100}"#).unwrap();
        assert_eq!(parsed.max_line_length, 100);
        assert_eq!(parsed.max_function_lines, 50);
        assert_eq!(parsed.duplication_min_chars, 50);
    }
}
