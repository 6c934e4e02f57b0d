//! Output formatters for lintel reports.

pub mod human;
pub mod json;

pub use human::HumanFormatter;
pub use json::JsonFormatter;

use crate::report::Report;

/// Trait for formatting analysis reports
pub trait Formatter {
    /// Format and print the report
    fn format(&self, report: &Report);
}

impl Formatter for HumanFormatter {
    fn format(&self, report: &Report) {
        human::print_report(report);
    }
}

impl Formatter for JsonFormatter {
    fn format(&self, report: &Report) {
        json::print_json(report);
    }
}
