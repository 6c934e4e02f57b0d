//! JSON formatter for analysis reports.

use crate::report::Report;

pub struct JsonFormatter;

pub fn print_json(report: &Report) {
    match serde_json::to_string_pretty(report) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error serializing report: {}", e),
    }
}
