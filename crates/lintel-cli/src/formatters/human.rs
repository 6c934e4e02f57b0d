//! Human-readable formatter for analysis reports.

use colored::*;
use lintel_core::{FileAnalysisResult, Severity};

use crate::report::Report;

pub struct HumanFormatter;

pub fn print_report(report: &Report) {
    println!("\nLintel Analysis Results");
    println!("=======================\n");

    println!("Summary:");
    println!("  Files analyzed: {}", report.summary.files_analyzed);
    println!("  Succeeded: {}", report.summary.succeeded);
    println!("  Failed: {}", report.summary.failed);
    println!("  Total issues: {}", report.summary.total_issues);
    println!("  Duration: {}ms", report.summary.duration_ms);

    for file in &report.files {
        print_file(file);
    }

    if report.summary.failed > 0 {
        println!();
        println!(
            "{}",
            format!("{} file(s) could not be analyzed", report.summary.failed).red()
        );
    }
}

fn print_file(file: &FileAnalysisResult) {
    let language = file
        .language
        .map_or("unknown", |language| language.display_name());

    if !file.success {
        println!("\n{} {} ({language})", "✗".red(), file.path.display());
        if let Some(error) = &file.error {
            println!("    {}", error.red());
        }
        return;
    }

    if file.issues.is_empty() {
        println!("\n{} {} ({language})", "✓".green(), file.path.display());
        return;
    }

    println!(
        "\n{} {} ({language}, {}):",
        "⚠".yellow(),
        file.path.display(),
        file.issues.len()
    );
    for issue in &file.issues {
        let severity = match issue.severity {
            Severity::Error => issue.severity.display_name().red(),
            Severity::Warning => issue.severity.display_name().yellow(),
            Severity::Info => issue.severity.display_name().cyan(),
        };
        println!(
            "    {}:{} {} [{}] {}",
            issue.line,
            issue.column,
            severity,
            issue.rule.cyan(),
            issue.message
        );
        if let Some(suggestion) = &issue.suggestion {
            println!("        {}", suggestion.bright_black());
        }
    }
}
