//! Terminal presentation of check results
//!
//! Reports go to stdout. Colour follows `console`'s terminal detection, so
//! piped output is plain text.

use console::Style;

use crate::bundles::ValidationReport;

/// Print the managed file violation report
pub fn print_violations(lines: &[String]) {
    let mut lines = lines.iter();
    if let Some(header) = lines.next() {
        println!("{}", Style::new().red().bold().apply_to(header));
    }
    for line in lines {
        if let Some(path) = line.strip_prefix("  - ") {
            println!("  - {}", Style::new().yellow().apply_to(path));
        } else {
            println!("{line}");
        }
    }
}

/// Print the banner shown before validating a bundles document
pub fn print_validation_banner(path: &str) {
    println!("Validating template bundles: {path}");
}

/// Print the outcome of a bundles validation
pub fn print_validation_report(report: &ValidationReport) {
    if report.is_ok() {
        println!(
            "{} Template bundles validation passed!",
            Style::new().green().bold().apply_to("✓")
        );
        return;
    }

    println!();
    println!(
        "{} Template bundles validation failed:",
        Style::new().red().bold().apply_to("✗")
    );
    for error in report.errors() {
        println!("  - {error}");
    }
}
