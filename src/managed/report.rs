//! Violation report text

/// Lines of the report shown when managed files were modified
pub fn violation_report(manifest: &str, violations: &[String]) -> Vec<String> {
    let mut lines = vec![
        "ERROR: You are attempting to modify files managed by the template.".to_string(),
        format!(
            "The following files are tracked in {manifest} and changes will be overwritten on the next sync:"
        ),
    ];

    lines.extend(violations.iter().map(|path| format!("  - {path}")));

    lines.extend(
        [
            "",
            "To modify these files permanently:",
            "1. Add the file to the 'exclude' list in the template configuration",
            "2. Run the template sync to update configuration",
            "3. Commit your changes",
            "",
            "If you are performing a template sync update, use 'git commit --no-verify' to bypass this check.",
        ]
        .map(String::from),
    );

    lines
}
