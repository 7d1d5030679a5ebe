//! Report formatting and printing utilities.
//!
//! This module is separate from the core library logic to allow veneer
//! to be used as a library without printing side effects.

use colored::Colorize;

use crate::installer::InstallSummary;

/// Success mark for consistent output formatting
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Print the outcome of an install run.
///
/// Reports the three path lists in processing order; when the run touched
/// nothing at all, prints a single neutral line instead.
pub fn print_install_summary(summary: &InstallSummary) {
    if summary.is_empty() {
        println!("No files updated.");
        return;
    }

    print_group("Created", &summary.created);
    print_group("Updated", &summary.updated);
    print_group("Skipped", &summary.skipped);

    println!(
        "{} {} created, {} updated, {} skipped.",
        SUCCESS_MARK.green(),
        summary.created.len(),
        summary.updated.len(),
        summary.skipped.len()
    );
}

fn print_group(label: &str, paths: &[std::path::PathBuf]) {
    if paths.is_empty() {
        return;
    }
    println!("{}:", label.bold());
    for path in paths {
        println!("  {}", path.display().to_string().dimmed());
    }
}
