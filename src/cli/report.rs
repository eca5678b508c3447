//! Console output for a finished run.
//!
//! Separate from the driver so the library surface stays free of
//! printing side effects.

use colored::Colorize;

use super::run::RunSummary;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Print the run summary to stdout. With `verbose`, one line per
/// rewritten file comes first.
pub fn print(summary: &RunSummary, verbose: bool) {
    if verbose {
        for outcome in &summary.files {
            let noun = if outcome.kept_entries == 1 {
                "entry differs"
            } else {
                "entries differ"
            };
            println!(
                "{} {}: {} {}",
                SUCCESS_MARK.green(),
                outcome.path.display(),
                outcome.kept_entries.to_string().bold(),
                noun
            );
        }
    }

    println!(
        "{} diffed {} catalog file(s) against {}",
        SUCCESS_MARK.green(),
        summary.files.len().to_string().bold(),
        summary.branch.cyan()
    );
}
