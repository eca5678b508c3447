//! Command-line interface layer: argument parsing, the per-file
//! driver loop, exit-code mapping, and console reporting.

pub mod args;
pub mod exit_status;
pub mod report;
pub mod run;

pub use args::Arguments;
pub use exit_status::ExitStatus;

use crate::revision::GitRevisionSource;

/// Run the CLI against the real git revision source and print the
/// summary. Errors are returned for `main` to report and map to an
/// exit code.
pub fn run_cli(args: Arguments) -> Result<ExitStatus, run::RunError> {
    let summary = run::run(&args, &GitRevisionSource)?;
    report::print(&summary, args.verbose);
    Ok(ExitStatus::Success)
}
