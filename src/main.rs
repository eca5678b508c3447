use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use podiff::cli::Arguments;

fn main() -> ExitCode {
    let args = Arguments::parse();

    match podiff::cli::run_cli(args) {
        Ok(status) => status.into(),
        Err(err) => {
            eprintln!("{} {err}", "error:".bold().red());
            err.exit_status().into()
        }
    }
}
