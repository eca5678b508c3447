//! CLI argument definitions using clap's derive API.
//!
//! Single default command, no subcommands: point the tool at a
//! directory of catalogs and name the branch to compare against. Both
//! options also bind to `PODIFF_`-prefixed environment variables.

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(
    name = "podiff",
    author,
    version,
    about = "Rewrites each .po catalog to the delta against another branch"
)]
pub struct Arguments {
    /// Directory where locales are located, relative to the git
    /// repository root
    #[arg(short, long, env = "PODIFF_DIR", default_value = "./")]
    pub dir: PathBuf,

    /// Branch to compare the PO files with
    #[arg(short, long, env = "PODIFF_BRANCH", default_value = "master")]
    pub branch: String,

    /// Print a progress line per processed file
    #[arg(short, long)]
    pub verbose: bool,
}
