//! The per-file driver loop: discover catalogs, fetch the comparison
//! revision, diff, and rewrite each file in place.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::args::Arguments;
use super::exit_status::ExitStatus;
use crate::catalog::{parse, serialize};
use crate::diff::diff;
use crate::revision::RevisionSource;
use crate::scanner::find_catalog_files;

/// What happened to one rewritten catalog file.
#[derive(Debug)]
pub struct FileOutcome {
    pub path: PathBuf,
    /// Number of entries kept in the rewritten delta.
    pub kept_entries: usize,
}

/// Outcome of a successful batch run.
#[derive(Debug)]
pub struct RunSummary {
    pub branch: String,
    pub files: Vec<FileOutcome>,
}

/// Failures the driver distinguishes so `main` can map them to
/// different exit codes.
#[derive(Debug)]
pub enum RunError {
    /// Bad invocation; nothing was touched.
    Usage(String),
    /// A fetch/parse/write step failed for one file. Files earlier in
    /// the batch were already rewritten; this file and later ones are
    /// untouched.
    File { path: PathBuf, source: anyhow::Error },
}

impl RunError {
    pub fn exit_status(&self) -> ExitStatus {
        match self {
            RunError::Usage(_) => ExitStatus::Error,
            RunError::File { .. } => ExitStatus::Failure,
        }
    }
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunError::Usage(message) => write!(f, "{message}"),
            RunError::File { path, source } => {
                write!(f, "failed to process {}: {source:#}", path.display())
            }
        }
    }
}

impl std::error::Error for RunError {}

/// Validate the invocation, then rewrite every discovered `.po` file
/// to its delta against `args.branch`.
///
/// Fail-fast: the first per-file error aborts the rest of the batch.
/// A failing file is never left half-written since the new content is
/// serialized to memory before the file is overwritten.
pub fn run(args: &Arguments, revisions: &dyn RevisionSource) -> Result<RunSummary, RunError> {
    if args.dir.is_absolute() {
        return Err(RunError::Usage(format!(
            "absolute paths are not supported; specify --dir relative to the git repository root (got {})",
            args.dir.display()
        )));
    }
    if !args.dir.is_dir() {
        return Err(RunError::Usage(format!(
            "directory {} specified under --dir is not a valid directory",
            args.dir.display()
        )));
    }

    let files = find_catalog_files(&args.dir)
        .map_err(|err| RunError::Usage(format!("{err:#}")))?;
    if files.is_empty() {
        return Err(RunError::Usage(format!(
            "no .po files found in directory {}",
            args.dir.display()
        )));
    }

    let mut outcomes = Vec::with_capacity(files.len());
    for path in files {
        let kept_entries =
            process_file(&path, &args.branch, revisions).map_err(|source| RunError::File {
                path: path.clone(),
                source,
            })?;
        outcomes.push(FileOutcome { path, kept_entries });
    }

    Ok(RunSummary {
        branch: args.branch.clone(),
        files: outcomes,
    })
}

/// Diff one catalog against its version on `branch` and overwrite it
/// with the delta. Returns the number of entries kept.
fn process_file(path: &Path, branch: &str, revisions: &dyn RevisionSource) -> Result<usize> {
    let working_bytes =
        fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    let branch_bytes = revisions
        .fetch(path, branch)
        .with_context(|| format!("failed to fetch {} at {branch}", path.display()))?;

    let working = parse(&working_bytes)
        .with_context(|| format!("failed to parse {}", path.display()))?;
    let branch_catalog = parse(&branch_bytes)
        .with_context(|| format!("failed to parse {} at {branch}", path.display()))?;

    let delta = diff(&working, &branch_catalog);

    // Serialize fully before touching the file so a failure can never
    // leave a truncated catalog behind.
    let serialized = serialize(&delta);
    fs::write(path, serialized)
        .with_context(|| format!("failed to write {}", path.display()))?;

    Ok(delta.entries.len())
}
