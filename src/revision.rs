//! Access to file content as it exists on another git revision.
//!
//! The driver depends on the [`RevisionSource`] trait rather than on
//! git directly, so the diff pipeline can be exercised in tests with
//! canned bytes instead of a subprocess.

use std::path::Path;
use std::process::Command;

use anyhow::{Context, Result, bail};

/// Fetches the bytes of a repo-relative file at a named revision.
pub trait RevisionSource {
    /// Errors if the path does not exist at `revision`, or the
    /// revision itself is unknown.
    fn fetch(&self, repo_relative_path: &Path, revision: &str) -> Result<Vec<u8>>;
}

/// Production implementation: `git show <revision>:./<path>`.
///
/// The `./` prefix makes git resolve the path relative to the current
/// working directory, matching how discovered files are addressed.
#[derive(Debug, Default)]
pub struct GitRevisionSource;

/// Build the `<revision>:./<path>` spec for `git show`. Path
/// components are joined with `/` regardless of the platform
/// separator, since git specs always use forward slashes.
fn show_spec(repo_relative_path: &Path, revision: &str) -> String {
    let path = repo_relative_path
        .components()
        .filter(|c| !matches!(c, std::path::Component::CurDir))
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/");
    format!("{revision}:./{path}")
}

impl RevisionSource for GitRevisionSource {
    fn fetch(&self, repo_relative_path: &Path, revision: &str) -> Result<Vec<u8>> {
        let spec = show_spec(repo_relative_path, revision);
        let output = Command::new("git")
            .args(["show", &spec])
            .output()
            .context("failed to run git; is it installed and on PATH?")?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            bail!("git show {spec} failed: {}", stderr.trim());
        }

        Ok(output.stdout)
    }
}
