//! Recursive discovery of `.po` catalog files.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use walkdir::WalkDir;

/// Collect every `.po` file under `dir`, at any depth, in sorted path
/// order so batch processing is deterministic.
pub fn find_catalog_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for dirent in WalkDir::new(dir).sort_by_file_name() {
        let dirent =
            dirent.with_context(|| format!("failed to walk directory {}", dir.display()))?;
        let path = dirent.path();
        if dirent.file_type().is_file() && path.extension().is_some_and(|ext| ext == "po") {
            files.push(path.to_path_buf());
        }
    }
    Ok(files)
}
