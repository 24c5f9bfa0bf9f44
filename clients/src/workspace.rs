//! Output directory preparation.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;
use walkdir::WalkDir;

/// Empties `dir` (children before their parents, `dir` itself kept) and
/// creates it if absent.
///
/// # Errors
///
/// Returns an error naming the path that could not be listed, removed or
/// created.
pub fn prepare_output_dir(dir: &Path) -> Result<()> {
    if dir.exists() {
        for entry in WalkDir::new(dir).min_depth(1).contents_first(true) {
            let entry =
                entry.with_context(|| format!("Failed to list directory: {}", dir.display()))?;
            let path = entry.path();
            if entry.file_type().is_dir() {
                fs::remove_dir(path)
                    .with_context(|| format!("Failed to remove directory: {}", path.display()))?;
            } else {
                fs::remove_file(path)
                    .with_context(|| format!("Failed to remove file: {}", path.display()))?;
            }
        }
        debug!(dir = %dir.display(), "output directory emptied");
    }
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;
    Ok(())
}
