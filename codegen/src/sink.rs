//! Persistence of rendered artifacts.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Receives every rendered artifact, once each.
pub trait ArtifactSink {
    /// Stores `content` under the relative `file_name`.
    ///
    /// # Errors
    ///
    /// Returns an error if the artifact cannot be stored.
    fn save(&mut self, file_name: &str, content: &str) -> Result<()>;
}

/// Writes artifacts into a directory.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    root: PathBuf,
}

impl DirectorySink {
    /// Creates a sink rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The output directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl ArtifactSink for DirectorySink {
    fn save(&mut self, file_name: &str, content: &str) -> Result<()> {
        write_file(&self.root.join(file_name), content)
    }
}

/// Writes a text file, creating parent directories as needed.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or the file cannot be written.
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::write(path, content).with_context(|| format!("Failed to write file: {}", path.display()))?;
    Ok(())
}

/// Keeps artifacts in memory, ordered by file name.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    files: BTreeMap<String, String>,
}

impl MemorySink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a stored artifact.
    #[must_use]
    pub fn get(&self, file_name: &str) -> Option<&str> {
        self.files.get(file_name).map(String::as_str)
    }

    /// Every stored artifact.
    #[must_use]
    pub fn files(&self) -> &BTreeMap<String, String> {
        &self.files
    }
}

impl ArtifactSink for MemorySink {
    fn save(&mut self, file_name: &str, content: &str) -> Result<()> {
        self.files.insert(file_name.to_string(), content.to_string());
        Ok(())
    }
}
