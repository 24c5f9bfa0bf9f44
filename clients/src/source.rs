//! Vocabulary sources: local files, remote documents and the release feed.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use schemagen_codegen::config::UNKNOWN_RELEASE;
use schemagen_codegen::sink::write_file;
use serde::Deserialize;
use tracing::{info, warn};

/// Latest published schema.org vocabulary.
pub const DEFAULT_SOURCE: &str = "https://schema.org/version/latest/schemaorg-current-https.jsonld";
/// GitHub releases feed of the schema.org repository.
pub const RELEASES_FEED: &str = "https://api.github.com/repos/schemaorg/schemaorg/releases";
/// schema.org class tree document.
pub const TREE_URL: &str = "https://schema.org/docs/tree.jsonld";
/// File name the tree document is stored under.
pub const TREE_FILE: &str = "tree.jsonld";

/// One entry of the releases feed.
#[derive(Debug, Deserialize)]
pub struct Release {
    /// Release tag, e.g. `v29.0`.
    pub tag_name: String,
}

/// Returns true if `source` names an HTTP(S) resource.
#[must_use]
pub fn is_remote(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

/// Reads the vocabulary document from a URL or a local file.
///
/// # Errors
///
/// Returns an error if the document cannot be fetched or read.
pub fn load_source(source: &str) -> Result<String> {
    if is_remote(source) {
        info!(url = source, "fetching vocabulary");
        fetch_text(source)
    } else {
        info!(path = source, "reading vocabulary");
        fs::read_to_string(source).with_context(|| format!("Failed to read {source}"))
    }
}

/// Fetches `url` and returns the response body.
///
/// # Errors
///
/// Returns an error on connection failure or a non-success status.
pub fn fetch_text(url: &str) -> Result<String> {
    let client = reqwest::blocking::Client::builder()
        .user_agent(format!("schemagen/{}", env!("CARGO_PKG_VERSION")))
        .build()?;

    let response = client
        .get(url)
        .send()
        .with_context(|| format!("Failed to fetch {url}"))?
        .error_for_status()
        .with_context(|| format!("Failed to fetch {url}"))?;

    response
        .text()
        .with_context(|| format!("Failed to read response body from {url}"))
}

/// Picks the newest release's tag from a releases feed body.
///
/// # Errors
///
/// Returns an error if the body is not a JSON array of releases.
pub fn latest_release_label(feed: &str) -> Result<Option<String>> {
    let releases: Vec<Release> =
        serde_json::from_str(feed).context("Failed to parse releases feed")?;
    Ok(releases.into_iter().next().map(|r| r.tag_name))
}

/// Looks up the current release label, falling back to `unknown`.
#[must_use]
pub fn lookup_release(feed_url: &str) -> String {
    match fetch_text(feed_url).and_then(|body| latest_release_label(&body)) {
        Ok(Some(label)) => label,
        Ok(None) => {
            warn!(url = feed_url, "releases feed is empty");
            UNKNOWN_RELEASE.to_string()
        }
        Err(err) => {
            warn!(url = feed_url, error = %format!("{err:#}"), "release lookup failed");
            UNKNOWN_RELEASE.to_string()
        }
    }
}

/// Where the tree document is stored: next to `output_dir`.
#[must_use]
pub fn tree_path(output_dir: &Path) -> PathBuf {
    output_dir
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .join(TREE_FILE)
}

/// Downloads the tree document next to `output_dir`.
///
/// # Errors
///
/// Returns an error if the document cannot be fetched or written.
pub fn fetch_tree(output_dir: &Path) -> Result<PathBuf> {
    let body = fetch_text(TREE_URL)?;
    let path = tree_path(output_dir);
    write_file(&path, &body)?;
    info!(path = %path.display(), "tree document written");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_sources_are_recognized() {
        assert!(is_remote(DEFAULT_SOURCE));
        assert!(is_remote("http://localhost/schema.jsonld"));
        assert!(!is_remote("vocab/schemaorg.jsonld"));
    }

    #[test]
    fn newest_release_is_first_in_feed() {
        let feed = r#"[{"tag_name": "v29.1", "name": "x"}, {"tag_name": "v29.0"}]"#;
        assert_eq!(latest_release_label(feed).unwrap().as_deref(), Some("v29.1"));
        assert_eq!(latest_release_label("[]").unwrap(), None);
        assert!(latest_release_label("{\"message\": \"rate limited\"}").is_err());
    }

    #[test]
    fn local_source_is_read_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vocab.jsonld");
        fs::write(&path, "{\"@graph\": []}").unwrap();
        assert_eq!(load_source(path.to_str().unwrap()).unwrap(), "{\"@graph\": []}");
        assert!(load_source(dir.path().join("missing").to_str().unwrap()).is_err());
    }

    #[test]
    fn tree_lands_beside_output_dir() {
        assert_eq!(tree_path(Path::new("dist/jsonld")), Path::new("dist/tree.jsonld"));
    }
}
