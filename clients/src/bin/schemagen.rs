//! `schemagen`: generates PHP interfaces, traits and models from a JSON-LD vocabulary.
//!
//! Loads the vocabulary (schema.org by default), empties the output
//! directory and writes one interface, one trait and one model per class.
//!
//! **Usage:**
//! ```
//! schemagen [source] [output_dir] [--skip-superseded] [--craft-version <3|4>] [--release <label>] [--fetch-tree]
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use schemagen_clients::source::{self, DEFAULT_SOURCE, RELEASES_FEED};
use schemagen_clients::workspace::prepare_output_dir;
use schemagen_codegen::config::{Dialect, GeneratorConfig};
use schemagen_codegen::generate;
use schemagen_codegen::sink::DirectorySink;
use schemagen_ontology::ingest::ingest_nodes;
use schemagen_ontology::Document;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Generate PHP sources from a JSON-LD vocabulary.
#[derive(Parser)]
#[command(
    name = "schemagen",
    about = "Generate PHP interfaces, traits and models from a JSON-LD vocabulary"
)]
struct Args {
    /// Vocabulary document: a URL or a local file path.
    #[arg(default_value = DEFAULT_SOURCE)]
    source: String,

    /// Output directory for generated sources. Emptied before generation.
    #[arg(default_value = "dist/jsonld")]
    output_dir: PathBuf,

    /// Leave out superseded classes and properties.
    #[arg(short, long)]
    skip_superseded: bool,

    /// Craft CMS major version to target.
    #[arg(short, long, default_value_t = 3, value_parser = clap::value_parser!(u8).range(3..=4))]
    craft_version: u8,

    /// Release label for generated headers. Looked up from the releases feed when absent.
    #[arg(long)]
    release: Option<String>,

    /// Also download the vocabulary tree document next to the output directory.
    #[arg(long)]
    fetch_tree: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    let dialect = Dialect::from_version(args.craft_version)
        .with_context(|| format!("Unsupported Craft version: {}", args.craft_version))?;
    let release = args
        .release
        .unwrap_or_else(|| source::lookup_release(RELEASES_FEED));
    info!(release = %release, "vocabulary release");

    let config = GeneratorConfig {
        release,
        skip_superseded: args.skip_superseded,
        dialect,
        ..GeneratorConfig::default()
    };

    let text = source::load_source(&args.source)?;
    let nodes = Document::from_json(&text).context("Failed to parse vocabulary")?;
    info!(nodes = nodes.len(), "vocabulary parsed");
    let graph = ingest_nodes(&nodes, &config.namespace).context("Failed to ingest vocabulary")?;

    prepare_output_dir(&args.output_dir)?;
    if args.fetch_tree {
        source::fetch_tree(&args.output_dir)?;
    }

    let mut sink = DirectorySink::new(&args.output_dir);
    let report = generate(graph, &config, &mut sink)?;

    info!(
        files = report.files.len(),
        superseded = report.superseded_count,
        dir = %args.output_dir.display(),
        "done"
    );
    Ok(())
}
