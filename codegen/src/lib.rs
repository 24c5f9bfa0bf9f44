//! schemagen code generator.
//!
//! Reads a classified vocabulary graph from `schemagen-ontology` and emits,
//! per class, three PHP artifacts: a marker interface, a trait declaring the
//! class's own fields, and a model class that aggregates every ancestor's
//! interface and trait and exposes the merged property metadata through
//! static accessors.
//!
//! Generation runs in two passes once every ancestor chain is known. The
//! first pass renders every interface and trait and collects each class's
//! own fields; the second renders the models from the merged field tables.
//! Every artifact is handed to an [`sink::ArtifactSink`].

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod config;
pub mod emit;
pub mod mapping;
pub mod models;
pub mod resolve;
pub mod rules;
pub mod sink;
pub mod traits;

use std::collections::BTreeMap;

use anyhow::{Context, Result};
use schemagen_ontology::ingest::ingest_document;
use schemagen_ontology::{ClassNode, ClassifiedGraph, HierarchyMap, OntologyError};
use serde_json::Value;
use tracing::{debug, info};

use config::GeneratorConfig;
use mapping::{interface_name, trait_name};
use resolve::{FieldBundle, ResolvedClassModel};
use sink::ArtifactSink;

/// Report of what was generated.
#[derive(Debug, Default)]
pub struct GenerationReport {
    /// Number of interfaces generated.
    pub interface_count: usize,
    /// Number of traits generated.
    pub trait_count: usize,
    /// Number of models generated.
    pub model_count: usize,
    /// Number of superseded entities in the source graph.
    pub superseded_count: usize,
    /// Files written, in write order.
    pub files: Vec<String>,
}

impl GenerationReport {
    fn save(&mut self, sink: &mut dyn ArtifactSink, file_name: String, content: &str) -> Result<()> {
        sink.save(&file_name, content)
            .with_context(|| format!("Failed to save {file_name}"))?;
        self.files.push(file_name);
        Ok(())
    }
}

/// Ingests a decoded vocabulary document and generates every artifact.
///
/// # Errors
///
/// Returns an error if the document cannot be ingested or any artifact
/// cannot be generated or saved.
pub fn generate_from_value(
    doc: &Value,
    config: &GeneratorConfig,
    sink: &mut dyn ArtifactSink,
) -> Result<GenerationReport> {
    let graph = ingest_document(doc, &config.namespace).context("Failed to ingest vocabulary")?;
    generate(graph, config, sink)
}

/// Generates the interface, trait and model of every vocabulary class.
///
/// # Errors
///
/// Returns an error if the class hierarchy contains a cycle, in which case
/// nothing is saved, or if the sink fails to save an artifact.
pub fn generate(
    graph: ClassifiedGraph,
    config: &GeneratorConfig,
    sink: &mut dyn ArtifactSink,
) -> Result<GenerationReport> {
    let mut report = GenerationReport {
        superseded_count: graph.superseded().len(),
        ..GenerationReport::default()
    };
    let graph = if config.skip_superseded {
        info!(count = report.superseded_count, "skipping superseded entities");
        graph.without_superseded()
    } else {
        graph
    };

    let ns = &config.namespace;
    let classes: Vec<&ClassNode> = graph
        .classes()
        .values()
        .filter(|c| ns.contains(&c.id))
        .collect();

    // Every ancestor chain is resolved before the first save, so a cycle
    // leaves the sink untouched.
    let hierarchy = HierarchyMap::build(graph.classes(), ns);
    let chains = classes
        .iter()
        .map(|class| -> Result<Vec<String>, OntologyError> {
            let mut chain = vec![class.name.clone()];
            chain.extend(hierarchy.ancestors(&class.name)?);
            Ok(chain)
        })
        .collect::<Result<Vec<_>, _>>()?;

    // 1. Interfaces and traits, collecting each class's own fields
    let mut bundles: BTreeMap<String, FieldBundle> = BTreeMap::new();
    for class in &classes {
        let properties = graph
            .properties_of(&class.id)
            .into_iter()
            .flat_map(|props| props.values());
        let bundle = FieldBundle::new(class, properties, config);
        debug!(class = %bundle.name, fields = bundle.fields.len(), "collected own fields");

        let content = traits::render_trait(&bundle, config);
        report.save(sink, format!("{}.php", trait_name(&bundle.safe_name)), &content)?;
        report.trait_count += 1;

        let content = traits::render_interface(&bundle, config);
        report.save(sink, format!("{}.php", interface_name(&bundle.safe_name)), &content)?;
        report.interface_count += 1;

        bundles.insert(bundle.name.clone(), bundle);
    }

    // 2. Models, from the merged fields of each ancestor chain
    for (class, chain) in classes.iter().zip(chains) {
        let model = ResolvedClassModel::resolve(class, chain, &bundles, config);

        let content = models::render_model(&model, config);
        report.save(sink, format!("{}.php", model.safe_name), &content)?;
        report.model_count += 1;
    }

    info!(
        interfaces = report.interface_count,
        traits = report.trait_count,
        models = report.model_count,
        "generation complete"
    );
    Ok(report)
}
