//! Graph ingestion: `@graph` nodes → classified collections.
//!
//! Every node is classified by each of its type tags:
//!
//! - `rdf:Property` with at least one domain is attached to every class it
//!   declares as its domain; a property without a domain is discarded.
//! - `rdfs:Class` is recorded as a class.
//! - any other tag inside the vocabulary namespace marks an enumerated
//!   member, which is recorded both as a member of that enumeration and as a
//!   class in its own right.
//! - any other tag aborts ingestion.
//!
//! Superseded entities are classified like any other and merely flagged;
//! whether they are kept is decided by the caller through
//! [`ClassifiedGraph::without_superseded`].

use std::collections::{BTreeMap, BTreeSet};

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::OntologyError;
use crate::model::{terms, ClassNode, Entity, Namespace, PropertyNode};

/// A decoded vocabulary document.
#[derive(Debug, Deserialize)]
pub struct Document {
    /// The flattened node sequence.
    #[serde(rename = "@graph", default)]
    pub graph: Option<Vec<Value>>,
}

impl Document {
    /// Decodes a document from its JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`OntologyError::Json`] if the text is not a JSON object and
    /// [`OntologyError::MissingGraph`] if it has no `@graph` sequence.
    pub fn from_json(text: &str) -> Result<Vec<Value>, OntologyError> {
        let doc: Document = serde_json::from_str(text)?;
        doc.graph.ok_or(OntologyError::MissingGraph)
    }
}

/// The three classified collections produced by ingestion.
#[derive(Debug, Clone, Default)]
pub struct ClassifiedGraph {
    classes: BTreeMap<String, ClassNode>,
    properties_by_class: BTreeMap<String, BTreeMap<String, PropertyNode>>,
    members: BTreeMap<String, Vec<String>>,
    superseded: BTreeSet<String>,
}

impl ClassifiedGraph {
    /// Classes keyed by identifier.
    #[must_use]
    pub fn classes(&self) -> &BTreeMap<String, ClassNode> {
        &self.classes
    }

    /// Properties attached to a class, keyed by property identifier.
    #[must_use]
    pub fn properties_of(&self, class_id: &str) -> Option<&BTreeMap<String, PropertyNode>> {
        self.properties_by_class.get(class_id)
    }

    /// Every class → properties attachment.
    #[must_use]
    pub fn properties_by_class(&self) -> &BTreeMap<String, BTreeMap<String, PropertyNode>> {
        &self.properties_by_class
    }

    /// Enumerated members keyed by the enumeration type they instantiate.
    #[must_use]
    pub fn members(&self) -> &BTreeMap<String, Vec<String>> {
        &self.members
    }

    /// Identifiers of every superseded entity encountered.
    #[must_use]
    pub fn superseded(&self) -> &BTreeSet<String> {
        &self.superseded
    }

    /// Drops every superseded class, property attachment and enumerated member.
    #[must_use]
    pub fn without_superseded(mut self) -> Self {
        let gone = &self.superseded;
        self.classes.retain(|id, _| !gone.contains(id));
        for props in self.properties_by_class.values_mut() {
            props.retain(|id, _| !gone.contains(id));
        }
        self.properties_by_class.retain(|_, props| !props.is_empty());
        for ids in self.members.values_mut() {
            ids.retain(|id| !gone.contains(id));
        }
        self.members.retain(|_, ids| !ids.is_empty());
        self
    }
}

/// Ingests a decoded document (an object with a `@graph` sequence).
///
/// # Errors
///
/// Returns [`OntologyError::MissingGraph`] if `doc` has no `@graph` array,
/// or any error from [`ingest_nodes`].
pub fn ingest_document(doc: &Value, ns: &Namespace) -> Result<ClassifiedGraph, OntologyError> {
    let nodes = doc
        .get(terms::GRAPH)
        .and_then(Value::as_array)
        .ok_or(OntologyError::MissingGraph)?;
    ingest_nodes(nodes, ns)
}

/// Classifies every node of a `@graph` sequence.
///
/// # Errors
///
/// Returns [`OntologyError::MalformedNode`] for nodes without `@id`/`@type`
/// and [`OntologyError::Classification`] for a type tag that is neither a
/// property/class marker nor inside `ns`.
pub fn ingest_nodes(nodes: &[Value], ns: &Namespace) -> Result<ClassifiedGraph, OntologyError> {
    let mut graph = ClassifiedGraph::default();

    for (index, node) in nodes.iter().enumerate() {
        let entity = Entity::from_value(index, node)?;
        if entity.is_superseded(ns) {
            warn!(id = %entity.id, "superseded entity encountered");
            graph.superseded.insert(entity.id.clone());
        }

        for type_tag in &entity.types {
            match type_tag.as_str() {
                terms::RDF_PROPERTY => {
                    let property = PropertyNode::from_entity(&entity, ns);
                    if property.domain_includes.is_empty() {
                        debug!(id = %entity.id, "property without domain discarded");
                        continue;
                    }
                    for class_id in &property.domain_includes {
                        graph
                            .properties_by_class
                            .entry(class_id.clone())
                            .or_default()
                            .insert(entity.id.clone(), property.clone());
                    }
                }
                terms::RDFS_CLASS => {
                    graph
                        .classes
                        .insert(entity.id.clone(), ClassNode::from_entity(&entity, ns));
                }
                other if ns.contains(other) => {
                    let ids = graph.members.entry(other.to_string()).or_default();
                    if !ids.contains(&entity.id) {
                        ids.push(entity.id.clone());
                    }
                    graph
                        .classes
                        .insert(entity.id.clone(), ClassNode::from_entity(&entity, ns));
                }
                other => {
                    return Err(OntologyError::Classification {
                        type_tag: other.to_string(),
                        id: entity.id.clone(),
                    });
                }
            }
        }
    }

    debug!(
        classes = graph.classes.len(),
        domains = graph.properties_by_class.len(),
        superseded = graph.superseded.len(),
        "graph classified"
    );
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ns() -> Namespace {
        Namespace::schema_org()
    }

    #[test]
    fn property_attached_to_every_domain() {
        let nodes = vec![json!({
            "@id": "schema:name",
            "@type": "rdf:Property",
            "rdfs:label": "name",
            "schema:domainIncludes": [{ "@id": "schema:Thing" }, { "@id": "schema:Brand" }],
            "schema:rangeIncludes": { "@id": "schema:Text" }
        })];
        let graph = ingest_nodes(&nodes, &ns()).unwrap();
        assert!(graph.properties_of("schema:Thing").unwrap().contains_key("schema:name"));
        assert!(graph.properties_of("schema:Brand").unwrap().contains_key("schema:name"));
    }

    #[test]
    fn property_without_domain_is_discarded() {
        let nodes = vec![json!({
            "@id": "schema:orphan",
            "@type": "rdf:Property",
            "rdfs:label": "orphan"
        })];
        let graph = ingest_nodes(&nodes, &ns()).unwrap();
        assert!(graph.properties_by_class().is_empty());
        assert!(graph.classes().is_empty());
    }

    #[test]
    fn enumerated_member_is_also_a_class() {
        let nodes = vec![
            json!({ "@id": "schema:DayOfWeek", "@type": "rdfs:Class", "rdfs:label": "DayOfWeek" }),
            json!({ "@id": "schema:Monday", "@type": "schema:DayOfWeek", "rdfs:label": "Monday" }),
        ];
        let graph = ingest_nodes(&nodes, &ns()).unwrap();
        assert!(graph.classes().contains_key("schema:Monday"));
        assert_eq!(graph.members()["schema:DayOfWeek"], vec!["schema:Monday"]);
    }

    #[test]
    fn unknown_type_is_fatal() {
        let nodes = vec![json!({ "@id": "schema:X", "@type": "owl:Thing" })];
        match ingest_nodes(&nodes, &ns()) {
            Err(OntologyError::Classification { type_tag, id }) => {
                assert_eq!(type_tag, "owl:Thing");
                assert_eq!(id, "schema:X");
            }
            other => panic!("expected classification error, got {other:?}"),
        }
    }

    #[test]
    fn superseded_entities_are_classified_then_optionally_dropped() {
        let nodes = vec![
            json!({ "@id": "schema:Thing", "@type": "rdfs:Class", "rdfs:label": "Thing" }),
            json!({
                "@id": "schema:Old",
                "@type": "rdfs:Class",
                "rdfs:label": "Old",
                "schema:supersededBy": { "@id": "schema:Thing" }
            }),
            json!({
                "@id": "schema:oldProp",
                "@type": "rdf:Property",
                "rdfs:label": "oldProp",
                "schema:domainIncludes": { "@id": "schema:Thing" },
                "schema:supersededBy": { "@id": "schema:name" }
            }),
        ];
        let graph = ingest_nodes(&nodes, &ns()).unwrap();
        assert_eq!(graph.classes().len(), 2);
        assert_eq!(graph.superseded().len(), 2);

        let current = graph.without_superseded();
        assert_eq!(current.classes().len(), 1);
        assert!(current.properties_of("schema:Thing").is_none());
    }

    #[test]
    fn document_without_graph_is_rejected() {
        assert!(matches!(
            Document::from_json(r#"{"@context": {}}"#),
            Err(OntologyError::MissingGraph)
        ));
        assert!(matches!(
            ingest_document(&json!({ "nodes": [] }), &ns()),
            Err(OntologyError::MissingGraph)
        ));
        assert_eq!(Document::from_json(r#"{"@graph": []}"#).unwrap().len(), 0);
    }
}
