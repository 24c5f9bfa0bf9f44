//! Typed entity model for flattened JSON-LD vocabularies.
//!
//! The `schemagen-ontology` crate turns the `@graph` array of a vocabulary
//! document (schema.org publishes one per release) into classified, typed
//! collections and resolves the class hierarchy that the code generator
//! walks.
//!
//! # Entry Point
//!
//! ```
//! use schemagen_ontology::{ingest, HierarchyMap, Namespace};
//! use serde_json::json;
//!
//! let doc = json!({
//!     "@graph": [
//!         { "@id": "schema:Thing", "@type": "rdfs:Class", "rdfs:label": "Thing" },
//!         {
//!             "@id": "schema:Article",
//!             "@type": "rdfs:Class",
//!             "rdfs:label": "Article",
//!             "rdfs:subClassOf": { "@id": "schema:Thing" }
//!         }
//!     ]
//! });
//! let ns = Namespace::schema_org();
//! let graph = ingest::ingest_document(&doc, &ns).unwrap();
//! let tree = HierarchyMap::build(graph.classes(), &ns);
//! assert_eq!(tree.ancestors("Article").unwrap(), vec!["Thing".to_string()]);
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod error;
pub mod hierarchy;
pub mod ingest;
pub mod model;
pub mod text;

pub use error::OntologyError;
pub use hierarchy::HierarchyMap;
pub use ingest::{ClassifiedGraph, Document};
pub use model::{ClassNode, Entity, Namespace, PropertyNode};
