//! Core entity model types.
//!
//! A vocabulary graph is a flat sequence of JSON-LD nodes. Every node is read
//! into an [`Entity`]; entities tagged as classes or properties are then
//! narrowed into [`ClassNode`] and [`PropertyNode`], which carry only what
//! the generator consumes.

use serde_json::{Map, Value};

use crate::error::OntologyError;
use crate::text::extract_text;

/// Standard vocabulary terms used when reading graph nodes.
pub mod terms {
    /// Node identifier key.
    pub const ID: &str = "@id";
    /// Node type key.
    pub const TYPE: &str = "@type";
    /// Localized literal value key.
    pub const VALUE: &str = "@value";
    /// Top-level graph key.
    pub const GRAPH: &str = "@graph";
    /// `rdf:Property` type marker.
    pub const RDF_PROPERTY: &str = "rdf:Property";
    /// `rdfs:Class` type marker.
    pub const RDFS_CLASS: &str = "rdfs:Class";
    /// `rdfs:label`.
    pub const RDFS_LABEL: &str = "rdfs:label";
    /// `rdfs:comment`.
    pub const RDFS_COMMENT: &str = "rdfs:comment";
    /// `rdfs:subClassOf`.
    pub const RDFS_SUBCLASS_OF: &str = "rdfs:subClassOf";
    /// Local name of the domain-includes term.
    pub const DOMAIN_INCLUDES: &str = "domainIncludes";
    /// Local name of the range-includes term.
    pub const RANGE_INCLUDES: &str = "rangeIncludes";
    /// Local name of the superseded-by term.
    pub const SUPERSEDED_BY: &str = "supersededBy";
}

/// The vocabulary's own namespace, expressed as its compact-IRI prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Namespace {
    prefix: String,
}

impl Namespace {
    /// Creates a namespace from its compact prefix including the colon (e.g. `"schema:"`).
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// The schema.org namespace.
    #[must_use]
    pub fn schema_org() -> Self {
        Self::new("schema:")
    }

    /// Returns the compact prefix, colon included.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Returns true if `id` lives inside this namespace.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        id.starts_with(&self.prefix)
    }

    /// Strips the namespace prefix, or returns `None` for foreign identifiers.
    #[must_use]
    pub fn local_name<'a>(&self, id: &'a str) -> Option<&'a str> {
        id.strip_prefix(self.prefix.as_str())
    }

    /// Expands a local name into a compact identifier (`domainIncludes` → `schema:domainIncludes`).
    #[must_use]
    pub fn term(&self, local: &str) -> String {
        format!("{}{local}", self.prefix)
    }
}

impl Default for Namespace {
    fn default() -> Self {
        Self::schema_org()
    }
}

/// A raw graph node: identifier, type tags and an open attribute set.
#[derive(Debug, Clone)]
pub struct Entity {
    /// Namespaced identifier, unique within the graph.
    pub id: String,
    /// Type tags, coerced to a list.
    pub types: Vec<String>,
    /// The type tag when `@type` was a single string rather than a list.
    pub single_type: Option<String>,
    /// Every other key of the node.
    pub attributes: Map<String, Value>,
}

impl Entity {
    /// Reads a graph node.
    ///
    /// # Errors
    ///
    /// Returns [`OntologyError::MalformedNode`] if the node is not an object,
    /// has no string `@id`, or has no `@type`.
    pub fn from_value(index: usize, value: &Value) -> Result<Self, OntologyError> {
        let malformed = |reason: &str| OntologyError::MalformedNode {
            index,
            reason: reason.to_string(),
        };
        let object = value.as_object().ok_or_else(|| malformed("not an object"))?;
        let id = object
            .get(terms::ID)
            .and_then(Value::as_str)
            .ok_or_else(|| malformed("missing `@id`"))?
            .to_string();
        let single_type = object
            .get(terms::TYPE)
            .and_then(Value::as_str)
            .map(str::to_string);
        let types = match object.get(terms::TYPE) {
            Some(Value::String(t)) => vec![t.clone()],
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect(),
            _ => Vec::new(),
        };
        if types.is_empty() {
            return Err(OntologyError::MalformedNode {
                index,
                reason: format!("entity `{id}` has no `@type`"),
            });
        }
        let attributes = object
            .iter()
            .filter(|(key, _)| key.as_str() != terms::ID && key.as_str() != terms::TYPE)
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        Ok(Self {
            id,
            types,
            single_type,
            attributes,
        })
    }

    /// Returns a named attribute.
    #[must_use]
    pub fn attribute(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }

    /// Returns the references held by a named attribute (see [`references`]).
    #[must_use]
    pub fn references(&self, key: &str) -> Vec<String> {
        references(self.attribute(key))
    }

    /// Returns true if the entity carries a non-empty superseded-by marker.
    #[must_use]
    pub fn is_superseded(&self, ns: &Namespace) -> bool {
        self.attribute(&ns.term(terms::SUPERSEDED_BY))
            .is_some_and(|v| !is_empty_value(v))
    }
}

/// Normalizes a reference-valued attribute to a list of identifiers.
///
/// The attribute may hold a single `{"@id": ...}` object, a list of them, or
/// bare identifier strings. Anything else contributes nothing.
#[must_use]
pub fn references(value: Option<&Value>) -> Vec<String> {
    fn one(value: &Value) -> Option<String> {
        match value {
            Value::String(s) => Some(s.clone()),
            Value::Object(map) => map.get(terms::ID).and_then(Value::as_str).map(str::to_string),
            _ => None,
        }
    }
    match value {
        Some(Value::Array(items)) => items.iter().filter_map(one).collect(),
        Some(other) => one(other).into_iter().collect(),
        None => Vec::new(),
    }
}

fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        Value::Number(_) => false,
    }
}

/// A vocabulary class (or enumerated member acting as one).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassNode {
    /// Namespaced identifier.
    pub id: String,
    /// The entity's type tag when `@type` was a single string. A list-typed
    /// entity never gains its type as a parent.
    pub single_type: Option<String>,
    /// Class name, taken from the label rather than the identifier.
    pub name: String,
    /// Description with breaks collapsed to spaces.
    pub description: String,
    /// Description as published (entities decoded, breaks kept, trailing newlines trimmed).
    pub raw_description: String,
    /// Identifiers from `rdfs:subClassOf`, in declaration order.
    pub subclass_of: Vec<String>,
    /// Whether the entity is superseded.
    pub superseded: bool,
}

impl ClassNode {
    /// Narrows an entity into a class node.
    #[must_use]
    pub fn from_entity(entity: &Entity, ns: &Namespace) -> Self {
        let comment = entity.attribute(terms::RDFS_COMMENT);
        Self {
            id: entity.id.clone(),
            single_type: entity.single_type.clone(),
            name: extract_text(entity.attribute(terms::RDFS_LABEL), true),
            description: extract_text(comment, true),
            raw_description: extract_text(comment, false)
                .trim_end_matches('\n')
                .to_string(),
            subclass_of: entity.references(terms::RDFS_SUBCLASS_OF),
            superseded: entity.is_superseded(ns),
        }
    }
}

/// A vocabulary property attached to one or more classes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyNode {
    /// Namespaced identifier.
    pub id: String,
    /// Property handle, taken from the label.
    pub handle: String,
    /// Description with breaks collapsed to spaces.
    pub description: String,
    /// Identifiers of the declared range types, in declaration order.
    pub range_includes: Vec<String>,
    /// Identifiers of every class declaring this property.
    pub domain_includes: Vec<String>,
    /// Whether the entity is superseded.
    pub superseded: bool,
}

impl PropertyNode {
    /// Narrows an entity into a property node.
    #[must_use]
    pub fn from_entity(entity: &Entity, ns: &Namespace) -> Self {
        Self {
            id: entity.id.clone(),
            handle: extract_text(entity.attribute(terms::RDFS_LABEL), true),
            description: extract_text(entity.attribute(terms::RDFS_COMMENT), true),
            range_includes: entity.references(&ns.term(terms::RANGE_INCLUDES)),
            domain_includes: entity.references(&ns.term(terms::DOMAIN_INCLUDES)),
            superseded: entity.is_superseded(ns),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn single_reference_is_normalized_to_list() {
        let single = json!({ "@id": "schema:Thing" });
        assert_eq!(references(Some(&single)), vec!["schema:Thing"]);

        let many = json!([{ "@id": "schema:A" }, { "@id": "schema:B" }]);
        assert_eq!(references(Some(&many)), vec!["schema:A", "schema:B"]);

        assert!(references(None).is_empty());
        assert!(references(Some(&json!(42))).is_empty());
    }

    #[test]
    fn entity_type_scalar_or_list() {
        let scalar = Entity::from_value(0, &json!({ "@id": "schema:Thing", "@type": "rdfs:Class" }))
            .unwrap();
        assert_eq!(scalar.types, vec!["rdfs:Class"]);
        assert_eq!(scalar.single_type.as_deref(), Some("rdfs:Class"));

        let list = json!({ "@id": "schema:Float", "@type": ["rdfs:Class", "schema:DataType"] });
        let list = Entity::from_value(0, &list).unwrap();
        assert_eq!(list.types, vec!["rdfs:Class", "schema:DataType"]);
        assert_eq!(list.single_type, None);
    }

    #[test]
    fn entity_without_type_is_malformed() {
        let node = json!({ "@id": "schema:Thing" });
        assert!(matches!(
            Entity::from_value(3, &node),
            Err(OntologyError::MalformedNode { index: 3, .. })
        ));
    }

    #[test]
    fn class_node_reads_label_not_identifier() {
        let ns = Namespace::schema_org();
        let node = json!({
            "@id": "schema:3DModel",
            "@type": "rdfs:Class",
            "rdfs:label": { "@language": "en", "@value": "3DModel" },
            "rdfs:comment": "A 3D model.\n",
            "schema:supersededBy": { "@id": "schema:Other" }
        });
        let class = ClassNode::from_entity(&Entity::from_value(0, &node).unwrap(), &ns);
        assert_eq!(class.name, "3DModel");
        assert_eq!(class.description, "A 3D model. ");
        assert_eq!(class.raw_description, "A 3D model.");
        assert!(class.superseded);
        assert!(class.subclass_of.is_empty());
    }

    #[test]
    fn namespace_local_name() {
        let ns = Namespace::schema_org();
        assert_eq!(ns.local_name("schema:Thing"), Some("Thing"));
        assert_eq!(ns.local_name("rdfs:Class"), None);
        assert_eq!(ns.term("rangeIncludes"), "schema:rangeIncludes");
    }
}
