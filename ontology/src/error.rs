//! Errors raised while ingesting a vocabulary graph or resolving its hierarchy.

use thiserror::Error;

/// Fatal ingestion and resolution errors.
///
/// Missing descriptions, ranges or parents are not errors: they degrade to
/// empty values. Only conditions that make the generated output unsafe to
/// ship are represented here.
#[derive(Debug, Error)]
pub enum OntologyError {
    /// The document is not an object with a `@graph` sequence.
    #[error("unrecognized data structure: document has no `@graph` sequence")]
    MissingGraph,
    /// A graph node cannot be read as an entity.
    #[error("malformed graph node at index {index}: {reason}")]
    MalformedNode {
        /// Position of the node in the `@graph` sequence.
        index: usize,
        /// What is wrong with the node.
        reason: String,
    },
    /// A type tag is neither a property/class marker nor inside the vocabulary namespace.
    #[error("cannot handle type `{type_tag}` on entity `{id}`")]
    Classification {
        /// The offending type tag.
        type_tag: String,
        /// Identifier of the entity carrying it.
        id: String,
    },
    /// The class hierarchy loops back onto itself.
    #[error("class hierarchy cycle at `{class}`: {}", path.join(" -> "))]
    HierarchyCycle {
        /// The class reached twice on the same path.
        class: String,
        /// The depth-first path that closed the cycle.
        path: Vec<String>,
    },
    /// The document is not valid JSON.
    #[error("failed to decode vocabulary document: {0}")]
    Json(#[from] serde_json::Error),
}
