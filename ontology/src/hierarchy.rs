//! Class hierarchy: name → direct parents, and the ancestor walk.
//!
//! The hierarchy is a DAG. A class may have several `rdfs:subClassOf`
//! parents, and an enumerated member whose single `@type` tag is itself a
//! vocabulary class gains that class as one more parent.

use std::collections::{BTreeMap, HashSet};

use crate::error::OntologyError;
use crate::model::{ClassNode, Namespace};

/// Class name → ordered direct parent names. Immutable once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HierarchyMap {
    parents: BTreeMap<String, Vec<String>>,
}

impl HierarchyMap {
    /// Builds the map from classified classes.
    ///
    /// Only classes whose identifier lives in `ns` are keyed. Parents outside
    /// `ns` are dropped. A namespaced single type tag is added after the
    /// declared parents; list-typed classes get no type edge.
    #[must_use]
    pub fn build(classes: &BTreeMap<String, ClassNode>, ns: &Namespace) -> Self {
        let mut parents = BTreeMap::new();
        for class in classes.values().filter(|c| ns.contains(&c.id)) {
            let mut direct: Vec<String> = class
                .subclass_of
                .iter()
                .filter_map(|id| ns.local_name(id))
                .map(str::to_string)
                .collect();
            direct.extend(
                class
                    .single_type
                    .as_deref()
                    .and_then(|t| ns.local_name(t))
                    .map(str::to_string),
            );
            parents.insert(class.name.clone(), direct);
        }
        Self { parents }
    }

    /// Builds a map directly from `(class, parents)` edges.
    pub fn from_edges<I, S>(edges: I) -> Self
    where
        I: IntoIterator<Item = (S, Vec<S>)>,
        S: Into<String>,
    {
        Self {
            parents: edges
                .into_iter()
                .map(|(name, ps)| (name.into(), ps.into_iter().map(Into::into).collect()))
                .collect(),
        }
    }

    /// Direct parents of `name`; empty for unknown classes.
    #[must_use]
    pub fn parents(&self, name: &str) -> &[String] {
        self.parents.get(name).map(Vec::as_slice).unwrap_or_default()
    }

    /// Every transitive ancestor of `name`, depth-first pre-order.
    ///
    /// Each direct parent is emitted, then its own lineage is fully walked,
    /// before the next sibling. Later duplicates are dropped. Unknown classes
    /// end the walk along their branch. `name` itself is never included.
    ///
    /// # Errors
    ///
    /// Returns [`OntologyError::HierarchyCycle`] if a class is reached again
    /// while its own lineage is still being walked.
    pub fn ancestors(&self, name: &str) -> Result<Vec<String>, OntologyError> {
        let mut out = Vec::new();
        let mut seen = HashSet::new();
        let mut path = vec![name.to_string()];
        self.walk(name, &mut path, &mut seen, &mut out)?;
        Ok(out)
    }

    fn walk(
        &self,
        name: &str,
        path: &mut Vec<String>,
        seen: &mut HashSet<String>,
        out: &mut Vec<String>,
    ) -> Result<(), OntologyError> {
        for parent in self.parents(name) {
            if path.iter().any(|p| p == parent) {
                let mut cycle = path.clone();
                cycle.push(parent.clone());
                return Err(OntologyError::HierarchyCycle {
                    class: parent.clone(),
                    path: cycle,
                });
            }
            // A completed lineage contributes nothing new.
            if !seen.insert(parent.clone()) {
                continue;
            }
            out.push(parent.clone());
            path.push(parent.clone());
            self.walk(parent, path, seen, out)?;
            path.pop();
        }
        Ok(())
    }
}
