//! Property resolution: own fields per class, and the merged per-class model.
//!
//! Each class contributes a [`FieldBundle`] of the properties it declares
//! itself. A class's full property table is the union of its own bundle and
//! every ancestor's bundle, merged by handle and sorted, so multiple
//! inheritance is plain data merging.

use std::collections::BTreeMap;

use schemagen_ontology::{ClassNode, Namespace, PropertyNode};

use crate::config::GeneratorConfig;
use crate::mapping::{derive_safe_name, php_types};
use crate::rules::{google_fields, GoogleFields};

/// A property ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedProperty {
    /// Field/accessor key.
    pub handle: String,
    /// Description with breaks collapsed.
    pub description: String,
    /// Range type names with the namespace prefix stripped.
    pub range_types: Vec<String>,
    /// Range types with scalars mapped to PHP primitives.
    pub php_types: Vec<String>,
}

impl ResolvedProperty {
    /// The `|`-joined PHP type union.
    #[must_use]
    pub fn type_union(&self) -> String {
        self.php_types.join("|")
    }
}

/// Compiles a property node into its rendered form.
///
/// Range references outside `ns` are dropped.
#[must_use]
pub fn compile_field(property: &PropertyNode, ns: &Namespace) -> ResolvedProperty {
    let range_types: Vec<String> = property
        .range_includes
        .iter()
        .filter_map(|id| ns.local_name(id))
        .map(str::to_string)
        .collect();
    ResolvedProperty {
        handle: property.handle.clone(),
        description: property.description.clone(),
        php_types: php_types(&range_types),
        range_types,
    }
}

/// The properties a class declares itself, plus what is needed to render
/// its interface and trait.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldBundle {
    /// Class name.
    pub name: String,
    /// Generated class name.
    pub safe_name: String,
    /// Description with breaks collapsed.
    pub description: String,
    /// Scope URL.
    pub scope: String,
    /// Own properties, sorted by handle.
    pub fields: Vec<ResolvedProperty>,
}

impl FieldBundle {
    /// Builds the bundle for `class` from the properties attached to it.
    pub fn new<'a, I>(class: &ClassNode, properties: I, config: &GeneratorConfig) -> Self
    where
        I: IntoIterator<Item = &'a PropertyNode>,
    {
        let mut fields: Vec<ResolvedProperty> = properties
            .into_iter()
            .map(|p| compile_field(p, &config.namespace))
            .collect();
        fields.sort_by(|a, b| a.handle.cmp(&b.handle));
        Self {
            name: class.name.clone(),
            safe_name: derive_safe_name(&class.name, &config.safe_name_prefix),
            description: class.description.clone(),
            scope: config.scope(&class.name),
            fields,
        }
    }
}

/// Merges the own properties of every class in `chain`, in chain order.
///
/// The first property seen for a handle is kept. The result is sorted by
/// handle (ordinal, case-sensitive), independent of `bundles` ordering.
#[must_use]
pub fn resolve_properties_for_class(
    chain: &[String],
    bundles: &BTreeMap<String, FieldBundle>,
) -> Vec<ResolvedProperty> {
    let mut merged: BTreeMap<&str, &ResolvedProperty> = BTreeMap::new();
    for fields in chain.iter().filter_map(|name| bundles.get(name)) {
        for field in &fields.fields {
            merged.entry(field.handle.as_str()).or_insert(field);
        }
    }
    merged.into_values().cloned().collect()
}

/// Everything needed to render one model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedClassModel {
    /// Class name.
    pub name: String,
    /// Generated class name.
    pub safe_name: String,
    /// Description with breaks collapsed.
    pub description: String,
    /// Description as published.
    pub raw_description: String,
    /// Scope URL.
    pub scope: String,
    /// Ancestor chain, self first.
    pub ancestors: Vec<String>,
    /// Generated class names of the ancestor chain, self first.
    pub ancestor_safe_names: Vec<String>,
    /// Google field rules for the chain.
    pub google: GoogleFields,
    /// Every inherited and own property, sorted by handle.
    pub properties: Vec<ResolvedProperty>,
}

impl ResolvedClassModel {
    /// Resolves the model of `class` given its ancestor chain (self first)
    /// and the own-field bundles of every class.
    #[must_use]
    pub fn resolve(
        class: &ClassNode,
        chain: Vec<String>,
        bundles: &BTreeMap<String, FieldBundle>,
        config: &GeneratorConfig,
    ) -> Self {
        let properties = resolve_properties_for_class(&chain, bundles);
        let google = google_fields(&chain);
        let ancestor_safe_names = chain
            .iter()
            .map(|name| derive_safe_name(name, &config.safe_name_prefix))
            .collect();
        Self {
            name: class.name.clone(),
            safe_name: derive_safe_name(&class.name, &config.safe_name_prefix),
            description: class.description.clone(),
            raw_description: class.raw_description.clone(),
            scope: config.scope(&class.name),
            ancestors: chain,
            ancestor_safe_names,
            google,
            properties,
        }
    }

    /// Nearest ancestor, used as the single-inheritance superclass.
    #[must_use]
    pub fn extends(&self) -> &str {
        self.ancestors.get(1).map(String::as_str).unwrap_or("Thing")
    }

    /// Every property handle, sorted.
    #[must_use]
    pub fn handles(&self) -> Vec<&str> {
        self.properties.iter().map(|p| p.handle.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prop(handle: &str, ranges: &[&str]) -> PropertyNode {
        PropertyNode {
            id: format!("schema:{handle}"),
            handle: handle.to_string(),
            description: format!("The {handle}."),
            range_includes: ranges.iter().map(|r| format!("schema:{r}")).collect(),
            domain_includes: vec!["schema:Thing".to_string()],
            superseded: false,
        }
    }

    fn class(name: &str) -> ClassNode {
        ClassNode {
            id: format!("schema:{name}"),
            single_type: Some("rdfs:Class".to_string()),
            name: name.to_string(),
            description: String::new(),
            raw_description: String::new(),
            subclass_of: Vec::new(),
            superseded: false,
        }
    }

    #[test]
    fn compile_field_strips_prefix_and_maps_types() {
        let mut p = prop("author", &["Person", "Text"]);
        p.range_includes.push("dc:Agent".to_string());
        let field = compile_field(&p, &Namespace::schema_org());
        assert_eq!(field.range_types, vec!["Person", "Text"]);
        assert_eq!(field.php_types, vec!["string", "Person"]);
        assert_eq!(field.type_union(), "string|Person");
    }

    #[test]
    fn merged_properties_sorted_and_first_writer_wins() {
        let config = GeneratorConfig::default();
        let mut bundles = BTreeMap::new();
        let mut thing_name = prop("name", &["Text"]);
        thing_name.description = "From Thing.".to_string();
        bundles.insert(
            "Thing".to_string(),
            FieldBundle::new(&class("Thing"), [&thing_name, &prop("url", &["URL"])], &config),
        );
        let mut article_name = prop("name", &["Text"]);
        article_name.description = "From Article.".to_string();
        bundles.insert(
            "Article".to_string(),
            FieldBundle::new(
                &class("Article"),
                [&prop("headline", &["Text"]), &article_name],
                &config,
            ),
        );

        let chain = vec!["Article".to_string(), "Thing".to_string()];
        let merged = resolve_properties_for_class(&chain, &bundles);
        let handles: Vec<&str> = merged.iter().map(|p| p.handle.as_str()).collect();
        assert_eq!(handles, vec!["headline", "name", "url"]);
        assert_eq!(merged[1].description, "From Article.");
    }

    #[test]
    fn ordering_is_ordinal_case_sensitive() {
        let config = GeneratorConfig::default();
        let mut bundles = BTreeMap::new();
        bundles.insert(
            "Thing".to_string(),
            FieldBundle::new(
                &class("Thing"),
                [&prop("beta", &[]), &prop("Zeta", &[]), &prop("alpha", &[])],
                &config,
            ),
        );
        let merged = resolve_properties_for_class(&["Thing".to_string()], &bundles);
        let handles: Vec<&str> = merged.iter().map(|p| p.handle.as_str()).collect();
        assert_eq!(handles, vec!["Zeta", "alpha", "beta"]);
    }

    #[test]
    fn model_extends_nearest_ancestor() {
        let config = GeneratorConfig::default();
        let bundles = BTreeMap::new();
        let model = ResolvedClassModel::resolve(
            &class("Class"),
            vec!["Class".to_string(), "Intangible".to_string(), "Thing".to_string()],
            &bundles,
            &config,
        );
        assert_eq!(model.extends(), "Intangible");
        assert_eq!(model.safe_name, "SchemaClass");
        assert_eq!(model.ancestor_safe_names[0], "SchemaClass");

        let root = ResolvedClassModel::resolve(&class("Thing"), vec!["Thing".into()], &bundles, &config);
        assert_eq!(root.extends(), "Thing");
        assert_eq!(root.google.required, vec!["description", "name"]);
    }
}
