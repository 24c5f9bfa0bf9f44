//! Generator configuration.
//!
//! Every vocabulary-specific constant the generator needs is carried here and
//! passed in explicitly; no component reads ambient global state.

use schemagen_ontology::Namespace;

/// Default scope URL base for schema.org types.
pub const SCOPE_BASE: &str = "https://schema.org/";
/// Default prefix for class names that are not safe PHP identifiers.
pub const SAFE_NAME_PREFIX: &str = "Schema";
/// Default PHP namespace of the generated files.
pub const MODEL_NAMESPACE: &str = "nystudio107\\seomatic\\models\\jsonld";
/// Default base class of the generated models.
pub const PARENT_MODEL: &str = "nystudio107\\seomatic\\models\\MetaJsonLd";
/// Release label used when none is known.
pub const UNKNOWN_RELEASE: &str = "unknown";

/// Output dialect. Only the static metadata fields differ between dialects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dialect {
    /// Craft 3: untyped static fields.
    #[default]
    Craft3,
    /// Craft 4: static fields typed `string`.
    Craft4,
}

impl Dialect {
    /// Maps a Craft major version to its dialect.
    #[must_use]
    pub fn from_version(version: u8) -> Option<Self> {
        match version {
            3 => Some(Self::Craft3),
            4 => Some(Self::Craft4),
            _ => None,
        }
    }

    /// Type annotation (with trailing space) placed before static field names.
    #[must_use]
    pub fn static_field_type(self) -> &'static str {
        match self {
            Self::Craft3 => "",
            Self::Craft4 => "string ",
        }
    }
}

/// Configuration threaded through ingestion, resolution and rendering.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Vocabulary namespace.
    pub namespace: Namespace,
    /// Base URL that class names are appended to for the scope URL.
    pub scope_base: String,
    /// Prefix applied by [`crate::mapping::derive_safe_name`].
    pub safe_name_prefix: String,
    /// PHP namespace of the generated files.
    pub model_namespace: String,
    /// Fully-qualified base class of generated models.
    pub parent_model: String,
    /// Opaque release label threaded into generated headers.
    pub release: String,
    /// Whether superseded entities are left out.
    pub skip_superseded: bool,
    /// Output dialect.
    pub dialect: Dialect,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            namespace: Namespace::schema_org(),
            scope_base: SCOPE_BASE.to_string(),
            safe_name_prefix: SAFE_NAME_PREFIX.to_string(),
            model_namespace: MODEL_NAMESPACE.to_string(),
            parent_model: PARENT_MODEL.to_string(),
            release: UNKNOWN_RELEASE.to_string(),
            skip_superseded: false,
            dialect: Dialect::default(),
        }
    }
}

impl GeneratorConfig {
    /// Scope URL of a class.
    #[must_use]
    pub fn scope(&self, class_name: &str) -> String {
        format!("{}{class_name}", self.scope_base)
    }

    /// Unqualified name of the parent model class.
    #[must_use]
    pub fn parent_model_name(&self) -> &str {
        self.parent_model
            .rsplit('\\')
            .next()
            .unwrap_or(&self.parent_model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dialect_versions() {
        assert_eq!(Dialect::from_version(3), Some(Dialect::Craft3));
        assert_eq!(Dialect::from_version(4), Some(Dialect::Craft4));
        assert_eq!(Dialect::from_version(2), None);
        assert_eq!(Dialect::from_version(5), None);
        assert_eq!(Dialect::Craft4.static_field_type(), "string ");
    }

    #[test]
    fn scope_and_parent_name() {
        let config = GeneratorConfig::default();
        assert_eq!(config.scope("Article"), "https://schema.org/Article");
        assert_eq!(config.parent_model_name(), "MetaJsonLd");
    }
}
