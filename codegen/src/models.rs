//! Model generation: the concrete class aggregating every ancestor's trait.

use crate::config::GeneratorConfig;
use crate::emit::{php_list, php_map, php_string, word_wrap, Slots, Template};
use crate::mapping::{interface_name, trait_name};
use crate::resolve::ResolvedClassModel;
use crate::traits::render_header;

const MODEL: Template = Template::new(include_str!("../templates/model.php.template"));

/// Indentation of the `return` lines in the accessor bodies.
const BODY_INDENT: usize = 8;

/// Generates the model for a resolved class.
///
/// Rendering only formats already-resolved data.
#[must_use]
pub fn render_model(model: &ResolvedClassModel, config: &GeneratorConfig) -> String {
    let interfaces: Vec<String> = model
        .ancestor_safe_names
        .iter()
        .map(|n| interface_name(n.as_str()))
        .collect();
    let traits: String = model
        .ancestor_safe_names
        .iter()
        .map(|n| format!("    use {};\n", trait_name(n)))
        .collect();

    let expected_types: Vec<(String, String)> = model
        .properties
        .iter()
        .map(|p| (p.handle.clone(), php_list(&p.range_types)))
        .collect();
    let descriptions: Vec<(String, String)> = model
        .properties
        .iter()
        .map(|p| (p.handle.clone(), php_string(&p.description)))
        .collect();

    MODEL.render(
        &Slots::new()
            .with("header", render_header(config))
            .with("parentModel", config.parent_model.as_str())
            .with("parentModelName", config.parent_model_name())
            .with("schemaVersion", config.release.as_str())
            .with("schemaName", model.name.as_str())
            .with("schemaDescription", word_wrap(&model.description, 75, "\n * "))
            .with("schemaScope", model.scope.as_str())
            .with("schemaClass", model.safe_name.as_str())
            .with("schemaInterfaces", interfaces.join(", "))
            .with("schemaTraits", traits)
            .with("staticType", config.dialect.static_field_type())
            .with("schemaTypeName", php_string(&model.name))
            .with("schemaTypeScope", php_string(&model.scope))
            .with("schemaTypeExtends", php_string(model.extends()))
            .with("schemaTypeDescription", php_string(&model.raw_description))
            .with("schemaPropertyNames", php_list(&model.handles()))
            .with(
                "schemaPropertyExpectedTypes",
                php_map(&expected_types, BODY_INDENT),
            )
            .with(
                "schemaPropertyDescriptions",
                php_map(&descriptions, BODY_INDENT),
            )
            .with("googleRequiredSchema", php_list(&model.google.required))
            .with("googleRecommendedSchema", php_list(&model.google.recommended)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Dialect;
    use crate::resolve::ResolvedProperty;
    use crate::rules::google_fields;

    fn model() -> ResolvedClassModel {
        ResolvedClassModel {
            name: "Article".into(),
            safe_name: "Article".into(),
            description: "An article.".into(),
            raw_description: "An article's text.\nSecond line.".into(),
            scope: "https://schema.org/Article".into(),
            ancestors: vec!["Article".into(), "CreativeWork".into(), "Thing".into()],
            ancestor_safe_names: vec!["Article".into(), "CreativeWork".into(), "Thing".into()],
            google: google_fields(["Article", "CreativeWork", "Thing"]),
            properties: vec![
                ResolvedProperty {
                    handle: "headline".into(),
                    description: "Headline of the article.".into(),
                    range_types: vec!["Text".into()],
                    php_types: vec!["string".into()],
                },
                ResolvedProperty {
                    handle: "name".into(),
                    description: "The item's name.".into(),
                    range_types: vec!["Text".into()],
                    php_types: vec!["string".into()],
                },
            ],
        }
    }

    #[test]
    fn model_aggregates_ancestors() {
        let out = render_model(&model(), &GeneratorConfig::default());
        assert!(out.contains("use nystudio107\\seomatic\\models\\MetaJsonLd;"));
        assert!(out.contains(
            "class Article extends MetaJsonLd implements ArticleInterface, CreativeWorkInterface, ThingInterface\n{\n    use ArticleTrait;\n    use CreativeWorkTrait;\n    use ThingTrait;\n\n"
        ));
        assert!(out.contains("public static $schemaTypeExtends = 'CreativeWork';"));
        assert!(!out.contains("{@"));
    }

    #[test]
    fn accessors_return_resolved_literals() {
        let out = render_model(&model(), &GeneratorConfig::default());
        assert!(out.contains("return ['headline', 'name'];"));
        assert!(out.contains(
            "return [\n            'headline' => ['Text'],\n            'name' => ['Text']\n        ];"
        ));
        assert!(out.contains("'name' => 'The item\\'s name.'"));
        assert!(out.contains(
            "return ['author', 'datePublished', 'description', 'headline', 'image', 'name', 'publisher'];"
        ));
        assert!(out.contains("return ['dateModified', 'image', 'mainEntityOfPage', 'url'];"));
        assert!(out.contains("$schemaTypeDescription = 'An article\\'s text.\nSecond line.';"));
    }

    #[test]
    fn craft4_types_static_fields() {
        let mut config = GeneratorConfig::default();
        config.dialect = Dialect::Craft4;
        let out = render_model(&model(), &config);
        assert!(out.contains("public static string $schemaTypeName = 'Article';"));
        assert!(out.contains("public static string $schemaTypeScope = 'https://schema.org/Article';"));
    }
}
