//! Interface and trait generation: one marker interface and one field
//! container per class.

use crate::config::GeneratorConfig;
use crate::emit::{word_wrap, Slots, Template};
use crate::mapping::{interface_name, trait_name};
use crate::resolve::{FieldBundle, ResolvedProperty};

const HEADER: Template = Template::new(include_str!("../templates/header.template"));
const INTERFACE: Template = Template::new(include_str!("../templates/interface.php.template"));
const TRAIT: Template = Template::new(include_str!("../templates/trait.php.template"));
const FIELD: Template = Template::new(include_str!("../templates/field.template"));

/// Renders the shared file header.
pub(crate) fn render_header(config: &GeneratorConfig) -> String {
    HEADER.render(&Slots::new().with("namespace", config.model_namespace.as_str()))
}

/// Generates the marker interface for a class. Interfaces carry no members.
#[must_use]
pub fn render_interface(bundle: &FieldBundle, config: &GeneratorConfig) -> String {
    INTERFACE.render(
        &Slots::new()
            .with("header", render_header(config))
            .with("schemaVersion", config.release.as_str())
            .with("schemaName", bundle.name.as_str())
            .with("schemaScope", bundle.scope.as_str())
            .with("schemaInterfaceName", interface_name(&bundle.safe_name)),
    )
}

/// Generates the trait holding a class's own fields.
#[must_use]
pub fn render_trait(bundle: &FieldBundle, config: &GeneratorConfig) -> String {
    let mut fields: String = bundle.fields.iter().map(render_field).collect();
    // The last field's trailing blank line would sit before the closing brace.
    if fields.ends_with("\n\n") {
        fields.pop();
    }
    TRAIT.render(
        &Slots::new()
            .with("header", render_header(config))
            .with("schemaVersion", config.release.as_str())
            .with("schemaName", bundle.name.as_str())
            .with("schemaScope", bundle.scope.as_str())
            .with("schemaTraitName", trait_name(&bundle.safe_name))
            .with("schemaPropertiesAsFields", fields),
    )
}

fn render_field(field: &ResolvedProperty) -> String {
    FIELD.render(
        &Slots::new()
            .with(
                "propertyDescription",
                word_wrap(&field.description, 75, "\n     * "),
            )
            .with("propertyType", field.type_union())
            .with("propertyHandle", field.handle.as_str()),
    )
}
