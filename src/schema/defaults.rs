use serde_json::Value;
use tracing::trace;

use super::{ConfigSection, FieldValue, SchemaModel};

/// Writes the values of a default-valued config instance into the schema.
///
/// Walks `defaults` field by field in lock-step with the schema's
/// definitions, recursing into nested sections. Each present value is set as
/// the `default` of the matching property unless that property already has
/// one, so running this twice gives the same schema as running it once.
///
/// Fields that cannot be matched are skipped: an unset optional value, a
/// type with no definition in the schema, a field with no mapped property
/// name, or a property that already carries a default. This never fails.
pub fn inject_defaults(defaults: &dyn ConfigSection, schema: &mut SchemaModel) {
    let key = defaults.definition_key();
    inject_at(defaults, schema, &key);
}

fn inject_at(defaults: &dyn ConfigSection, schema: &mut SchemaModel, parent_key: &str) {
    for field in defaults.fields() {
        let value = match field.value {
            FieldValue::Section(nested) => {
                let nested_key = nested.definition_key();
                inject_at(nested, schema, &nested_key);
                continue;
            }
            FieldValue::Present(value) => value,
            FieldValue::Absent => {
                trace!(definition = parent_key, field = field.name, "Skipping unset field");
                continue;
            }
        };

        assign_default(schema, parent_key, field.name, value);
    }
}

fn assign_default(schema: &mut SchemaModel, parent_key: &str, field: &str, value: Value) {
    let Some(definition) = schema.definition_mut(parent_key) else {
        trace!(definition = parent_key, field, "No definition in schema");
        return;
    };

    let Some(property) = definition.property_for_field_mut(field) else {
        trace!(definition = parent_key, field, "No property mapped for field");
        return;
    };

    if property.default.is_some() {
        trace!(definition = parent_key, field, "Keeping existing default");
        return;
    }

    property.default = Some(value);
}
