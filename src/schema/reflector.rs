use schemars::{JsonSchema, Schema, generate::SchemaSettings, transform::RecursiveTransform};
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::{ConfigSection, FieldValue, OrderedMap, SchemaError, SchemaModel};

/// How Rust field names map to external property names.
///
/// Mirrors the `#[serde(rename_all = "...")]` rule on the config types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum NamingRule {
    /// Field names are used as-is.
    #[serde(rename = "verbatim")]
    Verbatim,
    /// `scroll_height` becomes `scrollHeight`.
    #[default]
    #[serde(rename = "camelCase")]
    CamelCase,
    /// `scroll_height` becomes `ScrollHeight`.
    #[serde(rename = "PascalCase")]
    PascalCase,
    /// `scroll_height` becomes `scroll-height`.
    #[serde(rename = "kebab-case")]
    KebabCase,
}

impl NamingRule {
    /// Applies the rule to a Rust field name.
    pub fn apply(self, field: &str) -> String {
        let field = field.strip_prefix("r#").unwrap_or(field);

        match self {
            NamingRule::Verbatim => field.to_string(),
            NamingRule::PascalCase => pascal_case(field),
            NamingRule::CamelCase => {
                let pascal = pascal_case(field);
                let mut chars = pascal.chars();
                match chars.next() {
                    Some(first) => first.to_ascii_lowercase().to_string() + chars.as_str(),
                    None => String::new(),
                }
            }
            NamingRule::KebabCase => field.replace('_', "-"),
        }
    }
}

fn pascal_case(field: &str) -> String {
    let mut result = String::with_capacity(field.len());
    let mut capitalize = true;

    for ch in field.chars() {
        if ch == '_' {
            capitalize = true;
        } else if capitalize {
            result.push(ch.to_ascii_uppercase());
            capitalize = false;
        } else {
            result.push(ch);
        }
    }

    result
}

/// Produces the schema object model for a configuration type.
///
/// `schemars` does the type introspection and picks up doc comments as
/// descriptions. The reflector turns its output into a [`SchemaModel`],
/// drops generator-emitted defaults so the defaults walker is the only
/// source of them, and records which Rust field each property came from.
#[derive(Debug, Clone, Copy, Default)]
pub struct Reflector {
    naming: NamingRule,
}

impl Reflector {
    /// Creates a reflector for types serialized with `naming`.
    pub fn new(naming: NamingRule) -> Self {
        Self { naming }
    }

    /// Reflects `T` into a schema model without defaults.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::Reflection` if the generated schema does not
    /// decode into the model, or `SchemaError::CyclicDefinition` if the type
    /// graph contains a cycle.
    pub fn reflect<T>(&self) -> Result<SchemaModel, SchemaError>
    where
        T: JsonSchema + ConfigSection + Default,
    {
        let generator = SchemaSettings::draft2020_12()
            .with_transform(RecursiveTransform(strip_default))
            .into_generator();
        let schema = generator.into_root_schema_for::<T>();

        let decoded: SchemaModel = serde_json::from_value(schema.to_value())
            .map_err(|e| SchemaError::Reflection(e.to_string()))?;
        let mut model = SchemaModel::new(T::schema_name(), decoded.root, decoded.definitions);

        model.ensure_acyclic()?;

        let mut field_names = OrderedMap::new();
        collect_field_names(&T::default(), &mut field_names);
        self.map_original_names(&mut model, &field_names);

        Ok(model)
    }

    fn map_original_names(
        &self,
        model: &mut SchemaModel,
        field_names: &OrderedMap<Vec<FieldName>>,
    ) {
        for (key, definition) in model.all_definitions_mut() {
            let Some(fields) = field_names.get(key) else {
                continue;
            };

            for &(field, renamed) in fields {
                let external = match renamed {
                    Some(property) => property.to_string(),
                    None => self.naming.apply(field),
                };

                if definition.property(&external).is_some() {
                    definition.original_names.insert(field, external);
                } else {
                    warn!(
                        definition = key,
                        field,
                        %external,
                        "No property for field, its default is left out"
                    );
                }
            }
        }
    }
}

fn strip_default(schema: &mut Schema) {
    if let Some(object) = schema.as_object_mut() {
        object.shift_remove("default");
    }
}

/// Rust field name and its `#[serde(rename)]` override.
type FieldName = (&'static str, Option<&'static str>);

fn collect_field_names(section: &dyn ConfigSection, out: &mut OrderedMap<Vec<FieldName>>) {
    let fields = section.fields();
    out.insert(
        section.definition_key(),
        fields.iter().map(|field| (field.name, field.property)).collect(),
    );

    for field in fields {
        if let FieldValue::Section(nested) = field.value {
            collect_field_names(nested, out);
        }
    }
}
