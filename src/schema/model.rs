//! Typed view over the JSON Schema document describing the config type.
//!
//! Only the keywords the generators interpret are modelled as fields:
//! `description`, `type`, `default`, `$ref` and `properties`. Every other
//! keyword is kept verbatim, in order, in `keywords` so a read/write cycle
//! does not lose information.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{OrderedMap, SchemaError};

const REFERENCE_PREFIXES: [&str; 2] = ["#/$defs/", "#/definitions/"];
const COMPOSITION_KEYWORDS: [&str; 3] = ["anyOf", "allOf", "oneOf"];

/// The `type` keyword, either a single type name or a list of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SchemaType {
    /// `"type": "string"`
    Single(String),
    /// `"type": ["string", "null"]`
    Multiple(Vec<String>),
}

impl SchemaType {
    /// Returns true for the open-ended string kind, including its nullable form.
    pub fn is_string(&self) -> bool {
        match self {
            SchemaType::Single(kind) => kind == "string",
            SchemaType::Multiple(kinds) => {
                kinds.iter().any(|kind| kind == "string")
                    && kinds.iter().all(|kind| kind == "string" || kind == "null")
            }
        }
    }
}

/// One field of a structured type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Property {
    /// Documentation taken from the field's doc comment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Declared JSON type.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<SchemaType>,

    /// Default value written by the defaults walker.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,

    /// Reference to the definition describing a nested type.
    #[serde(rename = "$ref", default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,

    /// Inline nested properties.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<OrderedMap<Property>>,

    /// Remaining keywords, untouched.
    #[serde(flatten)]
    pub keywords: Map<String, Value>,
}

impl Property {
    /// Name of the definition this property points at, if any.
    ///
    /// Looks at `$ref` first, then at the first `$ref` found inside an
    /// `anyOf`, `allOf` or `oneOf` list (the shape used for optional nested
    /// types).
    pub fn nested_reference(&self) -> Option<&str> {
        if let Some(reference) = self.reference.as_deref() {
            return definition_name(reference);
        }

        COMPOSITION_KEYWORDS
            .iter()
            .filter_map(|keyword| self.keywords.get(*keyword))
            .filter_map(Value::as_array)
            .flatten()
            .filter_map(|subschema| subschema.get("$ref"))
            .filter_map(Value::as_str)
            .find_map(definition_name)
    }

    /// Description text, or an empty string.
    pub fn description_text(&self) -> &str {
        self.description
            .as_deref()
            .or_else(|| self.keywords.get("title").and_then(Value::as_str))
            .unwrap_or_default()
    }
}

/// Schema entry for one structured type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Definition {
    /// Documentation taken from the type's doc comment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Declared JSON type.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<SchemaType>,

    /// Properties in declaration order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<OrderedMap<Property>>,

    /// Rust field name to external property name.
    ///
    /// Filled by the reflector and never written to the schema file.
    #[serde(skip)]
    pub original_names: OrderedMap<String>,

    /// Remaining keywords, untouched.
    #[serde(flatten)]
    pub keywords: Map<String, Value>,
}

impl Definition {
    /// Looks up a property by its external name.
    pub fn property(&self, name: &str) -> Option<&Property> {
        self.properties.as_ref()?.get(name)
    }

    /// Looks up a property by its external name for mutation.
    pub fn property_mut(&mut self, name: &str) -> Option<&mut Property> {
        self.properties.as_mut()?.get_mut(name)
    }

    /// Looks up a property through the Rust field name it was generated from.
    pub fn property_for_field_mut(&mut self, field: &str) -> Option<&mut Property> {
        let external = self.original_names.get(field)?.clone();
        self.property_mut(&external)
    }
}

/// The whole schema document.
///
/// The root type's definition sits at the top level of the document, every
/// other definition under `$defs`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SchemaModel {
    #[serde(skip)]
    root_key: String,

    /// Definition of the root configuration type.
    #[serde(flatten)]
    pub root: Definition,

    /// Definitions of every nested type, keyed by type name.
    #[serde(
        rename = "$defs",
        alias = "definitions",
        default,
        skip_serializing_if = "OrderedMap::is_empty"
    )]
    pub definitions: OrderedMap<Definition>,
}

impl SchemaModel {
    /// Creates a model from its root definition and the nested definitions.
    pub fn new(
        root_key: impl Into<String>,
        root: Definition,
        definitions: OrderedMap<Definition>,
    ) -> Self {
        Self {
            root_key: root_key.into(),
            root,
            definitions,
        }
    }

    /// Decodes a schema document.
    ///
    /// The root key is recovered from the document's `title`.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::Decode` if the text is not a schema object.
    pub fn from_json(content: &str, location: &str) -> Result<Self, SchemaError> {
        let mut model: SchemaModel =
            serde_json::from_str(content).map_err(|e| SchemaError::Decode {
                location: location.to_string(),
                details: e.to_string(),
            })?;

        if let Some(title) = model.root.keywords.get("title").and_then(Value::as_str) {
            model.root_key = title.to_string();
        }

        Ok(model)
    }

    /// Encodes the model as pretty-printed JSON with a trailing newline.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::Serialization` if encoding fails.
    pub fn to_json_pretty(&self) -> Result<String, SchemaError> {
        let mut json = serde_json::to_string_pretty(self)
            .map_err(|e| SchemaError::Serialization(e.to_string()))?;
        json.push('\n');
        Ok(json)
    }

    /// Definition name of the root configuration type.
    pub fn root_key(&self) -> &str {
        &self.root_key
    }

    /// Resolves a definition by type name, the root type included.
    pub fn definition(&self, key: &str) -> Option<&Definition> {
        if !self.root_key.is_empty() && key == self.root_key {
            return Some(&self.root);
        }
        self.definitions.get(key)
    }

    /// Resolves a definition by type name for mutation.
    pub fn definition_mut(&mut self, key: &str) -> Option<&mut Definition> {
        if !self.root_key.is_empty() && key == self.root_key {
            return Some(&mut self.root);
        }
        self.definitions.get_mut(key)
    }

    /// Every definition with its key, root first.
    pub fn all_definitions_mut(&mut self) -> impl Iterator<Item = (&str, &mut Definition)> {
        std::iter::once((self.root_key.as_str(), &mut self.root)).chain(self.definitions.iter_mut())
    }

    /// Checks that no definition reaches itself through property references.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::CyclicDefinition` with the offending chain.
    pub fn ensure_acyclic(&self) -> Result<(), SchemaError> {
        let mut chain = vec![self.root_key.as_str()];
        self.visit_references(&self.root, &mut chain)
    }

    fn visit_references<'a>(
        &'a self,
        definition: &'a Definition,
        chain: &mut Vec<&'a str>,
    ) -> Result<(), SchemaError> {
        let Some(properties) = definition.properties.as_ref() else {
            return Ok(());
        };

        for (_, property) in properties.iter() {
            let Some(name) = property.nested_reference() else {
                continue;
            };

            if chain.contains(&name) {
                let mut cycle: Vec<String> = chain.iter().map(|key| key.to_string()).collect();
                cycle.push(name.to_string());
                return Err(SchemaError::CyclicDefinition {
                    chain: cycle.join(" -> "),
                });
            }

            if let Some(nested) = self.definitions.get(name) {
                chain.push(name);
                self.visit_references(nested, chain)?;
                chain.pop();
            }
        }

        Ok(())
    }
}

fn definition_name(reference: &str) -> Option<&str> {
    REFERENCE_PREFIXES
        .iter()
        .find_map(|prefix| reference.strip_prefix(prefix))
}
