//! Documentation tree built from a finished schema.
//!
//! Each property becomes a [`Node`] carrying its description and either its
//! default value (a leaf) or its nested properties (a branch), in the order
//! the schema declares them.

use serde_json::Value;
use tracing::debug;

use crate::schema::{OrderedMap, Property, SchemaModel};

use super::DocsError;

/// One entry of the documentation tree.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Node {
    /// Property name.
    pub name: String,
    /// Description rendered as a comment above the entry. May be empty.
    pub description: String,
    /// Default value of a leaf.
    pub default: Option<Value>,
    /// Nested entries of a branch.
    pub children: Vec<Node>,
}

impl Node {
    /// Creates a leaf carrying a default value.
    pub fn leaf(name: impl Into<String>, description: impl Into<String>, default: Value) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            default: Some(default),
            children: Vec::new(),
        }
    }

    /// Creates a branch without children.
    pub fn branch(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            default: None,
            children: Vec::new(),
        }
    }

    /// Returns true for a node with nested entries.
    pub fn is_branch(&self) -> bool {
        !self.children.is_empty()
    }
}

/// Builds the top-level documentation nodes from the root's properties.
///
/// # Errors
///
/// Returns `DocsError::SchemaDecode` if the root has no `properties`,
/// `DocsError::UnknownDefinition` for a dangling `$ref`, and
/// `DocsError::CyclicDefinition` if a definition contains itself.
pub fn build(schema: &SchemaModel) -> Result<Vec<Node>, DocsError> {
    let properties = schema
        .root
        .properties
        .as_ref()
        .ok_or_else(|| DocsError::SchemaDecode {
            location: "schema root".to_string(),
            details: "properties key not found in schema".to_string(),
        })?;

    let mut builder = TreeBuilder {
        schema,
        expanding: Vec::new(),
    };

    let mut nodes = Vec::new();
    for (name, property) in properties.iter() {
        builder.parse_node(&mut nodes, name, property)?;
    }

    Ok(nodes)
}

struct TreeBuilder<'a> {
    schema: &'a SchemaModel,
    expanding: Vec<&'a str>,
}

impl<'a> TreeBuilder<'a> {
    fn parse_node(
        &mut self,
        parent: &mut Vec<Node>,
        name: &str,
        property: &'a Property,
    ) -> Result<(), DocsError> {
        let description = property.description_text();

        let Some((nested, definition)) = self.nested_properties(property)? else {
            if let Some(default) = renderable_default(property) {
                parent.push(Node::leaf(name, description, default));
            }
            return Ok(());
        };

        if property.default.is_some() {
            debug!(property = name, "Dropping default of a property with nested properties");
        }

        let mut branch = Node::branch(name, description);

        if let Some(definition) = definition {
            self.expanding.push(definition);
        }
        for (child_name, child) in nested.iter() {
            self.parse_node(&mut branch.children, child_name, child)?;
        }
        if definition.is_some() {
            self.expanding.pop();
        }

        parent.push(branch);
        Ok(())
    }

    /// Inline properties, or those of the referenced definition along with
    /// its name.
    fn nested_properties(
        &self,
        property: &'a Property,
    ) -> Result<Option<(&'a OrderedMap<Property>, Option<&'a str>)>, DocsError> {
        if let Some(inline) = property.properties.as_ref() {
            return Ok(Some((inline, None)));
        }

        let Some(name) = property.nested_reference() else {
            return Ok(None);
        };

        if self.expanding.contains(&name) {
            let mut chain: Vec<&str> = self.expanding.clone();
            chain.push(name);
            return Err(DocsError::CyclicDefinition {
                chain: chain.join(" -> "),
            });
        }

        let definition = self
            .schema
            .definition(name)
            .ok_or_else(|| DocsError::UnknownDefinition {
                name: name.to_string(),
            })?;

        Ok(definition
            .properties
            .as_ref()
            .map(|properties| (properties, Some(name))))
    }
}

/// The explicit default, or an empty string for string-typed properties.
fn renderable_default(property: &Property) -> Option<Value> {
    if let Some(default) = property.default.as_ref() {
        return Some(default.clone());
    }

    property
        .kind
        .as_ref()
        .filter(|kind| kind.is_string())
        .map(|_| Value::String(String::new()))
}
