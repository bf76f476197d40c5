//! Schema object model and default-value injection.
//!
//! Turns a configuration type into a JSON Schema document whose properties
//! carry the descriptions from the type's doc comments and the values of its
//! `Default` instance.

mod defaults;
mod error;
mod fields;
mod model;
mod ordered;
mod reflector;


pub use defaults::inject_defaults;
pub use error::SchemaError;
pub use fields::{AsField, ConfigSection, Field, FieldValue};
pub use model::{Definition, Property, SchemaModel, SchemaType};
pub use ordered::OrderedMap;
pub use reflector::{NamingRule, Reflector};

use schemars::JsonSchema;
use tracing::info;

/// Reflects `T` and fills every property with the value from `T::default()`.
///
/// # Errors
///
/// Returns an error if reflection fails or the type graph is cyclic.
pub fn generate<T>(naming: NamingRule) -> Result<SchemaModel, SchemaError>
where
    T: JsonSchema + ConfigSection + Default,
{
    let mut model = Reflector::new(naming).reflect::<T>()?;
    inject_defaults(&T::default(), &mut model);

    info!(
        root = model.root_key(),
        definitions = model.definitions.len(),
        "Generated schema"
    );

    Ok(model)
}
