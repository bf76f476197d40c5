use thiserror::Error;

/// Errors raised while producing or reading a schema document.
#[derive(Error, Debug)]
pub enum SchemaError {
    /// The generated schema did not match the schema object model
    #[error("failed to reflect configuration type: {0}")]
    Reflection(String),

    /// A definition references itself through its properties
    #[error("cyclic definition: {chain}")]
    CyclicDefinition {
        /// Definitions forming the cycle, in visiting order
        chain: String,
    },

    /// Encoding the schema failed
    #[error("failed to serialize schema: {0}")]
    Serialization(String),

    /// Decoding a schema document failed
    #[error("failed to decode schema at '{location}': {details}")]
    Decode {
        /// File path or "string"
        location: String,
        /// Decode error details
        details: String,
    },
}
