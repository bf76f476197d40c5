mod persist;

#[cfg(test)]
mod tests;

pub use persist::write_atomically;

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::{docs::DocsError, schema::SchemaError};

/// Error types for configref.
///
/// This enum represents all possible errors that can occur while loading
/// generator settings, producing the schema and rendering the docs.
#[derive(Error, Debug)]
pub enum ConfigRefError {
    /// I/O operation error
    #[error("I/O error on '{path}': {details}")]
    IoError {
        /// Path where I/O error occurred
        path: PathBuf,
        /// I/O error details
        details: String,
    },

    /// TOML parsing error with location context
    #[error("failed to parse TOML at '{location}': {details}")]
    TomlParseError {
        /// Location of TOML being parsed (file path or "string")
        location: String,
        /// Parse error details
        details: String,
    },

    /// Schema generation or decoding error
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// Docs rendering or splicing error
    #[error(transparent)]
    Docs(#[from] DocsError),
}

/// A specialized `Result` type for configref operations.
///
/// This type alias simplifies error handling by defaulting the error type
/// to `ConfigRefError`.
pub type Result<T> = std::result::Result<T, ConfigRefError>;

impl ConfigRefError {
    /// Creates a TOML parsing error with optional file path context.
    ///
    /// # Arguments
    ///
    /// * `error` - The underlying parsing error
    /// * `path` - Optional path to the file that failed to parse
    pub fn toml_parse(error: impl std::fmt::Display, path: Option<&Path>) -> Self {
        let location = match path {
            Some(p) => {
                let clean_path = p.canonicalize().unwrap_or_else(|_| p.to_path_buf());
                clean_path.to_string_lossy().to_string()
            }
            None => "string".to_string(),
        };

        ConfigRefError::TomlParseError {
            location,
            details: error.to_string(),
        }
    }

    /// Creates an I/O error with file path context.
    pub fn io(error: impl std::fmt::Display, path: &Path) -> Self {
        ConfigRefError::IoError {
            path: path.to_path_buf(),
            details: error.to_string(),
        }
    }
}
