use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{ConfigRefError, Result, schema::NamingRule};

/// Name of the optional settings file at the project root.
pub const SETTINGS_FILE: &str = "configref.toml";

/// Settings for the schema and docs generators.
///
/// Loaded from `configref.toml` at the project root. Missing keys, or a
/// missing file, fall back to the defaults. Relative paths are resolved
/// against the project root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorSettings {
    /// Where the JSON schema is written.
    pub schema_file: PathBuf,

    /// Markdown file holding the configuration reference.
    pub docs_file: PathBuf,

    /// Heading that precedes the generated block.
    pub section_heading: String,

    /// Opening fence of the generated block.
    pub fence_open: String,

    /// Closing fence of the generated block.
    pub fence_close: String,

    /// Rule mapping Rust field names to property names.
    pub naming: NamingRule,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            schema_file: PathBuf::from("schema/config.json"),
            docs_file: PathBuf::from("docs/Config.md"),
            section_heading: "## Default".to_string(),
            fence_open: "```yaml".to_string(),
            fence_close: "```".to_string(),
            naming: NamingRule::CamelCase,
        }
    }
}

impl GeneratorSettings {
    /// Loads the settings file from `root`, or the defaults if there is none.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(root: &Path) -> Result<Self> {
        let path = root.join(SETTINGS_FILE);
        if !path.exists() {
            debug!("No {SETTINGS_FILE} in {}, using defaults", root.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|e| ConfigRefError::io(e, &path))?;
        Self::from_toml(&content, Some(&path))
    }

    /// Parses settings from TOML text.
    ///
    /// # Errors
    ///
    /// Returns `ConfigRefError::TomlParseError` on invalid TOML or values.
    pub fn from_toml(content: &str, path: Option<&Path>) -> Result<Self> {
        toml::from_str(content).map_err(|e| ConfigRefError::toml_parse(e, path))
    }
}
