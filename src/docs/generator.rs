use std::{
    fs,
    path::{Path, PathBuf},
};

use schemars::JsonSchema;
use thiserror::Error;
use tracing::{info, instrument};

use crate::{
    Result,
    config::{GeneratorSettings, ProjectPaths},
    core::write_atomically,
    schema::{self, ConfigSection, NamingRule, SchemaModel},
};

use super::{FencedRegion, MarkdownSplicer, tree, yaml};

/// Generates the configuration schema and the configuration reference.
///
/// The two artifacts are produced by independent runs: `generate_schema`
/// writes the schema file from the config type, `generate_docs` reads that
/// file back and splices the rendered defaults into the docs file.
#[derive(Debug, Clone)]
pub struct DocsGenerator {
    schema_file: PathBuf,
    docs_file: PathBuf,
    naming: NamingRule,
    splicer: MarkdownSplicer,
}

impl DocsGenerator {
    /// Creates a generator from settings, resolving paths against `root`.
    pub fn new(settings: &GeneratorSettings, root: &Path) -> Self {
        let region = FencedRegion {
            heading: settings.section_heading.clone(),
            fence_open: settings.fence_open.clone(),
            fence_close: settings.fence_close.clone(),
        };

        Self {
            schema_file: ProjectPaths::resolve(root, &settings.schema_file),
            docs_file: ProjectPaths::resolve(root, &settings.docs_file),
            naming: settings.naming,
            splicer: MarkdownSplicer::new(region),
        }
    }

    /// Sets a custom schema file path.
    pub fn with_schema_file(mut self, schema_file: impl Into<PathBuf>) -> Self {
        self.schema_file = schema_file.into();
        self
    }

    /// Sets a custom docs file path.
    pub fn with_docs_file(mut self, docs_file: impl Into<PathBuf>) -> Self {
        self.docs_file = docs_file.into();
        self
    }

    /// Path of the schema file.
    pub fn schema_file(&self) -> &Path {
        &self.schema_file
    }

    /// Path of the docs file.
    pub fn docs_file(&self) -> &Path {
        &self.docs_file
    }

    /// Writes the schema of `T`, with defaults from `T::default()`.
    ///
    /// Creates the schema file's directory if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if reflection fails or the file cannot be written.
    #[instrument(skip(self), fields(schema = %self.schema_file.display()))]
    pub fn generate_schema<T>(&self) -> Result<SchemaModel>
    where
        T: JsonSchema + ConfigSection + Default,
    {
        let model = schema::generate::<T>(self.naming)?;
        let json = model.to_json_pretty()?;

        if let Some(dir) = self.schema_file.parent() {
            fs::create_dir_all(dir).map_err(|e| DocsError::FileWrite {
                path: dir.to_path_buf(),
                details: format!("Failed to create schema directory: {e}"),
            })?;
        }

        write_atomically(&self.schema_file, &json).map_err(|e| DocsError::FileWrite {
            path: self.schema_file.clone(),
            details: e.to_string(),
        })?;

        info!("Wrote {}", self.schema_file.display());
        Ok(model)
    }

    /// Renders the schema file's defaults into the docs file.
    ///
    /// # Errors
    ///
    /// Returns an error if the schema cannot be read or decoded, or the
    /// docs file cannot be read, spliced or written.
    #[instrument(skip(self), fields(docs = %self.docs_file.display()))]
    pub fn generate_docs(&self) -> Result<()> {
        let rendered = self.render_defaults()?;
        self.splicer.splice_file(&rendered, &self.docs_file)?;
        Ok(())
    }

    /// Runs `generate_schema` then `generate_docs`.
    ///
    /// # Errors
    ///
    /// Returns the first error of either run.
    pub fn generate_all<T>(&self) -> Result<()>
    where
        T: JsonSchema + ConfigSection + Default,
    {
        self.generate_schema::<T>()?;
        self.generate_docs()
    }

    /// Checks whether the docs file matches the schema file, without writing.
    ///
    /// # Errors
    ///
    /// Same as [`Self::generate_docs`].
    #[instrument(skip(self), fields(docs = %self.docs_file.display()))]
    pub fn check_docs(&self) -> Result<bool> {
        let rendered = self.render_defaults()?;
        let current = self.splicer.is_current(&rendered, &self.docs_file)?;

        if !current {
            info!("{} is out of date", self.docs_file.display());
        }

        Ok(current)
    }

    fn render_defaults(&self) -> Result<String> {
        let model = self.read_schema()?;
        let nodes = tree::build(&model)?;
        Ok(yaml::render(&nodes)?)
    }

    fn read_schema(&self) -> std::result::Result<SchemaModel, DocsError> {
        let location = self.schema_file.display().to_string();

        let content = fs::read_to_string(&self.schema_file).map_err(|e| DocsError::FileRead {
            path: self.schema_file.clone(),
            details: e.to_string(),
        })?;

        SchemaModel::from_json(&content, &location).map_err(|e| DocsError::SchemaDecode {
            location,
            details: e.to_string(),
        })
    }
}

/// Errors that can occur during documentation generation.
#[derive(Error, Debug)]
pub enum DocsError {
    /// Reading an input file failed
    #[error("failed to read '{path}': {details}")]
    FileRead {
        /// File that could not be read
        path: PathBuf,
        /// I/O error details
        details: String,
    },

    /// Writing an output file failed
    #[error("failed to write '{path}': {details}")]
    FileWrite {
        /// File that could not be written
        path: PathBuf,
        /// I/O error details
        details: String,
    },

    /// A marker delimiting the generated region is missing
    #[error("'{marker}' not found in '{path}'")]
    MarkerNotFound {
        /// The missing marker text
        marker: String,
        /// File that was searched
        path: PathBuf,
    },

    /// The schema document does not have the expected shape
    #[error("failed to decode schema at '{location}': {details}")]
    SchemaDecode {
        /// Schema file, or the part of the schema being decoded
        location: String,
        /// Decode error details
        details: String,
    },

    /// A `$ref` names a definition that does not exist
    #[error("unknown definition '{name}'")]
    UnknownDefinition {
        /// Referenced definition name
        name: String,
    },

    /// A definition contains itself
    #[error("cyclic definition: {chain}")]
    CyclicDefinition {
        /// Definitions forming the cycle
        chain: String,
    },

    /// YAML rendering failed
    #[error("failed to render YAML: {details}")]
    Render {
        /// Encoder error details
        details: String,
    },
}
