//! configref - keeps the configuration schema and reference docs in sync.
//!
//! The user configuration type is the single source of truth. From it,
//! configref produces:
//!
//! - a JSON schema whose properties carry the doc comment of every field and
//!   the value it takes in `UserConfig::default()`
//! - the `## Default` YAML block of the configuration reference, rendered
//!   from that schema with each description as a comment above its key
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use configref::{
//!     config::{GeneratorSettings, ProjectPaths, UserConfig},
//!     docs::DocsGenerator,
//! };
//!
//! let root = ProjectPaths::project_root()?;
//! let settings = GeneratorSettings::load(&root)?;
//! let generator = DocsGenerator::new(&settings, &root);
//!
//! generator.generate_schema::<UserConfig>()?;
//! generator.generate_docs()?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

/// User configuration type, generator settings and project paths.
pub mod config;

/// Core error types and result aliases.
pub mod core;

/// Schema object model, reflection and default-value injection.
pub mod schema;

/// Documentation tree, YAML rendering and markdown splicing.
pub mod docs;

/// Terminal output helpers for the command-line entry point.
pub mod cli;

/// Logging setup.
pub mod tracing_config;

/// Re-exported core types for convenience.
pub use core::{ConfigRefError, Result};
