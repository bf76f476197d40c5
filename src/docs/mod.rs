//! Documentation generation for the configuration schema.
//!
//! Reads the generated JSON schema back, turns its properties into an
//! ordered tree of commented YAML entries and splices the result into the
//! configuration reference markdown file.

mod generator;
mod markdown;
mod tree;
mod yaml;

#[cfg(test)]
mod tests;

pub use generator::{DocsError, DocsGenerator};
pub use markdown::{FencedRegion, MarkdownSplicer};
pub use tree::{Node, build};
pub use yaml::{DOCUMENT_SEPARATOR, render};
