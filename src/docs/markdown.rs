//! Splicing of rendered YAML into a fenced region of a markdown file.

use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::info;

use crate::core::write_atomically;

use super::{DocsError, yaml::DOCUMENT_SEPARATOR};

/// Markers delimiting the generated region of a markdown file.
///
/// The region is the content of the first code fence opened with
/// `fence_open` after the first `heading`, up to the next `fence_close`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FencedRegion {
    /// Section heading preceding the fence, e.g. `## Default`.
    pub heading: String,
    /// Opening fence, e.g. ```` ```yaml ````.
    pub fence_open: String,
    /// Closing fence, e.g. ```` ``` ````.
    pub fence_close: String,
}

impl Default for FencedRegion {
    fn default() -> Self {
        Self {
            heading: "## Default".to_string(),
            fence_open: "```yaml".to_string(),
            fence_close: "```".to_string(),
        }
    }
}

/// Replaces the generated region of a markdown file.
///
/// Only the bytes between the opening fence line and the closing fence
/// change; headings, prose and later sections are kept as they are.
#[derive(Debug, Clone, Default)]
pub struct MarkdownSplicer {
    region: FencedRegion,
}

impl MarkdownSplicer {
    /// Creates a splicer for the given region markers.
    pub fn new(region: FencedRegion) -> Self {
        Self { region }
    }

    /// Prepares a rendered YAML stream for embedding.
    ///
    /// Drops every document separator line, then one trailing line break.
    pub fn prepare_block(rendered: &str) -> String {
        let mut block = String::with_capacity(rendered.len());
        for line in rendered.split('\n') {
            if line.trim() != DOCUMENT_SEPARATOR {
                block.push_str(line);
                block.push('\n');
            }
        }
        block.pop();
        block
    }

    /// Returns `markdown` with the region's content replaced by `block`.
    ///
    /// `block` is inserted as-is; see [`Self::prepare_block`].
    ///
    /// # Errors
    ///
    /// Returns `DocsError::MarkerNotFound` naming the first missing marker.
    pub fn splice_str(
        &self,
        markdown: &str,
        block: &str,
        path: &Path,
    ) -> Result<String, DocsError> {
        let missing = |marker: &str| DocsError::MarkerNotFound {
            marker: marker.to_string(),
            path: path.to_path_buf(),
        };

        let heading_start = markdown
            .find(&self.region.heading)
            .ok_or_else(|| missing(&self.region.heading))?;

        let fence_start = markdown[heading_start..]
            .find(&self.region.fence_open)
            .map(|offset| heading_start + offset)
            .ok_or_else(|| missing(&self.region.fence_open))?;

        let content_start = end_of_line(markdown, fence_start + self.region.fence_open.len())
            .ok_or_else(|| missing(&self.region.fence_close))?;

        let content_end = markdown[content_start..]
            .find(&self.region.fence_close)
            .map(|offset| content_start + offset)
            .ok_or_else(|| missing(&self.region.fence_close))?;

        let mut spliced = String::with_capacity(markdown.len() + block.len());
        spliced.push_str(&markdown[..content_start]);
        spliced.push_str(block);
        spliced.push_str(&markdown[content_end..]);
        Ok(spliced)
    }

    /// Splices a rendered YAML stream into the file at `target`.
    ///
    /// The file is rewritten atomically; on any error it is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns `DocsError::FileRead` or `DocsError::FileWrite` on I/O
    /// failure and `DocsError::MarkerNotFound` if a marker is missing.
    pub fn splice_file(&self, rendered: &str, target: &Path) -> Result<(), DocsError> {
        let markdown = read_markdown(target)?;
        let block = Self::prepare_block(rendered);
        let spliced = self.splice_str(&markdown, &block, target)?;

        write_atomically(target, &spliced).map_err(|e| DocsError::FileWrite {
            path: target.to_path_buf(),
            details: e.to_string(),
        })?;

        info!("Updated {}", target.display());
        Ok(())
    }

    /// Reports whether `target` already contains `rendered`.
    ///
    /// # Errors
    ///
    /// Same as [`Self::splice_file`], without ever writing.
    pub fn is_current(&self, rendered: &str, target: &Path) -> Result<bool, DocsError> {
        let markdown = read_markdown(target)?;
        let block = Self::prepare_block(rendered);
        let spliced = self.splice_str(&markdown, &block, target)?;
        Ok(spliced == markdown)
    }
}

fn read_markdown(path: &Path) -> Result<String, DocsError> {
    fs::read_to_string(path).map_err(|e| DocsError::FileRead {
        path: PathBuf::from(path),
        details: e.to_string(),
    })
}

/// Byte offset just past the line break that ends the line containing `from`.
fn end_of_line(text: &str, from: usize) -> Option<usize> {
    text[from..].find('\n').map(|offset| from + offset + 1)
}
