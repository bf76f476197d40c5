//! YAML rendering of the documentation tree.
//!
//! Scalars and default collections are encoded with `serde_yaml`; the
//! mapping structure and the comments above each key are laid out here,
//! since `serde_yaml` has no notion of comments.

use std::fmt::Write;

use serde::Serialize;
use serde_json::Value;

use super::{DocsError, Node};

const INDENT: &str = "  ";

/// Line separating YAML documents in a stream.
pub const DOCUMENT_SEPARATOR: &str = "---";

/// Renders each top-level node as its own YAML document.
///
/// Documents are separated by `---` lines, as a YAML stream encoder would
/// emit them.
///
/// # Errors
///
/// Returns `DocsError::Render` if a key or default cannot be encoded.
pub fn render(nodes: &[Node]) -> Result<String, DocsError> {
    let documents = nodes
        .iter()
        .map(|node| {
            let mut document = String::new();
            write_entry(&mut document, node, 0)?;
            Ok(document)
        })
        .collect::<Result<Vec<String>, DocsError>>()?;

    let separator = format!("{DOCUMENT_SEPARATOR}\n");
    Ok(documents.join(separator.as_str()))
}

fn write_entry(out: &mut String, node: &Node, depth: usize) -> Result<(), DocsError> {
    let indent = INDENT.repeat(depth);
    write_comment(out, &node.description, &indent)?;

    let key = encode(&node.name)?;

    if let Some(default) = node.default.as_ref() {
        return write_value(out, &indent, &key, default);
    }

    if node.children.is_empty() {
        writeln!(out, "{indent}{key}: {{}}").map_err(render_error)?;
        return Ok(());
    }

    writeln!(out, "{indent}{key}:").map_err(render_error)?;
    for child in &node.children {
        write_entry(out, child, depth + 1)?;
    }

    Ok(())
}

fn write_comment(out: &mut String, description: &str, indent: &str) -> Result<(), DocsError> {
    for line in description.lines() {
        let line = line.trim_end();
        if line.is_empty() {
            writeln!(out, "{indent}#").map_err(render_error)?;
        } else {
            writeln!(out, "{indent}# {line}").map_err(render_error)?;
        }
    }
    Ok(())
}

fn write_value(out: &mut String, indent: &str, key: &str, value: &Value) -> Result<(), DocsError> {
    let encoded = encode(value)?;

    if is_block_collection(value) {
        writeln!(out, "{indent}{key}:").map_err(render_error)?;
        for line in encoded.lines() {
            write_line(out, &format!("{indent}{INDENT}"), line)?;
        }
        return Ok(());
    }

    let mut lines = encoded.lines();
    let first = lines.next().unwrap_or_default();
    writeln!(out, "{indent}{key}: {first}").map_err(render_error)?;
    for line in lines {
        write_line(out, indent, line)?;
    }

    Ok(())
}

fn write_line(out: &mut String, indent: &str, line: &str) -> Result<(), DocsError> {
    if line.is_empty() {
        out.push('\n');
        return Ok(());
    }
    writeln!(out, "{indent}{line}").map_err(render_error)
}

fn is_block_collection(value: &Value) -> bool {
    match value {
        Value::Array(items) => !items.is_empty(),
        Value::Object(entries) => !entries.is_empty(),
        _ => false,
    }
}

fn encode<T: Serialize + ?Sized>(value: &T) -> Result<String, DocsError> {
    let encoded = serde_yaml::to_string(value).map_err(|e| DocsError::Render {
        details: e.to_string(),
    })?;
    Ok(encoded.trim_end_matches('\n').to_string())
}

fn render_error(err: std::fmt::Error) -> DocsError {
    DocsError::Render {
        details: err.to_string(),
    }
}
