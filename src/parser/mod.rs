//! Parser module for graph inputs.
//!
//! This module reads directed graphs from text and translates external
//! vertex labels into the 0-based indices used by [`crate::graph`].
//!
//! # Supported Formats
//!
//! - **Edge list** - vertex count on the first data line, then `u v` pairs
//! - **JSON** - `{"vertex_count": .., "index_base": .., "edges": [[u, v], ..]}`
//!
//! # Example
//!
//! ```
//! use graphscope::parser::{parse_str, IndexBase, InputFormat};
//!
//! let labeled = parse_str("3\n1 2\n2 3\n", InputFormat::Auto, IndexBase::One).unwrap();
//! assert_eq!(labeled.graph.vertex_count(), 3);
//! assert_eq!(labeled.graph.edge_count(), 2);
//! ```

pub mod edge_list;
pub mod graph_json;
pub mod sample;
pub mod types;

use std::fs;
use std::path::Path;

pub use types::{GraphSpec, IndexBase, LabeledGraph, ParseError, ParseResult};

/// Input format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputFormat {
    /// Pick JSON for `.json` files or content starting with `{`, else edge list
    #[default]
    Auto,
    /// Plain-text edge list
    EdgeList,
    /// JSON graph document
    Json,
}

impl InputFormat {
    /// Resolves `Auto` into a concrete format.
    pub fn resolve(self, path: Option<&Path>, content: &str) -> InputFormat {
        match self {
            InputFormat::Auto => {
                let json_ext = path
                    .and_then(|p| p.extension())
                    .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
                if json_ext || content.trim_start().starts_with('{') {
                    InputFormat::Json
                } else {
                    InputFormat::EdgeList
                }
            }
            concrete => concrete,
        }
    }
}

impl std::str::FromStr for InputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(InputFormat::Auto),
            "edges" | "edge-list" | "txt" => Ok(InputFormat::EdgeList),
            "json" => Ok(InputFormat::Json),
            _ => Err(format!(
                "Unknown input format: '{}'. Valid formats: auto, edges, json",
                s
            )),
        }
    }
}

impl std::fmt::Display for InputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputFormat::Auto => write!(f, "auto"),
            InputFormat::EdgeList => write!(f, "edges"),
            InputFormat::Json => write!(f, "json"),
        }
    }
}

fn parse_spec(content: &str, format: InputFormat) -> ParseResult<GraphSpec> {
    match format {
        InputFormat::Json => graph_json::parse_str(content),
        InputFormat::EdgeList | InputFormat::Auto => edge_list::parse_str(content),
    }
}

/// Reads and validates a graph from a string.
///
/// `default_base` applies unless the input states its own labelling.
pub fn parse_str(
    content: &str,
    format: InputFormat,
    default_base: IndexBase,
) -> ParseResult<LabeledGraph> {
    let spec = parse_spec(content, format.resolve(None, content))?;
    Ok(spec.build(default_base)?)
}

/// Reads and validates a graph from a file.
pub fn parse_file(
    path: &Path,
    format: InputFormat,
    default_base: IndexBase,
) -> ParseResult<LabeledGraph> {
    let content = fs::read_to_string(path)?;
    let spec = parse_spec(&content, format.resolve(Some(path), &content))?;
    Ok(spec.build(default_base)?)
}
