//! Parser for JSON graph documents.
//!
//! ```json
//! {
//!     "vertex_count": 3,
//!     "index_base": 1,
//!     "edges": [[1, 2], [2, 3]]
//! }
//! ```
//!
//! `index_base` is optional; `edges` defaults to an empty list.

use std::fs;
use std::path::Path;

use super::types::{GraphSpec, ParseResult};

/// Parses a JSON graph document from a file path.
pub fn parse_file(path: &Path) -> ParseResult<GraphSpec> {
    let content = fs::read_to_string(path)?;
    parse_str(&content)
}

/// Parses a JSON graph document from a string.
///
/// # Example
///
/// ```
/// use graphscope::parser::graph_json::parse_str;
/// use graphscope::parser::IndexBase;
///
/// let spec = parse_str(r#"{"vertex_count": 2, "index_base": 0, "edges": [[0, 1]]}"#).unwrap();
/// assert_eq!(spec.index_base, Some(IndexBase::Zero));
/// assert_eq!(spec.edges, vec![(0, 1)]);
/// ```
pub fn parse_str(content: &str) -> ParseResult<GraphSpec> {
    let spec: GraphSpec = serde_json::from_str(content)?;
    Ok(spec)
}

/// Serializes a graph document to pretty-printed JSON.
pub fn to_string(spec: &GraphSpec) -> ParseResult<String> {
    Ok(serde_json::to_string_pretty(spec)?)
}
