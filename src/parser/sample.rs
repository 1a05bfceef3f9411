//! The built-in reference graph.
//!
//! Nine vertices labelled `1..=9`. The graph is acyclic apart from a
//! self-loop on vertex 5, and weakly connected.

use super::types::{GraphSpec, IndexBase, LabeledGraph};
use crate::graph::GraphResult;

/// Edges of the reference graph, 1-based, in insertion order.
pub const REFERENCE_EDGES: [(i64, i64); 15] = [
    (1, 2),
    (1, 4),
    (2, 3),
    (2, 6),
    (6, 4),
    (6, 3),
    (7, 3),
    (5, 4),
    (5, 5),
    (5, 9),
    (7, 6),
    (7, 8),
    (7, 5),
    (8, 3),
    (8, 9),
];

/// Vertex count of the reference graph.
pub const REFERENCE_VERTEX_COUNT: i64 = 9;

/// The reference graph as an unvalidated input document.
pub fn reference_spec() -> GraphSpec {
    GraphSpec {
        vertex_count: REFERENCE_VERTEX_COUNT,
        index_base: Some(IndexBase::One),
        edges: REFERENCE_EDGES.to_vec(),
    }
}

/// The reference graph, validated and built.
///
/// # Example
///
/// ```
/// use graphscope::parser::sample;
///
/// let labeled = sample::reference_graph().unwrap();
/// assert_eq!(labeled.graph.vertex_count(), 9);
/// assert_eq!(labeled.graph.edge_count(), 15);
/// ```
pub fn reference_graph() -> GraphResult<LabeledGraph> {
    reference_spec().build(IndexBase::One)
}
