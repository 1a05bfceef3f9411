//! Cross-checks of component results against petgraph's algorithms.

use petgraph::algo::{connected_components, tarjan_scc};
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::BTreeSet;

use super::components::Component;
use super::directed_graph::DirectedGraph;

/// Outcome of comparing a decomposition with a reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionCheck {
    /// Whether the components cover every vertex exactly once.
    pub is_partition: bool,
    /// Number of components produced by this crate.
    pub found: usize,
    /// Number of components the reference algorithm produced.
    pub expected: usize,
    /// Whether the result matches the reference.
    pub matches: bool,
}

impl PartitionCheck {
    /// Returns a one-line description, e.g. "ok (3 components)".
    pub fn summary(&self) -> String {
        if self.matches {
            format!("ok ({} components)", self.found)
        } else if !self.is_partition {
            format!(
                "not a partition ({} components, expected {})",
                self.found, self.expected
            )
        } else {
            format!(
                "differs from reference ({} components, expected {})",
                self.found, self.expected
            )
        }
    }
}

/// Returns true if `components` cover `0..vertex_count` exactly once.
pub fn is_partition(components: &[Component], vertex_count: usize) -> bool {
    let mut seen = vec![false; vertex_count];
    for &vertex in components.iter().flatten() {
        match seen.get_mut(vertex) {
            Some(slot) if !*slot => *slot = true,
            _ => return false,
        }
    }
    seen.into_iter().all(|s| s)
}

/// Converts the graph into a petgraph `DiGraph` with the same indices.
pub fn to_petgraph(graph: &DirectedGraph) -> DiGraph<(), ()> {
    let mut pg = DiGraph::with_capacity(graph.vertex_count(), graph.edge_count());
    for _ in 0..graph.vertex_count() {
        pg.add_node(());
    }
    for (u, v) in graph.edges() {
        pg.add_edge(NodeIndex::new(u), NodeIndex::new(v), ());
    }
    pg
}

fn as_sets<I>(components: I) -> BTreeSet<BTreeSet<usize>>
where
    I: IntoIterator,
    I::Item: IntoIterator<Item = usize>,
{
    components
        .into_iter()
        .map(|c| c.into_iter().collect())
        .collect()
}

/// Compares an SCC result with petgraph's `tarjan_scc`.
///
/// Components are compared as sets; ordering inside and between components
/// is ignored.
pub fn check_sccs(graph: &DirectedGraph, sccs: &[Component]) -> PartitionCheck {
    let reference = tarjan_scc(&to_petgraph(graph));
    let expected = reference.len();
    let reference = as_sets(
        reference
            .into_iter()
            .map(|c| c.into_iter().map(|n| n.index())),
    );
    let found = as_sets(sccs.iter().map(|c| c.iter().copied()));
    let is_partition = is_partition(sccs, graph.vertex_count());

    PartitionCheck {
        is_partition,
        found: sccs.len(),
        expected,
        matches: is_partition && found == reference,
    }
}

/// Compares a WCC result with petgraph's `connected_components` count.
pub fn check_wccs(graph: &DirectedGraph, wccs: &[Component]) -> PartitionCheck {
    let expected = connected_components(&to_petgraph(graph));
    let is_partition = is_partition(wccs, graph.vertex_count());

    PartitionCheck {
        is_partition,
        found: wccs.len(),
        expected,
        matches: is_partition && wccs.len() == expected,
    }
}
