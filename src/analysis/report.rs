//! Runs both decompositions over a graph and collects the results.

use std::time::Instant;

use tracing::{debug, info, warn};

use crate::graph::verify::{check_sccs, check_wccs, PartitionCheck};
use crate::graph::{
    find_sccs_with, find_wccs, is_cyclic_component, Component, DirectedGraph, SeedOrder,
};

/// Options controlling an analysis run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AnalysisConfig {
    /// Seed ordering for the first SCC pass.
    pub seed_order: SeedOrder,
    /// Cross-check the results against petgraph.
    pub verify: bool,
}

impl AnalysisConfig {
    /// Sets the seed ordering.
    pub fn with_seed_order(mut self, seed_order: SeedOrder) -> Self {
        self.seed_order = seed_order;
        self
    }

    /// Enables or disables verification.
    pub fn with_verify(mut self, verify: bool) -> Self {
        self.verify = verify;
        self
    }
}

/// A strongly connected component with its cycle flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SccEntry {
    /// Vertices in discovery order.
    pub vertices: Component,
    /// Whether the component contains a cycle.
    pub cyclic: bool,
}

impl SccEntry {
    /// Returns the number of vertices in the component.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns true if the component has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

/// Verification results for both decompositions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verification {
    /// SCC comparison with `tarjan_scc`.
    pub scc: PartitionCheck,
    /// WCC comparison with `connected_components`.
    pub wcc: PartitionCheck,
}

impl Verification {
    /// Returns true if both checks match.
    pub fn passed(&self) -> bool {
        self.scc.matches && self.wcc.matches
    }
}

/// Everything computed for one graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisReport {
    /// Number of vertices in the graph.
    pub vertex_count: usize,
    /// Number of edges, counting duplicates.
    pub edge_count: usize,
    /// Seed ordering the SCCs were computed with.
    pub seed_order: SeedOrder,
    /// Strongly connected components in discovery order.
    pub sccs: Vec<SccEntry>,
    /// Weakly connected components in discovery order.
    pub wccs: Vec<Component>,
    /// Present when verification was requested.
    pub verification: Option<Verification>,
}

impl AnalysisReport {
    /// Number of SCCs that contain a cycle.
    pub fn cyclic_count(&self) -> usize {
        self.sccs.iter().filter(|scc| scc.cyclic).count()
    }

    /// Size of the largest SCC, or 0 for an empty graph.
    pub fn largest_scc(&self) -> usize {
        self.sccs.iter().map(SccEntry::len).max().unwrap_or(0)
    }

    /// Size of the largest WCC, or 0 for an empty graph.
    pub fn largest_wcc(&self) -> usize {
        self.wccs.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// For every vertex, the index of the SCC containing it.
    ///
    /// `None` marks vertices missing from the SCC list, which only happens
    /// with [`SeedOrder::SweepSeed`].
    pub fn scc_membership(&self) -> Vec<Option<usize>> {
        membership(self.vertex_count, self.sccs.iter().map(|s| s.vertices.as_slice()))
    }

    /// For every vertex, the index of the WCC containing it.
    pub fn wcc_membership(&self) -> Vec<Option<usize>> {
        membership(self.vertex_count, self.wccs.iter().map(Vec::as_slice))
    }
}

fn membership<'a, I>(vertex_count: usize, components: I) -> Vec<Option<usize>>
where
    I: Iterator<Item = &'a [usize]>,
{
    let mut index = vec![None; vertex_count];
    for (id, component) in components.enumerate() {
        for &vertex in component {
            if let Some(slot) = index.get_mut(vertex) {
                *slot = Some(id);
            }
        }
    }
    index
}

/// Computes SCCs and WCCs for `graph`.
///
/// # Example
///
/// ```rust
/// use graphscope::analysis::{analyze, AnalysisConfig};
/// use graphscope::graph::DirectedGraph;
///
/// let graph = DirectedGraph::from_edges(3, [(0, 1), (1, 0), (1, 2)]).unwrap();
/// let report = analyze(&graph, &AnalysisConfig::default().with_verify(true));
///
/// assert_eq!(report.sccs.len(), 2);
/// assert_eq!(report.wccs.len(), 1);
/// assert_eq!(report.cyclic_count(), 1);
/// assert!(report.verification.unwrap().passed());
/// ```
pub fn analyze(graph: &DirectedGraph, config: &AnalysisConfig) -> AnalysisReport {
    debug!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        seed_order = %config.seed_order,
        "Starting component analysis"
    );

    let started = Instant::now();
    let sccs: Vec<SccEntry> = find_sccs_with(graph, config.seed_order)
        .into_iter()
        .map(|vertices| SccEntry {
            cyclic: is_cyclic_component(graph, &vertices),
            vertices,
        })
        .collect();
    debug!(count = sccs.len(), elapsed = ?started.elapsed(), "Strongly connected components done");

    let started = Instant::now();
    let wccs = find_wccs(graph);
    debug!(count = wccs.len(), elapsed = ?started.elapsed(), "Weakly connected components done");

    let verification = config.verify.then(|| {
        let raw: Vec<Component> = sccs.iter().map(|s| s.vertices.clone()).collect();
        let verification = Verification {
            scc: check_sccs(graph, &raw),
            wcc: check_wccs(graph, &wccs),
        };
        if verification.passed() {
            info!("Verification against petgraph passed");
        } else {
            if !verification.scc.matches {
                warn!(seed_order = %config.seed_order, "SCC check: {}", verification.scc.summary());
            }
            if !verification.wcc.matches {
                warn!("WCC check: {}", verification.wcc.summary());
            }
        }
        verification
    });

    AnalysisReport {
        vertex_count: graph.vertex_count(),
        edge_count: graph.edge_count(),
        seed_order: config.seed_order,
        sccs,
        wccs,
        verification,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_cycles() -> DirectedGraph {
        DirectedGraph::from_edges(5, [(0, 1), (1, 2), (2, 0), (2, 3), (3, 4), (4, 3)]).unwrap()
    }

    #[test]
    fn test_config_builders() {
        let config = AnalysisConfig::default()
            .with_seed_order(SeedOrder::SweepSeed)
            .with_verify(true);
        assert_eq!(config.seed_order, SeedOrder::SweepSeed);
        assert!(config.verify);
        assert_eq!(AnalysisConfig::default().seed_order, SeedOrder::FinishTime);
    }

    #[test]
    fn test_analyze_two_cycles() {
        let report = analyze(&two_cycles(), &AnalysisConfig::default());

        assert_eq!(report.vertex_count, 5);
        assert_eq!(report.edge_count, 6);
        assert_eq!(report.sccs.len(), 2);
        assert_eq!(report.sccs[0].vertices, vec![0, 2, 1]);
        assert!(report.sccs.iter().all(|s| s.cyclic));
        assert_eq!(report.wccs, vec![vec![0, 1, 2, 3, 4]]);
        assert_eq!(report.largest_scc(), 3);
        assert_eq!(report.largest_wcc(), 5);
        assert!(report.verification.is_none());
    }

    #[test]
    fn test_membership() {
        let report = analyze(&two_cycles(), &AnalysisConfig::default());
        assert_eq!(
            report.scc_membership(),
            vec![Some(0), Some(0), Some(0), Some(1), Some(1)]
        );
        assert_eq!(report.wcc_membership(), vec![Some(0); 5]);
    }

    #[test]
    fn test_sweep_seed_membership_has_gaps() {
        let config = AnalysisConfig::default()
            .with_seed_order(SeedOrder::SweepSeed)
            .with_verify(true);
        let report = analyze(&two_cycles(), &config);

        assert_eq!(report.scc_membership()[3], None);
        let verification = report.verification.unwrap();
        assert!(!verification.passed());
        assert!(verification.wcc.matches);
    }

    #[test]
    fn test_analyze_empty_graph() {
        let report = analyze(&DirectedGraph::new(0), &AnalysisConfig::default().with_verify(true));
        assert!(report.sccs.is_empty());
        assert!(report.wccs.is_empty());
        assert_eq!(report.largest_scc(), 0);
        assert_eq!(report.cyclic_count(), 0);
        assert!(report.verification.unwrap().passed());
    }
}
