//! Strongly and weakly connected component decomposition.
//!
//! SCCs use Kosaraju's two-pass scheme: a first pass over the graph builds a
//! stack of seed vertices, and a second pass pops that stack and runs a
//! breadth-first traversal over the transpose, each run yielding one
//! component. WCCs are a single BFS sweep over the undirected view.

use super::directed_graph::DirectedGraph;
use super::traversal::{bfs, VisitedSet};

/// A connected component: vertices in BFS discovery order.
pub type Component = Vec<usize>;

/// How the first Kosaraju pass orders the seed stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SeedOrder {
    /// Push every vertex when its depth-first exploration finishes.
    ///
    /// This is the classic ordering. The result always partitions the vertex
    /// set into true strongly connected components.
    #[default]
    FinishTime,
    /// Push only the seed of each breadth-first sweep, after the sweep.
    ///
    /// Matches the output of the BFS-only reference tool. Only seeds are
    /// popped in the second pass, so vertices that no seed reaches in the
    /// transpose are left out, and a component may merge several SCCs.
    SweepSeed,
}

impl std::str::FromStr for SeedOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "finish" | "finish-time" => Ok(SeedOrder::FinishTime),
            "sweep" | "sweep-seed" => Ok(SeedOrder::SweepSeed),
            _ => Err(format!(
                "Unknown seed order: '{}'. Valid orders: finish, sweep",
                s
            )),
        }
    }
}

impl std::fmt::Display for SeedOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SeedOrder::FinishTime => write!(f, "finish"),
            SeedOrder::SweepSeed => write!(f, "sweep"),
        }
    }
}

/// Finds the strongly connected components using finish-time seeds.
///
/// Components are listed in the order the second pass discovers them, and
/// every vertex of the graph appears in exactly one of them.
///
/// # Example
///
/// ```rust
/// use graphscope::graph::{find_sccs, DirectedGraph};
///
/// // 0 -> 1 -> 2 -> 0, 2 -> 3
/// let graph = DirectedGraph::from_edges(4, [(0, 1), (1, 2), (2, 0), (2, 3)]).unwrap();
/// let sccs = find_sccs(&graph);
///
/// assert_eq!(sccs, vec![vec![0, 2, 1], vec![3]]);
/// ```
pub fn find_sccs(graph: &DirectedGraph) -> Vec<Component> {
    find_sccs_with(graph, SeedOrder::FinishTime)
}

/// Finds strongly connected components with an explicit seed ordering.
pub fn find_sccs_with(graph: &DirectedGraph, order: SeedOrder) -> Vec<Component> {
    let mut seeds = match order {
        SeedOrder::FinishTime => finish_order(graph),
        SeedOrder::SweepSeed => sweep_seeds(graph),
    };

    let reversed = graph.transpose();
    let mut visited = VisitedSet::new(graph.vertex_count());
    let mut components = Vec::new();

    while let Some(node) = seeds.pop() {
        if visited.contains(node) {
            continue;
        }
        components.push(reversed.bfs(node, &mut visited, true));
    }

    components
}

/// Seeds of successive BFS sweeps over the graph, in sweep order.
fn sweep_seeds(graph: &DirectedGraph) -> Vec<usize> {
    let mut visited = VisitedSet::new(graph.vertex_count());
    let mut seeds = Vec::new();

    for start in 0..graph.vertex_count() {
        if visited.contains(start) {
            continue;
        }
        graph.bfs(start, &mut visited, false);
        seeds.push(start);
    }

    seeds
}

/// Every vertex in depth-first finish order, roots taken ascending.
fn finish_order(graph: &DirectedGraph) -> Vec<usize> {
    let adjacency = graph.adjacency();
    let mut visited = VisitedSet::new(graph.vertex_count());
    let mut order = Vec::with_capacity(graph.vertex_count());
    // (vertex, index of the next neighbour to explore)
    let mut stack: Vec<(usize, usize)> = Vec::new();

    for root in 0..graph.vertex_count() {
        if !visited.visit(root) {
            continue;
        }
        stack.push((root, 0));

        while let Some((vertex, next)) = stack.pop() {
            match adjacency[vertex].get(next) {
                Some(&to) => {
                    stack.push((vertex, next + 1));
                    if visited.visit(to) {
                        stack.push((to, 0));
                    }
                }
                None => order.push(vertex),
            }
        }
    }

    order
}

/// Finds the weakly connected components.
///
/// Edge direction is ignored. Components are seeded from vertices in
/// ascending order, so the first component always contains vertex `0`.
///
/// # Example
///
/// ```rust
/// use graphscope::graph::{find_wccs, DirectedGraph};
///
/// let graph = DirectedGraph::from_edges(5, [(1, 0), (2, 3)]).unwrap();
/// assert_eq!(find_wccs(&graph), vec![vec![0, 1], vec![2, 3], vec![4]]);
/// ```
pub fn find_wccs(graph: &DirectedGraph) -> Vec<Component> {
    let undirected = graph.undirected_adjacency();
    let mut visited = VisitedSet::new(graph.vertex_count());
    let mut components = Vec::new();

    for start in 0..graph.vertex_count() {
        if visited.contains(start) {
            continue;
        }
        components.push(bfs(&undirected, start, &mut visited, true));
    }

    components
}

/// Returns true if `component` contains a cycle.
///
/// Any component with more than one vertex is cyclic; a single vertex is
/// cyclic only when it has a self-loop.
pub fn is_cyclic_component(graph: &DirectedGraph, component: &[usize]) -> bool {
    match component {
        [] => false,
        [only] => graph.has_self_loop(*only),
        _ => true,
    }
}
