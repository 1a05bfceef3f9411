//! Breadth-first traversal shared by the SCC and WCC passes.

use fixedbitset::FixedBitSet;
use std::collections::VecDeque;

/// Per-pass record of which vertices have been reached.
///
/// Sized once for a graph's vertex count. Each traversal pass creates its
/// own set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitedSet {
    bits: FixedBitSet,
}

impl VisitedSet {
    /// Creates a set for `vertex_count` vertices with nothing visited.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            bits: FixedBitSet::with_capacity(vertex_count),
        }
    }

    /// Returns true if `vertex` has been visited.
    pub fn contains(&self, vertex: usize) -> bool {
        self.bits.contains(vertex)
    }

    /// Marks `vertex` visited. Returns true if it was not visited before.
    pub fn visit(&mut self, vertex: usize) -> bool {
        !self.bits.put(vertex)
    }

    /// Number of vertices visited so far.
    pub fn count(&self) -> usize {
        self.bits.count_ones(..)
    }

    /// Number of vertices the set covers.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Returns true if the set covers no vertices.
    pub fn is_empty(&self) -> bool {
        self.bits.len() == 0
    }

    /// Returns true once every vertex has been visited.
    pub fn is_full(&self) -> bool {
        self.count() == self.len()
    }
}

/// Breadth-first traversal from `start` over `adjacency`.
///
/// Neighbours are taken in stored order, so the discovery order is fully
/// determined by the adjacency lists. Every newly reached vertex is marked in
/// `visited`; when `collect` is set, the vertices are also returned in the
/// order they were discovered, `start` first.
///
/// A `start` that is already visited is a no-op and yields an empty vector.
///
/// # Example
///
/// ```rust
/// use graphscope::graph::{bfs, VisitedSet};
///
/// let adjacency = vec![vec![2, 1], vec![3], vec![3], vec![]];
/// let mut visited = VisitedSet::new(4);
///
/// assert_eq!(bfs(&adjacency, 0, &mut visited, true), vec![0, 2, 1, 3]);
/// assert!(bfs(&adjacency, 1, &mut visited, true).is_empty());
/// ```
pub fn bfs(
    adjacency: &[Vec<usize>],
    start: usize,
    visited: &mut VisitedSet,
    collect: bool,
) -> Vec<usize> {
    let mut order = Vec::new();
    if !visited.visit(start) {
        return order;
    }

    let mut queue = VecDeque::new();
    queue.push_back(start);
    if collect {
        order.push(start);
    }

    while let Some(node) = queue.pop_front() {
        for &next in &adjacency[node] {
            if visited.visit(next) {
                queue.push_back(next);
                if collect {
                    order.push(next);
                }
            }
        }
    }

    order
}
