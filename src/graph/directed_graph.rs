//! Adjacency-list directed graph.
//!
//! Vertices are the integers `0..V`, fixed at construction. Each vertex owns
//! its outgoing list in insertion order; parallel edges and self-loops are
//! kept as inserted.

use super::traversal::{bfs, VisitedSet};

/// Errors raised while building a graph.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// An edge endpoint falls outside the graph's vertex range.
    #[error("Invalid vertex {vertex}: graph has {vertex_count} vertices")]
    InvalidVertex {
        /// The offending vertex label, as the caller supplied it.
        vertex: i64,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },

    /// A negative vertex count was supplied.
    #[error("Invalid vertex count: {0}")]
    InvalidVertexCount(i64),
}

/// Result type alias for graph construction.
pub type GraphResult<T> = Result<T, GraphError>;

/// A directed graph stored as one outgoing list per vertex.
///
/// # Example
///
/// ```rust
/// use graphscope::graph::DirectedGraph;
///
/// let mut graph = DirectedGraph::new(3);
/// graph.add_edge(0, 1).unwrap();
/// graph.add_edge(1, 2).unwrap();
///
/// assert_eq!(graph.vertex_count(), 3);
/// assert_eq!(graph.edge_count(), 2);
/// assert_eq!(graph.neighbors(0), &[1]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectedGraph {
    adjacency: Vec<Vec<usize>>,
}

impl DirectedGraph {
    /// Creates a graph with `vertex_count` vertices and no edges.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); vertex_count],
        }
    }

    /// Creates a graph from a signed vertex count.
    ///
    /// Returns [`GraphError::InvalidVertexCount`] when the count is negative.
    ///
    /// # Example
    ///
    /// ```rust
    /// use graphscope::graph::{DirectedGraph, GraphError};
    ///
    /// assert_eq!(DirectedGraph::try_new(4).unwrap().vertex_count(), 4);
    /// assert_eq!(
    ///     DirectedGraph::try_new(-1),
    ///     Err(GraphError::InvalidVertexCount(-1))
    /// );
    /// ```
    pub fn try_new(vertex_count: i64) -> GraphResult<Self> {
        let count =
            usize::try_from(vertex_count).map_err(|_| GraphError::InvalidVertexCount(vertex_count))?;
        Ok(Self::new(count))
    }

    /// Builds a graph from 0-based edge pairs, inserted in iteration order.
    pub fn from_edges<I>(vertex_count: usize, edges: I) -> GraphResult<Self>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut graph = Self::new(vertex_count);
        for (u, v) in edges {
            graph.add_edge(u, v)?;
        }
        Ok(graph)
    }

    /// Appends the edge `u -> v` to `u`'s outgoing list.
    ///
    /// Both endpoints must be below [`vertex_count`](Self::vertex_count).
    /// Nothing is inserted when either endpoint is rejected.
    pub fn add_edge(&mut self, u: usize, v: usize) -> GraphResult<()> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        self.adjacency[u].push(v);
        Ok(())
    }

    fn check_vertex(&self, vertex: usize) -> GraphResult<()> {
        if vertex < self.adjacency.len() {
            Ok(())
        } else {
            Err(GraphError::InvalidVertex {
                vertex: i64::try_from(vertex).unwrap_or(i64::MAX),
                vertex_count: self.adjacency.len(),
            })
        }
    }

    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the number of stored edges, counting duplicates.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    /// Checks if the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Outgoing neighbours of `vertex` in insertion order.
    ///
    /// Out-of-range vertices have no neighbours.
    pub fn neighbors(&self, vertex: usize) -> &[usize] {
        self.adjacency
            .get(vertex)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// The full adjacency structure, indexed by source vertex.
    pub fn adjacency(&self) -> &[Vec<usize>] {
        &self.adjacency
    }

    /// Returns true if `vertex` has an edge to itself.
    pub fn has_self_loop(&self, vertex: usize) -> bool {
        self.neighbors(vertex).contains(&vertex)
    }

    /// Iterates over every edge as `(source, target)`, sources ascending and
    /// each outgoing list in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(u, outs)| outs.iter().map(move |&v| (u, v)))
    }

    /// Breadth-first traversal from `start` over this graph's edges.
    ///
    /// See [`bfs`] for the visiting rules.
    pub fn bfs(&self, start: usize, visited: &mut VisitedSet, collect: bool) -> Vec<usize> {
        bfs(&self.adjacency, start, visited, collect)
    }

    /// Builds the graph with every edge reversed.
    ///
    /// Edges are inserted into the result in [`edges`](Self::edges) order,
    /// so the transpose of a fixed graph is always the same.
    ///
    /// # Example
    ///
    /// ```rust
    /// use graphscope::graph::DirectedGraph;
    ///
    /// let graph = DirectedGraph::from_edges(3, [(0, 1), (0, 2), (2, 1)]).unwrap();
    /// let reversed = graph.transpose();
    ///
    /// assert_eq!(reversed.neighbors(1), &[0, 2]);
    /// assert_eq!(reversed.neighbors(2), &[0]);
    /// assert!(reversed.neighbors(0).is_empty());
    /// ```
    pub fn transpose(&self) -> DirectedGraph {
        let mut reversed = DirectedGraph::new(self.vertex_count());
        for (u, v) in self.edges() {
            reversed.adjacency[v].push(u);
        }
        reversed
    }

    /// Builds the undirected view of the graph as a symmetric adjacency list.
    ///
    /// Every edge `u -> v` contributes `v` to `u`'s list and `u` to `v`'s.
    /// Reciprocal edges therefore produce duplicate entries, and a self-loop
    /// appears twice in its own list.
    pub fn undirected_adjacency(&self) -> Vec<Vec<usize>> {
        let mut undirected = vec![Vec::new(); self.vertex_count()];
        for (u, v) in self.edges() {
            undirected[u].push(v);
            undirected[v].push(u);
        }
        undirected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_empty_graph() {
        let graph = DirectedGraph::new(0);
        assert_eq!(graph.vertex_count(), 0);
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.is_empty());
    }

    #[test]
    fn test_try_new_rejects_negative_count() {
        assert_eq!(
            DirectedGraph::try_new(-3),
            Err(GraphError::InvalidVertexCount(-3))
        );
        assert_eq!(DirectedGraph::try_new(0).unwrap().vertex_count(), 0);
    }

    #[test]
    fn test_add_edge_preserves_insertion_order() {
        let mut graph = DirectedGraph::new(4);
        graph.add_edge(0, 3).unwrap();
        graph.add_edge(0, 1).unwrap();
        graph.add_edge(0, 2).unwrap();

        assert_eq!(graph.neighbors(0), &[3, 1, 2]);
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn test_add_edge_rejects_out_of_range() {
        let mut graph = DirectedGraph::new(2);

        let err = graph.add_edge(0, 2).unwrap_err();
        assert_eq!(
            err,
            GraphError::InvalidVertex {
                vertex: 2,
                vertex_count: 2
            }
        );
        assert!(graph.add_edge(5, 0).is_err());

        // Rejected edges leave the graph untouched
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_parallel_edges_and_self_loops_are_kept() {
        let mut graph = DirectedGraph::new(2);
        graph.add_edge(0, 1).unwrap();
        graph.add_edge(0, 1).unwrap();
        graph.add_edge(1, 1).unwrap();

        assert_eq!(graph.neighbors(0), &[1, 1]);
        assert!(graph.has_self_loop(1));
        assert!(!graph.has_self_loop(0));
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn test_neighbors_out_of_range_is_empty() {
        let graph = DirectedGraph::new(1);
        assert!(graph.neighbors(7).is_empty());
    }

    #[test]
    fn test_edges_iteration_order() {
        let graph = DirectedGraph::from_edges(3, [(2, 0), (0, 2), (0, 1)]).unwrap();
        let edges: Vec<_> = graph.edges().collect();
        assert_eq!(edges, vec![(0, 2), (0, 1), (2, 0)]);
    }

    #[test]
    fn test_transpose_reverses_every_edge() {
        let graph = DirectedGraph::from_edges(4, [(3, 2), (2, 1), (1, 0), (0, 3)]).unwrap();
        let reversed = graph.transpose();

        assert_eq!(reversed.vertex_count(), 4);
        assert_eq!(reversed.edge_count(), 4);
        assert_eq!(reversed.neighbors(0), &[1]);
        assert_eq!(reversed.neighbors(1), &[2]);
        assert_eq!(reversed.neighbors(2), &[3]);
        assert_eq!(reversed.neighbors(3), &[0]);
    }

    #[test]
    fn test_transpose_twice_restores_edge_multiset() {
        let graph = DirectedGraph::from_edges(3, [(0, 1), (0, 1), (1, 1), (2, 0)]).unwrap();
        let twice = graph.transpose().transpose();

        let mut original: Vec<_> = graph.edges().collect();
        let mut restored: Vec<_> = twice.edges().collect();
        original.sort_unstable();
        restored.sort_unstable();
        assert_eq!(original, restored);
    }

    #[test]
    fn test_undirected_adjacency_duplicates_reciprocal_edges() {
        let graph = DirectedGraph::from_edges(2, [(0, 1), (1, 0)]).unwrap();
        let undirected = graph.undirected_adjacency();

        assert_eq!(undirected[0], vec![1, 1]);
        assert_eq!(undirected[1], vec![0, 0]);
    }

    #[test]
    fn test_graph_error_display() {
        let err = GraphError::InvalidVertex {
            vertex: 10,
            vertex_count: 9,
        };
        assert_eq!(err.to_string(), "Invalid vertex 10: graph has 9 vertices");
        assert_eq!(
            GraphError::InvalidVertexCount(-1).to_string(),
            "Invalid vertex count: -1"
        );
    }
}
