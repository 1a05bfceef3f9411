//! Graph module for component decomposition.
//!
//! This module provides the [`DirectedGraph`] adjacency structure, the
//! breadth-first traversal primitive, and the strongly/weakly connected
//! component algorithms built on top of it.
//!
//! # Example
//!
//! ```rust
//! use graphscope::graph::{find_sccs, find_wccs, DirectedGraph};
//!
//! let mut graph = DirectedGraph::new(4);
//! graph.add_edge(0, 1).unwrap();
//! graph.add_edge(1, 0).unwrap();
//! graph.add_edge(2, 3).unwrap();
//!
//! assert_eq!(find_sccs(&graph).len(), 3);
//! assert_eq!(find_wccs(&graph), vec![vec![0, 1], vec![2, 3]]);
//! ```

mod components;
mod directed_graph;
mod traversal;
pub mod verify;

pub use components::{
    find_sccs, find_sccs_with, find_wccs, is_cyclic_component, Component, SeedOrder,
};
pub use directed_graph::{DirectedGraph, GraphError, GraphResult};
pub use traversal::{bfs, VisitedSet};
