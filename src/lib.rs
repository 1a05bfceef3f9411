//! GraphScope - strongly and weakly connected component analyzer
//!
//! This crate decomposes directed graphs into strongly connected components
//! (Kosaraju's algorithm with breadth-first passes) and weakly connected
//! components, with parsers for graph inputs and exporters for the results.

pub mod analysis;
pub mod export;
pub mod graph;
pub mod parser;
