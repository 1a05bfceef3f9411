//! Component analysis for GraphScope.
//!
//! This module runs the strongly and weakly connected component algorithms
//! under an [`AnalysisConfig`] and gathers the results into an
//! [`AnalysisReport`] ready for export.
//!
//! # Features
//!
//! - Choice of seed ordering for the first Kosaraju pass
//! - Cycle flag for every strongly connected component
//! - Optional cross-check against petgraph's `tarjan_scc` and
//!   `connected_components`
//!
//! # Example
//!
//! ```
//! use graphscope::analysis::{analyze, AnalysisConfig};
//! use graphscope::parser::sample;
//!
//! let labeled = sample::reference_graph().unwrap();
//! let report = analyze(&labeled.graph, &AnalysisConfig::default());
//!
//! assert_eq!(report.wccs.len(), 1);
//! ```

pub mod report;

pub use report::{analyze, AnalysisConfig, AnalysisReport, SccEntry, Verification};
