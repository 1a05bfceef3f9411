//! Shared types for graph input parsing.
//!
//! Inputs name vertices with external labels (1-based by default). These
//! types hold the parsed input until it is validated and translated to the
//! 0-based indices used by [`DirectedGraph`].

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::graph::{DirectedGraph, GraphError, GraphResult};

/// Errors that can occur while reading a graph.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// Failed to read the file from disk.
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    /// Failed to parse JSON content.
    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    /// A line of an edge list could not be understood.
    #[error("Line {line}: {message}")]
    Syntax {
        /// 1-based line number in the input.
        line: usize,
        /// What was wrong with the line.
        message: String,
    },

    /// The input never stated a vertex count.
    #[error("Missing vertex count")]
    MissingVertexCount,

    /// The input parsed but describes an invalid graph.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Result type alias for parser operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// The labelling convention used for vertices outside the library.
///
/// Serialized as the integer `0` or `1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum IndexBase {
    /// Vertices are labelled `0..V`.
    Zero,
    /// Vertices are labelled `1..=V`.
    #[default]
    One,
}

impl IndexBase {
    /// The label of internal vertex `0`.
    pub fn offset(self) -> i64 {
        match self {
            IndexBase::Zero => 0,
            IndexBase::One => 1,
        }
    }

    /// Translates an external label into an internal index.
    ///
    /// # Example
    ///
    /// ```rust
    /// use graphscope::parser::IndexBase;
    ///
    /// assert_eq!(IndexBase::One.to_index(1, 9).unwrap(), 0);
    /// assert!(IndexBase::One.to_index(0, 9).is_err());
    /// assert!(IndexBase::Zero.to_index(9, 9).is_err());
    /// ```
    pub fn to_index(self, label: i64, vertex_count: usize) -> GraphResult<usize> {
        label
            .checked_sub(self.offset())
            .and_then(|index| usize::try_from(index).ok())
            .filter(|&index| index < vertex_count)
            .ok_or(GraphError::InvalidVertex {
                vertex: label,
                vertex_count,
            })
    }

    /// Translates an internal index into its external label.
    pub fn to_label(self, index: usize) -> i64 {
        i64::try_from(index)
            .unwrap_or(i64::MAX)
            .saturating_add(self.offset())
    }

    /// Labels every vertex of a component.
    pub fn label_all(self, component: &[usize]) -> Vec<i64> {
        component.iter().map(|&v| self.to_label(v)).collect()
    }
}

impl TryFrom<u8> for IndexBase {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(IndexBase::Zero),
            1 => Ok(IndexBase::One),
            other => Err(format!("index base must be 0 or 1, got {}", other)),
        }
    }
}

impl From<IndexBase> for u8 {
    fn from(base: IndexBase) -> Self {
        match base {
            IndexBase::Zero => 0,
            IndexBase::One => 1,
        }
    }
}

impl fmt::Display for IndexBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexBase::Zero => write!(f, "0-based"),
            IndexBase::One => write!(f, "1-based"),
        }
    }
}

/// A graph as read from input, before validation.
///
/// # Example
///
/// ```rust
/// use graphscope::parser::{GraphSpec, IndexBase};
///
/// let spec = GraphSpec {
///     vertex_count: 3,
///     index_base: None,
///     edges: vec![(1, 2), (2, 3)],
/// };
///
/// let labeled = spec.build(IndexBase::One).unwrap();
/// assert_eq!(labeled.graph.neighbors(0), &[1]);
/// assert_eq!(labeled.index_base, IndexBase::One);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GraphSpec {
    /// Declared number of vertices. May be negative in malformed input.
    pub vertex_count: i64,

    /// Labelling convention stated by the input itself, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index_base: Option<IndexBase>,

    /// Directed edges as `(source, target)` labels, in input order.
    #[serde(default)]
    pub edges: Vec<(i64, i64)>,
}

impl GraphSpec {
    /// Validates the input and builds the graph.
    ///
    /// The input's own `index_base` wins over `default_base`. Edges are
    /// inserted in input order; the first invalid label aborts the build.
    pub fn build(&self, default_base: IndexBase) -> GraphResult<LabeledGraph> {
        let index_base = self.index_base.unwrap_or(default_base);
        let mut graph = DirectedGraph::try_new(self.vertex_count)?;
        let vertex_count = graph.vertex_count();

        for &(u, v) in &self.edges {
            let u = index_base.to_index(u, vertex_count)?;
            let v = index_base.to_index(v, vertex_count)?;
            graph.add_edge(u, v)?;
        }

        Ok(LabeledGraph { graph, index_base })
    }
}

/// A validated graph together with the labelling it was read with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledGraph {
    /// The graph, using 0-based indices.
    pub graph: DirectedGraph,
    /// How to label vertices when reporting results.
    pub index_base: IndexBase,
}
