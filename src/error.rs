use std::fmt::Debug;

/// Failures of graph mutation and shortest path queries.
///
/// Vertex labels are carried in the error so callers can report which
/// label was missing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError<V: Debug> {
    #[error("graph is empty")]
    EmptyGraph,
    #[error("vertex {label:?} is not in the graph")]
    VertexNotFound { label: V },
    #[error("no edge between {from:?} and {to:?}")]
    EdgeNotFound { from: V, to: V },
    #[error("starting vertex {label:?} is not in the graph")]
    SourceNotFound { label: V },
    #[error("ending vertex {label:?} is not in the graph")]
    DestinationNotFound { label: V },
    #[error("edge from {label:?} to itself is not allowed")]
    SelfLoop { label: V },
    #[error("{from:?} and {to:?} are already connected")]
    DuplicateEdge { from: V, to: V },
}

impl<V: Debug> GraphError<V> {
    /// Whether the error names a vertex or edge that is absent.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            GraphError::VertexNotFound { .. }
                | GraphError::EdgeNotFound { .. }
                | GraphError::SourceNotFound { .. }
                | GraphError::DestinationNotFound { .. }
        )
    }
}

/// Failures while reading edge records into a graph.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("unable to read input: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed record in line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },
    #[error(transparent)]
    Graph(#[from] GraphError<String>),
}
