use std::fmt;

use crate::{
    graph::VertexId,
    sets::ContainerError,
};

#[derive(Debug, Clone, PartialEq)]
pub enum GraphError {
    /// Edge weights must be finite and non-negative.
    InvalidWeight(f64),
    /// The vertex was never added to this graph, or has been removed.
    UnknownVertex(VertexId),
    /// Edge probabilities for random graphs must lie in `[0, 1]`.
    InvalidProbability(f64),
    Container(ContainerError),
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidWeight(w) => write!(f, "illegal edge weight: {w}"),
            Self::UnknownVertex(v) => write!(f, "vertex {v} is not part of the graph"),
            Self::InvalidProbability(p) => write!(f, "illegal edge probability: {p}"),
            Self::Container(e) => write!(f, "container error: {e}"),
        }
    }
}

impl std::error::Error for GraphError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Container(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ContainerError> for GraphError {
    fn from(e: ContainerError) -> Self {
        GraphError::Container(e)
    }
}
