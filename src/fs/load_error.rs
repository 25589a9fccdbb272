use std::{fmt, io};

use crate::graph::GraphError;

/// Environment failures while reading a graph description.
#[derive(Debug)]
pub enum LoadError {
    Io(io::Error),
    /// The input had no first line at all.
    MissingHeader,
    /// The first line does not end in a vertex count.
    MalformedHeader(String),
    /// The header declares more vertices than a description may hold.
    TooManyVertices { count: usize, max: usize },
    /// An edge line is not `start,end` or `start,end,weight`.
    MalformedEdge { line: usize, content: String },
    /// An edge line names a vertex index beyond the declared count.
    VertexOutOfRange {
        line: usize,
        index: usize,
        count: usize,
    },
    /// The edge was rejected by the graph (e.g. negative weight).
    Graph { line: usize, error: GraphError },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "IO error: {e}"),
            Self::MissingHeader => write!(f, "missing vertex count header"),
            Self::MalformedHeader(h) => write!(f, "malformed vertex count header: {h:?}"),
            Self::TooManyVertices { count, max } => {
                write!(f, "header declares {count} vertices, at most {max} allowed")
            }
            Self::MalformedEdge { line, content } => {
                write!(f, "line {line}: malformed edge {content:?}")
            }
            Self::VertexOutOfRange { line, index, count } => write!(
                f,
                "line {line}: vertex {index} out of range for {count} vertices"
            ),
            Self::Graph { line, error } => write!(f, "line {line}: {error}"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Graph { error, .. } => Some(error),
            _ => None,
        }
    }
}

impl From<io::Error> for LoadError {
    fn from(e: io::Error) -> Self {
        LoadError::Io(e)
    }
}
