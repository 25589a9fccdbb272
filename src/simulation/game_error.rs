use std::fmt;

use crate::graph::GraphError;

#[derive(Debug, Clone, PartialEq)]
pub enum GameError {
    /// There is no vertex to start on.
    EmptyGraph,
    /// A strategy was asked to move before it was given a start vertex.
    NotPlaced,
    /// `step` was called before the players were placed.
    NotStarted,
    /// The players were already placed.
    AlreadyStarted,
    /// The game reached a terminal state.
    GameOver,
    Graph(GraphError),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGraph => write!(f, "cannot play on an empty graph"),
            Self::NotPlaced => write!(f, "player has no current vertex"),
            Self::NotStarted => write!(f, "game has not started"),
            Self::AlreadyStarted => write!(f, "game has already started"),
            Self::GameOver => write!(f, "game is over"),
            Self::Graph(e) => write!(f, "graph error: {e}"),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Graph(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GraphError> for GameError {
    fn from(e: GraphError) -> Self {
        GameError::Graph(e)
    }
}
