use serde::Serialize;

use crate::{graph::VertexId, simulation::GameState};

/// Read-only view of a game after any half-turn, for renderers and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub state: GameState,
    pub pursuer: Option<VertexId>,
    pub evader: Option<VertexId>,
    /// Completed rounds, a round being one move by each player.
    pub rounds: usize,
    /// Individual moves so far, by either player.
    pub moves: usize,
}

/// Result of a finished game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameOutcome {
    pub state: GameState,
    pub captured: bool,
    pub rounds: usize,
    pub moves: usize,
    pub pursuer: VertexId,
    pub evader: VertexId,
    pub pursuer_strategy: &'static str,
    pub evader_strategy: &'static str,
    /// Distance oracle runs made by both players.
    pub distance_queries: usize,
}
