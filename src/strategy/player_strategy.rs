use crate::{graph::VertexId, simulation::GameError, strategy::Player};

/// A way of playing the pursuit game.
///
/// A strategy is built once per game. It is asked for a start vertex once, either
/// blind ([`Strategy::choose_start`]) or knowing where the opponent starts
/// ([`Strategy::choose_start_after`]), then for one move per turn until the game ends.
/// Every choice also becomes the player's current vertex.
///
/// Built-in variants: [`crate::strategy::RandomStrategy`],
/// [`crate::strategy::MoveTowardStrategy`], [`crate::strategy::MoveAwayStrategy`] and
/// [`crate::strategy::WeightedMoveAwayStrategy`].
pub trait Strategy<'g> {
    /// Short human readable name, used in logs and reports.
    fn name(&self) -> &'static str;

    fn player(&self) -> &Player<'g>;

    fn player_mut(&mut self) -> &mut Player<'g>;

    fn current(&self) -> Option<VertexId> {
        self.player().current()
    }

    /// Picks a start vertex without knowing the opponent's.
    ///
    /// # Errors
    /// [`GameError::EmptyGraph`] if there is nothing to stand on.
    fn choose_start(&mut self) -> Result<VertexId, GameError>;

    /// Picks a start vertex once the opponent stands on `other`.
    fn choose_start_after(&mut self, other: VertexId) -> Result<VertexId, GameError>;

    /// Moves to a neighbour of the current vertex, or stays put, given that the opponent
    /// stands on `other`.
    ///
    /// # Errors
    /// [`GameError::NotPlaced`] if no start was chosen yet, [`GameError::Graph`] if
    /// `other` is not in the graph.
    fn choose_next(&mut self, other: VertexId) -> Result<VertexId, GameError>;
}
