use rand::rngs::StdRng;

use crate::{
    graph::{VertexId, WeightedGraph},
    simulation::GameError,
    strategy::{Player, Strategy},
};

/// Starts anywhere and wanders to a uniformly random neighbour every turn, ignoring the
/// opponent entirely. Stays put only on a vertex without neighbours.
#[derive(Debug, Clone)]
pub struct RandomStrategy<'g> {
    player: Player<'g>,
}

impl<'g> RandomStrategy<'g> {
    pub fn new(graph: &'g WeightedGraph, rng: StdRng) -> Self {
        RandomStrategy {
            player: Player::new(graph, rng),
        }
    }
}

impl<'g> Strategy<'g> for RandomStrategy<'g> {
    fn name(&self) -> &'static str {
        "random"
    }

    fn player(&self) -> &Player<'g> {
        &self.player
    }

    fn player_mut(&mut self) -> &mut Player<'g> {
        &mut self.player
    }

    fn choose_start(&mut self) -> Result<VertexId, GameError> {
        let start = self.player.random_vertex()?;
        Ok(self.player.set_current(start))
    }

    fn choose_start_after(&mut self, _other: VertexId) -> Result<VertexId, GameError> {
        self.choose_start()
    }

    fn choose_next(&mut self, _other: VertexId) -> Result<VertexId, GameError> {
        let here = self.player.located()?;
        let neighbours = self.player.graph().adjacent(here);
        let next = self.player.pick(&neighbours).unwrap_or(here);
        Ok(self.player.set_current(next))
    }
}
