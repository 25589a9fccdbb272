use std::cmp::Ordering;

use rand::rngs::StdRng;

use crate::{
    graph::{VertexId, WeightedGraph},
    simulation::GameError,
    strategy::{Player, Strategy, distance},
};

/// Greedy evader, the mirror image of [`crate::strategy::MoveTowardStrategy`].
///
/// Starting second, it starts on a vertex as far as possible from the opponent (an
/// unreachable one if there is any). Each turn it steps to the neighbour farthest from
/// the opponent, and stays when no neighbour is strictly farther than where it stands.
#[derive(Debug, Clone)]
pub struct MoveAwayStrategy<'g> {
    player: Player<'g>,
}

impl<'g> MoveAwayStrategy<'g> {
    pub fn new(graph: &'g WeightedGraph, rng: StdRng) -> Self {
        MoveAwayStrategy {
            player: Player::new(graph, rng),
        }
    }
}

/// The vertex farthest from `other`, ties broken at random.
pub(crate) fn farthest_from(
    player: &mut Player<'_>,
    other: VertexId,
) -> Result<VertexId, GameError> {
    let from_other = player.distances_from(other)?;
    let graph = player.graph();
    let scored = graph.vertices().map(|v| (v, distance(&from_other, v)));
    player
        .pick_best(scored, Ordering::Greater)
        .ok_or(GameError::EmptyGraph)
}

impl<'g> Strategy<'g> for MoveAwayStrategy<'g> {
    fn name(&self) -> &'static str {
        "move-away"
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

    fn choose_start_after(&mut self, other: VertexId) -> Result<VertexId, GameError> {
        let start = farthest_from(&mut self.player, other)?;
        Ok(self.player.set_current(start))
    }

    fn choose_next(&mut self, other: VertexId) -> Result<VertexId, GameError> {
        let here = self.player.located()?;
        let from_other = self.player.distances_from(other)?;
        let staying = distance(&from_other, here);

        let farther = self
            .player
            .graph()
            .adjacent(here)
            .into_iter()
            .map(|n| (n, distance(&from_other, n)))
            .filter(|&(_, d)| d > staying);
        let next = self
            .player
            .pick_best(farther, Ordering::Greater)
            .unwrap_or(here);
        Ok(self.player.set_current(next))
    }
}
