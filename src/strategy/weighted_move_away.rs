use std::cmp::Ordering;

use rand::rngs::StdRng;

use crate::{
    graph::{DistanceMap, VertexId, WeightedGraph},
    simulation::GameError,
    strategy::{Player, Strategy, distance, farthest_from},
};

const DISTANCE_WEIGHT: f64 = 0.5;
const MOBILITY_WEIGHT: f64 = 0.3;
const FORESIGHT_WEIGHT: f64 = 0.2;

/// Evader that scores each neighbour instead of looking at distance alone:
///
/// `0.5 * distance to opponent + 0.3 * degree + 0.2 * foresight`
///
/// where foresight is the mean distance to the candidate from every vertex the opponent
/// could move to next (from the opponent's own vertex if it has nowhere to go). It never
/// steps onto the opponent, and stays only when it has no other neighbour.
///
/// A turn costs one distance oracle run from the opponent plus one per opponent
/// neighbour.
#[derive(Debug, Clone)]
pub struct WeightedMoveAwayStrategy<'g> {
    player: Player<'g>,
}

impl<'g> WeightedMoveAwayStrategy<'g> {
    pub fn new(graph: &'g WeightedGraph, rng: StdRng) -> Self {
        WeightedMoveAwayStrategy {
            player: Player::new(graph, rng),
        }
    }
}

fn score(
    candidate: VertexId,
    degree: usize,
    from_other: &DistanceMap,
    replies: &[DistanceMap],
) -> f64 {
    let to_other = distance(from_other, candidate);
    let foresight = if replies.is_empty() {
        to_other
    } else {
        replies.iter().map(|r| distance(r, candidate)).sum::<f64>() / replies.len() as f64
    };
    DISTANCE_WEIGHT * to_other + MOBILITY_WEIGHT * degree as f64 + FORESIGHT_WEIGHT * foresight
}

impl<'g> Strategy<'g> for WeightedMoveAwayStrategy<'g> {
    fn name(&self) -> &'static str {
        "weighted-move-away"
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
        let graph = self.player.graph();
        let from_other = self.player.distances_from(other)?;
        let replies = graph
            .adjacent(other)
            .into_iter()
            .map(|reply| self.player.distances_from(reply))
            .collect::<Result<Vec<_>, _>>()?;

        let scored = graph
            .adjacent(here)
            .into_iter()
            .filter(|&n| n != other)
            .map(|n| (n, score(n, graph.degree(n), &from_other, &replies)));
        let next = self
            .player
            .pick_best(scored, Ordering::Greater)
            .unwrap_or(here);
        Ok(self.player.set_current(next))
    }
}
