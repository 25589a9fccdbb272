use std::cmp::Ordering;

use clap::ValueEnum;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::{
    graph::{GraphError, VertexId, WeightedGraph},
    simulation::GameError,
    strategy::{Player, Strategy, distance},
};

/// Where a [`MoveTowardStrategy`] stands when it has to start first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum StartPolicy {
    /// Any vertex, uniformly.
    #[default]
    Random,
    /// A vertex of maximum degree, ties broken uniformly.
    HighestDegree,
}

/// Greedy pursuer: every turn it steps to the neighbour closest to the opponent.
///
/// Starting second, it starts on the opponent's vertex. A turn costs one distance
/// oracle run, from the opponent's vertex. When no neighbour is strictly closer to the
/// opponent than the current vertex (the opponent is unreachable), it stays.
#[derive(Debug, Clone)]
pub struct MoveTowardStrategy<'g> {
    player: Player<'g>,
    start: StartPolicy,
}

impl<'g> MoveTowardStrategy<'g> {
    pub fn new(graph: &'g WeightedGraph, rng: StdRng) -> Self {
        Self::with_start_policy(graph, rng, StartPolicy::default())
    }

    pub fn with_start_policy(graph: &'g WeightedGraph, rng: StdRng, start: StartPolicy) -> Self {
        MoveTowardStrategy {
            player: Player::new(graph, rng),
            start,
        }
    }

    pub fn start_policy(&self) -> StartPolicy {
        self.start
    }
}

impl<'g> Strategy<'g> for MoveTowardStrategy<'g> {
    fn name(&self) -> &'static str {
        "move-toward"
    }

    fn player(&self) -> &Player<'g> {
        &self.player
    }

    fn player_mut(&mut self) -> &mut Player<'g> {
        &mut self.player
    }

    fn choose_start(&mut self) -> Result<VertexId, GameError> {
        let start = match self.start {
            StartPolicy::Random => self.player.random_vertex()?,
            StartPolicy::HighestDegree => {
                let graph = self.player.graph();
                let degrees = graph.vertices().map(|v| (v, graph.degree(v) as f64));
                self.player
                    .pick_best(degrees, Ordering::Greater)
                    .ok_or(GameError::EmptyGraph)?
            }
        };
        Ok(self.player.set_current(start))
    }

    fn choose_start_after(&mut self, other: VertexId) -> Result<VertexId, GameError> {
        if !self.player.graph().contains_vertex(other) {
            return Err(GraphError::UnknownVertex(other).into());
        }
        Ok(self.player.set_current(other))
    }

    fn choose_next(&mut self, other: VertexId) -> Result<VertexId, GameError> {
        let here = self.player.located()?;
        let to_other = self.player.distances_from(other)?;
        let staying = distance(&to_other, here);

        let closer = self
            .player
            .graph()
            .adjacent(here)
            .into_iter()
            .map(|n| (n, distance(&to_other, n)))
            .filter(|&(_, d)| d < staying);
        let next = self.player.pick_best(closer, Ordering::Less).unwrap_or(here);
        Ok(self.player.set_current(next))
    }
}
