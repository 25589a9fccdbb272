use std::cmp::Ordering;

use rand::{rngs::StdRng, seq::IndexedRandom};

use crate::{
    graph::{DistanceMap, VertexId, WeightedGraph},
    simulation::GameError,
};

/// The state every strategy carries: the board, where the player stands, and its own
/// source of randomness.
///
/// Only the owning strategy and the simulation move a player, through
/// [`Player::set_current`].
#[derive(Debug, Clone)]
pub struct Player<'g> {
    graph: &'g WeightedGraph,
    current: Option<VertexId>,
    rng: StdRng,
    distance_queries: usize,
}

impl<'g> Player<'g> {
    pub fn new(graph: &'g WeightedGraph, rng: StdRng) -> Self {
        Player {
            graph,
            current: None,
            rng,
            distance_queries: 0,
        }
    }

    pub fn graph(&self) -> &'g WeightedGraph {
        self.graph
    }

    /// `None` until a start vertex has been chosen or assigned.
    pub fn current(&self) -> Option<VertexId> {
        self.current
    }

    /// Number of shortest-path runs this player has asked the graph for.
    pub fn distance_queries(&self) -> usize {
        self.distance_queries
    }

    pub(crate) fn set_current(&mut self, vertex: VertexId) -> VertexId {
        self.current = Some(vertex);
        vertex
    }

    pub(crate) fn located(&self) -> Result<VertexId, GameError> {
        self.current.ok_or(GameError::NotPlaced)
    }

    /// Runs the distance oracle from `source`, counting the call.
    pub(crate) fn distances_from(&mut self, source: VertexId) -> Result<DistanceMap, GameError> {
        self.distance_queries += 1;
        Ok(self.graph.distances_from(source)?)
    }

    /// A uniformly random live vertex.
    pub(crate) fn random_vertex(&mut self) -> Result<VertexId, GameError> {
        let vertices: Vec<VertexId> = self.graph.vertices().collect();
        self.pick(&vertices).ok_or(GameError::EmptyGraph)
    }

    /// A uniformly random element of `candidates`.
    pub(crate) fn pick(&mut self, candidates: &[VertexId]) -> Option<VertexId> {
        candidates.choose(&mut self.rng).copied()
    }

    /// Picks uniformly among the candidates whose score is best, `Greater` meaning the
    /// highest score wins and `Less` the lowest. `None` only if there are no candidates.
    pub(crate) fn pick_best<I>(&mut self, candidates: I, prefer: Ordering) -> Option<VertexId>
    where
        I: IntoIterator<Item = (VertexId, f64)>,
    {
        let mut best: Option<f64> = None;
        let mut tied = Vec::new();
        for (vertex, score) in candidates {
            let order = match best {
                None => prefer,
                Some(b) => score.total_cmp(&b),
            };
            if order == prefer {
                best = Some(score);
                tied.clear();
                tied.push(vertex);
            } else if order == Ordering::Equal {
                tied.push(vertex);
            }
        }
        tied.choose(&mut self.rng).copied()
    }
}

/// Distance recorded for `vertex`, infinity when it is missing.
pub(crate) fn distance(distances: &DistanceMap, vertex: VertexId) -> f64 {
    distances.get(&vertex).copied().unwrap_or(f64::INFINITY)
}
