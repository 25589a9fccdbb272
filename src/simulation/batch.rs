use rand::{SeedableRng, rngs::StdRng};
use serde::Serialize;
use tracing::info;

use crate::{
    config::GameConfig,
    graph::WeightedGraph,
    simulation::{GameError, GameOutcome},
    statistics::Stats,
};

/// Aggregate of one sweep configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SweepCell {
    pub size: usize,
    pub probability: f64,
    pub stats: Stats,
}

/// Plays one game on `graph` with players seeded from `config.seed`.
pub fn play(graph: &WeightedGraph, config: &GameConfig) -> Result<GameOutcome, GameError> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    config.simulation(graph, &mut rng).run()
}

/// Plays `runs` games, each on a fresh random graph of `size` vertices and edge
/// probability `probability`. Graphs and players are all drawn from `seed`, so equal
/// arguments give equal results.
pub fn play_random_graphs(
    size: usize,
    probability: f64,
    runs: usize,
    config: &GameConfig,
    seed: u64,
) -> Result<SweepCell, GameError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut stats = Stats::new();
    for _ in 0..runs {
        let graph = WeightedGraph::random(size, probability, &mut rng)?;
        let outcome = config.simulation(&graph, &mut rng).run()?;
        stats.record(&outcome);
    }
    info!(size, probability, %stats, "configuration done");
    Ok(SweepCell {
        size,
        probability,
        stats,
    })
}
