use std::fmt;

use clap::ValueEnum;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::{
    graph::WeightedGraph,
    strategy::{
        MoveAwayStrategy, MoveTowardStrategy, RandomStrategy, StartPolicy, Strategy,
        WeightedMoveAwayStrategy,
    },
};

/// Selects one of the built-in strategies, from the command line or a config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum StrategyKind {
    Random,
    /// Move toward, starting anywhere.
    Toward,
    /// Move toward, starting on a highest-degree vertex.
    TowardHub,
    Away,
    WeightedAway,
}

impl StrategyKind {
    pub fn build<'g>(self, graph: &'g WeightedGraph, rng: StdRng) -> Box<dyn Strategy<'g> + 'g> {
        match self {
            StrategyKind::Random => Box::new(RandomStrategy::new(graph, rng)),
            StrategyKind::Toward => Box::new(MoveTowardStrategy::new(graph, rng)),
            StrategyKind::TowardHub => Box::new(MoveTowardStrategy::with_start_policy(
                graph,
                rng,
                StartPolicy::HighestDegree,
            )),
            StrategyKind::Away => Box::new(MoveAwayStrategy::new(graph, rng)),
            StrategyKind::WeightedAway => Box::new(WeightedMoveAwayStrategy::new(graph, rng)),
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StrategyKind::Random => "random",
            StrategyKind::Toward => "toward",
            StrategyKind::TowardHub => "toward-hub",
            StrategyKind::Away => "away",
            StrategyKind::WeightedAway => "weighted-away",
        };
        f.write_str(name)
    }
}
