use std::{fs, path::Path};

use rand::{SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::{
    config::ConfigError,
    graph::WeightedGraph,
    simulation::{DEFAULT_MAX_ROUNDS, FirstMover, Simulation},
    strategy::StrategyKind,
};

/// How to play a single game. Every field may be omitted from a config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct GameConfig {
    pub pursuer: StrategyKind,
    pub evader: StrategyKind,
    pub first_mover: FirstMover,
    /// `None` plays until capture.
    pub max_rounds: Option<usize>,
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            pursuer: StrategyKind::Toward,
            evader: StrategyKind::Away,
            first_mover: FirstMover::Pursuer,
            max_rounds: Some(DEFAULT_MAX_ROUNDS),
            seed: 42,
        }
    }
}

impl GameConfig {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        load(path.as_ref())
    }

    /// A fresh game on `graph`, each player seeded from `rng`.
    pub fn simulation<'g>(&self, graph: &'g WeightedGraph, rng: &mut StdRng) -> Simulation<'g> {
        let pursuer = self.pursuer.build(graph, StdRng::from_rng(rng));
        let evader = self.evader.build(graph, StdRng::from_rng(rng));
        Simulation::new(graph, pursuer, evader)
            .with_first_mover(self.first_mover)
            .with_max_rounds(self.max_rounds)
    }
}

/// A batch of games on random graphs: `runs` games for every (size, probability) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct SweepConfig {
    pub sizes: Vec<usize>,
    pub probabilities: Vec<f64>,
    pub runs: usize,
    #[serde(flatten)]
    pub game: GameConfig,
}

impl Default for SweepConfig {
    fn default() -> Self {
        SweepConfig {
            sizes: vec![10, 15, 20],
            probabilities: vec![0.2, 0.3, 0.5],
            runs: 100,
            game: GameConfig::default(),
        }
    }
}

impl SweepConfig {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let config: SweepConfig = load(path.as_ref())?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sizes.contains(&0) {
            return Err(ConfigError::Invalid("graph sizes must be positive".into()));
        }
        if let Some(p) = self
            .probabilities
            .iter()
            .find(|p| !(0.0..=1.0).contains(*p))
        {
            return Err(ConfigError::Invalid(format!(
                "edge probability {p} is outside [0, 1]"
            )));
        }
        Ok(())
    }

    /// Every (size, probability) pair, sizes outermost.
    pub fn cells(&self) -> Vec<(usize, f64)> {
        self.sizes
            .iter()
            .flat_map(|&size| self.probabilities.iter().map(move |&p| (size, p)))
            .collect()
    }
}

fn load<T: DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let text = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}
