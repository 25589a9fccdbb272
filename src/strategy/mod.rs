//! Pursuer and evader behaviours.
//!
//! Every behaviour implements [`Strategy`] over a shared [`Player`] state (the graph,
//! the current vertex and a seeded random source). All distance lookups go through
//! [`crate::graph::WeightedGraph::distances_from`]; nothing is cached between turns, and
//! each player counts the oracle runs it triggered.

mod move_away;
mod move_toward;
mod player;
mod player_strategy;
mod random;
mod strategy_kind;
mod weighted_move_away;

pub use move_away::*;
pub use move_toward::*;
pub use player::*;
pub use player_strategy::*;
pub use random::*;
pub use strategy_kind::*;
pub use weighted_move_away::*;
