//! The turn-based pursuit game.
//!
//! [`Simulation`] drives a pursuer and an evader [`crate::strategy::Strategy`] over a
//! [`crate::graph::WeightedGraph`] through the states of [`GameState`]. The batch
//! helpers play many games on random graphs and aggregate them into
//! [`crate::statistics::Stats`].

mod batch;
mod game;
mod game_error;
mod game_state;
mod outcome;

pub use batch::*;
pub use game::*;
pub use game_error::*;
pub use game_state::*;
pub use outcome::*;
