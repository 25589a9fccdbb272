//! Aggregate results over batches of games.
//!
//! [`Stats`] counts games, captures, rounds and distance oracle runs, and derives the
//! capture rate and per-game averages reported by the batch sweep.

mod stats;
pub use stats::*;
