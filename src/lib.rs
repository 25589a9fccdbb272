pub mod config;
pub mod fs;
pub mod graph;
pub mod sets;
pub mod simulation;
pub mod statistics;
pub mod strategy;
