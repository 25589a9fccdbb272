//! Run configuration, from the command line or a JSON file.

mod config_error;
mod game_config;

pub use config_error::*;
pub use game_config::*;
