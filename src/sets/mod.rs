//! Generic containers backing the distance oracle.
//!
//! # Submodules
//!
//! - [`map`]: separately chained hash map with load-factor driven growth and shrinking
//! - [`heap`]: binary heap with an identity index, supporting in-place re-prioritization

pub mod heap;
pub mod map;

mod container_error;

pub use container_error::*;
