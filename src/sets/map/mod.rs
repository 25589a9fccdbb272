//! Associative containers.
//!
//! [`ChainedMap`] is the map the distance oracle returns its results in, and the
//! identity index inside [`crate::sets::heap::IndexedHeap`].

mod chained_map;

pub use chained_map::*;
