//! Priority queues.
//!
//! [`IndexedHeap`] is an array-backed binary heap that also tracks where every element
//! sits, so an element whose priority changed can be relocated without a linear scan.
//! Priorities come from a [`Comparator`], which may read state living outside the heap.

mod comparator;
mod indexed_heap;

pub use comparator::*;
pub use indexed_heap::*;
