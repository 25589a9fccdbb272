//! File system I/O for graph descriptions.
//!
//! The text format is a `<label>: <vertex count>` line, a column header line that is
//! ignored, then one `start,end[,weight]` line per undirected edge (weight 1 when
//! omitted). Vertices are referred to by their zero-based creation index.

mod graph_load;
mod load_error;

pub use load_error::*;
