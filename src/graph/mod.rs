//! Weighted undirected graphs and the shortest-path distance oracle.
//!
//! Vertices and edges are owned by [`WeightedGraph`] and handed out as copyable
//! ids ([`VertexId`], [`EdgeId`]). Each vertex keeps a non-owning list of the ids of
//! its incident edges, which is all adjacency queries and Dijkstra need.

mod dijkstra;
mod graph_error;
mod random;
mod vertex;
mod weighted_graph;

pub use dijkstra::*;
pub use graph_error::*;
pub use vertex::*;
pub use weighted_graph::*;
