use std::fmt;

use serde::Serialize;

/// Identity of a vertex inside one [`crate::graph::WeightedGraph`].
///
/// Ids are never reused: removing a vertex leaves a hole, so a stale id is
/// reported as unknown rather than silently pointing at another vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct VertexId(pub(crate) usize);

impl VertexId {
    /// Position of the vertex in creation order.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct EdgeId(pub(crate) usize);

impl EdgeId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

/// An undirected edge: two endpoints and a non-negative weight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    endpoints: [VertexId; 2],
    weight: f64,
}

impl Edge {
    pub(crate) fn new(u: VertexId, v: VertexId, weight: f64) -> Self {
        Edge {
            endpoints: [u, v],
            weight,
        }
    }

    pub fn endpoints(&self) -> [VertexId; 2] {
        self.endpoints
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// The endpoint opposite to `vertex`. For a self-loop this is `vertex` itself.
    pub fn other(&self, vertex: VertexId) -> VertexId {
        if vertex == self.endpoints[0] {
            self.endpoints[1]
        } else {
            self.endpoints[0]
        }
    }

    pub fn connects(&self, u: VertexId, v: VertexId) -> bool {
        let [a, b] = self.endpoints;
        (a == u && b == v) || (a == v && b == u)
    }
}
