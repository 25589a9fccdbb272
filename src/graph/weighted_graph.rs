use crate::graph::{Edge, EdgeId, GraphError, VertexId};

#[derive(Debug, Default, Clone)]
struct VertexSlot {
    /// ids of the edges touching this vertex. Lookup only, the graph owns the edges.
    incident: Vec<EdgeId>,
}

/// An undirected graph with non-negative edge weights.
///
/// # Invariants
/// - Every live edge's endpoints are live vertices.
/// - A live edge id appears in the incident list of each of its endpoints (once for a
///   self-loop).
///
/// Self-loops and parallel edges are accepted. They are legal but make pathfinding
/// tie-breaks less predictable, so callers should avoid them.
#[derive(Debug, Default, Clone)]
pub struct WeightedGraph {
    vertices: Vec<Option<VertexSlot>>,
    edges: Vec<Option<Edge>>,
    vertex_count: usize,
    edge_count: usize,
}

impl WeightedGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// A graph of `n` isolated vertices, with ids `0..n`.
    pub fn with_vertices(n: usize) -> Self {
        let mut graph = Self::new();
        for _ in 0..n {
            graph.add_vertex();
        }
        graph
    }

    /// Builds a graph of `n` vertices and the given `(start, end, weight)` edges,
    /// endpoints given by creation index.
    ///
    /// # Errors
    /// [`GraphError::UnknownVertex`] if an endpoint is `>= n`,
    /// [`GraphError::InvalidWeight`] for negative or non-finite weights.
    pub fn from_edges(n: usize, edges: &[(usize, usize, f64)]) -> Result<Self, GraphError> {
        let mut graph = Self::with_vertices(n);
        for &(u, v, weight) in edges {
            graph.add_edge(VertexId(u), VertexId(v), weight)?;
        }
        Ok(graph)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.vertex_count == 0
    }

    pub fn contains_vertex(&self, vertex: VertexId) -> bool {
        self.slot(vertex).is_some()
    }

    /// The live vertex created `index`-th, if it has not been removed.
    pub fn vertex(&self, index: usize) -> Option<VertexId> {
        let id = VertexId(index);
        self.contains_vertex(id).then_some(id)
    }

    /// Live vertices in creation order.
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_some())
            .map(|(i, _)| VertexId(i))
    }

    /// Live edges in creation order.
    pub fn edges(&self) -> impl Iterator<Item = (EdgeId, &Edge)> + '_ {
        self.edges
            .iter()
            .enumerate()
            .filter_map(|(i, edge)| edge.as_ref().map(|e| (EdgeId(i), e)))
    }

    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id.0).and_then(Option::as_ref)
    }

    fn slot(&self, vertex: VertexId) -> Option<&VertexSlot> {
        self.vertices.get(vertex.0).and_then(Option::as_ref)
    }

    pub fn add_vertex(&mut self) -> VertexId {
        self.vertices.push(Some(VertexSlot::default()));
        self.vertex_count += 1;
        VertexId(self.vertices.len() - 1)
    }

    /// Connects `u` and `v` with an edge of the given weight.
    ///
    /// # Errors
    /// - [`GraphError::InvalidWeight`] if `weight` is negative, NaN or infinite.
    /// - [`GraphError::UnknownVertex`] if either endpoint is not in the graph.
    ///
    /// The graph is unchanged on error.
    pub fn add_edge(
        &mut self,
        u: VertexId,
        v: VertexId,
        weight: f64,
    ) -> Result<EdgeId, GraphError> {
        if !(weight.is_finite() && weight >= 0.0) {
            return Err(GraphError::InvalidWeight(weight));
        }
        for endpoint in [u, v] {
            if !self.contains_vertex(endpoint) {
                return Err(GraphError::UnknownVertex(endpoint));
            }
        }

        let id = EdgeId(self.edges.len());
        self.edges.push(Some(Edge::new(u, v, weight)));
        self.edge_count += 1;

        if let Some(slot) = self.vertices[u.0].as_mut() {
            slot.incident.push(id);
        }
        if u != v {
            if let Some(slot) = self.vertices[v.0].as_mut() {
                slot.incident.push(id);
            }
        }
        Ok(id)
    }

    /// The first edge connecting `u` and `v`, if any.
    pub fn get_edge(&self, u: VertexId, v: VertexId) -> Option<EdgeId> {
        self.slot(u)?
            .incident
            .iter()
            .copied()
            .find(|&id| self.edge(id).is_some_and(|edge| edge.connects(u, v)))
    }

    /// Detaches the edge from both endpoints and drops it from the graph.
    ///
    /// # Returns
    /// The removed edge, or `None` if `id` is not a live edge.
    pub fn remove_edge(&mut self, id: EdgeId) -> Option<Edge> {
        let edge = self.edges.get_mut(id.0)?.take()?;
        self.edge_count -= 1;
        for endpoint in edge.endpoints() {
            if let Some(slot) = self.vertices[endpoint.0].as_mut() {
                slot.incident.retain(|&e| e != id);
            }
        }
        Some(edge)
    }

    /// Removes `vertex` along with every edge touching it.
    ///
    /// # Returns
    /// The number of edges dropped with the vertex, or `None` if `vertex` is not in the graph.
    pub fn remove_vertex(&mut self, vertex: VertexId) -> Option<usize> {
        let slot = self.vertices.get_mut(vertex.0)?.take()?;
        self.vertex_count -= 1;

        let mut dropped = 0;
        for id in slot.incident {
            let Some(edge) = self.edges[id.0].take() else {
                continue;
            };
            self.edge_count -= 1;
            dropped += 1;

            let other = edge.other(vertex);
            if let Some(other_slot) = self.vertices[other.0].as_mut() {
                other_slot.incident.retain(|&e| e != id);
            }
        }
        Some(dropped)
    }

    /// `(neighbor, weight)` for every edge touching `vertex`, in insertion order.
    /// Parallel edges show up once each. Empty for unknown vertices.
    pub fn incident(&self, vertex: VertexId) -> impl Iterator<Item = (VertexId, f64)> + '_ {
        self.slot(vertex)
            .into_iter()
            .flat_map(|slot| slot.incident.iter())
            .filter_map(move |&id| self.edge(id).map(|e| (e.other(vertex), e.weight())))
    }

    /// The distinct neighbours of `vertex`, in the order their first edge was added.
    /// Empty for unknown or isolated vertices.
    pub fn adjacent(&self, vertex: VertexId) -> Vec<VertexId> {
        let mut neighbors = Vec::new();
        for (neighbor, _) in self.incident(vertex) {
            if !neighbors.contains(&neighbor) {
                neighbors.push(neighbor);
            }
        }
        neighbors
    }

    /// Number of edges touching `vertex`.
    pub fn degree(&self, vertex: VertexId) -> usize {
        self.slot(vertex).map_or(0, |slot| slot.incident.len())
    }
}
