use rand::Rng;
use rand_distr::{Bernoulli, Distribution};

use crate::graph::{GraphError, VertexId, WeightedGraph};

impl WeightedGraph {
    /// Erdős–Rényi style graph: `n` vertices, each unordered pair of distinct vertices
    /// joined by a unit-weight edge independently with probability `probability`.
    ///
    /// Pairs are visited in a fixed order, so the same seeded `rng` always yields the
    /// same graph.
    ///
    /// # Errors
    /// [`GraphError::InvalidProbability`] if `probability` is not within `[0, 1]`.
    pub fn random<R: Rng + ?Sized>(
        n: usize,
        probability: f64,
        rng: &mut R,
    ) -> Result<Self, GraphError> {
        let coin =
            Bernoulli::new(probability).map_err(|_| GraphError::InvalidProbability(probability))?;

        let mut graph = WeightedGraph::with_vertices(n);
        for i in 0..n {
            for j in 0..i {
                if coin.sample(rng) {
                    graph.add_edge(VertexId(i), VertexId(j), 1.0)?;
                }
            }
        }
        Ok(graph)
    }
}
