use std::cmp::Ordering;

use crate::{
    graph::{GraphError, VertexId, WeightedGraph},
    sets::{
        heap::{Comparator, IndexedHeap},
        map::ChainedMap,
    },
};

/// Shortest-path distance from one source to every vertex of the graph.
/// Unreachable vertices map to `f64::INFINITY`.
pub type DistanceMap = ChainedMap<VertexId, f64>;

/// Orders vertices by their tentative distance. The table lives inside the
/// comparator so that the heap can own it while Dijkstra relaxes edges.
struct TentativeDistance {
    distances: DistanceMap,
}

impl TentativeDistance {
    fn of(&self, vertex: VertexId) -> f64 {
        self.distances.get(&vertex).copied().unwrap_or(f64::INFINITY)
    }
}

impl Comparator<VertexId> for TentativeDistance {
    fn compare(&self, a: &VertexId, b: &VertexId) -> Ordering {
        self.of(*a).total_cmp(&self.of(*b))
    }
}

impl WeightedGraph {
    /// Computes the shortest-path distance from `source` to every vertex (Dijkstra).
    ///
    /// Every vertex enters an [`IndexedHeap`] keyed by its tentative distance
    /// (0 for the source, infinity for the rest). The closest vertex is extracted
    /// repeatedly and each of its edges relaxed; an improved neighbour is re-sifted
    /// in place with `update_priority`.
    ///
    /// Nothing is cached: each call costs O((V + E) log V).
    ///
    /// # Errors
    /// [`GraphError::UnknownVertex`] if `source` is not in the graph.
    pub fn distances_from(&self, source: VertexId) -> Result<DistanceMap, GraphError> {
        if !self.contains_vertex(source) {
            return Err(GraphError::UnknownVertex(source));
        }

        let mut distances = DistanceMap::with_capacity(self.vertex_count() * 2);
        for vertex in self.vertices() {
            let initial = if vertex == source { 0.0 } else { f64::INFINITY };
            distances.put(vertex, initial);
        }

        let mut queue = IndexedHeap::with_comparator(TentativeDistance { distances });
        for vertex in self.vertices() {
            queue.offer(vertex);
        }

        while let Some(current) = queue.poll() {
            let base = queue.comparator().of(current);
            if base.is_infinite() {
                // everything left in the queue is unreachable as well
                continue;
            }
            for (neighbor, weight) in self.incident(current) {
                let candidate = base + weight;
                if candidate < queue.comparator().of(neighbor) {
                    queue.comparator_mut().distances.put(neighbor, candidate);
                    // settled vertices never improve when weights are non-negative
                    if queue.contains(&neighbor) {
                        queue.update_priority(&neighbor)?;
                    }
                }
            }
        }

        Ok(queue.into_comparator().distances)
    }

    /// Shortest-path distance between two vertices; infinity if disconnected.
    ///
    /// # Errors
    /// [`GraphError::UnknownVertex`] if either vertex is not in the graph.
    pub fn distance_between(&self, from: VertexId, to: VertexId) -> Result<f64, GraphError> {
        self.distances_from(from)?
            .get(&to)
            .copied()
            .ok_or(GraphError::UnknownVertex(to))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng, rngs::StdRng};

    fn v(i: usize) -> VertexId {
        VertexId(i)
    }

    // 0 --1-- 1 --1-- 2
    //  \              |
    //   ------5------ 3 --2-- 4     5 (isolated)
    fn sample_graph() -> WeightedGraph {
        WeightedGraph::from_edges(
            6,
            &[
                (0, 1, 1.0),
                (1, 2, 1.0),
                (2, 3, 1.0),
                (0, 3, 5.0),
                (3, 4, 2.0),
            ],
        )
        .unwrap()
    }

    /// Floyd-Warshall on an adjacency matrix, as an independent reference.
    fn all_pairs(graph: &WeightedGraph) -> Vec<Vec<f64>> {
        let n = graph.vertices().map(|v| v.index() + 1).max().unwrap_or(0);
        let mut dist = vec![vec![f64::INFINITY; n]; n];
        for (i, row) in dist.iter_mut().enumerate() {
            row[i] = 0.0;
        }
        for (_, edge) in graph.edges() {
            let [a, b] = edge.endpoints();
            let w = edge.weight().min(dist[a.index()][b.index()]);
            dist[a.index()][b.index()] = w;
            dist[b.index()][a.index()] = w;
        }
        for k in 0..n {
            for i in 0..n {
                for j in 0..n {
                    let through = dist[i][k] + dist[k][j];
                    if through < dist[i][j] {
                        dist[i][j] = through;
                    }
                }
            }
        }
        dist
    }

    #[test]
    fn test_source_is_at_distance_zero() {
        let graph = sample_graph();
        for source in graph.vertices() {
            let distances = graph.distances_from(source).unwrap();
            assert_eq!(distances.get(&source), Some(&0.0));
            assert_eq!(distances.len(), graph.vertex_count());
        }
    }

    #[test]
    fn test_prefers_cheaper_longer_path() {
        let graph = sample_graph();
        let distances = graph.distances_from(v(0)).unwrap();
        assert_eq!(distances.get(&v(1)), Some(&1.0));
        assert_eq!(distances.get(&v(2)), Some(&2.0));
        // 0-1-2-3 costs 3, the direct edge costs 5
        assert_eq!(distances.get(&v(3)), Some(&3.0));
        assert_eq!(distances.get(&v(4)), Some(&5.0));
    }

    #[test]
    fn test_unreachable_vertices_are_infinitely_far() {
        let graph = sample_graph();
        let distances = graph.distances_from(v(2)).unwrap();
        assert_eq!(distances.get(&v(5)), Some(&f64::INFINITY));

        let from_isolated = graph.distances_from(v(5)).unwrap();
        assert_eq!(from_isolated.get(&v(5)), Some(&0.0));
        assert!(
            graph
                .vertices()
                .filter(|&u| u != v(5))
                .all(|u| from_isolated.get(&u) == Some(&f64::INFINITY))
        );
    }

    #[test]
    fn test_unknown_source_is_an_error() {
        let graph = sample_graph();
        assert_eq!(
            graph.distances_from(v(17)).unwrap_err(),
            GraphError::UnknownVertex(v(17))
        );
        assert!(graph.distance_between(v(0), v(17)).is_err());
    }

    #[test]
    fn test_zero_weight_edges() {
        let graph = WeightedGraph::from_edges(3, &[(0, 1, 0.0), (1, 2, 0.0)]).unwrap();
        assert_eq!(graph.distance_between(v(0), v(2)).unwrap(), 0.0);
    }

    #[test]
    fn test_removed_vertices_are_skipped() {
        let mut graph = sample_graph();
        graph.remove_vertex(v(2));
        let distances = graph.distances_from(v(0)).unwrap();
        assert_eq!(distances.get(&v(2)), None);
        assert_eq!(distances.get(&v(3)), Some(&5.0));
        assert_eq!(distances.get(&v(4)), Some(&7.0));
    }

    #[test]
    fn test_tentative_distance_orders_unknown_last() {
        let mut distances = DistanceMap::new();
        distances.put(v(0), 2.0);
        distances.put(v(1), 0.0);
        distances.put(v(2), f64::INFINITY);
        let by_distance = TentativeDistance { distances };

        assert_eq!(by_distance.compare(&v(1), &v(0)), Ordering::Less);
        assert_eq!(by_distance.compare(&v(0), &v(2)), Ordering::Less);
        // never relaxed counts as infinitely far
        assert_eq!(by_distance.compare(&v(2), &v(3)), Ordering::Equal);
        assert_eq!(by_distance.compare(&v(3), &v(0)), Ordering::Greater);
    }

    #[test]
    fn test_randomized_against_floyd_warshall() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            let n = rng.random_range(2..25);
            let mut graph = WeightedGraph::with_vertices(n);
            for i in 0..n {
                for j in 0..i {
                    if rng.random_bool(0.2) {
                        let w = rng.random_range(0..10) as f64;
                        graph.add_edge(v(i), v(j), w).unwrap();
                    }
                }
            }
            let reference = all_pairs(&graph);
            for source in graph.vertices() {
                let distances = graph.distances_from(source).unwrap();
                for target in graph.vertices() {
                    assert_eq!(
                        *distances.get(&target).unwrap(),
                        reference[source.index()][target.index()],
                        "distance {source} -> {target}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_edge_difference_bounded_by_weight() {
        let mut rng = StdRng::seed_from_u64(7);
        let n = 30;
        let mut graph = WeightedGraph::with_vertices(n);
        // a spanning path keeps it connected, extra random chords on top
        for i in 1..n {
            let w = rng.random_range(0.0..4.0);
            graph.add_edge(v(i - 1), v(i), w).unwrap();
        }
        for _ in 0..40 {
            let (a, b) = (rng.random_range(0..n), rng.random_range(0..n));
            let w = rng.random_range(0.0..4.0);
            graph.add_edge(v(a), v(b), w).unwrap();
        }

        for source in graph.vertices() {
            let distances = graph.distances_from(source).unwrap();
            assert_eq!(distances.get(&source), Some(&0.0));
            for (_, edge) in graph.edges() {
                let [a, b] = edge.endpoints();
                let (da, db) = (distances.get(&a).unwrap(), distances.get(&b).unwrap());
                assert!(da.is_finite() && db.is_finite());
                assert!((da - db).abs() <= edge.weight() + 1e-9);
            }
        }
    }
}
