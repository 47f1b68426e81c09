//! Shortest paths by number of edges, found by [breadth-first search].
//!
//! [breadth-first search]: https://en.wikipedia.org/wiki/Breadth-first_search
//!
//! # Examples
//!
//! ```
//! use algraf::{algo::BreadthFirstPaths, Graph};
//!
//! let mut graph = Graph::new(6);
//! graph.extend_with_edges([(0, 5), (2, 4), (2, 3), (1, 2), (0, 1), (3, 4), (3, 5), (0, 2)]);
//!
//! let paths = BreadthFirstPaths::on(&graph).run(0);
//!
//! assert_eq!(paths.path_to(4), Some(vec![0, 2, 4]));
//! assert_eq!(paths.dist_to(5), Some(1));
//! ```

use tracing::debug;

use crate::{core::Neighbors, visit::Bfs};

/// Breadth-first search tree from one or more sources.
///
/// See [module](self) documentation for more details and example.
#[derive(Debug, Clone)]
pub struct BreadthFirstPaths {
    edge_to: Vec<Option<usize>>,
    dist_to: Vec<Option<usize>>,
}

pub struct BreadthFirstPathsBuilder<'a, G> {
    graph: &'a G,
}

impl BreadthFirstPaths {
    pub fn on<G: Neighbors>(graph: &G) -> BreadthFirstPathsBuilder<'_, G> {
        BreadthFirstPathsBuilder { graph }
    }

    pub fn has_path_to(&self, vertex: usize) -> bool {
        self.dist_to[vertex].is_some()
    }

    /// Number of edges on a shortest path to `vertex`, `None` if unreachable.
    pub fn dist_to(&self, vertex: usize) -> Option<usize> {
        self.dist_to[vertex]
    }

    /// Vertices on a shortest path from the closest source to `vertex`,
    /// source first.
    pub fn path_to(&self, vertex: usize) -> Option<Vec<usize>> {
        if !self.has_path_to(vertex) {
            return None;
        }

        let mut path = vec![vertex];
        let mut current = vertex;

        while let Some(parent) = self.edge_to[current] {
            path.push(parent);
            current = parent;
        }

        path.reverse();
        Some(path)
    }
}

impl<'a, G: Neighbors> BreadthFirstPathsBuilder<'a, G> {
    pub fn run(self, source: usize) -> BreadthFirstPaths {
        self.run_multi([source])
    }

    /// Runs the search from all sources at once. Every vertex is then reached
    /// from its closest source.
    pub fn run_multi<I>(self, sources: I) -> BreadthFirstPaths
    where
        I: IntoIterator<Item = usize>,
    {
        let n = self.graph.vertex_count();
        let mut edge_to = vec![None; n];
        let mut dist_to: Vec<Option<usize>> = vec![None; n];
        let mut reached = 0;

        for event in Bfs::new(self.graph).start_multi(sources) {
            dist_to[event.vertex] = match event.parent {
                Some((parent, _)) => {
                    edge_to[event.vertex] = Some(parent);
                    dist_to[parent].map(|dist| dist + 1)
                }
                None => Some(0),
            };
            reached += 1;
        }

        debug!(vertices = n, reached, "breadth-first paths computed");

        BreadthFirstPaths { edge_to, dist_to }
    }
}

#[cfg(test)]
mod tests {
    use fastrand::Rng;

    use crate::{
        core::marker::Directed,
        infra::testing::{random_graph, tiny_dg},
        Graph,
    };

    use super::*;

    fn tiny_cg() -> Graph {
        let mut graph = Graph::new(6);
        graph.extend_with_edges([
            (0, 5),
            (2, 4),
            (2, 3),
            (1, 2),
            (0, 1),
            (3, 4),
            (3, 5),
            (0, 2),
        ]);
        graph
    }

    #[test]
    fn tiny_cg_paths() {
        let graph = tiny_cg();
        let paths = BreadthFirstPaths::on(&graph).run(0);

        assert_eq!(paths.path_to(0), Some(vec![0]));
        assert_eq!(paths.path_to(1), Some(vec![0, 1]));
        assert_eq!(paths.path_to(2), Some(vec![0, 2]));
        assert_eq!(paths.path_to(3), Some(vec![0, 2, 3]));
        assert_eq!(paths.path_to(4), Some(vec![0, 2, 4]));
        assert_eq!(paths.path_to(5), Some(vec![0, 5]));
    }

    #[test]
    fn unreachable() {
        let graph = tiny_dg();
        let paths = BreadthFirstPaths::on(&graph).run(0);

        assert!(paths.has_path_to(3));
        assert!(!paths.has_path_to(6));
        assert_eq!(paths.path_to(6), None);
        assert_eq!(paths.dist_to(6), None);
    }

    #[test]
    fn multi_source_closest() {
        let graph = tiny_dg();
        let paths = BreadthFirstPaths::on(&graph).run_multi([1, 7, 10]);

        assert_eq!(paths.dist_to(7), Some(0));
        assert_eq!(paths.dist_to(6), Some(1));
        assert_eq!(paths.dist_to(12), Some(1));
        assert_eq!(paths.path_to(4), Some(vec![7, 6, 4]));
        assert!(paths.has_path_to(1));
    }

    #[test]
    fn dist_matches_brute_force() {
        let mut rng = Rng::with_seed(42);

        for _ in 0..50 {
            let n = rng.usize(1..20);
            let m = rng.usize(0..3 * n);
            let graph = random_graph::<Directed>(&mut rng, n, m, 1);
            let source = rng.usize(0..n);

            // Bellman-Ford with unit weights.
            let mut expected = vec![None; n];
            expected[source] = Some(0usize);
            for _ in 0..n {
                for edge in graph.edges() {
                    let (v, w) = edge.endpoints();
                    if let Some(dist) = expected[v] {
                        if expected[w].map_or(true, |current| dist + 1 < current) {
                            expected[w] = Some(dist + 1);
                        }
                    }
                }
            }

            let paths = BreadthFirstPaths::on(&graph).run(source);

            for v in graph.vertices() {
                assert_eq!(paths.dist_to(v), expected[v]);

                if let Some(path) = paths.path_to(v) {
                    assert_eq!(path.len() - 1, expected[v].unwrap());
                    assert_eq!(path.first(), Some(&source));
                    assert!(path
                        .windows(2)
                        .all(|pair| graph.adjacent(pair[0]).any(|w| w == pair[1])));
                }
            }
        }
    }
}
