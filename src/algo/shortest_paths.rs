//! Find [single source shortest paths] and their distances in an
//! edge-weighted graph using [Dijkstra's algorithm].
//!
//! See available parameters [here](ShortestPathsBuilder#implementations).
//!
//! All edge weights must be non-negative. This is not checked: with negative
//! weights the reported distances are silently wrong.
//!
//! [single source shortest paths]:
//!     https://en.wikipedia.org/wiki/Shortest_path_problem#Single-source_shortest_paths
//! [Dijkstra's algorithm]: https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
//!
//! # Examples
//!
//! ```
//! use algraf::{algo::ShortestPaths, EdgeWeightedDigraph};
//!
//! let mut network = EdgeWeightedDigraph::new(4);
//! network.extend_with_edges([(0, 1, 5u32), (0, 2, 1), (2, 1, 2), (1, 3, 1)]);
//!
//! let shortest_paths = ShortestPaths::on(&network).run(0);
//!
//! assert_eq!(shortest_paths.dist_to(3), 4);
//! assert_eq!(shortest_paths[1], 3);
//!
//! let hops = shortest_paths
//!     .path_to(3)
//!     .unwrap()
//!     .into_iter()
//!     .map(|id| network.edge(id).to())
//!     .collect::<Vec<_>>();
//! assert_eq!(hops, vec![2, 1, 3]);
//! ```

use std::ops::Index;

use crate::core::{EdgeId, Weight};

mod builder;
mod dijkstra;

pub use builder::ShortestPathsBuilder;

/// Shortest paths and their distances from a single source vertex.
///
/// See [module](self) documentation for more details and example.
#[derive(Debug, Clone)]
pub struct ShortestPaths<W> {
    source: usize,
    dist_to: Vec<W>,
    // The predecessor on the shortest path and the edge from it.
    edge_to: Vec<Option<(usize, EdgeId)>>,
}

impl<W: Weight> ShortestPaths<W> {
    /// Source vertex where the search was started.
    pub fn source(&self) -> usize {
        self.source
    }

    /// Length of the shortest path to `vertex`, or [`Weight::inf`] if no path
    /// was found.
    ///
    /// A path is not found if the vertex is unreachable, or the
    /// [goal](ShortestPathsBuilder::goal) was reached before the distance of
    /// the vertex was final. Paths whose length would overflow the weight
    /// type or reach [`Weight::inf`] are not found either.
    pub fn dist_to(&self, vertex: usize) -> W {
        self.dist_to[vertex]
    }

    pub fn has_path_to(&self, vertex: usize) -> bool {
        self.dist_to[vertex] < W::inf()
    }

    /// Edges on the shortest path from the source to `vertex`, source side
    /// first. The path to the source itself is empty.
    pub fn path_to(&self, vertex: usize) -> Option<Vec<EdgeId>> {
        if !self.has_path_to(vertex) {
            return None;
        }

        let mut path = Vec::new();
        let mut current = vertex;

        while let Some((parent, edge)) = self.edge_to[current] {
            path.push(edge);
            current = parent;
        }

        path.reverse();
        Some(path)
    }

    /// Vertices on the shortest path from the source to `vertex`, both
    /// included.
    pub fn vertex_path_to(&self, vertex: usize) -> Option<Vec<usize>> {
        if !self.has_path_to(vertex) {
            return None;
        }

        let mut path = vec![vertex];
        let mut current = vertex;

        while let Some((parent, _)) = self.edge_to[current] {
            path.push(parent);
            current = parent;
        }

        path.reverse();
        Some(path)
    }
}

impl<W> Index<usize> for ShortestPaths<W> {
    type Output = W;

    fn index(&self, vertex: usize) -> &Self::Output {
        &self.dist_to[vertex]
    }
}

#[cfg(test)]
mod tests {
    use fastrand::Rng;
    use proptest::prelude::*;

    use crate::{
        core::marker::{Directed, EdgeType, Undirected},
        infra::{
            proptest::{graph_directed, graph_undirected},
            testing::{approx_eq, random_graph, tiny_ewd, tiny_ewg, to_petgraph},
        },
        storage::AdjList,
        EdgeWeightedDigraph,
    };

    use super::*;

    fn assert_against_petgraph<Ty: EdgeType>(
        graph: &AdjList<u32, Ty>,
        source: usize,
    ) {
        let ours = ShortestPaths::on(graph).run(source);
        let theirs = petgraph::algo::dijkstra(
            &to_petgraph(graph),
            petgraph::graph::NodeIndex::new(source),
            None,
            |edge| *edge.weight(),
        );

        for v in graph.vertices() {
            let expected = theirs.get(&petgraph::graph::NodeIndex::new(v)).copied();
            assert_eq!(ours.has_path_to(v), expected.is_some(), "vertex {v}");

            if let Some(expected) = expected {
                assert_eq!(ours.dist_to(v), expected, "vertex {v}");

                let path_weight = ours
                    .path_to(v)
                    .unwrap()
                    .into_iter()
                    .map(|id| *graph.edge(id).weight())
                    .sum::<u32>();
                assert_eq!(path_weight, expected, "vertex {v}");
            }
        }
    }

    #[test]
    fn tiny_ewd_distances() {
        let graph = tiny_ewd();
        let sp = ShortestPaths::on(&graph).run(0);

        let expected = [0.0, 1.05, 0.26, 0.99, 0.38, 0.73, 1.51, 0.60];
        for (v, &dist) in expected.iter().enumerate() {
            assert!(approx_eq(sp.dist_to(v), dist), "{v}: {}", sp.dist_to(v));
        }

        assert_eq!(sp.source(), 0);
        assert_eq!(sp.path_to(0), Some(vec![]));
    }

    #[test]
    fn tiny_ewd_paths() {
        let graph = tiny_ewd();
        let sp = ShortestPaths::on(&graph).run(0);

        assert_eq!(
            sp.path_to(1),
            Some(vec![EdgeId::new(6), EdgeId::new(0), EdgeId::new(5)])
        );
        assert_eq!(sp.vertex_path_to(6), Some(vec![0, 2, 7, 3, 6]));

        for v in graph.vertices() {
            let path = sp.path_to(v).unwrap();
            let mut at = 0;
            for id in path {
                assert_eq!(graph.edge(id).from(), at);
                at = graph.edge(id).to();
            }
            assert_eq!(at, v);
        }
    }

    #[test]
    fn relaxed_edges() {
        let graph = tiny_ewd();
        let sp = ShortestPaths::on(&graph).run(0);

        for edge in graph.edges() {
            assert!(sp.dist_to(edge.to()) <= sp.dist_to(edge.from()) + *edge.weight() + 1e-12);
        }
    }

    #[test]
    fn unreachable() {
        let mut graph = EdgeWeightedDigraph::<u32>::new(3);
        graph.add_edge((1, 0, 4));

        let sp = ShortestPaths::on(&graph).run(0);

        assert!(!sp.has_path_to(1));
        assert_eq!(sp.dist_to(1), u32::MAX);
        assert_eq!(sp.path_to(2), None);
        assert_eq!(sp[0], 0);
    }

    #[test]
    fn undirected() {
        let graph = tiny_ewg();
        let sp = ShortestPaths::on(&graph).run(6);

        assert!(approx_eq(sp.dist_to(0), 0.58));
        assert!(approx_eq(sp.dist_to(1), 0.76));
        assert!(approx_eq(sp.dist_to(4), 0.93));
        assert!(approx_eq(sp.dist_to(5), 1.02));
        assert_eq!(sp.vertex_path_to(1), Some(vec![6, 2, 1]));
    }

    #[test]
    fn goal_stops_early() {
        let graph = tiny_ewd();
        let sp = ShortestPaths::on(&graph).goal(2).run(0);

        assert!(approx_eq(sp.dist_to(2), 0.26));
        assert!(!sp.has_path_to(6));
    }

    #[test]
    fn goal_forgets_tentative_distances() {
        let mut graph = EdgeWeightedDigraph::<u32>::new(3);
        graph.extend_with_edges([(0, 1, 1), (0, 2, 10), (1, 2, 1)]);

        let sp = ShortestPaths::on(&graph).goal(1).run(0);

        assert_eq!(sp.dist_to(1), 1);
        assert_eq!(sp.vertex_path_to(1), Some(vec![0, 1]));
        assert!(!sp.has_path_to(2));
        assert_eq!(sp.dist_to(2), u32::MAX);
        assert_eq!(sp.path_to(2), None);
        assert_eq!(sp.vertex_path_to(2), None);

        let full = ShortestPaths::on(&graph).run(0);
        assert_eq!(full.dist_to(2), 2);
    }

    #[test]
    fn unreachable_goal_explores_everything() {
        let mut graph = EdgeWeightedDigraph::<u32>::new(4);
        graph.extend_with_edges([(0, 1, 3), (1, 2, 4)]);

        let sp = ShortestPaths::on(&graph).goal(3).run(0);

        assert_eq!(sp.dist_to(2), 7);
        assert!(!sp.has_path_to(3));
    }

    #[test]
    fn small_integer_weights_do_not_overflow() {
        let mut graph = EdgeWeightedDigraph::<u8>::new(4);
        graph.extend_with_edges([(0, 1, 200), (1, 2, 100), (1, 3, 54)]);

        let sp = ShortestPaths::on(&graph).run(0);

        assert_eq!(sp.dist_to(1), 200);
        assert!(!sp.has_path_to(2));
        assert_eq!(sp.dist_to(3), 254);
        assert_eq!(sp.vertex_path_to(3), Some(vec![0, 1, 3]));
    }

    #[test]
    fn agrees_with_petgraph() {
        let mut rng = Rng::with_seed(5);

        for _ in 0..100 {
            let n = rng.usize(1..20);
            let m = rng.usize(0..4 * n);
            let source = rng.usize(0..n);

            assert_against_petgraph(&random_graph::<Directed>(&mut rng, n, m, 100), source);
            assert_against_petgraph(&random_graph::<Undirected>(&mut rng, n, m, 100), source);
        }
    }

    proptest! {
        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_connected_all_reachable(graph in graph_undirected(any::<u16>().prop_map(u32::from)).connected(), source: u64) {
            let source = (source % graph.vertex_count() as u64) as usize;
            let sp = ShortestPaths::on(&graph).run(source);

            prop_assert!(graph.vertices().all(|v| sp.has_path_to(v)));
        }

        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_matches_petgraph(graph in graph_directed(0..1000u32).max_size(64).allow_loops(), source: u64) {
            let source = (source % graph.vertex_count() as u64) as usize;
            assert_against_petgraph(&graph, source);
        }
    }
}
