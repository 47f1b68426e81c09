//! The four classical graph representations.
//!
//! All of them are [`AdjList`] with a different weight and edge type, so they
//! share the adjacency iteration order and every traversal in
//! [`algo`](crate::algo) works on each of them.
//!
//! # Examples
//!
//! ```
//! use algraf::{DirectedEdge, EdgeWeightedDigraph, Graph};
//!
//! let mut graph = Graph::new(3);
//! graph.add_edge((0, 1)).add_edge((0, 2));
//! assert_eq!(graph.adjacent(0).collect::<Vec<_>>(), vec![2, 1]);
//!
//! let mut network = EdgeWeightedDigraph::new(2);
//! network.add_edge(DirectedEdge::new(0, 1, 0.5));
//! assert_eq!(network.adjacent_edges(0).next().map(|e| e.to()), Some(1));
//! ```

use crate::{
    core::marker::{Directed, Undirected},
    storage::AdjList,
};

/// Undirected, unweighted graph.
pub type Graph = AdjList<(), Undirected>;

/// Directed, unweighted graph.
pub type Digraph = AdjList<(), Directed>;

/// Undirected graph with a weight on each edge.
pub type EdgeWeightedGraph<W = f64> = AdjList<W, Undirected>;

/// Directed graph with a weight on each edge.
pub type EdgeWeightedDigraph<W = f64> = AdjList<W, Directed>;
