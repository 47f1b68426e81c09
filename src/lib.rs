//! An in-memory graph algorithms engine.
//!
//! Graphs are stored in [`AdjList`](storage::AdjList), a single storage
//! parameterized by the edge weight and the [edge type](core::marker). The
//! classical representations are aliases of it: [`Graph`], [`Digraph`],
//! [`EdgeWeightedGraph`] and [`EdgeWeightedDigraph`].
//!
//! Algorithms live in [`algo`] and all follow the same shape: configure on a
//! graph, run to completion, query the frozen result.
//!
//! ```
//! use algraf::{algo::StronglyConnectedComponents, Digraph};
//!
//! let mut digraph = Digraph::new(4);
//! digraph.add_edge((0, 1)).add_edge((1, 0)).add_edge((1, 2)).add_edge((2, 3));
//!
//! let scc = StronglyConnectedComponents::on(&digraph).run();
//!
//! assert_eq!(scc.count(), 3);
//! assert!(scc.strongly_connected(0, 1));
//! assert!(!scc.strongly_connected(2, 3));
//! ```

pub mod algo;
pub mod common;
pub mod core;
pub mod graph;
pub mod infra;
pub mod storage;
pub mod visit;

#[doc(inline)]
pub use crate::{
    core::{DirectedEdge, Edge, EdgeId},
    graph::{Digraph, EdgeWeightedDigraph, EdgeWeightedGraph, Graph},
};

pub mod prelude {
    #[doc(hidden)]
    pub use crate::core::{GraphBase, NeighborRef, Neighbors};
}
