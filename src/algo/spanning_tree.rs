//! Find a [minimum spanning] forest of an undirected edge-weighted graph.
//!
//! See available parameters [here](MinimumSpanningTreeBuilder#implementations).
//!
//! A disconnected graph yields a minimum spanning tree of each of its
//! connected components.
//!
//! [minimum spanning]: https://en.wikipedia.org/wiki/Minimum_spanning_tree
//!
//! # Examples
//!
//! ```
//! use algraf::{algo::{spanning_tree::Algo, MinimumSpanningTree}, EdgeWeightedGraph};
//!
//! let mut graph = EdgeWeightedGraph::new(4);
//! graph.extend_with_edges([(0, 1, 4u32), (1, 2, 1), (0, 2, 2), (2, 3, 7), (1, 3, 3)]);
//!
//! let mst = MinimumSpanningTree::on(&graph).run();
//! assert_eq!(mst.weight(), 6);
//! assert_eq!(mst.len(), 3);
//!
//! let kruskal = MinimumSpanningTree::on(&graph).using(Algo::Kruskal).run();
//! assert_eq!(kruskal.weight(), mst.weight());
//! ```

use crate::core::EdgeId;

mod builder;
mod kruskal;
mod prim;

pub use builder::MinimumSpanningTreeBuilder;

/// Edges of a minimum spanning forest and their total weight.
///
/// See [module](self) documentation for more details and example.
#[derive(Debug, Clone)]
pub struct MinimumSpanningTree<W> {
    edges: Vec<EdgeId>,
    weight: W,
}

impl<W: Copy> MinimumSpanningTree<W> {
    /// Edges of the forest.
    ///
    /// Prim's algorithm reports the tree edge of every vertex in increasing
    /// order of vertices, Kruskal's algorithm reports edges in increasing
    /// order of weights.
    pub fn edges(&self) -> &[EdgeId] {
        &self.edges
    }

    /// Sum of weights of the edges.
    pub fn weight(&self) -> W {
        self.weight
    }

    /// Number of edges, that is, the number of vertices minus the number of
    /// connected components.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.edges.len()
    }
}

/// Algorithm for [`MinimumSpanningTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum Algo {
    /// [Prim's algorithm](https://en.wikipedia.org/wiki/Prim%27s_algorithm)
    /// with an indexed priority queue.
    ///
    /// Grows the tree from a vertex by repeatedly adding the lightest edge
    /// leaving it.
    #[default]
    Prim,

    /// [Kruskal's
    /// algorithm](https://en.wikipedia.org/wiki/Kruskal%27s_algorithm).
    ///
    /// Adds edges in increasing order of weights unless they connect vertices
    /// that are already connected. Sorts all edges, which pays off on sparse
    /// graphs.
    Kruskal,
}
