//! Find connected components of an undirected graph and [strongly connected]
//! components of a digraph.
//!
//! See available parameters [here](ConnectedComponentsBuilder#implementations)
//! or [here](StronglyConnectedComponentsBuilder#implementations).
//!
//! # Examples
//!
//! ```
//! use algraf::{algo::{is_strongly_connected, StronglyConnectedComponents}, Digraph};
//!
//! let mut graph = Digraph::new(4);
//! graph.extend_with_edges([(0, 1), (1, 2), (2, 0), (2, 3)]);
//!
//! let scc = StronglyConnectedComponents::on(&graph).run();
//!
//! assert_eq!(scc.count(), 2);
//! assert!(scc.strongly_connected(0, 2));
//! assert!(!scc.strongly_connected(2, 3));
//!
//! assert!(!is_strongly_connected(&graph));
//! graph.add_edge((3, 0));
//! assert!(is_strongly_connected(&graph));
//! ```
//!
//! [strongly connected]: https://en.wikipedia.org/wiki/Strongly_connected_component

use crate::core::{
    marker::{Directed, Undirected},
    GraphBase, Neighbors,
};

mod builder;
mod dfs;
mod kosaraju;

pub use builder::{ConnectedComponentsBuilder, StronglyConnectedComponentsBuilder};

/// Connected components of an undirected graph.
///
/// Components are numbered from zero in the order in which their first
/// vertex was reached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectedComponents {
    id: Vec<usize>,
    size: Vec<usize>,
}

/// Strongly connected components of a digraph.
///
/// Two vertices are in the same component iff each is reachable from the
/// other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StronglyConnectedComponents {
    inner: ConnectedComponents,
}

impl ConnectedComponents {
    pub(crate) fn new(id: Vec<usize>, count: usize) -> Self {
        let mut size = vec![0; count];
        for &component in id.iter() {
            size[component] += 1;
        }

        Self { id, size }
    }

    /// Returns the number of components.
    pub fn count(&self) -> usize {
        self.size.len()
    }

    /// Component id of `vertex`, in `0..count()`.
    pub fn id(&self, vertex: usize) -> usize {
        self.id[vertex]
    }

    /// Number of vertices in the component of `vertex`.
    pub fn size(&self, vertex: usize) -> usize {
        self.size[self.id[vertex]]
    }

    pub fn connected(&self, v: usize, w: usize) -> bool {
        self.id[v] == self.id[w]
    }

    /// Vertices grouped by component, indexed by component id. Vertices of a
    /// component are in increasing order.
    pub fn components(&self) -> Vec<Vec<usize>> {
        let mut components = self
            .size
            .iter()
            .map(|&size| Vec::with_capacity(size))
            .collect::<Vec<_>>();

        for (vertex, &component) in self.id.iter().enumerate() {
            components[component].push(vertex);
        }

        components
    }
}

impl StronglyConnectedComponents {
    pub fn count(&self) -> usize {
        self.inner.count()
    }

    pub fn id(&self, vertex: usize) -> usize {
        self.inner.id(vertex)
    }

    pub fn size(&self, vertex: usize) -> usize {
        self.inner.size(vertex)
    }

    pub fn strongly_connected(&self, v: usize, w: usize) -> bool {
        self.inner.connected(v, w)
    }

    pub fn components(&self) -> Vec<Vec<usize>> {
        self.inner.components()
    }
}

/// Returns `true` if the graph has at most one connected component.
pub fn is_connected<G>(graph: &G) -> bool
where
    G: Neighbors + GraphBase<EdgeType = Undirected>,
{
    ConnectedComponents::on(graph).run().count() <= 1
}

/// Returns `true` if every vertex of the digraph is reachable from every
/// other.
pub fn is_strongly_connected<G>(graph: &G) -> bool
where
    G: Neighbors + GraphBase<EdgeType = Directed>,
{
    StronglyConnectedComponents::on(graph).run().count() <= 1
}
