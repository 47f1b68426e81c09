//! Reachability from a set of sources by depth-first search.
//!
//! # Examples
//!
//! ```
//! use algraf::{algo::DepthFirstReach, Digraph};
//!
//! let mut graph = Digraph::new(4);
//! graph.add_edge((0, 1)).add_edge((2, 3));
//!
//! let reach = DepthFirstReach::on(&graph).run([0, 3]);
//!
//! assert!(reach.has_path_to(1));
//! assert!(!reach.has_path_to(2));
//! assert_eq!(reach.count(), 3);
//! ```

use fixedbitset::FixedBitSet;
use tracing::debug;

use crate::{core::Neighbors, visit::Dfs};

#[derive(Debug, Clone)]
pub struct DepthFirstReach {
    marked: FixedBitSet,
}

pub struct DepthFirstReachBuilder<'a, G> {
    graph: &'a G,
}

impl DepthFirstReach {
    pub fn on<G: Neighbors>(graph: &G) -> DepthFirstReachBuilder<'_, G> {
        DepthFirstReachBuilder { graph }
    }

    /// Returns `true` if `vertex` is reachable from any of the sources.
    pub fn has_path_to(&self, vertex: usize) -> bool {
        self.marked.contains(vertex)
    }

    /// Number of reachable vertices, sources included.
    pub fn count(&self) -> usize {
        self.marked.count_ones(..)
    }
}

impl<'a, G: Neighbors> DepthFirstReachBuilder<'a, G> {
    pub fn run<I>(self, sources: I) -> DepthFirstReach
    where
        I: IntoIterator<Item = usize>,
    {
        let mut marked = FixedBitSet::with_capacity(self.graph.vertex_count());
        marked.extend(Dfs::new(self.graph).start_multi(sources));

        debug!(reached = marked.count_ones(..), "reachability computed");

        DepthFirstReach { marked }
    }
}
