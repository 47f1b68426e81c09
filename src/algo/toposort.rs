//! [Topological order] of a directed acyclic graph.
//!
//! The order is the reverse postorder of a depth-first search with roots in
//! increasing order, see [`DepthFirstOrder`](super::DepthFirstOrder).
//!
//! [Topological order]: https://en.wikipedia.org/wiki/Topological_sorting
//!
//! # Examples
//!
//! ```
//! use algraf::{algo::topological_order, Digraph};
//!
//! let mut graph = Digraph::new(4);
//! graph.extend_with_edges([(0, 1), (1, 2), (0, 3), (3, 2)]);
//!
//! assert_eq!(topological_order(&graph), Ok(vec![0, 1, 3, 2]));
//!
//! graph.add_edge((2, 0));
//! assert!(topological_order(&graph).is_err());
//! ```

use thiserror::Error;

use crate::core::{marker::Directed, GraphBase, Neighbors};

use super::{DepthFirstOrder, DirectedCycle};

/// The graph contains a cycle and so has no topological order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("graph contains cycle {cycle:?}")]
pub struct CycleError {
    /// Vertices of a cycle, the first and the last one are the same.
    pub cycle: Vec<usize>,
}

pub fn topological_order<G>(graph: &G) -> Result<Vec<usize>, CycleError>
where
    G: Neighbors + GraphBase<EdgeType = Directed>,
{
    if let Some(cycle) = DirectedCycle::on(graph).run().into_cycle() {
        return Err(CycleError { cycle });
    }

    Ok(DepthFirstOrder::on(graph)
        .run()
        .reverse_post_order()
        .collect())
}

/// Returns `true` if the digraph contains a directed cycle, self-loops
/// included.
pub fn is_cyclic<G>(graph: &G) -> bool
where
    G: Neighbors + GraphBase<EdgeType = Directed>,
{
    DirectedCycle::on(graph).run().has_cycle()
}

/// Returns `true` if the digraph is a directed acyclic graph.
pub fn is_dag<G>(graph: &G) -> bool
where
    G: Neighbors + GraphBase<EdgeType = Directed>,
{
    !is_cyclic(graph)
}
