//! Find a directed [cycle] in a digraph.
//!
//! The search stops at the first back edge, so at most one cycle is
//! reported.
//!
//! [cycle]: https://en.wikipedia.org/wiki/Cycle_(graph_theory)
//!
//! # Examples
//!
//! ```
//! use algraf::{algo::DirectedCycle, Digraph};
//!
//! let mut graph = Digraph::new(6);
//! graph.extend_with_edges([(0, 5), (5, 4), (4, 3), (3, 5)]);
//!
//! let cycle = DirectedCycle::on(&graph).run();
//!
//! assert!(cycle.has_cycle());
//! assert_eq!(cycle.cycle(), Some(&[3, 5, 4, 3][..]));
//! ```

use tracing::{debug, trace};

use crate::{
    core::{marker::Directed, EdgeId, GraphBase, Neighbors},
    visit::{DfsEvent, DfsEvents},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectedCycle {
    cycle: Option<(Vec<usize>, Vec<EdgeId>)>,
}

pub struct DirectedCycleBuilder<'a, G> {
    graph: &'a G,
}

impl DirectedCycle {
    pub fn on<G>(graph: &G) -> DirectedCycleBuilder<'_, G>
    where
        G: Neighbors + GraphBase<EdgeType = Directed>,
    {
        DirectedCycleBuilder { graph }
    }

    pub fn has_cycle(&self) -> bool {
        self.cycle.is_some()
    }

    /// Vertices of the cycle. The first and the last vertex are the same, a
    /// self-loop on `v` is `[v, v]`.
    pub fn cycle(&self) -> Option<&[usize]> {
        self.cycle.as_ref().map(|(vertices, _)| vertices.as_slice())
    }

    /// Edges of the cycle, in the same order as [`cycle`](Self::cycle).
    pub fn edges(&self) -> Option<&[EdgeId]> {
        self.cycle.as_ref().map(|(_, edges)| edges.as_slice())
    }

    pub(crate) fn into_cycle(self) -> Option<Vec<usize>> {
        self.cycle.map(|(vertices, _)| vertices)
    }
}

impl<'a, G> DirectedCycleBuilder<'a, G>
where
    G: Neighbors + GraphBase<EdgeType = Directed>,
{
    pub fn run(self) -> DirectedCycle {
        let n = self.graph.vertex_count();
        let mut edge_to: Vec<Option<(usize, EdgeId)>> = vec![None; n];

        for event in DfsEvents::new(self.graph).start_all() {
            match event {
                DfsEvent::TreeEdge { src, dst, edge } => edge_to[dst] = Some((src, edge)),
                DfsEvent::BackEdge { src, dst, edge } => {
                    trace!(src, dst, "back edge closes a cycle");

                    let mut vertices = Vec::new();
                    let mut edges = Vec::new();
                    let mut current = src;

                    while current != dst {
                        vertices.push(current);

                        let Some((parent, tree_edge)) = edge_to[current] else {
                            break;
                        };

                        edges.push(tree_edge);
                        current = parent;
                    }

                    vertices.push(dst);
                    vertices.push(src);
                    vertices.reverse();

                    edges.push(edge);
                    edges.reverse();

                    debug!(len = edges.len(), "directed cycle found");

                    return DirectedCycle {
                        cycle: Some((vertices, edges)),
                    };
                }
                _ => {}
            }
        }

        debug!(vertices = n, "digraph is acyclic");

        DirectedCycle { cycle: None }
    }
}
