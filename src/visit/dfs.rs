use std::collections::VecDeque;

use fixedbitset::FixedBitSet;

use crate::core::{EdgeId, Neighbors};

/// An event of the depth-first search, see [`DfsEvents`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DfsEvent {
    /// The vertex was discovered. Corresponds to preorder.
    Open { vertex: usize },
    /// The edge leads to a vertex that was not discovered yet. Reported just
    /// before the corresponding `Open` event.
    TreeEdge { src: usize, dst: usize, edge: EdgeId },
    /// The edge leads to a vertex which is open, that is, on the current
    /// search path. Self-loops are back edges.
    ///
    /// In undirected graphs, the edge back to the parent is reported as a
    /// back edge too.
    BackEdge { src: usize, dst: usize, edge: EdgeId },
    /// The edge leads to a vertex which is already closed.
    CrossForwardEdge { src: usize, dst: usize, edge: EdgeId },
    /// All neighbors of the vertex were explored. Corresponds to postorder.
    Close { vertex: usize },
}

/// Depth-first search producing a stream of [`DfsEvent`]s.
///
/// The search keeps an explicit stack of neighbor iterators and produces
/// exactly the events of the recursive formulation: a vertex is opened when
/// first reached, its neighbors are explored in adjacency order, and it is
/// closed when they are exhausted.
///
/// Roots are visited in the order they were given. Roots discovered by an
/// earlier search tree are skipped. The iterator may be resumed with
/// [`add_root`](DfsEvents::add_root) after it returned `None`.
///
/// # Examples
///
/// ```
/// use algraf::{visit::{DfsEvent, DfsEvents}, Digraph};
///
/// let mut graph = Digraph::new(3);
/// graph.add_edge((0, 1)).add_edge((1, 2)).add_edge((2, 0));
///
/// let back_edges = DfsEvents::new(&graph)
///     .start(0)
///     .filter(|event| matches!(event, DfsEvent::BackEdge { .. }))
///     .count();
///
/// assert_eq!(back_edges, 1);
/// ```
pub struct DfsEvents<'a, G>
where
    G: Neighbors + 'a,
{
    graph: &'a G,
    discovered: FixedBitSet,
    closed: FixedBitSet,
    stack: Vec<(usize, G::NeighborsIter<'a>)>,
    roots: VecDeque<usize>,
    // Vertex reached by the last tree edge, to be opened next.
    pending: Option<usize>,
}

impl<'a, G> DfsEvents<'a, G>
where
    G: Neighbors + 'a,
{
    pub fn new(graph: &'a G) -> Self {
        let n = graph.vertex_count();

        Self {
            graph,
            discovered: FixedBitSet::with_capacity(n),
            closed: FixedBitSet::with_capacity(n),
            stack: Vec::new(),
            roots: VecDeque::new(),
            pending: None,
        }
    }

    pub fn start(mut self, root: usize) -> Self {
        self.add_root(root);
        self
    }

    pub fn start_multi<I>(mut self, roots: I) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        self.roots.extend(roots);
        self
    }

    /// Uses all vertices of the graph as roots, in increasing order.
    pub fn start_all(self) -> Self {
        let n = self.graph.vertex_count();
        self.start_multi(0..n)
    }

    /// Schedules another root after the ones already given.
    pub fn add_root(&mut self, root: usize) {
        self.roots.push_back(root);
    }

    pub fn is_discovered(&self, vertex: usize) -> bool {
        self.discovered.contains(vertex)
    }

    fn open(&mut self, vertex: usize) -> DfsEvent {
        self.stack.push((vertex, self.graph.neighbors(vertex)));
        DfsEvent::Open { vertex }
    }
}

impl<'a, G> Iterator for DfsEvents<'a, G>
where
    G: Neighbors + 'a,
{
    type Item = DfsEvent;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(vertex) = self.pending.take() {
            return Some(self.open(vertex));
        }

        if let Some((src, neighbors)) = self.stack.last_mut() {
            let src = *src;

            let Some(neighbor) = neighbors.next() else {
                self.stack.pop();
                self.closed.insert(src);
                return Some(DfsEvent::Close { vertex: src });
            };

            let dst = neighbor.id;
            let edge = neighbor.edge;

            let event = if !self.discovered.put(dst) {
                self.pending = Some(dst);
                DfsEvent::TreeEdge { src, dst, edge }
            } else if !self.closed.contains(dst) {
                DfsEvent::BackEdge { src, dst, edge }
            } else {
                DfsEvent::CrossForwardEdge { src, dst, edge }
            };

            return Some(event);
        }

        while let Some(root) = self.roots.pop_front() {
            if !self.discovered.put(root) {
                return Some(self.open(root));
            }
        }

        None
    }
}

/// Depth-first preorder of vertices.
pub struct Dfs<'a, G>
where
    G: Neighbors + 'a,
{
    events: DfsEvents<'a, G>,
}

impl<'a, G> Dfs<'a, G>
where
    G: Neighbors + 'a,
{
    pub fn new(graph: &'a G) -> Self {
        Self {
            events: DfsEvents::new(graph),
        }
    }

    pub fn start(self, root: usize) -> Self {
        Self {
            events: self.events.start(root),
        }
    }

    pub fn start_multi<I>(self, roots: I) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        Self {
            events: self.events.start_multi(roots),
        }
    }

    pub fn is_discovered(&self, vertex: usize) -> bool {
        self.events.is_discovered(vertex)
    }
}

impl<'a, G> Iterator for Dfs<'a, G>
where
    G: Neighbors + 'a,
{
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        self.events.find_map(|event| match event {
            DfsEvent::Open { vertex } => Some(vertex),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use crate::{
        core::marker::Directed,
        infra::testing::{create_path, tiny_dg},
        Digraph, Graph,
    };

    use super::*;

    #[test]
    fn events_recursive_order() {
        let mut graph = Digraph::new(4);
        graph
            .add_edge((0, 1))
            .add_edge((1, 2))
            .add_edge((2, 0))
            .add_edge((0, 2))
            .add_edge((3, 2));

        let events = DfsEvents::new(&graph).start_all().collect::<Vec<_>>();

        assert_eq!(
            events,
            vec![
                DfsEvent::Open { vertex: 0 },
                DfsEvent::TreeEdge {
                    src: 0,
                    dst: 2,
                    edge: EdgeId::new(3)
                },
                DfsEvent::Open { vertex: 2 },
                DfsEvent::BackEdge {
                    src: 2,
                    dst: 0,
                    edge: EdgeId::new(2)
                },
                DfsEvent::Close { vertex: 2 },
                DfsEvent::TreeEdge {
                    src: 0,
                    dst: 1,
                    edge: EdgeId::new(0)
                },
                DfsEvent::Open { vertex: 1 },
                DfsEvent::CrossForwardEdge {
                    src: 1,
                    dst: 2,
                    edge: EdgeId::new(1)
                },
                DfsEvent::Close { vertex: 1 },
                DfsEvent::Close { vertex: 0 },
                DfsEvent::Open { vertex: 3 },
                DfsEvent::CrossForwardEdge {
                    src: 3,
                    dst: 2,
                    edge: EdgeId::new(4)
                },
                DfsEvent::Close { vertex: 3 },
            ]
        );
    }

    #[test]
    fn preorder_tiny_dg() {
        let graph = tiny_dg();

        assert_eq!(
            Dfs::new(&graph).start(0).collect::<Vec<_>>(),
            vec![0, 5, 4, 3, 2, 1]
        );
    }

    #[test]
    fn self_loop_is_back_edge() {
        let mut graph = Digraph::new(1);
        graph.add_edge((0, 0));

        let events = DfsEvents::new(&graph).start(0).collect::<Vec<_>>();
        assert_matches!(
            events[1],
            DfsEvent::BackEdge { src: 0, dst: 0, .. }
        );
    }

    #[test]
    fn undirected_parent_edge_is_back_edge() {
        let mut graph = Graph::new(2);
        graph.add_edge((0, 1));

        let back = DfsEvents::new(&graph)
            .start(0)
            .filter(|event| matches!(event, DfsEvent::BackEdge { .. }))
            .collect::<Vec<_>>();

        assert_eq!(
            back,
            vec![DfsEvent::BackEdge {
                src: 1,
                dst: 0,
                edge: EdgeId::new(0)
            }]
        );
    }

    #[test]
    fn resume_with_another_root() {
        let mut graph = Digraph::new(3);
        graph.add_edge((0, 1));

        let mut events = DfsEvents::new(&graph).start(0);
        assert_eq!(events.by_ref().count(), 5);
        assert!(!events.is_discovered(2));

        events.add_root(1);
        assert_eq!(events.next(), None);

        events.add_root(2);
        assert_eq!(events.next(), Some(DfsEvent::Open { vertex: 2 }));
        assert_eq!(events.next(), Some(DfsEvent::Close { vertex: 2 }));
        assert_eq!(events.next(), None);
    }

    #[test]
    fn deep_path_does_not_overflow() {
        let graph = create_path::<Directed>(200_000);
        let mut dfs = Dfs::new(&graph).start(0);

        assert_eq!(dfs.by_ref().count(), 200_000);
        assert!(dfs.is_discovered(199_999));
    }

    #[test]
    fn multiple_roots_skip_discovered() {
        let graph = create_path::<Directed>(4);

        assert_eq!(
            Dfs::new(&graph).start_multi([2, 0, 3]).collect::<Vec<_>>(),
            vec![2, 3, 0, 1]
        );
    }
}
