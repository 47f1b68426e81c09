use std::collections::VecDeque;

use fixedbitset::FixedBitSet;

use crate::core::{EdgeId, Neighbors};

/// A vertex discovered by [`Bfs`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BfsEvent {
    pub vertex: usize,
    /// The vertex from which `vertex` was discovered and the edge used.
    /// `None` for the roots.
    pub parent: Option<(usize, EdgeId)>,
}

/// Breadth-first traversal reporting vertices at discovery time.
///
/// All roots are discovered first, at distance zero, and only then the
/// search proceeds level by level. Discovery order equals the order in which
/// vertices leave the queue.
pub struct Bfs<'a, G>
where
    G: Neighbors + 'a,
{
    graph: &'a G,
    discovered: FixedBitSet,
    roots: VecDeque<usize>,
    queue: VecDeque<usize>,
    current: Option<(usize, G::NeighborsIter<'a>)>,
}

impl<'a, G> Bfs<'a, G>
where
    G: Neighbors + 'a,
{
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            discovered: FixedBitSet::with_capacity(graph.vertex_count()),
            roots: VecDeque::new(),
            queue: VecDeque::new(),
            current: None,
        }
    }

    pub fn start(mut self, root: usize) -> Self {
        self.roots.push_back(root);
        self
    }

    pub fn start_multi<I>(mut self, roots: I) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        self.roots.extend(roots);
        self
    }

    pub fn is_discovered(&self, vertex: usize) -> bool {
        self.discovered.contains(vertex)
    }
}

impl<'a, G> Iterator for Bfs<'a, G>
where
    G: Neighbors + 'a,
{
    type Item = BfsEvent;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(root) = self.roots.pop_front() {
            if !self.discovered.put(root) {
                self.queue.push_back(root);
                return Some(BfsEvent {
                    vertex: root,
                    parent: None,
                });
            }
        }

        loop {
            if let Some((vertex, neighbors)) = &mut self.current {
                for neighbor in neighbors.by_ref() {
                    if !self.discovered.put(neighbor.id) {
                        self.queue.push_back(neighbor.id);
                        return Some(BfsEvent {
                            vertex: neighbor.id,
                            parent: Some((*vertex, neighbor.edge)),
                        });
                    }
                }

                self.current = None;
            }

            let vertex = self.queue.pop_front()?;
            self.current = Some((vertex, self.graph.neighbors(vertex)));
        }
    }
}
