use super::{id::EdgeId, marker::EdgeType};

/// A neighbor of a vertex reached through one of its adjacent edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NeighborRef {
    /// The neighbor vertex.
    pub id: usize,
    /// The edge connecting the vertex with the neighbor.
    pub edge: EdgeId,
}

pub trait GraphBase {
    type EdgeType: EdgeType;

    fn vertex_count(&self) -> usize;
    fn edge_count(&self) -> usize;

    fn is_directed(&self) -> bool {
        Self::EdgeType::is_directed()
    }
}

/// Common adjacency iteration capability shared by all graph
/// representations.
///
/// Traversal algorithms are written against this trait only, so the order in
/// which they discover vertices is the same for weighted and unweighted
/// graphs.
pub trait Neighbors: GraphBase {
    type NeighborsIter<'a>: Iterator<Item = NeighborRef>
    where
        Self: 'a;

    /// Iterates over outgoing neighbors of `vertex` (all neighbors in an
    /// undirected graph), most recently added edge first.
    fn neighbors(&self, vertex: usize) -> Self::NeighborsIter<'_>;

    fn degree(&self, vertex: usize) -> usize {
        self.neighbors(vertex).count()
    }
}
