use std::{fmt, iter::Rev, ops::Range, slice};

use crate::core::{
    marker::{Directed, EdgeType},
    Edge, EdgeId, GraphBase, NeighborRef, Neighbors,
};

/// Adjacency list storage with an edge arena.
///
/// All edges are owned by a single vector and adjacency lists of vertices
/// hold [`EdgeId`]s into it. An undirected edge `(v, w)` is recorded in the
/// lists of both `v` and `w` (twice in the list of `v` if it is a self-loop),
/// a directed edge only in the list of `v`.
///
/// The number of vertices is fixed at construction. Edges can only be added.
///
/// Adjacency is iterated in the reverse order of insertion, that is, the most
/// recently added edge comes first.
pub struct AdjList<W, Ty: EdgeType> {
    adj: Vec<Vec<EdgeId>>,
    edges: Vec<Edge<W, Ty>>,
}

impl<W, Ty: EdgeType> AdjList<W, Ty> {
    /// Creates a graph with `vertex_count` isolated vertices `0..vertex_count`.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            adj: (0..vertex_count).map(|_| Vec::new()).collect(),
            edges: Vec::new(),
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.adj.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Adds an edge and returns the graph to allow chaining.
    ///
    /// The id of the new edge is `EdgeId::new(self.edge_count() - 1)`. Parallel
    /// edges and self-loops are allowed.
    ///
    /// # Panics
    ///
    /// Vertex ids are not validated beyond slice indexing: an endpoint not in
    /// `0..vertex_count()` panics.
    pub fn add_edge(&mut self, edge: impl Into<Edge<W, Ty>>) -> &mut Self {
        let edge = edge.into();
        let id = EdgeId::new(self.edges.len());
        let (v, w) = edge.endpoints();

        assert!(
            w < self.adj.len(),
            "edge endpoint {w} out of range for {} vertices",
            self.adj.len()
        );

        self.adj[v].push(id);
        if !Ty::is_directed() {
            self.adj[w].push(id);
        }

        self.edges.push(edge);
        self
    }

    pub fn extend_with_edges<I>(&mut self, edges: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<Edge<W, Ty>>,
    {
        for edge in edges {
            self.add_edge(edge);
        }
        self
    }

    pub fn edge(&self, id: EdgeId) -> &Edge<W, Ty> {
        &self.edges[id.index()]
    }

    /// Iterates over all edges once, in insertion order.
    pub fn edges(&self) -> slice::Iter<'_, Edge<W, Ty>> {
        self.edges.iter()
    }

    pub fn edge_ids(&self) -> impl Iterator<Item = EdgeId> {
        (0..self.edges.len()).map(EdgeId::new)
    }

    pub fn vertices(&self) -> Range<usize> {
        0..self.adj.len()
    }

    /// Iterates over the vertices adjacent to `vertex`.
    pub fn adjacent(&self, vertex: usize) -> impl Iterator<Item = usize> + '_ {
        self.neighbors(vertex).map(|neighbor| neighbor.id)
    }

    /// Iterates over the edges incident to `vertex` (outgoing edges if
    /// directed), in the same order as [`adjacent`](Self::adjacent).
    pub fn adjacent_edges(&self, vertex: usize) -> impl Iterator<Item = &Edge<W, Ty>> + '_ {
        self.adj[vertex]
            .iter()
            .rev()
            .map(|id| &self.edges[id.index()])
    }

    /// Number of entries in the adjacency list of `vertex`.
    ///
    /// Self-loops count twice in undirected graphs.
    pub fn degree(&self, vertex: usize) -> usize {
        self.adj[vertex].len()
    }
}

impl<W: Clone> AdjList<W, Directed> {
    /// Builds a new digraph with the direction of every edge flipped.
    ///
    /// Edges are added by scanning vertices in increasing order and their
    /// adjacency in iteration order, so reversing twice yields the same edge
    /// multiset, though not necessarily the same adjacency order.
    pub fn reverse(&self) -> Self {
        let mut reversed = Self::new(self.vertex_count());

        for v in self.vertices() {
            for edge in self.adjacent_edges(v) {
                reversed.add_edge(edge.clone().reversed());
            }
        }

        reversed
    }
}

impl<W, Ty: EdgeType> GraphBase for AdjList<W, Ty> {
    type EdgeType = Ty;

    fn vertex_count(&self) -> usize {
        self.adj.len()
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

impl<W, Ty: EdgeType> Neighbors for AdjList<W, Ty> {
    type NeighborsIter<'a> = NeighborsIter<'a, W, Ty>
    where
        Self: 'a;

    fn neighbors(&self, vertex: usize) -> Self::NeighborsIter<'_> {
        NeighborsIter {
            vertex,
            edges: &self.edges,
            inner: self.adj[vertex].iter().rev(),
        }
    }

    fn degree(&self, vertex: usize) -> usize {
        self.adj[vertex].len()
    }
}

pub struct NeighborsIter<'a, W, Ty: EdgeType> {
    vertex: usize,
    edges: &'a [Edge<W, Ty>],
    inner: Rev<slice::Iter<'a, EdgeId>>,
}

impl<W, Ty: EdgeType> Iterator for NeighborsIter<'_, W, Ty> {
    type Item = NeighborRef;

    fn next(&mut self) -> Option<Self::Item> {
        let edge = *self.inner.next()?;
        let (v, w) = self.edges[edge.index()].endpoints();

        // In an undirected graph the list of `w` contains the edge as well,
        // so the neighbor is whichever endpoint is not the current vertex.
        let id = if Ty::is_directed() || v == self.vertex {
            w
        } else {
            v
        };

        Some(NeighborRef { id, edge })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<W: Clone, Ty: EdgeType> Clone for AdjList<W, Ty> {
    fn clone(&self) -> Self {
        Self {
            adj: self.adj.clone(),
            edges: self.edges.clone(),
        }
    }
}

impl<W: fmt::Debug, Ty: EdgeType> fmt::Debug for AdjList<W, Ty> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdjList")
            .field("vertex_count", &self.vertex_count())
            .field("edges", &self.edges)
            .finish()
    }
}
