use std::cmp::Ordering;

use tracing::debug;

use crate::{
    common::UnionFind,
    core::{marker::Undirected, weight, EdgeId, Weight},
    storage::AdjList,
};

use super::MinimumSpanningTree;

pub fn kruskal<W: Weight>(graph: &AdjList<W, Undirected>) -> MinimumSpanningTree<W> {
    let n = graph.vertex_count();

    let mut candidates = graph.edge_ids().collect::<Vec<_>>();
    candidates.sort_by(|&a, &b| {
        graph
            .edge(a)
            .weight()
            .partial_cmp(graph.edge(b).weight())
            .unwrap_or(Ordering::Equal)
    });

    let mut sets = UnionFind::new(n);
    let mut edges: Vec<EdgeId> = Vec::with_capacity(n.saturating_sub(1));

    for id in candidates {
        if sets.count() <= 1 {
            break;
        }

        let (v, w) = graph.edge(id).endpoints();
        if sets.union(v, w) {
            edges.push(id);
        }
    }

    let weight = weight::total(edges.iter().map(|&id| *graph.edge(id).weight()));

    debug!(vertices = n, edges = edges.len(), "minimum spanning forest computed");

    MinimumSpanningTree { edges, weight }
}
