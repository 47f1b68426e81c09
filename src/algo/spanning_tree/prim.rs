use fixedbitset::FixedBitSet;
use tracing::{debug, trace};

use crate::{
    common::IndexMinPq,
    core::{marker::Undirected, weight, Neighbors, Weight},
    storage::AdjList,
};

use super::MinimumSpanningTree;

pub fn prim<W: Weight>(graph: &AdjList<W, Undirected>) -> MinimumSpanningTree<W> {
    let n = graph.vertex_count();

    // Weight of the lightest known edge connecting the vertex to the tree.
    let mut dist_to = vec![W::inf(); n];
    let mut edge_to = vec![None; n];
    let mut marked = FixedBitSet::with_capacity(n);
    let mut queue = IndexMinPq::new(n);

    for root in graph.vertices() {
        if marked.contains(root) {
            continue;
        }

        trace!(root, "growing tree");

        dist_to[root] = W::zero();
        queue.upsert(root, W::zero());

        while let Ok(vertex) = queue.del_min() {
            marked.insert(vertex);

            for neighbor in graph.neighbors(vertex) {
                let next = neighbor.id;

                if marked.contains(next) {
                    continue;
                }

                let weight = *graph.edge(neighbor.edge).weight();

                if weight < dist_to[next] {
                    dist_to[next] = weight;
                    edge_to[next] = Some(neighbor.edge);
                    queue.upsert(next, weight);
                }
            }
        }
    }

    let edges = edge_to.into_iter().flatten().collect::<Vec<_>>();
    let weight = weight::total(edges.iter().map(|&id| *graph.edge(id).weight()));

    debug!(vertices = n, edges = edges.len(), "minimum spanning forest computed");

    MinimumSpanningTree { edges, weight }
}
