use fixedbitset::FixedBitSet;
use tracing::{debug, trace};

use crate::{
    common::IndexMinPq,
    core::{marker::EdgeType, Neighbors, Weight},
    storage::AdjList,
};

use super::ShortestPaths;

pub fn dijkstra<W, Ty>(graph: &AdjList<W, Ty>, source: usize, goal: Option<usize>) -> ShortestPaths<W>
where
    W: Weight,
    Ty: EdgeType,
{
    let n = graph.vertex_count();

    let mut dist_to = vec![W::inf(); n];
    let mut edge_to = vec![None; n];
    let mut queue = IndexMinPq::new(n);
    let mut settled = FixedBitSet::with_capacity(n);

    dist_to[source] = W::zero();
    queue.upsert(source, W::zero());

    while let Ok(vertex) = queue.del_min() {
        settled.insert(vertex);

        if goal == Some(vertex) {
            // Distances of the vertices left in the queue are not final.
            for v in graph.vertices().filter(|&v| !settled.contains(v)) {
                dist_to[v] = W::inf();
                edge_to[v] = None;
            }
            break;
        }

        for neighbor in graph.neighbors(vertex) {
            let next = neighbor.id;
            let Some(next_dist) = dist_to[vertex].checked_add(*graph.edge(neighbor.edge).weight())
            else {
                trace!(from = vertex, to = next, "distance overflow, edge skipped");
                continue;
            };

            // Relaxation.
            if next_dist < dist_to[next] {
                trace!(from = vertex, to = next, "relaxed edge");

                dist_to[next] = next_dist;
                edge_to[next] = Some((vertex, neighbor.edge));
                queue.upsert(next, next_dist);
            }
        }
    }

    debug!(
        source,
        vertices = n,
        settled = settled.count_ones(..),
        "shortest paths computed"
    );

    ShortestPaths {
        source,
        dist_to,
        edge_to,
    }
}
