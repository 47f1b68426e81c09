use crate::{
    algo::DepthFirstOrder,
    core::{marker::Directed, GraphBase, Neighbors},
    graph::Digraph,
};

use super::{dfs::dfs, ConnectedComponents};

pub fn kosaraju<G>(graph: &G) -> ConnectedComponents
where
    G: Neighbors + GraphBase<EdgeType = Directed>,
{
    // Only the structure is needed for the first pass, so the weights are not
    // carried over to the reverse.
    let mut reversed = Digraph::new(graph.vertex_count());
    for v in 0..graph.vertex_count() {
        for neighbor in graph.neighbors(v) {
            reversed.add_edge((neighbor.id, v));
        }
    }

    let order = DepthFirstOrder::on(&reversed).run();

    dfs(graph, order.reverse_post_order())
}
