#![allow(dead_code)]

use algraf::{core::marker::EdgeType, storage::AdjList};
use fastrand::Rng;
use petgraph::prelude::*;

pub const RANDOM_SEED: u64 = 0xef6f79ed30ba75a;

/// Edges of a G(n, p) random graph: every pair `(v, w)` with `w < v` is
/// present with probability `p`.
pub fn random_edges(vertex_count: usize, p: f32, rng: &mut Rng) -> Vec<(usize, usize)> {
    (1..vertex_count)
        .flat_map(|v| (0..v).map(move |w| (v, w)))
        .filter(|_| rng.f32() < p)
        .collect()
}

pub fn algraf_random<Ty: EdgeType>(vertex_count: usize, density: f32, rng: &mut Rng) -> AdjList<f32, Ty> {
    let mut graph = AdjList::new(vertex_count);

    for (u, v) in random_edges(vertex_count, density, rng) {
        graph.add_edge((u, v, rng.f32()));
    }

    graph
}

pub fn petgraph_random<Ty: petgraph::EdgeType>(
    vertex_count: usize,
    density: f32,
    rng: &mut Rng,
) -> petgraph::Graph<(), f32, Ty> {
    let mut graph = petgraph::Graph::with_capacity(vertex_count, 0);

    for _ in 0..vertex_count {
        graph.add_node(());
    }

    for (u, v) in random_edges(vertex_count, density, rng) {
        graph.add_edge(NodeIndex::new(u), NodeIndex::new(v), rng.f32());
    }

    graph
}
