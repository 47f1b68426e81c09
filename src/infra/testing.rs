use thiserror::Error;

use crate::{
    core::{marker::EdgeType, Edge, Neighbors},
    graph::{Digraph, EdgeWeightedDigraph, EdgeWeightedGraph},
    storage::AdjList,
};

pub fn create_path<Ty: EdgeType>(vertex_count: usize) -> AdjList<(), Ty> {
    let mut graph = AdjList::new(vertex_count);

    for v in 1..vertex_count {
        graph.add_edge((v - 1, v));
    }

    graph
}

pub fn create_complete<Ty: EdgeType>(vertex_count: usize) -> AdjList<(), Ty> {
    let mut graph = AdjList::new(vertex_count);

    for u in 0..vertex_count {
        for v in 0..vertex_count {
            if u == v {
                continue;
            }

            if !Ty::is_directed() && v > u {
                break;
            }

            graph.add_edge((u, v));
        }
    }

    graph
}

/// Digraph with 13 vertices and five strongly connected components.
pub fn tiny_dg() -> Digraph {
    let mut graph = Digraph::new(13);
    graph.extend_with_edges([
        (4, 2),
        (2, 3),
        (3, 2),
        (6, 0),
        (0, 1),
        (2, 0),
        (11, 12),
        (12, 9),
        (9, 10),
        (9, 11),
        (7, 9),
        (10, 12),
        (11, 4),
        (4, 3),
        (3, 5),
        (6, 8),
        (8, 6),
        (5, 4),
        (0, 5),
        (6, 4),
        (6, 9),
        (7, 6),
    ]);
    graph
}

/// Digraph with the single cycle 5 -> 4 -> 3 -> 5 reachable from 0.
pub fn cycle_dg() -> Digraph {
    let mut graph = Digraph::new(6);
    graph.extend_with_edges([(0, 5), (5, 4), (4, 3), (3, 5)]);
    graph
}

pub fn tiny_ewd() -> EdgeWeightedDigraph {
    let mut graph = EdgeWeightedDigraph::new(8);
    graph.extend_with_edges([
        (4, 5, 0.35),
        (5, 4, 0.35),
        (4, 7, 0.37),
        (5, 7, 0.28),
        (7, 5, 0.28),
        (5, 1, 0.32),
        (0, 4, 0.38),
        (0, 2, 0.26),
        (7, 3, 0.39),
        (1, 3, 0.29),
        (2, 7, 0.34),
        (6, 2, 0.40),
        (3, 6, 0.52),
        (6, 0, 0.58),
        (6, 4, 0.93),
    ]);
    graph
}

pub fn tiny_ewg() -> EdgeWeightedGraph {
    let mut graph = EdgeWeightedGraph::new(8);
    graph.extend_with_edges([
        (4, 5, 0.35),
        (4, 7, 0.37),
        (5, 7, 0.28),
        (0, 7, 0.16),
        (1, 5, 0.32),
        (0, 4, 0.38),
        (2, 3, 0.17),
        (1, 7, 0.19),
        (0, 2, 0.26),
        (1, 2, 0.36),
        (1, 3, 0.29),
        (2, 7, 0.34),
        (6, 2, 0.40),
        (3, 6, 0.52),
        (6, 0, 0.58),
        (6, 4, 0.93),
    ]);
    graph
}

/// Random multigraph with self-loops and integer weights in `0..max_weight`.
#[cfg(test)]
pub fn random_graph<Ty: EdgeType>(
    rng: &mut fastrand::Rng,
    vertex_count: usize,
    edge_count: usize,
    max_weight: u32,
) -> AdjList<u32, Ty> {
    let mut graph = AdjList::new(vertex_count);

    if vertex_count > 0 {
        for _ in 0..edge_count {
            graph.add_edge((
                rng.usize(0..vertex_count),
                rng.usize(0..vertex_count),
                rng.u32(0..max_weight),
            ));
        }
    }

    graph
}

#[cfg(test)]
pub fn to_petgraph<W: Clone, Ty: EdgeType>(
    graph: &AdjList<W, Ty>,
) -> petgraph::Graph<(), W, petgraph::Directed> {
    let mut result = petgraph::Graph::with_capacity(graph.vertex_count(), graph.edge_count());

    for _ in graph.vertices() {
        result.add_node(());
    }

    for edge in graph.edges() {
        let (v, w) = edge.endpoints();
        let (v, w) = (petgraph::graph::NodeIndex::new(v), petgraph::graph::NodeIndex::new(w));

        result.add_edge(v, w, edge.weight().clone());
        if !Ty::is_directed() && v != w {
            result.add_edge(w, v, edge.weight().clone());
        }
    }

    result
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConsistencyCheckError {
    #[error("edge ids iterator count ({0}) is not equal to edge count ({1})")]
    EdgeIdsEdgeCountMismatch(usize, usize),
    #[error("edges iterator count ({0}) is not equal to edge count ({1})")]
    EdgesEdgeCountMismatch(usize, usize),
    #[error("neighbor {neighbor} of vertex {vertex} is not an endpoint of the reported edge")]
    NeighborEdgeInvalid { vertex: usize, neighbor: usize },
    #[error("sum of degrees ({0}) is not equal to doubled edge count ({1})")]
    HandshakingLemma(usize, usize),
    #[error("sum of out degrees ({0}) is not equal to edge count ({1})")]
    HandshakingLemmaDirected(usize, usize),
}

pub fn check_consistency<W, Ty: EdgeType>(
    graph: &AdjList<W, Ty>,
) -> Result<(), ConsistencyCheckError> {
    fn cmp<F>(actual: usize, expected: usize, error: F) -> Result<(), ConsistencyCheckError>
    where
        F: FnOnce(usize, usize) -> ConsistencyCheckError,
    {
        if actual == expected {
            Ok(())
        } else {
            Err(error(actual, expected))
        }
    }

    let edge_count = graph.edge_count();

    cmp(
        graph.edge_ids().count(),
        edge_count,
        ConsistencyCheckError::EdgeIdsEdgeCountMismatch,
    )?;
    cmp(
        graph.edges().count(),
        edge_count,
        ConsistencyCheckError::EdgesEdgeCountMismatch,
    )?;

    for vertex in graph.vertices() {
        for neighbor in graph.neighbors(vertex) {
            let endpoints = graph.edge(neighbor.edge).endpoints();
            let valid = endpoints == (vertex, neighbor.id)
                || (!Ty::is_directed() && endpoints == (neighbor.id, vertex));

            if !valid {
                return Err(ConsistencyCheckError::NeighborEdgeInvalid {
                    vertex,
                    neighbor: neighbor.id,
                });
            }
        }
    }

    let deg_sum = graph
        .vertices()
        .map(|vertex| graph.degree(vertex))
        .sum::<usize>();

    // https://en.wikipedia.org/wiki/Handshaking_lemma
    if Ty::is_directed() {
        cmp(
            deg_sum,
            edge_count,
            ConsistencyCheckError::HandshakingLemmaDirected,
        )
    } else {
        cmp(
            deg_sum,
            2 * edge_count,
            ConsistencyCheckError::HandshakingLemma,
        )
    }
}

/// Compares floating point results with a fixed tolerance.
pub fn approx_eq(lhs: f64, rhs: f64) -> bool {
    (lhs - rhs).abs() < 1e-9
}

/// Endpoints of the edges, normalized so that the smaller vertex comes
/// first, and sorted.
pub fn normalized_endpoints<'a, W: 'a, Ty: EdgeType + 'a>(
    edges: impl IntoIterator<Item = &'a Edge<W, Ty>>,
) -> Vec<(usize, usize)> {
    let mut endpoints = edges
        .into_iter()
        .map(|edge| {
            let (v, w) = edge.endpoints();
            (v.min(w), v.max(w))
        })
        .collect::<Vec<_>>();

    endpoints.sort_unstable();
    endpoints
}
