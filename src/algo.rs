//! Graph algorithms.
//!
//! Every algorithm is configured with `Algorithm::on(&graph)`, runs to
//! completion in `run` and returns an immutable result that answers queries.

pub mod breadth_first_paths;
pub mod connected_components;
pub mod cycle;
pub mod depth_first_order;
pub mod reach;
pub mod shortest_paths;
pub mod spanning_tree;
pub mod toposort;

pub use breadth_first_paths::BreadthFirstPaths;
pub use connected_components::{
    is_connected, is_strongly_connected, ConnectedComponents, StronglyConnectedComponents,
};
pub use cycle::DirectedCycle;
pub use depth_first_order::DepthFirstOrder;
pub use reach::DepthFirstReach;
pub use shortest_paths::ShortestPaths;
pub use spanning_tree::MinimumSpanningTree;
pub use toposort::{is_cyclic, is_dag, topological_order, CycleError};
