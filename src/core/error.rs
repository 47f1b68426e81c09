use thiserror::Error;

/// Returned by [`Edge::other`](super::Edge::other) when the given vertex is
/// not an endpoint of the edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("vertex {vertex} is not incident to the edge {from}-{to}")]
pub struct NotIncidentError {
    pub vertex: usize,
    pub from: usize,
    pub to: usize,
}
