//! Graph storages.
//!
//! There is a single storage, [`AdjList`], parameterized by the edge weight
//! and the edge type. See [`graph`](crate::graph) for the named
//! representations built on top of it.

pub mod adj_list;

#[doc(inline)]
pub use adj_list::AdjList;
