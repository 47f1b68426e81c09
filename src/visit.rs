//! Iterative graph traversals.
//!
//! Both traversals hold a shared reference to the graph and are plain
//! iterators. They never recurse, so arbitrarily deep graphs are fine.
//! Neighbors are explored in the order given by
//! [`Neighbors::neighbors`](crate::core::Neighbors::neighbors).

mod bfs;
mod dfs;

pub use bfs::{Bfs, BfsEvent};
pub use dfs::{Dfs, DfsEvent, DfsEvents};
