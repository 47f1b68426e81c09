mod index_min_pq;
mod union_find;

pub use index_min_pq::{Compare, IndexMinPq, NaturalOrder, PqError};
pub use union_find::UnionFind;
