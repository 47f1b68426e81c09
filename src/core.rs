pub mod error;
pub mod id;
pub mod marker;
pub mod weight;

mod base;
mod edge;

pub use base::*;
pub use edge::*;
pub use id::EdgeId;
pub use weight::Weight;
