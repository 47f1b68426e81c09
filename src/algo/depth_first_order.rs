//! Preorder, postorder and reverse postorder of a depth-first search over
//! all vertices.
//!
//! Roots are taken in increasing order of vertex ids. The reverse postorder
//! of a directed acyclic graph is a [topological order].
//!
//! [topological order]: https://en.wikipedia.org/wiki/Topological_sorting
//!
//! # Examples
//!
//! ```
//! use algraf::{algo::DepthFirstOrder, Digraph};
//!
//! let mut graph = Digraph::new(3);
//! graph.add_edge((0, 1)).add_edge((2, 0));
//!
//! let order = DepthFirstOrder::on(&graph).run();
//!
//! assert_eq!(order.pre_order(), &[0, 1, 2]);
//! assert_eq!(order.post_order(), &[1, 0, 2]);
//! assert_eq!(order.reverse_post_order().collect::<Vec<_>>(), vec![2, 0, 1]);
//! ```

use std::{
    iter::{Copied, Rev},
    slice,
};

use tracing::debug;

use crate::{
    core::Neighbors,
    visit::{DfsEvent, DfsEvents},
};

#[derive(Debug, Clone)]
pub struct DepthFirstOrder {
    pre: Vec<usize>,
    post: Vec<usize>,
    pre_order: Vec<usize>,
    post_order: Vec<usize>,
}

pub struct DepthFirstOrderBuilder<'a, G> {
    graph: &'a G,
}

impl DepthFirstOrder {
    pub fn on<G: Neighbors>(graph: &G) -> DepthFirstOrderBuilder<'_, G> {
        DepthFirstOrderBuilder { graph }
    }

    /// Position of `vertex` in the preorder.
    pub fn pre(&self, vertex: usize) -> usize {
        self.pre[vertex]
    }

    /// Position of `vertex` in the postorder.
    pub fn post(&self, vertex: usize) -> usize {
        self.post[vertex]
    }

    pub fn pre_order(&self) -> &[usize] {
        &self.pre_order
    }

    pub fn post_order(&self) -> &[usize] {
        &self.post_order
    }

    /// Vertices in the reverse order of finishing.
    pub fn reverse_post_order(&self) -> Rev<Copied<slice::Iter<'_, usize>>> {
        self.post_order.iter().copied().rev()
    }
}

impl<'a, G: Neighbors> DepthFirstOrderBuilder<'a, G> {
    pub fn run(self) -> DepthFirstOrder {
        let n = self.graph.vertex_count();

        let mut order = DepthFirstOrder {
            pre: vec![0; n],
            post: vec![0; n],
            pre_order: Vec::with_capacity(n),
            post_order: Vec::with_capacity(n),
        };

        for event in DfsEvents::new(self.graph).start_all() {
            match event {
                DfsEvent::Open { vertex } => {
                    order.pre[vertex] = order.pre_order.len();
                    order.pre_order.push(vertex);
                }
                DfsEvent::Close { vertex } => {
                    order.post[vertex] = order.post_order.len();
                    order.post_order.push(vertex);
                }
                _ => {}
            }
        }

        debug!(vertices = n, "depth-first order computed");

        order
    }
}
