use crate::{
    core::{marker::Undirected, Weight},
    storage::AdjList,
};

use super::{kruskal::kruskal, prim::prim, Algo, MinimumSpanningTree};

pub struct MinimumSpanningTreeBuilder<'a, W> {
    graph: &'a AdjList<W, Undirected>,
    algo: Algo,
}

impl<W: Weight> MinimumSpanningTree<W> {
    pub fn on(graph: &AdjList<W, Undirected>) -> MinimumSpanningTreeBuilder<'_, W> {
        MinimumSpanningTreeBuilder {
            graph,
            algo: Algo::default(),
        }
    }
}

impl<'a, W: Weight> MinimumSpanningTreeBuilder<'a, W> {
    /// Chooses Prim's algorithm, the default.
    ///
    /// See [`Algo::Prim`] for details.
    pub fn prim(self) -> Self {
        self.using(Algo::Prim)
    }

    /// Chooses Kruskal's algorithm.
    ///
    /// See [`Algo::Kruskal`] for details.
    pub fn kruskal(self) -> Self {
        self.using(Algo::Kruskal)
    }

    pub fn using(self, algo: Algo) -> Self {
        Self { algo, ..self }
    }

    pub fn run(self) -> MinimumSpanningTree<W> {
        match self.algo {
            Algo::Prim => prim(self.graph),
            Algo::Kruskal => kruskal(self.graph),
        }
    }
}
