use crate::core::{
    marker::{Directed, Undirected},
    GraphBase, Neighbors,
};

use super::{dfs::dfs, kosaraju::kosaraju, ConnectedComponents, StronglyConnectedComponents};

pub struct ConnectedComponentsBuilder<'a, G> {
    graph: &'a G,
}

pub struct StronglyConnectedComponentsBuilder<'a, G> {
    graph: &'a G,
}

impl ConnectedComponents {
    pub fn on<G>(graph: &G) -> ConnectedComponentsBuilder<'_, G>
    where
        G: GraphBase<EdgeType = Undirected>,
    {
        ConnectedComponentsBuilder { graph }
    }
}

impl StronglyConnectedComponents {
    pub fn on<G>(graph: &G) -> StronglyConnectedComponentsBuilder<'_, G>
    where
        G: GraphBase<EdgeType = Directed>,
    {
        StronglyConnectedComponentsBuilder { graph }
    }
}

impl<'a, G> ConnectedComponentsBuilder<'a, G>
where
    G: GraphBase<EdgeType = Undirected>,
{
    pub fn run(self) -> ConnectedComponents
    where
        G: Neighbors,
    {
        dfs(self.graph, 0..self.graph.vertex_count())
    }
}

impl<'a, G> StronglyConnectedComponentsBuilder<'a, G>
where
    G: GraphBase<EdgeType = Directed>,
{
    /// Runs the Kosaraju-Sharir algorithm.
    pub fn run(self) -> StronglyConnectedComponents
    where
        G: Neighbors,
    {
        StronglyConnectedComponents {
            inner: kosaraju(self.graph),
        }
    }
}
