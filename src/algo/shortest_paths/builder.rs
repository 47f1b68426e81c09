use crate::{
    core::{marker::EdgeType, Weight},
    storage::AdjList,
};

use super::{dijkstra::dijkstra, ShortestPaths};

pub struct ShortestPathsBuilder<'a, W, Ty: EdgeType> {
    graph: &'a AdjList<W, Ty>,
    goal: Option<usize>,
}

impl<W: Weight> ShortestPaths<W> {
    pub fn on<Ty: EdgeType>(graph: &AdjList<W, Ty>) -> ShortestPathsBuilder<'_, W, Ty> {
        ShortestPathsBuilder { graph, goal: None }
    }
}

impl<'a, W: Weight, Ty: EdgeType> ShortestPathsBuilder<'a, W, Ty> {
    /// Stops the search as soon as the distance to `goal` is final.
    ///
    /// Only vertices settled before the goal keep their distance, the others
    /// are reported as unreached. If the goal is not reachable, the result is
    /// the same as without a goal.
    pub fn goal(self, goal: usize) -> Self {
        Self {
            goal: Some(goal),
            ..self
        }
    }

    pub fn run(self, source: usize) -> ShortestPaths<W> {
        dijkstra(self.graph, source, self.goal)
    }
}
