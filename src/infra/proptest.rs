use std::{fmt, marker::PhantomData};

use proptest::{
    collection::vec,
    strategy::{BoxedStrategy, Just, NewTree, Strategy},
    test_runner::TestRunner,
};

use crate::{
    core::marker::{Directed, EdgeType, Undirected},
    storage::AdjList,
};

pub fn graph<E: Strategy, Ty: EdgeType>(edge: E) -> GraphStrategy<E, Ty> {
    GraphStrategy::new(edge)
}

pub fn graph_undirected<E: Strategy>(edge: E) -> GraphStrategy<E, Undirected> {
    GraphStrategy::new(edge)
}

pub fn graph_directed<E: Strategy>(edge: E) -> GraphStrategy<E, Directed> {
    GraphStrategy::new(edge)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrategyParams {
    max_size: usize,
    acyclic: bool,
    connected: bool,
    allow_loops: bool,
    density: f32,
}

impl Default for StrategyParams {
    fn default() -> Self {
        Self {
            max_size: 32,
            acyclic: false,
            connected: false,
            allow_loops: false,
            density: 2.0,
        }
    }
}

impl StrategyParams {
    /// Maximum number of vertices.
    pub fn max_size(self, max_size: usize) -> Self {
        Self { max_size, ..self }
    }

    /// Every edge goes from a lower vertex to a higher one.
    pub fn acyclic(self) -> Self {
        Self {
            acyclic: true,
            ..self
        }
    }

    /// A path through all vertices in increasing order is always present.
    pub fn connected(self) -> Self {
        Self {
            connected: true,
            ..self
        }
    }

    pub fn allow_loops(self) -> Self {
        Self {
            allow_loops: true,
            ..self
        }
    }

    /// Upper bound on the ratio of random edges to vertices.
    pub fn density(self, density: f32) -> Self {
        Self { density, ..self }
    }
}

/// Strategy producing [`AdjList`] graphs with random structure and edge
/// weights generated by the inner strategy.
pub struct GraphStrategy<E: Strategy, Ty: EdgeType> {
    edge: E,
    params: StrategyParams,
    ty: PhantomData<Ty>,
}

impl<E: Strategy, Ty: EdgeType> fmt::Debug for GraphStrategy<E, Ty> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GraphStrategy")
            .field("edge", &self.edge)
            .field("params", &self.params)
            .finish()
    }
}

macro_rules! delegate_builder_fn {
    ($name:ident$(, $param:ident: $param_type:ty)*) => {
        #[doc = concat!("See [StrategyParams::", stringify!($name), "](StrategyParams::", stringify!($name), ") for details.")]
        pub fn $name(self, $($param: $param_type),*) -> Self {
            Self {
                params: self.params.$name($($param,)*),
                ..self
            }
        }
    }
}

impl<E: Strategy, Ty: EdgeType> GraphStrategy<E, Ty> {
    pub fn new(edge: E) -> Self {
        Self::with_params(edge, StrategyParams::default())
    }

    pub fn with_params(edge: E, params: StrategyParams) -> Self {
        Self {
            edge,
            params,
            ty: PhantomData,
        }
    }

    // Builder pattern on the strategy itself to allow usage as in
    // `graph_directed(0..10u32).max_size(100).acyclic()`.
    delegate_builder_fn!(max_size, max_size: usize);
    delegate_builder_fn!(acyclic);
    delegate_builder_fn!(connected);
    delegate_builder_fn!(allow_loops);
    delegate_builder_fn!(density, density: f32);
}

impl<E, Ty> GraphStrategy<E, Ty>
where
    E: Strategy + Clone + 'static,
    E::Value: Clone + fmt::Debug,
    Ty: EdgeType + 'static,
{
    fn boxed_inner(&self) -> BoxedStrategy<AdjList<E::Value, Ty>> {
        let params = self.params;
        let edge = self.edge.clone();

        (1..=params.max_size.max(1))
            .prop_flat_map(move |vertex_count| {
                let max_edges = (vertex_count as f32 * params.density).ceil() as usize;
                let random = vec((0..vertex_count, 0..vertex_count, edge.clone()), 0..=max_edges);
                let spine = vec(edge.clone(), vertex_count - 1);

                (Just(vertex_count), random, spine)
            })
            .prop_map(move |(vertex_count, random, spine)| {
                let mut graph = AdjList::new(vertex_count);

                if params.connected {
                    for (v, weight) in spine.into_iter().enumerate() {
                        graph.add_edge((v, v + 1, weight));
                    }
                }

                for (v, w, weight) in random {
                    if v == w && (params.acyclic || !params.allow_loops) {
                        continue;
                    }

                    let (v, w) = if params.acyclic && v > w { (w, v) } else { (v, w) };
                    graph.add_edge((v, w, weight));
                }

                graph
            })
            .boxed()
    }
}

impl<E, Ty> Strategy for GraphStrategy<E, Ty>
where
    E: Strategy + Clone + 'static,
    E::Value: Clone + fmt::Debug,
    Ty: EdgeType + 'static,
{
    type Tree = <BoxedStrategy<AdjList<E::Value, Ty>> as Strategy>::Tree;
    type Value = AdjList<E::Value, Ty>;

    fn new_tree(&self, runner: &mut TestRunner) -> NewTree<Self> {
        self.boxed_inner().new_tree(runner)
    }
}
