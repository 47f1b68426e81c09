mod common;

use algraf::{
    algo::{topological_order, BreadthFirstPaths, DepthFirstOrder, StronglyConnectedComponents},
    core::marker::Directed,
    infra::testing::create_path,
};
use common::{algraf_random, petgraph_random, RANDOM_SEED};
use fastrand::Rng;
use petgraph::prelude::*;

fn main() {
    divan::main();
}

#[divan::bench(consts = [100, 1000, 10000], args = [0.01, 0.1])]
fn algraf_bfs_random<const N: usize>(bencher: divan::Bencher, density: f32) {
    let graph = algraf_random::<Directed>(N, density, &mut Rng::with_seed(RANDOM_SEED));

    bencher.bench(|| BreadthFirstPaths::on(&graph).run(0));
}

#[divan::bench(consts = [100, 1000, 10000], args = [0.01, 0.1])]
fn petgraph_bfs_random<const N: usize>(bencher: divan::Bencher, density: f32) {
    let graph = petgraph_random::<petgraph::Directed>(N, density, &mut Rng::with_seed(RANDOM_SEED));

    bencher.bench(|| {
        let mut bfs = Bfs::new(&graph, NodeIndex::new(0));
        let mut count = 0;
        while bfs.next(&graph).is_some() {
            count += 1;
        }
        count
    });
}

#[divan::bench(consts = [100, 1000], args = [0.05, 0.5])]
fn algraf_dfs_order_random<const N: usize>(bencher: divan::Bencher, density: f32) {
    let graph = algraf_random::<Directed>(N, density, &mut Rng::with_seed(RANDOM_SEED));

    bencher.bench(|| DepthFirstOrder::on(&graph).run());
}

#[divan::bench(consts = [1000, 100000])]
fn algraf_toposort_path<const N: usize>(bencher: divan::Bencher) {
    let graph = create_path::<Directed>(N);

    bencher.bench(|| topological_order(&graph));
}

#[divan::bench(consts = [1000, 100000])]
fn petgraph_toposort_path<const N: usize>(bencher: divan::Bencher) {
    let mut graph = DiGraph::<(), ()>::with_capacity(N, N);
    for _ in 0..N {
        graph.add_node(());
    }
    for v in 1..N {
        graph.add_edge(NodeIndex::new(v - 1), NodeIndex::new(v), ());
    }

    bencher.bench(|| petgraph::algo::toposort(&graph, None));
}

#[divan::bench(consts = [100, 1000], args = [0.01, 0.1])]
fn algraf_kosaraju_random<const N: usize>(bencher: divan::Bencher, density: f32) {
    let graph = algraf_random::<Directed>(N, density, &mut Rng::with_seed(RANDOM_SEED));

    bencher.bench(|| StronglyConnectedComponents::on(&graph).run());
}

#[divan::bench(consts = [100, 1000], args = [0.01, 0.1])]
fn petgraph_kosaraju_random<const N: usize>(bencher: divan::Bencher, density: f32) {
    let graph = petgraph_random::<petgraph::Directed>(N, density, &mut Rng::with_seed(RANDOM_SEED));

    bencher.bench(|| petgraph::algo::kosaraju_scc(&graph));
}
