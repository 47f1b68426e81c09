mod common;

use algraf::{algo::MinimumSpanningTree, core::marker::Undirected};
use common::{algraf_random, petgraph_random, RANDOM_SEED};
use fastrand::Rng;

fn main() {
    divan::main();
}

#[divan::bench(consts = [100, 1000], args = [0.05, 0.5])]
fn algraf_prim_random<const N: usize>(bencher: divan::Bencher, density: f32) {
    let graph = algraf_random::<Undirected>(N, density, &mut Rng::with_seed(RANDOM_SEED));

    bencher.bench(|| MinimumSpanningTree::on(&graph).prim().run());
}

#[divan::bench(consts = [100, 1000], args = [0.05, 0.5])]
fn algraf_kruskal_random<const N: usize>(bencher: divan::Bencher, density: f32) {
    let graph = algraf_random::<Undirected>(N, density, &mut Rng::with_seed(RANDOM_SEED));

    bencher.bench(|| MinimumSpanningTree::on(&graph).kruskal().run());
}

#[divan::bench(consts = [100, 1000], args = [0.05, 0.5])]
fn petgraph_kruskal_random<const N: usize>(bencher: divan::Bencher, density: f32) {
    let graph = petgraph_random::<petgraph::Undirected>(N, density, &mut Rng::with_seed(RANDOM_SEED));

    bencher.bench(|| petgraph::algo::min_spanning_tree(&graph).count());
}
