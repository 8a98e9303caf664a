//! Criterion benchmarks for transit-graph.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use transit_graph::graph::TransitGraph;
use transit_graph::sample::downtown_network;
use transit_graph::types::Route;

/// Connected random network: a spanning chain plus extra random routes.
fn make_network(stop_count: usize, extra_routes: usize) -> TransitGraph {
    let mut rng = StdRng::seed_from_u64(42);
    let mut routes: Vec<Route> = (1..stop_count)
        .map(|i| Route::new(rng.gen_range(0..i), i, rng.gen_range(1..60)))
        .collect();
    for _ in 0..extra_routes {
        routes.push(Route::new(
            rng.gen_range(0..stop_count),
            rng.gen_range(0..stop_count),
            rng.gen_range(1..60),
        ));
    }
    TransitGraph::new(stop_count, routes, None).expect("valid routes")
}

fn bench_construction(c: &mut Criterion) {
    c.bench_function("build_sample_network", |b| {
        b.iter(|| black_box(downtown_network().unwrap()))
    });
}

fn bench_queries(c: &mut Criterion) {
    let graph = make_network(1_000, 4_000);

    c.bench_function("depth_first_1k", |b| {
        b.iter(|| black_box(graph.depth_first(0).unwrap()))
    });
    c.bench_function("breadth_first_1k", |b| {
        b.iter(|| black_box(graph.breadth_first(0).unwrap()))
    });
    c.bench_function("shortest_paths_1k", |b| {
        b.iter(|| black_box(graph.shortest_paths(0).unwrap()))
    });
    c.bench_function("minimum_spanning_tree_1k", |b| {
        b.iter(|| black_box(graph.minimum_spanning_tree().unwrap()))
    });
}

fn bench_deep_chain(c: &mut Criterion) {
    // A single long line stresses the explicit DFS stack
    let n = 100_000;
    let routes: Vec<Route> = (1..n).map(|i| Route::new(i - 1, i, 1)).collect();
    let graph = TransitGraph::new(n, routes, None).unwrap();

    c.bench_function("depth_first_chain_100k", |b| {
        b.iter(|| black_box(graph.depth_first(0).unwrap()))
    });
}

criterion_group!(benches, bench_construction, bench_queries, bench_deep_chain);
criterion_main!(benches);
