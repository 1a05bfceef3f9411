//! Benchmarks for component analysis
//!
//! Measures SCC and WCC extraction on generated graphs made of chained
//! cycles, so both passes see deep traversals and many components.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use graphscope::graph::{find_sccs, find_sccs_with, find_wccs, DirectedGraph, SeedOrder};

/// Build a graph of `vertex_count` vertices split into cycles of
/// `cycle_len`, each cycle linked forward to the next one.
fn create_cycle_chain(vertex_count: usize, cycle_len: usize) -> DirectedGraph {
    let mut graph = DirectedGraph::new(vertex_count);

    for start in (0..vertex_count).step_by(cycle_len) {
        let end = (start + cycle_len).min(vertex_count);
        for v in start..end {
            let next = if v + 1 == end { start } else { v + 1 };
            graph.add_edge(v, next).expect("vertex in range");
        }
        if end < vertex_count {
            graph.add_edge(start, end).expect("vertex in range");
        }
    }

    graph
}

fn bench_sccs(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_sccs");

    for size in [1_000, 10_000, 100_000].iter() {
        let graph = create_cycle_chain(*size, 8);

        group.bench_with_input(BenchmarkId::new("finish", size), &graph, |b, g| {
            b.iter(|| black_box(find_sccs(g)));
        });
        group.bench_with_input(BenchmarkId::new("sweep", size), &graph, |b, g| {
            b.iter(|| black_box(find_sccs_with(g, SeedOrder::SweepSeed)));
        });
    }

    group.finish();
}

fn bench_wccs(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_wccs");

    for size in [1_000, 10_000, 100_000].iter() {
        let graph = create_cycle_chain(*size, 8);

        group.bench_with_input(BenchmarkId::new("vertices", size), &graph, |b, g| {
            b.iter(|| black_box(find_wccs(g)));
        });
    }

    group.finish();
}

/// A single long path is the worst case for recursion depth
fn bench_long_path(c: &mut Criterion) {
    let size = 200_000;
    let graph = DirectedGraph::from_edges(size, (0..size - 1).map(|v| (v, v + 1)))
        .expect("path edges in range");

    c.bench_function("find_sccs/long_path_200000", |b| {
        b.iter(|| black_box(find_sccs(&graph)));
    });
}

fn bench_transpose(c: &mut Criterion) {
    let mut group = c.benchmark_group("transpose");

    for size in [10_000, 100_000].iter() {
        let graph = create_cycle_chain(*size, 8);

        group.bench_with_input(BenchmarkId::new("vertices", size), &graph, |b, g| {
            b.iter(|| black_box(g.transpose()));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_sccs,
    bench_wccs,
    bench_long_path,
    bench_transpose
);
criterion_main!(benches);
