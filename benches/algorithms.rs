//! 图算法基准测试
//!
//! 在随机生成的连通无向图上测量 BFS、DFS、Prim 和二分图判定。

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use flowgraph::{EdgeProperties, Graph};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SIZES: &[usize] = &[100, 1_000, 5_000];

fn build_graph(n: usize) -> Graph {
    let mut rng = StdRng::seed_from_u64(n as u64);
    let mut graph = Graph::undirected();
    let name = |i: usize| format!("n{}", i);

    for i in 1..n {
        let j = rng.gen_range(0..i);
        let cost = rng.gen_range(1.0..100.0);
        let _ = graph.add_edge(&name(j), &name(i), EdgeProperties::new().cost(cost));
    }
    for _ in 0..n * 2 {
        let a = rng.gen_range(0..n);
        let b = rng.gen_range(0..n);
        let cost = rng.gen_range(1.0..100.0);
        // 自环和重复边会被拒绝或忽略
        let _ = graph.add_edge(&name(a), &name(b), EdgeProperties::new().cost(cost));
    }
    graph
}

fn bench_traversal(c: &mut Criterion) {
    let mut group = c.benchmark_group("traversal");
    for &n in SIZES {
        let graph = build_graph(n);
        group.bench_with_input(BenchmarkId::new("bfs", n), &graph, |b, g| {
            b.iter(|| black_box(g.bfs("n0")));
        });
        group.bench_with_input(BenchmarkId::new("dfs", n), &graph, |b, g| {
            b.iter(|| black_box(g.dfs("n0")));
        });
    }
    group.finish();
}

fn bench_prim(c: &mut Criterion) {
    let mut group = c.benchmark_group("prim");
    for &n in SIZES {
        let graph = build_graph(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &graph, |b, g| {
            b.iter(|| black_box(g.prim("n0")));
        });
    }
    group.finish();
}

fn bench_bipartite(c: &mut Criterion) {
    let mut group = c.benchmark_group("bipartite");
    for &n in SIZES {
        let graph = build_graph(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &graph, |b, g| {
            b.iter(|| black_box(g.bipartition()));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_traversal, bench_prim, bench_bipartite);
criterion_main!(benches);
