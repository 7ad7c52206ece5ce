//! Criterion benchmarks for link-graph.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng;

use link_graph::graph::GraphBuilder;
use link_graph::{has_euler_circuit, is_ring_graph, LinkGraph};

/// Build a graph with random edges.
fn make_random_graph(vertex_count: usize, edge_count: usize) -> LinkGraph {
    let mut rng = rand::thread_rng();
    let mut graph = LinkGraph::new(vertex_count);
    for _ in 0..edge_count {
        let v1 = rng.gen_range(0..vertex_count);
        let v2 = rng.gen_range(0..vertex_count);
        graph.add_edge(v1, v2).unwrap();
    }
    graph
}

/// Build a ring through all vertices.
fn make_ring_graph(vertex_count: usize) -> LinkGraph {
    let mut builder = GraphBuilder::new(vertex_count);
    builder.ring();
    builder.build().unwrap()
}

fn bench_add_edge(c: &mut Criterion) {
    c.bench_function("add_edge 10k random", |b| {
        b.iter(|| {
            let mut rng = rand::thread_rng();
            let mut graph = LinkGraph::new(1_000);
            for _ in 0..10_000 {
                let v1 = rng.gen_range(0..1_000);
                let v2 = rng.gen_range(0..1_000);
                graph.add_edge(v1, v2).unwrap();
            }
            black_box(graph)
        })
    });
}

fn bench_num_edges(c: &mut Criterion) {
    let graph = make_random_graph(1_000, 10_000);
    c.bench_function("num_edges 1k vertices 10k edges", |b| {
        b.iter(|| black_box(graph.num_edges()))
    });
}

fn bench_has_euler_circuit(c: &mut Criterion) {
    let graph = make_random_graph(1_000, 10_000);
    c.bench_function("has_euler_circuit 1k vertices", |b| {
        b.iter(|| black_box(has_euler_circuit(&graph)))
    });
}

fn bench_is_ring_graph(c: &mut Criterion) {
    let graph = make_ring_graph(10_000);
    c.bench_function("is_ring_graph 10k ring", |b| {
        b.iter(|| black_box(is_ring_graph(&graph).unwrap()))
    });
}

criterion_group!(
    benches,
    bench_add_edge,
    bench_num_edges,
    bench_has_euler_circuit,
    bench_is_ring_graph
);
criterion_main!(benches);
