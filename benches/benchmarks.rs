//! Criterion benchmarks for digraph.

use criterion::{criterion_group, criterion_main, Criterion};
use rand::Rng;

use digraph::types::{EdgeSpec, VertexId, VertexSpec};
use digraph::Graph;

/// Build a random graph with ID-bearing vertices and weighted edges.
///
/// With `acyclic` set, edges only run from lower to higher index.
fn make_graph(vertex_count: usize, edges_per_vertex: usize, acyclic: bool) -> (Graph, Vec<VertexId>) {
    let mut rng = rand::thread_rng();
    let mut graph = Graph::new();
    let vertices: Vec<VertexId> = (0..vertex_count as i64)
        .map(|i| graph.add_vertex(VertexSpec::with_id(i)).unwrap())
        .collect();

    for i in 0..vertex_count {
        for _ in 0..edges_per_vertex {
            let target = rng.gen_range(0..vertex_count);
            if target == i || (acyclic && target < i) {
                continue;
            }
            let weight = rng.gen_range(0.1..10.0);
            graph
                .edge_to_vertex(vertices[i], vertices[target], EdgeSpec::weighted(weight))
                .unwrap();
        }
    }

    (graph, vertices)
}

fn bench_add_vertex(c: &mut Criterion) {
    let (mut graph, _) = make_graph(10_000, 3, false);

    c.bench_function("add_vertex_to_10k", |b| {
        b.iter(|| {
            let _ = graph.add_vertex(VertexSpec::new().value("bench vertex"));
        })
    });
}

fn bench_add_edge(c: &mut Criterion) {
    let (mut graph, vertices) = make_graph(10_000, 3, false);

    c.bench_function("add_edge_to_10k", |b| {
        let mut rng = rand::thread_rng();
        b.iter(|| {
            let src = vertices[rng.gen_range(0..vertices.len())];
            let dst = vertices[rng.gen_range(0..vertices.len())];
            let _ = graph.edge_to_vertex(src, dst, EdgeSpec::weighted(0.5));
        })
    });
}

fn bench_merge_components(c: &mut Criterion) {
    c.bench_function("merge_chain_1k", |b| {
        b.iter(|| {
            let mut graph = Graph::new();
            let vertices: Vec<VertexId> = (0..1_000)
                .map(|_| graph.add_vertex(VertexSpec::new()).unwrap())
                .collect();
            for pair in vertices.windows(2) {
                let _ = graph.edge_to_vertex(pair[0], pair[1], EdgeSpec::new());
            }
            graph.component_count()
        })
    });
}

fn bench_bfs(c: &mut Criterion) {
    let (graph, vertices) = make_graph(100_000, 3, false);

    c.bench_function("bfs_100k", |b| {
        b.iter(|| graph.bfs(vertices[0]).map(Iterator::count))
    });
}

fn bench_dfs(c: &mut Criterion) {
    let (graph, vertices) = make_graph(100_000, 3, false);

    c.bench_function("dfs_100k", |b| {
        b.iter(|| graph.dfs(vertices[0]).map(Iterator::count))
    });
}

fn bench_topological_sort(c: &mut Criterion) {
    let (graph, _) = make_graph(100_000, 3, true);

    c.bench_function("topological_order_100k", |b| {
        b.iter(|| graph.topological_order().map(|order| order.len()))
    });
}

fn bench_has_cycle(c: &mut Criterion) {
    let (graph, _) = make_graph(100_000, 3, false);

    c.bench_function("has_cycle_100k", |b| b.iter(|| graph.has_cycle()));
}

fn bench_shortest_path_by_hops(c: &mut Criterion) {
    let (graph, vertices) = make_graph(100_000, 3, false);
    let destination = vertices[vertices.len() - 1];

    c.bench_function("shortest_hops_100k", |b| {
        b.iter(|| graph.shortest_path_by_hops(vertices[0], destination))
    });
}

fn bench_shortest_path_by_weight(c: &mut Criterion) {
    let (graph, vertices) = make_graph(100_000, 3, false);
    let destination = vertices[vertices.len() - 1];

    c.bench_function("dijkstra_100k", |b| {
        b.iter(|| graph.shortest_path_by_weight(vertices[0], destination))
    });
}

fn bench_reverse_edges(c: &mut Criterion) {
    let (mut graph, _) = make_graph(100_000, 3, false);

    c.bench_function("reverse_edges_100k", |b| b.iter(|| graph.reverse_edges()));
}

criterion_group!(
    benches,
    bench_add_vertex,
    bench_add_edge,
    bench_merge_components,
    bench_bfs,
    bench_dfs,
    bench_topological_sort,
    bench_has_cycle,
    bench_shortest_path_by_hops,
    bench_shortest_path_by_weight,
    bench_reverse_edges,
);
criterion_main!(benches);
