use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use trace_graph::tools::import_from_csv_reader;
use trace_graph::{export_to_csv, trace_latency, Graph, ImportOptions};

// Ring with a chord every tenth node, weights 1..=10
fn ring_edges(size: usize) -> Vec<(String, String, u64)> {
    let mut rng = StdRng::seed_from_u64(7);
    let mut edges = Vec::with_capacity(size + size / 10);
    for i in 0..size {
        edges.push((format!("N{}", i), format!("N{}", (i + 1) % size), rng.gen_range(1..=10)));
        if i % 10 == 0 && i + 5 < size {
            edges.push((format!("N{}", i), format!("N{}", i + 5), rng.gen_range(1..=10)));
        }
    }
    edges
}

/// Benchmark building graphs from edge triples
fn bench_build_graph(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_graph");

    for size in [100, 1000, 10000].iter() {
        let edges = ring_edges(*size);
        group.throughput(Throughput::Elements(edges.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &edges, |b, edges| {
            b.iter(|| {
                let graph = Graph::from_edges(edges.iter().map(|(t, h, w)| (t.as_str(), h.as_str(), *w)));
                black_box(graph.edge_count());
            });
        });
    }

    group.finish();
}

/// Benchmark parsing CSV edge lists
fn bench_import_csv(c: &mut Criterion) {
    let mut group = c.benchmark_group("import_csv");

    for size in [1000, 10000].iter() {
        let graph = Graph::from_edges(ring_edges(*size));
        let mut buffer = Vec::new();
        export_to_csv(&graph, &mut buffer).unwrap();

        group.throughput(Throughput::Bytes(buffer.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &buffer, |b, buffer| {
            b.iter(|| {
                let (graph, stats) = import_from_csv_reader(buffer.as_slice(), &ImportOptions::default()).unwrap();
                black_box((graph.node_count(), stats.edges_imported));
            });
        });
    }

    group.finish();
}

/// Benchmark evaluating the latency of long literal walks
fn bench_trace_latency(c: &mut Criterion) {
    let size = 1000;
    let graph = Graph::from_edges(ring_edges(size));

    let mut group = c.benchmark_group("trace_latency");
    for length in [10, 100, 1000].iter() {
        let labels: Vec<String> = (0..*length).map(|i| format!("N{}", i % size)).collect();
        group.bench_with_input(BenchmarkId::new("hops", length), &labels, |b, labels| {
            b.iter(|| black_box(trace_latency(&graph, labels.as_slice()).unwrap()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_build_graph, bench_import_csv, bench_trace_latency);
criterion_main!(benches);
