//! Benchmarks for formulation generation on path-shaped networks of
//! varying size.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use transit_layout_milp::graph::{EdgeMetadataInput, Node, NodeMetadata, RawEdge, RawGraph};
use transit_layout_milp::settings::Settings;

fn path_network(n: usize) -> RawGraph {
    let nodes = (0..n)
        .map(|i| Node {
            id: format!("n{i}").into(),
            metadata: NodeMetadata {
                x: i as f64 * 10.0,
                y: 0.0,
                dummy: false,
            },
        })
        .collect();
    let edges = (0..n.saturating_sub(1))
        .map(|i| RawEdge {
            source: format!("n{i}").into(),
            target: format!("n{}", i + 1).into(),
            metadata: EdgeMetadataInput::default(),
        })
        .collect();
    RawGraph { nodes, edges }
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_formulation");
    let settings = Settings::default();

    for n in [4, 8, 16, 32].iter() {
        let raw = path_network(*n);
        group.bench_with_input(BenchmarkId::new("path", n), n, |b, _| {
            b.iter(|| transit_layout_milp::build(black_box(&raw), black_box(&settings)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_build);
criterion_main!(benches);
