use codegraph_graph::{Graph, VertexDescriptor};
use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn build_layered(layers: usize, width: usize) -> (Graph<usize, usize>, Vec<VertexDescriptor>) {
    let mut g: Graph<usize, usize> = Graph::with_capacity(layers * width, layers * width * 2);
    let vs: Vec<VertexDescriptor> = (0..layers * width).map(|i| g.add_vertex(i)).collect();
    let mut label = 0;
    for layer in 0..layers.saturating_sub(1) {
        for i in 0..width {
            let from = vs[layer * width + i];
            for j in [i, (i + 1) % width] {
                let to = vs[(layer + 1) * width + j];
                if g.add_edge(from, to, label).is_ok() {
                    label += 1;
                }
            }
        }
    }
    (g, vs)
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    for &(layers, width) in &[(10usize, 10usize), (50, 50), (100, 100)] {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{layers}x{width}")),
            &(layers, width),
            |b, &(layers, width)| b.iter(|| black_box(build_layered(layers, width))),
        );
    }
    group.finish();
}

fn bench_adjacency(c: &mut Criterion) {
    let (g, vs) = build_layered(100, 100);
    c.bench_function("adjacency/walk_all", |b| {
        b.iter(|| {
            let mut n = 0usize;
            for &v in &vs {
                if let Ok(it) = g.adjacent_vertices(v) {
                    n += it.count();
                }
                if let Ok(it) = g.inv_adjacent_vertices(v) {
                    n += it.count();
                }
            }
            black_box(n)
        })
    });
}

fn bench_remove_vertex(c: &mut Criterion) {
    c.bench_function("remove_vertex/every_other", |b| {
        b.iter_batched(
            || build_layered(50, 50),
            |(mut g, vs)| {
                for v in vs.iter().step_by(2) {
                    g.remove_vertex(*v).unwrap();
                }
                black_box(g.edge_count())
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_build, bench_adjacency, bench_remove_vertex);
criterion_main!(benches);
