use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{rngs::StdRng, SeedableRng};
use trip_core::{
    graph::vertex_index,
    search::BellmanFord,
    util::test_graphs::{generate_negative_weight_graph, generate_random_graph},
};

criterion_group!(benches, criterion_benchmark, random_graphs);
criterion_main!(benches);

pub fn criterion_benchmark(c: &mut Criterion) {
    let textbook = generate_negative_weight_graph();

    c.bench_with_input(
        BenchmarkId::new("bellman_ford_on_sample", stringify!(textbook)),
        &textbook,
        |b, g| {
            b.iter(|| {
                let mut bf = BellmanFord::new(g);
                black_box(bf.run(vertex_index(0)));
            })
        },
    );
}

fn random_graphs(c: &mut Criterion) {
    let mut rng: StdRng = SeedableRng::seed_from_u64(187);

    let mut group = c.benchmark_group("random_graphs");
    for size in [16, 32, 64, 128].iter() {
        let g = generate_random_graph(&mut rng, *size, size * 4, 0..100);
        group.throughput(criterion::Throughput::Elements(g.num_edges() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &g, |b, g| {
            b.iter(|| BellmanFord::new(g).run(vertex_index(0)));
        });
    }
    group.finish();
}
