use std::path::Path;

use criterion::{criterion_group, criterion_main, Criterion};
use trip_core::prelude::*;

criterion_group!(benches, plan_from_file);
criterion_main!(benches);

fn plan_from_file(c: &mut Criterion) {
    let mut group = c.benchmark_group("plan_from_file");
    for file in ["connections.json", "connections.csv"] {
        let path = Path::new("../crates/trip_core/test_data").join(file);
        group.bench_function(file, |b| {
            b.iter(|| {
                let planner = RoutePlanner::new(source::from_path(&path).unwrap());
                planner.plan("Porto", "Sydney").unwrap()
            })
        });
    }
    group.finish();
}
