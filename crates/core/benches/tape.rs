//! Criterion benchmarks for problem generation and arc geometry.
//!
//! Run with:
//!   cargo bench -p numtape
//!
//! Results are saved to target/criterion/

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use numtape::prelude::*;

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    for max in [10u32, 20, 100].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(max), max, |b, &max| {
            let mut rng = Prng::new(42);
            b.iter(|| black_box(Problem::generate(&mut rng, max)));
        });
    }
    group.finish();
}

fn bench_arc(c: &mut Criterion) {
    let g = TapeGeometry::default();
    c.bench_function("arc_0_to_10", |b| {
        b.iter(|| black_box(g.arc(black_box(0), black_box(10))));
    });
}

fn bench_full_session(c: &mut Criterion) {
    c.bench_function("full_session_recorded", |b| {
        b.iter(|| {
            let problem = Problem::new(3, 4, 20).unwrap();
            let mut w = Widget::with_defaults(problem, RecordingSurface::new());
            w.start();
            w.on_field_commit(Field::A, "3");
            w.on_field_commit(Field::B, "4");
            w.on_field_commit(Field::Sum, "7");
            black_box(w.into_surface())
        });
    });
}

criterion_group!(benches, bench_generate, bench_arc, bench_full_session);
criterion_main!(benches);
