//! Re-key cost: the work done on every sidebar click.
//!
//! A selection change resolves the id and rebuilds the demo state machine
//! wholesale; both together should stay far below a frame budget.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use demo_engine::{catalog, DemoState};

fn bench_lookup(c: &mut Criterion) {
    c.bench_function("lookup_known", |b| {
        b.iter(|| black_box(catalog::lookup(black_box("sort_values"))))
    });

    c.bench_function("lookup_unknown_fallback", |b| {
        b.iter(|| black_box(catalog::lookup(black_box("no_such_op"))))
    });
}

fn bench_rekey_whole_catalog(c: &mut Criterion) {
    c.bench_function("rekey_all_operations", |b| {
        b.iter(|| {
            for op in catalog::all() {
                black_box(DemoState::for_operation(black_box(op)));
            }
        })
    });
}

criterion_group!(benches, bench_lookup, bench_rekey_whole_catalog);
criterion_main!(benches);
