//! Benchmarks for alpha table construction and the per-node lookup.
//!
//! `get_alpha` sits inside the builder's pruning loop (one call per node
//! per pruning decision), so its overhead must stay negligible next to the
//! distance computations around it.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use mcgi::lid::write_lid_file;
use mcgi::mapping::{build_alpha_table, AlphaStrategy};
use mcgi::synthetic::synthetic_lid_values;
use mcgi::{McgiContext, McgiParams};

fn bench_build_table(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_alpha_table");

    for &n in &[10_000usize, 100_000, 1_000_000] {
        let lids = synthetic_lid_values(n, 5.0, 2.0, 42);
        group.throughput(Throughput::Elements(n as u64));

        group.bench_with_input(BenchmarkId::new("sigmoid", n), &lids, |b, lids| {
            b.iter(|| build_alpha_table(black_box(lids), AlphaStrategy::Sigmoid, 1.0, 1.4));
        });
        group.bench_with_input(BenchmarkId::new("linear", n), &lids, |b, lids| {
            b.iter(|| build_alpha_table(black_box(lids), AlphaStrategy::Linear, 1.0, 1.4));
        });
    }

    group.finish();
}

fn bench_get_alpha(c: &mut Criterion) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bench_lid.bin");
    let n = 1_000_000u32;
    write_lid_file(&path, &synthetic_lid_values(n as usize, 5.0, 2.0, 42)).unwrap();

    let params = McgiParams {
        alpha_min: 1.0,
        alpha_max: 1.4,
        ..Default::default()
    };
    let mut ctx = McgiContext::new(params).unwrap();
    ctx.initialize(&path).unwrap();

    let mut group = c.benchmark_group("get_alpha");
    group.throughput(Throughput::Elements(1));

    group.bench_function("hit", |b| {
        let mut node_id = 0u32;
        b.iter(|| {
            node_id = (node_id + 7919) % n;
            black_box(ctx.get_alpha(black_box(node_id)))
        });
    });

    group.bench_function("out_of_range", |b| {
        b.iter(|| black_box(ctx.get_alpha(black_box(n + 1))));
    });

    let disabled = McgiContext::new(params).unwrap();
    group.bench_function("disabled", |b| {
        b.iter(|| black_box(disabled.get_alpha(black_box(0))));
    });

    group.finish();
}

criterion_group!(benches, bench_build_table, bench_get_alpha);
criterion_main!(benches);
