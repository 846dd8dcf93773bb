use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use sparse_sieve::store::SparseIntArray;

fn build(n: i32) -> SparseIntArray {
    (0..n).map(|k| (k * 3, k)).collect()
}

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("view_pipeline");

    for &n in &[1_000i32, 100_000i32] {
        let map = build(n);

        group.bench_with_input(BenchmarkId::new("forward_filtered", n), &n, |b, _| {
            b.iter(|| {
                let view = map.view().but().value(0).only().from(10);
                black_box(view.count());
            });
        });

        group.bench_with_input(BenchmarkId::new("reversed_window", n), &n, |b, _| {
            b.iter(|| {
                let view = map.view().only().from(10).reverse().only().first(100);
                black_box(view.keys());
            });
        });

        group.bench_with_input(BenchmarkId::new("last_n", n), &n, |b, _| {
            b.iter(|| {
                let view = map.view().only().entry_matching(|k, _| k % 2 == 0).only().last(50);
                black_box(view.values());
            });
        });

        group.bench_with_input(BenchmarkId::new("retain_reversed", n), &n, |b, &n| {
            b.iter_batched(
                || build(n),
                |mut fresh| {
                    let kept = fresh.view_mut().only().to(100).reverse().retain();
                    black_box(kept)
                },
                criterion::BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
