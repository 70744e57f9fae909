use canopy_core::{DisjointSets, ForestDisjointSets};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn random_pairs(n: usize, count: usize) -> Vec<(usize, usize)> {
    (0..count)
        .map(|_| (fastrand::usize(0..n), fastrand::usize(0..n)))
        .collect()
}

fn bench_make_set(c: &mut Criterion) {
    let mut group = c.benchmark_group("forest_make_set");
    group.sample_size(10);

    group.bench_function("1M registrations", |b| {
        b.iter(|| {
            let mut forest = ForestDisjointSets::with_capacity(1_000_000);
            for i in 0..1_000_000_u32 {
                let _ = forest.make_set(black_box(i));
            }
            black_box(forest.len())
        });
    });

    group.finish();
}

fn bench_union_find(c: &mut Criterion) {
    const N: usize = 100_000;
    let unions = random_pairs(N, N);
    let finds: Vec<usize> = (0..N).map(|_| fastrand::usize(0..N)).collect();

    let mut group = c.benchmark_group("forest_union_find");
    group.sample_size(10);

    group.bench_function("100k unions then 100k finds", |b| {
        b.iter(|| {
            let mut forest = ForestDisjointSets::with_capacity(N);
            for i in 0..N {
                let _ = forest.make_set(i);
            }
            for (u, v) in &unions {
                let _ = forest.union(u, v);
            }
            for e in &finds {
                black_box(forest.find_set(e));
            }
            black_box(forest.set_count())
        });
    });

    group.finish();
}

criterion_group!(benches, bench_make_set, bench_union_find);
criterion_main!(benches);
