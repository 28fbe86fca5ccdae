use arbor_collections::{BstMap, BstMultiset, BstSet, Matrix};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::collections::{BTreeMap, BTreeSet};

const N: usize = 10_000;
// Sorted insertion is the degenerate O(n^2) case for an unbalanced BST;
// keep it small enough that the benchmark still finishes quickly.
const N_SORTED: usize = 1_000;

// ─── Helper functions to generate key sequences ─────────────────────────────

fn ordered_keys(n: usize) -> Vec<i64> {
    (0..n as i64).collect()
}

fn random_keys(n: usize) -> Vec<i64> {
    // Use a simple LCG for deterministic pseudo-random sequence
    let mut keys = Vec::with_capacity(n);
    let mut x: u64 = 12345;
    for _ in 0..n {
        x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
        keys.push((x >> 33) as i64);
    }
    keys
}

// ─── Map Benchmarks ─────────────────────────────────────────────────────────

fn bench_map_insert_random(c: &mut Criterion) {
    let keys = random_keys(N);
    let mut group = c.benchmark_group("map_insert_random");

    group.bench_function(BenchmarkId::new("BstMap", N), |b| {
        b.iter(|| {
            let mut map = BstMap::new();
            for &k in &keys {
                map.insert(k, k);
            }
            map
        });
    });

    group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
        b.iter(|| {
            let mut map = BTreeMap::new();
            for &k in &keys {
                map.insert(k, k);
            }
            map
        });
    });

    group.finish();
}

fn bench_map_insert_ordered(c: &mut Criterion) {
    let mut group = c.benchmark_group("map_insert_ordered");

    group.bench_function(BenchmarkId::new("BstMap", N_SORTED), |b| {
        b.iter(|| {
            let mut map = BstMap::new();
            for i in 0..N_SORTED as i64 {
                map.insert(i, i);
            }
            map
        });
    });

    group.bench_function(BenchmarkId::new("BTreeMap", N_SORTED), |b| {
        b.iter(|| {
            let mut map = BTreeMap::new();
            for i in 0..N_SORTED as i64 {
                map.insert(i, i);
            }
            map
        });
    });

    group.finish();
}

fn bench_map_get_random(c: &mut Criterion) {
    let keys = random_keys(N);
    let bst_map: BstMap<i64, i64> = keys.iter().map(|&k| (k, k)).collect();
    let bt_map: BTreeMap<i64, i64> = keys.iter().map(|&k| (k, k)).collect();

    let mut group = c.benchmark_group("map_get_random");

    group.bench_function(BenchmarkId::new("BstMap", N), |b| {
        b.iter(|| {
            let mut sum = 0i64;
            for &k in &keys {
                if let Some(&v) = bst_map.get(&k) {
                    sum = sum.wrapping_add(v);
                }
            }
            sum
        });
    });

    group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
        b.iter(|| {
            let mut sum = 0i64;
            for &k in &keys {
                if let Some(&v) = bt_map.get(&k) {
                    sum = sum.wrapping_add(v);
                }
            }
            sum
        });
    });

    group.finish();
}

fn bench_map_remove_random(c: &mut Criterion) {
    let keys = random_keys(N);

    let mut group = c.benchmark_group("map_remove_random");

    group.bench_function(BenchmarkId::new("BstMap", N), |b| {
        b.iter_batched(
            || keys.iter().map(|&k| (k, k)).collect::<BstMap<i64, i64>>(),
            |mut map| {
                for &k in &keys {
                    map.remove(&k);
                }
                map
            },
            criterion::BatchSize::SmallInput,
        );
    });

    group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
        b.iter_batched(
            || keys.iter().map(|&k| (k, k)).collect::<BTreeMap<i64, i64>>(),
            |mut map| {
                for &k in &keys {
                    map.remove(&k);
                }
                map
            },
            criterion::BatchSize::SmallInput,
        );
    });

    group.finish();
}

fn bench_map_iterate(c: &mut Criterion) {
    let keys = random_keys(N);
    let bst_map: BstMap<i64, i64> = keys.iter().map(|&k| (k, k)).collect();
    let bt_map: BTreeMap<i64, i64> = keys.iter().map(|&k| (k, k)).collect();

    let mut group = c.benchmark_group("map_iterate");

    group.bench_function(BenchmarkId::new("BstMap", N), |b| {
        b.iter(|| bst_map.iter().fold(0i64, |acc, (_, &v)| acc.wrapping_add(v)));
    });

    group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
        b.iter(|| bt_map.iter().fold(0i64, |acc, (_, &v)| acc.wrapping_add(v)));
    });

    group.finish();
}

// ─── Set Benchmarks ─────────────────────────────────────────────────────────

fn bench_set_insert_random(c: &mut Criterion) {
    let keys = random_keys(N);
    let mut group = c.benchmark_group("set_insert_random");

    group.bench_function(BenchmarkId::new("BstSet", N), |b| {
        b.iter(|| {
            let mut set = BstSet::new();
            for &k in &keys {
                set.insert(k);
            }
            set
        });
    });

    group.bench_function(BenchmarkId::new("BTreeSet", N), |b| {
        b.iter(|| {
            let mut set = BTreeSet::new();
            for &k in &keys {
                set.insert(k);
            }
            set
        });
    });

    group.finish();
}

fn bench_set_contains_random(c: &mut Criterion) {
    let keys = random_keys(N);
    let bst_set: BstSet<i64> = keys.iter().copied().collect();
    let bt_set: BTreeSet<i64> = keys.iter().copied().collect();

    let mut group = c.benchmark_group("set_contains_random");

    group.bench_function(BenchmarkId::new("BstSet", N), |b| {
        b.iter(|| {
            let mut count = 0usize;
            for &k in &keys {
                if bst_set.contains(&k) {
                    count += 1;
                }
            }
            count
        });
    });

    group.bench_function(BenchmarkId::new("BTreeSet", N), |b| {
        b.iter(|| {
            let mut count = 0usize;
            for &k in &keys {
                if bt_set.contains(&k) {
                    count += 1;
                }
            }
            count
        });
    });

    group.finish();
}

fn bench_multiset_insert_duplicates(c: &mut Criterion) {
    // Heavy duplication: N inserts over a key space of 64.
    let keys: Vec<i64> = random_keys(N).into_iter().map(|k| k % 64).collect();
    let ordered = ordered_keys(64);

    let mut group = c.benchmark_group("multiset_insert_duplicates");

    group.bench_function(BenchmarkId::new("BstMultiset", N), |b| {
        b.iter(|| {
            let mut bag = BstMultiset::new();
            for &k in &keys {
                bag.insert(k);
            }
            for &k in &ordered {
                std::hint::black_box(bag.count(&k));
            }
            bag
        });
    });

    group.finish();
}

// ─── Matrix Benchmarks ──────────────────────────────────────────────────────

fn lcg_matrix(n: usize, seed: &mut u64) -> Matrix {
    let mut matrix = Matrix::new(n, n).unwrap();
    for i in 0..n {
        for j in 0..n {
            *seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
            matrix[(i, j)] = f64::from((*seed >> 33) as i32 % 100);
        }
    }
    matrix
}

fn bench_matrix_multiply(c: &mut Criterion) {
    let mut seed = 42;
    let a = lcg_matrix(64, &mut seed);
    let b = lcg_matrix(64, &mut seed);

    c.bench_function("matrix_multiply_64x64", |bench| {
        bench.iter(|| &a * &b);
    });
}

fn bench_matrix_determinant(c: &mut Criterion) {
    let mut seed = 42;
    // Laplace expansion is factorial; 8x8 is already ~100k minor evaluations.
    let m = lcg_matrix(8, &mut seed);

    c.bench_function("matrix_determinant_8x8", |bench| {
        bench.iter(|| m.determinant().unwrap());
    });
}

fn bench_matrix_inverse(c: &mut Criterion) {
    let mut seed = 42;
    let m = lcg_matrix(7, &mut seed);

    c.bench_function("matrix_inverse_7x7", |bench| {
        bench.iter(|| m.inverse().unwrap());
    });
}

// ─── Criterion Groups ───────────────────────────────────────────────────────

criterion_group!(
    map_benches,
    bench_map_insert_random,
    bench_map_insert_ordered,
    bench_map_get_random,
    bench_map_remove_random,
    bench_map_iterate,
);

criterion_group!(
    set_benches,
    bench_set_insert_random,
    bench_set_contains_random,
    bench_multiset_insert_duplicates,
);

criterion_group!(
    matrix_benches,
    bench_matrix_multiply,
    bench_matrix_determinant,
    bench_matrix_inverse,
);

criterion_main!(map_benches, set_benches, matrix_benches);
