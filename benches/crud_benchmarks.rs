use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use crime_set::{CrimeRecord, OrderedRecordSet};
use std::collections::BTreeMap;

const N: usize = 10_000;

const CODES: [&str; 4] = ["0460", "0486", "0820", "1320"];
const DESCRIPTIONS: [&str; 4] = ["SIMPLE", "DOMESTIC BATTERY SIMPLE", "$500 AND UNDER", "TO VEHICLE"];

// ─── Helper functions to generate record sequences ──────────────────────────

fn record(id: i64) -> CrimeRecord {
    let slot = (id as usize) % CODES.len();
    CrimeRecord::new(id, CODES[slot], DESCRIPTIONS[slot], id % 3 == 0)
}

fn ordered_ids(n: usize) -> Vec<i64> {
    (1..=n as i64).collect()
}

fn random_ids(n: usize) -> Vec<i64> {
    // Use a simple LCG for deterministic pseudo-random sequence
    let mut ids = Vec::with_capacity(n);
    let mut x: u64 = 12345;
    for _ in 0..n {
        x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
        ids.push(((x >> 33) as i64) + 1);
    }
    ids
}

fn build_set(ids: &[i64]) -> OrderedRecordSet {
    ids.iter().map(|&id| record(id)).collect()
}

fn build_map(ids: &[i64]) -> BTreeMap<i64, CrimeRecord> {
    ids.iter().map(|&id| (id, record(id))).collect()
}

// ─── Insert ─────────────────────────────────────────────────────────────────

fn bench_insert(c: &mut Criterion, name: &str, ids: &[i64]) {
    let mut group = c.benchmark_group(name);

    group.bench_function(BenchmarkId::new("OrderedRecordSet", N), |b| {
        b.iter(|| {
            let mut set = OrderedRecordSet::new();
            for &id in ids {
                set.insert(record(id));
            }
            set
        });
    });

    group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
        b.iter(|| {
            let mut map = BTreeMap::new();
            for &id in ids {
                map.entry(id).or_insert_with(|| record(id));
            }
            map
        });
    });

    group.finish();
}

fn bench_insert_ordered(c: &mut Criterion) {
    bench_insert(c, "insert_ordered", &ordered_ids(N));
}

fn bench_insert_random(c: &mut Criterion) {
    bench_insert(c, "insert_random", &random_ids(N));
}

// ─── Find ───────────────────────────────────────────────────────────────────

fn bench_find_random(c: &mut Criterion) {
    let ids = random_ids(N);
    let set = build_set(&ids);
    let map = build_map(&ids);

    let mut group = c.benchmark_group("find_random");

    group.bench_function(BenchmarkId::new("OrderedRecordSet", N), |b| {
        b.iter(|| {
            let mut found = 0;
            for &id in &ids {
                if set.find(id).get().is_some() {
                    found += 1;
                }
            }
            found
        });
    });

    group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
        b.iter(|| {
            let mut found = 0;
            for id in &ids {
                if map.contains_key(id) {
                    found += 1;
                }
            }
            found
        });
    });

    group.finish();
}

// ─── Remove ─────────────────────────────────────────────────────────────────

fn bench_remove_random(c: &mut Criterion) {
    let ids = random_ids(N);

    let mut group = c.benchmark_group("remove_random");

    group.bench_function(BenchmarkId::new("OrderedRecordSet", N), |b| {
        b.iter_batched(
            || build_set(&ids),
            |mut set| {
                for &id in &ids {
                    set.remove(id);
                }
                set
            },
            criterion::BatchSize::SmallInput,
        );
    });

    group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
        b.iter_batched(
            || build_map(&ids),
            |mut map| {
                for id in &ids {
                    map.remove(id);
                }
                map
            },
            criterion::BatchSize::SmallInput,
        );
    });

    group.finish();
}

// ─── Queries ────────────────────────────────────────────────────────────────

fn bench_queries(c: &mut Criterion) {
    let set = build_set(&ordered_ids(N));

    let mut group = c.benchmark_group("queries");

    group.bench_function(BenchmarkId::new("find_by_code", N), |b| {
        b.iter(|| set.find_by_code("0486"));
    });

    group.bench_function(BenchmarkId::new("find_by_description", N), |b| {
        b.iter(|| set.find_by_description("BATTERY"));
    });

    group.bench_function(BenchmarkId::new("arrest_cursor_walk", N), |b| {
        b.iter(|| {
            let mut cursor = set.arrest_begin();
            let mut visited = 0;
            while !cursor.is_end() {
                visited += 1;
                cursor.move_next();
            }
            visited
        });
    });

    group.finish();
}

// ─── Criterion Groups ───────────────────────────────────────────────────────

criterion_group!(insert_benches, bench_insert_ordered, bench_insert_random,);

criterion_group!(lookup_benches, bench_find_random, bench_remove_random,);

criterion_group!(query_benches, bench_queries,);

criterion_main!(insert_benches, lookup_benches, query_benches,);
