use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use tortoise_maps::{OwnerMap, Tortoise, TortoiseHashMap, TortoiseLinkedHashMap, operations};

const N: usize = 1_000;

const NICKNAMES: [&str; 10] = ["Атлант", "Броня", "Вічність", "Гном", "Дзвін", "Еон", "Жук", "Зевс", "Ікар", "Казка"];
const OWNERS: [&str; 8] = ["Руслан", "Олеся", "Микола", "Аліна", "Тимур", "Софія", "Віталій", "Надія"];

// ─── Helper functions to generate entries ───────────────────────────────────

fn random_entries(n: usize) -> Vec<(Tortoise, String)> {
    // Use a simple LCG for deterministic pseudo-random sequence
    let mut entries = Vec::with_capacity(n);
    let mut x: u64 = 12345;
    for i in 0..n {
        x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
        let nickname = NICKNAMES[(x >> 33) as usize % NICKNAMES.len()];
        let owner = OWNERS[(x >> 45) as usize % OWNERS.len()];
        // The index keeps every key distinct.
        let key = Tortoise::with_descriptor(nickname, format!("shellThickness={}.{i}", (x >> 40) % 10));
        entries.push((key, owner.to_owned()));
    }
    entries
}

fn variants() -> (TortoiseHashMap, TortoiseLinkedHashMap) {
    let entries = random_entries(N);
    (entries.iter().cloned().collect(), entries.into_iter().collect())
}

fn bench_find_by_key_in<M: OwnerMap<Tortoise, String>>(map: &M, keys: &[Tortoise]) -> usize {
    keys.iter()
        .filter(|&key| operations::find_by_key(map, key).is_some())
        .count()
}

// ─── Lookup Benchmarks ──────────────────────────────────────────────────────

fn bench_find_by_key(c: &mut Criterion) {
    let (hash, linked) = variants();
    let keys: Vec<Tortoise> = random_entries(N).into_iter().map(|(k, _)| k).collect();

    let mut group = c.benchmark_group("find_by_key");

    group.bench_function(BenchmarkId::new("HashMap", N), |b| {
        b.iter(|| bench_find_by_key_in(black_box(&hash), &keys));
    });

    group.bench_function(BenchmarkId::new("LinkedHashMap", N), |b| {
        b.iter(|| bench_find_by_key_in(black_box(&linked), &keys));
    });

    group.finish();
}

fn bench_find_by_value(c: &mut Criterion) {
    let (hash, linked) = variants();
    let owner = "Микола".to_owned();

    let mut group = c.benchmark_group("find_by_value");

    group.bench_function(BenchmarkId::new("HashMap", N), |b| {
        b.iter(|| operations::find_by_value(black_box(&hash), &owner).is_some());
    });

    group.bench_function(BenchmarkId::new("LinkedHashMap", N), |b| {
        b.iter(|| operations::find_by_value(black_box(&linked), &owner).is_some());
    });

    group.finish();
}

// ─── Mutation Benchmarks ────────────────────────────────────────────────────

fn bench_sort_by_key(c: &mut Criterion) {
    let (hash, linked) = variants();

    let mut group = c.benchmark_group("sort_by_key");

    group.bench_function(BenchmarkId::new("HashMap", N), |b| {
        b.iter_batched(
            || hash.clone(),
            |mut map| {
                operations::sort_by_key(&mut map);
                map
            },
            criterion::BatchSize::SmallInput,
        );
    });

    group.bench_function(BenchmarkId::new("LinkedHashMap", N), |b| {
        b.iter_batched(
            || linked.clone(),
            |mut map| {
                operations::sort_by_key(&mut map);
                map
            },
            criterion::BatchSize::SmallInput,
        );
    });

    group.finish();
}

fn bench_remove_by_value(c: &mut Criterion) {
    let (hash, linked) = variants();
    let owner = "Микола".to_owned();

    let mut group = c.benchmark_group("remove_by_value");

    group.bench_function(BenchmarkId::new("HashMap", N), |b| {
        b.iter_batched(
            || hash.clone(),
            |mut map| operations::remove_by_value(&mut map, &owner).len(),
            criterion::BatchSize::SmallInput,
        );
    });

    group.bench_function(BenchmarkId::new("LinkedHashMap", N), |b| {
        b.iter_batched(
            || linked.clone(),
            |mut map| operations::remove_by_value(&mut map, &owner).len(),
            criterion::BatchSize::SmallInput,
        );
    });

    group.finish();
}

// ─── Criterion Groups ───────────────────────────────────────────────────────

criterion_group!(lookup_benches, bench_find_by_key, bench_find_by_value,);

criterion_group!(mutation_benches, bench_sort_by_key, bench_remove_by_value,);

criterion_main!(lookup_benches, mutation_benches);
