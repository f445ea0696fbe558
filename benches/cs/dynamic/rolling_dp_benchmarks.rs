use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dp1d::dynamic::{
    max_product_subarray, min_coins_for_change, min_cost_climbing_stairs, num_decodings,
    rob_circular, rob_linear, word_break,
};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_values(len: usize, seed: u64) -> Vec<u64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len).map(|_| rng.gen_range(0..1000)).collect()
}

fn bench_rolling(c: &mut Criterion) {
    let mut group = c.benchmark_group("rolling");
    for size in [100, 1_000, 10_000] {
        let values = random_values(size, 42);
        group.bench_with_input(BenchmarkId::new("rob_linear", size), &values, |b, v| {
            b.iter(|| rob_linear(black_box(v)))
        });
        group.bench_with_input(BenchmarkId::new("rob_circular", size), &values, |b, v| {
            b.iter(|| rob_circular(black_box(v)))
        });
        group.bench_with_input(BenchmarkId::new("min_cost_stairs", size), &values, |b, v| {
            b.iter(|| min_cost_climbing_stairs(black_box(v)))
        });

        let signs: Vec<i64> = values.iter().map(|&v| if v % 2 == 0 { 1 } else { -1 }).collect();
        group.bench_with_input(BenchmarkId::new("max_product", size), &signs, |b, v| {
            b.iter(|| max_product_subarray(black_box(v)))
        });
    }

    let digits = "1".repeat(80);
    group.bench_function("num_decodings/80", |b| {
        b.iter(|| num_decodings(black_box(&digits)))
    });
    group.finish();
}

fn bench_full_table(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_table");
    let coins: [usize; 5] = [1, 7, 23, 61, 97];
    for amount in [100, 1_000, 10_000] {
        group.bench_with_input(BenchmarkId::new("min_coins", amount), &amount, |b, &a| {
            b.iter(|| min_coins_for_change(black_box(&coins), a))
        });
    }

    let dict = ["a", "aa", "aaa", "aaaa", "b"];
    let text = format!("{}b", "a".repeat(500));
    group.bench_function("word_break/501", |b| {
        b.iter(|| word_break(black_box(&text), &dict))
    });
    group.finish();
}

criterion_group!(benches, bench_rolling, bench_full_table);
criterion_main!(benches);
