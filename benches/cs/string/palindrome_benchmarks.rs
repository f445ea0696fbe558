use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dp1d::string::{count_palindromic_substrings, longest_palindrome};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_text(len: usize, seed: u64) -> String {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len).map(|_| if rng.gen_bool(0.5) { 'a' } else { 'b' }).collect()
}

fn bench_palindromes(c: &mut Criterion) {
    let mut group = c.benchmark_group("palindrome");
    for size in [100, 1_000, 5_000] {
        let text = random_text(size, 7);
        group.bench_with_input(BenchmarkId::new("longest", size), &text, |b, t| {
            b.iter(|| longest_palindrome(black_box(t)).len())
        });
        group.bench_with_input(BenchmarkId::new("count", size), &text, |b, t| {
            b.iter(|| count_palindromic_substrings(black_box(t)))
        });
    }

    // Worst case: every center expands to the edge.
    let uniform = "a".repeat(2_000);
    group.bench_function("count/uniform_2000", |b| {
        b.iter(|| count_palindromic_substrings(black_box(&uniform)))
    });
    group.finish();
}

criterion_group!(benches, bench_palindromes);
criterion_main!(benches);
