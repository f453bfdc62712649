use criterion::{criterion_group, BatchSize, Criterion};
use rand::{rngs::StdRng, seq::IndexedRandom, SeedableRng};
use seqtrie::Trie;

use crate::common::{shuffled_words, SEED};

fn bench(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(SEED);
    let words = shuffled_words(10_000);

    let left: Trie<char> = words.choose_multiple(&mut rng, 6_000).cloned().collect();
    let right: Trie<char> = words.choose_multiple(&mut rng, 6_000).cloned().collect();
    let candidates = right.contents();

    let mut group = c.benchmark_group("set_algebra/words");

    group.bench_function("union", |b| {
        b.iter(|| std::hint::black_box(left.union(&right)));
    });

    group.bench_function("intersection", |b| {
        b.iter(|| std::hint::black_box(left.intersection(&right)));
    });

    group.bench_function("intersect", |b| {
        b.iter(|| std::hint::black_box(left.intersect(candidates.iter().cloned())));
    });

    group.bench_function("exclusive_or_in_place", |b| {
        b.iter_batched(
            || left.clone(),
            |mut trie| {
                trie.exclusive_or_in_place(candidates.iter().cloned());
                trie
            },
            BatchSize::LargeInput,
        );
    });

    group.bench_function("subtract", |b| {
        b.iter(|| std::hint::black_box(left.subtract(&candidates)));
    });

    group.bench_function("is_subset_of", |b| {
        b.iter(|| std::hint::black_box(left.is_subset_of(&right)));
    });
}

criterion_group!(bench_set_algebra_group, bench);
