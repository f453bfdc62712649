use std::time::Duration;

use criterion::{criterion_group, BatchSize, Criterion, Throughput};
use rustc_hash::FxBuildHasher;
use seqtrie::{
    tests_common::{generate_sequences_fixed_length, generate_sequences_skewed},
    Trie,
};

use crate::common::{shuffled_words, NUM_WORDS};

fn gen_group(c: &mut Criterion, group: &str, sequences: Vec<Vec<u8>>) {
    let mut group = c.benchmark_group(group);
    group.warm_up_time(Duration::from_secs(5));
    group.measurement_time(Duration::from_secs(15));
    group.throughput(Throughput::Elements(
        sequences.iter().map(|s| s.len() as u64).sum(),
    ));

    group.bench_function("random_state", |b| {
        b.iter_batched(
            || sequences.clone(),
            |sequences| sequences.into_iter().collect::<Trie<u8>>(),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("fx", |b| {
        b.iter_batched(
            || sequences.clone(),
            |sequences| sequences.into_iter().collect::<Trie<u8, FxBuildHasher>>(),
            BatchSize::SmallInput,
        )
    });
}

fn bench(c: &mut Criterion) {
    let skewed: Vec<_> = generate_sequences_skewed(u8::MAX as usize).collect();
    let fixed_length: Vec<_> = generate_sequences_fixed_length(64, 16).collect();

    gen_group(c, "insert/skewed", skewed);
    gen_group(c, "insert/fixed_length", fixed_length);

    let words = shuffled_words(NUM_WORDS);
    let mut group = c.benchmark_group("insert/words");
    group.throughput(Throughput::Elements(words.len() as u64));
    group.bench_function("collect", |b| {
        b.iter_batched(
            || words.clone(),
            |words| words.into_iter().collect::<Trie<char>>(),
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(bench_insert_group, bench);
