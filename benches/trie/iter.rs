use criterion::{criterion_group, Criterion};

use crate::common::words_trie;

fn bench(c: &mut Criterion) {
    let trie = words_trie();

    let mut group = c.benchmark_group("iter/trie");

    group.bench_function("words/borrowed", |b| {
        b.iter(|| {
            trie.iter().for_each(|member| {
                std::hint::black_box(member);
            });
        });
    });

    group.bench_function("words/owned", |b| {
        b.iter_batched(
            || trie.clone(),
            |trie| {
                trie.into_iter().for_each(|member| {
                    std::hint::black_box(member);
                });
            },
            criterion::BatchSize::LargeInput,
        );
    });

    group.bench_function("words/len", |b| {
        b.iter(|| std::hint::black_box(trie.len()));
    });

    group.bench_function("words/clone", |b| {
        b.iter(|| std::hint::black_box(trie.clone()));
    });
}

criterion_group!(bench_iter_group, bench);
