use criterion::{criterion_group, Criterion, Throughput};

use crate::common::{shuffled_words, zipf_queries, NUM_WORDS};
use seqtrie::Trie;

fn bench(c: &mut Criterion) {
    let words = shuffled_words(NUM_WORDS);
    let trie: Trie<char> = words.iter().cloned().collect();
    let hits = zipf_queries(&words, 5_000);
    let misses: Vec<Vec<char>> = hits
        .iter()
        .map(|word| {
            let mut miss = word.clone();
            miss.push('!');
            miss
        })
        .collect();

    let mut group = c.benchmark_group("contains/words");
    group.throughput(Throughput::Elements(hits.len() as u64));
    group.bench_function("hit", |b| {
        b.iter(|| {
            for query in &hits {
                std::hint::black_box(trie.contains(query));
            }
        });
    });
    group.bench_function("miss", |b| {
        b.iter(|| {
            for query in &misses {
                std::hint::black_box(trie.contains(query));
            }
        });
    });
    group.bench_function("completions", |b| {
        b.iter(|| {
            for query in &hits {
                std::hint::black_box(trie.completions(&query[..2]).len());
            }
        });
    });
}

criterion_group!(bench_contains_group, bench);
