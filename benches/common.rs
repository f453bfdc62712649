use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};
use rand_distr::Zipf;
use seqtrie::{tests_common::generate_words, Trie};

pub const SEED: u64 = 69420;

pub const NUM_WORDS: usize = 20_000;

/// Words in shuffled order, so that insertion does not follow generation
/// order.
pub fn shuffled_words(count: usize) -> Vec<Vec<char>> {
    let mut rng = StdRng::seed_from_u64(SEED);
    let mut words: Vec<Vec<char>> = generate_words(count)
        .map(|word| word.chars().collect())
        .collect();
    words.shuffle(&mut rng);
    words
}

pub fn words_trie() -> Trie<char> {
    shuffled_words(NUM_WORDS).into_iter().collect()
}

/// Pick `count` queries from `words`, favouring the first few words heavily.
pub fn zipf_queries(words: &[Vec<char>], count: usize) -> Vec<Vec<char>> {
    let mut rng = StdRng::seed_from_u64(SEED);
    let distr = Zipf::new(words.len() as f64, 1.1).unwrap();

    (0..count)
        .map(|_| {
            let rank = rng.sample(distr) as usize;
            words[rank - 1].clone()
        })
        .collect()
}
