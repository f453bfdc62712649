//! Input generators shared by unit tests, integration tests and benchmarks.

use std::iter;

/// Generate `max_len` sequences of increasing length, where every sequence
/// is a run of zeros followed by a single `u8::MAX`.
///
/// None of the sequences is a prefix of another, and each one needs a new
/// branch off the longest path of the trie, one level deeper than the last.
pub fn generate_sequences_skewed(max_len: usize) -> impl Iterator<Item = Vec<u8>> {
    iter::successors(Some(vec![u8::MAX; 1]), move |prev| {
        if prev.len() < max_len {
            let mut sequence = vec![u8::MIN; prev.len()];
            sequence.push(u8::MAX);
            Some(sequence)
        } else {
            None
        }
    })
    .take(max_len)
}

/// Generate sequences of length `len` where every element has the same
/// value, stepping that value from `u8::MIN` to `u8::MAX` in `value_stops`
/// increments.
pub fn generate_sequences_fixed_length(
    len: usize,
    value_stops: u8,
) -> impl Iterator<Item = Vec<u8>> {
    iter::successors(Some(vec![u8::MIN; len]), move |prev| {
        if prev.iter().all(|digit| *digit == u8::MAX) {
            None
        } else {
            Some(
                prev.iter()
                    .map(|digit| digit.saturating_add(u8::MAX / value_stops))
                    .collect(),
            )
        }
    })
}

/// Generate every sequence of exactly `len` elements drawn from `alphabet`,
/// in lexicographic order of alphabet positions.
pub fn generate_sequences_exhaustive<T: Clone>(
    alphabet: &[T],
    len: usize,
) -> impl Iterator<Item = Vec<T>> + '_ {
    let first = (len == 0 || !alphabet.is_empty()).then(|| vec![0usize; len]);

    iter::successors(first, move |prev| {
        let mut next = prev.clone();
        for digit in next.iter_mut().rev() {
            *digit += 1;
            if *digit < alphabet.len() {
                return Some(next);
            }
            *digit = 0;
        }
        None
    })
    .map(move |digits| digits.into_iter().map(|idx| alphabet[idx].clone()).collect())
}

const SYLLABLES: [&str; 8] = ["ka", "lo", "mi", "ne", "ru", "sa", "to", "vi"];

/// Generate `count` distinct pronounceable words, built from up to four
/// syllables each. Many words share a prefix with each other.
pub fn generate_words(count: usize) -> impl Iterator<Item = String> {
    (1..=4)
        .flat_map(|syllables| generate_sequences_exhaustive(&SYLLABLES, syllables))
        .map(|parts| parts.concat())
        .take(count)
}
