#![no_main]

use libfuzzer_sys::arbitrary::{self, Arbitrary};
use seqtrie::{visitor::WellFormedChecker, Trie};
use std::collections::HashSet;

#[derive(Arbitrary, Debug)]
enum Action {
    Clear,
    Contains(Vec<u8>),
    CheckLen,
    CheckIter,
    Completions(Vec<u8>),
    Insert(Vec<u8>),
    Remove(Vec<u8>),
    Retain { max_len: usize },
    Prune,
    Clone,
    Union(Vec<Vec<u8>>),
    Intersect(Vec<Vec<u8>>),
    Intersection(Vec<Vec<u8>>),
    ExclusiveOr(Vec<Vec<u8>>),
    Subtract(Vec<Vec<u8>>),
    IsDisjointWith(Vec<Vec<u8>>),
    IsSubsetOf(Vec<Vec<u8>>),
}

libfuzzer_sys::fuzz_target!(|actions: Vec<Action>| {
    let mut trie = Trie::<u8>::new();
    let mut oracle = HashSet::<Vec<u8>>::new();

    for action in actions {
        match action {
            Action::Clear => {
                trie.clear();
                oracle.clear();
            },
            Action::Contains(sequence) => {
                assert_eq!(trie.contains(&sequence), oracle.contains(&sequence));
            },
            Action::CheckLen => {
                assert_eq!(trie.len(), oracle.len());
                assert_eq!(trie.is_empty(), oracle.is_empty());
            },
            Action::CheckIter => {
                let iter = trie.iter();
                assert_eq!(iter.len(), oracle.len());
                let members: HashSet<_> = iter.collect();
                assert_eq!(members, oracle);
            },
            Action::Completions(prefix) => {
                let completions: HashSet<_> = trie.completions(&prefix).collect();
                let expected: HashSet<_> = oracle
                    .iter()
                    .filter_map(|member| member.strip_prefix(prefix.as_slice()))
                    .map(<[u8]>::to_vec)
                    .collect();
                assert_eq!(completions, expected);
            },
            Action::Insert(sequence) => {
                assert_eq!(trie.insert(sequence.clone()), oracle.insert(sequence));
            },
            Action::Remove(sequence) => {
                assert_eq!(trie.remove(&sequence), oracle.remove(&sequence));
            },
            Action::Retain { max_len } => {
                trie.retain(|member| member.len() <= max_len);
                oracle.retain(|member| member.len() <= max_len);
            },
            Action::Prune => {
                trie.prune();
                assert_eq!(WellFormedChecker::check(&trie), Ok(oracle.len()));
            },
            Action::Clone => {
                let cloned = trie.clone();
                assert_eq!(cloned, trie);
                trie = cloned;
            },
            Action::Union(sequences) => {
                let other: Trie<u8> = sequences.iter().cloned().collect();
                trie.union_in_place(&other);
                oracle.extend(sequences);
            },
            Action::Intersect(sequences) => {
                trie.intersect_in_place(sequences.iter().cloned());
                let candidates: HashSet<_> = sequences.into_iter().collect();
                oracle.retain(|member| candidates.contains(member));
            },
            Action::Intersection(sequences) => {
                let other: Trie<u8> = sequences.iter().cloned().collect();
                let common = trie.intersection(&other);
                assert_eq!(common, trie.intersect(sequences));
                assert!(common.is_subset_of(&trie));
            },
            Action::ExclusiveOr(sequences) => {
                trie.exclusive_or_in_place(sequences.iter().cloned());
                let candidates: HashSet<_> = sequences.into_iter().collect();
                oracle = oracle.symmetric_difference(&candidates).cloned().collect();
            },
            Action::Subtract(sequences) => {
                trie.subtract_in_place(&sequences);
                for sequence in &sequences {
                    oracle.remove(sequence);
                }
            },
            Action::IsDisjointWith(sequences) => {
                assert_eq!(
                    trie.is_disjoint_with(&sequences),
                    sequences.iter().all(|sequence| !oracle.contains(sequence))
                );
            },
            Action::IsSubsetOf(sequences) => {
                let other: Trie<u8> = sequences.iter().cloned().collect();
                assert_eq!(
                    trie.is_subset_of(&other),
                    oracle.iter().all(|member| other.contains(member))
                );
            },
        }
    }
});
