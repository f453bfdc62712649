use super::*;
use crate::{
    tests_common::{generate_sequences_exhaustive, generate_sequences_skewed},
    visitor::WellFormedChecker,
};
use rustc_hash::FxBuildHasher;
use std::{collections::HashSet, panic::UnwindSafe};

#[test]
fn trie_is_send_sync_unwind_safe() {
    fn is_send<T: Send>() {}
    fn is_sync<T: Sync>() {}
    fn is_unwind_safe<T: UnwindSafe>() {}

    fn trie_is_send<E: Send>() {
        is_send::<Trie<E>>();
    }

    fn trie_is_sync<E: Sync>() {
        is_sync::<Trie<E>>();
    }

    fn trie_is_unwind_safe<E: UnwindSafe>() {
        is_unwind_safe::<Trie<E>>();
    }

    trie_is_send::<char>();
    trie_is_sync::<char>();
    trie_is_unwind_safe::<char>();
}

#[test]
fn empty_trie() {
    let trie = Trie::<char>::new();

    assert_eq!(trie.len(), 0);
    assert!(trie.is_empty());
    assert_eq!(trie.contents(), Vec::<Vec<char>>::new());
    assert!(!trie.contains("".chars()));
    assert!(!trie.contains("anything".chars()));
    assert!(trie.is_disjoint_with(["", "a", "anything"].map(str::chars)));
    assert_eq!(trie.completions("".chars()).count(), 0);
    assert_eq!(format!("{trie:?}"), "");
}

#[test]
fn default_trie_is_empty() {
    let default = Trie::<u8, FxBuildHasher>::default();

    assert!(default.is_empty());
    assert_eq!(default.len(), 0);
}

#[test]
fn cat_car_ca() {
    let mut trie = Trie::new();
    trie.insert("cat".chars());
    trie.insert("car".chars());
    trie.insert("ca".chars());

    assert!(trie.contains("ca".chars()));
    assert!(trie.contains("cat".chars()));
    assert!(!trie.contains("c".chars()));
    assert_eq!(trie.len(), 3);

    let completions: HashSet<Vec<char>> = trie.completions("ca".chars()).collect();
    assert_eq!(
        completions,
        HashSet::from([vec![], vec!['t'], vec!['r']])
    );

    let contents: HashSet<String> = trie.iter().map(String::from_iter).collect();
    assert_eq!(
        contents,
        HashSet::from(["cat".to_string(), "car".to_string(), "ca".to_string()])
    );
}

#[test]
fn insert_is_idempotent() {
    let mut trie = Trie::new();

    assert!(trie.insert([1u8, 2, 3]));
    let before = trie.clone();

    assert!(!trie.insert([1u8, 2, 3]));
    assert!(trie.contains([1u8, 2, 3]));
    assert_eq!(trie, before);
    assert_eq!(trie.len(), 1);
}

#[test]
fn remove_undoes_insert() {
    for sequence in [vec![], vec![1u8], vec![1, 2, 3]] {
        let mut trie = Trie::new();
        trie.insert([1u8, 2]);

        trie.insert(sequence.iter().copied());
        assert!(trie.contains(&sequence));

        assert!(trie.remove(&sequence));
        assert!(!trie.contains(&sequence));
        assert!(trie.contains([1u8, 2]));
        assert_eq!(trie.len(), 1);
    }
}

#[test]
fn len_tracks_insert_and_remove_history() {
    let mut trie = Trie::new();
    let mut expected = HashSet::new();

    let sequences: Vec<Vec<u8>> = generate_sequences_exhaustive(&[0, 1, 2], 3).collect();
    for (idx, sequence) in sequences.iter().enumerate() {
        assert_eq!(trie.insert(sequence.clone()), expected.insert(sequence.clone()));
        if idx % 3 == 0 {
            let victim = &sequences[idx / 2];
            assert_eq!(trie.remove(victim), expected.remove(victim));
        }
        assert_eq!(trie.len(), expected.len());
    }
}

#[test]
fn completions_match_membership() {
    let alphabet = ['a', 'b'];
    let trie: Trie<char> = ["", "a", "ab", "abb", "ba", "bba"]
        .into_iter()
        .map(str::chars)
        .collect();

    for prefix_len in 0..=3 {
        for prefix in generate_sequences_exhaustive(&alphabet, prefix_len) {
            let completions: HashSet<Vec<char>> = trie.completions(&prefix).collect();

            for suffix_len in 0..=3 {
                for suffix in generate_sequences_exhaustive(&alphabet, suffix_len) {
                    let mut whole = prefix.clone();
                    whole.extend(&suffix);

                    assert_eq!(
                        trie.contains(&whole),
                        completions.contains(&suffix),
                        "prefix {prefix:?} suffix {suffix:?}"
                    );
                }
            }
        }
    }
}

#[test]
fn completions_of_empty_prefix_are_contents() {
    let trie: Trie<u8> = generate_sequences_skewed(8).collect();

    let mut completions: Vec<_> = trie.completions(std::iter::empty::<u8>()).collect();
    let mut contents = trie.contents();
    completions.sort();
    contents.sort();

    assert_eq!(completions, contents);
}

#[test]
fn rebuilding_from_contents_is_equal() {
    let trie: Trie<u8> = generate_sequences_exhaustive(&[3, 1, 4], 2)
        .chain(generate_sequences_skewed(5))
        .collect();

    let rebuilt = Trie::from_sequences(trie.contents());
    assert_eq!(rebuilt, trie);

    let rebuilt_again: Trie<u8> = trie.iter().collect();
    assert_eq!(rebuilt_again, trie);
}

#[test]
fn rebuilding_after_prune_is_equal() {
    let mut trie: Trie<char> = ["abc", "abd", "b", "bcd"].into_iter().map(str::chars).collect();
    trie.remove("abd".chars());
    trie.remove("bcd".chars());

    let rebuilt: Trie<char> = trie.iter().collect();
    assert_ne!(rebuilt, trie);

    trie.prune();
    assert_eq!(rebuilt, trie);
    assert_eq!(WellFormedChecker::check(&trie), Ok(2));
}

#[test]
fn equality_ignores_insertion_order() {
    let forward: Trie<char> = ["x", "xy", "z", ""].into_iter().map(str::chars).collect();
    let backward: Trie<char> = ["", "z", "xy", "x"].into_iter().map(str::chars).collect();
    let different: Trie<char> = ["x", "xy", "z"].into_iter().map(str::chars).collect();

    assert_eq!(forward, backward);
    assert_ne!(forward, different);
}

#[test]
fn clone_is_independent() {
    let mut original: Trie<char> = ["ab"].into_iter().map(str::chars).collect();
    let copy = original.clone();

    original.insert("cd".chars());
    original.remove("ab".chars());

    assert!(copy.contains("ab".chars()));
    assert!(!copy.contains("cd".chars()));
    assert_eq!(copy.len(), 1);
}

#[test]
fn clear_keeps_nothing() {
    let mut trie: Trie<u8> = generate_sequences_skewed(10).collect();
    trie.insert([]);

    trie.clear();

    assert!(trie.is_empty());
    assert!(!trie.contains([] as [u8; 0]));
    assert_eq!(trie, Trie::new());
}

#[test]
fn subtrie_reaches_prefix_node() {
    let trie: Trie<char> = ["cat", "car"].into_iter().map(str::chars).collect();

    let node = trie.subtrie("ca".chars()).unwrap();
    assert!(!node.is_terminal());
    assert_eq!(node.num_children(), 2);
    assert_eq!(node.len(), 2);

    assert!(trie.subtrie("cb".chars()).is_none());
    assert_eq!(trie.subtrie("".chars()), Some(trie.root()));
}

#[test]
fn retain_keeps_matching_members() {
    let mut trie: Trie<char> = ["a", "ab", "abc", "b"].into_iter().map(str::chars).collect();

    trie.retain(|member| member.first() == Some(&'a'));

    let contents: HashSet<String> = trie.iter().map(String::from_iter).collect();
    assert_eq!(
        contents,
        HashSet::from(["a".to_string(), "ab".to_string(), "abc".to_string()])
    );
}

#[test]
fn debug_lists_members() {
    let mut trie = Trie::new();
    trie.insert("ab".chars());
    assert_eq!(format!("{trie:?}"), "'a''b'");

    trie.insert("c".chars());
    let rendered = format!("{trie:?}");
    assert!(
        rendered == "'a''b', 'c'" || rendered == "'c', 'a''b'",
        "{rendered}"
    );

    let numbers = Trie::<u8>::from_sequences([vec![1, 23]]);
    assert_eq!(format!("{numbers:?}"), "123");
}

#[test]
fn extend_and_from() {
    let mut trie: Trie<u8> = Trie::from([vec![1], vec![2]]);
    trie.extend([vec![2u8], vec![3, 4]]);

    assert_eq!(trie.len(), 3);
    assert!(trie.contains([3u8, 4]));
}

macro_rules! hasher_scenarios {
    ($($name:ident => $hasher:expr),+ $(,)?) => {
        paste::paste! {
            $(
                #[test]
                fn [<scenario_with_ $name _hasher>]() {
                    let mut trie = Trie::with_hasher($hasher);
                    for word in ["cat", "car", "ca", "dog"] {
                        trie.insert(word.chars());
                    }

                    assert_eq!(trie.len(), 4);
                    assert!(trie.contains("dog".chars()));
                    assert!(!trie.contains("do".chars()));

                    let mapped = trie.map(|member| member.into_iter().rev());
                    assert!(mapped.contains("god".chars()));

                    let union = trie.union(&mapped);
                    assert_eq!(union.len(), 8);

                    let common = union.intersection(&trie);
                    assert_eq!(common, trie);
                }
            )+
        }
    };
}

hasher_scenarios!(
    random_state => RandomState::new(),
    fx => FxBuildHasher,
);

#[test]
fn fx_hasher_iteration_order_is_reproducible() {
    let build = || -> Trie<u8, FxBuildHasher> {
        generate_sequences_exhaustive(&[5, 6, 7], 3).collect()
    };

    assert_eq!(build().contents(), build().contents());
}

#[test]
fn long_sequence_does_not_overflow_stack() {
    const DEPTH: usize = 200_000;

    let mut trie = Trie::new();
    assert!(trie.insert(vec![0u8; DEPTH]));
    assert!(trie.insert([0u8; 3]));

    assert_eq!(trie.len(), 2);
    assert!(!trie.is_empty());
    assert!(trie.contains(vec![0u8; DEPTH]));

    let mut lengths: Vec<usize> = trie.iter().map(|member| member.len()).collect();
    lengths.sort();
    assert_eq!(lengths, [3, DEPTH]);

    let completions = trie.completions([0u8; 10]);
    assert_eq!(completions.len(), 1);
    assert_eq!(
        completions.map(|suffix| suffix.len()).collect::<Vec<_>>(),
        [DEPTH - 10]
    );

    assert!(trie.remove(vec![0u8; DEPTH]));
    assert!(trie.remove([0u8; 3]));
    assert!(trie.is_empty());

    drop(trie);
}

#[test]
fn long_sequence_into_iter_does_not_overflow_stack() {
    const DEPTH: usize = 200_000;

    let mut trie = Trie::new();
    trie.insert(vec![7u8; DEPTH]);

    let members: Vec<Vec<u8>> = trie.into_iter().collect();
    assert_eq!(members, [vec![7u8; DEPTH]]);
}
