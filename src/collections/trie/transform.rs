use crate::Trie;
use std::hash::{BuildHasher, Hash};

/// Structural transforms.
///
/// Each transform visits every member once through [`Trie::iter`] and builds
/// a fresh trie, using a copy of this trie's hasher. The receiver is never
/// modified.
impl<E, S> Trie<E, S>
where
    E: Eq + Hash + Clone,
    S: BuildHasher + Clone,
{
    /// Return a trie holding the result of `transform` applied to every
    /// member.
    ///
    /// Members which transform to the same sequence are merged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqtrie::Trie;
    ///
    /// let trie = Trie::<char>::from_sequences(["ab", "abc", "b"].map(str::chars));
    ///
    /// let lengths = trie.map(|member| [member.len()]);
    ///
    /// assert_eq!(lengths, Trie::from_sequences([[1], [2], [3]]));
    /// ```
    pub fn map<T, F, I>(&self, mut transform: F) -> Trie<T, S>
    where
        T: Eq + Hash,
        F: FnMut(Vec<E>) -> I,
        I: IntoIterator<Item = T>,
    {
        let mut mapped = self.empty_like();
        for member in self {
            mapped.insert(transform(member));
        }
        mapped
    }

    /// Return a trie holding the members for which `predicate` returns
    /// `true`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqtrie::Trie;
    ///
    /// let trie = Trie::<char>::from_sequences(["ab", "abc", "b"].map(str::chars));
    ///
    /// let short = trie.filter(|member| member.len() < 3);
    ///
    /// assert_eq!(short, Trie::from_sequences(["ab", "b"].map(str::chars)));
    /// ```
    pub fn filter<F>(&self, mut predicate: F) -> Trie<E, S>
    where
        F: FnMut(&[E]) -> bool,
    {
        let mut filtered = self.empty_like();
        filtered.extend(self.iter().filter(|member| predicate(member)));
        filtered
    }

    /// Return a trie holding the result of `transform` applied to every
    /// member, skipping the members for which `transform` returns `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqtrie::Trie;
    ///
    /// let trie = Trie::<char>::from_sequences(["ab", "xb", "ac"].map(str::chars));
    ///
    /// let after_a = trie.filter_map(|member| match member.as_slice() {
    ///     ['a', rest @ ..] => Some(rest.to_vec()),
    ///     _ => None,
    /// });
    ///
    /// assert_eq!(after_a, Trie::from_sequences(["b", "c"].map(str::chars)));
    /// ```
    pub fn filter_map<T, F, I>(&self, mut transform: F) -> Trie<T, S>
    where
        T: Eq + Hash,
        F: FnMut(Vec<E>) -> Option<I>,
        I: IntoIterator<Item = T>,
    {
        let mut mapped = self.empty_like();
        mapped.extend(self.iter().filter_map(|member| transform(member)));
        mapped
    }

    /// Return the union of the tries produced by `transform` for every
    /// member.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqtrie::Trie;
    ///
    /// let trie = Trie::<char>::from_sequences(["ab", "c"].map(str::chars));
    ///
    /// // Every member, and every member followed by `'!'`.
    /// let expanded = trie.flat_map(|member| {
    ///     let mut shouted = member.clone();
    ///     shouted.push('!');
    ///     Trie::from_sequences([member, shouted])
    /// });
    ///
    /// assert_eq!(expanded.len(), 4);
    /// assert!(expanded.contains("ab!".chars()));
    /// assert!(expanded.contains("c".chars()));
    /// ```
    pub fn flat_map<T, F>(&self, mut transform: F) -> Trie<T, S>
    where
        T: Eq + Hash + Clone,
        F: FnMut(Vec<E>) -> Trie<T, S>,
    {
        let mut union = self.empty_like();
        for member in self {
            union.union_in_place(&transform(member));
        }
        union
    }
}
