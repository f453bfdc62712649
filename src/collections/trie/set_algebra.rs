use crate::Trie;
use std::{
    borrow::Borrow,
    hash::{BuildHasher, Hash},
};

/// Set operations.
///
/// The operations named after a collection of "candidates" accept any
/// iterable of sequences, which includes another trie's [`Trie::iter`].
/// Operations taking a `&Trie` work on both tries' structure directly.
impl<E, S> Trie<E, S>
where
    E: Eq + Hash + Clone,
    S: BuildHasher + Clone,
{
    /// Add every member of `other` to this trie.
    ///
    /// The parts of `other` which this trie does not already have are cloned,
    /// so `other` is left as it was.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqtrie::Trie;
    ///
    /// let mut left = Trie::<char>::from_sequences(["ab", "c"].map(str::chars));
    /// let right = Trie::<char>::from_sequences(["", "ab", "abd"].map(str::chars));
    ///
    /// left.union_in_place(&right);
    ///
    /// assert_eq!(left.len(), 4);
    /// assert!(left.contains("".chars()));
    /// assert!(left.contains("abd".chars()));
    /// assert_eq!(right.len(), 3);
    /// ```
    pub fn union_in_place(&mut self, other: &Trie<E, S>) {
        self.root.union_with(&other.root);
    }

    /// Return a new trie holding the members of both this trie and `other`.
    pub fn union(&self, other: &Trie<E, S>) -> Trie<E, S> {
        let mut union = self.clone();
        union.union_in_place(other);
        union
    }

    /// Return a new trie holding exactly the candidates which are members of
    /// this trie.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqtrie::Trie;
    ///
    /// let trie = Trie::<char>::from_sequences(["cat", "car", "ca"].map(str::chars));
    ///
    /// let common = trie.intersect(["car", "cab", "ca"].map(str::chars));
    ///
    /// assert_eq!(common.len(), 2);
    /// assert!(common.contains("car".chars()));
    /// assert!(common.contains("ca".chars()));
    /// ```
    pub fn intersect<I>(&self, candidates: I) -> Trie<E, S>
    where
        I: IntoIterator,
        I::Item: IntoIterator<Item = E>,
    {
        let mut common = self.empty_like();
        common.extend(
            candidates
                .into_iter()
                .map(|candidate| candidate.into_iter().collect::<Vec<_>>())
                .filter(|candidate| self.contains(candidate)),
        );
        common
    }

    /// Keep only the members of this trie which are also candidates.
    pub fn intersect_in_place<I>(&mut self, candidates: I)
    where
        I: IntoIterator,
        I::Item: IntoIterator<Item = E>,
    {
        *self = self.intersect(candidates);
    }

    /// Return a new trie holding the members of both this trie and `other`.
    ///
    /// This gives the same members as `self.intersect(other.iter())`, but
    /// walks the two tries side by side instead of looking up every member
    /// of `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqtrie::Trie;
    ///
    /// let left = Trie::<u8>::from_sequences([vec![1, 2], vec![1, 3], vec![]]);
    /// let right = Trie::<u8>::from_sequences([vec![1, 3], vec![2], vec![]]);
    ///
    /// assert_eq!(
    ///     left.intersection(&right),
    ///     Trie::from_sequences([vec![1, 3], vec![]])
    /// );
    /// ```
    pub fn intersection(&self, other: &Trie<E, S>) -> Trie<E, S> {
        Trie {
            root: self.root.intersection(&other.root),
        }
    }

    /// Replace this trie with the symmetric difference of this trie and the
    /// candidates.
    ///
    /// Afterwards the trie holds the sequences which were either members or
    /// candidates, but not both. Each distinct candidate is counted once, no
    /// matter how many times it appears.
    ///
    /// To only remove the candidates, use [`Trie::subtract_in_place`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqtrie::Trie;
    ///
    /// let mut trie = Trie::<char>::from_sequences(["ab", "cd"].map(str::chars));
    ///
    /// trie.exclusive_or_in_place(["cd", "ef", "ef"].map(str::chars));
    /// trie.prune();
    ///
    /// assert_eq!(trie, Trie::from_sequences(["ab", "ef"].map(str::chars)));
    /// ```
    pub fn exclusive_or_in_place<I>(&mut self, candidates: I)
    where
        I: IntoIterator,
        I::Item: IntoIterator<Item = E>,
    {
        let mut toggled: Trie<E, S> = self.empty_like();
        toggled.extend(candidates);

        for candidate in toggled {
            if !self.remove(&candidate) {
                self.insert(candidate);
            }
        }
    }

    /// Return the symmetric difference of this trie and the candidates.
    ///
    /// See [`Trie::exclusive_or_in_place`].
    pub fn exclusive_or<I>(&self, candidates: I) -> Trie<E, S>
    where
        I: IntoIterator,
        I::Item: IntoIterator<Item = E>,
    {
        let mut difference = self.clone();
        difference.exclusive_or_in_place(candidates);
        difference
    }

    /// Remove every candidate from this trie.
    ///
    /// Like [`Trie::remove`], this leaves the nodes of removed members in
    /// place.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqtrie::Trie;
    ///
    /// let mut trie = Trie::<char>::from_sequences(["ab", "cd"].map(str::chars));
    ///
    /// trie.subtract_in_place(["cd", "ef"].map(str::chars));
    ///
    /// assert_eq!(trie.len(), 1);
    /// assert!(trie.contains("ab".chars()));
    /// assert!(!trie.contains("ef".chars()));
    /// ```
    pub fn subtract_in_place<I>(&mut self, candidates: I)
    where
        I: IntoIterator,
        I::Item: IntoIterator,
        <I::Item as IntoIterator>::Item: Borrow<E>,
    {
        for candidate in candidates {
            self.remove(candidate);
        }
    }

    /// Return a new trie holding the members of this trie which are not
    /// candidates.
    ///
    /// Unlike [`Trie::subtract_in_place`], the returned trie is pruned.
    pub fn subtract<I>(&self, candidates: I) -> Trie<E, S>
    where
        I: IntoIterator,
        I::Item: IntoIterator,
        <I::Item as IntoIterator>::Item: Borrow<E>,
    {
        let mut difference = self.clone();
        difference.subtract_in_place(candidates);
        difference.prune();
        difference
    }
}

impl<E, S> Trie<E, S>
where
    E: Eq + Hash,
    S: BuildHasher + Clone,
{
    /// Return true if none of the candidates is a member of this trie.
    ///
    /// Stops at the first candidate which is a member.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqtrie::Trie;
    ///
    /// let trie = Trie::<char>::from_sequences(["ab", "cd"].map(str::chars));
    ///
    /// assert!(trie.is_disjoint_with(["a", "abc", ""].map(str::chars)));
    /// assert!(!trie.is_disjoint_with(["a", "cd"].map(str::chars)));
    /// ```
    pub fn is_disjoint_with<I>(&self, candidates: I) -> bool
    where
        I: IntoIterator,
        I::Item: IntoIterator,
        <I::Item as IntoIterator>::Item: Borrow<E>,
    {
        !candidates
            .into_iter()
            .any(|candidate| self.contains(candidate))
    }

    /// Return true if every member of this trie is a member of `other`.
    pub fn is_subset_of(&self, other: &Trie<E, S>) -> bool {
        self.root.is_subset_of(&other.root)
    }

    /// Return true if every member of `other` is a member of this trie.
    pub fn is_superset_of(&self, other: &Trie<E, S>) -> bool {
        other.is_subset_of(self)
    }

    /// Return true if this trie is a subset of `other`, and `other` has at
    /// least one member that this trie does not.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqtrie::Trie;
    ///
    /// let small = Trie::<u8>::from_sequences([vec![1]]);
    /// let large = Trie::<u8>::from_sequences([vec![1], vec![1, 1]]);
    ///
    /// assert!(small.is_strict_subset_of(&large));
    /// assert!(!large.is_strict_subset_of(&large));
    /// assert!(large.is_strict_superset_of(&small));
    /// ```
    pub fn is_strict_subset_of(&self, other: &Trie<E, S>) -> bool {
        self.is_subset_of(other) && !other.is_subset_of(self)
    }

    /// Return true if this trie is a superset of `other`, and has at least
    /// one member that `other` does not.
    pub fn is_strict_superset_of(&self, other: &Trie<E, S>) -> bool {
        other.is_strict_subset_of(self)
    }
}
