//! Module containing the implementation of [`Trie`] and its associated
//! iterators.

use crate::Node;
use std::{
    borrow::Borrow,
    fmt,
    hash::{BuildHasher, Hash, RandomState},
};

mod iterators;
mod set_algebra;
mod transform;
pub use iterators::*;

/// A set of sequences, stored as a trie.
///
/// Each member is a sequence of elements `E`. Members that share a prefix
/// share the nodes for that prefix, and each node keeps its children in a
/// [`HashMap`][std::collections::HashMap] built from a hasher of type `S`.
///
/// Operations that follow a single sequence ([`insert`][Trie::insert],
/// [`remove`][Trie::remove], [`contains`][Trie::contains],
/// [`completions`][Trie::completions]) take anything which can be iterated,
/// and consume exactly one element per level of the trie.
///
/// Equality is structural: two tries are equal when their node trees are
/// equal, regardless of the order their members were inserted in. Since
/// [`remove`][Trie::remove] can leave empty branches behind, call
/// [`prune`][Trie::prune] before comparing tries that went through removals.
pub struct Trie<E, S = RandomState> {
    root: Node<E, S>,
}

impl<E> Trie<E> {
    /// Create a new, empty [`Trie`].
    ///
    /// This function will not pre-allocate anything.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqtrie::Trie;
    ///
    /// let trie = Trie::<char>::new();
    /// assert!(trie.is_empty());
    /// assert_eq!(trie.len(), 0);
    /// assert_eq!(trie, Trie::new());
    /// ```
    pub fn new() -> Self {
        Self::with_hasher(RandomState::new())
    }
}

impl<E, S> Trie<E, S> {
    /// Create a new, empty [`Trie`] which will use the given hash builder for
    /// the children of every node.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqtrie::Trie;
    /// use std::hash::RandomState;
    ///
    /// let mut trie = Trie::with_hasher(RandomState::new());
    /// trie.insert([1, 2, 3]);
    /// assert!(trie.contains([1, 2, 3]));
    /// ```
    pub fn with_hasher(hasher: S) -> Self {
        Trie {
            root: Node::with_hasher(hasher),
        }
    }

    /// Return a reference to the trie's [`BuildHasher`].
    pub fn hasher(&self) -> &S {
        self.root.children.hasher()
    }

    /// Return the root node of the trie, for inspection.
    ///
    /// The root is terminal if and only if the empty sequence is a member.
    pub fn root(&self) -> &Node<E, S> {
        &self.root
    }

    /// Return the number of member sequences.
    ///
    /// This walks the whole trie, so it takes time proportional to the number
    /// of nodes.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqtrie::Trie;
    ///
    /// let mut trie = Trie::new();
    /// trie.insert("ab".chars());
    /// trie.insert("ab".chars());
    /// trie.insert("".chars());
    /// assert_eq!(trie.len(), 2);
    /// ```
    #[doc(alias = "count")]
    pub fn len(&self) -> usize {
        self.root.len()
    }

    /// Return true if the trie has no members.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqtrie::Trie;
    ///
    /// let mut trie = Trie::new();
    /// assert!(trie.is_empty());
    ///
    /// trie.insert([7]);
    /// assert!(!trie.is_empty());
    ///
    /// trie.remove([7]);
    /// assert!(trie.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Remove every member, keeping the hasher.
    pub fn clear(&mut self) {
        self.root.terminal = false;
        self.root.children.clear();
    }

    /// Drop every branch of the trie that does not lead to a member.
    ///
    /// [`remove`][Trie::remove] never deletes nodes, so a trie with a history
    /// of removals may hold branches that lead nowhere. Those branches do not
    /// change the set of members, but they do take memory and they do make
    /// the trie compare unequal to a trie with the same members.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqtrie::Trie;
    ///
    /// let mut trie = Trie::new();
    /// trie.insert("abc".chars());
    /// trie.insert("a".chars());
    /// trie.remove("abc".chars());
    ///
    /// let rebuilt: Trie<char> = trie.iter().collect();
    /// assert_ne!(trie, rebuilt);
    ///
    /// trie.prune();
    /// assert_eq!(trie, rebuilt);
    /// ```
    pub fn prune(&mut self) {
        self.root.prune();
    }

    /// Iterate over every member sequence, in an unspecified order.
    ///
    /// The order is the same each time an unmodified trie is iterated.
    /// Creating the iterator counts the members first, which visits every
    /// node once before the first member is produced.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqtrie::Trie;
    ///
    /// let trie: Trie<u8> = [vec![1, 2], vec![1], vec![3]].into_iter().collect();
    ///
    /// let mut members: Vec<Vec<u8>> = trie.iter().collect();
    /// members.sort();
    /// assert_eq!(members, [vec![1], vec![1, 2], vec![3]]);
    /// ```
    pub fn iter(&self) -> Iter<'_, E, S> {
        Iter::new(Some(&self.root))
    }

    /// Collect every member sequence into a [`Vec`], in the same order as
    /// [`Trie::iter`].
    pub fn contents(&self) -> Vec<Vec<E>>
    where
        E: Clone,
    {
        self.iter().collect()
    }
}

impl<E, S> Trie<E, S>
where
    E: Eq + Hash,
    S: BuildHasher + Clone,
{
    /// Create a new trie holding each of the given sequences.
    ///
    /// This is equivalent to inserting the sequences one at a time into
    /// [`Trie::default`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqtrie::Trie;
    ///
    /// let trie = Trie::<char>::from_sequences(["cat", "car"].map(str::chars));
    /// assert_eq!(trie.len(), 2);
    /// ```
    pub fn from_sequences<I>(sequences: I) -> Self
    where
        I: IntoIterator,
        I::Item: IntoIterator<Item = E>,
        S: Default,
    {
        let mut trie = Trie::with_hasher(S::default());
        trie.extend(sequences);
        trie
    }

    /// Create an empty trie using a copy of this trie's hasher.
    pub(crate) fn empty_like<T>(&self) -> Trie<T, S> {
        Trie::with_hasher(self.hasher().clone())
    }

    /// Add a sequence to the trie.
    ///
    /// Returns whether the sequence was newly inserted. That is:
    ///
    ///  - If the trie did not previously contain this sequence, `true` is
    ///    returned.
    ///  - If the trie already contained this sequence, `false` is returned, and
    ///    the trie is not modified.
    ///
    /// The sequence is consumed in a single pass.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqtrie::Trie;
    ///
    /// let mut trie = Trie::new();
    ///
    /// assert!(trie.insert("ca".chars()));
    /// assert!(trie.insert("cat".chars()));
    /// assert!(!trie.insert("ca".chars()));
    /// assert_eq!(trie.len(), 2);
    /// ```
    pub fn insert<I>(&mut self, sequence: I) -> bool
    where
        I: IntoIterator<Item = E>,
    {
        self.root.insert(sequence)
    }

    /// Remove a sequence from the trie.
    ///
    /// Returns whether the sequence was a member. Removing a sequence which is
    /// not a member does nothing.
    ///
    /// The nodes along the path of the removed sequence are kept, even if no
    /// other member needs them. Use [`Trie::prune`] to reclaim them.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqtrie::Trie;
    ///
    /// let mut trie = Trie::new();
    /// trie.insert([1, 2, 3]);
    ///
    /// assert!(!trie.remove([1, 2]));
    /// assert!(trie.remove([1, 2, 3]));
    /// assert!(!trie.contains([1, 2, 3]));
    /// ```
    pub fn remove<I>(&mut self, sequence: I) -> bool
    where
        I: IntoIterator,
        I::Item: Borrow<E>,
    {
        self.root.remove(sequence)
    }

    /// Return true if the sequence is a member of the trie.
    ///
    /// This takes time proportional to the length of the sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqtrie::Trie;
    ///
    /// let mut trie = Trie::new();
    /// trie.insert("cat".chars());
    ///
    /// assert!(trie.contains("cat".chars()));
    /// assert!(!trie.contains("ca".chars()));
    /// assert!(!trie.contains("cats".chars()));
    /// ```
    pub fn contains<I>(&self, sequence: I) -> bool
    where
        I: IntoIterator,
        I::Item: Borrow<E>,
    {
        self.root.contains(sequence)
    }

    /// Return the node reached by following `prefix` from the root, or `None`
    /// if no path in the trie starts with `prefix`.
    ///
    /// The node may be reached even if no member starts with `prefix`, when
    /// removals left a dead branch behind.
    pub fn subtrie<I>(&self, prefix: I) -> Option<&Node<E, S>>
    where
        I: IntoIterator,
        I::Item: Borrow<E>,
    {
        self.root.descend(prefix)
    }

    /// Iterate over the completions of `prefix`.
    ///
    /// For every member that starts with `prefix`, this produces the rest of
    /// the member after the prefix. A member equal to the prefix produces the
    /// empty sequence. When `prefix` is empty, this produces every member.
    /// Like [`Trie::iter`], this counts the completions up front.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqtrie::Trie;
    ///
    /// let trie = Trie::<char>::from_sequences(["cat", "car", "ca", "dog"].map(str::chars));
    ///
    /// let mut completions: Vec<String> = trie
    ///     .completions("ca".chars())
    ///     .map(String::from_iter)
    ///     .collect();
    /// completions.sort();
    /// assert_eq!(completions, ["", "r", "t"]);
    ///
    /// assert_eq!(trie.completions("x".chars()).count(), 0);
    /// ```
    pub fn completions<I>(&self, prefix: I) -> Completions<'_, E, S>
    where
        I: IntoIterator,
        I::Item: Borrow<E>,
    {
        Completions::new(self.root.descend(prefix))
    }

    /// Keep only the members for which `predicate` returns `true`.
    ///
    /// Like [`Trie::remove`], this leaves the nodes of the removed members in
    /// place.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqtrie::Trie;
    ///
    /// let mut trie: Trie<u8> = (0..10u8).map(|n| vec![n; n as usize]).collect();
    /// trie.retain(|member| member.len() % 2 == 0);
    ///
    /// assert_eq!(trie.len(), 5);
    /// assert!(trie.contains([4, 4, 4, 4]));
    /// assert!(!trie.contains([3, 3, 3]));
    /// ```
    pub fn retain<F>(&mut self, mut predicate: F)
    where
        E: Clone,
        F: FnMut(&[E]) -> bool,
    {
        let rejected: Vec<Vec<E>> = self
            .iter()
            .filter(|member| !predicate(member))
            .collect();

        for member in rejected {
            self.root.remove(&member);
        }
    }
}

impl<E, S> Clone for Trie<E, S>
where
    E: Clone,
    S: Clone,
{
    fn clone(&self) -> Self {
        Trie {
            root: self.root.clone(),
        }
    }
}

impl<E, S> fmt::Debug for Trie<E, S>
where
    E: fmt::Debug,
{
    /// Render every member as the concatenation of its elements' debug
    /// representations, with members separated by `", "`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut members = self.iter();
        let mut first = true;

        while let Some(member) = members.next_borrowed() {
            if !first {
                f.write_str(", ")?;
            }
            first = false;

            for elem in member {
                write!(f, "{elem:?}")?;
            }
        }

        Ok(())
    }
}

impl<E, S> Default for Trie<E, S>
where
    S: Default,
{
    fn default() -> Self {
        Self::with_hasher(S::default())
    }
}

impl<E, S, I> Extend<I> for Trie<E, S>
where
    E: Eq + Hash,
    S: BuildHasher + Clone,
    I: IntoIterator<Item = E>,
{
    fn extend<T: IntoIterator<Item = I>>(&mut self, iter: T) {
        for sequence in iter {
            self.insert(sequence);
        }
    }
}

impl<E, S, I, const N: usize> From<[I; N]> for Trie<E, S>
where
    E: Eq + Hash,
    S: BuildHasher + Clone + Default,
    I: IntoIterator<Item = E>,
{
    fn from(arr: [I; N]) -> Self {
        Self::from_sequences(arr)
    }
}

impl<E, S, I> FromIterator<I> for Trie<E, S>
where
    E: Eq + Hash,
    S: BuildHasher + Clone + Default,
    I: IntoIterator<Item = E>,
{
    fn from_iter<T: IntoIterator<Item = I>>(iter: T) -> Self {
        Self::from_sequences(iter)
    }
}

impl<E, S> PartialEq for Trie<E, S>
where
    E: Eq + Hash,
    S: BuildHasher,
{
    fn eq(&self, other: &Self) -> bool {
        self.root == other.root
    }
}

impl<E, S> Eq for Trie<E, S>
where
    E: Eq + Hash,
    S: BuildHasher,
{
}

impl<'a, E: Clone, S> IntoIterator for &'a Trie<E, S> {
    type IntoIter = Iter<'a, E, S>;
    type Item = Vec<E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<E: Clone, S> IntoIterator for Trie<E, S> {
    type IntoIter = IntoIter<E, S>;
    type Item = Vec<E>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.root)
    }
}

#[cfg(test)]
mod tests;
