//! Trie node representation and manipulation

use std::{
    borrow::Borrow,
    collections::{hash_map, HashMap},
    fmt,
    hash::{BuildHasher, Hash, RandomState},
};

mod operations;

pub mod visitor;

/// A single node of a [`Trie`][crate::Trie].
///
/// A node stands for the set of sequences that continue the path leading to
/// it. The node is terminal when the path itself (the empty continuation) is
/// a member, and every child is keyed by the next element of the longer
/// members.
///
/// A node which is neither terminal nor has children represents the empty
/// set. Those "dead" nodes are left behind by
/// [`Trie::remove`][crate::Trie::remove] and can be cleaned up with
/// [`Trie::prune`][crate::Trie::prune].
pub struct Node<E, S = RandomState> {
    pub(crate) terminal: bool,
    pub(crate) children: HashMap<E, Node<E, S>, S>,
}

impl<E, S> Node<E, S> {
    /// Create an empty, non-terminal node whose child map uses the given
    /// hasher.
    pub(crate) fn with_hasher(hasher: S) -> Self {
        Node {
            terminal: false,
            children: HashMap::with_hasher(hasher),
        }
    }

    /// Create an empty node which hashes its children the same way as this
    /// node.
    pub(crate) fn empty_sibling(&self) -> Self
    where
        S: Clone,
    {
        Node::with_hasher(self.children.hasher().clone())
    }

    /// Return true if the path leading to this node is a member sequence.
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// Return true if this node has no children and is not terminal.
    ///
    /// Dead nodes do not contribute any member and are only present when a
    /// removal emptied a subtree without pruning it.
    pub fn is_dead(&self) -> bool {
        !self.terminal && self.children.is_empty()
    }

    /// The number of distinct elements which continue a path through this
    /// node.
    pub fn num_children(&self) -> usize {
        self.children.len()
    }

    /// Iterate over the `(element, child)` edges of this node, in no
    /// particular order.
    pub fn children(&self) -> hash_map::Iter<'_, E, Node<E, S>> {
        self.children.iter()
    }

    /// Return the number of member sequences stored at or below this node.
    ///
    /// This visits every node of the subtree.
    pub fn len(&self) -> usize {
        let mut count = 0;
        let mut pending = vec![self];
        while let Some(node) = pending.pop() {
            count += usize::from(node.terminal);
            pending.extend(node.children.values());
        }
        count
    }

    /// Return true if no member sequence is stored at or below this node.
    ///
    /// Dead descendants are ignored.
    pub fn is_empty(&self) -> bool {
        let mut pending = vec![self];
        while let Some(node) = pending.pop() {
            if node.terminal {
                return false;
            }
            pending.extend(node.children.values());
        }
        true
    }
}

impl<E, S> Node<E, S>
where
    E: Eq + Hash,
    S: BuildHasher,
{
    /// Look up the child reached through the edge labelled `elem`.
    pub fn child<Q>(&self, elem: &Q) -> Option<&Node<E, S>>
    where
        E: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.children.get(elem)
    }
}

impl<E, S> Clone for Node<E, S>
where
    E: Clone,
    S: Clone,
{
    fn clone(&self) -> Self {
        Node {
            terminal: self.terminal,
            children: self.children.clone(),
        }
    }
}

impl<E, S> Drop for Node<E, S> {
    fn drop(&mut self) {
        // Descendants are freed from a flat work list, never recursively.
        let mut pending: Vec<Node<E, S>> = self
            .children
            .drain()
            .map(|(_, child)| child)
            .collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.children.drain().map(|(_, child)| child));
        }
    }
}

impl<E, S> PartialEq for Node<E, S>
where
    E: Eq + Hash,
    S: BuildHasher,
{
    fn eq(&self, other: &Self) -> bool {
        self.terminal == other.terminal && self.children == other.children
    }
}

impl<E, S> Eq for Node<E, S>
where
    E: Eq + Hash,
    S: BuildHasher,
{
}

impl<E: fmt::Debug, S> fmt::Debug for Node<E, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("terminal", &self.terminal)
            .field("children", &self.children)
            .finish()
    }
}
