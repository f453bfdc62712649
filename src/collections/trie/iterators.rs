//! Iterators over the member sequences of a [`Trie`][crate::Trie].

use crate::Node;
use std::iter::FusedIterator;

/// Depth-first enumeration of the members below a node, as paths of borrowed
/// elements.
///
/// Each stack entry is a node still to be visited, together with the edge
/// that leads to it and the length of the path above that edge.
struct RawIter<'a, E, S> {
    stack: Vec<(usize, Option<&'a E>, &'a Node<E, S>)>,
    path: Vec<&'a E>,
}

impl<'a, E, S> RawIter<'a, E, S> {
    fn new(start: Option<&'a Node<E, S>>) -> Self {
        RawIter {
            stack: start.into_iter().map(|node| (0, None, node)).collect(),
            path: Vec::new(),
        }
    }

    /// Advance to the next terminal node and return the path leading to it.
    fn next_path(&mut self) -> Option<&[&'a E]> {
        while let Some((depth, edge, node)) = self.stack.pop() {
            self.path.truncate(depth);
            self.path.extend(edge);

            let depth = self.path.len();
            self.stack.extend(
                node.children()
                    .map(|(elem, child)| (depth, Some(elem), child)),
            );

            if node.is_terminal() {
                return Some(&self.path);
            }
        }

        None
    }
}

/// An iterator over every member sequence of a trie.
///
/// This struct is created by [`Trie::iter`][crate::Trie::iter]. The members
/// are produced in an unspecified order, which is the same every time the
/// same unmodified trie is iterated.
pub struct Iter<'a, E, S> {
    inner: RawIter<'a, E, S>,
    remaining: usize,
}

impl<'a, E, S> Iter<'a, E, S> {
    /// Create an iterator over the members at or below `start`.
    ///
    /// The members are produced relative to `start`, so iterating from a
    /// child node yields the suffixes below that node. The exact length is
    /// counted up front, so creating the iterator already visits every node
    /// below `start` once.
    pub(crate) fn new(start: Option<&'a Node<E, S>>) -> Self {
        Iter {
            remaining: start.map_or(0, Node::len),
            inner: RawIter::new(start),
        }
    }

    /// Advance the iterator and visit the next member as a slice of borrowed
    /// elements, without cloning them.
    pub(crate) fn next_borrowed(&mut self) -> Option<&[&'a E]> {
        let path = self.inner.next_path()?;
        self.remaining -= 1;
        Some(path)
    }
}

impl<E: Clone, S> Iterator for Iter<'_, E, S> {
    type Item = Vec<E>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_borrowed()
            .map(|path| path.iter().copied().cloned().collect())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<E: Clone, S> ExactSizeIterator for Iter<'_, E, S> {}

impl<E: Clone, S> FusedIterator for Iter<'_, E, S> {}

/// An iterator over the completions of a prefix, which are the suffixes of
/// every member that starts with that prefix.
///
/// This struct is created by [`Trie::completions`][crate::Trie::completions].
pub struct Completions<'a, E, S> {
    inner: Iter<'a, E, S>,
}

impl<'a, E, S> Completions<'a, E, S> {
    /// Create an iterator over the members below the node reached by the
    /// prefix, which is `None` if no member starts with the prefix.
    pub(crate) fn new(reached: Option<&'a Node<E, S>>) -> Self {
        Completions {
            inner: Iter::new(reached),
        }
    }
}

impl<E: Clone, S> Iterator for Completions<'_, E, S> {
    type Item = Vec<E>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<E: Clone, S> ExactSizeIterator for Completions<'_, E, S> {}

impl<E: Clone, S> FusedIterator for Completions<'_, E, S> {}

/// An owning iterator over every member sequence of a trie.
///
/// This struct is created by the [`IntoIterator`] implementation of
/// [`Trie`][crate::Trie]. The nodes are taken apart as the iteration
/// proceeds.
pub struct IntoIter<E, S> {
    stack: Vec<(usize, Option<E>, Node<E, S>)>,
    path: Vec<E>,
    remaining: usize,
}

impl<E, S> IntoIter<E, S> {
    pub(crate) fn new(root: Node<E, S>) -> Self {
        IntoIter {
            remaining: root.len(),
            stack: vec![(0, None, root)],
            path: Vec::new(),
        }
    }
}

impl<E: Clone, S> Iterator for IntoIter<E, S> {
    type Item = Vec<E>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((depth, edge, mut node)) = self.stack.pop() {
            self.path.truncate(depth);
            self.path.extend(edge);

            let depth = self.path.len();
            self.stack.extend(
                node.children
                    .drain()
                    .map(|(elem, child)| (depth, Some(elem), child)),
            );

            if node.terminal {
                self.remaining -= 1;
                return Some(self.path.clone());
            }
        }

        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<E: Clone, S> ExactSizeIterator for IntoIter<E, S> {}

impl<E: Clone, S> FusedIterator for IntoIter<E, S> {}
