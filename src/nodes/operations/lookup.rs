use crate::Node;
use std::{
    borrow::Borrow,
    hash::{BuildHasher, Hash},
};

impl<E, S> Node<E, S>
where
    E: Eq + Hash,
    S: BuildHasher,
{
    /// Follow the edges named by `cursor` and return the node at the end of
    /// the path, or `None` if some edge along the path is missing.
    pub(crate) fn descend<I>(&self, cursor: I) -> Option<&Node<E, S>>
    where
        I: IntoIterator,
        I::Item: Borrow<E>,
    {
        let mut current = self;
        for elem in cursor {
            current = current.children.get(elem.borrow())?;
        }

        Some(current)
    }

    /// Return true if the sequence produced by `cursor` is a member of the set
    /// rooted at this node.
    pub(crate) fn contains<I>(&self, cursor: I) -> bool
    where
        I: IntoIterator,
        I::Item: Borrow<E>,
    {
        self.descend(cursor).is_some_and(Node::is_terminal)
    }
}
