use crate::Node;
use std::{
    borrow::Borrow,
    hash::{BuildHasher, Hash},
    mem,
};

impl<E, S> Node<E, S>
where
    E: Eq + Hash,
    S: BuildHasher,
{
    /// Remove the sequence produced by `cursor` from the set rooted at this
    /// node.
    ///
    /// The traversal mirrors [`Node::insert`], except that a missing edge
    /// ends the removal without creating anything. Subtrees which become
    /// empty are left in place.
    ///
    /// Returns `true` if the sequence was a member.
    pub(crate) fn remove<I>(&mut self, cursor: I) -> bool
    where
        I: IntoIterator,
        I::Item: Borrow<E>,
    {
        let mut current = self;
        for elem in cursor {
            match current.children.get_mut(elem.borrow()) {
                Some(child) => current = child,
                None => return false,
            }
        }

        mem::replace(&mut current.terminal, false)
    }
}
