use crate::Node;
use std::{
    hash::{BuildHasher, Hash},
    mem,
};

impl<E, S> Node<E, S>
where
    E: Eq + Hash,
    S: BuildHasher + Clone,
{
    /// Add the sequence produced by `cursor` to the set rooted at this node.
    ///
    /// Each element either follows an existing edge or creates a new empty
    /// child for it. The node reached once the cursor is exhausted is marked
    /// terminal.
    ///
    /// Returns `true` if the sequence was not already a member.
    pub(crate) fn insert<I>(&mut self, cursor: I) -> bool
    where
        I: IntoIterator<Item = E>,
    {
        let mut current = self;
        for elem in cursor {
            let hasher = current.children.hasher().clone();
            current = current
                .children
                .entry(elem)
                .or_insert_with(|| Node::with_hasher(hasher));
        }

        !mem::replace(&mut current.terminal, true)
    }
}
