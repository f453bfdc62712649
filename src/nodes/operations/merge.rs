use crate::Node;
use std::hash::{BuildHasher, Hash};

impl<E, S> Node<E, S>
where
    E: Eq + Hash + Clone,
    S: BuildHasher + Clone,
{
    /// Add every member of `other` to the set rooted at this node.
    ///
    /// Terminal flags are OR-ed at every node where the two tries overlap,
    /// including this one. Subtrees that only exist in `other` are cloned
    /// into place, `other` is never modified.
    pub(crate) fn union_with(&mut self, other: &Node<E, S>) {
        self.terminal |= other.terminal;

        for (elem, other_child) in &other.children {
            match self.children.get_mut(elem) {
                Some(child) => child.union_with(other_child),
                None => {
                    self.children.insert(elem.clone(), other_child.clone());
                },
            }
        }
    }

    /// Return a new node holding exactly the members of both this node and
    /// `other`.
    ///
    /// Only edges present on both sides are followed, and a subtree is kept
    /// only if it contains a member, so the result never has dead nodes.
    pub(crate) fn intersection(&self, other: &Node<E, S>) -> Node<E, S> {
        let mut common = self.empty_sibling();
        common.terminal = self.terminal && other.terminal;

        for (elem, child) in &self.children {
            let Some(other_child) = other.children.get(elem) else {
                continue;
            };

            let common_child = child.intersection(other_child);
            if !common_child.is_dead() {
                common.children.insert(elem.clone(), common_child);
            }
        }

        common
    }
}

impl<E, S> Node<E, S>
where
    E: Eq + Hash,
    S: BuildHasher,
{
    /// Return true if every member below this node is also a member below
    /// `other`.
    pub(crate) fn is_subset_of(&self, other: &Node<E, S>) -> bool {
        if self.terminal && !other.terminal {
            return false;
        }

        self.children
            .iter()
            .all(|(elem, child)| match other.children.get(elem) {
                Some(other_child) => child.is_subset_of(other_child),
                None => child.is_empty(),
            })
    }
}
