use crate::Node;

impl<E, S> Node<E, S> {
    /// Drop every subtree below this node which holds no member.
    ///
    /// Returns `true` if this node itself is dead afterwards, so the caller
    /// can drop it as well.
    pub(crate) fn prune(&mut self) -> bool {
        self.children.retain(|_, child| !child.prune());

        self.is_dead()
    }
}
