//! Utilities for inspecting the trie structure.

mod pretty_printer;
mod trie_stats;
mod well_formed;

use crate::{Node, Trie};
pub use pretty_printer::*;
pub use trie_stats::*;
pub use well_formed::*;

/// The `Visitable` trait allows [`Visitor`]s to traverse the structure of the
/// implementing type and produce some output.
pub trait Visitable<E, S> {
    /// This function provides the default traversal behavior for the
    /// implementing type.
    ///
    /// The implementation should call [`Visitor::visit_edge`] for every edge
    /// leaving the implementing type, and combine the outputs. If there are
    /// no edges, it should just produce the default output.
    fn super_visit_with<V: Visitor<E, S>>(&self, visitor: &mut V) -> V::Output;

    /// This function will traverse the implementing type and execute any
    /// specific logic from the given [`Visitor`].
    ///
    /// For a [`Node`] this calls [`Visitor::visit_node`], which lets the
    /// visitor run its own handling logic before (or instead of) the default
    /// traversal.
    fn visit_with<V: Visitor<E, S>>(&self, visitor: &mut V) -> V::Output {
        self.super_visit_with(visitor)
    }
}

impl<E, S> Visitable<E, S> for Node<E, S> {
    fn super_visit_with<V: Visitor<E, S>>(&self, visitor: &mut V) -> V::Output {
        let mut edges = self.children();

        if let Some((elem, child)) = edges.next() {
            let mut accum = visitor.visit_edge(elem, child);
            for (elem, child) in edges {
                let output = visitor.visit_edge(elem, child);
                accum = visitor.combine_output(accum, output);
            }

            accum
        } else {
            visitor.default_output()
        }
    }

    fn visit_with<V: Visitor<E, S>>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_node(self)
    }
}

impl<E, S> Visitable<E, S> for Trie<E, S> {
    fn super_visit_with<V: Visitor<E, S>>(&self, visitor: &mut V) -> V::Output {
        self.root().visit_with(visitor)
    }
}

/// The `Visitor` trait allows creating new operations on the trie by
/// overriding the handling of nodes and of the edges between them.
pub trait Visitor<E, S>: Sized {
    /// The type of value that the visitor produces.
    type Output;

    /// Produce the default value of the [`Self::Output`] type.
    fn default_output(&self) -> Self::Output;

    /// Combine two instances of the [`Self::Output`] type for this [`Visitor`].
    fn combine_output(&self, o1: Self::Output, o2: Self::Output) -> Self::Output;

    /// Visit a [`Node`].
    fn visit_node(&mut self, t: &Node<E, S>) -> Self::Output {
        t.super_visit_with(self)
    }

    /// Visit the edge labelled `elem` which leads to `child`.
    fn visit_edge(&mut self, elem: &E, child: &Node<E, S>) -> Self::Output {
        let _ = elem;
        child.visit_with(self)
    }
}
