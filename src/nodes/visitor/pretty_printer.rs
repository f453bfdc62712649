use crate::{Node, Trie};

use super::{Visitable, Visitor};
use std::{
    fmt::Display,
    io::{self, Write},
};

/// A visitor of the trie that will print the tree in "dot" notation.
///
/// Terminal nodes are drawn with a double circle, and every edge is labelled
/// with the [`Display`] form of its element.
///
/// See ['DOT Language | Graphviz'](https://graphviz.org/doc/info/lang.html) for
/// information about syntax and example of the language.
pub struct DotPrinter<O: Write> {
    output: O,
    next_id: usize,
}

impl<O: Write> DotPrinter<O> {
    /// Write the dot-format of the given trie to the given output.
    ///
    /// # Errors
    ///
    /// Returns any error produced while writing to `output`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqtrie::{visitor::DotPrinter, Trie};
    ///
    /// let trie: Trie<char> = ["ab", "ac"].into_iter().map(str::chars).collect();
    ///
    /// let mut buffer = Vec::new();
    /// DotPrinter::print_trie(&mut buffer, &trie).unwrap();
    ///
    /// let dot = String::from_utf8(buffer).unwrap();
    /// assert!(dot.starts_with("strict digraph G {"));
    /// assert!(dot.contains("[label=\"a\"]"));
    /// ```
    pub fn print_trie<E: Display, S>(output: O, trie: &Trie<E, S>) -> io::Result<()> {
        let mut visitor = DotPrinter { output, next_id: 0 };

        visitor.output_prelude()?;
        let _ = trie.visit_with(&mut visitor)?;
        visitor.output_epilogue()
    }

    fn output_prelude(&mut self) -> io::Result<()> {
        writeln!(self.output, "strict digraph G {{")?;
        writeln!(self.output, "node [shape=circle, label=\"\"]")
    }

    fn output_epilogue(&mut self) -> io::Result<()> {
        writeln!(self.output, "}}")
    }

    fn get_id(&mut self) -> usize {
        let new_id = self.next_id;
        self.next_id += 1;
        new_id
    }
}

fn escape_label(label: impl Display) -> String {
    label
        .to_string()
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
}

impl<E: Display, S, O: Write> Visitor<E, S> for DotPrinter<O> {
    type Output = io::Result<usize>;

    #[cfg_attr(test, mutants::skip)]
    fn default_output(&self) -> Self::Output {
        unimplemented!("this visitor should never use the default output")
    }

    #[cfg_attr(test, mutants::skip)]
    fn combine_output(&self, _: Self::Output, _: Self::Output) -> Self::Output {
        unimplemented!("this visitor should never combine outputs")
    }

    fn visit_node(&mut self, t: &Node<E, S>) -> Self::Output {
        let node_id = self.get_id();
        if t.is_terminal() {
            writeln!(self.output, "n{node_id} [shape=doublecircle]")?;
        } else {
            writeln!(self.output, "n{node_id}")?;
        }

        for (elem, child) in t.children() {
            let child_id = child.visit_with(self)?;

            writeln!(
                self.output,
                "n{node_id} -> n{child_id} [label=\"{}\"]",
                escape_label(elem)
            )?;
        }

        Ok(node_id)
    }
}
