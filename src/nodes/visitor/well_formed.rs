use crate::{
    visitor::{Visitable, Visitor},
    Node, Trie,
};
use std::{error::Error, fmt};

/// An issue with the well-formed-ness of the trie. See the documentation on
/// [`WellFormedChecker`] for more context.
#[derive(Clone, PartialEq, Eq)]
pub enum MalformedTrieError<E> {
    /// A node below the root was found which is not terminal and has no
    /// children
    DeadBranch {
        /// The sequence of elements leading from the root to the dead node
        path: Vec<E>,
    },
}

impl<E: fmt::Debug> fmt::Debug for MalformedTrieError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DeadBranch { path } => f.debug_struct("DeadBranch").field("path", path).finish(),
        }
    }
}

impl<E: fmt::Debug> fmt::Display for MalformedTrieError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MalformedTrieError::DeadBranch { path } => {
                write!(
                    f,
                    "Found a node at path [{path:?}] which is not terminal and has no children, \
                     so it does not contribute any member to the trie",
                )
            },
        }
    }
}

impl<E: fmt::Debug> Error for MalformedTrieError<E> {}

/// A visitor of the trie which checks that the trie is well-formed.
///
/// In this context, well-formed means that every node below the root either
/// is terminal or has at least one child. Equivalently, every leaf of the
/// tree marks a member sequence.
///
/// Tries built only through insertions, unions and the non-mutating set
/// operations are always well-formed. Removals may leave dead branches behind
/// (see [`Trie::remove`]); [`Trie::prune`] makes the trie well-formed again.
///
/// This checker will only return a single issue at a time. On success it
/// returns the number of members in the trie.
#[derive(Debug)]
pub struct WellFormedChecker<E> {
    current_path: Vec<E>,
}

impl<E: Clone> WellFormedChecker<E> {
    /// Traverse the given trie and check that it is well-formed.
    ///
    /// # Errors
    ///
    /// Returns [`MalformedTrieError::DeadBranch`] with the path of the first
    /// dead node found.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqtrie::{visitor::{MalformedTrieError, WellFormedChecker}, Trie};
    ///
    /// let mut trie = Trie::new();
    /// trie.insert([1, 2]);
    /// trie.insert([1, 3]);
    /// assert_eq!(WellFormedChecker::check(&trie), Ok(2));
    ///
    /// trie.remove([1, 3]);
    /// assert_eq!(
    ///     WellFormedChecker::check(&trie),
    ///     Err(MalformedTrieError::DeadBranch { path: vec![1, 3] })
    /// );
    ///
    /// trie.prune();
    /// assert_eq!(WellFormedChecker::check(&trie), Ok(1));
    /// ```
    pub fn check<S>(trie: &Trie<E, S>) -> Result<usize, MalformedTrieError<E>> {
        let mut visitor = WellFormedChecker {
            current_path: Vec::new(),
        };

        trie.visit_with(&mut visitor)
    }
}

impl<E: Clone, S> Visitor<E, S> for WellFormedChecker<E> {
    type Output = Result<usize, MalformedTrieError<E>>;

    fn default_output(&self) -> Self::Output {
        Ok(0)
    }

    fn combine_output(&self, o1: Self::Output, o2: Self::Output) -> Self::Output {
        Ok(o1? + o2?)
    }

    fn visit_node(&mut self, t: &Node<E, S>) -> Self::Output {
        if t.is_dead() && !self.current_path.is_empty() {
            return Err(MalformedTrieError::DeadBranch {
                path: self.current_path.clone(),
            });
        }

        let below = t.super_visit_with(self)?;
        Ok(below + usize::from(t.is_terminal()))
    }

    fn visit_edge(&mut self, elem: &E, child: &Node<E, S>) -> Self::Output {
        self.current_path.push(elem.clone());
        let output = child.visit_with(self);
        self.current_path.pop();

        output
    }
}
