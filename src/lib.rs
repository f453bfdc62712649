#![forbid(unsafe_code)]
#![deny(
    missing_docs,
    deprecated_in_future,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    rustdoc::invalid_codeblock_attributes
)]
#![doc(
    html_playground_url = "https://play.rust-lang.org/",
    test(attr(deny(warnings)))
)]

//! A set of sequences, stored as a plain trie.
//!
//! Every member of a [`Trie`] is a sequence of elements. Sequences which share
//! a prefix share the nodes for that prefix, so membership tests and prefix
//! completion cost time proportional to the length of the query instead of
//! the number of members.
//!
//! ```rust
//! use seqtrie::Trie;
//!
//! let mut words = Trie::new();
//! words.insert("cat".chars());
//! words.insert("car".chars());
//! words.insert("ca".chars());
//!
//! assert!(words.contains("ca".chars()));
//! assert!(!words.contains("c".chars()));
//! assert_eq!(words.len(), 3);
//!
//! let mut completions: Vec<String> = words
//!     .completions("ca".chars())
//!     .map(|suffix| suffix.into_iter().collect())
//!     .collect();
//! completions.sort();
//! assert_eq!(completions, ["", "r", "t"]);
//! ```
//!
//! The trie is not compressed: there is exactly one node per element of each
//! stored sequence. See the [`visitor`] module for tools which inspect that
//! node structure.

mod collections;
mod nodes;

#[doc(hidden)]
pub mod tests_common;

pub use collections::*;
pub use nodes::{visitor, Node};

#[doc = include_str!("../README.md")]
#[cfg(doctest)]
pub struct ReadmeDoctests;
