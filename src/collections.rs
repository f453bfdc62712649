//! Public collection types

pub mod trie;

pub use trie::Trie;
