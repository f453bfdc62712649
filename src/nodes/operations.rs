//! Trie node lookup and manipulation
//!
//! Every operation which follows a single sequence through the trie treats
//! the sequence's iterator as a cursor: exactly one element is consumed per
//! level of the trie, and the traversal is a loop over the current node, so
//! long sequences do not grow the call stack.

mod delete;
mod insert;
mod lookup;
mod merge;
mod prune;
