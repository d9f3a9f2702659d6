//! Recursive trie operations over [`Node`](crate::node::Node) subtrees.

pub mod get;
pub mod insert;
pub mod remove;
