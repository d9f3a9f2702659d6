//! Mutable hash map based on a HAMT.
//!
//! A HAMT (Hash Array Mapped Trie) stores key-value pairs in a shallow,
//! wide trie keyed on successive 5-bit chunks of each key's 64-bit hash.
//! Nodes are bitmap-compressed: a 32-bit presence bitmap plus a dense array
//! of only the occupied children, addressed by population count. Keys whose
//! hash bits are exhausted while still distinct fall back to a linear-scan
//! collision node.
//!
//! # Key properties
//!
//! - **Bounded depth**: every operation touches at most
//!   ⌈64 / 5⌉ = 13 nodes, independent of entry count
//! - **Compact nodes**: memory per node is proportional to occupancy,
//!   not to the 32-way fan-out
//! - **Exclusive ownership**: the trie is a tree, mutated in place —
//!   no structural sharing between maps
//! - **Zero `unsafe`**: enforced by `#![forbid(unsafe_code)]`
//!
//! # References
//!
//! - Bagwell, 2001 — "Ideal Hash Trees"

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod hash;
pub mod iter;
pub mod node;

mod map;
mod ops;

#[cfg(test)]
mod tests;

pub use error::KeyNotFound;
pub use map::HamtMap;
