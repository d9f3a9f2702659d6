//! Key hashing.
//!
//! Every key is reduced to a fixed-width 64-bit hash once per operation;
//! the trie consumes it in [`BITS_PER_LEVEL`](crate::node::BITS_PER_LEVEL)-bit
//! chunks, one per level. The hash must be stable for as long as the key is
//! stored — keys must not be mutated in ways that change their hash while
//! present in the map.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Computes the 64-bit hash of a value using the standard hasher.
#[must_use]
pub fn hash_one<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}
