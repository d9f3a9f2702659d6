//! Lookup operation — traverses the trie to find a key.
//!
//! Lookup never mutates and never allocates.

use crate::node::{self, Child, Node};

/// Searches for `key` in the subtree rooted at `node`.
///
/// Returns a reference to the value if found.
pub fn get_recursive<'a, K, V>(
    node: &'a Node<K, V>,
    hash: u64,
    key: &K,
    shift: u32,
) -> Option<&'a V>
where
    K: Eq,
{
    let frag = node::fragment(hash, shift);
    let bit = node::mask(frag);
    if !node.occupied(bit) {
        // Position is empty.
        return None;
    }

    match &node.children()[node::index(node.bitmap(), bit)] {
        Child::Leaf(entry) => {
            if entry.hash == hash && entry.key == *key {
                Some(&entry.value)
            } else {
                None
            }
        }
        Child::Node(sub) => get_recursive(sub, hash, key, shift + node::BITS_PER_LEVEL),
        Child::Collision(collision) => {
            if collision.hash != hash {
                return None;
            }
            // Linear search through collision entries.
            collision
                .entries
                .iter()
                .find(|entry| entry.key == *key)
                .map(|entry| &entry.value)
        }
    }
}

/// Mutable variant of [`get_recursive`].
pub fn get_mut_recursive<'a, K, V>(
    node: &'a mut Node<K, V>,
    hash: u64,
    key: &K,
    shift: u32,
) -> Option<&'a mut V>
where
    K: Eq,
{
    let frag = node::fragment(hash, shift);
    let bit = node::mask(frag);
    if !node.occupied(bit) {
        return None;
    }

    let pos = node::index(node.bitmap(), bit);
    match &mut node.children_mut()[pos] {
        Child::Leaf(entry) => {
            if entry.hash == hash && entry.key == *key {
                Some(&mut entry.value)
            } else {
                None
            }
        }
        Child::Node(sub) => get_mut_recursive(sub, hash, key, shift + node::BITS_PER_LEVEL),
        Child::Collision(collision) => {
            if collision.hash != hash {
                return None;
            }
            collision
                .entries
                .iter_mut()
                .find(|entry| entry.key == *key)
                .map(|entry| &mut entry.value)
        }
    }
}
