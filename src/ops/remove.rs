//! Removal operation — in-place delete with node collapsing.
//!
//! Mirror of insert: a subtree that shrinks to a single leaf is inlined
//! back into its parent slot, and a collision node left with one pair is
//! demoted to a plain leaf. This keeps the trie maximally compact.

use crate::node::{self, Child, Node};

/// Removes `key` from the subtree rooted at `node`.
///
/// Returns the removed value, or `None` if the key was not present.
pub fn remove_recursive<K, V>(node: &mut Node<K, V>, hash: u64, key: &K, shift: u32) -> Option<V>
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
        Child::Leaf(existing) => {
            if existing.hash != hash || existing.key != *key {
                return None;
            }
        }
        Child::Node(sub) => {
            let value = remove_recursive(sub, hash, key, shift + node::BITS_PER_LEVEL)?;
            collapse_child(node, bit);
            return Some(value);
        }
        Child::Collision(collision) => {
            if collision.hash != hash {
                return None;
            }
            let at = collision.entries.iter().position(|e| e.key == *key)?;
            let removed = collision.entries.remove(at);
            if collision.entries.len() == 1 {
                // One pair left → demote the slot to a plain leaf.
                let last = collision.entries.pop().expect("one entry left");
                node.replace_child(bit, Child::Leaf(last));
            }
            return Some(removed.value);
        }
    }

    // Matching leaf: clear the bitmap bit and drop the dense entry.
    match node.remove_child(bit) {
        Child::Leaf(entry) => Some(entry.value),
        _ => unreachable!("slot held a leaf"),
    }
}

/// If the child at `bit` is a subtree holding exactly one leaf, replaces the
/// slot with that leaf directly.
///
/// Applied on the way back up from a recursive remove, so collapses cascade
/// along the whole spine.
fn collapse_child<K, V>(node: &mut Node<K, V>, bit: u32) {
    let pos = node::index(node.bitmap(), bit);
    let inlined = match &mut node.children_mut()[pos] {
        Child::Node(sub) => sub.take_sole_leaf(),
        _ => None,
    };
    if let Some(entry) = inlined {
        node.replace_child(bit, Child::Leaf(entry));
    }
}
