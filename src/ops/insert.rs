//! Insertion operation — in-place insert with leaf splitting.
//!
//! The dominant cost path: amortized cost is proportional to trie depth
//! (hash width / bits per level), never to total entry count.

use std::mem;

use smallvec::smallvec;

use crate::node::{self, Child, Collision, Entry, Node};

/// Inserts `entry` into the subtree rooted at `node`.
///
/// Returns the previous value if the key was already present (overwrite),
/// or `None` if a new key was inserted.
pub fn insert_recursive<K, V>(node: &mut Node<K, V>, entry: Entry<K, V>, shift: u32) -> Option<V>
where
    K: Eq,
{
    let frag = node::fragment(entry.hash, shift);
    let bit = node::mask(frag);

    if !node.occupied(bit) {
        // Position empty → place a leaf directly.
        node.insert_child(bit, Child::Leaf(entry));
        return None;
    }

    let pos = node::index(node.bitmap(), bit);
    match &mut node.children_mut()[pos] {
        Child::Leaf(existing) => {
            if existing.hash == entry.hash && existing.key == entry.key {
                // Same key → update value in place.
                return Some(mem::replace(&mut existing.value, entry.value));
            }
        }
        Child::Node(sub) => {
            // Position has a child subtree → recurse.
            return insert_recursive(sub, entry, shift + node::BITS_PER_LEVEL);
        }
        Child::Collision(collision) => {
            return insert_into_collision(collision, entry);
        }
    }

    // Different key at the same position → displace the leaf and push both
    // one level deeper.
    let displaced = match node.remove_child(bit) {
        Child::Leaf(existing) => existing,
        _ => unreachable!("slot held a leaf"),
    };
    let split = split_leaf(displaced, entry, shift + node::BITS_PER_LEVEL);
    node.insert_child(bit, split);
    None
}

// ---------------------------------------------------------------------------
// Collision node insert
// ---------------------------------------------------------------------------

fn insert_into_collision<K, V>(collision: &mut Collision<K, V>, entry: Entry<K, V>) -> Option<V>
where
    K: Eq,
{
    // Search for an existing key to overwrite.
    for existing in &mut collision.entries {
        if existing.key == entry.key {
            return Some(mem::replace(&mut existing.value, entry.value));
        }
    }
    // Key not found → append. Unbounded growth only under pathological
    // total-hash-collision workloads.
    collision.entries.push(entry);
    None
}

// ---------------------------------------------------------------------------
// Leaf splitting
// ---------------------------------------------------------------------------

/// Builds the replacement child for two entries that collide at the parent's
/// depth.
///
/// Recursively descends until their hash fragments differ; once hash bits
/// are exhausted (`shift > MAX_SHIFT`) the keys share the full 64-bit hash
/// and a collision node is created instead.
fn split_leaf<K, V>(e1: Entry<K, V>, e2: Entry<K, V>, shift: u32) -> Child<K, V> {
    if shift > node::MAX_SHIFT {
        let hash = e1.hash;
        return Child::Collision(Collision {
            hash,
            entries: smallvec![e1, e2],
        });
    }

    let f1 = node::fragment(e1.hash, shift);
    let f2 = node::fragment(e2.hash, shift);

    if f1 == f2 {
        // Still colliding at this level → chain one level deeper.
        let inner = split_leaf(e1, e2, shift + node::BITS_PER_LEVEL);
        Child::Node(Box::new(Node::with_child(f1, inner)))
    } else {
        let mut sub = Node::with_child(f1, Child::Leaf(e1));
        sub.insert_child(node::mask(f2), Child::Leaf(e2));
        Child::Node(Box::new(sub))
    }
}
