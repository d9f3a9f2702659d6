//! Iterator types for [`HamtMap`](crate::HamtMap).
//!
//! Traversal is depth-first pre-order and lazy: each call to
//! [`HamtMap::iter`](crate::HamtMap::iter) starts a fresh traversal. Order
//! follows the trie layout (hash order), not insertion order, and carries no
//! stability guarantee across mutations.

use std::slice;

use crate::node::{Child, Entry, Node};

/// Iterator over `(&K, &V)` pairs of a [`HamtMap`](crate::HamtMap).
pub struct Iter<'a, K, V> {
    /// DFS stack of dense child sequences, innermost last.
    stack: Vec<slice::Iter<'a, Child<K, V>>>,
    /// Remaining entries of the collision node currently being drained.
    collision: slice::Iter<'a, Entry<K, V>>,
    remaining: usize,
}

impl<'a, K, V> Iter<'a, K, V> {
    /// Creates an iterator over the subtree rooted at `root`.
    #[must_use]
    pub fn new(root: Option<&'a Node<K, V>>, len: usize) -> Self {
        Self {
            stack: root.map(|node| node.children().iter()).into_iter().collect(),
            collision: slice::Iter::default(),
            remaining: len,
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(entry) = self.collision.next() {
            self.remaining -= 1;
            return Some((&entry.key, &entry.value));
        }
        loop {
            let top = self.stack.last_mut()?;
            match top.next() {
                None => {
                    self.stack.pop();
                }
                Some(Child::Leaf(entry)) => {
                    self.remaining -= 1;
                    return Some((&entry.key, &entry.value));
                }
                Some(Child::Node(sub)) => {
                    self.stack.push(sub.children().iter());
                }
                Some(Child::Collision(collision)) => {
                    self.collision = collision.entries.iter();
                    // Collision nodes hold at least 2 entries.
                    let entry = self.collision.next().expect("non-empty collision node");
                    self.remaining -= 1;
                    return Some((&entry.key, &entry.value));
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

/// Iterator over the keys of a [`HamtMap`](crate::HamtMap).
pub struct Keys<'a, K, V> {
    pub(crate) inner: Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, _)| key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {}

/// Iterator over the values of a [`HamtMap`](crate::HamtMap).
pub struct Values<'a, K, V> {
    pub(crate) inner: Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, value)| value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Values<'_, K, V> {}
