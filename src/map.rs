//! The user-facing map type.

use std::fmt;
use std::hash::Hash;
use std::ops;

use crate::error::KeyNotFound;
use crate::hash::hash_one;
use crate::iter::{Iter, Keys, Values};
use crate::node::{self, Child, Entry, Node};
use crate::ops::get::{get_mut_recursive, get_recursive};
use crate::ops::insert::insert_recursive;
use crate::ops::remove::remove_recursive;

/// Mutable hash map backed by a hash array mapped trie.
///
/// Keys are hashed once per operation and the 64-bit hash is consumed in
/// 5-bit chunks, one per trie level, so every operation touches at most 13
/// nodes regardless of entry count. The map exclusively owns its root and
/// all descendant nodes; concurrent use requires external synchronization.
pub struct HamtMap<K, V> {
    root: Option<Node<K, V>>,
    size: usize,
}

// ---------------------------------------------------------------------------
// Construction & accessors — no trait bounds
// ---------------------------------------------------------------------------

impl<K, V> HamtMap<K, V> {
    /// Creates an empty map.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            root: None,
            size: 0,
        }
    }

    /// Returns the number of key-value pairs.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.size
    }

    /// Returns `true` if the map contains no entries.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Removes all entries, releasing the whole trie.
    pub fn clear(&mut self) {
        self.root = None;
        self.size = 0;
    }

    /// Returns an iterator over `(&K, &V)` pairs.
    ///
    /// Each call starts a fresh depth-first traversal; order is not
    /// insertion order.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(self.root.as_ref(), self.size)
    }

    /// Returns an iterator over the keys.
    #[must_use]
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys { inner: self.iter() }
    }

    /// Returns an iterator over the values.
    #[must_use]
    pub fn values(&self) -> Values<'_, K, V> {
        Values { inner: self.iter() }
    }
}

// ---------------------------------------------------------------------------
// Read operations — K: Hash + Eq
// ---------------------------------------------------------------------------

impl<K: Hash + Eq, V> HamtMap<K, V> {
    /// Returns a reference to the value associated with `key`.
    #[must_use]
    pub fn get(&self, key: &K) -> Option<&V> {
        let root = self.root.as_ref()?;
        get_recursive(root, hash_one(key), key, 0)
    }

    /// Returns a mutable reference to the value associated with `key`.
    #[must_use]
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let root = self.root.as_mut()?;
        get_mut_recursive(root, hash_one(key), key, 0)
    }

    /// Returns a reference to the value associated with `key`, or a typed
    /// [`KeyNotFound`] failure for `?`-propagation.
    ///
    /// # Errors
    ///
    /// Returns [`KeyNotFound`] if the key is not present.
    pub fn try_get(&self, key: &K) -> Result<&V, KeyNotFound> {
        self.get(key).ok_or(KeyNotFound)
    }

    /// Returns `true` if the map contains the given key.
    #[must_use]
    pub fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }
}

// ---------------------------------------------------------------------------
// Write operations — K: Hash + Eq
// ---------------------------------------------------------------------------

impl<K: Hash + Eq, V> HamtMap<K, V> {
    /// Inserts a key-value pair into the map.
    ///
    /// Returns `None` if the key was new, or `Some(old_value)` if an
    /// existing value was replaced.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let hash = hash_one(&key);
        let entry = Entry { hash, key, value };

        if let Some(root) = self.root.as_mut() {
            let old = insert_recursive(root, entry, 0);
            if old.is_none() {
                self.size += 1;
            }
            old
        } else {
            let frag = node::fragment(hash, 0);
            self.root = Some(Node::with_child(frag, Child::Leaf(entry)));
            self.size = 1;
            None
        }
    }

    /// Removes a key from the map. Returns the removed value, or `None` if
    /// the key was not present.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let root = self.root.as_mut()?;
        let value = remove_recursive(root, hash_one(key), key, 0)?;
        self.size -= 1;
        if root.is_empty() {
            self.root = None;
        }
        Some(value)
    }
}

// ---------------------------------------------------------------------------
// Trait impls
// ---------------------------------------------------------------------------

impl<K, V> Default for HamtMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> fmt::Debug for HamtMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HamtMap")
            .field("len", &self.size)
            .finish_non_exhaustive()
    }
}

impl<K: Hash + Eq, V> Extend<(K, V)> for HamtMap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl<'a, K: Hash + Eq + Copy, V: Copy> Extend<(&'a K, &'a V)> for HamtMap<K, V> {
    fn extend<I: IntoIterator<Item = (&'a K, &'a V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(*k, *v);
        }
    }
}

impl<K: Hash + Eq, V> FromIterator<(K, V)> for HamtMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K: Hash + Eq, V> ops::Index<&K> for HamtMap<K, V> {
    type Output = V;

    fn index(&self, key: &K) -> &V {
        self.get(key).expect("key not found")
    }
}

impl<'a, K, V> IntoIterator for &'a HamtMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Iter<'a, K, V> {
        self.iter()
    }
}
