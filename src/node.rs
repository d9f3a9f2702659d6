//! HAMT trie node types and bitmap helpers.

use std::fmt;

use smallvec::SmallVec;

/// Bits per trie level (5 → 32-way branching).
pub const BITS_PER_LEVEL: u32 = 5;

/// Number of conceptual child slots per node.
pub const BRANCH_FACTOR: usize = 1 << BITS_PER_LEVEL;

/// Maximum bit-shift value (depth 13, last level uses 4 bits).
pub const MAX_SHIFT: u32 = 60;

/// A key-value pair with its precomputed hash.
pub struct Entry<K, V> {
    /// Precomputed 64-bit hash of the key.
    pub hash: u64,
    /// The key.
    pub key: K,
    /// The value.
    pub value: V,
}

/// One occupied slot of a [`Node`].
///
/// The variant set is closed and exhaustively matched at every traversal
/// step.
pub enum Child<K, V> {
    /// A single key-value pair resolved at this depth.
    Leaf(Entry<K, V>),
    /// A nested bitmap node one level deeper. Exclusively owned: the trie
    /// is a tree, never a DAG.
    Node(Box<Node<K, V>>),
    /// Fallback for keys whose hash chunks are exhausted while the keys
    /// still differ.
    Collision(Collision<K, V>),
}

/// Collision node: pairs sharing the same full 64-bit hash.
///
/// Invariant: at least 2 entries. Ties are resolved by linear scan on key
/// equality.
pub struct Collision<K, V> {
    /// The shared 64-bit hash value.
    pub hash: u64,
    /// The colliding pairs, in insertion order.
    pub entries: SmallVec<[Entry<K, V>; 2]>,
}

/// Bitmap-compressed trie node.
///
/// `bitmap` marks which of the [`BRANCH_FACTOR`] conceptual slots are
/// populated; `children` stores only the occupied ones, densely. Invariant:
/// the Nth set bit of `bitmap` corresponds to `children[N]`
/// (population-count indexing), so `children.len() == bitmap.count_ones()`.
pub struct Node<K, V> {
    bitmap: u32,
    children: Vec<Child<K, V>>,
}

// ---------------------------------------------------------------------------
// Bitmap helpers
// ---------------------------------------------------------------------------

/// Extracts the 5-bit hash fragment at the given bit-shift depth.
#[inline]
#[must_use]
pub const fn fragment(hash: u64, shift: u32) -> u32 {
    ((hash >> shift) & 0x1F) as u32
}

/// Returns the single-bit mask for the given fragment (0..31).
#[inline]
#[must_use]
pub const fn mask(frag: u32) -> u32 {
    1 << frag
}

/// Returns the compact index of `bit` within `bitmap`.
///
/// Counts the number of set bits below `bit`.
#[inline]
#[must_use]
pub const fn index(bitmap: u32, bit: u32) -> usize {
    (bitmap & (bit - 1)).count_ones() as usize
}

// ---------------------------------------------------------------------------
// Node accessors & invariant-preserving mutators
// ---------------------------------------------------------------------------

impl<K, V> Node<K, V> {
    /// Creates a node holding a single child at the given fragment.
    #[must_use]
    pub fn with_child(frag: u32, child: Child<K, V>) -> Self {
        Self {
            bitmap: mask(frag),
            children: vec![child],
        }
    }

    /// Returns the presence bitmap.
    #[must_use]
    pub const fn bitmap(&self) -> u32 {
        self.bitmap
    }

    /// Returns the dense children sequence.
    #[must_use]
    pub fn children(&self) -> &[Child<K, V>] {
        &self.children
    }

    /// Returns the dense children sequence, mutably.
    pub fn children_mut(&mut self) -> &mut [Child<K, V>] {
        &mut self.children
    }

    /// Returns `true` if the slot for `bit` is populated.
    #[inline]
    #[must_use]
    pub const fn occupied(&self, bit: u32) -> bool {
        self.bitmap & bit != 0
    }

    /// Returns the number of occupied slots.
    #[must_use]
    pub const fn children_len(&self) -> usize {
        self.bitmap.count_ones() as usize
    }

    /// Returns `true` if no slot is populated.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.bitmap == 0
    }

    /// Sets `bit` and places `child` at its popcount position.
    ///
    /// The slot must currently be empty.
    pub fn insert_child(&mut self, bit: u32, child: Child<K, V>) {
        debug_assert!(!self.occupied(bit), "slot already populated");
        let pos = index(self.bitmap, bit);
        self.children.insert(pos, child);
        self.bitmap |= bit;
    }

    /// Clears `bit` and removes the child at its popcount position.
    ///
    /// The slot must currently be populated.
    pub fn remove_child(&mut self, bit: u32) -> Child<K, V> {
        debug_assert!(self.occupied(bit), "slot not populated");
        let pos = index(self.bitmap, bit);
        self.bitmap &= !bit;
        self.children.remove(pos)
    }

    /// Swaps the child at the popcount position of `bit`, returning the old
    /// one. The slot must currently be populated.
    pub fn replace_child(&mut self, bit: u32, child: Child<K, V>) -> Child<K, V> {
        debug_assert!(self.occupied(bit), "slot not populated");
        let pos = index(self.bitmap, bit);
        std::mem::replace(&mut self.children[pos], child)
    }

    /// If this node holds exactly one child and it is a leaf, takes the
    /// entry out, leaving the node empty.
    ///
    /// Used by removal to inline a shrunken subtree back into its parent
    /// (node collapsing).
    pub fn take_sole_leaf(&mut self) -> Option<Entry<K, V>> {
        if self.children.len() != 1 || !matches!(self.children[0], Child::Leaf(_)) {
            return None;
        }
        self.bitmap = 0;
        match self.children.pop() {
            Some(Child::Leaf(entry)) => Some(entry),
            _ => unreachable!("sole child checked to be a leaf"),
        }
    }
}

impl<K, V> fmt::Debug for Node<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("bitmap", &format_args!("{:#034b}", self.bitmap))
            .field("children", &self.children.len())
            .finish()
    }
}
