//! Array-backed binary max-heap.
//!
//! # Layout
//!
//! A complete binary tree stored in a `Vec`, 0-indexed:
//! children of `i` at `2i + 1` and `2i + 2`, parent at `(i - 1) / 2`.
//!
//! # Invariant
//!
//! For every non-root index `i`, the entry at `i` does not rank strictly
//! above the entry at `parent(i)` under [`CompareConfig::rank`].

use super::compare::CompareConfig;
use super::entry::Entry;

/// Binary max-heap over immutable [`Entry`] values.
///
/// The comparator configuration is fixed at construction; every comparison
/// in this heap, in both sift directions, goes through it.
///
/// Cloning a heap copies the backing vector and shares the payloads. The
/// clone and the original are fully independent afterwards: popping one
/// never changes the size, top, or pop order of the other.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use u_priority::heap::{BinaryMaxHeap, Entry, RankKey};
///
/// let mut heap = BinaryMaxHeap::new();
/// heap.push(Entry::with_key(RankKey::new(0.2, 0, 0.0, "low", "R1"), Arc::new("low")));
/// heap.push(Entry::with_key(RankKey::new(0.9, 0, 0.0, "high", "R2"), Arc::new("high")));
///
/// assert_eq!(heap.peek().map(|e| e.name()), Some("high"));
/// assert_eq!(heap.len(), 2);
/// ```
#[derive(Debug)]
pub struct BinaryMaxHeap<P> {
    data: Vec<Entry<P>>,
    config: CompareConfig,
}

impl<P> BinaryMaxHeap<P> {
    /// Creates an empty heap with the default comparator.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty heap with the given comparator configuration.
    ///
    /// Returns an error if `config` fails [`CompareConfig::validate`].
    pub fn with_config(config: CompareConfig) -> Result<Self, String> {
        Self::with_capacity_and_config(0, config)
    }

    /// Creates an empty heap with room for `capacity` entries and the
    /// default comparator.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            config: CompareConfig::default(),
        }
    }

    /// Creates an empty heap with room for `capacity` entries and the given
    /// comparator configuration.
    ///
    /// Returns an error if `config` fails [`CompareConfig::validate`].
    pub fn with_capacity_and_config(
        capacity: usize,
        config: CompareConfig,
    ) -> Result<Self, String> {
        config.validate()?;
        Ok(Self {
            data: Vec::with_capacity(capacity),
            config,
        })
    }

    /// Returns the comparator configuration fixed at construction.
    pub fn config(&self) -> &CompareConfig {
        &self.config
    }

    /// Returns the number of entries in the heap.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the heap holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the highest-ranking entry without removing it. O(1).
    #[inline]
    pub fn peek(&self) -> Option<&Entry<P>> {
        self.data.first()
    }

    /// Adds an entry and restores the heap property. O(log n).
    pub fn push(&mut self, entry: Entry<P>) {
        self.data.push(entry);
        self.sift_up(self.data.len() - 1);
    }

    /// Removes and returns the highest-ranking entry. O(log n).
    ///
    /// Returns `None` if the heap is empty.
    pub fn pop(&mut self) -> Option<Entry<P>> {
        if self.data.is_empty() {
            return None;
        }
        // Swap root with last, remove last, sift down root
        let last = self.data.len() - 1;
        self.data.swap(0, last);
        let top = self.data.pop();
        if !self.data.is_empty() {
            self.sift_down(0);
        }
        top
    }

    /// Iterates the entries in storage order, which is not priority order.
    pub fn iter(&self) -> std::slice::Iter<'_, Entry<P>> {
        self.data.iter()
    }

    /// Checks the heap property over every non-root index.
    pub fn is_heap(&self) -> bool {
        (1..self.data.len())
            .all(|i| !self.config.is_higher(&self.data[i], &self.data[parent(i)]))
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let p = parent(i);
            if self.config.is_higher(&self.data[i], &self.data[p]) {
                self.data.swap(i, p);
                i = p;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let len = self.data.len();
        loop {
            let l = left(i);
            let r = right(i);
            let mut best = i;

            if l < len && self.config.is_higher(&self.data[l], &self.data[best]) {
                best = l;
            }
            if r < len && self.config.is_higher(&self.data[r], &self.data[best]) {
                best = r;
            }
            if best == i {
                break;
            }
            self.data.swap(i, best);
            i = best;
        }
    }
}

#[inline]
fn parent(i: usize) -> usize {
    (i - 1) / 2
}

#[inline]
fn left(i: usize) -> usize {
    2 * i + 1
}

#[inline]
fn right(i: usize) -> usize {
    2 * i + 2
}

impl<P> Default for BinaryMaxHeap<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> Clone for BinaryMaxHeap<P> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
            config: self.config,
        }
    }
}

impl<'a, P> IntoIterator for &'a BinaryMaxHeap<P> {
    type Item = &'a Entry<P>;
    type IntoIter = std::slice::Iter<'a, Entry<P>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
