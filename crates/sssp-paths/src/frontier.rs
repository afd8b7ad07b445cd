//! Least-key-first frontier with lazy deletion.
//!
//! Priorities are never decreased in place. When a vertex's tentative cost
//! improves, a new entry is pushed and the old one stays in the heap. Callers
//! pop through [`Frontier::pop_live`], which drops every entry that no longer
//! matches the vertex's live cost.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use sssp_core::Weight;

/// A `(key, vertex)` heap entry, ordered so that `BinaryHeap` (a max-heap)
/// pops the smallest key first. Equal keys pop the smaller vertex first.
#[derive(Debug, Clone, Copy)]
struct Entry<W> {
    key: W,
    idx: usize,
}

impl<W: Weight> PartialEq for Entry<W> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<W: Weight> Eq for Entry<W> {}

impl<W: Weight> Ord for Entry<W> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed on both fields. Incomparable keys (NaN) tie on the key.
        other
            .key
            .partial_cmp(&self.key)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.idx.cmp(&self.idx))
    }
}

impl<W: Weight> PartialOrd for Entry<W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Priority frontier tolerant of stale and duplicate entries.
#[derive(Debug, Clone)]
pub struct Frontier<W> {
    heap: BinaryHeap<Entry<W>>,
    stale: usize,
}

impl<W: Weight> Default for Frontier<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Weight> Frontier<W> {
    /// Create an empty frontier.
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            stale: 0,
        }
    }

    /// Push `idx` with priority `key`. Older entries for `idx` are left in
    /// place and become stale.
    #[inline]
    pub fn push(&mut self, idx: usize, key: W) {
        self.heap.push(Entry { key, idx });
    }

    /// Pop the least-key entry for which `is_live(idx, key)` holds.
    ///
    /// Entries rejected by `is_live` are discarded and counted in
    /// [`stale_pops`](Self::stale_pops). Returns `None` once the frontier is
    /// exhausted.
    pub fn pop_live(&mut self, mut is_live: impl FnMut(usize, W) -> bool) -> Option<(usize, W)> {
        while let Some(Entry { key, idx }) = self.heap.pop() {
            if is_live(idx, key) {
                return Some((idx, key));
            }
            self.stale += 1;
        }
        None
    }

    /// Number of entries currently queued, stale ones included.
    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether no entry is queued.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// How many stale entries have been discarded so far.
    #[inline]
    pub fn stale_pops(&self) -> usize {
        self.stale
    }
}
