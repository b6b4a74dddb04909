//! Ordered batches of scheduled entries.

use std::collections::VecDeque;

/// An ordered collection of scheduled entries awaiting execution in a round.
///
/// Insertion order is significant and preserved: entries drain in exactly
/// the order they were pushed. A scheduler owns a pair of batches (active
/// and pending) and swaps their roles once per round; batches are never
/// merged.
#[derive(Debug)]
pub struct Batch<T> {
    entries: VecDeque<T>,
}

impl<T> Batch<T> {
    /// Create an empty batch.
    pub fn new() -> Self {
        Self {
            entries: VecDeque::new(),
        }
    }

    /// Create an empty batch with preallocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
        }
    }

    /// Append an entry, preserving insertion order.
    pub fn push(&mut self, entry: T) {
        self.entries.push_back(entry);
    }

    /// Remove and return the oldest entry, if any.
    pub fn pop(&mut self) -> Option<T> {
        self.entries.pop_front()
    }

    /// Number of entries currently in the batch.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the batch holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> Default for Batch<T> {
    fn default() -> Self {
        Self::new()
    }
}
