//! Bounded FIFO used while distributing a layout.
//!
//! The staging buffer collects a run of chemical tokens and hands them to a
//! flask in the order they arrived. Layout files are trusted input, so the
//! buffer is lenient: enqueueing into a full buffer drops the unit and
//! dequeueing from an empty one yields `None`.

use std::collections::VecDeque;

use tracing::warn;

use super::chemical::Chemical;

/// Bounded, lenient FIFO of chemicals.
///
/// ```
/// use flask_sort::core::{Chemical, StagingBuffer};
///
/// let mut buffer = StagingBuffer::new(2);
/// buffer.enqueue(Chemical::new("AA"));
/// buffer.enqueue(Chemical::new("BB"));
/// buffer.enqueue(Chemical::new("CC")); // dropped, buffer is full
///
/// assert_eq!(buffer.dequeue(), Some(Chemical::new("AA")));
/// assert_eq!(buffer.dequeue(), Some(Chemical::new("BB")));
/// assert_eq!(buffer.dequeue(), None);
/// ```
#[derive(Clone, Debug, Default)]
pub struct StagingBuffer {
    items: VecDeque<Chemical>,
    max_capacity: usize,
}

impl StagingBuffer {
    /// Create an empty buffer holding at most `max_capacity` units.
    #[must_use]
    pub fn new(max_capacity: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(max_capacity),
            max_capacity,
        }
    }

    /// Add a unit at the back. Drops it if the buffer is full.
    pub fn enqueue(&mut self, unit: Chemical) {
        if self.is_full() {
            warn!(chemical = %unit, capacity = self.max_capacity, "staging buffer full, dropping chemical");
            return;
        }
        self.items.push_back(unit);
    }

    /// Take the unit at the front, if any.
    pub fn dequeue(&mut self) -> Option<Chemical> {
        self.items.pop_front()
    }

    /// The unit that would be dequeued next.
    #[must_use]
    pub fn peek(&self) -> Option<&Chemical> {
        self.items.front()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.items.len() == self.max_capacity
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.max_capacity
    }

    /// Iterate front to back.
    pub fn iter(&self) -> impl Iterator<Item = &Chemical> {
        self.items.iter()
    }

    /// Empty the buffer, returning what it held front to back.
    pub fn drain(&mut self) -> Vec<Chemical> {
        self.items.drain(..).collect()
    }
}
