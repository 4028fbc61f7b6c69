//! Queue module - circular next-piece queue
//!
//! A fixed array of [`QUEUE_CAPACITY`] slots with head/tail indices and a count.
//! Indices wrap modulo the capacity, so slots are reused forever and pieces
//! never shift. All operations are O(1) and allocation-free.

use crate::error::{CoreError, CoreResult, Structure};
use crate::types::{Piece, QUEUE_CAPACITY};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceQueue {
    slots: [Option<Piece>; QUEUE_CAPACITY],
    /// Physical index of the front piece
    head: usize,
    /// Physical index of the next free slot
    tail: usize,
    count: usize,
}

impl PieceQueue {
    /// Create an empty queue
    pub const fn new() -> Self {
        Self {
            slots: [None; QUEUE_CAPACITY],
            head: 0,
            tail: 0,
            count: 0,
        }
    }

    pub const fn capacity(&self) -> usize {
        QUEUE_CAPACITY
    }

    pub const fn len(&self) -> usize {
        self.count
    }

    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub const fn is_full(&self) -> bool {
        self.count == QUEUE_CAPACITY
    }

    /// Physical index of the front piece.
    pub const fn head(&self) -> usize {
        self.head
    }

    /// Physical index the next enqueue writes to.
    pub const fn tail(&self) -> usize {
        self.tail
    }

    /// Append a piece at the tail.
    ///
    /// Fails with [`CoreError::CapacityExceeded`] when all slots are taken; the
    /// queue is left untouched in that case.
    pub fn enqueue(&mut self, piece: Piece) -> CoreResult<()> {
        if self.is_full() {
            return Err(CoreError::CapacityExceeded {
                structure: Structure::Queue,
            });
        }

        self.slots[self.tail] = Some(piece);
        self.tail = (self.tail + 1) % QUEUE_CAPACITY;
        self.count += 1;
        Ok(())
    }

    /// Remove and return the front piece.
    ///
    /// Fails with [`CoreError::Underflow`] when the queue is empty.
    pub fn dequeue(&mut self) -> CoreResult<Piece> {
        let underflow = CoreError::Underflow {
            structure: Structure::Queue,
        };
        if self.is_empty() {
            return Err(underflow);
        }
        let Some(piece) = self.slots[self.head].take() else {
            return Err(underflow);
        };

        self.head = (self.head + 1) % QUEUE_CAPACITY;
        self.count -= 1;
        Ok(piece)
    }

    /// Physical slot of the k-th piece from the front.
    ///
    /// Only defined for `k < len()`.
    pub const fn physical_index(&self, k: usize) -> Option<usize> {
        if k < self.count {
            Some((self.head + k) % QUEUE_CAPACITY)
        } else {
            None
        }
    }

    /// The k-th piece from the front.
    pub fn get(&self, k: usize) -> Option<&Piece> {
        let idx = self.physical_index(k)?;
        self.slots[idx].as_ref()
    }

    /// Mutable access to the k-th piece from the front (swap operations only).
    pub(crate) fn get_mut(&mut self, k: usize) -> Option<&mut Piece> {
        let idx = self.physical_index(k)?;
        self.slots[idx].as_mut()
    }

    pub fn front(&self) -> Option<&Piece> {
        self.get(0)
    }

    /// Iterate front-to-back.
    pub fn iter(&self) -> impl Iterator<Item = &Piece> + '_ {
        (0..self.count).filter_map(move |k| self.get(k))
    }
}

impl Default for PieceQueue {
    fn default() -> Self {
        Self::new()
    }
}
