//! Reserve module - fixed-capacity LIFO pile of held pieces

use crate::error::{CoreError, CoreResult, Structure};
use crate::types::{Piece, RESERVE_CAPACITY};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservePile {
    slots: [Option<Piece>; RESERVE_CAPACITY],
    /// Number of occupied slots; the top lives at `len - 1`.
    len: usize,
}

impl ReservePile {
    pub const fn new() -> Self {
        Self {
            slots: [None; RESERVE_CAPACITY],
            len: 0,
        }
    }

    pub const fn capacity(&self) -> usize {
        RESERVE_CAPACITY
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub const fn is_full(&self) -> bool {
        self.len == RESERVE_CAPACITY
    }

    /// Index of the top slot, `None` when the pile is empty.
    pub const fn top_index(&self) -> Option<usize> {
        self.len.checked_sub(1)
    }

    /// Place a piece on top.
    pub fn push(&mut self, piece: Piece) -> CoreResult<()> {
        if self.is_full() {
            return Err(CoreError::CapacityExceeded {
                structure: Structure::Reserve,
            });
        }

        self.slots[self.len] = Some(piece);
        self.len += 1;
        Ok(())
    }

    /// Remove and return the top piece.
    pub fn pop(&mut self) -> CoreResult<Piece> {
        let underflow = CoreError::Underflow {
            structure: Structure::Reserve,
        };
        let top = self.top_index().ok_or(underflow)?;
        let piece = self.slots[top].take().ok_or(underflow)?;
        self.len = top;
        Ok(piece)
    }

    pub fn peek(&self) -> Option<&Piece> {
        self.get(0)
    }

    /// The k-th piece counted down from the top.
    pub fn get(&self, k: usize) -> Option<&Piece> {
        let idx = self.top_index()?.checked_sub(k)?;
        self.slots[idx].as_ref()
    }

    /// Mutable access to the k-th piece from the top (swap operations only).
    pub(crate) fn get_mut(&mut self, k: usize) -> Option<&mut Piece> {
        let idx = self.top_index()?.checked_sub(k)?;
        self.slots[idx].as_mut()
    }

    /// Iterate top-to-bottom.
    pub fn iter(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.slots[..self.len].iter().rev().flatten()
    }
}

impl Default for ReservePile {
    fn default() -> Self {
        Self::new()
    }
}
