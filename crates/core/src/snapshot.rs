use arrayvec::ArrayVec;

use crate::types::{Piece, QUEUE_CAPACITY, RESERVE_CAPACITY};

/// Stack-only copy of a session's visible state.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct SessionSnapshot {
    /// Front-to-back
    pub queue: ArrayVec<Piece, QUEUE_CAPACITY>,
    /// Top-to-bottom
    pub reserve: ArrayVec<Piece, RESERVE_CAPACITY>,
    pub next_id: u64,
}

impl SessionSnapshot {
    pub fn clear(&mut self) {
        self.queue.clear();
        self.reserve.clear();
        self.next_id = 0;
    }

    pub fn queue_ids(&self) -> impl Iterator<Item = u64> + '_ {
        self.queue.iter().map(Piece::id)
    }

    pub fn reserve_ids(&self) -> impl Iterator<Item = u64> + '_ {
        self.reserve.iter().map(Piece::id)
    }
}
