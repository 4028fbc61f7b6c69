//! Session module - the state driven by the menu loop
//!
//! A [`Session`] owns the queue, the reserve pile, the id counter and the piece
//! generator. The menu loop holds one session and passes menu choices to
//! [`Session::apply`]; nothing lives in globals, so every rule can be tested
//! without a terminal.
//!
//! Operations that take a piece out of the queue (`play`, `reserve`) refill it
//! right away, so outside of those calls the queue is always full.

use tracing::{debug, trace};

use crate::error::{CoreError, CoreResult, Structure};
use crate::queue::PieceQueue;
use crate::reserve::ReservePile;
use crate::rng::PieceGenerator;
use crate::snapshot::SessionSnapshot;
use crate::swap;
use crate::types::{MenuChoice, Piece, FIRST_PIECE_ID};

/// What a successful menu action did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Played(Piece),
    Reserved(Piece),
    UsedReserve(Piece),
    SwappedFront,
    SwappedThree,
    Shown,
    Exit,
}

#[derive(Debug, Clone)]
pub struct Session<G> {
    queue: PieceQueue,
    reserve: ReservePile,
    next_id: u64,
    generator: G,
}

impl<G: PieceGenerator> Session<G> {
    /// Create a session with a full queue and an empty reserve.
    pub fn new(generator: G) -> Self {
        let mut session = Self {
            queue: PieceQueue::new(),
            reserve: ReservePile::new(),
            next_id: FIRST_PIECE_ID,
            generator,
        };
        session.refill();
        session
    }

    pub fn queue(&self) -> &PieceQueue {
        &self.queue
    }

    pub fn reserve_pile(&self) -> &ReservePile {
        &self.reserve
    }

    /// Id the next generated piece will get.
    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// Generate pieces until the queue is full. Returns how many were added.
    pub fn refill(&mut self) -> usize {
        let mut added = 0;
        while !self.queue.is_full() {
            let piece = self.generator.generate(self.next_id);
            if self.queue.enqueue(piece).is_err() {
                break;
            }
            trace!(%piece, "queued");
            self.next_id += 1;
            added += 1;
        }
        added
    }

    /// Play the front piece and replenish the queue.
    pub fn play(&mut self) -> CoreResult<Piece> {
        let piece = self.queue.dequeue()?;
        self.refill();
        debug!(%piece, "played");
        Ok(piece)
    }

    /// Move the front piece onto the reserve and replenish the queue.
    ///
    /// A full reserve is reported before anything leaves the queue.
    pub fn reserve(&mut self) -> CoreResult<Piece> {
        if self.reserve.is_full() {
            debug!("reserve rejected: pile full");
            return Err(CoreError::CapacityExceeded {
                structure: Structure::Reserve,
            });
        }

        let piece = self.queue.dequeue()?;
        self.reserve.push(piece)?;
        self.refill();
        debug!(%piece, reserved = self.reserve.len(), "reserved");
        Ok(piece)
    }

    /// Take the top piece off the reserve.
    pub fn use_reserve(&mut self) -> CoreResult<Piece> {
        let piece = self.reserve.pop()?;
        debug!(%piece, "used reserve");
        Ok(piece)
    }

    pub fn swap_front(&mut self) -> CoreResult<()> {
        swap::swap_front_with_top(&mut self.queue, &mut self.reserve)
    }

    pub fn swap_three(&mut self) -> CoreResult<()> {
        swap::swap_three(&mut self.queue, &mut self.reserve)
    }

    /// Apply a menu choice.
    pub fn apply(&mut self, choice: MenuChoice) -> CoreResult<Outcome> {
        match choice {
            MenuChoice::Play => self.play().map(Outcome::Played),
            MenuChoice::Reserve => self.reserve().map(Outcome::Reserved),
            MenuChoice::UseReserve => self.use_reserve().map(Outcome::UsedReserve),
            MenuChoice::SwapFront => self.swap_front().map(|()| Outcome::SwappedFront),
            MenuChoice::SwapThree => self.swap_three().map(|()| Outcome::SwappedThree),
            MenuChoice::Show => Ok(Outcome::Shown),
            MenuChoice::Exit => Ok(Outcome::Exit),
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let mut snap = SessionSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }

    /// Fill an existing snapshot without allocating.
    pub fn snapshot_into(&self, out: &mut SessionSnapshot) {
        out.clear();
        out.queue.extend(self.queue.iter().copied());
        out.reserve.extend(self.reserve.iter().copied());
        out.next_id = self.next_id;
    }
}
