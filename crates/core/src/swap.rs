//! Swap operations between the queue front and the reserve top.
//!
//! Both operations exchange pieces in place: counts, head/tail and the top
//! index never move. Preconditions are checked up front, so a rejected swap
//! leaves both structures untouched.

use tracing::debug;

use crate::error::{CoreError, CoreResult, SwapKind};
use crate::queue::PieceQueue;
use crate::reserve::ReservePile;
use crate::types::SWAP_THREE_COUNT;

/// Exchange the queue's front piece with the reserve's top piece.
pub fn swap_front_with_top(queue: &mut PieceQueue, pile: &mut ReservePile) -> CoreResult<()> {
    if queue.is_empty() {
        return Err(incompatible(SwapKind::FrontWithTop, "queue is empty"));
    }
    if pile.is_empty() {
        return Err(incompatible(SwapKind::FrontWithTop, "reserve is empty"));
    }

    exchange_prefix(queue, pile, 1, SwapKind::FrontWithTop)?;
    debug!(queue_head = queue.head(), "swapped front with reserve top");
    Ok(())
}

/// Exchange the first three queue pieces with the three reserved pieces.
///
/// The k-th piece from the queue front pairs with the k-th piece from the
/// reserve top. With reserves listed bottom to top, queue `[A, B, C, D, E]`
/// and reserve `[X, Y, Z]` become `[Z, Y, X, D, E]` and `[C, B, A]`.
pub fn swap_three(queue: &mut PieceQueue, pile: &mut ReservePile) -> CoreResult<()> {
    if queue.len() < SWAP_THREE_COUNT {
        return Err(incompatible(
            SwapKind::Three,
            "queue must hold at least 3 pieces",
        ));
    }
    if pile.len() != SWAP_THREE_COUNT {
        return Err(incompatible(
            SwapKind::Three,
            "reserve must hold exactly 3 pieces",
        ));
    }

    exchange_prefix(queue, pile, SWAP_THREE_COUNT, SwapKind::Three)?;
    debug!(queue_head = queue.head(), "swapped three pieces with reserve");
    Ok(())
}

/// Whether the first `count` queue slots and top `count` reserve slots all hold pieces.
fn slots_ready(queue: &PieceQueue, pile: &ReservePile, count: usize) -> bool {
    (0..count).all(|k| queue.get(k).is_some() && pile.get(k).is_some())
}

/// Swap queue slot k with reserve slot top-k for every k below `count`.
///
/// All slots are resolved before the first swap, so this either swaps every
/// pair or none.
fn exchange_prefix(
    queue: &mut PieceQueue,
    pile: &mut ReservePile,
    count: usize,
    operation: SwapKind,
) -> CoreResult<()> {
    if !slots_ready(queue, pile, count) {
        return Err(incompatible(operation, "slot out of range"));
    }

    for k in 0..count {
        let pair = (queue.get_mut(k), pile.get_mut(k));
        debug_assert!(pair.0.is_some() && pair.1.is_some());
        if let (Some(front), Some(top)) = pair {
            std::mem::swap(front, top);
        }
    }
    Ok(())
}

fn incompatible(operation: SwapKind, reason: &'static str) -> CoreError {
    debug!(%operation, reason, "swap rejected");
    CoreError::IncompatibleState { operation, reason }
}
