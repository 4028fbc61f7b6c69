//! Swap operation tests using the lettered layouts from the docs:
//! queue `[A, B, C, D, E]` (front `A`) and reserve `[X, Y, Z]` (top `Z`).

use tetris_reserve::core::{
    swap_front_with_top, swap_three, CoreError, PieceQueue, ReservePile, SwapKind,
};
use tetris_reserve::types::{Piece, PieceKind};

const A: Piece = Piece::new(PieceKind::I, 1);
const B: Piece = Piece::new(PieceKind::O, 2);
const C: Piece = Piece::new(PieceKind::T, 3);
const D: Piece = Piece::new(PieceKind::L, 4);
const E: Piece = Piece::new(PieceKind::I, 5);
const X: Piece = Piece::new(PieceKind::O, 24);
const Y: Piece = Piece::new(PieceKind::T, 25);
const Z: Piece = Piece::new(PieceKind::L, 26);

fn setup(queue: &[Piece], reserve: &[Piece]) -> (PieceQueue, ReservePile) {
    let mut q = PieceQueue::new();
    for p in queue {
        q.enqueue(*p).unwrap();
    }
    let mut r = ReservePile::new();
    for p in reserve {
        r.push(*p).unwrap();
    }
    (q, r)
}

fn front_to_back(q: &PieceQueue) -> Vec<Piece> {
    q.iter().copied().collect()
}

/// Bottom-to-top, the order pieces were pushed in.
fn bottom_to_top(r: &ReservePile) -> Vec<Piece> {
    let mut v: Vec<Piece> = r.iter().copied().collect();
    v.reverse();
    v
}

#[test]
fn test_swap_front_with_top() {
    let (mut q, mut r) = setup(&[A, B, C, D, E], &[X, Y, Z]);

    swap_front_with_top(&mut q, &mut r).unwrap();

    assert_eq!(front_to_back(&q), vec![Z, B, C, D, E]);
    assert_eq!(bottom_to_top(&r), vec![X, Y, A]);
    assert_eq!((q.len(), r.len()), (5, 3));
}

#[test]
fn test_swap_front_with_single_reserved_piece() {
    let (mut q, mut r) = setup(&[A, B], &[X]);

    swap_front_with_top(&mut q, &mut r).unwrap();

    assert_eq!(front_to_back(&q), vec![X, B]);
    assert_eq!(bottom_to_top(&r), vec![A]);
}

#[test]
fn test_swap_three() {
    let (mut q, mut r) = setup(&[A, B, C, D, E], &[X, Y, Z]);

    swap_three(&mut q, &mut r).unwrap();

    assert_eq!(front_to_back(&q), vec![Z, Y, X, D, E]);
    assert_eq!(bottom_to_top(&r), vec![C, B, A]);
    assert_eq!(r.peek(), Some(&A));
}

#[test]
fn test_swap_three_with_exactly_three_queued() {
    let (mut q, mut r) = setup(&[A, B, C], &[X, Y, Z]);

    swap_three(&mut q, &mut r).unwrap();

    assert_eq!(front_to_back(&q), vec![Z, Y, X]);
    assert_eq!(bottom_to_top(&r), vec![C, B, A]);
    assert_eq!((q.len(), r.len()), (3, 3));
}

#[test]
fn test_swap_three_twice_restores() {
    let (mut q, mut r) = setup(&[A, B, C, D, E], &[X, Y, Z]);

    swap_three(&mut q, &mut r).unwrap();
    swap_three(&mut q, &mut r).unwrap();

    assert_eq!(front_to_back(&q), vec![A, B, C, D, E]);
    assert_eq!(bottom_to_top(&r), vec![X, Y, Z]);
}

#[test]
fn test_swap_three_with_two_reserved_is_rejected() {
    let (mut q, mut r) = setup(&[A, B, C, D, E], &[X, Y]);
    let (q_before, r_before) = (q.clone(), r.clone());

    let err = swap_three(&mut q, &mut r).unwrap_err();

    assert!(matches!(
        err,
        CoreError::IncompatibleState {
            operation: SwapKind::Three,
            ..
        }
    ));
    assert_eq!(q, q_before);
    assert_eq!(r, r_before);
}

#[test]
fn test_swaps_on_empty_structures_are_rejected() {
    let (mut q, mut r) = setup(&[], &[X, Y, Z]);
    assert!(swap_front_with_top(&mut q, &mut r).is_err());
    assert!(swap_three(&mut q, &mut r).is_err());

    let (mut q, mut r) = setup(&[A, B, C], &[]);
    assert!(swap_front_with_top(&mut q, &mut r).is_err());
    assert_eq!(front_to_back(&q), vec![A, B, C]);
}
