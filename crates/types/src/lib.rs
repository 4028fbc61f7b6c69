//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input parsing).
//!
//! # Capacities
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `QUEUE_CAPACITY` | 5 | Slots in the circular next-piece queue |
//! | `RESERVE_CAPACITY` | 3 | Slots in the reserve pile |
//! | `SWAP_THREE_COUNT` | 3 | Pieces exchanged by a three-way swap |
//!
//! # Examples
//!
//! ```
//! use tetris_reserve_types::{MenuChoice, Piece, PieceKind, QUEUE_CAPACITY};
//!
//! // Parse from string (case-insensitive)
//! let kind = PieceKind::from_str("t").unwrap();
//! assert_eq!(kind, PieceKind::T);
//!
//! let piece = Piece::new(kind, 7);
//! assert_eq!(piece.to_string(), "[T, 7]");
//!
//! assert_eq!(MenuChoice::from_code(4), Some(MenuChoice::SwapFront));
//! assert_eq!(QUEUE_CAPACITY, 5);
//! ```

use std::fmt;

/// Slots in the circular next-piece queue.
pub const QUEUE_CAPACITY: usize = 5;

/// Slots in the reserve pile.
pub const RESERVE_CAPACITY: usize = 3;

/// Number of pieces exchanged by [`MenuChoice::SwapThree`].
pub const SWAP_THREE_COUNT: usize = 3;

/// First id handed out by a fresh session.
pub const FIRST_PIECE_ID: u64 = 1;

/// The four piece kinds handled by the queue.
///
/// - **I**: horizontal bar
/// - **O**: 2x2 square
/// - **T**: T-shaped
/// - **L**: L-shaped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    L,
}

impl PieceKind {
    /// All kinds, in generator order.
    pub const ALL: [PieceKind; 4] = [PieceKind::I, PieceKind::O, PieceKind::T, PieceKind::L];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_reserve_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("s"), None);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "l" => Some(PieceKind::L),
            _ => None,
        }
    }

    /// Single uppercase letter used in the `[kind, id]` display.
    pub fn as_char(&self) -> char {
        match self {
            PieceKind::I => 'I',
            PieceKind::O => 'O',
            PieceKind::T => 'T',
            PieceKind::L => 'L',
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A piece waiting in the queue or the reserve.
///
/// Pieces are immutable once created; the id is assigned by whoever generates
/// the piece and is never reused within a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    id: u64,
}

impl Piece {
    pub const fn new(kind: PieceKind, id: u64) -> Self {
        Self { kind, id }
    }

    pub const fn kind(&self) -> PieceKind {
        self.kind
    }

    pub const fn id(&self) -> u64 {
        self.id
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.kind, self.id)
    }
}

/// Menu actions offered by the text driver.
///
/// Codes match the numbers printed in the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// 0 - leave the program
    Exit,
    /// 1 - play the front piece (and replenish the queue)
    Play,
    /// 2 - move the front piece to the reserve (and replenish the queue)
    Reserve,
    /// 3 - use the piece on top of the reserve
    UseReserve,
    /// 4 - swap the front piece with the reserve top
    SwapFront,
    /// 5 - swap the first three pieces with the three reserved ones
    SwapThree,
    /// 6 - show queue and reserve
    Show,
}

impl MenuChoice {
    /// Every choice, in menu order.
    pub const ALL: [MenuChoice; 7] = [
        MenuChoice::Play,
        MenuChoice::Reserve,
        MenuChoice::UseReserve,
        MenuChoice::SwapFront,
        MenuChoice::SwapThree,
        MenuChoice::Show,
        MenuChoice::Exit,
    ];

    /// Map a menu number to a choice.
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_reserve_types::MenuChoice;
    ///
    /// assert_eq!(MenuChoice::from_code(0), Some(MenuChoice::Exit));
    /// assert_eq!(MenuChoice::from_code(5), Some(MenuChoice::SwapThree));
    /// assert_eq!(MenuChoice::from_code(9), None);
    /// ```
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(MenuChoice::Exit),
            1 => Some(MenuChoice::Play),
            2 => Some(MenuChoice::Reserve),
            3 => Some(MenuChoice::UseReserve),
            4 => Some(MenuChoice::SwapFront),
            5 => Some(MenuChoice::SwapThree),
            6 => Some(MenuChoice::Show),
            _ => None,
        }
    }

    pub fn code(&self) -> u8 {
        match self {
            MenuChoice::Exit => 0,
            MenuChoice::Play => 1,
            MenuChoice::Reserve => 2,
            MenuChoice::UseReserve => 3,
            MenuChoice::SwapFront => 4,
            MenuChoice::SwapThree => 5,
            MenuChoice::Show => 6,
        }
    }

    /// Menu label shown next to the code.
    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::Exit => "Exit",
            MenuChoice::Play => "Play front piece",
            MenuChoice::Reserve => "Send front piece to reserve",
            MenuChoice::UseReserve => "Use reserved piece",
            MenuChoice::SwapFront => "Swap front piece with reserve top",
            MenuChoice::SwapThree => "Swap first three pieces with the reserve",
            MenuChoice::Show => "Show queue and reserve",
        }
    }
}
