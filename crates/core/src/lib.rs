//! Core module - piece queue, reserve pile and the swaps between them
//!
//! This crate contains every rule of the piece manager. It has **no
//! dependencies** on terminals or stdin, making it:
//!
//! - **Deterministic**: generators are injected, so a seed or a script fixes every piece
//! - **Testable**: each structure is usable on its own, without a driver
//! - **Fixed-size**: both structures are plain arrays; hot paths never allocate
//!
//! # Module Structure
//!
//! - [`queue`]: 5-slot circular FIFO of upcoming pieces
//! - [`reserve`]: 3-slot LIFO pile of held pieces
//! - [`swap`]: in-place exchanges between the queue front and the reserve top
//! - [`rng`]: piece generators (seeded LCG, scripted, closures)
//! - [`session`]: queue + reserve + id counter, driven by menu choices
//! - [`snapshot`]: stack-only copy of the visible state
//! - [`error`]: recoverable error kinds
//!
//! # Example
//!
//! ```
//! use tetris_reserve_core::{Outcome, RandomGenerator, Session};
//! use tetris_reserve_types::{MenuChoice, QUEUE_CAPACITY};
//!
//! let mut session = Session::new(RandomGenerator::new(12345));
//! assert_eq!(session.queue().len(), QUEUE_CAPACITY);
//!
//! // Hold the front piece, then swap the new front with it.
//! let held = session.reserve().unwrap();
//! session.apply(MenuChoice::SwapFront).unwrap();
//! assert_eq!(session.queue().front(), Some(&held));
//!
//! // The queue is refilled after every removal.
//! assert!(matches!(session.apply(MenuChoice::Play), Ok(Outcome::Played(_))));
//! assert!(session.queue().is_full());
//! ```

pub mod error;
pub mod queue;
pub mod reserve;
pub mod rng;
pub mod session;
pub mod snapshot;
pub mod swap;

pub use tetris_reserve_types as types;

// Re-export commonly used types for convenience
pub use error::{CoreError, CoreResult, Structure, SwapKind};
pub use queue::PieceQueue;
pub use reserve::ReservePile;
pub use rng::{PieceGenerator, RandomGenerator, ScriptedGenerator, SimpleRng};
pub use session::{Outcome, Session};
pub use snapshot::SessionSnapshot;
pub use swap::{swap_front_with_top, swap_three};
