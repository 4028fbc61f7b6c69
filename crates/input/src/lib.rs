//! Menu input module.
//!
//! Maps lines typed at the menu prompt into [`crate::types::MenuChoice`]
//! values. Reading is generic over [`std::io::BufRead`] so tests can feed
//! scripted input.

pub mod map;
pub mod reader;

pub use tetris_reserve_types as types;

pub use map::{parse_choice, should_quit};
pub use reader::{InputEvent, MenuReader};
