//! Tetris reserve (workspace facade crate).
//!
//! Re-exports the member crates as `tetris_reserve::{core,input,term,types}`
//! and holds the pieces shared by the binary: configuration, logging setup
//! and the menu loop.

pub mod app;
pub mod config;
pub mod logging;

pub use tetris_reserve_core as core;
pub use tetris_reserve_input as input;
pub use tetris_reserve_term as term;
pub use tetris_reserve_types as types;
