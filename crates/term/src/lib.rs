//! Terminal output module.
//!
//! Turns session state into text for the menu driver. Formatting lives in
//! [`view`] as plain strings; [`renderer`] prints them through crossterm,
//! coloring each piece by kind when the terminal allows it.

pub mod palette;
pub mod renderer;
pub mod view;

pub use tetris_reserve_core as core;
pub use tetris_reserve_types as types;

pub use palette::{piece_color, Rgb};
pub use renderer::TextRenderer;
pub use view::{describe_error, describe_outcome, format_pieces, menu_lines, state_lines};
