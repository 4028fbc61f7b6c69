//! Plain-text views of the menu, the session state and action results.
//!
//! Everything here returns strings or line lists; [`crate::renderer`] decides
//! how to print and color them.

use std::fmt::Write as _;

use crate::core::{CoreError, Outcome, SessionSnapshot, Structure, SwapKind};
use crate::types::{MenuChoice, Piece};

pub const MENU_TITLE: &str = "--- Menu ---";
pub const PROMPT: &str = "Choice: ";
pub const QUEUE_LABEL: &str = "Queue:";
pub const RESERVE_LABEL: &str = "Reserve:";

/// Menu entries in display order (exit last), e.g. `"4 - Swap front piece with reserve top"`.
pub fn menu_lines() -> impl Iterator<Item = String> {
    MenuChoice::ALL
        .into_iter()
        .map(|c| format!("{} - {}", c.code(), c.label()))
}

/// Space-separated `[kind, id]` pairs.
pub fn format_pieces<'a>(pieces: impl IntoIterator<Item = &'a Piece>) -> String {
    let mut out = String::new();
    for (i, piece) in pieces.into_iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{}", piece);
    }
    out
}

/// Two lines: the queue front-to-back and the reserve top-to-bottom.
pub fn state_lines(snap: &SessionSnapshot) -> [String; 2] {
    [
        labeled(QUEUE_LABEL, format_pieces(&snap.queue)),
        labeled(RESERVE_LABEL, format_pieces(&snap.reserve)),
    ]
}

fn labeled(label: &str, body: String) -> String {
    if body.is_empty() {
        label.to_string()
    } else {
        format!("{} {}", label, body)
    }
}

/// Message for a successful action, `None` when there is nothing to report.
pub fn describe_outcome(outcome: &Outcome) -> Option<String> {
    match outcome {
        Outcome::Played(piece) => Some(format!("Played piece: {}", piece)),
        Outcome::Reserved(piece) => Some(format!("Reserved piece: {}", piece)),
        Outcome::UsedReserve(piece) => Some(format!("Used reserved piece: {}", piece)),
        Outcome::SwappedFront => Some("Swapped front piece with reserve top.".to_string()),
        Outcome::SwappedThree => {
            Some("Swapped the first three pieces with the reserve.".to_string())
        }
        Outcome::Shown | Outcome::Exit => None,
    }
}

/// Message for a rejected action.
pub fn describe_error(err: &CoreError) -> String {
    match err {
        CoreError::CapacityExceeded {
            structure: Structure::Reserve,
        } => "Reserve is full. Use a reserved piece first.".to_string(),
        CoreError::CapacityExceeded {
            structure: Structure::Queue,
        } => "Queue is full. Cannot insert another piece.".to_string(),
        CoreError::Underflow {
            structure: Structure::Reserve,
        } => "Reserve is empty. Nothing to use.".to_string(),
        CoreError::Underflow {
            structure: Structure::Queue,
        } => "Queue is empty. Nothing to play.".to_string(),
        CoreError::IncompatibleState { operation, reason } => {
            let what = match operation {
                SwapKind::FrontWithTop => "Cannot swap front piece",
                SwapKind::Three => "Cannot swap three pieces",
            };
            format!("{}: {}.", what, reason)
        }
    }
}

pub fn describe_invalid(input: &str) -> String {
    if input.is_empty() {
        "Invalid option.".to_string()
    } else {
        format!("Invalid option: {}", input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceKind;

    #[test]
    fn test_format_pieces() {
        let pieces = [Piece::new(PieceKind::I, 1), Piece::new(PieceKind::L, 22)];
        assert_eq!(format_pieces(&pieces), "[I, 1] [L, 22]");
        assert_eq!(format_pieces(&[] as &[Piece]), "");
    }

    #[test]
    fn test_menu_lists_exit_last() {
        let lines: Vec<String> = menu_lines().collect();
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], "1 - Play front piece");
        assert_eq!(lines[6], "0 - Exit");
    }

    #[test]
    fn test_empty_reserve_line_has_no_trailing_space() {
        let snap = SessionSnapshot::default();
        let [queue, reserve] = state_lines(&snap);
        assert_eq!(queue, "Queue:");
        assert_eq!(reserve, "Reserve:");
    }

    #[test]
    fn test_describe_error() {
        let err = CoreError::IncompatibleState {
            operation: SwapKind::Three,
            reason: "reserve must hold exactly 3 pieces",
        };
        assert_eq!(
            describe_error(&err),
            "Cannot swap three pieces: reserve must hold exactly 3 pieces."
        );
    }
}
