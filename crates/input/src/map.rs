//! Line mapping from menu input to choices.

use crate::types::MenuChoice;

/// Map one input line to a menu choice.
///
/// Accepts the menu number, optionally surrounded by whitespace, plus `q`
/// as an alias for exit.
pub fn parse_choice(line: &str) -> Option<MenuChoice> {
    let trimmed = line.trim();
    match trimmed {
        "q" | "Q" => Some(MenuChoice::Exit),
        _ => trimmed.parse::<u8>().ok().and_then(MenuChoice::from_code),
    }
}

/// Check if a choice should end the loop.
pub fn should_quit(choice: MenuChoice) -> bool {
    matches!(choice, MenuChoice::Exit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbered_choices() {
        assert_eq!(parse_choice("1"), Some(MenuChoice::Play));
        assert_eq!(parse_choice("2\n"), Some(MenuChoice::Reserve));
        assert_eq!(parse_choice(" 3 "), Some(MenuChoice::UseReserve));
        assert_eq!(parse_choice("4"), Some(MenuChoice::SwapFront));
        assert_eq!(parse_choice("5"), Some(MenuChoice::SwapThree));
        assert_eq!(parse_choice("6"), Some(MenuChoice::Show));
        assert_eq!(parse_choice("0"), Some(MenuChoice::Exit));
    }

    #[test]
    fn test_rejects_unknown_input() {
        assert_eq!(parse_choice(""), None);
        assert_eq!(parse_choice("7"), None);
        assert_eq!(parse_choice("-1"), None);
        assert_eq!(parse_choice("play"), None);
        assert_eq!(parse_choice("1 2"), None);
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(parse_choice("q"), Some(MenuChoice::Exit));
        assert!(should_quit(MenuChoice::Exit));
        assert!(!should_quit(MenuChoice::Play));
    }
}
