//! Error kinds shared by the queue, the reserve pile and the swap operations.
//!
//! Every error is recoverable: an operation that returns one has left both
//! structures exactly as they were.

use thiserror::Error;

/// Which fixed-capacity structure an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Structure {
    Queue,
    Reserve,
}

impl Structure {
    pub fn as_str(&self) -> &'static str {
        match self {
            Structure::Queue => "queue",
            Structure::Reserve => "reserve",
        }
    }
}

impl std::fmt::Display for Structure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Swap operation named in [`CoreError::IncompatibleState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwapKind {
    FrontWithTop,
    Three,
}

impl SwapKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SwapKind::FrontWithTop => "swap front with top",
            SwapKind::Three => "swap three",
        }
    }
}

impl std::fmt::Display for SwapKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Insert into a full structure.
    #[error("{structure} is full")]
    CapacityExceeded { structure: Structure },

    /// Remove from an empty structure.
    #[error("{structure} is empty")]
    Underflow { structure: Structure },

    /// Swap preconditions not met.
    #[error("cannot {operation}: {reason}")]
    IncompatibleState {
        operation: SwapKind,
        reason: &'static str,
    },
}

pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_structure() {
        let full = CoreError::CapacityExceeded {
            structure: Structure::Reserve,
        };
        assert_eq!(full.to_string(), "reserve is full");

        let empty = CoreError::Underflow {
            structure: Structure::Queue,
        };
        assert_eq!(empty.to_string(), "queue is empty");
    }

    #[test]
    fn incompatible_state_includes_reason() {
        let err = CoreError::IncompatibleState {
            operation: SwapKind::Three,
            reason: "reserve must hold exactly 3 pieces",
        };
        assert_eq!(
            err.to_string(),
            "cannot swap three: reserve must hold exactly 3 pieces"
        );
    }
}
