//! Error types surfaced by maze construction and play.
//!
//! Construction failures are fatal and fail-fast: nothing is built when a
//! [`ConfigError`] is returned. Rule failures are recoverable: the caller
//! gets a labeled [`RuleError`] and the maze state is left untouched.

use thiserror::Error;

use crate::core::Position;

/// A rejected maze configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("a maze needs more than one room")]
    TooSmall,

    #[error("start and goal must be on the board, got {0}")]
    OutOfBounds(Position),

    #[error("start and goal cannot be the same room")]
    StartIsGoal,

    #[error("bat and pit percentages cannot exceed 100, got {0}")]
    BadPercentage(u32),

    #[error("players need at least one arrow")]
    NoArrows,

    #[error("only 1 or 2 players are supported, got {0}")]
    BadPlayerCount(u8),

    #[error("too many walls remaining for the maze to stay connected")]
    TooManyWalls,
}

/// A rejected runtime command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum RuleError {
    #[error("the player cannot move in that direction")]
    IllegalMove,

    #[error("that position cannot be reached in one move")]
    UnreachablePosition,

    #[error("the game is over")]
    GameOver,

    #[error("the player is out of arrows")]
    OutOfArrows,

    #[error("an arrow must fly at least one room")]
    IllegalArrowDistance,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            ConfigError::OutOfBounds(Position::new(9, 9)).to_string(),
            "start and goal must be on the board, got (9,9)"
        );
        assert_eq!(RuleError::GameOver.to_string(), "the game is over");
        assert_eq!(
            RuleError::IllegalMove.to_string(),
            "the player cannot move in that direction"
        );
    }
}
