//! Common types for the minefield: board errors and reveal outcomes.

/// Result of a single reveal attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealOutcome {
    /// Cell was flagged or already open; nothing changed.
    AlreadyFlaggedOrRevealed,
    /// Cell held a bomb.
    HitBomb,
    /// Cell was safe and is now revealed.
    Safe,
}

/// Errors returned by Board and GameSession operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Coordinate lies outside the current grid.
    InvalidCoordinate { row: usize, col: usize },
    /// Requested bomb layout cannot exist on this grid.
    InvalidConfiguration,
    /// Bombs were already placed for this board.
    BombsAlreadyPlaced,
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::InvalidCoordinate { row, col } => {
                write!(f, "Coordinate out of bounds: row={}, col={}", row, col)
            }
            BoardError::InvalidConfiguration => write!(f, "Invalid board configuration"),
            BoardError::BombsAlreadyPlaced => write!(f, "Bombs are already placed on the board"),
        }
    }
}
