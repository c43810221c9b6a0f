//! Per-coordinate minefield state.

/// A single square of the minefield.
///
/// A cell is never both revealed and flagged. `adjacent_bomb_count` only
/// holds a meaningful value once bombs have been placed on the owning board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    pub has_bomb: bool,
    pub is_revealed: bool,
    pub is_flagged: bool,
    pub adjacent_bomb_count: u8,
}

impl Cell {
    /// Hidden and unflagged.
    pub fn is_hidden(&self) -> bool {
        !self.is_revealed && !self.is_flagged
    }

    /// Mark revealed, dropping any flag.
    pub(crate) fn reveal(&mut self) {
        self.is_revealed = true;
        self.is_flagged = false;
    }
}
