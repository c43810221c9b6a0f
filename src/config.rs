pub const MIN_DIMENSION: usize = 8;
/// Columns are labelled `A..Z` by the terminal front-end.
pub const MAX_DIMENSION: usize = 26;
pub const DEFAULT_WIDTH: usize = 10;
pub const DEFAULT_HEIGHT: usize = 10;
pub const DEFAULT_BOMBS: usize = 15;

/// Largest bomb target allowed on a `width`×`height` grid.
pub const fn max_bombs(width: usize, height: usize) -> usize {
    width * height / 3
}

/// Grid dimensions and bomb target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardConfig {
    pub width: usize,
    pub height: usize,
    pub bombs: usize,
}

impl BoardConfig {
    pub const fn new(width: usize, height: usize, bombs: usize) -> Self {
        Self {
            width,
            height,
            bombs,
        }
    }

    /// Clamp dimensions into `[MIN_DIMENSION, MAX_DIMENSION]` and the bomb
    /// target into `[1, max_bombs]`.
    pub fn clamped(self) -> Self {
        let width = self.width.clamp(MIN_DIMENSION, MAX_DIMENSION);
        let height = self.height.clamp(MIN_DIMENSION, MAX_DIMENSION);
        let bombs = self.bombs.clamp(1, max_bombs(width, height));
        Self {
            width,
            height,
            bombs,
        }
    }

    pub const fn cells(&self) -> usize {
        self.width * self.height
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT, DEFAULT_BOMBS)
    }
}

/// Session-level options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GameConfig {
    pub board: BoardConfig,
    /// When set, the first primary click after a win or loss starts a new
    /// board instead of being ignored.
    pub restart_on_click: bool,
}
