//! Minefield state: bomb placement, adjacency counts, reveals and flags.

use crate::cell::Cell;
use crate::common::{BoardError, RevealOutcome};
use crate::config::BoardConfig;
use alloc::vec;
use alloc::vec::Vec;
use log::debug;
use rand::Rng;

/// A fixed-size grid of cells.
///
/// Bombs are placed lazily: a fresh board has none until [`Board::place_bombs`]
/// runs with the coordinate of the first reveal, which is thereby guaranteed
/// safe.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    bomb_target: usize,
    bombs_placed: bool,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board. The configuration is clamped first.
    pub fn new(config: BoardConfig) -> Self {
        let config = config.clamped();
        Board {
            width: config.width,
            height: config.height,
            bomb_target: config.bombs,
            bombs_placed: false,
            cells: vec![Cell::default(); config.cells()],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn bomb_target(&self) -> usize {
        self.bomb_target
    }

    /// `false` until the first reveal has seeded the minefield.
    pub fn bombs_placed(&self) -> bool {
        self.bombs_placed
    }

    pub fn config(&self) -> BoardConfig {
        BoardConfig::new(self.width, self.height, self.bomb_target)
    }

    /// Row-major view of all cells.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cell(&self, row: usize, col: usize) -> Result<&Cell, BoardError> {
        let idx = self.index(row, col)?;
        Ok(&self.cells[idx])
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.height && col < self.width
    }

    fn index(&self, row: usize, col: usize) -> Result<usize, BoardError> {
        if self.contains(row, col) {
            Ok(row * self.width + col)
        } else {
            Err(BoardError::InvalidCoordinate { row, col })
        }
    }

    /// In-bounds Moore neighbours of `(row, col)`; no wraparound.
    pub fn neighbors(&self, row: usize, col: usize) -> impl Iterator<Item = (usize, usize)> {
        let (width, height) = (self.width, self.height);
        (-1isize..=1)
            .flat_map(|dr| (-1isize..=1).map(move |dc| (dr, dc)))
            .filter(|&(dr, dc)| dr != 0 || dc != 0)
            .filter_map(move |(dr, dc)| {
                let r = row.checked_add_signed(dr)?;
                let c = col.checked_add_signed(dc)?;
                (r < height && c < width).then_some((r, c))
            })
    }

    /// Randomly place `bomb_target` bombs anywhere except `(first_row, first_col)`.
    ///
    /// Coordinates are drawn uniformly and redrawn on duplicates or on the
    /// excluded cell. Adjacency counts are computed before returning.
    pub fn place_bombs<R: Rng>(
        &mut self,
        rng: &mut R,
        first_row: usize,
        first_col: usize,
    ) -> Result<(), BoardError> {
        if self.bombs_placed {
            return Err(BoardError::BombsAlreadyPlaced);
        }
        let safe = self.index(first_row, first_col)?;
        if self.bomb_target >= self.cells.len() {
            return Err(BoardError::InvalidConfiguration);
        }

        let mut placed = 0;
        let mut draws = 0usize;
        while placed < self.bomb_target {
            draws += 1;
            let idx = rng.random_range(0..self.cells.len());
            if idx == safe || self.cells[idx].has_bomb {
                continue;
            }
            self.cells[idx].has_bomb = true;
            placed += 1;
        }
        self.bombs_placed = true;
        self.compute_adjacency_counts();
        debug!(
            "placed {} bombs on {}x{} board in {} draws, safe cell ({}, {})",
            placed, self.width, self.height, draws, first_row, first_col
        );
        Ok(())
    }

    /// Place bombs at exactly the given coordinates, replacing the bomb target
    /// with the number of distinct coordinates.
    pub fn place_bombs_at(&mut self, coords: &[(usize, usize)]) -> Result<(), BoardError> {
        if self.bombs_placed {
            return Err(BoardError::BombsAlreadyPlaced);
        }
        let mut indices = coords
            .iter()
            .map(|&(r, c)| self.index(r, c))
            .collect::<Result<Vec<_>, _>>()?;
        indices.sort_unstable();
        indices.dedup();
        if indices.len() >= self.cells.len() {
            return Err(BoardError::InvalidConfiguration);
        }
        for &idx in &indices {
            self.cells[idx].has_bomb = true;
        }
        self.bomb_target = indices.len();
        self.bombs_placed = true;
        self.compute_adjacency_counts();
        debug!("placed {} bombs from explicit layout", indices.len());
        Ok(())
    }

    /// Recount bomb neighbours for every non-bomb cell. Idempotent.
    pub fn compute_adjacency_counts(&mut self) {
        for row in 0..self.height {
            for col in 0..self.width {
                let idx = row * self.width + col;
                let count = if self.cells[idx].has_bomb {
                    0
                } else {
                    self.neighbors(row, col)
                        .filter(|&(r, c)| self.cells[r * self.width + c].has_bomb)
                        .count() as u8
                };
                self.cells[idx].adjacent_bomb_count = count;
            }
        }
    }

    /// Open a single cell. Flagged and already revealed cells are left alone.
    ///
    /// Does not cascade; see [`Board::flood_reveal`].
    pub fn reveal(&mut self, row: usize, col: usize) -> Result<RevealOutcome, BoardError> {
        let idx = self.index(row, col)?;
        let cell = &mut self.cells[idx];
        if cell.is_flagged || cell.is_revealed {
            return Ok(RevealOutcome::AlreadyFlaggedOrRevealed);
        }
        cell.reveal();
        if cell.has_bomb {
            Ok(RevealOutcome::HitBomb)
        } else {
            Ok(RevealOutcome::Safe)
        }
    }

    /// Reveal the connected zero-count region around `(row, col)` together
    /// with its numbered border. Returns the number of newly revealed cells.
    ///
    /// Uses an explicit stack; the revealed flag is the visited marker, so
    /// every cell is pushed at most once. Flagged cells are skipped.
    pub fn flood_reveal(&mut self, row: usize, col: usize) -> Result<usize, BoardError> {
        let start = self.index(row, col)?;
        let mut newly_revealed = 0;

        let cell = &mut self.cells[start];
        if cell.has_bomb || cell.is_flagged {
            return Ok(0);
        }
        if !cell.is_revealed {
            cell.reveal();
            newly_revealed += 1;
        }
        if cell.adjacent_bomb_count != 0 {
            return Ok(newly_revealed);
        }

        let mut stack = vec![(row, col)];
        while let Some((r, c)) = stack.pop() {
            for (nr, nc) in self.neighbors(r, c) {
                let neighbor = &mut self.cells[nr * self.width + nc];
                if neighbor.is_revealed || neighbor.is_flagged || neighbor.has_bomb {
                    continue;
                }
                neighbor.reveal();
                newly_revealed += 1;
                if neighbor.adjacent_bomb_count == 0 {
                    stack.push((nr, nc));
                }
            }
        }
        debug!("flood from ({}, {}) revealed {} cells", row, col, newly_revealed);
        Ok(newly_revealed)
    }

    /// Expose every bomb and drop all flags. Safe cells keep their state.
    pub fn reveal_all(&mut self) {
        for cell in self.cells.iter_mut() {
            if cell.has_bomb {
                cell.is_revealed = true;
            }
            cell.is_flagged = false;
        }
    }

    /// Flag every bomb that is still hidden.
    pub fn flag_all_bombs(&mut self) {
        for cell in self.cells.iter_mut().filter(|c| c.has_bomb && !c.is_revealed) {
            cell.is_flagged = true;
        }
    }

    /// Flip the flag on an unrevealed cell. Returns the resulting flag state.
    pub fn toggle_flag(&mut self, row: usize, col: usize) -> Result<bool, BoardError> {
        let idx = self.index(row, col)?;
        let cell = &mut self.cells[idx];
        if !cell.is_revealed {
            cell.is_flagged = !cell.is_flagged;
        }
        Ok(cell.is_flagged)
    }

    pub fn count_unrevealed(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_revealed).count()
    }

    pub fn count_revealed(&self) -> usize {
        self.cells.len() - self.count_unrevealed()
    }

    pub fn count_flags(&self) -> usize {
        self.cells.iter().filter(|c| c.is_flagged).count()
    }

    /// Flags sitting on actual bombs.
    pub fn count_flagged_bombs(&self) -> usize {
        self.cells
            .iter()
            .filter(|c| c.is_flagged && c.has_bomb)
            .count()
    }
}
