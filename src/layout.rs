//! Screen geometry shared by the renderer and input translation.
//!
//! A layout maps grid coordinates to surface units (pixels for a window,
//! characters for a terminal) and back. The header band sits above the grid.

use crate::board::Board;
use crate::config::{MAX_DIMENSION, MIN_DIMENSION};

/// Axis-aligned rectangle in surface units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Shrink by `by` on every side, saturating at an empty rect.
    pub fn inset(self, by: u32) -> Self {
        let shrink = by.saturating_mul(2);
        Self {
            x: self.x + by.min(self.width / 2),
            y: self.y + by.min(self.height / 2),
            width: self.width.saturating_sub(shrink),
            height: self.height.saturating_sub(shrink),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub cell_width: u32,
    pub cell_height: u32,
    /// Border around the grid on the left, right and bottom, and between
    /// header and grid.
    pub margin: u32,
    pub header_height: u32,
    /// Gridline thickness drawn between cells.
    pub gap: u32,
    /// Offset of cell text from the cell's top-left corner.
    pub text_inset: (u32, u32),
}

impl Layout {
    /// Window geometry: 40 px cells under a 50 px header.
    pub const fn pixel() -> Self {
        Self {
            cell_width: 40,
            cell_height: 40,
            margin: 0,
            header_height: 50,
            gap: 2,
            text_inset: (14, 10),
        }
    }

    /// Terminal geometry: three characters per cell, one header line.
    pub const fn text() -> Self {
        Self {
            cell_width: 3,
            cell_height: 1,
            margin: 0,
            header_height: 1,
            gap: 0,
            text_inset: (1, 0),
        }
    }

    fn grid_origin(&self) -> (u32, u32) {
        (self.margin, self.header_height + self.margin)
    }

    /// Total surface size needed for a `width`×`height` grid. Saturates at
    /// `u32::MAX` for grids no surface could hold.
    pub fn window_size(&self, width: usize, height: usize) -> (u32, u32) {
        let width = u32::try_from(width).unwrap_or(u32::MAX);
        let height = u32::try_from(height).unwrap_or(u32::MAX);
        (
            self.cell_width
                .saturating_mul(width)
                .saturating_add(self.margin * 2),
            self.cell_height
                .saturating_mul(height)
                .saturating_add(self.header_height + self.margin * 2),
        )
    }

    /// Grid dimensions that fit a surface of the given size, clamped to the
    /// supported range.
    pub fn grid_for_window(&self, pixel_width: u32, pixel_height: u32) -> (usize, usize) {
        let usable_w = pixel_width.saturating_sub(self.margin * 2);
        let usable_h = pixel_height.saturating_sub(self.header_height + self.margin * 2);
        let cols = (usable_w / self.cell_width.max(1)) as usize;
        let rows = (usable_h / self.cell_height.max(1)) as usize;
        (
            cols.clamp(MIN_DIMENSION, MAX_DIMENSION),
            rows.clamp(MIN_DIMENSION, MAX_DIMENSION),
        )
    }

    pub fn header_rect(&self, board: &Board) -> Rect {
        let (w, _) = self.window_size(board.width(), board.height());
        Rect::new(0, 0, w, self.header_height)
    }

    /// Surface rectangle covered by cell `(row, col)`.
    pub fn cell_rect(&self, row: usize, col: usize) -> Rect {
        let (ox, oy) = self.grid_origin();
        Rect::new(
            ox + col as u32 * self.cell_width,
            oy + row as u32 * self.cell_height,
            self.cell_width,
            self.cell_height,
        )
    }

    /// Translate a surface position into a grid coordinate. Positions in the
    /// header, margin or beyond the grid yield `None`.
    pub fn cell_at(&self, x: u32, y: u32, board: &Board) -> Option<(usize, usize)> {
        let (ox, oy) = self.grid_origin();
        let col = (x.checked_sub(ox)? / self.cell_width.max(1)) as usize;
        let row = (y.checked_sub(oy)? / self.cell_height.max(1)) as usize;
        board.contains(row, col).then_some((row, col))
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::pixel()
    }
}
