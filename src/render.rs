//! Presentation adapter: turns session state into draw calls.
//!
//! The drawing surface is an owned [`RenderTarget`] handed in by the caller;
//! front-ends recreate it when the grid is resized.

use crate::{
    cell::Cell,
    game::{GameSession, GameStatus},
    layout::{Layout, Rect},
};
use alloc::format;
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const GRAY: Color = Color::rgb(169, 169, 169);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 200);
    pub const GREEN: Color = Color::rgb(0, 128, 0);
    pub const NAVY: Color = Color::rgb(0, 0, 110);
    pub const MAROON: Color = Color::rgb(128, 0, 0);
    pub const TEAL: Color = Color::rgb(0, 128, 128);

    pub const BACKGROUND: Color = Color::WHITE;
    pub const HIDDEN: Color = Color::BLACK;
    pub const REVEALED: Color = Color::GRAY;
    pub const BOMB: Color = Color::RED;
    pub const FLAG: Color = Color::RED;

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Colour of an adjacency digit.
pub fn number_color(count: u8) -> Color {
    match count {
        1 => Color::BLUE,
        2 => Color::GREEN,
        3 => Color::RED,
        4 => Color::NAVY,
        5 => Color::MAROON,
        6 => Color::TEAL,
        _ => Color::BLACK,
    }
}

/// Minimal drawing surface needed by the game.
pub trait RenderTarget {
    fn clear(&mut self, color: Color);
    fn fill_rect(&mut self, rect: Rect, color: Color);
    /// Draw `text` with its top-left corner at `(x, y)`.
    fn draw_text(&mut self, x: u32, y: u32, text: &str, color: Color);
}

/// Header line for the current session state.
pub fn status_line(session: &GameSession) -> String {
    match session.status() {
        GameStatus::InProgress => format!(
            "Bombs: {}  Flags: {}",
            session.bomb_target(),
            session.flags_placed()
        ),
        GameStatus::Won => String::from("You Won"),
        GameStatus::Lost => String::from("Game Over"),
    }
}

fn cell_color(cell: &Cell) -> Color {
    if !cell.is_revealed {
        Color::HIDDEN
    } else if cell.has_bomb {
        Color::BOMB
    } else {
        Color::REVEALED
    }
}

/// Draw one full frame of `session` onto `target`.
pub fn draw_session<T: RenderTarget + ?Sized>(
    session: &GameSession,
    layout: &Layout,
    target: &mut T,
) {
    let board = session.board();
    let (inset_x, inset_y) = layout.text_inset;

    target.clear(Color::BACKGROUND);
    target.draw_text(
        layout.margin + inset_x,
        inset_y.min(layout.header_height.saturating_sub(1)),
        &status_line(session),
        Color::BLACK,
    );

    for row in 0..board.height() {
        for col in 0..board.width() {
            let cell = &board.cells()[row * board.width() + col];
            let rect = layout.cell_rect(row, col);
            target.fill_rect(rect.inset(layout.gap / 2), cell_color(cell));

            let (tx, ty) = (rect.x + inset_x, rect.y + inset_y);
            if cell.is_flagged {
                target.draw_text(tx, ty, "F", Color::FLAG);
            } else if cell.is_revealed && !cell.has_bomb && cell.adjacent_bomb_count > 0 {
                let count = cell.adjacent_bomb_count;
                let mut buf = [0u8; 4];
                let digit = char::from(b'0' + count).encode_utf8(&mut buf);
                target.draw_text(tx, ty, digit, number_color(count));
            }
        }
    }
}

/// A recorded draw call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawCommand {
    Clear(Color),
    FillRect(Rect, Color),
    Text {
        x: u32,
        y: u32,
        text: String,
        color: Color,
    },
}

/// Target that records draw calls instead of rasterising them.
#[derive(Debug, Default, Clone)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    /// All text drawn this frame, in order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl RenderTarget for DrawList {
    fn clear(&mut self, color: Color) {
        // a clear invalidates everything drawn before it
        self.commands.clear();
        self.commands.push(DrawCommand::Clear(color));
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::FillRect(rect, color));
    }

    fn draw_text(&mut self, x: u32, y: u32, text: &str, color: Color) {
        self.commands.push(DrawCommand::Text {
            x,
            y,
            text: String::from(text),
            color,
        });
    }
}

/// Character-grid target for terminals. One surface unit is one character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextCanvas {
    width: usize,
    height: usize,
    chars: Vec<char>,
}

impl TextCanvas {
    pub fn new(width: u32, height: u32) -> Self {
        let (width, height) = (width as usize, height as usize);
        Self {
            width,
            height,
            chars: vec![' '; width * height],
        }
    }

    /// Canvas sized for `session`'s current grid.
    pub fn for_session(session: &GameSession, layout: &Layout) -> Self {
        let board = session.board();
        let (w, h) = layout.window_size(board.width(), board.height());
        Self::new(w, h)
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width as u32, self.height as u32)
    }

    pub fn line(&self, y: usize) -> Option<String> {
        (y < self.height).then(|| {
            self.chars[y * self.width..(y + 1) * self.width]
                .iter()
                .collect()
        })
    }

    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        (0..self.height).filter_map(|y| self.line(y))
    }

    fn glyph(color: Color) -> char {
        match color {
            Color::HIDDEN => '#',
            Color::BOMB => '*',
            _ => ' ',
        }
    }
}

impl RenderTarget for TextCanvas {
    fn clear(&mut self, color: Color) {
        let glyph = Self::glyph(color);
        self.chars.iter_mut().for_each(|c| *c = glyph);
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let glyph = Self::glyph(color);
        let x_end = (rect.x as usize + rect.width as usize).min(self.width);
        let y_end = (rect.y as usize + rect.height as usize).min(self.height);
        for y in rect.y as usize..y_end {
            for x in rect.x as usize..x_end {
                self.chars[y * self.width + x] = glyph;
            }
        }
    }

    fn draw_text(&mut self, x: u32, y: u32, text: &str, _color: Color) {
        let (x, y) = (x as usize, y as usize);
        if y >= self.height {
            return;
        }
        for (i, ch) in text.chars().enumerate() {
            if x + i >= self.width {
                break;
            }
            self.chars[y * self.width + x + i] = ch;
        }
    }
}
