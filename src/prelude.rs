//! Commonly used types and utilities for ease of import.

pub use crate::{
    dispatch, Board, BoardConfig, BoardError, Cell, GameConfig, GameSession, GameStatus,
    InputEvent, Layout, RevealOutcome,
};

pub use crate::render::{draw_session, RenderTarget};
