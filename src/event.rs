//! Discrete input events and their dispatch onto a session.

use crate::{common::BoardError, game::GameSession, layout::Layout};
use log::debug;

/// Input already translated to grid coordinates by the front-end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
    /// Reveal.
    PrimaryClick { row: usize, col: usize },
    /// Toggle flag.
    SecondaryClick { row: usize, col: usize },
    /// Surface resized; the grid is rebuilt to fit.
    ResizeRequest { pixel_width: u32, pixel_height: u32 },
    Restart,
    AdjustBombs(i32),
}

/// Whether the input loop should keep running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Apply one event to the session.
pub fn dispatch(
    session: &mut GameSession,
    layout: &Layout,
    event: InputEvent,
) -> Result<Flow, BoardError> {
    debug!("dispatch {:?}", event);
    match event {
        InputEvent::Quit => return Ok(Flow::Quit),
        InputEvent::PrimaryClick { row, col } => session.handle_primary_action(row, col)?,
        InputEvent::SecondaryClick { row, col } => session.handle_secondary_action(row, col)?,
        InputEvent::ResizeRequest {
            pixel_width,
            pixel_height,
        } => {
            let (width, height) = layout.grid_for_window(pixel_width, pixel_height);
            session.reset(Some(width), Some(height), None);
        }
        InputEvent::Restart => session.reset(None, None, None),
        InputEvent::AdjustBombs(delta) => session.adjust_bomb_target(delta),
    }
    Ok(Flow::Continue)
}
