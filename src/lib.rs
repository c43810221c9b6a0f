#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod board;
mod cell;
#[cfg(feature = "std")]
pub mod cli;
mod common;
mod config;
pub mod event;
mod game;
pub mod layout;
#[cfg(feature = "std")]
mod logging;
pub mod prelude;
pub mod render;

pub use board::*;
pub use cell::*;
pub use common::*;
pub use config::*;
pub use event::{dispatch, Flow, InputEvent};
pub use game::*;
pub use layout::{Layout, Rect};
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use render::{draw_session, Color, DrawCommand, DrawList, RenderTarget, TextCanvas};
