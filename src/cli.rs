#![cfg(feature = "std")]

//! Terminal front-end: reads commands, dispatches them and redraws the board
//! as text.

use std::io::{BufRead, Write};

use crate::{
    config::{MAX_DIMENSION, MIN_DIMENSION},
    event::{dispatch, Flow, InputEvent},
    game::GameSession,
    layout::Layout,
    render::{draw_session, TextCanvas},
};

const HELP: &str = "Commands:
  r A5      reveal column A, row 5
  f A5      toggle a flag
  n         new game
  + / -     one more / one fewer bomb (starts a new game)
  size W H  resize the grid (starts a new game)
  q         quit";

/// A parsed line of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Event(InputEvent),
    Help,
}

fn coord_to_string(r: usize, c: usize) -> String {
    let col = (b'A' + c as u8) as char;
    std::format!("{}{}", col, r + 1)
}

/// Parse `A5` style coordinates into zero-based `(row, col)`.
pub fn parse_coord(input: &str) -> Option<(usize, usize)> {
    if input.len() < 2 {
        return None;
    }
    let mut chars = input.chars();
    let col_ch = chars.next()?.to_ascii_uppercase();
    if !col_ch.is_ascii_uppercase() {
        return None;
    }
    let col = (col_ch as u8 - b'A') as usize;
    let row_str: String = chars.collect();
    let row: usize = row_str.parse().ok()?;
    if row == 0 {
        return None;
    }
    Some((row - 1, col))
}

/// Parse a grid dimension, clamping oversized numbers to the supported range.
fn parse_dimension(input: &str) -> Option<usize> {
    if input.is_empty() || !input.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let value = input.parse::<usize>().unwrap_or(usize::MAX);
    Some(value.clamp(MIN_DIMENSION, MAX_DIMENSION))
}

/// Parse one input line. Returns `None` for anything unrecognised.
pub fn parse_command(line: &str, layout: &Layout) -> Option<Command> {
    let mut parts = line.split_whitespace();
    let head = parts.next()?;
    let command = match head.to_ascii_lowercase().as_str() {
        "r" | "reveal" => {
            let (row, col) = parse_coord(parts.next()?)?;
            Command::Event(InputEvent::PrimaryClick { row, col })
        }
        "f" | "flag" => {
            let (row, col) = parse_coord(parts.next()?)?;
            Command::Event(InputEvent::SecondaryClick { row, col })
        }
        "n" | "new" => Command::Event(InputEvent::Restart),
        "q" | "quit" => Command::Event(InputEvent::Quit),
        "?" | "h" | "help" => Command::Help,
        "size" => {
            let width = parse_dimension(parts.next()?)?;
            let height = parse_dimension(parts.next()?)?;
            let (pixel_width, pixel_height) = layout.window_size(width, height);
            Command::Event(InputEvent::ResizeRequest {
                pixel_width,
                pixel_height,
            })
        }
        "+" => Command::Event(InputEvent::AdjustBombs(1)),
        "-" => Command::Event(InputEvent::AdjustBombs(-1)),
        other if other.starts_with('+') || other.starts_with('-') => {
            let digits = &other[1..];
            if !digits.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            let delta = other.parse::<i32>().ok()?;
            Command::Event(InputEvent::AdjustBombs(delta))
        }
        _ => return None,
    };
    if parts.next().is_some() {
        return None;
    }
    Some(command)
}

/// Print the canvas with a column ruler and row labels.
fn print_canvas<W: Write>(
    out: &mut W,
    canvas: &TextCanvas,
    session: &GameSession,
    layout: &Layout,
) -> std::io::Result<()> {
    let board = session.board();
    let header_lines = layout.header_height as usize;
    for line in canvas.lines().take(header_lines) {
        writeln!(out, "   {}", line.trim_end())?;
    }
    write!(out, "   ")?;
    for c in 0..board.width() {
        let ch = (b'A' + c as u8) as char;
        write!(out, " {} ", ch)?;
    }
    writeln!(out)?;
    for (r, line) in canvas.lines().skip(header_lines).enumerate() {
        writeln!(out, "{:2} {}", r + 1, line)?;
    }
    Ok(())
}

fn redraw<W: Write>(
    out: &mut W,
    canvas: &mut TextCanvas,
    session: &GameSession,
    layout: &Layout,
) -> std::io::Result<()> {
    draw_session(session, layout, canvas);
    print_canvas(out, canvas, session, layout)
}

/// Run the interactive loop until `q` or end of input.
pub fn run<R: BufRead, W: Write>(
    session: &mut GameSession,
    input: R,
    out: &mut W,
) -> anyhow::Result<()> {
    let layout = Layout::text();
    let mut canvas = TextCanvas::for_session(session, &layout);
    redraw(out, &mut canvas, session, &layout)?;

    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let event = match parse_command(line, &layout) {
            Some(Command::Event(event)) => event,
            Some(Command::Help) => {
                writeln!(out, "{}", HELP)?;
                continue;
            }
            None => {
                writeln!(out, "Invalid input, type ? for help")?;
                continue;
            }
        };

        if let InputEvent::PrimaryClick { row, col } | InputEvent::SecondaryClick { row, col } =
            event
        {
            if !session.board().contains(row, col) {
                writeln!(out, "{} is off the board", coord_to_string(row, col))?;
                continue;
            }
        }

        match dispatch(session, &layout, event) {
            Ok(Flow::Quit) => break,
            Ok(Flow::Continue) => {}
            Err(e) => {
                writeln!(out, "Error: {}", e)?;
                continue;
            }
        }

        let board = session.board();
        if canvas.size() != layout.window_size(board.width(), board.height()) {
            canvas = TextCanvas::for_session(session, &layout);
        }
        redraw(out, &mut canvas, session, &layout)?;
    }
    out.flush()?;
    Ok(())
}
