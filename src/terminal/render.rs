//! Flushes a drawn `Display` to the terminal using ANSI escape codes, with
//! crossterm for cursor control.

use std::io::Write;

use crossterm::{QueueableCommand, cursor};

use crate::error::EditorError;
use crate::terminal::display::{Cell, Display};

/// Write every cell of the display, then place and show or hide the cursor
pub fn render_display_to_terminal<W: Write>(
    display: &Display,
    out: &mut W,
) -> Result<(), EditorError> {
    // Hide cursor during update to prevent flickering
    write!(out, "\x1b[?25l\x1b[0m")?;

    let screen = &display.buffer;
    let mut last_style: Option<Cell> = None;

    for y in 0..screen.height {
        write!(out, "\x1b[{};1H", y + 1)?;
        for x in 0..screen.width {
            let Some(cell) = screen.get(x, y) else {
                continue;
            };
            let style = Cell { ch: ' ', ..*cell };
            if last_style != Some(style) {
                write!(
                    out,
                    "\x1b[0;{};{}{}m",
                    cell.fg.to_ansi_fg_code(),
                    cell.bg.to_ansi_bg_code(),
                    if cell.reverse { ";7" } else { "" }
                )?;
                last_style = Some(style);
            }
            write!(out, "{}", cell.ch)?;
        }
    }
    write!(out, "\x1b[0m")?;

    let placement = display.cursor;
    out.queue(cursor::MoveTo(
        clamp_u16(placement.pos.col),
        clamp_u16(placement.pos.row),
    ))?;
    if placement.visible {
        out.queue(cursor::Show)?;
    } else {
        out.queue(cursor::Hide)?;
    }

    out.flush()?;
    Ok(())
}

fn clamp_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}
