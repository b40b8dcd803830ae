//! Terminal animation of a solved path.
//!
//! Plays the board snapshots one per frame on the alternate screen, with a
//! fixed delay between frames, then restores the terminal.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{execute, queue};

use crate::board::Board;

/// Plays `path` start to goal with `delay` between frames.
///
/// The terminal is restored even when drawing fails midway.
pub fn animate(path: &[Board], delay: Duration) -> io::Result<()> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, Hide)?;
    let played = play(&mut stdout, path, delay);
    let restored = execute!(stdout, ResetColor, Show, LeaveAlternateScreen);
    played.and(restored)
}

fn play(out: &mut impl Write, path: &[Board], delay: Duration) -> io::Result<()> {
    let last = path.len().saturating_sub(1);
    for (step, board) in path.iter().enumerate() {
        queue!(
            out,
            Clear(ClearType::All),
            MoveTo(0, 0),
            SetForegroundColor(Color::Yellow),
            Print(format!("step {step}/{last}")),
            ResetColor
        )?;
        for (row, line) in board.to_string().lines().enumerate() {
            queue!(out, MoveTo(0, row as u16 + 2), Print(line))?;
        }
        out.flush()?;
        thread::sleep(delay);
    }
    Ok(())
}
