//! Parsing the puzzle's text format.
//!
//! A board file holds three rows of three cells, digits `1`-`8` written
//! contiguously with the blank as a space:
//!
//! ```text
//! 281
//! 4 3
//! 765
//! ```
//!
//! Newlines and carriage returns are skipped; `0` and `.` are accepted as
//! alternate blank markers. Everything else is an error.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::board::{Board, Tiles, ValidationError, CELLS};

#[derive(Debug, Error)]
pub enum ParseError {
    /// A character that is neither a cell value, a blank marker, nor a
    /// line break.
    #[error("unexpected character {found:?} in board text")]
    UnexpectedCharacter { found: char },

    /// Too few or too many cells in the text.
    #[error("expected {CELLS} cells, found {found}")]
    WrongCellCount { found: usize },

    /// The cells do not form a valid board.
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error("failed to read board file: {0}")]
    Io(#[from] std::io::Error),
}

/// Parses a board from its textual form.
pub fn parse_board(text: &str) -> Result<Board, ParseError> {
    let mut tiles: Tiles = [0; CELLS];
    let mut count = 0;

    for ch in text.chars() {
        let value = match ch {
            '\n' | '\r' => continue,
            ' ' | '.' | '0' => 0,
            '1'..='8' => ch as u8 - b'0',
            other => return Err(ParseError::UnexpectedCharacter { found: other }),
        };
        if count < CELLS {
            tiles[count] = value;
        }
        count += 1;
    }

    if count != CELLS {
        return Err(ParseError::WrongCellCount { found: count });
    }
    Ok(Board::new(tiles)?)
}

/// Reads and parses a board file.
pub fn load_board(path: &Path) -> Result<Board, ParseError> {
    parse_board(&fs::read_to_string(path)?)
}
