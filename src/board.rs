//! Board representation and single-slide moves for the 3x3 puzzle.
//!
//! A board is a flat array of 9 tile values in row-major order, with 0
//! standing for the blank cell. The blank's index is cached alongside the
//! tiles so neighbor generation never has to scan for it.

use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;

/// Grid dimension per axis.
pub const DIM: usize = 3;

/// Total number of cells.
pub const CELLS: usize = DIM * DIM;

/// Flat row-major tile values. `tiles[i] == 0` marks the blank.
pub type Tiles = [u8; CELLS];

/// The canonical solved arrangement.
pub const GOAL: Tiles = [1, 2, 3, 4, 5, 6, 7, 8, 0];

/// A start board that fails the permutation invariant.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A tile value outside `0..=8`.
    #[error("tile value {value} at cell {index} is out of range (expected 0..=8)")]
    ValueOutOfRange { value: u8, index: usize },

    /// A tile value that appears more than once.
    #[error("tile value {value} appears more than once")]
    DuplicateValue { value: u8 },
}

/// One snapshot of the puzzle: tiles, cached blank position, and a backlink
/// to the archive entry this board was generated from (`None` for the root).
///
/// Boards are immutable values; sliding a tile always produces a new board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    tiles: Tiles,
    blank: usize,
    prev: Option<usize>,
}

impl Board {
    /// Creates a root board from raw tiles, validating the permutation
    /// invariant: every value in `0..=8`, each exactly once.
    pub fn new(tiles: Tiles) -> Result<Self, ValidationError> {
        let mut seen = [false; CELLS];
        for (index, &value) in tiles.iter().enumerate() {
            if value as usize >= CELLS {
                return Err(ValidationError::ValueOutOfRange { value, index });
            }
            if seen[value as usize] {
                return Err(ValidationError::DuplicateValue { value });
            }
            seen[value as usize] = true;
        }

        // the permutation check guarantees exactly one zero
        let blank = tiles.iter().position(|&v| v == 0).unwrap_or(0);
        Ok(Self {
            tiles,
            blank,
            prev: None,
        })
    }

    /// The tile values in row-major order.
    #[inline]
    pub fn tiles(&self) -> &Tiles {
        &self.tiles
    }

    /// Index of the blank cell. Invariant: `tiles[blank_index()] == 0`.
    #[inline]
    pub fn blank_index(&self) -> usize {
        self.blank
    }

    /// Archive index of the board this one was generated from.
    #[inline]
    pub fn predecessor(&self) -> Option<usize> {
        self.prev
    }

    /// Whether the tiles match the canonical solved arrangement.
    #[inline]
    pub fn is_solved(&self) -> bool {
        self.tiles == GOAL
    }

    /// All boards reachable by sliding one adjacent tile into the blank.
    ///
    /// Between 2 and 4 results depending on where the blank sits. Emission
    /// order is fixed (up, down, left, right) so the first solution found is
    /// reproducible when several optimal paths exist. `parent` is the archive
    /// index of `self` and becomes each neighbor's predecessor.
    pub fn neighbors(&self, parent: usize) -> Vec<Board> {
        let row = self.blank / DIM;
        let col = self.blank % DIM;

        let mut out = Vec::with_capacity(4);
        if row > 0 {
            out.push(self.slide_to((row - 1) * DIM + col, parent));
        }
        if row + 1 < DIM {
            out.push(self.slide_to((row + 1) * DIM + col, parent));
        }
        if col > 0 {
            out.push(self.slide_to(row * DIM + col - 1, parent));
        }
        if col + 1 < DIM {
            out.push(self.slide_to(row * DIM + col + 1, parent));
        }
        out
    }

    /// Copies the board, swaps the blank with the tile at `dest`, and points
    /// the copy's backlink at `parent`.
    fn slide_to(&self, dest: usize, parent: usize) -> Board {
        let mut tiles = self.tiles;
        tiles.swap(self.blank, dest);
        Board {
            tiles,
            blank: dest,
            prev: Some(parent),
        }
    }

    /// Whether the solved arrangement is reachable from this board.
    ///
    /// For an odd-width grid a board is solvable exactly when its inversion
    /// count is even; the two parity classes partition the 9! permutations
    /// into reachable and unreachable halves.
    pub fn is_solvable(&self) -> bool {
        count_inversions(&self.tiles) % 2 == 0
    }

    /// Generates a uniformly shuffled board, re-rolling until the result is
    /// solvable.
    pub fn shuffled<R: Rng>(rng: &mut R) -> Board {
        let mut tiles = GOAL;
        loop {
            tiles.shuffle(rng);
            // shuffling a permutation keeps it one, so new() cannot fail
            if let Ok(board) = Board::new(tiles) {
                if board.is_solvable() {
                    return board;
                }
            }
        }
    }
}

/// Counts pairs of tiles (blank excluded) that appear in the wrong relative
/// order in row-major reading.
fn count_inversions(tiles: &Tiles) -> usize {
    tiles
        .iter()
        .enumerate()
        .filter(|&(_, &v)| v != 0)
        .map(|(i, &v)| {
            tiles[i + 1..]
                .iter()
                .filter(|&&later| later != 0 && later < v)
                .count()
        })
        .sum()
}

impl fmt::Display for Board {
    /// Three rows of space-separated tiles, blank shown as `.`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..DIM {
            for col in 0..DIM {
                if col > 0 {
                    write!(f, " ")?;
                }
                match self.tiles[row * DIM + col] {
                    0 => write!(f, ".")?,
                    v => write!(f, "{v}")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
