//! Breadth-first search over board states.
//!
//! The driver keeps a cursor into the archive: everything before the cursor
//! has been expanded, everything after it is the pending frontier. Because
//! the archive is append-only, dequeueing is just advancing the cursor, and
//! level-by-level expansion means the first goal popped is already a
//! shortest solution.

use thiserror::Error;

use crate::archive::Archive;
use crate::board::Board;

/// The frontier emptied without reaching the goal. Only unsolvable starts
/// (the odd-parity half of the permutations) end up here.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SolveError {
    #[error("no solution exists: search exhausted {visited} reachable states")]
    Exhausted { visited: usize },
}

/// Counters describing how much work one search did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchStats {
    /// Boards popped and expanded (including the goal).
    pub visited: usize,
    /// Boards archived in total, expanded or still pending.
    pub generated: usize,
}

/// A shortest solution: move count, the full start-to-goal path, and search
/// statistics.
pub struct Solution {
    pub moves: usize,
    pub path: Vec<Board>,
    pub stats: SearchStats,
}

impl Solution {
    /// Formats the path as numbered board snapshots, one blank line between
    /// steps.
    pub fn render_path(&self) -> String {
        let mut out = String::new();
        for (step, board) in self.path.iter().enumerate() {
            if step > 0 {
                out.push('\n');
            }
            out.push_str(&format!("step {step}\n{board}"));
        }
        out
    }
}

/// Runs BFS from `start` to the canonical solved board.
///
/// Returns the first (and therefore shortest) solution popped, or
/// [`SolveError::Exhausted`] once every reachable state has been expanded.
/// `start` is already validated by construction, so no other failure is
/// possible.
pub fn solve(start: Board) -> Result<Solution, SolveError> {
    let mut archive = Archive::new(start);
    let mut cursor = 0;

    while cursor < archive.len() {
        let board = *archive.get(cursor);
        if board.is_solved() {
            let path = archive.path_to(cursor);
            return Ok(Solution {
                moves: path.len() - 1,
                stats: SearchStats {
                    visited: cursor + 1,
                    generated: archive.len(),
                },
                path,
            });
        }
        for neighbor in board.neighbors(cursor) {
            archive.insert(neighbor);
        }
        cursor += 1;
    }

    Err(SolveError::Exhausted {
        visited: archive.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{CELLS, DIM, GOAL};

    fn solve_tiles(tiles: [u8; CELLS]) -> Result<Solution, SolveError> {
        solve(Board::new(tiles).unwrap())
    }

    #[test]
    fn test_solved_start_needs_zero_moves() {
        let solution = solve_tiles(GOAL).unwrap();
        assert_eq!(solution.moves, 0);
        assert_eq!(solution.path.len(), 1);
        assert_eq!(solution.stats.visited, 1);
    }

    #[test]
    fn test_one_move_from_goal() {
        let solution = solve_tiles([1, 2, 3, 4, 5, 6, 7, 0, 8]).unwrap();
        assert_eq!(solution.moves, 1);
    }

    #[test]
    fn test_blank_in_center_two_moves() {
        let solution = solve_tiles([1, 2, 3, 4, 0, 6, 7, 5, 8]).unwrap();
        assert_eq!(solution.moves, 2);
    }

    #[test]
    fn test_known_four_move_instance() {
        // distance verified against an independent BFS
        let solution = solve_tiles([0, 1, 3, 4, 2, 5, 7, 8, 6]).unwrap();
        assert_eq!(solution.moves, 4);
    }

    #[test]
    fn test_hardest_instance_takes_31_moves() {
        // one of the antipodal boards of the 8-puzzle
        let solution = solve_tiles([8, 6, 7, 2, 5, 4, 3, 0, 1]).unwrap();
        assert_eq!(solution.moves, 31);
    }

    #[test]
    fn test_path_endpoints_and_step_validity() {
        let start = [8, 6, 7, 2, 5, 4, 3, 0, 1];
        let solution = solve_tiles(start).unwrap();
        let path = &solution.path;

        assert_eq!(path[0].tiles(), &start);
        assert_eq!(path.last().unwrap().tiles(), &GOAL);
        assert_eq!(path.len(), solution.moves + 1);

        for pair in path.windows(2) {
            let diffs: Vec<usize> = (0..CELLS)
                .filter(|&i| pair[0].tiles()[i] != pair[1].tiles()[i])
                .collect();
            assert_eq!(diffs.len(), 2, "each step slides exactly one tile");
            let (a, b) = (diffs[0], diffs[1]);
            let adjacent = (a / DIM).abs_diff(b / DIM) + (a % DIM).abs_diff(b % DIM) == 1;
            assert!(adjacent, "step swaps non-adjacent cells {a} and {b}");
        }
    }

    #[test]
    fn test_unsolvable_start_exhausts() {
        // odd inversion parity: the goal sits in the other half of the
        // state space, so the search visits all 9!/2 reachable boards
        let board = Board::new([2, 8, 1, 0, 4, 3, 7, 6, 5]).unwrap();
        assert!(!board.is_solvable());
        match solve(board) {
            Err(SolveError::Exhausted { visited }) => assert_eq!(visited, 181_440),
            Ok(_) => panic!("unsolvable board must not produce a solution"),
        }
    }

    #[test]
    fn test_repeated_searches_agree() {
        let start = [0, 1, 3, 4, 2, 5, 7, 8, 6];
        let first = solve_tiles(start).unwrap();
        let second = solve_tiles(start).unwrap();
        assert_eq!(first.moves, second.moves);
        assert_eq!(first.stats.generated, second.stats.generated);
        let first_tiles: Vec<_> = first.path.iter().map(|b| *b.tiles()).collect();
        let second_tiles: Vec<_> = second.path.iter().map(|b| *b.tiles()).collect();
        assert_eq!(first_tiles, second_tiles);
    }

    #[test]
    fn test_goal_popped_before_deeper_levels_expand() {
        // a 1-move start pops at most level 0 plus the three level-1 boards
        let solution = solve_tiles([1, 2, 3, 4, 5, 6, 7, 0, 8]).unwrap();
        assert!(solution.stats.visited <= 4);
        assert!(solution.stats.generated >= solution.stats.visited);
    }

    #[test]
    fn test_render_path_snapshot() {
        let solution = solve_tiles([8, 6, 7, 2, 5, 4, 3, 0, 1]).unwrap();
        insta::assert_snapshot!(solution.render_path());
    }
}
