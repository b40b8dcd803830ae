//! Eight-tile Puzzle Solver Library
//!
//! Provides the core breadth-first-search functionality for the 3x3 sliding
//! tile puzzle: board representation, neighbor generation, an append-only
//! state archive with hashed duplicate suppression, shortest-path search,
//! and backlink-based path reconstruction, plus the text-format parser and
//! terminal animation the CLI is built on.

pub mod animation;
pub mod archive;
pub mod board;
pub mod input;
pub mod solver;

pub use board::{Board, Tiles, ValidationError, GOAL};
pub use solver::{solve, SearchStats, SolveError, Solution};
