//! Append-only archive of every board generated during one search.
//!
//! The archive doubles as the BFS queue (the driver keeps a cursor into it,
//! nothing is ever removed) and as the record that backlinks index into, so
//! entry indices stay stable for the whole search. Duplicate tile
//! arrangements are suppressed on insert with a hashed set of tile arrays,
//! which keeps the membership test O(1) instead of rescanning every entry.

use rustc_hash::FxHashSet;

use crate::board::{Board, Tiles};

/// Initial capacity for the backing storage; the reachable state space tops
/// out at 9!/2 = 181,440 boards and the vector grows toward it on demand.
const INITIAL_CAPACITY: usize = 1 << 12;

/// Owns all boards generated during one search.
pub struct Archive {
    boards: Vec<Board>,
    seen: FxHashSet<Tiles>,
}

impl Archive {
    /// Creates an archive holding just the root board.
    pub fn new(root: Board) -> Self {
        let mut boards = Vec::with_capacity(INITIAL_CAPACITY);
        let mut seen = FxHashSet::default();
        seen.insert(*root.tiles());
        boards.push(root);
        Self { boards, seen }
    }

    /// Appends `board` unless its tile arrangement is already archived.
    ///
    /// Returns the new entry's index, or `None` if the arrangement was a
    /// duplicate of any earlier entry (expanded or still pending).
    pub fn insert(&mut self, board: Board) -> Option<usize> {
        if !self.seen.insert(*board.tiles()) {
            return None;
        }
        self.boards.push(board);
        Some(self.boards.len() - 1)
    }

    /// Whether a tile arrangement exists anywhere in the archive.
    pub fn contains(&self, tiles: &Tiles) -> bool {
        self.seen.contains(tiles)
    }

    /// Number of archived boards.
    pub fn len(&self) -> usize {
        self.boards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }

    /// The board at `index`. Panics on an out-of-range index; indices are
    /// only ever produced by this archive.
    pub fn get(&self, index: usize) -> &Board {
        &self.boards[index]
    }

    /// Number of predecessor hops from `index` back to the root.
    pub fn depth(&self, index: usize) -> usize {
        let mut hops = 0;
        let mut at = index;
        while let Some(prev) = self.boards[at].predecessor() {
            hops += 1;
            at = prev;
        }
        hops
    }

    /// Reconstructs the start-to-goal path ending at `index` by walking
    /// backlinks to the root, then reversing.
    pub fn path_to(&self, index: usize) -> Vec<Board> {
        let mut path = Vec::new();
        let mut at = index;
        loop {
            path.push(self.boards[at]);
            match self.boards[at].predecessor() {
                Some(prev) => at = prev,
                None => break,
            }
        }
        path.reverse();
        path
    }
}
