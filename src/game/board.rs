//! Board geometry: positions and renderable cells.

// Coordinate math uses intentional casts between i32 and u16
#![allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]

use std::cmp::Ordering;

/// A cell coordinate on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Row index (0 = top).
    pub row: u16,
    /// Column index (0 = left).
    pub col: u16,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(row: u16, col: u16) -> Self {
        Self { row, col }
    }

    /// Check whether this position lies on a board of the given size.
    #[must_use]
    pub const fn in_bounds(self, board_size: u16) -> bool {
        self.row < board_size && self.col < board_size
    }

    /// One greedy chase step toward `target`.
    ///
    /// Each axis moves one cell toward the target independently, or stays
    /// if already aligned on that axis. Diagonal steps happen when both
    /// axes are misaligned. No obstacle avoidance.
    #[must_use]
    pub fn step_toward(self, target: Self) -> Self {
        let row = match self.row.cmp(&target.row) {
            Ordering::Less => self.row + 1,
            Ordering::Greater => self.row - 1,
            Ordering::Equal => self.row,
        };
        let col = match self.col.cmp(&target.col) {
            Ordering::Less => self.col + 1,
            Ordering::Greater => self.col - 1,
            Ordering::Equal => self.col,
        };
        Self { row, col }
    }

    /// Apply a `(row, col)` delta, clamping each axis to
    /// `[0, board_size - 1]`.
    ///
    /// Moving into a wall stops at the edge rather than failing.
    #[must_use]
    pub fn offset_clamped(self, delta: (i32, i32), board_size: u16) -> Self {
        let max = i32::from(board_size) - 1;
        let row = (i32::from(self.row) + delta.0).clamp(0, max);
        let col = (i32::from(self.col) + delta.1).clamp(0, max);
        Self {
            row: row as u16,
            col: col as u16,
        }
    }
}

/// What a board cell holds, for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// Nothing here.
    Empty,
    /// The player token.
    Player,
    /// A pursuing enemy.
    Enemy,
    /// A permanent wreck obstacle.
    Wreck,
}

impl Cell {
    /// The classic single-character symbol for this cell.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Player => '@',
            Cell::Enemy => 'X',
            Cell::Wreck => '*',
        }
    }
}
