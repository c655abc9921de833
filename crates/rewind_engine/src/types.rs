//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// Number of cells along one side of the board.
pub const BOARD_SIDE: usize = 3;

/// Number of cells on the board.
pub const CELL_COUNT: usize = BOARD_SIDE * BOARD_SIDE;

/// Mark placed by a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Mark {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Mark {
    /// Returns the opponent's mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Returns the mark whose turn it is after `moves` moves.
    pub fn for_step(moves: usize) -> Self {
        if moves % 2 == 0 { Mark::X } else { Mark::O }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell occupied by a mark.
    Occupied(Mark),
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(mark) => Some(mark),
        }
    }

    /// Checks if the cell is empty.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// 3x3 tic-tac-toe board.
///
/// Boards stored in a game's history are snapshots: a move produces a new
/// board through [`Board::with_mark`] instead of editing one in place.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; CELL_COUNT],
        }
    }

    /// Builds a board from cells in row-major order.
    pub fn from_cells(cells: [Cell; CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// Gets the cell at the given index (0-8).
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Checks if the cell at `index` exists and is empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// Returns a copy of this board with `mark` placed at `index`.
    ///
    /// Returns `None` if `index` is off the board.
    pub fn with_mark(&self, index: usize, mark: Mark) -> Option<Self> {
        let mut next = self.clone();
        *next.cells.get_mut(index)? = Cell::Occupied(mark);
        Some(next)
    }

    /// Returns all cells.
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Number of occupied cells.
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// Number of cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .filter(|c| **c == Cell::Occupied(mark))
            .count()
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty cells show their keypad number (1-9).
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..BOARD_SIDE {
            for col in 0..BOARD_SIDE {
                let index = row * BOARD_SIDE + col;
                let symbol = match self.cells[index] {
                    Cell::Empty => (index + 1).to_string(),
                    Cell::Occupied(mark) => mark.to_string(),
                };
                result.push_str(&symbol);
                if col < BOARD_SIDE - 1 {
                    result.push('|');
                }
            }
            if row < BOARD_SIDE - 1 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_mark_leaves_original_untouched() {
        let board = Board::new();
        let next = board.with_mark(4, Mark::X).unwrap();
        assert!(board.is_empty(4));
        assert_eq!(next.get(4), Some(Cell::Occupied(Mark::X)));
        assert_eq!(next.occupied(), 1);
    }

    #[test]
    fn test_with_mark_off_board() {
        assert!(Board::new().with_mark(9, Mark::O).is_none());
    }

    #[test]
    fn test_display_shows_keypad_numbers() {
        let board = Board::new().with_mark(0, Mark::X).unwrap();
        assert_eq!(board.display(), "X|2|3\n-+-+-\n4|5|6\n-+-+-\n7|8|9");
    }

    #[test]
    fn test_mark_for_step() {
        assert_eq!(Mark::for_step(0), Mark::X);
        assert_eq!(Mark::for_step(1), Mark::O);
        assert_eq!(Mark::for_step(8), Mark::X);
        assert_eq!(Mark::X.opponent(), Mark::O);
    }
}
