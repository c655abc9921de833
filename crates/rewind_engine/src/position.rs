//! Row/column coordinates for board cells.

use super::types::{BOARD_SIDE, CELL_COUNT};
use serde::Serialize;

/// A cell position as `(row, col)`, both zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Coordinate {
    /// Row, counted from the top.
    pub row: usize,
    /// Column, counted from the left.
    pub col: usize,
}

impl Coordinate {
    /// Creates a coordinate from a row-major cell index.
    ///
    /// Returns `None` if the index is off the board.
    pub fn from_index(index: usize) -> Option<Self> {
        if index >= CELL_COUNT {
            return None;
        }
        let col = index % BOARD_SIDE;
        let row = (index - col) / BOARD_SIDE;
        Some(Self { row, col })
    }

    /// Converts the coordinate back to a row-major cell index.
    pub fn to_index(self) -> usize {
        self.row * BOARD_SIDE + self.col
    }

    /// Moves by the given row/column offsets, staying on the board.
    ///
    /// Returns `None` when the move would leave the board.
    pub fn offset(self, rows: isize, cols: isize) -> Option<Self> {
        let row = self.row.checked_add_signed(rows)?;
        let col = self.col.checked_add_signed(cols)?;
        (row < BOARD_SIDE && col < BOARD_SIDE).then_some(Self { row, col })
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip_corners() {
        assert_eq!(Coordinate::from_index(0), Some(Coordinate { row: 0, col: 0 }));
        assert_eq!(Coordinate::from_index(5), Some(Coordinate { row: 1, col: 2 }));
        assert_eq!(Coordinate::from_index(8).map(Coordinate::to_index), Some(8));
        assert_eq!(Coordinate::from_index(9), None);
    }

    #[test]
    fn test_offset_stays_on_board() {
        let center = Coordinate { row: 1, col: 1 };
        assert_eq!(center.offset(-1, 0), Some(Coordinate { row: 0, col: 1 }));
        let corner = Coordinate { row: 0, col: 0 };
        assert_eq!(corner.offset(-1, 0), None);
        assert_eq!(corner.offset(0, -1), None);
        assert_eq!(Coordinate { row: 2, col: 2 }.offset(0, 1), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Coordinate { row: 2, col: 1 }.to_string(), "(2,1)");
    }
}
