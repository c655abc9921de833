//! Win detection logic for tic-tac-toe.

use super::super::types::{Board, Cell, Mark};
use tracing::instrument;

/// Three cell indices forming a row, column or diagonal.
pub type Line = [usize; 3];

/// Every winning line, in the order they are checked.
pub const LINES: [Line; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Returns the first line whose three cells hold the same mark.
///
/// Lines are checked in [`LINES`] order, so the result is deterministic
/// even for boards no legal game can reach.
#[instrument(skip(board))]
pub fn calculate_winner(board: &Board) -> Option<Line> {
    LINES.into_iter().find(|&[a, b, c]| {
        let cell = board.get(a);
        matches!(cell, Some(Cell::Occupied(_))) && cell == board.get(b) && cell == board.get(c)
    })
}

/// Returns the mark that completed a line, if any.
#[instrument(skip(board))]
pub fn winner(board: &Board) -> Option<Mark> {
    calculate_winner(board).and_then(|[a, _, _]| board.get(a).and_then(Cell::mark))
}
