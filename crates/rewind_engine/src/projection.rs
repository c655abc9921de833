//! Read-only view of the game for rendering.

use super::position::Coordinate;
use super::rules::{Line, calculate_winner, winner};
use super::state::GameState;
use super::types::{Board, CELL_COUNT, Mark};
use serde::Serialize;
use tracing::instrument;

/// Status of the game at the current step.
///
/// Never stored; recomputed every time it is asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GameStatus {
    /// No winner yet and cells remain.
    InProgress {
        /// Mark that moves next.
        next: Mark,
    },
    /// A line is complete.
    Won {
        /// Mark that completed the line.
        winner: Mark,
        /// The completed line.
        line: Line,
    },
    /// Every cell has been played and no line is complete on the board shown.
    Draw,
}

impl GameStatus {
    /// Checks if no more moves can be made from this board.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress { .. })
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress { next } => write!(f, "Next player: {}", next),
            GameStatus::Won { winner, .. } => write!(f, "Winner: {}", winner),
            GameStatus::Draw => write!(f, "Draw"),
        }
    }
}

/// One entry in the move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveEntry {
    /// Text shown for the entry.
    pub label: String,
    /// History index this entry jumps to.
    pub step: usize,
    /// Whether this is the step last jumped to.
    pub is_bold: bool,
}

/// Everything a view needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Projection {
    /// Board at the current step.
    pub board: Board,
    /// Winning line on that board, if any.
    pub winning_line: Option<Line>,
    /// Winner, draw or next player.
    pub status: GameStatus,
    /// Move list, ordered per the display preference.
    pub moves: Vec<MoveEntry>,
    /// Step last jumped to, if no move has been made since.
    pub bold_move: Option<usize>,
}

impl Projection {
    /// Status line text.
    pub fn status_text(&self) -> String {
        self.status.to_string()
    }

    /// Whether the game is drawn at the current step.
    pub fn is_draw(&self) -> bool {
        self.status == GameStatus::Draw
    }
}

/// Describes the move that produced history entry `step`.
///
/// `cell` is the cell played for that entry, `None` for the game start.
pub fn describe_move(step: usize, cell: Option<usize>) -> String {
    match cell.and_then(Coordinate::from_index) {
        Some(coord) if step > 0 => format!("Go to move #{} {}", step, coord),
        _ => "Go to game start".to_string(),
    }
}

/// Computes the status of `board`, shown at `step`, in a game whose
/// retained history holds `moves_made` moves.
///
/// The winner comes from the board shown. A draw depends on the moves made,
/// so a drawn game still reads as drawn after jumping back into it.
#[instrument(skip(board))]
pub fn status_of(board: &Board, step: usize, moves_made: usize) -> GameStatus {
    match (calculate_winner(board), winner(board)) {
        (Some(line), Some(winner)) => GameStatus::Won { winner, line },
        _ if moves_made >= CELL_COUNT => GameStatus::Draw,
        _ => GameStatus::InProgress {
            next: Mark::for_step(step),
        },
    }
}

impl GameState {
    /// Number of moves in the retained history.
    pub fn moves_made(&self) -> usize {
        self.history.len() - 1
    }

    /// The status of the game at the current step.
    pub fn status(&self) -> GameStatus {
        status_of(self.current_board(), self.step_number, self.moves_made())
    }

    /// Builds the read-only projection for the view.
    #[instrument(skip(self), fields(step = self.step_number))]
    pub fn project(&self) -> Projection {
        let board = self.current_board().clone();
        let status = status_of(&board, self.step_number, self.moves_made());

        let mut moves: Vec<MoveEntry> = self
            .move_order
            .iter()
            .enumerate()
            .map(|(step, cell)| MoveEntry {
                label: describe_move(step, *cell),
                step,
                is_bold: self.bold_move == Some(step),
            })
            .collect();
        if !self.moves_descending {
            moves.reverse();
        }

        Projection {
            winning_line: calculate_winner(&board),
            board,
            status,
            moves,
            bold_move: self.bold_move,
        }
    }
}
