//! Game state with move history and time-travel.
//!
//! [`GameState`] is the single owner of everything the game remembers:
//! the board after every move, which cell each move used, the step being
//! viewed, and the move-list display preferences. It changes only through
//! the three intents [`play`](GameState::play), [`jump_to`](GameState::jump_to)
//! and [`toggle_order`](GameState::toggle_order). Each takes `&mut self` and
//! completes before returning.

use super::error::EngineError;
use super::invariants::{GameInvariants, InvariantSet};
use super::rules::calculate_winner;
use super::types::{Board, Mark};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Full game state: history, current step and display preferences.
///
/// Deserializing checks the game invariants and rejects snapshots that
/// break them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGameState")]
pub struct GameState {
    /// Board after each move; entry 0 is the empty board.
    pub(crate) history: Vec<Board>,
    /// Cell played to reach each history entry; entry 0 is `None`.
    pub(crate) move_order: Vec<Option<usize>>,
    /// Index into `history` of the board being shown and played from.
    pub(crate) step_number: usize,
    /// Step most recently jumped to, cleared by the next move.
    pub(crate) bold_move: Option<usize>,
    /// Whether the move list reads from game start downwards.
    pub(crate) moves_descending: bool,
}

impl GameState {
    /// Creates a fresh game: empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![Board::new()],
            move_order: vec![None],
            step_number: 0,
            bold_move: None,
            moves_descending: true,
        }
    }

    /// Returns the retained history of boards.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Returns the cell played for each history entry.
    pub fn move_order(&self) -> &[Option<usize>] {
        &self.move_order
    }

    /// Returns the current step.
    pub fn step_number(&self) -> usize {
        self.step_number
    }

    /// Returns the step last jumped to, if no move has been made since.
    pub fn bold_move(&self) -> Option<usize> {
        self.bold_move
    }

    /// Returns whether the move list is shown in chronological order.
    pub fn moves_descending(&self) -> bool {
        self.moves_descending
    }

    /// Whether X moves next. Always derived from the current step.
    pub fn x_is_next(&self) -> bool {
        self.step_number % 2 == 0
    }

    /// The mark placed by the next move.
    pub fn next_mark(&self) -> Mark {
        Mark::for_step(self.step_number)
    }

    /// The board at the current step.
    pub fn current_board(&self) -> &Board {
        // step_number < history.len() is maintained by every intent
        &self.history[self.step_number]
    }

    /// Places the next mark on `cell`, discarding any history past the
    /// current step.
    ///
    /// Occupied cells, off-board cells and boards that already have a winner
    /// are ignored without changing anything.
    #[instrument(skip(self), fields(step = self.step_number))]
    pub fn play(&mut self, cell: usize) {
        if let Err(e) = self.try_play(cell) {
            debug!(error = %e, "Move ignored");
        }
    }

    /// Like [`play`](Self::play), but reports why a move was ignored.
    ///
    /// Returns the mark that was placed.
    ///
    /// # Errors
    ///
    /// - [`EngineError::CellOutOfRange`] if `cell > 8`
    /// - [`EngineError::GameOver`] if the current board has a winning line
    /// - [`EngineError::CellOccupied`] if the cell is already taken
    #[instrument(skip(self), fields(step = self.step_number))]
    pub fn try_play(&mut self, cell: usize) -> Result<Mark, EngineError> {
        let current = self.current_board();
        if let Some(line) = calculate_winner(current) {
            return Err(EngineError::GameOver(line));
        }
        if current.get(cell).is_none() {
            return Err(EngineError::CellOutOfRange(cell));
        }
        if !current.is_empty(cell) {
            return Err(EngineError::CellOccupied(cell));
        }

        let mark = self.next_mark();
        let next = current
            .with_mark(cell, mark)
            .ok_or(EngineError::CellOutOfRange(cell))?;

        self.history.truncate(self.step_number + 1);
        self.move_order.truncate(self.step_number + 1);
        self.history.push(next);
        self.move_order.push(Some(cell));
        self.step_number = self.history.len() - 1;
        self.bold_move = None;

        debug!(%mark, cell, step = self.step_number, "Move played");
        self.debug_check();
        Ok(mark)
    }

    /// Shows the board at `step` and makes it the one played from.
    ///
    /// History is kept until the next move. Steps past the end of the
    /// retained history are ignored.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, step: usize) {
        if let Err(e) = self.try_jump_to(step) {
            debug!(error = %e, "Jump ignored");
        }
    }

    /// Like [`jump_to`](Self::jump_to), but reports an out-of-range step.
    ///
    /// # Errors
    ///
    /// [`EngineError::StepOutOfRange`] if `step >= history.len()`.
    #[instrument(skip(self))]
    pub fn try_jump_to(&mut self, step: usize) -> Result<(), EngineError> {
        let len = self.history.len();
        if step >= len {
            return Err(EngineError::StepOutOfRange { step, len });
        }
        self.step_number = step;
        self.bold_move = Some(step);
        debug!(step, x_is_next = self.x_is_next(), "Jumped");
        self.debug_check();
        Ok(())
    }

    /// Flips the move-list order. Nothing else changes.
    #[instrument(skip(self))]
    pub fn toggle_order(&mut self) {
        self.moves_descending = !self.moves_descending;
        debug!(moves_descending = self.moves_descending, "Move order toggled");
    }

    fn debug_check(&self) {
        debug_assert!(
            GameInvariants::check_all(self).is_ok(),
            "Game invariants violated: {:?}",
            GameInvariants::check_all(self)
        );
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Unchecked field layout of a serialized [`GameState`].
#[derive(Deserialize)]
struct RawGameState {
    history: Vec<Board>,
    move_order: Vec<Option<usize>>,
    step_number: usize,
    bold_move: Option<usize>,
    moves_descending: bool,
}

impl TryFrom<RawGameState> for GameState {
    type Error = EngineError;

    fn try_from(raw: RawGameState) -> Result<Self, Self::Error> {
        let state = Self {
            history: raw.history,
            move_order: raw.move_order,
            step_number: raw.step_number,
            bold_move: raw.bold_move,
            moves_descending: raw.moves_descending,
        };
        if let Some(step) = state.bold_move
            && step >= state.history.len()
        {
            return Err(EngineError::InvalidState(format!(
                "bold move {} is past the end of history",
                step
            )));
        }
        GameInvariants::check_all(&state).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            EngineError::InvalidState(descriptions)
        })?;
        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Cell;

    fn played(cells: &[usize]) -> GameState {
        let mut state = GameState::new();
        for &cell in cells {
            state.try_play(cell).unwrap();
        }
        state
    }

    #[test]
    fn test_initial_state() {
        let state = GameState::new();
        assert_eq!(state.history().len(), 1);
        assert_eq!(state.move_order(), &[None]);
        assert_eq!(state.step_number(), 0);
        assert!(state.x_is_next());
        assert_eq!(state.bold_move(), None);
        assert!(state.moves_descending());
        assert_eq!(state.current_board(), &Board::new());
    }

    #[test]
    fn test_marks_alternate() {
        let mut state = GameState::new();
        assert_eq!(state.try_play(4), Ok(Mark::X));
        assert_eq!(state.try_play(0), Ok(Mark::O));
        assert_eq!(state.try_play(8), Ok(Mark::X));
        assert_eq!(state.current_board().get(0), Some(Cell::Occupied(Mark::O)));
        assert_eq!(state.move_order(), &[None, Some(4), Some(0), Some(8)]);
        assert!(!state.x_is_next());
    }

    #[test]
    fn test_occupied_cell_is_noop() {
        let mut state = played(&[4]);
        let before = state.clone();
        assert_eq!(state.try_play(4), Err(EngineError::CellOccupied(4)));
        state.play(4);
        assert_eq!(state, before);
    }

    #[test]
    fn test_off_board_cell_is_noop() {
        let mut state = played(&[4]);
        let before = state.clone();
        assert_eq!(state.try_play(9), Err(EngineError::CellOutOfRange(9)));
        assert_eq!(state, before);
    }

    #[test]
    fn test_play_after_win_is_noop() {
        let mut state = played(&[0, 3, 1, 4, 2]);
        let before = state.clone();
        assert_eq!(state.try_play(8), Err(EngineError::GameOver([0, 1, 2])));
        state.play(5);
        assert_eq!(state, before);
    }

    #[test]
    fn test_jump_keeps_history_and_sets_bold() {
        let mut state = played(&[0, 1, 2, 3]);
        state.jump_to(1);
        assert_eq!(state.step_number(), 1);
        assert_eq!(state.history().len(), 5);
        assert_eq!(state.bold_move(), Some(1));
        assert!(!state.x_is_next());
    }

    #[test]
    fn test_jump_out_of_range_is_rejected() {
        let mut state = played(&[0, 1]);
        let before = state.clone();
        assert_eq!(
            state.try_jump_to(3),
            Err(EngineError::StepOutOfRange { step: 3, len: 3 })
        );
        state.jump_to(100);
        assert_eq!(state, before);
    }

    #[test]
    fn test_play_after_jump_truncates_and_clears_bold() {
        let mut state = played(&[0, 1, 2, 3]);
        state.jump_to(2);
        assert_eq!(state.try_play(8), Ok(Mark::X));
        assert_eq!(state.history().len(), 4);
        assert_eq!(state.move_order(), &[None, Some(0), Some(1), Some(8)]);
        assert_eq!(state.step_number(), 3);
        assert_eq!(state.bold_move(), None);
        assert!(state.current_board().is_empty(2));
    }

    #[test]
    fn test_jump_back_past_win_allows_play() {
        let mut state = played(&[0, 3, 1, 4, 2]);
        state.jump_to(4);
        assert_eq!(state.try_play(5), Ok(Mark::X));
        assert_eq!(state.history().len(), 6);
    }

    #[test]
    fn test_snapshot_round_trips() {
        let mut state = played(&[4, 0, 8]);
        state.jump_to(1);
        state.toggle_order();
        let json = serde_json::to_string(&state).unwrap();
        let restored: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, state);
    }

    #[test]
    fn test_snapshot_with_step_past_history_is_rejected() {
        let json = r#"{
            "history": [{"cells": ["Empty","Empty","Empty","Empty","Empty","Empty","Empty","Empty","Empty"]}],
            "move_order": [null],
            "step_number": 5,
            "bold_move": null,
            "moves_descending": true
        }"#;
        let err = serde_json::from_str::<GameState>(json).unwrap_err();
        assert!(err.to_string().contains("step is in range"));
    }

    #[test]
    fn test_snapshot_with_forged_board_is_rejected() {
        let mut state = played(&[4]);
        state.history[1] = Board::new().with_mark(4, Mark::O).unwrap();
        let json = serde_json::to_string(&state).unwrap();
        assert!(serde_json::from_str::<GameState>(&json).is_err());
    }

    #[test]
    fn test_snapshot_with_stray_bold_move_is_rejected() {
        let mut state = played(&[4]);
        state.bold_move = Some(7);
        let json = serde_json::to_string(&state).unwrap();
        let err = serde_json::from_str::<GameState>(&json).unwrap_err();
        assert!(err.to_string().contains("bold move 7"));
    }

    #[test]
    fn test_toggle_order_touches_nothing_else() {
        let mut state = played(&[0, 1]);
        state.jump_to(1);
        let before = state.clone();
        state.toggle_order();
        assert!(!state.moves_descending());
        assert_eq!(state.history(), before.history());
        assert_eq!(state.step_number(), before.step_number());
        assert_eq!(state.bold_move(), before.bold_move());
        state.toggle_order();
        assert_eq!(state, before);
    }
}
