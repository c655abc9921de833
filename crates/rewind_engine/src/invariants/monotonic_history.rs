//! Monotonic history invariant: each entry adds exactly one mark.

use super::super::{Board, Cell, GameState, Mark};
use super::Invariant;

/// Invariant: replaying the move order from an empty board reproduces
/// every history entry.
///
/// Entry k places `X` when k is odd and `O` when k is even, on a cell that
/// was empty in entry k-1. Cells never change once set.
pub struct MonotonicHistoryInvariant;

impl Invariant<GameState> for MonotonicHistoryInvariant {
    fn holds(state: &GameState) -> bool {
        let history = state.history();
        if history.first() != Some(&Board::new()) {
            return false;
        }

        let mut replayed = Board::new();
        for (step, (board, cell)) in history.iter().zip(state.move_order()).enumerate().skip(1) {
            let Some(cell) = *cell else {
                return false;
            };
            if replayed.get(cell) != Some(Cell::Empty) {
                return false;
            }
            let Some(next) = replayed.with_mark(cell, Mark::for_step(step - 1)) else {
                return false;
            };
            if next != *board {
                return false;
            }
            replayed = next;
        }
        true
    }

    fn description() -> &'static str {
        "Each history entry adds one alternating mark to an empty cell"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_played_game_holds() {
        let mut state = GameState::new();
        for cell in [0, 4, 8, 2, 6] {
            state.play(cell);
        }
        assert!(MonotonicHistoryInvariant::holds(&state));
    }

    #[test]
    fn test_overwritten_cell_violates() {
        let mut state = GameState::new();
        state.play(0);
        state.play(1);
        state.history[2] = Board::new().with_mark(0, Mark::O).unwrap();
        state.move_order[2] = Some(0);
        assert!(!MonotonicHistoryInvariant::holds(&state));
    }

    #[test]
    fn test_wrong_mark_violates() {
        let mut state = GameState::new();
        state.play(0);
        state.history[1] = Board::new().with_mark(0, Mark::O).unwrap();
        assert!(!MonotonicHistoryInvariant::holds(&state));
    }
}
