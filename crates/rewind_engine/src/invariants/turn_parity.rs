//! Turn parity invariant: the next mark matches the board being played.

use super::super::{GameState, Mark};
use super::Invariant;

/// Invariant: X is next exactly on even steps, and the board at the
/// current step has as many X marks as O marks (X next) or one more
/// (O next).
pub struct TurnParityInvariant;

impl Invariant<GameState> for TurnParityInvariant {
    fn holds(state: &GameState) -> bool {
        let Some(board) = state.history().get(state.step_number()) else {
            return false;
        };
        let xs = board.count(Mark::X);
        let os = board.count(Mark::O);

        state.x_is_next() == (state.step_number() % 2 == 0)
            && xs + os == state.step_number()
            && if state.x_is_next() { xs == os } else { xs == os + 1 }
    }

    fn description() -> &'static str {
        "X is next on even steps and mark counts match the step"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_holds_after_jumps() {
        let mut state = GameState::new();
        for cell in [0, 1, 2, 3, 4] {
            state.play(cell);
        }
        for step in [3, 0, 5, 2] {
            state.jump_to(step);
            assert!(TurnParityInvariant::holds(&state));
        }
    }

    #[test]
    fn test_stale_step_violates() {
        let mut state = GameState::new();
        state.play(0);
        state.play(1);
        state.history.truncate(2);
        state.move_order.truncate(2);
        state.step_number = 1;
        state.history[1] = state.history[1].with_mark(5, Mark::O).unwrap();
        assert!(!TurnParityInvariant::holds(&state));
    }
}
