//! History alignment invariant: history, move order and step agree.

use super::super::GameState;
use super::Invariant;

/// Invariant: history and move order have the same length, move order
/// starts with the placeholder, and the step points into history.
pub struct HistoryAlignedInvariant;

impl Invariant<GameState> for HistoryAlignedInvariant {
    fn holds(state: &GameState) -> bool {
        let history = state.history();
        let order = state.move_order();

        !history.is_empty()
            && history.len() == order.len()
            && order[0].is_none()
            && order[1..].iter().all(Option::is_some)
            && state.step_number() < history.len()
    }

    fn description() -> &'static str {
        "History and move order are aligned and the step is in range"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_holds() {
        assert!(HistoryAlignedInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_step_past_end_violates() {
        let mut state = GameState::new();
        state.play(0);
        state.step_number = 2;
        assert!(!HistoryAlignedInvariant::holds(&state));
    }

    #[test]
    fn test_missing_move_record_violates() {
        let mut state = GameState::new();
        state.play(0);
        state.move_order[1] = None;
        assert!(!HistoryAlignedInvariant::holds(&state));
    }
}
