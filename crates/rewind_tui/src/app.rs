//! Application state and logic.

use crate::input::Action;
use rewind_engine::{Coordinate, GameState, Intent, Projection};
use tracing::{debug, instrument};

/// Which panel receives arrow keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The board; arrows move the cursor.
    Board,
    /// The move list; arrows pick an entry.
    Moves,
}

/// Main application state.
///
/// Owns the single [`GameState`] and the view-only state around it.
#[derive(Debug, Clone)]
pub struct App {
    game: GameState,
    cursor: Coordinate,
    focus: Focus,
    selected_step: usize,
    show_help: bool,
}

impl App {
    /// Creates a new application with a fresh game.
    pub fn new(show_help: bool) -> Self {
        Self {
            game: GameState::new(),
            cursor: Coordinate { row: 1, col: 1 },
            focus: Focus::Board,
            selected_step: 0,
            show_help,
        }
    }

    /// Gets the game.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Projection of the game for drawing.
    pub fn projection(&self) -> Projection {
        self.game.project()
    }

    /// Board cursor.
    pub fn cursor(&self) -> Coordinate {
        self.cursor
    }

    /// Panel with keyboard focus.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// History step highlighted in the move list.
    pub fn selected_step(&self) -> usize {
        self.selected_step
    }

    /// Whether to draw the key help line.
    pub fn show_help(&self) -> bool {
        self.show_help
    }

    /// Applies an action. Returns `false` when the app should exit.
    #[instrument(skip(self))]
    pub fn handle(&mut self, action: Action) -> bool {
        debug!(?action, "Handling action");

        match action {
            Action::Quit => return false,
            Action::MoveCursor(rows, cols) => {
                if let Some(next) = self.cursor.offset(rows, cols) {
                    self.cursor = next;
                }
            }
            Action::PlayCursor => self.dispatch(Intent::Play(self.cursor.to_index())),
            Action::PlayCell(cell) => {
                if let Some(coord) = Coordinate::from_index(cell) {
                    self.cursor = coord;
                }
                self.dispatch(Intent::Play(cell));
            }
            Action::SelectPrevious => self.move_selection(-1),
            Action::SelectNext => self.move_selection(1),
            Action::JumpSelected => self.dispatch(Intent::JumpTo(self.selected_step)),
            Action::SwitchFocus => {
                self.focus = match self.focus {
                    Focus::Board => Focus::Moves,
                    Focus::Moves => Focus::Board,
                };
            }
            Action::ToggleOrder => self.dispatch(Intent::ToggleOrder),
        }
        true
    }

    fn dispatch(&mut self, intent: Intent) {
        self.game.apply(intent);
        // Follow the game to the step it now shows
        self.selected_step = self.game.step_number();
    }

    /// Moves the selection by `delta` rows in display order.
    fn move_selection(&mut self, delta: isize) {
        let moves = self.game.project().moves;
        let Some(row) = moves.iter().position(|m| m.step == self.selected_step) else {
            self.selected_step = self.game.step_number();
            return;
        };
        if let Some(entry) = row.checked_add_signed(delta).and_then(|r| moves.get(r)) {
            self.selected_step = entry.step;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rewind_engine::{Cell, Mark};

    #[test]
    fn test_cursor_play() {
        let mut app = App::new(true);
        assert!(app.handle(Action::MoveCursor(-1, -1)));
        assert!(app.handle(Action::PlayCursor));
        assert_eq!(app.game().current_board().get(0), Some(Cell::Occupied(Mark::X)));
        assert_eq!(app.selected_step(), 1);
    }

    #[test]
    fn test_cursor_stops_at_edge() {
        let mut app = App::new(true);
        app.handle(Action::MoveCursor(0, 1));
        app.handle(Action::MoveCursor(0, 1));
        assert_eq!(app.cursor(), Coordinate { row: 1, col: 2 });
    }

    #[test]
    fn test_digit_moves_cursor_and_plays() {
        let mut app = App::new(true);
        app.handle(Action::PlayCell(8));
        assert_eq!(app.cursor(), Coordinate { row: 2, col: 2 });
        assert_eq!(app.game().step_number(), 1);
    }

    #[test]
    fn test_select_and_jump() {
        let mut app = App::new(true);
        for cell in [0, 4, 8] {
            app.handle(Action::PlayCell(cell));
        }
        app.handle(Action::SwitchFocus);
        assert_eq!(app.focus(), Focus::Moves);

        app.handle(Action::SelectPrevious);
        app.handle(Action::SelectPrevious);
        assert_eq!(app.selected_step(), 1);
        app.handle(Action::JumpSelected);
        assert_eq!(app.game().step_number(), 1);
        assert_eq!(app.game().bold_move(), Some(1));
        assert_eq!(app.game().history().len(), 4);
    }

    #[test]
    fn test_selection_follows_display_order() {
        let mut app = App::new(true);
        for cell in [0, 4] {
            app.handle(Action::PlayCell(cell));
        }
        app.handle(Action::ToggleOrder);
        // Latest first: [2, 1, 0]; step 2 is at the top
        app.handle(Action::SelectPrevious);
        assert_eq!(app.selected_step(), 2);
        app.handle(Action::SelectNext);
        assert_eq!(app.selected_step(), 1);
    }

    #[test]
    fn test_quit() {
        let mut app = App::new(false);
        assert!(!app.handle(Action::Quit));
        assert!(!app.show_help());
    }
}
