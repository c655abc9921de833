//! Keyboard mapping.

use crate::app::Focus;
use crossterm::event::KeyCode;

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the board cursor by (rows, cols).
    MoveCursor(isize, isize),
    /// Play the cell under the cursor.
    PlayCursor,
    /// Play a cell directly (0-8).
    PlayCell(usize),
    /// Select the entry above in the move list.
    SelectPrevious,
    /// Select the entry below in the move list.
    SelectNext,
    /// Jump to the selected move-list entry.
    JumpSelected,
    /// Switch focus between board and move list.
    SwitchFocus,
    /// Flip the move-list order.
    ToggleOrder,
    /// Leave the game.
    Quit,
}

/// Maps a key to an action given the current focus.
pub fn action_for(key: KeyCode, focus: Focus) -> Option<Action> {
    match (key, focus) {
        (KeyCode::Char('q') | KeyCode::Esc, _) => Some(Action::Quit),
        (KeyCode::Tab | KeyCode::BackTab, _) => Some(Action::SwitchFocus),
        (KeyCode::Char('f'), _) => Some(Action::ToggleOrder),
        (KeyCode::Char(c @ '1'..='9'), _) => c
            .to_digit(10)
            .map(|digit| Action::PlayCell(digit as usize - 1)),

        (KeyCode::Up, Focus::Board) => Some(Action::MoveCursor(-1, 0)),
        (KeyCode::Down, Focus::Board) => Some(Action::MoveCursor(1, 0)),
        (KeyCode::Left, Focus::Board) => Some(Action::MoveCursor(0, -1)),
        (KeyCode::Right, Focus::Board) => Some(Action::MoveCursor(0, 1)),
        (KeyCode::Enter | KeyCode::Char(' '), Focus::Board) => Some(Action::PlayCursor),

        (KeyCode::Up, Focus::Moves) => Some(Action::SelectPrevious),
        (KeyCode::Down, Focus::Moves) => Some(Action::SelectNext),
        (KeyCode::Enter | KeyCode::Char(' '), Focus::Moves) => Some(Action::JumpSelected),

        _ => None,
    }
}
