//! Tic-tac-toe game state with move history and time-travel.
//!
//! The whole game lives in [`GameState`]: every board since the start, the
//! cell each move used, the step being viewed, and the move-list order.
//! Views drive it with three intents and draw from a read-only
//! [`Projection`].
//!
//! # Example
//!
//! ```
//! use rewind_engine::{GameState, GameStatus, Mark};
//!
//! let mut game = GameState::new();
//! for cell in [0, 3, 1, 4, 2] {
//!     game.play(cell);
//! }
//! let view = game.project();
//! assert_eq!(view.winning_line, Some([0, 1, 2]));
//! assert_eq!(view.status_text(), "Winner: X");
//!
//! // Go back two moves and take a different branch.
//! game.jump_to(3);
//! game.play(8);
//! assert_eq!(game.history().len(), 5);
//! assert_eq!(game.status(), GameStatus::InProgress { next: Mark::X });
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod intent;
pub mod invariants;
mod position;
mod projection;
pub mod rules;
mod state;
mod types;

pub use error::{EngineError, ParseIntentError};
pub use intent::Intent;
pub use position::Coordinate;
pub use projection::{GameStatus, MoveEntry, Projection, describe_move, status_of};
pub use rules::{LINES, Line, calculate_winner};
pub use state::GameState;
pub use types::{BOARD_SIDE, Board, CELL_COUNT, Cell, Mark};
