//! Reasons an intent was ignored.

use super::rules::Line;

/// Why [`GameState`](crate::GameState) ignored an intent.
///
/// The infallible intents drop these after logging them; the `try_*`
/// variants hand them back to the caller. Deserializing a state that
/// breaks the game invariants also reports one.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum EngineError {
    /// The cell index is not on the board.
    #[display("Cell {} is off the board (must be 0-8)", _0)]
    CellOutOfRange(usize),

    /// The cell is already occupied on the current board.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(usize),

    /// The current board already has a winning line.
    #[display("Game is already over (line {:?})", _0)]
    GameOver(Line),

    /// The step is not in the retained history.
    #[display("Step {} is out of range (history has {} entries)", step, len)]
    StepOutOfRange {
        /// Requested step.
        step: usize,
        /// History length at the time of the request.
        len: usize,
    },

    /// A deserialized state breaks the game invariants.
    #[display("Invalid game state: {}", _0)]
    InvalidState(String),
}

impl std::error::Error for EngineError {}

/// Error parsing an [`Intent`](crate::Intent) from text.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Cannot parse intent '{}': {}", token, reason)]
pub struct ParseIntentError {
    /// The offending token.
    pub token: String,
    /// What was wrong with it.
    pub reason: &'static str,
}
