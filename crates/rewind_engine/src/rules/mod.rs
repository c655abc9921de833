//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single board. Nothing here looks at history or
//! turn order; the game state decides when to ask.

pub mod win;

pub use win::{LINES, Line, calculate_winner, winner};
