//! First-class intents for the game state.
//!
//! Views turn user input into an [`Intent`] and hand it to
//! [`GameState::apply`], so every front end drives the game through the
//! same entry point.

use super::error::ParseIntentError;
use super::state::GameState;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Something the player asked the game to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// Place the next mark on a cell (0-8).
    Play(usize),
    /// Show and play from a past step.
    JumpTo(usize),
    /// Flip the move-list order.
    ToggleOrder,
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Intent::Play(cell) => write!(f, "play:{}", cell),
            Intent::JumpTo(step) => write!(f, "jump:{}", step),
            Intent::ToggleOrder => write!(f, "toggle"),
        }
    }
}

impl FromStr for Intent {
    type Err = ParseIntentError;

    /// Parses `play:<cell>`, `jump:<step>` or `toggle`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        let err = |reason| ParseIntentError {
            token: token.to_string(),
            reason,
        };

        if token.eq_ignore_ascii_case("toggle") {
            return Ok(Intent::ToggleOrder);
        }

        let (verb, arg) = token
            .split_once(':')
            .ok_or_else(|| err("expected play:<cell>, jump:<step> or toggle"))?;
        let value: usize = arg
            .trim()
            .parse()
            .map_err(|_| err("argument is not a non-negative integer"))?;

        match verb.trim().to_ascii_lowercase().as_str() {
            "play" => Ok(Intent::Play(value)),
            "jump" => Ok(Intent::JumpTo(value)),
            _ => Err(err("unknown verb")),
        }
    }
}

impl GameState {
    /// Dispatches an intent to the matching operation.
    #[instrument(skip(self))]
    pub fn apply(&mut self, intent: Intent) {
        match intent {
            Intent::Play(cell) => self.play(cell),
            Intent::JumpTo(step) => self.jump_to(step),
            Intent::ToggleOrder => self.toggle_order(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_intents() {
        assert_eq!("play:4".parse(), Ok(Intent::Play(4)));
        assert_eq!(" JUMP: 2 ".parse(), Ok(Intent::JumpTo(2)));
        assert_eq!("toggle".parse(), Ok(Intent::ToggleOrder));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = "play:x".parse::<Intent>().unwrap_err();
        assert_eq!(err.token, "play:x");
        assert!("undo:1".parse::<Intent>().is_err());
        assert!("play".parse::<Intent>().is_err());
        assert!("play:-1".parse::<Intent>().is_err());
    }

    #[test]
    fn test_display_parses_back() {
        for intent in [Intent::Play(8), Intent::JumpTo(0), Intent::ToggleOrder] {
            assert_eq!(intent.to_string().parse(), Ok(intent));
        }
    }

    #[test]
    fn test_intents_from_json() {
        let intents: Vec<Intent> =
            serde_json::from_str(r#"[{"play": 4}, {"jump_to": 0}, "toggle_order"]"#).unwrap();
        assert_eq!(
            intents,
            vec![Intent::Play(4), Intent::JumpTo(0), Intent::ToggleOrder]
        );
    }

    #[test]
    fn test_apply_dispatches() {
        let mut state = GameState::new();
        state.apply(Intent::Play(4));
        state.apply(Intent::Play(0));
        state.apply(Intent::JumpTo(1));
        state.apply(Intent::ToggleOrder);
        assert_eq!(state.step_number(), 1);
        assert_eq!(state.history().len(), 3);
        assert!(!state.moves_descending());
    }
}
