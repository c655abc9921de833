//! Headless replay of scripted intents.

use anyhow::Result;
use rewind_engine::{GameState, Intent, Projection};
use tracing::{info, instrument};

/// Applies `intents` to a fresh game and returns the final projection.
#[instrument(skip(intents), fields(count = intents.len()))]
pub fn replay(intents: &[Intent]) -> Projection {
    let mut game = GameState::new();
    for &intent in intents {
        game.apply(intent);
    }
    info!(step = game.step_number(), history = game.history().len(), "Replay finished");
    game.project()
}

/// Formats a projection as plain text: board, status, then the move list.
///
/// The bold entry is marked with `*`.
pub fn render_text(projection: &Projection) -> String {
    let mut out = String::new();
    out.push_str(&projection.board.display());
    out.push_str("\n\n");
    out.push_str(&projection.status_text());
    out.push('\n');
    for entry in &projection.moves {
        let marker = if entry.is_bold { '*' } else { ' ' };
        out.push_str(&format!("{} {}\n", marker, entry.label));
    }
    out
}

/// Runs the `replay` command, printing to stdout.
pub fn run(intents: &[Intent], json: bool) -> Result<()> {
    let projection = replay(intents);
    if json {
        println!("{}", serde_json::to_string_pretty(&projection)?);
    } else {
        print!("{}", render_text(&projection));
    }
    Ok(())
}
