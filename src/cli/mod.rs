//! Terminal front-end.
//!
//! Collects names, then drives `Game` turn by turn: prompts humans, lets
//! bots decide, renders reveals, and loops until one player is left.

pub mod args;
pub mod render;
pub mod session;

pub use args::Args;
pub use session::{Seat, Session};

use anyhow::Result;
use dialoguer::Input;

use crate::core::PlayerId;

/// Run a full game from parsed flags. Returns the winner.
pub fn run(args: &Args) -> Result<PlayerId> {
    render::banner();

    let humans = if args.players.is_empty() {
        prompt_names()?
    } else {
        args.players.clone()
    };

    let mut session = Session::new(humans, args)?;
    session.run()
}

fn prompt_names() -> Result<Vec<String>> {
    let line: String = Input::new()
        .with_prompt("Enter names separated by spaces")
        .allow_empty(true)
        .interact_text()?;
    Ok(line.split_whitespace().map(str::to_string).collect())
}
