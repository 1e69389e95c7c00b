//! The game engine: phases, challenges, and the `Game` state machine.

pub mod challenge;
pub mod game;
pub mod phase;

pub use challenge::{ChallengeKind, ChallengeResult, Reveal};
pub use game::{Decision, Game, RoundOutcome};
pub use phase::Phase;
