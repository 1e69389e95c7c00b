//! # liars-dice
//!
//! A rules engine for Liar's Dice, plus a terminal front-end.
//!
//! ## Design Principles
//!
//! 1. **Pure engine**: `Game` does no I/O. A display layer calls in, renders
//!    the returned values, and decides who may see which dice.
//!
//! 2. **Injected randomness**: every roll goes through `DiceRoller`, so games
//!    replay exactly from a seed and tests can script reveals.
//!
//! 3. **Rules as configuration**: die size, dice count, wild dice, and
//!    spot-on calls are fields of `GameConfig`, not hard-coded.
//!
//! ## Modules
//!
//! - `core`: players, bids, RNG, configuration
//! - `rules`: wild dice, bid ordering, odds
//! - `engine`: phases, challenges, the `Game` state machine
//! - `players`: computer opponents
//! - `error`: `GameError`
//! - `cli`: terminal front-end (feature `cli`)

pub mod core;
pub mod engine;
pub mod error;
pub mod players;
pub mod rules;

#[cfg(feature = "cli")]
pub mod cli;

// Re-export commonly used types
pub use crate::core::{
    Bid, BidRecord, DiceRoller, GameConfig, GameRng, Player, PlayerId, PlayerMap, ScriptedDice,
};

pub use crate::engine::{
    ChallengeKind, ChallengeResult, Decision, Game, Phase, Reveal, RoundOutcome,
};

pub use crate::error::{BidRejection, GameError, GameResult, Operation};

pub use crate::players::{Policy, RandomBidder, TableView};

pub use crate::rules::{bid_odds, BidOdds, WildRule, WILD_FACE};
