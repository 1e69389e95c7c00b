//! Core value types: players, bids, dice randomness, configuration.
//!
//! Nothing here knows about turn order or round flow; that lives in
//! `engine`.

pub mod bid;
pub mod config;
pub mod player;
pub mod rng;

pub use bid::{Bid, BidRecord};
pub use config::{GameConfig, MAX_PLAYERS, MIN_PLAYERS};
pub use player::{DicePool, Player, PlayerId, PlayerMap};
pub use rng::{DiceRoller, GameRng, ScriptedDice};
