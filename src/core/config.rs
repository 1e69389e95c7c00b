//! Game configuration.
//!
//! `GameConfig` fixes the table rules for a whole game:
//! - how many dice each player starts with
//! - how many faces each die has
//! - how wild dice behave (`WildRule`)
//! - whether spot-on calls are allowed
//! - whether bids may claim more dice than are in play
//!
//! The engine validates the configuration once, at game start.

use serde::{Deserialize, Serialize};

use crate::error::{GameError, GameResult};
use crate::rules::WildRule;

/// Minimum number of players for a game.
pub const MIN_PLAYERS: usize = 2;

/// Maximum number of players (seats are `u8`).
pub const MAX_PLAYERS: usize = 255;

/// Complete table rules.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Dice each player starts with (default 5).
    pub dice_per_player: usize,

    /// Faces per die (default 6).
    pub faces: u8,

    /// How wild dice count and how bids convert to and from wilds.
    pub wild_rule: WildRule,

    /// Allow a player to declare the current bid exactly right.
    pub allow_spot_on: bool,

    /// Reject bids claiming more dice than are on the table.
    pub cap_bids_at_dice_in_play: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            dice_per_player: 5,
            faces: 6,
            wild_rule: WildRule::default(),
            allow_spot_on: false,
            cap_bids_at_dice_in_play: true,
        }
    }
}

impl GameConfig {
    /// Set the starting dice count.
    #[must_use]
    pub fn with_dice_per_player(mut self, dice: usize) -> Self {
        self.dice_per_player = dice;
        self
    }

    /// Set the number of faces per die.
    #[must_use]
    pub fn with_faces(mut self, faces: u8) -> Self {
        self.faces = faces;
        self
    }

    /// Set the wild rule.
    #[must_use]
    pub fn with_wild_rule(mut self, rule: WildRule) -> Self {
        self.wild_rule = rule;
        self
    }

    /// Enable or disable spot-on calls.
    #[must_use]
    pub fn with_spot_on(mut self, allow: bool) -> Self {
        self.allow_spot_on = allow;
        self
    }

    /// Enable or disable the dice-in-play cap on bid quantity.
    #[must_use]
    pub fn with_bid_cap(mut self, cap: bool) -> Self {
        self.cap_bids_at_dice_in_play = cap;
        self
    }

    /// Check the rules against a table of `player_count` players.
    pub fn validate(&self, player_count: usize) -> GameResult<()> {
        if player_count < MIN_PLAYERS {
            return Err(GameError::invalid_config(format!(
                "need at least {} players, got {}",
                MIN_PLAYERS, player_count
            )));
        }
        if player_count > MAX_PLAYERS {
            return Err(GameError::invalid_config(format!(
                "at most {} players supported, got {}",
                MAX_PLAYERS, player_count
            )));
        }
        if self.dice_per_player < 1 {
            return Err(GameError::invalid_config("each player needs at least 1 die"));
        }
        let total_dice = player_count
            .checked_mul(self.dice_per_player)
            .and_then(|total| u32::try_from(total).ok());
        if total_dice.is_none() {
            return Err(GameError::invalid_config(format!(
                "{} players with {} dice each is more dice than a bid can count",
                player_count, self.dice_per_player
            )));
        }
        if self.faces < 2 {
            return Err(GameError::invalid_config(format!(
                "dice need at least 2 faces, got {}",
                self.faces
            )));
        }
        Ok(())
    }
}
