//! Bids: claims about the dice hidden across the whole table.
//!
//! A bid `(quantity, face)` asserts that at least `quantity` dice showing
//! `face` are in play. Whether one bid outranks another depends on the
//! configured `WildRule`; see `rules::wild`.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// A claim of at least `quantity` dice showing `face`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bid {
    /// How many dice are claimed.
    pub quantity: u32,
    /// The claimed face value.
    pub face: u8,
}

impl Bid {
    /// Create a new bid.
    #[must_use]
    pub const fn new(quantity: u32, face: u8) -> Self {
        Self { quantity, face }
    }
}

impl std::fmt::Display for Bid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x [{}]", self.quantity, self.face)
    }
}

/// A bid together with who made it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BidRecord {
    /// The bidder.
    pub player: PlayerId,

    /// The claim.
    pub bid: Bid,

    /// Position within the round, starting at 0.
    pub sequence: u32,
}

impl BidRecord {
    /// Create a new bid record.
    #[must_use]
    pub fn new(player: PlayerId, bid: Bid, sequence: u32) -> Self {
        Self {
            player,
            bid,
            sequence,
        }
    }
}
