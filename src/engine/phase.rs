//! Round phases.

use serde::{Deserialize, Serialize};

/// Where the game is in its round cycle.
///
/// ```text
/// AwaitingBid --bid--> AwaitingBidOrChallenge --bid--> (same)
///                           |
///                   challenge / spot-on
///                           v
///                     RoundResolved --next round--> AwaitingBid
///                           |
///                   one player left
///                           v
///                       GameOver
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// No bid yet this round.
    AwaitingBid,
    /// A bid stands; the turn-holder may raise or challenge.
    AwaitingBidOrChallenge,
    /// A challenge was resolved; dice are revealed until the next roll.
    RoundResolved,
    /// Exactly one player has dice left.
    GameOver,
}

impl Phase {
    /// True while bids are accepted.
    #[must_use]
    pub fn accepts_bids(self) -> bool {
        matches!(self, Phase::AwaitingBid | Phase::AwaitingBidOrChallenge)
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Phase::AwaitingBid => "awaiting the opening bid",
            Phase::AwaitingBidOrChallenge => "awaiting a raise or challenge",
            Phase::RoundResolved => "the round is resolved",
            Phase::GameOver => "the game is over",
        };
        f.write_str(text)
    }
}
