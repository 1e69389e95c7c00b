//! Challenge outcomes and the dice reveal.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Bid, DicePool, Player, PlayerId};
use crate::rules::WildRule;

/// Which call ended the round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChallengeKind {
    /// "Liar": the bid is claimed to be too high.
    Bluff,
    /// The bid is claimed to be exactly right.
    SpotOn,
}

/// Every surviving player's dice at the moment of a challenge, in turn order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reveal {
    hands: Vec<(PlayerId, DicePool)>,
}

impl Reveal {
    /// Snapshot the given players' dice.
    pub fn capture<'a>(players: impl IntoIterator<Item = &'a Player>) -> Self {
        let hands = players
            .into_iter()
            .map(|p| (p.id, DicePool::from_slice(p.dice())))
            .collect();
        Self { hands }
    }

    /// Each player's dice, in turn order.
    pub fn hands(&self) -> impl Iterator<Item = (PlayerId, &[u8])> {
        self.hands.iter().map(|(id, dice)| (*id, dice.as_slice()))
    }

    /// One player's dice, if they were at the table.
    #[must_use]
    pub fn dice_of(&self, player: PlayerId) -> Option<&[u8]> {
        self.hands
            .iter()
            .find(|(id, _)| *id == player)
            .map(|(_, dice)| dice.as_slice())
    }

    /// Total dice revealed.
    #[must_use]
    pub fn total_dice(&self) -> u32 {
        self.hands.iter().map(|(_, dice)| dice.len() as u32).sum()
    }

    /// Dice counting toward a bid on `face`, wilds included per `rule`.
    #[must_use]
    pub fn count_matching(&self, rule: WildRule, face: u8) -> u32 {
        self.hands
            .iter()
            .flat_map(|(_, dice)| dice.iter())
            .filter(|&&die| rule.counts_toward(die, face))
            .count() as u32
    }

    /// How many dice show each face.
    #[must_use]
    pub fn tally(&self) -> FxHashMap<u8, u32> {
        let mut counts = FxHashMap::default();
        for die in self.hands.iter().flat_map(|(_, dice)| dice.iter()) {
            *counts.entry(*die).or_insert(0) += 1;
        }
        counts
    }
}

/// The resolution of a challenge or spot-on call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChallengeResult {
    pub kind: ChallengeKind,

    /// The bid that was called.
    pub bid: Bid,

    /// Who made the bid.
    pub bidder: PlayerId,

    /// Who called it.
    pub challenger: PlayerId,

    pub winner: PlayerId,

    /// The player the next round is seated from. Always `losers[0]`.
    pub loser: PlayerId,

    /// Everyone who lost a die. More than one only after a correct spot-on.
    pub losers: SmallVec<[PlayerId; 4]>,

    /// Dice counting toward the bid.
    pub actual_count: u32,

    pub reveal: Reveal,
}

impl ChallengeResult {
    /// True if the bid was at least as high as the dice supported.
    #[must_use]
    pub fn bid_held(&self) -> bool {
        self.actual_count >= self.bid.quantity
    }

    /// True if the caller won.
    #[must_use]
    pub fn challenger_won(&self) -> bool {
        self.winner == self.challenger
    }
}
