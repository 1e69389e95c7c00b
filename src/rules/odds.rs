//! Probability that a bid is true, from one player's point of view.
//!
//! The player knows their own dice and nothing else. Every unknown die
//! matches the bid independently with probability `p`, where `p` is
//! `1 / faces`, or `2 / faces` when wilds count toward the bid face.

use serde::{Deserialize, Serialize};

use super::wild::WildRule;
use crate::core::{Bid, GameConfig};

/// Odds for a single bid.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BidOdds {
    /// Probability that at least `quantity` dice match.
    pub at_least: f64,
    /// Probability that exactly `quantity` dice match.
    pub exactly: f64,
}

/// Chance that one unseen die counts toward `face`.
#[must_use]
pub fn match_probability(rule: WildRule, faces: u8, face: u8) -> f64 {
    let faces = f64::from(faces.max(1));
    if rule.has_wilds() && !rule.is_wild_bid(face) {
        2.0 / faces
    } else {
        1.0 / faces
    }
}

/// Binomial probability of exactly `k` successes in `n` trials.
#[must_use]
pub fn binomial_pmf(n: u32, k: u32, p: f64) -> f64 {
    if k > n {
        return 0.0;
    }
    let k_small = k.min(n - k);
    let mut coefficient = 1.0_f64;
    for i in 1..=k_small {
        coefficient *= f64::from(n - k_small + i) / f64::from(i);
    }
    coefficient * p.powi(k as i32) * (1.0 - p).powi((n - k) as i32)
}

/// Binomial probability of at least `k` successes in `n` trials.
#[must_use]
pub fn binomial_at_least(n: u32, k: u32, p: f64) -> f64 {
    if k == 0 {
        return 1.0;
    }
    (k..=n).map(|i| binomial_pmf(n, i, p)).sum::<f64>().min(1.0)
}

/// Odds that `bid` holds, given `dice_in_play` dice on the table of which
/// `known` are the caller's own.
///
/// ```
/// use liars_dice::core::{Bid, GameConfig};
/// use liars_dice::rules::{bid_odds, WildRule};
///
/// let config = GameConfig::default().with_wild_rule(WildRule::Off);
///
/// // Already holding three 4s: a bid of three 4s is certain.
/// let odds = bid_odds(&config, Bid::new(3, 4), 10, &[4, 4, 4, 2, 6]);
/// assert_eq!(odds.at_least, 1.0);
/// ```
#[must_use]
pub fn bid_odds(config: &GameConfig, bid: Bid, dice_in_play: u32, known: &[u8]) -> BidOdds {
    let rule = config.wild_rule;
    let matched = known
        .iter()
        .filter(|&&die| rule.counts_toward(die, bid.face))
        .count() as u32;
    let unknown = dice_in_play.saturating_sub(known.len() as u32);
    let p = match_probability(rule, config.faces, bid.face);

    let at_least = binomial_at_least(unknown, bid.quantity.saturating_sub(matched), p);
    let exactly = if matched > bid.quantity {
        0.0
    } else {
        binomial_pmf(unknown, bid.quantity - matched, p)
    };

    BidOdds { at_least, exactly }
}
