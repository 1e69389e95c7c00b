//! Table rules: wild dice, bid ordering, and bid odds.
//!
//! These are pure functions over `Bid` and `GameConfig`. The engine calls
//! into them; the display layer uses them for hints and odds.

pub mod odds;
pub mod wild;

pub use odds::{bid_odds, binomial_at_least, binomial_pmf, match_probability, BidOdds};
pub use wild::{WildRule, WILD_FACE};
