//! Wild dice and bid ordering.
//!
//! Ones are the wild face. How they behave is a table rule:
//!
//! | Rule       | Ones count toward other faces | Bid ordering                  |
//! |------------|-------------------------------|-------------------------------|
//! | `Off`      | no                            | quantity, then face           |
//! | `Counting` | yes                           | quantity, then face           |
//! | `Doubling` | yes                           | converts to and from wilds    |
//!
//! Under `Doubling`, a wild bid after a plain bid of quantity `q` needs at
//! least `ceil(q / 2)` dice, and a plain bid after a wild bid of quantity `q`
//! needs at least `2q + 1`.

use serde::{Deserialize, Serialize};

use crate::core::Bid;

/// The wild face.
pub const WILD_FACE: u8 = 1;

/// How wild dice count and rank.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WildRule {
    /// No wild dice. Ones are an ordinary face.
    Off,
    /// Ones count toward every other face. Ordering is plain.
    Counting,
    /// Ones count toward every other face, and switching to or from a
    /// wild bid halves or doubles the required quantity.
    #[default]
    Doubling,
}

impl WildRule {
    /// True if ones count toward other faces at reveal.
    #[must_use]
    pub fn has_wilds(self) -> bool {
        !matches!(self, WildRule::Off)
    }

    /// True if `face` is a wild bid under this rule.
    #[must_use]
    pub fn is_wild_bid(self, face: u8) -> bool {
        self.has_wilds() && face == WILD_FACE
    }

    /// Does a die showing `die` count toward a bid on `bid_face`?
    ///
    /// Wilds count toward every bid except a bid on wilds, which counts only
    /// the ones themselves.
    #[must_use]
    pub fn counts_toward(self, die: u8, bid_face: u8) -> bool {
        die == bid_face || (self.has_wilds() && die == WILD_FACE && bid_face != WILD_FACE)
    }

    /// Does `new` strictly outrank `current`?
    #[must_use]
    pub fn outranks(self, new: Bid, current: Bid) -> bool {
        self.minimum_quantity(new.face, Some(current))
            .is_some_and(|min| new.quantity >= min)
    }

    /// Smallest quantity for a bid on `face` that outranks `current`, or
    /// `None` if no `u32` quantity can.
    ///
    /// With no current bid, any quantity from 1 is accepted.
    ///
    /// ```
    /// use liars_dice::core::Bid;
    /// use liars_dice::rules::WildRule;
    ///
    /// let current = Bid::new(5, 3);
    /// assert_eq!(WildRule::Off.minimum_quantity(4, Some(current)), Some(5));
    /// assert_eq!(WildRule::Off.minimum_quantity(2, Some(current)), Some(6));
    /// assert_eq!(WildRule::Doubling.minimum_quantity(1, Some(current)), Some(3));
    /// assert_eq!(WildRule::Doubling.minimum_quantity(4, Some(Bid::new(3, 1))), Some(7));
    /// assert_eq!(WildRule::Off.minimum_quantity(2, Some(Bid::new(u32::MAX, 6))), None);
    /// ```
    #[must_use]
    pub fn minimum_quantity(self, face: u8, current: Option<Bid>) -> Option<u32> {
        let Some(current) = current else {
            return Some(1);
        };

        let plain = |current: Bid| {
            if face > current.face {
                Some(current.quantity)
            } else {
                current.quantity.checked_add(1)
            }
        };

        let quantity = match self {
            WildRule::Off | WildRule::Counting => plain(current),
            WildRule::Doubling => {
                let to_wild = face == WILD_FACE;
                let from_wild = current.face == WILD_FACE;
                match (from_wild, to_wild) {
                    (false, false) => plain(current),
                    (true, true) => current.quantity.checked_add(1),
                    (false, true) => Some(current.quantity.div_ceil(2)),
                    (true, false) => current
                        .quantity
                        .checked_mul(2)
                        .and_then(|q| q.checked_add(1)),
                }
            }
        };
        quantity.map(|q| q.max(1))
    }

    /// Parse a rule name as used on the command line.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "off" | "none" => Some(WildRule::Off),
            "counting" | "count" => Some(WildRule::Counting),
            "doubling" | "double" | "standard" => Some(WildRule::Doubling),
            _ => None,
        }
    }
}

impl std::fmt::Display for WildRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            WildRule::Off => "off",
            WildRule::Counting => "counting",
            WildRule::Doubling => "doubling",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_toward() {
        assert!(WildRule::Doubling.counts_toward(1, 3));
        assert!(WildRule::Counting.counts_toward(1, 3));
        assert!(!WildRule::Off.counts_toward(1, 3));
        assert!(WildRule::Doubling.counts_toward(3, 3));
        assert!(!WildRule::Doubling.counts_toward(2, 3));
        // A bid on wilds counts only ones.
        assert!(WildRule::Doubling.counts_toward(1, 1));
        assert!(!WildRule::Doubling.counts_toward(3, 1));
    }

    #[test]
    fn test_plain_ordering() {
        for rule in [WildRule::Off, WildRule::Counting] {
            let current = Bid::new(3, 4);
            assert!(rule.outranks(Bid::new(4, 2), current));
            assert!(rule.outranks(Bid::new(3, 5), current));
            assert!(!rule.outranks(Bid::new(3, 4), current));
            assert!(!rule.outranks(Bid::new(3, 3), current));
            assert!(!rule.outranks(Bid::new(2, 6), current));
            assert!(!rule.outranks(Bid::new(3, 1), current));
        }
    }

    #[test]
    fn test_doubling_to_wilds() {
        let rule = WildRule::Doubling;
        assert!(rule.outranks(Bid::new(3, 1), Bid::new(5, 3)));
        assert!(!rule.outranks(Bid::new(2, 1), Bid::new(5, 3)));
        assert!(rule.outranks(Bid::new(2, 1), Bid::new(4, 6)));
        assert!(rule.outranks(Bid::new(1, 1), Bid::new(1, 2)));
    }

    #[test]
    fn test_doubling_from_wilds() {
        let rule = WildRule::Doubling;
        assert!(rule.outranks(Bid::new(5, 2), Bid::new(2, 1)));
        assert!(!rule.outranks(Bid::new(4, 6), Bid::new(2, 1)));
        assert!(rule.outranks(Bid::new(3, 1), Bid::new(2, 1)));
        assert!(!rule.outranks(Bid::new(2, 1), Bid::new(2, 1)));
    }

    #[test]
    fn test_minimum_quantity_without_current() {
        for rule in [WildRule::Off, WildRule::Counting, WildRule::Doubling] {
            assert_eq!(rule.minimum_quantity(1, None), Some(1));
            assert_eq!(rule.minimum_quantity(6, None), Some(1));
        }
    }

    #[test]
    fn test_no_raise_past_u32_max() {
        let top = Bid::new(u32::MAX, 6);
        for rule in [WildRule::Off, WildRule::Counting, WildRule::Doubling] {
            assert_eq!(rule.minimum_quantity(3, Some(top)), None);
            assert!(!rule.outranks(Bid::new(1, 2), top));
            assert!(!rule.outranks(top, top));
        }

        // Doubling out of wilds overflows long before the wild quantity does.
        let wilds = Bid::new(1 << 31, 1);
        assert_eq!(WildRule::Doubling.minimum_quantity(2, Some(wilds)), None);
        assert!(!WildRule::Doubling.outranks(Bid::new(3, 2), wilds));
        assert_eq!(WildRule::Doubling.minimum_quantity(1, Some(wilds)), Some((1 << 31) + 1));
    }

    #[test]
    fn test_from_name() {
        assert_eq!(WildRule::from_name("Off"), Some(WildRule::Off));
        assert_eq!(WildRule::from_name("counting"), Some(WildRule::Counting));
        assert_eq!(WildRule::from_name("standard"), Some(WildRule::Doubling));
        assert_eq!(WildRule::from_name("tripling"), None);
        assert_eq!(WildRule::from_name(&WildRule::Counting.to_string()), Some(WildRule::Counting));
    }
}
