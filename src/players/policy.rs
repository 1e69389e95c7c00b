//! Decision policies for computer-controlled seats.
//!
//! A policy sees a `TableView`: its own dice, the standing bid, and public
//! counts. It never sees other players' dice.

use crate::core::{Bid, DiceRoller, GameConfig, GameRng, PlayerId};
use crate::engine::{Decision, Game};

/// What one player can see at their turn.
#[derive(Clone, Copy, Debug)]
pub struct TableView<'a> {
    /// The deciding player.
    pub me: PlayerId,
    /// Their own dice.
    pub own_dice: &'a [u8],
    /// The bid to beat, if any.
    pub current_bid: Option<Bid>,
    /// Total dice on the table.
    pub dice_in_play: u32,
    pub config: &'a GameConfig,
}

impl<'a> TableView<'a> {
    /// The view `me` has of `game`.
    pub fn of<R: DiceRoller>(game: &'a Game<R>, me: PlayerId) -> Self {
        Self {
            me,
            own_dice: game.player(me).map(|p| p.dice()).unwrap_or(&[]),
            current_bid: game.current_bid().map(|r| r.bid),
            dice_in_play: game.dice_in_play(),
            config: game.config(),
        }
    }

    /// The cheapest legal raise on every face, skipping faces with no raise
    /// or whose cheapest raise would exceed the dice-in-play cap.
    #[must_use]
    pub fn legal_raises(&self) -> Vec<Bid> {
        (1..=self.config.faces)
            .filter_map(|face| {
                self.config
                    .wild_rule
                    .minimum_quantity(face, self.current_bid)
                    .map(|quantity| Bid::new(quantity, face))
            })
            .filter(|bid| !self.config.cap_bids_at_dice_in_play || bid.quantity <= self.dice_in_play)
            .collect()
    }
}

/// Chooses a move for a computer-controlled seat.
pub trait Policy {
    /// Pick a decision. Must return a legal move for the view.
    fn decide(&self, view: &TableView<'_>, rng: &mut GameRng) -> Decision;
}

/// Trivial opponent: raises on a random face by the minimum, or calls the
/// standing bid at random.
#[derive(Clone, Debug)]
pub struct RandomBidder {
    /// Chance of challenging when a raise is possible.
    pub challenge_probability: f64,
    /// Chance a call is spot-on rather than bluff, when allowed.
    pub spot_on_probability: f64,
}

impl Default for RandomBidder {
    fn default() -> Self {
        Self {
            challenge_probability: 0.3,
            spot_on_probability: 0.1,
        }
    }
}

impl RandomBidder {
    /// Set the challenge probability.
    #[must_use]
    pub fn with_challenge_probability(mut self, p: f64) -> Self {
        self.challenge_probability = p;
        self
    }

    /// Set the spot-on probability.
    #[must_use]
    pub fn with_spot_on_probability(mut self, p: f64) -> Self {
        self.spot_on_probability = p;
        self
    }

    fn call(&self, view: &TableView<'_>, rng: &mut GameRng) -> Decision {
        if view.config.allow_spot_on && rng.gen_bool(self.spot_on_probability) {
            Decision::SpotOn
        } else {
            Decision::Challenge
        }
    }
}

impl Policy for RandomBidder {
    fn decide(&self, view: &TableView<'_>, rng: &mut GameRng) -> Decision {
        let raises = view.legal_raises();

        if view.current_bid.is_some()
            && (raises.is_empty() || rng.gen_bool(self.challenge_probability))
        {
            return self.call(view, rng);
        }

        match rng.choose(&raises) {
            Some(&bid) => Decision::Bid(bid),
            None => self.call(view, rng),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ScriptedDice;
    use crate::rules::WildRule;

    fn game(config: GameConfig) -> Game<ScriptedDice> {
        Game::with_config(&["A", "B"], config, ScriptedDice::new([2, 5])).unwrap()
    }

    #[test]
    fn test_view_sees_only_own_dice() {
        let game = game(GameConfig::default().with_dice_per_player(2));
        let view = TableView::of(&game, PlayerId::new(1));
        assert_eq!(view.own_dice, &[2, 5]);
        assert_eq!(view.dice_in_play, 4);
        assert_eq!(view.current_bid, None);
    }

    #[test]
    fn test_opening_raises_cover_every_face() {
        let game = game(GameConfig::default());
        let view = TableView::of(&game, PlayerId::new(0));
        let raises = view.legal_raises();
        assert_eq!(raises.len(), 6);
        assert!(raises.iter().all(|b| b.quantity == 1));
    }

    #[test]
    fn test_capped_raises_run_out() {
        let config = GameConfig::default()
            .with_dice_per_player(1)
            .with_wild_rule(WildRule::Off);
        let mut game = game(config);
        game.place_bid(PlayerId::new(0), Bid::new(2, 6)).unwrap();

        let view = TableView::of(&game, PlayerId::new(1));
        assert!(view.legal_raises().is_empty());

        let decision = RandomBidder::default()
            .with_challenge_probability(0.0)
            .decide(&view, &mut GameRng::new(3));
        assert_eq!(decision, Decision::Challenge);
    }

    #[test]
    fn test_no_raises_above_max_quantity() {
        let config = GameConfig::default()
            .with_wild_rule(WildRule::Off)
            .with_bid_cap(false);
        let mut plain = game(config);
        plain.place_bid(PlayerId::new(0), Bid::new(u32::MAX, 6)).unwrap();

        let view = TableView::of(&plain, PlayerId::new(1));
        assert!(view.legal_raises().is_empty());
        let decision = RandomBidder::default()
            .with_challenge_probability(0.0)
            .decide(&view, &mut GameRng::new(5));
        assert_eq!(decision, Decision::Challenge);

        // Under doubling the halved wild bid is still open.
        let config = GameConfig::default().with_bid_cap(false);
        let mut doubling = game(config);
        doubling.place_bid(PlayerId::new(0), Bid::new(u32::MAX, 6)).unwrap();
        let view = TableView::of(&doubling, PlayerId::new(1));
        assert_eq!(view.legal_raises(), vec![Bid::new(u32::MAX / 2 + 1, 1)]);
    }

    #[test]
    fn test_never_challenges_opening() {
        let game = game(GameConfig::default());
        let view = TableView::of(&game, PlayerId::new(0));
        let bidder = RandomBidder::default().with_challenge_probability(1.0);
        let mut rng = GameRng::new(11);
        for _ in 0..20 {
            assert!(matches!(bidder.decide(&view, &mut rng), Decision::Bid(_)));
        }
    }
}
