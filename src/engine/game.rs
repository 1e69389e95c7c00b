//! The Liar's Dice state machine.
//!
//! `Game` owns every player's dice, the current round's bids, and the turn
//! pointer. It performs no I/O: the display layer calls in, renders what it
//! gets back, and decides what each player is allowed to see.
//!
//! ## Round flow
//!
//! 1. `start_game` rolls everyone's dice; the first seat opens.
//! 2. `place_bid` raises; the turn passes to the next player with dice.
//! 3. `challenge` (or `call_spot_on`) reveals all dice and takes a die from
//!    whoever was wrong.
//! 4. `start_next_round` eliminates empty seats, then either ends the game or
//!    re-rolls and seats the opener after the round's loser.
//!
//! Failed operations leave the game untouched.

use im::Vector;
use log::{debug, info, trace};
use smallvec::{smallvec, SmallVec};

use super::challenge::{ChallengeKind, ChallengeResult, Reveal};
use super::phase::Phase;
use crate::core::{Bid, BidRecord, DiceRoller, GameConfig, GameRng, Player, PlayerId, PlayerMap};
use crate::error::{BidRejection, GameError, GameResult, Operation};

/// One player's move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Decision {
    /// Raise to this bid.
    Bid(Bid),
    /// Call the current bid a lie.
    Challenge,
    /// Call the current bid exactly right.
    SpotOn,
}

/// What `start_next_round` did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RoundOutcome {
    /// Dice were re-rolled and `starter` opens the round.
    NextRound {
        starter: PlayerId,
        eliminated: Vec<PlayerId>,
    },
    /// Only `winner` has dice left.
    GameOver {
        winner: PlayerId,
        eliminated: Vec<PlayerId>,
    },
}

impl RoundOutcome {
    /// Players removed from turn order by this transition.
    #[must_use]
    pub fn eliminated(&self) -> &[PlayerId] {
        match self {
            RoundOutcome::NextRound { eliminated, .. } | RoundOutcome::GameOver { eliminated, .. } => {
                eliminated
            }
        }
    }
}

/// A game of Liar's Dice.
///
/// Randomness comes from `R`, so tests can script every roll.
///
/// ```
/// use liars_dice::core::Bid;
/// use liars_dice::engine::{Game, Phase};
///
/// let mut game = Game::start_game(&["Ada", "Bo"], 5, 42).unwrap();
/// let opener = game.current_player();
/// game.place_bid(opener, Bid::new(2, 4)).unwrap();
///
/// let result = game.challenge(game.current_player()).unwrap();
/// assert_eq!(game.phase(), Phase::RoundResolved);
/// assert_eq!(game.dice_in_play(), 9);
/// assert!(result.losers.contains(&result.loser));
/// ```
#[derive(Clone, Debug)]
pub struct Game<R: DiceRoller = GameRng> {
    config: GameConfig,
    players: PlayerMap<Player>,
    /// Seats still in the game, in seating order.
    turn_order: Vec<PlayerId>,
    /// Index into `turn_order`.
    turn: usize,
    phase: Phase,
    round: u32,
    bids: Vector<BidRecord>,
    last_result: Option<ChallengeResult>,
    winner: Option<PlayerId>,
    roller: R,
}

impl Game<GameRng> {
    /// Start a game with default rules and `dice_per_player` dice each,
    /// rolling from a seeded `GameRng`.
    pub fn start_game<S: AsRef<str>>(
        player_names: &[S],
        dice_per_player: usize,
        seed: u64,
    ) -> GameResult<Self> {
        let config = GameConfig::default().with_dice_per_player(dice_per_player);
        Self::with_config(player_names, config, GameRng::new(seed))
    }
}

impl<R: DiceRoller> Game<R> {
    /// Start a game with explicit rules and dice source.
    ///
    /// Fails with `InvalidConfiguration` for fewer than 2 players, zero dice,
    /// dice with fewer than 2 faces, or a blank name.
    pub fn with_config<S: AsRef<str>>(
        player_names: &[S],
        config: GameConfig,
        roller: R,
    ) -> GameResult<Self> {
        config.validate(player_names.len())?;
        if let Some(pos) = player_names.iter().position(|n| n.as_ref().trim().is_empty()) {
            return Err(GameError::invalid_config(format!("player {} has a blank name", pos + 1)));
        }

        let players = PlayerMap::new(player_names.len(), |id| {
            Player::new(id, player_names[id.index()].as_ref().trim(), config.dice_per_player)
        });
        let turn_order = PlayerId::all(player_names.len()).collect();

        let mut game = Self {
            config,
            players,
            turn_order,
            turn: 0,
            phase: Phase::AwaitingBid,
            round: 1,
            bids: Vector::new(),
            last_result: None,
            winner: None,
            roller,
        };
        game.roll_all();

        info!(
            "game started: {} players, {} dice each, wild rule {}",
            game.players.player_count(),
            game.config.dice_per_player,
            game.config.wild_rule
        );
        Ok(game)
    }

    // === Accessors ===

    /// The table rules.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Round number, starting at 1.
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Every seat, eliminated or not, in seating order.
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.players.values()
    }

    /// One seat.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id)
    }

    /// Seats still in the game, in seating order.
    #[must_use]
    pub fn turn_order(&self) -> &[PlayerId] {
        &self.turn_order
    }

    /// Players still in the game.
    pub fn surviving_players(&self) -> impl Iterator<Item = &Player> {
        self.turn_order.iter().map(move |&id| &self.players[id])
    }

    /// The turn-holder. After the game ends this is the winner.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.turn_order[self.turn]
    }

    /// The standing bid and who made it, if any bid was made this round.
    #[must_use]
    pub fn current_bid(&self) -> Option<BidRecord> {
        self.bids.last().copied()
    }

    /// All bids of the current round, oldest first.
    #[must_use]
    pub fn bid_history(&self) -> &Vector<BidRecord> {
        &self.bids
    }

    /// The most recent challenge, kept until the next challenge.
    #[must_use]
    pub fn last_result(&self) -> Option<&ChallengeResult> {
        self.last_result.as_ref()
    }

    /// Total dice on the table.
    #[must_use]
    pub fn dice_in_play(&self) -> u32 {
        self.players.values().map(|p| p.dice_count() as u32).sum()
    }

    /// The winner once the game is over.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    /// True once exactly one player has dice.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// Smallest quantity on `face` that would be accepted now, ignoring the
    /// dice-in-play cap. `None` if no quantity on `face` outranks the
    /// standing bid.
    #[must_use]
    pub fn minimum_raise(&self, face: u8) -> Option<u32> {
        self.config
            .wild_rule
            .minimum_quantity(face, self.current_bid().map(|r| r.bid))
    }

    /// Would `bid` be accepted from the turn-holder right now?
    pub fn check_bid(&self, bid: Bid) -> Result<(), BidRejection> {
        if bid.quantity == 0 {
            return Err(BidRejection::ZeroQuantity);
        }
        if bid.face < 1 || bid.face > self.config.faces {
            return Err(BidRejection::FaceOutOfRange {
                faces: self.config.faces,
            });
        }
        let dice_in_play = self.dice_in_play();
        if self.config.cap_bids_at_dice_in_play && bid.quantity > dice_in_play {
            return Err(BidRejection::ExceedsDiceInPlay { dice_in_play });
        }
        match self.current_bid() {
            Some(current) if !self.config.wild_rule.outranks(bid, current.bid) => {
                Err(BidRejection::DoesNotOutrank)
            }
            _ => Ok(()),
        }
    }

    // === Operations ===

    /// Raise the bid. Only the turn-holder may bid, and only while bids are
    /// accepted.
    pub fn place_bid(&mut self, player: PlayerId, bid: Bid) -> GameResult<()> {
        self.require_phase(Operation::PlaceBid, self.phase.accepts_bids())?;
        self.require_turn(player)?;
        self.check_bid(bid).map_err(|reason| GameError::IllegalBid {
            bid,
            current: self.current_bid().map(|r| r.bid),
            reason,
        })?;

        let sequence = self.bids.len() as u32;
        self.bids.push_back(BidRecord::new(player, bid, sequence));
        self.phase = Phase::AwaitingBidOrChallenge;
        self.advance_turn();

        debug!("{} bids {}; {} to act", player, bid, self.current_player());
        Ok(())
    }

    /// Call the standing bid a lie.
    ///
    /// If fewer dice match than claimed, the bidder loses a die; otherwise the
    /// challenger does.
    pub fn challenge(&mut self, player: PlayerId) -> GameResult<ChallengeResult> {
        let standing = self.require_standing_bid(Operation::Challenge)?;
        self.require_turn(player)?;

        let reveal = self.reveal();
        let actual_count = reveal.count_matching(self.config.wild_rule, standing.bid.face);
        let (winner, loser) = if actual_count < standing.bid.quantity {
            (player, standing.player)
        } else {
            (standing.player, player)
        };

        let result = self.resolve(ChallengeKind::Bluff, standing, player, winner, smallvec![loser], actual_count, reveal);
        info!(
            "{} challenged {} ({} actual): {} loses a die",
            player, standing.bid, actual_count, loser
        );
        Ok(result)
    }

    /// Declare the standing bid exactly right.
    ///
    /// If the count matches exactly, every other player loses a die, bidder
    /// first; otherwise the caller loses one. Requires `allow_spot_on`.
    pub fn call_spot_on(&mut self, player: PlayerId) -> GameResult<ChallengeResult> {
        self.require_phase(Operation::SpotOn, self.config.allow_spot_on)?;
        let standing = self.require_standing_bid(Operation::SpotOn)?;
        self.require_turn(player)?;

        let reveal = self.reveal();
        let actual_count = reveal.count_matching(self.config.wild_rule, standing.bid.face);
        let (winner, losers) = if actual_count == standing.bid.quantity {
            let mut losers: SmallVec<[PlayerId; 4]> = smallvec![standing.player];
            losers.extend(
                self.seats_after(standing.player)
                    .filter(|&id| id != player && id != standing.player),
            );
            (player, losers)
        } else {
            (standing.player, smallvec![player])
        };

        let result = self.resolve(ChallengeKind::SpotOn, standing, player, winner, losers, actual_count, reveal);
        info!(
            "{} called {} spot-on ({} actual): {:?} lose a die",
            player, standing.bid, actual_count, result.losers
        );
        Ok(result)
    }

    /// Take a decision from the turn-holder.
    ///
    /// Returns the challenge result when the decision ends the round.
    pub fn act(&mut self, player: PlayerId, decision: Decision) -> GameResult<Option<ChallengeResult>> {
        match decision {
            Decision::Bid(bid) => self.place_bid(player, bid).map(|()| None),
            Decision::Challenge => self.challenge(player).map(Some),
            Decision::SpotOn => self.call_spot_on(player).map(Some),
        }
    }

    /// Close out a resolved round.
    ///
    /// Eliminates players with no dice. With one player left the game is
    /// over; otherwise survivors re-roll and the player after the round's
    /// loser opens. Before the first bid of the game this is a plain re-roll.
    pub fn start_next_round(&mut self) -> GameResult<RoundOutcome> {
        let opening = self.phase == Phase::AwaitingBid && self.bids.is_empty() && self.last_result.is_none();
        self.require_phase(Operation::StartNextRound, self.phase == Phase::RoundResolved || opening)?;

        let anchor = match (&self.last_result, opening) {
            (Some(result), false) => Some(result.loser),
            _ => None,
        };
        let starter = anchor.and_then(|loser| self.seats_after(loser).find(|&id| !self.players[id].is_out()));

        let eliminated: Vec<PlayerId> = self
            .turn_order
            .iter()
            .copied()
            .filter(|&id| self.players[id].is_out())
            .collect();
        for &id in &eliminated {
            self.players[id].eliminate();
            info!("{} is out of dice", self.players[id].name);
        }
        let previous = self.current_player();
        self.turn_order.retain(|id| !eliminated.contains(id));

        if let [winner] = self.turn_order[..] {
            self.turn = 0;
            self.phase = Phase::GameOver;
            self.winner = Some(winner);
            info!("{} wins after {} rounds", self.players[winner].name, self.round);
            return Ok(RoundOutcome::GameOver { winner, eliminated });
        }

        let starter = starter.unwrap_or(previous);
        self.turn = self
            .turn_order
            .iter()
            .position(|&id| id == starter)
            .unwrap_or(0);
        if !opening {
            self.round += 1;
        }
        self.bids = Vector::new();
        self.phase = Phase::AwaitingBid;
        self.roll_all();

        debug!("round {} opens with {}", self.round, self.current_player());
        Ok(RoundOutcome::NextRound {
            starter: self.current_player(),
            eliminated,
        })
    }

    /// Overwrite a player's dice. For scripted setups and tests.
    pub fn set_dice(&mut self, player: PlayerId, dice: &[u8]) -> GameResult<()> {
        let seat = self.players.get_mut(player).ok_or_else(|| {
            GameError::invalid_config(format!("no seat for {}", player))
        })?;
        seat.set_dice(dice);
        Ok(())
    }

    // === Internals ===

    fn require_phase(&self, operation: Operation, allowed: bool) -> GameResult<()> {
        if allowed {
            Ok(())
        } else {
            Err(GameError::IllegalStateTransition {
                operation,
                phase: self.phase,
            })
        }
    }

    fn require_turn(&self, player: PlayerId) -> GameResult<()> {
        let expected = self.current_player();
        if player == expected {
            Ok(())
        } else {
            Err(GameError::OutOfTurn {
                expected,
                actual: player,
            })
        }
    }

    fn require_standing_bid(&self, operation: Operation) -> GameResult<BidRecord> {
        match (self.phase, self.current_bid()) {
            (Phase::AwaitingBidOrChallenge, Some(record)) => Ok(record),
            _ => Err(GameError::IllegalStateTransition {
                operation,
                phase: self.phase,
            }),
        }
    }

    /// Seats after `from` in turn order, wrapping, `from` itself last.
    fn seats_after(&self, from: PlayerId) -> impl Iterator<Item = PlayerId> + '_ {
        let start = self
            .turn_order
            .iter()
            .position(|&id| id == from)
            .unwrap_or(self.turn_order.len() - 1);
        let len = self.turn_order.len();
        (1..=len).map(move |step| self.turn_order[(start + step) % len])
    }

    /// Move the turn to the next player who still has dice.
    fn advance_turn(&mut self) {
        let current = self.current_player();
        let next = self
            .seats_after(current)
            .find(|&id| !self.players[id].is_out());
        let pos = next.and_then(|next| self.turn_order.iter().position(|&id| id == next));
        if let Some(pos) = pos {
            self.turn = pos;
        }
    }

    fn reveal(&self) -> Reveal {
        Reveal::capture(self.surviving_players())
    }

    #[allow(clippy::too_many_arguments)]
    fn resolve(
        &mut self,
        kind: ChallengeKind,
        standing: BidRecord,
        challenger: PlayerId,
        winner: PlayerId,
        losers: SmallVec<[PlayerId; 4]>,
        actual_count: u32,
        reveal: Reveal,
    ) -> ChallengeResult {
        for &id in &losers {
            self.players[id].remove_die();
        }

        let result = ChallengeResult {
            kind,
            bid: standing.bid,
            bidder: standing.player,
            challenger,
            winner,
            loser: losers[0],
            losers,
            actual_count,
            reveal,
        };
        self.last_result = Some(result.clone());
        self.phase = Phase::RoundResolved;
        result
    }

    fn roll_all(&mut self) {
        let faces = self.config.faces;
        for &id in &self.turn_order {
            self.players[id].roll(faces, &mut self.roller);
            trace!("{} rolled {:?}", id, self.players[id].dice());
        }
    }
}
