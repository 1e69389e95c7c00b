//! The interactive loop.
//!
//! One terminal is passed between the human players. Each human sees only
//! their own dice; bots act without prompting.

use anyhow::Result;
use dialoguer::{Input, Select};
use log::debug;

use super::args::Args;
use super::render::{self, Style};
use crate::core::{Bid, GameRng, PlayerId, PlayerMap};
use crate::engine::{ChallengeKind, ChallengeResult, Decision, Game, RoundOutcome};
use crate::error::GameError;
use crate::players::{Policy, RandomBidder, TableView};
use crate::rules::{bid_odds, BidOdds};

/// Who controls a seat.
#[derive(Clone, Debug)]
pub enum Seat {
    Human,
    /// A computer opponent with its own decision stream.
    Bot { policy: RandomBidder, rng: GameRng },
}

/// A running terminal game.
pub struct Session {
    game: Game<GameRng>,
    seats: PlayerMap<Seat>,
    style: Style,
    debug: bool,
    show_odds: bool,
    turns: u32,
}

impl Session {
    /// Seat the named humans followed by `args.bots` computer players.
    pub fn new(humans: Vec<String>, args: &Args) -> Result<Self> {
        let human_count = humans.len();
        let mut names = humans;
        names.extend((1..=args.bots).map(|i| format!("Bot {}", i)));

        let rng = match args.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        debug!("seed {}", rng.seed());
        let mut bot_rng = rng.for_context("bots");

        let game = Game::with_config(&names, args.config(), rng)?;
        let seats = PlayerMap::new(names.len(), |id| {
            if id.index() < human_count {
                Seat::Human
            } else {
                Seat::Bot {
                    policy: RandomBidder::default(),
                    rng: bot_rng.fork(),
                }
            }
        });

        Ok(Self {
            style: Style {
                unicode_dice: !args.no_unicode,
                faces: game.config().faces,
            },
            game,
            seats,
            debug: args.debug,
            show_odds: !args.no_odds,
            turns: 0,
        })
    }

    /// Play until one player is left. Returns the winner.
    pub fn run(&mut self) -> Result<PlayerId> {
        while !self.game.is_over() {
            self.turn()?;
        }
        let winner = self.game.current_player();
        render::clear();
        if let Some(player) = self.game.player(winner) {
            println!(
                "{} has won the game in {} turns!",
                render::name(player),
                self.turns
            );
        }
        Ok(winner)
    }

    fn has_humans(&self) -> bool {
        self.seats.values().any(|s| matches!(s, Seat::Human))
    }

    fn turn(&mut self) -> Result<()> {
        let current = self.game.current_player();

        let bot_decision = match &mut self.seats[current] {
            Seat::Human => None,
            Seat::Bot { policy, rng } => Some(policy.decide(&TableView::of(&self.game, current), rng)),
        };
        let decision = match bot_decision {
            Some(decision) => {
                self.announce(current, decision);
                decision
            }
            None => {
                self.hand_over(current)?;
                self.prompt_decision(current)?
            }
        };

        let odds = self.caller_odds(current);
        match self.game.act(current, decision) {
            Ok(Some(result)) => {
                self.turns += 1;
                self.finish_round(&result, odds)?;
            }
            Ok(None) => self.turns += 1,
            // The same player acts again on the next turn.
            Err(err) if err.is_reprompt() => {
                render::error(&err);
                pause("Press enter to try again")?;
            }
            Err(err) => return Err(err.into()),
        }
        Ok(())
    }

    fn hand_over(&self, player: PlayerId) -> Result<()> {
        render::clear();
        if let Some(p) = self.game.player(player) {
            pause(&format!("Give the terminal to {}. Press enter when ready", render::name(p)))?;
        }
        Ok(())
    }

    fn header(&self, player: PlayerId) {
        render::clear();
        let Some(p) = self.game.player(player) else {
            return;
        };
        println!("[{}'s turn]", render::name(p));
        if self.debug {
            render::table(&self.game, &self.style);
        }
        println!("Your dice:   {}", self.style.dice(p.dice()));
        if let Some(record) = self.game.current_bid() {
            println!("Current bid: {}", self.style.bid(record.bid));
        }
        println!();
    }

    fn prompt_decision(&self, player: PlayerId) -> Result<Decision> {
        self.header(player);

        let Some(standing) = self.game.current_bid() else {
            println!("Place the opening bid:");
            return self.prompt_bid(player).map(Decision::Bid);
        };

        let bidder = self
            .game
            .player(standing.player)
            .map(|p| p.name.clone())
            .unwrap_or_default();
        let mut options = vec![
            "Raise the bid".to_string(),
            format!("Call {}'s bluff", bidder),
        ];
        if self.game.config().allow_spot_on {
            options.push("Declare the bid spot-on".to_string());
        }

        let choice = Select::new()
            .with_prompt("Options")
            .items(&options)
            .default(0)
            .interact()?;
        match choice {
            0 => self.prompt_bid(player).map(Decision::Bid),
            1 => Ok(Decision::Challenge),
            _ => Ok(Decision::SpotOn),
        }
    }

    /// Ask for a face and quantity until the engine accepts the bid.
    fn prompt_bid(&self, player: PlayerId) -> Result<Bid> {
        let faces = self.game.config().faces;
        loop {
            let face: u8 = Input::new()
                .with_prompt(format!("What face will you bid on? (1-{})", faces))
                .validate_with(move |f: &u8| -> Result<(), String> {
                    if (1..=faces).contains(f) {
                        Ok(())
                    } else {
                        Err("Invalid die face.".to_string())
                    }
                })
                .interact_text()?;

            let Some(floor) = self.game.minimum_raise(face) else {
                render::error(format!("No bid on {} can beat the current bid.", self.style.die(face)));
                continue;
            };
            let ceiling = self.game.dice_in_play();
            let quantity: u32 = Input::new()
                .with_prompt(format!(
                    "How many {}s will you bid? ({}-{})",
                    self.style.die(face),
                    floor,
                    ceiling
                ))
                .validate_with(move |q: &u32| -> Result<(), String> {
                    if *q >= 1 && *q <= ceiling {
                        Ok(())
                    } else {
                        Err("Invalid die amount.".to_string())
                    }
                })
                .interact_text()?;

            let bid = Bid::new(quantity, face);
            match self.game.check_bid(bid) {
                Ok(()) => return Ok(bid),
                Err(reason) => render::error(GameError::IllegalBid {
                    bid,
                    current: self.game.current_bid().map(|r| r.bid),
                    reason,
                }),
            }
            debug!("{} re-prompted after refused bid {}", player, bid);
        }
    }

    fn announce(&self, player: PlayerId, decision: Decision) {
        let Some(p) = self.game.player(player) else {
            return;
        };
        match decision {
            Decision::Bid(bid) => println!("{} bids {}.", render::name(p), self.style.bid(bid)),
            Decision::Challenge => println!("{} calls the bluff!", render::name(p)),
            Decision::SpotOn => println!("{} calls it spot-on!", render::name(p)),
        }
    }

    /// Odds the turn-holder faces on the standing bid, from their own dice.
    fn caller_odds(&self, player: PlayerId) -> Option<BidOdds> {
        let standing = self.game.current_bid()?;
        let own = self.game.player(player)?.dice();
        Some(bid_odds(
            self.game.config(),
            standing.bid,
            self.game.dice_in_play(),
            own,
        ))
    }

    fn finish_round(&mut self, result: &ChallengeResult, odds: Option<BidOdds>) -> Result<()> {
        println!();
        render::challenge(&self.game, result, &self.style);
        if self.show_odds && matches!(self.seats[result.challenger], Seat::Human) {
            if let Some(odds) = odds {
                render::odds(result.kind, &odds);
            }
        }
        if result.kind == ChallengeKind::SpotOn && result.challenger_won() {
            debug!("spot-on took dice from {:?}", result.losers);
        }

        let outcome = self.game.start_next_round()?;
        for &id in outcome.eliminated() {
            if let Some(p) = self.game.player(id) {
                println!("{} has lost all their dice and is out.", render::name(p));
            }
        }
        if let RoundOutcome::NextRound { starter, .. } = outcome {
            if let Some(p) = self.game.player(starter) {
                println!("{} opens the next round.", render::name(p));
            }
        }
        if self.has_humans() {
            pause("Press enter to continue")?;
        }
        Ok(())
    }
}

fn pause(prompt: &str) -> Result<()> {
    let _: String = Input::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .report(false)
        .interact_text()?;
    Ok(())
}
