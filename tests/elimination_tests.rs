//! Elimination, round seating, and dice accounting tests.

use liars_dice::core::{Bid, GameConfig, GameRng, PlayerId, ScriptedDice};
use liars_dice::engine::{Decision, Game, Phase, RoundOutcome};
use liars_dice::players::{Policy, RandomBidder, TableView};

fn p(i: u8) -> PlayerId {
    PlayerId::new(i)
}

fn scripted(names: &[&str], dice: usize, script: &[u8]) -> Game<ScriptedDice> {
    let config = GameConfig::default().with_dice_per_player(dice);
    Game::with_config(names, config, ScriptedDice::new(script.iter().copied())).unwrap()
}

// =============================================================================
// Seating the Next Round
// =============================================================================

#[test]
fn test_next_round_opens_after_surviving_loser() {
    let mut game = scripted(&["A", "B", "C"], 2, &[2]);
    game.place_bid(p(0), Bid::new(1, 2)).unwrap();

    // Six 2s on the table: B challenges and loses a die but stays in.
    let result = game.challenge(p(1)).unwrap();
    assert_eq!(result.loser, p(1));

    let outcome = game.start_next_round().unwrap();
    assert_eq!(
        outcome,
        RoundOutcome::NextRound {
            starter: p(2),
            eliminated: vec![],
        }
    );
    assert_eq!(game.current_player(), p(2));
    assert_eq!(game.turn_order(), &[p(0), p(1), p(2)]);
}

#[test]
fn test_next_round_opens_after_eliminated_loser() {
    let mut game = scripted(&["A", "B", "C"], 1, &[2]);
    game.place_bid(p(0), Bid::new(1, 3)).unwrap();
    let result = game.challenge(p(1)).unwrap();
    assert_eq!(result.loser, p(0));

    let outcome = game.start_next_round().unwrap();
    assert_eq!(outcome.eliminated(), &[p(0)]);
    assert_eq!(game.current_player(), p(1));
    assert_eq!(game.turn_order(), &[p(1), p(2)]);
    assert!(game.player(p(0)).unwrap().is_eliminated());
}

#[test]
fn test_next_round_wraps_past_eliminated_seats() {
    let mut game = scripted(&["A", "B", "C", "D"], 1, &[2]);

    // Round 1: A bids 3s on a table of 2s, B calls, A is out.
    game.place_bid(p(0), Bid::new(1, 3)).unwrap();
    game.challenge(p(1)).unwrap();
    game.start_next_round().unwrap();
    assert_eq!(game.current_player(), p(1));

    // Round 2: D, the last seat, challenges a true bid and is out.
    game.place_bid(p(1), Bid::new(1, 2)).unwrap();
    game.place_bid(p(2), Bid::new(2, 2)).unwrap();
    let result = game.challenge(p(3)).unwrap();
    assert_eq!(result.loser, p(3));

    let outcome = game.start_next_round().unwrap();
    assert_eq!(
        outcome,
        RoundOutcome::NextRound {
            starter: p(1),
            eliminated: vec![p(3)],
        }
    );
    assert_eq!(game.turn_order(), &[p(1), p(2)]);
}

#[test]
fn test_eliminated_players_are_skipped_in_bidding() {
    let mut game = scripted(&["A", "B", "C"], 1, &[2]);
    game.place_bid(p(0), Bid::new(1, 3)).unwrap();
    game.challenge(p(1)).unwrap();
    game.start_next_round().unwrap();

    game.place_bid(p(1), Bid::new(1, 2)).unwrap();
    assert_eq!(game.current_player(), p(2));
    game.place_bid(p(2), Bid::new(1, 4)).unwrap();
    assert_eq!(game.current_player(), p(1));
}

// =============================================================================
// Dice Accounting
// =============================================================================

#[test]
fn test_each_bluff_round_removes_exactly_one_die() {
    let mut game = Game::start_game(&["A", "B", "C"], 3, 99).unwrap();
    let mut previous = game.dice_in_play();

    while !game.is_over() {
        let opener = game.current_player();
        game.place_bid(opener, Bid::new(1, 6)).unwrap();
        game.challenge(game.current_player()).unwrap();
        game.start_next_round().unwrap();

        let now = game.dice_in_play();
        assert_eq!(now, previous - 1);
        previous = now;
    }
}

#[test]
fn test_reroll_keeps_counts() {
    let mut game = Game::start_game(&["A", "B"], 4, 5).unwrap();
    game.place_bid(p(0), Bid::new(1, 2)).unwrap();
    game.challenge(p(1)).unwrap();
    let counts: Vec<_> = game.players().map(|p| p.dice_count()).collect();

    game.start_next_round().unwrap();
    let after: Vec<_> = game.players().map(|p| p.dice_count()).collect();
    assert_eq!(counts, after);
}

/// Play random games to completion and check the end-state invariants.
#[test]
fn test_random_games_reach_single_winner() {
    let bidder = RandomBidder::default();

    for seed in 0..25u64 {
        let names = ["A", "B", "C", "D"];
        let config = GameConfig::default()
            .with_dice_per_player(2)
            .with_spot_on(seed % 2 == 0);
        let mut game = Game::with_config(&names, config, GameRng::new(seed)).unwrap();
        let mut rng = GameRng::new(seed).for_context("bots");
        let mut previous = game.dice_in_play();

        let mut steps = 0;
        while !game.is_over() && steps < 10_000 {
            steps += 1;
            match game.phase() {
                Phase::RoundResolved => {
                    game.start_next_round().unwrap();
                }
                _ => {
                    let me = game.current_player();
                    assert!(!game.player(me).unwrap().is_out());
                    let view = TableView::of(&game, me);
                    let decision = bidder.decide(&view, &mut rng);
                    if let Decision::Bid(bid) = decision {
                        assert!(game.check_bid(bid).is_ok(), "bot chose {}", bid);
                    }
                    game.act(me, decision).unwrap();
                }
            }
            let now = game.dice_in_play();
            assert!(now <= previous);
            previous = now;
        }

        assert!(game.is_over(), "seed {} did not finish", seed);
        let winner = game.winner().unwrap();
        let with_dice: Vec<_> = game
            .players()
            .filter(|p| p.dice_count() > 0)
            .map(|p| p.id)
            .collect();
        assert_eq!(with_dice, vec![winner]);
        assert_eq!(game.turn_order(), &[winner]);
    }
}
