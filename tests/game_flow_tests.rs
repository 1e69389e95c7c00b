//! Game setup, turn order, and phase transition tests.

use liars_dice::core::{Bid, GameConfig, PlayerId, ScriptedDice};
use liars_dice::engine::{Game, Phase, RoundOutcome};
use liars_dice::error::{GameError, Operation};

fn scripted(names: &[&str], config: GameConfig, script: &[u8]) -> Game<ScriptedDice> {
    Game::with_config(names, config, ScriptedDice::new(script.iter().copied())).unwrap()
}

fn p(i: u8) -> PlayerId {
    PlayerId::new(i)
}

// =============================================================================
// Setup
// =============================================================================

#[test]
fn test_one_player_is_invalid() {
    let err = Game::start_game(&["Solo"], 5, 42).unwrap_err();
    assert!(matches!(err, GameError::InvalidConfiguration { .. }));
}

#[test]
fn test_no_players_is_invalid() {
    let names: [&str; 0] = [];
    assert!(Game::start_game(&names, 5, 42).is_err());
}

#[test]
fn test_zero_dice_is_invalid() {
    let err = Game::start_game(&["A", "B"], 0, 42).unwrap_err();
    assert!(matches!(err, GameError::InvalidConfiguration { .. }));
}

#[test]
fn test_too_many_dice_is_invalid() {
    let err = Game::start_game(&["A", "B"], usize::MAX, 42).unwrap_err();
    assert!(matches!(err, GameError::InvalidConfiguration { .. }));

    let err = Game::start_game(&["A", "B", "C"], u32::MAX as usize, 42).unwrap_err();
    assert!(matches!(err, GameError::InvalidConfiguration { .. }));
}

#[test]
fn test_two_players_five_dice() {
    let game = Game::start_game(&["Ada", "Bo"], 5, 42).unwrap();

    assert_eq!(game.players().count(), 2);
    for player in game.players() {
        assert_eq!(player.dice_count(), 5);
        assert!(player.dice().iter().all(|d| (1..=6).contains(d)));
    }
    assert_eq!(game.dice_in_play(), 10);
    assert_eq!(game.phase(), Phase::AwaitingBid);
    assert_eq!(game.current_player(), p(0));
    assert_eq!(game.current_bid(), None);
    assert_eq!(game.winner(), None);
}

#[test]
fn test_same_seed_same_dice() {
    let a = Game::start_game(&["A", "B", "C"], 5, 7).unwrap();
    let b = Game::start_game(&["A", "B", "C"], 5, 7).unwrap();
    let dice_a: Vec<_> = a.players().map(|p| p.dice().to_vec()).collect();
    let dice_b: Vec<_> = b.players().map(|p| p.dice().to_vec()).collect();
    assert_eq!(dice_a, dice_b);
}

#[test]
fn test_names_are_trimmed() {
    let game = Game::start_game(&[" Ada ", "Bo"], 1, 1).unwrap();
    assert_eq!(game.player(p(0)).unwrap().name, "Ada");
}

// =============================================================================
// Turn Order
// =============================================================================

#[test]
fn test_bids_advance_turn_and_wrap() {
    let mut game = scripted(&["A", "B", "C"], GameConfig::default(), &[4]);

    game.place_bid(p(0), Bid::new(1, 4)).unwrap();
    assert_eq!(game.current_player(), p(1));
    game.place_bid(p(1), Bid::new(2, 4)).unwrap();
    assert_eq!(game.current_player(), p(2));
    game.place_bid(p(2), Bid::new(3, 4)).unwrap();
    assert_eq!(game.current_player(), p(0));
    assert_eq!(game.phase(), Phase::AwaitingBidOrChallenge);
}

#[test]
fn test_bid_history_records_sequence() {
    let mut game = scripted(&["A", "B"], GameConfig::default(), &[4]);
    game.place_bid(p(0), Bid::new(1, 4)).unwrap();
    game.place_bid(p(1), Bid::new(1, 5)).unwrap();

    let history: Vec<_> = game.bid_history().iter().copied().collect();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].player, p(0));
    assert_eq!(history[0].sequence, 0);
    assert_eq!(history[1].bid, Bid::new(1, 5));
    assert_eq!(history[1].sequence, 1);
    assert_eq!(game.current_bid().unwrap().player, p(1));
}

#[test]
fn test_out_of_turn_bid() {
    let mut game = scripted(&["A", "B"], GameConfig::default(), &[4]);
    let err = game.place_bid(p(1), Bid::new(1, 4)).unwrap_err();
    assert_eq!(
        err,
        GameError::OutOfTurn {
            expected: p(0),
            actual: p(1),
        }
    );
    assert_eq!(game.current_bid(), None);
    assert_eq!(game.phase(), Phase::AwaitingBid);
}

#[test]
fn test_out_of_turn_challenge() {
    let mut game = scripted(&["A", "B", "C"], GameConfig::default(), &[4]);
    game.place_bid(p(0), Bid::new(1, 4)).unwrap();
    let err = game.challenge(p(2)).unwrap_err();
    assert!(matches!(err, GameError::OutOfTurn { .. }));
    assert_eq!(game.phase(), Phase::AwaitingBidOrChallenge);
}

// =============================================================================
// Phase Transitions
// =============================================================================

#[test]
fn test_challenge_before_any_bid() {
    let mut game = scripted(&["A", "B"], GameConfig::default(), &[4]);
    let err = game.challenge(p(0)).unwrap_err();
    assert_eq!(
        err,
        GameError::IllegalStateTransition {
            operation: Operation::Challenge,
            phase: Phase::AwaitingBid,
        }
    );
}

#[test]
fn test_next_round_mid_round() {
    let mut game = scripted(&["A", "B"], GameConfig::default(), &[4]);
    game.place_bid(p(0), Bid::new(1, 4)).unwrap();
    let err = game.start_next_round().unwrap_err();
    assert!(matches!(
        err,
        GameError::IllegalStateTransition {
            operation: Operation::StartNextRound,
            ..
        }
    ));
}

#[test]
fn test_no_bids_after_resolution() {
    let mut game = scripted(&["A", "B"], GameConfig::default(), &[4]);
    game.place_bid(p(0), Bid::new(1, 4)).unwrap();
    game.challenge(p(1)).unwrap();
    assert_eq!(game.phase(), Phase::RoundResolved);

    let err = game.place_bid(game.current_player(), Bid::new(3, 4)).unwrap_err();
    assert!(matches!(
        err,
        GameError::IllegalStateTransition {
            operation: Operation::PlaceBid,
            phase: Phase::RoundResolved,
        }
    ));
    assert!(game.challenge(game.current_player()).is_err());
}

#[test]
fn test_round_cycle() {
    let mut game = scripted(&["A", "B"], GameConfig::default().with_dice_per_player(3), &[4]);
    game.place_bid(p(0), Bid::new(2, 4)).unwrap();
    game.challenge(p(1)).unwrap();

    let outcome = game.start_next_round().unwrap();
    assert!(matches!(outcome, RoundOutcome::NextRound { .. }));
    assert_eq!(game.phase(), Phase::AwaitingBid);
    assert_eq!(game.round(), 2);
    assert_eq!(game.current_bid(), None);
    assert!(game.bid_history().is_empty());
    assert_eq!(game.dice_in_play(), 5);

    // A second start without a challenge is refused.
    assert!(game.start_next_round().is_err());
}

#[test]
fn test_game_over_rejects_everything() {
    let mut game = scripted(&["A", "B"], GameConfig::default().with_dice_per_player(1), &[4]);
    game.place_bid(p(0), Bid::new(1, 4)).unwrap();
    game.challenge(p(1)).unwrap();
    let outcome = game.start_next_round().unwrap();

    assert_eq!(
        outcome,
        RoundOutcome::GameOver {
            winner: p(0),
            eliminated: vec![p(1)],
        }
    );
    assert!(game.is_over());
    assert_eq!(game.winner(), Some(p(0)));
    assert_eq!(game.current_player(), p(0));

    assert!(matches!(
        game.place_bid(p(0), Bid::new(1, 2)),
        Err(GameError::IllegalStateTransition {
            phase: Phase::GameOver,
            ..
        })
    ));
    assert!(game.challenge(p(0)).is_err());
    assert!(game.start_next_round().is_err());
}

#[test]
fn test_opening_bid_accepts_any_valid_face() {
    for face in 1..=6 {
        let mut game = scripted(&["A", "B"], GameConfig::default(), &[2]);
        assert!(game.place_bid(p(0), Bid::new(1, face)).is_ok());
    }
}
