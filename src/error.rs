//! Engine errors.
//!
//! Every error is a local validation failure. The engine never changes state
//! when it returns one, so the caller can re-prompt and try again.

use crate::core::{Bid, PlayerId};
use crate::engine::Phase;

/// Result alias used throughout the engine.
pub type GameResult<T> = Result<T, GameError>;

/// Why a bid was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BidRejection {
    #[error("quantity must be at least 1")]
    ZeroQuantity,

    #[error("face must be between 1 and {faces}")]
    FaceOutOfRange { faces: u8 },

    #[error("only {dice_in_play} dice are in play")]
    ExceedsDiceInPlay { dice_in_play: u32 },

    #[error("does not outrank the current bid")]
    DoesNotOutrank,
}

/// An engine operation, named for error reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    PlaceBid,
    Challenge,
    SpotOn,
    StartNextRound,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Operation::PlaceBid => "place a bid",
            Operation::Challenge => "challenge",
            Operation::SpotOn => "call spot-on",
            Operation::StartNextRound => "start the next round",
        };
        f.write_str(name)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// Bad player count or dice setup. Fatal to game start.
    #[error("invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },

    /// Someone other than the turn-holder tried to act.
    #[error("{actual} acted out of turn, it is {expected}'s turn")]
    OutOfTurn { expected: PlayerId, actual: PlayerId },

    /// The bid fails validation or the ordering rule.
    #[error("illegal bid {bid}: {reason}")]
    IllegalBid {
        bid: Bid,
        current: Option<Bid>,
        reason: BidRejection,
    },

    /// The operation is not allowed in the current phase.
    #[error("cannot {operation} while {phase}")]
    IllegalStateTransition { operation: Operation, phase: Phase },
}

impl GameError {
    pub(crate) fn invalid_config(reason: impl Into<String>) -> Self {
        GameError::InvalidConfiguration {
            reason: reason.into(),
        }
    }

    /// True for errors the caller fixes by asking the same player again.
    #[must_use]
    pub fn is_reprompt(&self) -> bool {
        matches!(self, GameError::OutOfTurn { .. } | GameError::IllegalBid { .. })
    }
}
