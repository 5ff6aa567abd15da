use std::fmt::Debug;

use thiserror::Error;

use crate::player::Seat;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum UnoError {
    #[error("Winning score must be greater than zero")]
    ZeroWinningScore,
    #[error("Hand size must be greater than zero")]
    ZeroHandSize,
    #[error("Hand size {0} leaves too few cards to start a round")]
    HandSizeTooLarge(usize),
    #[error("Log capacity must be greater than zero")]
    ZeroLogCapacity,
    #[error("Saved progress has no round in progress")]
    NoRound,
}

pub type Result<T, E = UnoError> = std::result::Result<T, E>;

/// Why an action was ignored. The display text is what lands in the narration log.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    #[error("It is not {0}'s turn")]
    NotYourTurn(Seat),
    #[error("A color has to be chosen first")]
    ColorChoicePending,
    #[error("No color choice is pending")]
    NoColorChoicePending,
    #[error("The round is over")]
    RoundOver,
    #[error("The match is over")]
    MatchOver,
    #[error("The round is still being played")]
    RoundInProgress,
    #[error("That card is not in {0}'s hand")]
    CardNotInHand(Seat),
    #[error("That card does not match the color or value in play")]
    IllegalMove,
    #[error("Cannot play Wild Draw Four while holding a matching color")]
    WildDrawFourWithMatchingColor,
    #[error("UNO can only be called while holding exactly two cards")]
    UnoNotAllowed,
}
