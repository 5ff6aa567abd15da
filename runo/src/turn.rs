use serde::{Deserialize, Serialize};

use crate::card::{CardColor, CardId};
use crate::error::Rejection;
use crate::player::Seat;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnAction {
    Play(CardId),
    Draw,
    Uno,
    ChooseColor(CardColor),
}

/// Winner of a finished round and the opponent hand total they collected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundOutcome {
    pub winner: Seat,
    pub points: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnActionResult {
    Neutral,
    Skip,
    Reverse,
    DrawTwo,
    Wild,
    WildDrawFour,
    ColorChosen(CardColor),
    SelfDraw,
    UnoDeclared,
    MissedUno,
    RoundWon(RoundOutcome),
    MatchWon(RoundOutcome),
    RoundStarted,
    Rejected(Rejection),
}

impl TurnActionResult {
    pub fn is_rejected(&self) -> bool {
        matches!(self, TurnActionResult::Rejected(_))
    }
}
