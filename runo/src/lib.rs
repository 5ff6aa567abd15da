//! Two-player UNO rules: deck, scoring, the match session and a computer opponent.

pub mod autoplay;
pub mod card;
pub mod config;
pub mod constants;
pub mod deck;
pub mod error;
pub mod opponent;
pub mod player;
pub mod progress;
pub mod scoring;
pub mod session;
pub mod turn;

pub use crate::autoplay::{take_turn, DeferredTurn};
pub use crate::card::{Card, CardColor, CardFace, CardId, ColoredCard};
pub use crate::config::MatchConfig;
pub use crate::deck::Deck;
pub use crate::error::{Rejection, UnoError};
pub use crate::opponent::{GreedyOpponent, Move, Opponent};
pub use crate::player::Seat;
pub use crate::progress::SavedProgress;
pub use crate::session::{Phase, Session, SessionSnapshot};
pub use crate::turn::{RoundOutcome, TurnAction, TurnActionResult};
