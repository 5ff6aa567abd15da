//! Card point values.
//!
//! Points are awarded live: the player collects a card's value as soon as it
//! is played, and the round winner additionally collects everything left in
//! the opponent's hand.

use crate::card::{Card, CardFace, ColoredCard};
use crate::constants::{ACTION_CARD_POINTS, WILD_CARD_POINTS};

pub fn points_for(card: &Card) -> u32 {
    match card.face() {
        CardFace::Wild | CardFace::WildDrawFour => WILD_CARD_POINTS,
        CardFace::Colored(_, ColoredCard::Number(number)) => number.into(),
        CardFace::Colored(_, ColoredCard::Skip | ColoredCard::Reverse | ColoredCard::DrawTwo) => {
            ACTION_CARD_POINTS
        }
    }
}

pub fn hand_points(hand: &[Card]) -> u32 {
    hand.iter().map(points_for).sum()
}
