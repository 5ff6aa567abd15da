use strum::EnumCount;

use crate::card::{CardColor, CardFace, ColoredCard};

/// One zero and two of every other digit, per color.
pub(crate) const NUMBER_CARDS_PER_COLOR: &[u8] =
    &[0, 1, 1, 2, 2, 3, 3, 4, 4, 5, 5, 6, 6, 7, 7, 8, 8, 9, 9];
pub(crate) const ACTION_CARDS_PER_COLOR: [(ColoredCard, u8); 3] = [
    (ColoredCard::Skip, 2),
    (ColoredCard::Reverse, 2),
    (ColoredCard::DrawTwo, 2),
];
pub(crate) const WILD_CARDS: [(CardFace, u8); 2] =
    [(CardFace::Wild, 4), (CardFace::WildDrawFour, 4)];

const fn action_cards_per_color() -> u8 {
    let mut total = 0;
    let mut i = 0;
    while i < ACTION_CARDS_PER_COLOR.len() {
        total += ACTION_CARDS_PER_COLOR[i].1;
        i += 1;
    }
    total
}

const fn wild_cards() -> u8 {
    let mut total = 0;
    let mut i = 0;
    while i < WILD_CARDS.len() {
        total += WILD_CARDS[i].1;
        i += 1;
    }
    total
}

pub const TOTAL_CARDS_IN_DECK: u8 =
    (NUMBER_CARDS_PER_COLOR.len() as u8 + action_cards_per_color()) * CardColor::COUNT as u8
        + wild_cards();

pub(crate) const WILD_CARD_POINTS: u32 = 50;
pub(crate) const ACTION_CARD_POINTS: u32 = 20;

/// Cards drawn for playing down to one card without calling UNO.
pub(crate) const PENALTY_CARDS: usize = 2;
pub(crate) const DRAW_TWO_PENALTY: usize = 2;
pub(crate) const WILD_DRAW_FOUR_PENALTY: usize = 4;

pub const DEFAULT_WINNING_SCORE: u32 = 500;
pub const DEFAULT_HAND_SIZE: usize = 7;
pub const DEFAULT_LOG_CAPACITY: usize = 5;
