//! Computer opponent.
//!
//! The policy is greedy and looks one play ahead at most: it takes the first
//! card that fits, keeps wild cards back while something else fits, and picks
//! the color it holds most of after a wild.

use rand::Rng;

use crate::card::{Card, CardColor, CardFace, CardId};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Move {
    Play(CardId),
    Draw,
}

/// Decision maker for one seat, consulted by a turn driver.
pub trait Opponent {
    fn choose_move(&mut self, hand: &[Card], top: &Card, active_color: CardColor) -> Move;

    /// Called after the wild has left the hand, so `remaining` excludes it.
    fn choose_color(&mut self, remaining: &[Card]) -> CardColor;
}

pub fn select_move(hand: &[Card], top: &Card, active_color: CardColor) -> Move {
    let matching = hand
        .iter()
        .find(|card| !card.is_wild() && card.matches(top, active_color));
    if let Some(card) = matching {
        return Move::Play(card.id());
    }

    if let Some(wild) = hand.iter().find(|card| card.face() == CardFace::Wild) {
        return Move::Play(wild.id());
    }

    let holds_active_color = hand.iter().any(|card| card.color() == Some(active_color));
    if !holds_active_color {
        if let Some(card) = hand.iter().find(|card| card.face() == CardFace::WildDrawFour) {
            return Move::Play(card.id());
        }
    }

    Move::Draw
}

pub fn select_color_after_wild<R: Rng + ?Sized>(remaining: &[Card], rng: &mut R) -> CardColor {
    let mut counts = [0usize; 4];
    for color in remaining.iter().filter_map(Card::color) {
        if let Some(slot) = CardColor::ALL.iter().position(|x| *x == color) {
            counts[slot] += 1;
        }
    }

    // First color with the highest count wins ties.
    let mut best: Option<(CardColor, usize)> = None;
    for (color, count) in CardColor::ALL.into_iter().zip(counts) {
        if count > 0 && best.map_or(true, |(_, best_count)| count > best_count) {
            best = Some((color, count));
        }
    }

    match best {
        Some((color, _)) => color,
        None => CardColor::random(rng),
    }
}

pub struct GreedyOpponent<R: Rng> {
    rng: R,
}

impl<R: Rng> GreedyOpponent<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Opponent for GreedyOpponent<R> {
    fn choose_move(&mut self, hand: &[Card], top: &Card, active_color: CardColor) -> Move {
        select_move(hand, top, active_color)
    }

    fn choose_color(&mut self, remaining: &[Card]) -> CardColor {
        select_color_after_wild(remaining, &mut self.rng)
    }
}
