use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

use crate::card::{Card, CardColor, CardId};

#[derive(
    Clone, Copy, Debug, Display, EnumIter, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
pub enum Seat {
    #[strum(serialize = "Player One")]
    PlayerOne,
    #[strum(serialize = "Player Two")]
    PlayerTwo,
}

impl Seat {
    pub fn opponent(self) -> Seat {
        match self {
            Seat::PlayerOne => Seat::PlayerTwo,
            Seat::PlayerTwo => Seat::PlayerOne,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Seat::PlayerOne => 0,
            Seat::PlayerTwo => 1,
        }
    }
}

#[derive(Debug)]
pub struct Player {
    pub seat: Seat,
    hand: Vec<Card>,
    uno_declared: bool,
}

impl Player {
    pub(crate) fn new(seat: Seat) -> Self {
        Self {
            seat,
            hand: Vec::new(),
            uno_declared: false,
        }
    }

    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    pub fn cards_count(&self) -> usize {
        self.hand.len()
    }

    pub fn uno_declared(&self) -> bool {
        self.uno_declared
    }

    pub fn card_index(&self, card_id: CardId) -> Option<usize> {
        self.hand.iter().position(|x| x.id() == card_id)
    }

    pub fn holds_color(&self, color: CardColor) -> bool {
        self.hand.iter().any(|card| card.color() == Some(color))
    }

    // Any change to the hand size invalidates an earlier declaration.
    pub(crate) fn add_card(&mut self, card: Card) {
        self.hand.push(card);
        self.uno_declared = false;
    }

    pub(crate) fn remove_card(&mut self, index: usize) -> Card {
        self.uno_declared = false;
        self.hand.remove(index)
    }

    pub(crate) fn uno(&mut self) {
        self.uno_declared = true;
    }

    pub(crate) fn take_hand(&mut self) -> Vec<Card> {
        self.uno_declared = false;
        std::mem::take(&mut self.hand)
    }
}
