use rand::{seq::SliceRandom, Rng};
use strum::IntoEnumIterator;

use crate::{
    card::{Card, CardColor, CardFace, CardId, ColoredCard},
    constants::{ACTION_CARDS_PER_COLOR, NUMBER_CARDS_PER_COLOR, TOTAL_CARDS_IN_DECK, WILD_CARDS},
};

/// Draw pile. Cards are taken from the end of the vector.
#[derive(Clone, Debug, Default)]
pub struct Deck(pub(crate) Vec<Card>);

impl Deck {
    /// Builds the full 108-card deck in a fixed order, ids `0..108`.
    pub fn generate() -> Self {
        let mut faces = Vec::with_capacity(TOTAL_CARDS_IN_DECK.into());

        for color in CardColor::iter() {
            faces.extend(
                NUMBER_CARDS_PER_COLOR
                    .iter()
                    .map(|number| CardFace::Colored(color, ColoredCard::Number(*number))),
            );
            for (kind, count) in ACTION_CARDS_PER_COLOR {
                faces.extend((0..count).map(|_| CardFace::Colored(color, kind)));
            }
        }
        for (face, count) in WILD_CARDS {
            faces.extend((0..count).map(|_| face));
        }

        Self(
            faces
                .into_iter()
                .enumerate()
                .map(|(index, face)| Card::new(CardId(index as u8), face))
                .collect(),
        )
    }

    pub(crate) fn from_cards(cards: Vec<Card>) -> Self {
        Self(cards)
    }

    /// Shuffles in place (Fisher-Yates).
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.0.shuffle(rng);
    }

    pub fn shuffled<R: Rng + ?Sized>(mut self, rng: &mut R) -> Self {
        self.shuffle(rng);
        self
    }

    pub fn draw(&mut self) -> Option<Card> {
        self.0.pop()
    }

    pub(crate) fn put_back(&mut self, card: Card) {
        self.0.push(card);
    }

    pub fn cards(&self) -> &[Card] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
