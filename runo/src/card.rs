use core::fmt;
use std::fmt::Display;

use rand::Rng;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumCount as EnumCountMacro, EnumIter, EnumString};

#[derive(
    Clone,
    Copy,
    Debug,
    Display,
    EnumString,
    EnumCountMacro,
    EnumIter,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum CardColor {
    Red,
    Green,
    Blue,
    Yellow,
}

impl CardColor {
    pub const ALL: [CardColor; 4] = [
        CardColor::Red,
        CardColor::Green,
        CardColor::Blue,
        CardColor::Yellow,
    ];

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColoredCard {
    Number(u8),
    Skip,
    Reverse,
    DrawTwo,
}

/// What is printed on a card. Wild faces have no color of their own.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardFace {
    Colored(CardColor, ColoredCard),
    Wild,
    WildDrawFour,
}

impl CardFace {
    pub fn color(&self) -> Option<CardColor> {
        match self {
            CardFace::Colored(color, _) => Some(*color),
            CardFace::Wild | CardFace::WildDrawFour => None,
        }
    }

    pub fn is_wild(&self) -> bool {
        self.color().is_none()
    }

    /// Compares the printed value only, ignoring color.
    pub fn same_value(&self, other: &CardFace) -> bool {
        match (self, other) {
            (CardFace::Colored(_, a), CardFace::Colored(_, b)) => a == b,
            (a, b) => a == b,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u8);

impl Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    id: CardId,
    face: CardFace,
}

impl Card {
    pub fn new(id: CardId, face: CardFace) -> Self {
        Self { id, face }
    }

    pub fn id(&self) -> CardId {
        self.id
    }

    pub fn face(&self) -> CardFace {
        self.face
    }

    pub fn color(&self) -> Option<CardColor> {
        self.face.color()
    }

    pub fn is_wild(&self) -> bool {
        self.face.is_wild()
    }

    pub fn same_value(&self, other: &Card) -> bool {
        self.face.same_value(&other.face)
    }

    /// Whether this card may be laid on `top` while `active_color` is in force.
    ///
    /// Wild cards always match here. The extra restriction on Wild Draw Four
    /// depends on the rest of the hand and is checked by the session.
    pub fn matches(&self, top: &Card, active_color: CardColor) -> bool {
        match self.color() {
            None => true,
            Some(color) => color == active_color || self.same_value(top),
        }
    }
}

impl Display for CardFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CardFace::Colored(color, card) => {
                write!(f, "{} {}", color, {
                    match card {
                        ColoredCard::Number(number) => number.to_string(),
                        ColoredCard::Skip => "Skip".to_string(),
                        ColoredCard::Reverse => "Reverse".to_string(),
                        ColoredCard::DrawTwo => "Draw Two".to_string(),
                    }
                })
            }
            CardFace::Wild => write!(f, "Wild"),
            CardFace::WildDrawFour => write!(f, "Wild Draw Four"),
        }
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.face.fmt(f)
    }
}
