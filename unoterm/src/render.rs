use std::fmt::{self, Display};

use runo::{
    card::{Card, CardColor, CardFace},
    player::Seat,
    session::{Phase, Session},
};

pub const HUMAN: Seat = Seat::PlayerOne;
pub const COMPUTER: Seat = Seat::PlayerTwo;

pub trait AsSwatch {
    fn as_swatch(&self) -> &'static str;
}

impl AsSwatch for CardColor {
    fn as_swatch(&self) -> &'static str {
        match self {
            CardColor::Red => "🟥",
            CardColor::Green => "🟩",
            CardColor::Blue => "🟦",
            CardColor::Yellow => "🟨",
        }
    }
}

impl AsSwatch for Card {
    fn as_swatch(&self) -> &'static str {
        match self.color() {
            Some(color) => color.as_swatch(),
            None => "⬛",
        }
    }
}

pub fn seat_name(seat: Seat) -> &'static str {
    if seat == HUMAN {
        "You"
    } else {
        "Computer"
    }
}

/// Whether `card` would be accepted from a hand holding `hand`. Wild Draw Four
/// is only allowed without a card of the active color.
pub fn is_playable(card: &Card, hand: &[Card], top: &Card, active_color: CardColor) -> bool {
    if card.face() == CardFace::WildDrawFour
        && hand.iter().any(|held| held.color() == Some(active_color))
    {
        return false;
    }
    card.matches(top, active_color)
}

/// The whole table as the human sees it: scores, top card, both hands (the
/// computer's face down) and the recent narration.
pub struct TableView<'a>(pub &'a Session);

impl Display for TableView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let session = self.0;
        let top = session.get_top_card();
        let color = session.active_color();
        let computer = session.get_player(COMPUTER);

        writeln!(
            f,
            "-- Round {} | You {} | Computer {} | first to {} --",
            session.round(),
            session.score(HUMAN),
            session.score(COMPUTER),
            session.config().winning_score,
        )?;
        writeln!(
            f,
            "Top card: {} {top}   Color: {} {color}   Deck: {}",
            top.as_swatch(),
            color.as_swatch(),
            session.deck_size(),
        )?;
        writeln!(
            f,
            "Computer holds {} {}{}",
            computer.cards_count(),
            if computer.cards_count() == 1 { "card" } else { "cards" },
            if computer.uno_declared() { " and called UNO!" } else { "" },
        )?;

        writeln!(f, "Your hand:")?;
        let hand = session.hand(HUMAN);
        let acting =
            session.get_current_seat() == HUMAN && session.phase() == Phase::AwaitingAction;
        for (position, card) in hand.iter().enumerate() {
            let playable = acting && is_playable(card, hand, top, color);
            writeln!(
                f,
                "  {:>2}. {} {card}{}",
                position + 1,
                card.as_swatch(),
                if playable { "  *" } else { "" },
            )?;
        }
        if session.get_player(HUMAN).uno_declared() {
            writeln!(f, "You called UNO.")?;
        }

        for entry in session.log() {
            writeln!(f, "> {entry}")?;
        }
        f.write_str(&prompt(session))
    }
}

pub fn table(session: &Session) -> String {
    TableView(session).to_string()
}

/// What the human is expected to do next.
pub fn prompt(session: &Session) -> String {
    match session.phase() {
        Phase::AwaitingColorChoice if session.get_current_seat() == HUMAN => {
            "Pick a color: `color red|green|blue|yellow`.".to_string()
        }
        Phase::AwaitingAction if session.get_current_seat() == HUMAN => {
            "Your turn: `play <n>`, `draw` or `uno`.".to_string()
        }
        Phase::AwaitingAction | Phase::AwaitingColorChoice => {
            "The computer is thinking...".to_string()
        }
        Phase::RoundOver(outcome) => format!(
            "{} won the round for {} points. Type `next` to deal again.",
            seat_name(outcome.winner),
            outcome.points,
        ),
        Phase::MatchOver(outcome) => format!(
            "{} won the match with {} points! Type `reset` for a rematch.",
            seat_name(outcome.winner),
            session.score(outcome.winner),
        ),
    }
}

#[cfg(test)]
mod tests {
    use runo::{
        card::{CardId, ColoredCard},
        config::MatchConfig,
    };

    use super::*;

    fn number(color: CardColor, number: u8) -> CardFace {
        CardFace::Colored(color, ColoredCard::Number(number))
    }

    #[test]
    fn wild_cards_have_no_color() {
        let session = Session::with_seed(MatchConfig::default(), 3).unwrap();
        for card in session.hand(HUMAN) {
            let expected = match card.color() {
                Some(color) => color.as_swatch(),
                None => "⬛",
            };
            assert_eq!(card.as_swatch(), expected);
        }
        assert_eq!(CardColor::Yellow.as_swatch(), "🟨");
    }

    #[test]
    fn table_lists_the_whole_hand() {
        let session = Session::with_seed(MatchConfig::default(), 3).unwrap();
        let rendered = table(&session);

        assert!(rendered.starts_with("-- Round 1 | You 0 | Computer 0 | first to 500 --"));
        assert!(rendered.contains("Computer holds 7 cards"));
        for (position, card) in session.hand(HUMAN).iter().enumerate() {
            let line = format!("{:>2}. {} {card}", position + 1, card.as_swatch());
            assert!(rendered.contains(&line));
        }
        assert!(rendered.ends_with(&prompt(&session)));
    }

    #[test]
    fn wild_draw_four_is_not_marked_while_holding_active_color() {
        let top = Card::new(CardId(0), number(CardColor::Red, 9));
        let wild_draw_four = Card::new(CardId(1), CardFace::WildDrawFour);
        let red_3 = Card::new(CardId(2), number(CardColor::Red, 3));
        let blue_3 = Card::new(CardId(3), number(CardColor::Blue, 3));

        let holding_red = [wild_draw_four, red_3];
        assert!(!is_playable(&wild_draw_four, &holding_red, &top, CardColor::Red));
        assert!(is_playable(&red_3, &holding_red, &top, CardColor::Red));

        let without_red = [wild_draw_four, blue_3];
        assert!(is_playable(&wild_draw_four, &without_red, &top, CardColor::Red));
        assert!(!is_playable(&blue_3, &without_red, &top, CardColor::Red));
    }

    #[test]
    fn prompt_follows_turn() {
        let session = Session::with_seed(MatchConfig::default(), 3).unwrap();
        let expected = if session.get_current_seat() == HUMAN {
            "Your turn"
        } else {
            "thinking"
        };
        assert!(prompt(&session).contains(expected));
    }
}
