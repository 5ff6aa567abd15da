use std::collections::VecDeque;

use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::Serialize;
use tracing::{debug, info};

use crate::card::{Card, CardColor, CardFace, CardId, ColoredCard};
use crate::config::MatchConfig;
use crate::constants::{DRAW_TWO_PENALTY, PENALTY_CARDS, WILD_DRAW_FOUR_PENALTY};
use crate::deck::Deck;
use crate::error::{Rejection, Result};
use crate::player::{Player, Seat};
use crate::progress::SavedProgress;
use crate::scoring::{hand_points, points_for};
use crate::turn::{RoundOutcome, TurnAction, TurnActionResult};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Phase {
    /// The seat holding the turn may play, draw or call UNO.
    AwaitingAction,
    /// A wild card was played; the turn does not move until a color is chosen.
    AwaitingColorChoice,
    RoundOver(RoundOutcome),
    MatchOver(RoundOutcome),
}

/// Everything a front end needs to draw the table.
#[derive(Clone, Debug, Serialize)]
pub struct SessionSnapshot {
    pub hands: [Vec<Card>; 2],
    pub uno_declared: [bool; 2],
    pub discard_pile: Vec<Card>,
    pub deck_size: usize,
    pub active_color: CardColor,
    pub current_seat: Seat,
    pub phase: Phase,
    pub awaiting_color_choice: bool,
    pub scores: [u32; 2],
    pub round: u32,
    pub winning_score: u32,
    pub log: Vec<String>,
    pub revision: u64,
}

/// One two-player match: the rule engine and all of its mutable state.
///
/// Every action either applies completely or is rejected without touching the
/// table; rejections are only recorded in the narration log.
#[derive(Debug)]
pub struct Session {
    config: MatchConfig,
    rng: StdRng,
    deck: Deck,
    players: [Player; 2],
    discard_pile: Vec<Card>,
    active_color: CardColor,
    current_seat: Seat,
    phase: Phase,
    scores: [u32; 2],
    round: u32,
    log: VecDeque<String>,
    revision: u64,
}

impl Session {
    pub fn new(config: MatchConfig) -> Result<Self> {
        Self::with_rng(config, StdRng::from_entropy(), SavedProgress::default())
    }

    pub fn with_seed(config: MatchConfig, seed: u64) -> Result<Self> {
        Self::with_rng(config, StdRng::seed_from_u64(seed), SavedProgress::default())
    }

    /// Rebuilds a match from stored progress by dealing a fresh round at the
    /// stored round number.
    pub fn resume(config: MatchConfig, progress: SavedProgress) -> Result<Self> {
        Self::with_rng(config, StdRng::from_entropy(), progress)
    }

    pub fn resume_with_seed(
        config: MatchConfig,
        progress: SavedProgress,
        seed: u64,
    ) -> Result<Self> {
        Self::with_rng(config, StdRng::seed_from_u64(seed), progress)
    }

    fn with_rng(config: MatchConfig, rng: StdRng, progress: SavedProgress) -> Result<Self> {
        config.validate()?;
        progress.validate()?;

        let mut session = Session {
            config,
            rng,
            deck: Deck::default(),
            players: [Player::new(Seat::PlayerOne), Player::new(Seat::PlayerTwo)],
            discard_pile: Vec::new(),
            active_color: CardColor::Red,
            current_seat: Seat::PlayerOne,
            phase: Phase::AwaitingAction,
            scores: progress.scores,
            round: progress.round,
            log: VecDeque::with_capacity(config.log_capacity),
            revision: 0,
        };
        session.setup_round();
        Ok(session)
    }

    pub fn start_match(&mut self) -> TurnActionResult {
        self.scores = [0, 0];
        self.round = 1;
        self.log.clear();
        info!("match started");
        self.setup_round();
        TurnActionResult::RoundStarted
    }

    pub fn reset_match(&mut self) -> TurnActionResult {
        self.start_match()
    }

    pub fn start_next_round(&mut self) -> TurnActionResult {
        match self.phase {
            Phase::RoundOver(_) => {}
            Phase::MatchOver(_) => return self.reject(Rejection::MatchOver),
            Phase::AwaitingAction | Phase::AwaitingColorChoice => {
                return self.reject(Rejection::RoundInProgress)
            }
        }

        self.round += 1;
        self.setup_round();
        TurnActionResult::RoundStarted
    }

    pub fn play_turn(&mut self, seat: Seat, turn_action: TurnAction) -> TurnActionResult {
        match turn_action {
            TurnAction::Play(card_id) => self.play_card(seat, card_id),
            TurnAction::Draw => self.draw_card(seat),
            TurnAction::Uno => self.declare_uno(seat),
            TurnAction::ChooseColor(color) => {
                if self.phase == Phase::AwaitingColorChoice && seat != self.current_seat {
                    return self.reject(Rejection::NotYourTurn(seat));
                }
                self.choose_color(color)
            }
        }
    }

    pub fn play_card(&mut self, seat: Seat, card_id: CardId) -> TurnActionResult {
        if let Err(rejection) = self.check_turn(seat) {
            return self.reject(rejection);
        }

        let player = &self.players[seat.index()];
        let Some(hand_card_index) = player.card_index(card_id) else {
            return self.reject(Rejection::CardNotInHand(seat));
        };
        let card = player.hand()[hand_card_index];

        if card.face() == CardFace::WildDrawFour && player.holds_color(self.active_color) {
            return self.reject(Rejection::WildDrawFourWithMatchingColor);
        }
        if !card.matches(self.get_top_card(), self.active_color) {
            return self.reject(Rejection::IllegalMove);
        }

        let uno_declared = player.uno_declared();
        let player = &mut self.players[seat.index()];
        player.remove_card(hand_card_index);
        let cards_left = player.cards_count();

        self.discard_pile.push(card);
        self.scores[seat.index()] += points_for(&card);
        self.revision += 1;
        info!(%seat, %card, cards_left, "card played");
        self.narrate(format!("{seat} played {card}."));

        if cards_left == 0 {
            return self.finish_round(seat);
        }

        if cards_left == 1 && !uno_declared {
            self.narrate(format!(
                "{seat} forgot to call UNO! Drawing {PENALTY_CARDS} cards."
            ));
            self.draw_cards_to_player(seat, PENALTY_CARDS);
            return TurnActionResult::MissedUno;
        }

        let opponent = seat.opponent();
        match card.face() {
            CardFace::Colored(color, kind) => {
                self.active_color = color;
                match kind {
                    ColoredCard::Number(_) => {
                        self.pass_turn();
                        TurnActionResult::Neutral
                    }
                    ColoredCard::Skip => {
                        self.narrate(format!("{opponent} was skipped!"));
                        TurnActionResult::Skip
                    }
                    // With two seats a reverse hands the turn straight back.
                    ColoredCard::Reverse => {
                        self.narrate(format!("{opponent} was skipped!"));
                        TurnActionResult::Reverse
                    }
                    ColoredCard::DrawTwo => {
                        self.draw_cards_to_player(opponent, DRAW_TWO_PENALTY);
                        self.narrate(format!("{opponent} draws {DRAW_TWO_PENALTY} cards!"));
                        TurnActionResult::DrawTwo
                    }
                }
            }
            CardFace::Wild => {
                self.phase = Phase::AwaitingColorChoice;
                TurnActionResult::Wild
            }
            CardFace::WildDrawFour => {
                self.draw_cards_to_player(opponent, WILD_DRAW_FOUR_PENALTY);
                self.narrate(format!(
                    "{opponent} draws {WILD_DRAW_FOUR_PENALTY} cards!"
                ));
                self.phase = Phase::AwaitingColorChoice;
                TurnActionResult::WildDrawFour
            }
        }
    }

    pub fn choose_color(&mut self, color: CardColor) -> TurnActionResult {
        match self.phase {
            Phase::AwaitingColorChoice => {}
            Phase::AwaitingAction => return self.reject(Rejection::NoColorChoicePending),
            Phase::RoundOver(_) => return self.reject(Rejection::RoundOver),
            Phase::MatchOver(_) => return self.reject(Rejection::MatchOver),
        }

        self.active_color = color;
        self.phase = Phase::AwaitingAction;
        self.revision += 1;
        info!(%color, "color chosen");
        self.narrate(format!("Color changed to {color}."));
        self.pass_turn();
        TurnActionResult::ColorChosen(color)
    }

    pub fn draw_card(&mut self, seat: Seat) -> TurnActionResult {
        if let Err(rejection) = self.check_turn(seat) {
            return self.reject(rejection);
        }

        match self.draw_one() {
            Some(card) => {
                self.players[seat.index()].add_card(card);
                debug!(%seat, %card, "card drawn");
                self.narrate(format!("{seat} drew a card."));
            }
            None => self.narrate("There are no cards left to draw.".to_string()),
        }
        self.revision += 1;
        self.pass_turn();
        TurnActionResult::SelfDraw
    }

    pub fn declare_uno(&mut self, seat: Seat) -> TurnActionResult {
        if let Err(rejection) = self.check_turn(seat) {
            return self.reject(rejection);
        }

        let player = &mut self.players[seat.index()];
        if player.cards_count() != 2 {
            return self.reject(Rejection::UnoNotAllowed);
        }

        player.uno();
        self.revision += 1;
        self.narrate(format!("{seat} called UNO!"));
        TurnActionResult::UnoDeclared
    }

    /// Whether `seat` may play, draw or call UNO right now.
    pub fn check_turn(&self, seat: Seat) -> Result<(), Rejection> {
        match self.phase {
            Phase::AwaitingAction if seat == self.current_seat => Ok(()),
            Phase::AwaitingAction => Err(Rejection::NotYourTurn(seat)),
            Phase::AwaitingColorChoice => Err(Rejection::ColorChoicePending),
            Phase::RoundOver(_) => Err(Rejection::RoundOver),
            Phase::MatchOver(_) => Err(Rejection::MatchOver),
        }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_awaiting_color_choice(&self) -> bool {
        self.phase == Phase::AwaitingColorChoice
    }

    pub fn get_current_seat(&self) -> Seat {
        self.current_seat
    }

    pub fn get_player(&self, seat: Seat) -> &Player {
        &self.players[seat.index()]
    }

    pub fn hand(&self, seat: Seat) -> &[Card] {
        self.players[seat.index()].hand()
    }

    pub fn get_top_card(&self) -> &Card {
        self.discard_pile
            .last()
            .expect("The discard pile is never empty once a round has started.")
    }

    pub fn discard_pile(&self) -> &[Card] {
        &self.discard_pile
    }

    pub fn deck_size(&self) -> usize {
        self.deck.len()
    }

    pub fn active_color(&self) -> CardColor {
        self.active_color
    }

    pub fn score(&self, seat: Seat) -> u32 {
        self.scores[seat.index()]
    }

    pub fn scores(&self) -> [u32; 2] {
        self.scores
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    /// Most recent narration entries, oldest first.
    pub fn log(&self) -> impl Iterator<Item = &str> {
        self.log.iter().map(String::as_str)
    }

    /// Bumped by every accepted action; used to detect stale deferred actions.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn progress(&self) -> SavedProgress {
        SavedProgress {
            scores: self.scores,
            round: self.round,
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            hands: [
                self.players[0].hand().to_vec(),
                self.players[1].hand().to_vec(),
            ],
            uno_declared: [self.players[0].uno_declared(), self.players[1].uno_declared()],
            discard_pile: self.discard_pile.clone(),
            deck_size: self.deck.len(),
            active_color: self.active_color,
            current_seat: self.current_seat,
            phase: self.phase,
            awaiting_color_choice: self.is_awaiting_color_choice(),
            scores: self.scores,
            round: self.round,
            winning_score: self.config.winning_score,
            log: self.log.iter().cloned().collect(),
            revision: self.revision,
        }
    }

    fn setup_round(&mut self) {
        let mut deck = Deck::generate().shuffled(&mut self.rng);

        for player in &mut self.players {
            player.take_hand();
        }
        for _ in 0..self.config.hand_size {
            for player in &mut self.players {
                if let Some(card) = deck.draw() {
                    player.add_card(card);
                }
            }
        }

        // A Wild Draw Four cannot be the opening card.
        let first_card = loop {
            let card = deck
                .draw()
                .expect("A validated hand size always leaves cards in the deck.");
            if card.face() != CardFace::WildDrawFour {
                break card;
            }
            deck.put_back(card);
            deck.shuffle(&mut self.rng);
        };

        self.deck = deck;
        self.discard_pile = vec![first_card];
        self.active_color = first_card
            .color()
            .unwrap_or_else(|| CardColor::random(&mut self.rng));
        self.current_seat = if self.rng.gen_bool(0.5) {
            Seat::PlayerOne
        } else {
            Seat::PlayerTwo
        };
        self.phase = Phase::AwaitingAction;
        self.revision += 1;

        info!(
            round = self.round,
            first_card = %first_card,
            starting = %self.current_seat,
            "round started"
        );
        self.narrate(format!(
            "Round {} started! {} is face up. {}'s turn.",
            self.round, first_card, self.current_seat
        ));
    }

    fn finish_round(&mut self, winner: Seat) -> TurnActionResult {
        let points = hand_points(self.players[winner.opponent().index()].hand());
        self.scores[winner.index()] += points;
        let outcome = RoundOutcome { winner, points };
        let total = self.scores[winner.index()];

        if total >= self.config.winning_score {
            self.phase = Phase::MatchOver(outcome);
            info!(%winner, total, "match won");
            self.narrate(format!("{winner} wins the match with {total} points!"));
            TurnActionResult::MatchWon(outcome)
        } else {
            self.phase = Phase::RoundOver(outcome);
            info!(%winner, points, total, round = self.round, "round won");
            self.narrate(format!(
                "{winner} wins round {} and scores {points} points!",
                self.round
            ));
            TurnActionResult::RoundWon(outcome)
        }
    }

    fn pass_turn(&mut self) {
        self.current_seat = self.current_seat.opponent();
        self.narrate(format!("{}'s turn.", self.current_seat));
    }

    fn draw_cards_to_player(&mut self, seat: Seat, count: usize) {
        for _ in 0..count {
            let Some(card) = self.draw_one() else {
                self.narrate("There are no cards left to draw.".to_string());
                break;
            };
            self.players[seat.index()].add_card(card);
        }
    }

    fn draw_one(&mut self) -> Option<Card> {
        if self.deck.is_empty() {
            self.reshuffle_discard_pile();
        }
        self.deck.draw()
    }

    /// Turns everything under the top card into a fresh deck.
    fn reshuffle_discard_pile(&mut self) {
        let Some(top_card) = self.discard_pile.pop() else {
            return;
        };
        let recycled = std::mem::replace(&mut self.discard_pile, vec![top_card]);
        if recycled.is_empty() {
            return;
        }

        debug!(cards = recycled.len(), "reshuffling discard pile into deck");
        self.deck = Deck::from_cards(recycled).shuffled(&mut self.rng);
        self.narrate("The discard pile was shuffled into a new deck.".to_string());
    }

    fn reject(&mut self, rejection: Rejection) -> TurnActionResult {
        debug!(%rejection, "action rejected");
        self.narrate(rejection.to_string());
        TurnActionResult::Rejected(rejection)
    }

    fn narrate(&mut self, message: String) {
        if self.log.len() == self.config.log_capacity {
            self.log.pop_front();
        }
        self.log.push_back(message);
    }
}
