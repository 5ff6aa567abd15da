//! Drives a seat from an [`Opponent`] decision through the session's actions.
//!
//! The session never calls a policy on its own; a driver decides when the
//! computer moves (usually after a short delay) and uses this module to carry
//! the move out.

use tracing::debug;

use crate::opponent::{Move, Opponent};
use crate::player::Seat;
use crate::session::{Phase, Session};
use crate::turn::{TurnAction, TurnActionResult};

/// Plays one full turn for `seat`: calls UNO when about to go down to one
/// card, plays or draws, and picks a color after a wild.
///
/// Returns every engine result in the order the actions were issued.
pub fn take_turn<O: Opponent + ?Sized>(
    session: &mut Session,
    seat: Seat,
    opponent: &mut O,
) -> Vec<TurnActionResult> {
    let mut results = Vec::with_capacity(3);

    if session.phase() == Phase::AwaitingColorChoice && session.get_current_seat() == seat {
        let color = opponent.choose_color(session.hand(seat));
        results.push(session.play_turn(seat, TurnAction::ChooseColor(color)));
        return results;
    }
    if let Err(rejection) = session.check_turn(seat) {
        results.push(TurnActionResult::Rejected(rejection));
        return results;
    }

    let decision = opponent.choose_move(
        session.hand(seat),
        session.get_top_card(),
        session.active_color(),
    );
    debug!(%seat, ?decision, "opponent decided");

    match decision {
        Move::Draw => results.push(session.draw_card(seat)),
        Move::Play(card_id) => {
            let player = session.get_player(seat);
            if player.cards_count() == 2 && !player.uno_declared() {
                results.push(session.declare_uno(seat));
            }

            let result = session.play_card(seat, card_id);
            results.push(result);

            if matches!(result, TurnActionResult::Wild | TurnActionResult::WildDrawFour) {
                let color = opponent.choose_color(session.hand(seat));
                results.push(session.choose_color(color));
            }
        }
    }

    results
}

/// A computer turn scheduled for later, valid only while the table is unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeferredTurn {
    seat: Seat,
    revision: u64,
}

impl DeferredTurn {
    /// `None` when `seat` has nothing to do right now.
    pub fn schedule(session: &Session, seat: Seat) -> Option<Self> {
        let actionable = matches!(
            session.phase(),
            Phase::AwaitingAction | Phase::AwaitingColorChoice
        );
        (actionable && session.get_current_seat() == seat).then(|| DeferredTurn {
            seat,
            revision: session.revision(),
        })
    }

    pub fn seat(&self) -> Seat {
        self.seat
    }

    pub fn is_current(&self, session: &Session) -> bool {
        session.revision() == self.revision && session.get_current_seat() == self.seat
    }

    /// Carries out the turn, or drops it if anything happened since scheduling.
    pub fn fire<O: Opponent + ?Sized>(
        self,
        session: &mut Session,
        opponent: &mut O,
    ) -> Option<Vec<TurnActionResult>> {
        if !self.is_current(session) {
            debug!(seat = %self.seat, "discarding stale deferred turn");
            return None;
        }
        Some(take_turn(session, self.seat, opponent))
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::config::MatchConfig;
    use crate::opponent::GreedyOpponent;

    #[test]
    fn take_turn_is_rejected_for_waiting_seat() {
        let mut session = Session::with_seed(MatchConfig::default(), 5).unwrap();
        let mut opponent = GreedyOpponent::new(StdRng::seed_from_u64(5));
        let waiting = session.get_current_seat().opponent();

        let results = take_turn(&mut session, waiting, &mut opponent);

        assert_eq!(
            results,
            vec![TurnActionResult::Rejected(
                crate::error::Rejection::NotYourTurn(waiting)
            )]
        );
    }

    #[test]
    fn schedule_only_for_turn_holder() {
        let session = Session::with_seed(MatchConfig::default(), 5).unwrap();
        let seat = session.get_current_seat();

        assert!(DeferredTurn::schedule(&session, seat).is_some());
        assert!(DeferredTurn::schedule(&session, seat.opponent()).is_none());
    }

    #[test]
    fn stale_turn_is_discarded_after_reset() {
        let mut session = Session::with_seed(MatchConfig::default(), 11).unwrap();
        let mut opponent = GreedyOpponent::new(StdRng::seed_from_u64(11));
        let seat = session.get_current_seat();
        let deferred = DeferredTurn::schedule(&session, seat).unwrap();

        session.reset_match();

        assert!(!deferred.is_current(&session));
        assert_eq!(deferred.fire(&mut session, &mut opponent), None);
    }

    #[test]
    fn current_turn_fires() {
        let mut session = Session::with_seed(MatchConfig::default(), 11).unwrap();
        let mut opponent = GreedyOpponent::new(StdRng::seed_from_u64(11));
        let seat = session.get_current_seat();
        let revision = session.revision();
        let deferred = DeferredTurn::schedule(&session, seat).unwrap();

        let results = deferred.fire(&mut session, &mut opponent).unwrap();

        assert!(!results.is_empty());
        assert!(results.iter().all(|result| !result.is_rejected()));
        assert!(session.revision() > revision);
    }
}
