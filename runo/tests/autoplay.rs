use rand::{rngs::StdRng, SeedableRng};
use runo::{
    autoplay::{take_turn, DeferredTurn},
    config::MatchConfig,
    opponent::GreedyOpponent,
    player::Seat,
    session::{Phase, Session},
    turn::TurnActionResult,
};
use tracing_subscriber::EnvFilter;

const MAX_ACTIONS: usize = 100_000;

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("TEST_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_test_writer()
        .without_time()
        .try_init()
        .ok();
}

fn total_cards(session: &Session) -> usize {
    session.deck_size()
        + session.hand(Seat::PlayerOne).len()
        + session.hand(Seat::PlayerTwo).len()
        + session.discard_pile().len()
}

struct Bots {
    one: GreedyOpponent<StdRng>,
    two: GreedyOpponent<StdRng>,
}

impl Bots {
    fn new(seed: u64) -> Self {
        Self {
            one: GreedyOpponent::new(StdRng::seed_from_u64(seed)),
            two: GreedyOpponent::new(StdRng::seed_from_u64(seed.wrapping_add(1))),
        }
    }

    fn take_turn(&mut self, session: &mut Session) -> Vec<TurnActionResult> {
        let seat = session.get_current_seat();
        match seat {
            Seat::PlayerOne => take_turn(session, seat, &mut self.one),
            Seat::PlayerTwo => take_turn(session, seat, &mut self.two),
        }
    }
}

/// Plays computer against computer until the match ends, checking the table
/// after every step.
fn play_match(seed: u64, config: MatchConfig) -> Session {
    let mut session = Session::with_seed(config, seed).unwrap();
    let mut bots = Bots::new(seed);
    let mut previous_scores = session.scores();
    let mut rounds_won = 0;

    for _ in 0..MAX_ACTIONS {
        match session.phase() {
            Phase::MatchOver(_) => return session,
            Phase::RoundOver(_) => {
                rounds_won += 1;
                assert_eq!(session.start_next_round(), TurnActionResult::RoundStarted);
                assert_eq!(session.round(), rounds_won + 1);
            }
            Phase::AwaitingAction | Phase::AwaitingColorChoice => {
                let results = bots.take_turn(&mut session);
                assert!(
                    results.iter().all(|result| !result.is_rejected()),
                    "seed {seed}: {results:?}"
                );
                assert!(!results.contains(&TurnActionResult::MissedUno));
            }
        }

        assert_eq!(total_cards(&session), 108, "seed {seed}");
        assert!(!session.discard_pile().is_empty());
        assert!(session.log().count() <= config.log_capacity);

        let scores = session.scores();
        assert!(scores[0] >= previous_scores[0] && scores[1] >= previous_scores[1]);
        previous_scores = scores;

        for seat in [Seat::PlayerOne, Seat::PlayerTwo] {
            let player = session.get_player(seat);
            if player.uno_declared() {
                assert_eq!(player.cards_count(), 2);
            }
        }
    }

    panic!("seed {seed}: match did not finish");
}

#[test]
fn computer_matches_conserve_cards_and_finish() {
    init_logging();
    let config = MatchConfig::default().with_winning_score(200);

    for seed in 0..20 {
        let session = play_match(seed, config);
        let Phase::MatchOver(outcome) = session.phase() else {
            unreachable!();
        };
        assert!(session.score(outcome.winner) >= 200);
        assert!(session.hand(outcome.winner).is_empty());
    }
}

#[test]
fn full_length_match_reaches_winning_score() {
    init_logging();
    let session = play_match(1234, MatchConfig::default());

    let Phase::MatchOver(outcome) = session.phase() else {
        unreachable!();
    };
    assert!(session.score(outcome.winner) >= 500);
    assert_eq!(session.progress().round, session.round());
}

#[test]
fn deferred_turn_is_dropped_when_table_moves_on() {
    init_logging();
    let mut session = Session::with_seed(MatchConfig::default(), 8).unwrap();
    let mut bots = Bots::new(8);
    let seat = session.get_current_seat();
    let deferred = DeferredTurn::schedule(&session, seat).unwrap();

    // Someone else acts first, e.g. a human pressing draw for this seat.
    session.draw_card(seat);
    let snapshot = session.snapshot();

    assert_eq!(deferred.fire(&mut session, &mut bots.one), None);
    assert_eq!(session.revision(), snapshot.revision);
    assert_eq!(session.get_current_seat(), seat.opponent());
}

#[test]
fn resumed_match_continues_from_saved_progress() {
    init_logging();
    let config = MatchConfig::default().with_winning_score(10_000);
    let mut session = Session::with_seed(config, 99).unwrap();
    let mut bots = Bots::new(99);
    while !matches!(session.phase(), Phase::RoundOver(_)) {
        bots.take_turn(&mut session);
    }
    let progress = session.progress();
    assert_eq!(progress.round, 1);
    assert!(progress.scores.iter().any(|score| *score > 0));

    let resumed = Session::resume_with_seed(config, progress, 100).unwrap();
    assert_eq!(resumed.scores(), progress.scores);
    assert_eq!(resumed.round(), 1);
    assert_eq!(resumed.phase(), Phase::AwaitingAction);
    assert_eq!(total_cards(&resumed), 108);
}
