use std::fmt::{self, Display};

use color_eyre::Result;
use rand::{rngs::StdRng, Rng, SeedableRng};
use runo::{
    autoplay::take_turn,
    config::MatchConfig,
    opponent::GreedyOpponent,
    player::Seat,
    session::{Phase, Session},
};
use tracing::{debug, info};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    pub wins: [u32; 2],
    pub unfinished: u32,
    pub rounds: u32,
}

impl Tally {
    pub fn matches(&self) -> u32 {
        self.wins[0] + self.wins[1] + self.unfinished
    }
}

impl Display for Tally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Simulated {} matches.", self.matches())?;
        for (seat, wins) in [Seat::PlayerOne, Seat::PlayerTwo].into_iter().zip(self.wins) {
            writeln!(f, "{seat}: {wins} wins")?;
        }
        if self.unfinished > 0 {
            writeln!(f, "Unfinished: {}", self.unfinished)?;
        }
        let decided = self.wins[0] + self.wins[1];
        if decided > 0 {
            write!(
                f,
                "Average rounds per match: {:.1}",
                f64::from(self.rounds) / f64::from(decided)
            )?;
        }
        Ok(())
    }
}

/// Plays `matches` computer-against-computer matches. With a seed, match `n`
/// uses `seed + n` so single matches can be replayed.
pub fn run(
    config: MatchConfig,
    matches: u32,
    max_actions: usize,
    seed: Option<u64>,
) -> Result<Tally> {
    let base = seed.unwrap_or_else(|| StdRng::from_entropy().gen());
    let mut tally = Tally::default();

    for number in 0..matches {
        let seed = base.wrapping_add(u64::from(number));
        match play_match(config, seed, max_actions)? {
            Some((winner, rounds)) => {
                info!(number, seed, %winner, rounds, "match finished");
                let slot = match winner {
                    Seat::PlayerOne => 0,
                    Seat::PlayerTwo => 1,
                };
                tally.wins[slot] += 1;
                tally.rounds += rounds;
            }
            None => {
                info!(number, seed, max_actions, "match abandoned");
                tally.unfinished += 1;
            }
        }
    }

    Ok(tally)
}

fn play_match(config: MatchConfig, seed: u64, max_actions: usize) -> Result<Option<(Seat, u32)>> {
    let mut session = Session::with_seed(config, seed)?;
    let mut one = GreedyOpponent::new(StdRng::seed_from_u64(seed.wrapping_add(1)));
    let mut two = GreedyOpponent::new(StdRng::seed_from_u64(seed.wrapping_add(2)));

    for _ in 0..max_actions {
        match session.phase() {
            Phase::MatchOver(outcome) => return Ok(Some((outcome.winner, session.round()))),
            Phase::RoundOver(outcome) => {
                debug!(round = session.round(), winner = %outcome.winner, "round over");
                session.start_next_round();
            }
            Phase::AwaitingAction | Phase::AwaitingColorChoice => {
                let seat = session.get_current_seat();
                match seat {
                    Seat::PlayerOne => take_turn(&mut session, seat, &mut one),
                    Seat::PlayerTwo => take_turn(&mut session, seat, &mut two),
                };
            }
        }
    }

    Ok(None)
}
