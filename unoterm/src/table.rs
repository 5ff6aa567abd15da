use std::time::Duration;

use color_eyre::{eyre::WrapErr, Result};
use rand::{rngs::StdRng, SeedableRng};
use runo::{
    autoplay::DeferredTurn,
    config::MatchConfig,
    opponent::GreedyOpponent,
    progress::SavedProgress,
    session::{Phase, Session},
    turn::{TurnAction, TurnActionResult},
};
use tokio::{
    io::{stdin, AsyncBufReadExt, BufReader},
    time::{sleep_until, Instant},
};
use tracing::{debug, info, warn};

use crate::{
    command::Command,
    render::{self, COMPUTER, HUMAN},
    storage::ProgressStore,
};

/// Human against the computer, driven by stdin and a thinking timer.
pub struct Table {
    session: Session,
    computer: GreedyOpponent<StdRng>,
    store: ProgressStore,
    think: Duration,
    pending: Option<(DeferredTurn, Instant)>,
    saved: Option<SavedProgress>,
}

impl Table {
    /// Resumes from the save file when it holds usable progress, otherwise
    /// starts a fresh match.
    pub fn open(
        config: MatchConfig,
        store: ProgressStore,
        think: Duration,
        seed: Option<u64>,
    ) -> Result<Self> {
        let saved = store.load().unwrap_or_else(|err| {
            warn!(
                error = %format_args!("{err:#}"),
                path = %store.path().display(),
                "ignoring unreadable saved progress"
            );
            None
        });
        let resumed = saved.and_then(|progress| {
            let session = match seed {
                Some(seed) => Session::resume_with_seed(config, progress, seed),
                None => Session::resume(config, progress),
            };
            match session {
                Ok(session) => {
                    info!(?progress, "resuming saved match");
                    Some(session)
                }
                Err(err) => {
                    warn!(%err, path = %store.path().display(), "ignoring saved progress");
                    None
                }
            }
        });

        let session = match (resumed, seed) {
            (Some(session), _) => session,
            (None, Some(seed)) => Session::with_seed(config, seed)?,
            (None, None) => Session::new(config)?,
        };
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(1)),
            None => StdRng::from_entropy(),
        };

        Ok(Self {
            session,
            computer: GreedyOpponent::new(rng),
            store,
            think,
            pending: None,
            saved,
        })
    }

    pub async fn run(mut self) -> Result<()> {
        let mut lines = BufReader::new(stdin()).lines();
        println!("{}\n", Command::help());
        println!("{}", render::table(&self.session));

        loop {
            self.schedule_computer();
            let deadline = self.pending.map(|(_, at)| at);

            tokio::select! {
                line = lines.next_line() => {
                    let Some(line) = line.wrap_err("failed to read from stdin")? else {
                        break;
                    };
                    if line.trim().is_empty() {
                        continue;
                    }
                    match line.parse::<Command>() {
                        Ok(Command::Quit) => break,
                        Ok(command) => self.handle(command)?,
                        Err(err) => println!("{err}"),
                    }
                }
                _ = sleep_until(deadline.unwrap_or_else(Instant::now)), if deadline.is_some() => {
                    self.fire_computer()?;
                }
            }
        }

        println!("Bye!");
        Ok(())
    }

    fn handle(&mut self, command: Command) -> Result<()> {
        let result = match command {
            Command::Play(position) => {
                let Some(card) = self.session.hand(HUMAN).get(position).copied() else {
                    println!(
                        "You only hold {} cards.",
                        self.session.hand(HUMAN).len()
                    );
                    return Ok(());
                };
                self.session.play_turn(HUMAN, TurnAction::Play(card.id()))
            }
            Command::Draw => self.session.play_turn(HUMAN, TurnAction::Draw),
            Command::Uno => self.session.play_turn(HUMAN, TurnAction::Uno),
            Command::Color(color) => self.session.play_turn(HUMAN, TurnAction::ChooseColor(color)),
            Command::Next => self.session.start_next_round(),
            Command::Reset => {
                self.store.clear()?;
                self.saved = None;
                self.session.reset_match()
            }
            Command::Hand => {
                println!("{}", render::table(&self.session));
                return Ok(());
            }
            Command::Help => {
                println!("{}", Command::help());
                return Ok(());
            }
            Command::Quit => return Ok(()),
        };

        self.report(result)
    }

    fn schedule_computer(&mut self) {
        if let Some((turn, _)) = self.pending {
            if turn.is_current(&self.session) {
                return;
            }
            debug!("table moved on, dropping the computer's pending turn");
            self.pending = None;
        }

        if let Some(turn) = DeferredTurn::schedule(&self.session, COMPUTER) {
            self.pending = Some((turn, Instant::now() + self.think));
        }
    }

    fn fire_computer(&mut self) -> Result<()> {
        let Some((turn, _)) = self.pending.take() else {
            return Ok(());
        };
        match turn.fire(&mut self.session, &mut self.computer) {
            Some(results) => {
                debug!(?results, "computer turn");
                self.persist()?;
                println!("\n{}", render::table(&self.session));
            }
            None => debug!("computer turn was stale"),
        }
        Ok(())
    }

    fn report(&mut self, result: TurnActionResult) -> Result<()> {
        if let TurnActionResult::Rejected(rejection) = result {
            println!("{rejection}.");
            return Ok(());
        }
        self.persist()?;
        println!("\n{}", render::table(&self.session));
        Ok(())
    }

    /// Keeps the save file pointing at the next round to deal. A finished match
    /// leaves nothing behind.
    fn persist(&mut self) -> Result<()> {
        match self.session.phase() {
            Phase::RoundOver(_) => {
                let current = self.session.progress();
                let progress = SavedProgress {
                    round: current.round + 1,
                    ..current
                };
                if self.saved != Some(progress) {
                    self.store.save(&progress)?;
                    self.saved = Some(progress);
                }
            }
            Phase::MatchOver(_) => {
                if self.saved.is_some() {
                    self.store.clear()?;
                    self.saved = None;
                }
            }
            Phase::AwaitingAction | Phase::AwaitingColorChoice => {}
        }
        Ok(())
    }
}
