use std::path::PathBuf;

use clap::{Parser, Subcommand};
use runo::constants::DEFAULT_WINNING_SCORE;

#[derive(Parser, Debug)]
#[command(
    name = "unoterm",
    about = "Two-player UNO against the computer, in the terminal.",
    version
)]
pub struct Cli {
    /// Cumulative score that ends the match
    #[arg(long, env = "RUNO_WINNING_SCORE", default_value_t = DEFAULT_WINNING_SCORE)]
    pub winning_score: u32,

    /// Milliseconds the computer waits before acting
    #[arg(long, env = "RUNO_THINK_MS", default_value_t = 1500)]
    pub think_ms: u64,

    /// Where match progress is kept between runs
    #[arg(long, env = "RUNO_SAVE_FILE", default_value = "runo-progress.json")]
    pub save_file: PathBuf,

    /// Fixed RNG seed; deals and computer choices become reproducible
    #[arg(long, env = "RUNO_SEED")]
    pub seed: Option<u64>,

    #[command(subcommand)]
    pub mode: Option<Mode>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Play against the computer (default)
    Play,
    /// Let the computer play itself and print the win tally
    Simulate {
        /// Number of matches to play
        #[arg(short, long, default_value_t = 100)]
        matches: u32,

        /// Actions after which a match is abandoned as unfinished
        #[arg(long, default_value_t = 20_000)]
        max_actions: usize,
    },
}
