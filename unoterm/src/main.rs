mod cli;
mod command;
mod render;
mod simulate;
mod storage;
mod table;

use std::time::Duration;

use clap::Parser;
use color_eyre::{eyre::WrapErr, Result};
use runo::config::MatchConfig;
use tracing_subscriber::EnvFilter;

use crate::{
    cli::{Cli, Mode},
    storage::ProgressStore,
    table::Table,
};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = MatchConfig::default().with_winning_score(cli.winning_score);
    config.validate().wrap_err("invalid match settings")?;

    match cli.mode.unwrap_or(Mode::Play) {
        Mode::Play => {
            let store = ProgressStore::new(cli.save_file);
            let think = Duration::from_millis(cli.think_ms);
            Table::open(config, store, think, cli.seed)?.run().await
        }
        Mode::Simulate {
            matches,
            max_actions,
        } => {
            let tally = simulate::run(config, matches, max_actions, cli.seed)?;
            println!("{tally}");
            Ok(())
        }
    }
}
