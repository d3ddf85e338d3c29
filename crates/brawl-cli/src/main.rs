//! Terminal entry point for Brawl.
//!
//! Loads a roster (and optionally a match config), then plays one match on
//! stdin/stdout. Logs go to stderr, filtered by `RUST_LOG`.

use std::path::PathBuf;

use anyhow::{Context, Result};
use brawl_core::config::MatchConfig;
use brawl_core::controller::{MatchController, TerminalFrontend};
use brawl_core::roster::Roster;
use clap::Parser;
use tracing::info;

#[derive(Parser)]
#[command(name = "brawl")]
#[command(about = "Turn-based terminal fighting game")]
struct Cli {
    /// Character roster (JSON).
    #[arg(short = 'f', long = "roster", alias = "file", default_value = "data/Characters.json")]
    roster: PathBuf,

    /// Match config (JSON). Defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for seeded computer policies; overrides the config file.
    #[arg(long)]
    seed: Option<u64>,

    /// Let a computer policy play the human side.
    #[arg(long)]
    autoplay: bool,

    /// Print the roster ranked weakest to strongest and exit.
    #[arg(long)]
    list: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let roster = Roster::load(&cli.roster)
        .with_context(|| format!("failed to load roster {}", cli.roster.display()))?;

    if cli.list {
        for character in roster.ranked() {
            let moves: Vec<_> = character.moves().iter().map(ToString::to_string).collect();
            println!("{character}: {}", moves.join(", "));
        }
        return Ok(());
    }

    let mut config = match &cli.config {
        Some(path) => MatchConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => MatchConfig::default(),
    };
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    if cli.autoplay {
        config = config.with_autoplay(true);
    }
    info!(?config, "starting match");

    let mut controller = MatchController::new(roster, config);
    let state = controller
        .run(&mut TerminalFrontend::stdio())
        .context("match aborted")?;

    info!(outcome = ?state.outcome(), turns = state.turn_number(), "exiting");
    Ok(())
}
