//! Ladder CLI: interactive and one-shot ladder games.
//!
//! Commands:
//! - `play`: prompt for names, outcomes and height, then answer lookups (default)
//! - `run`: play one game from arguments and print everyone's outcome
//!
//! Set `RUST_LOG=debug` to trace generation and board construction.

mod console;
mod view;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io;
use std::path::{Path, PathBuf};

use ladder_core::rng::RngHierarchy;
use ladder_core::{Game, GameConfig, Height, Outcome, Roster, Session};

use crate::console::{ConsoleInput, ConsoleOutput};

#[derive(Parser)]
#[command(
    name = "ladder",
    about = "Ladder game: participants walk a random ladder down to their outcomes"
)]
struct Cli {
    /// Path to a TOML config file (max_height, all_keyword, delimiter).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactively on the terminal.
    Play {
        /// Seed for a reproducible ladder.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Play one game from arguments and print every outcome.
    Run {
        /// Participant names, e.g. "pobi,honux,crong,jk".
        #[arg(long)]
        names: String,

        /// Outcomes, one per participant, e.g. "꽝,5000,꽝,3000".
        #[arg(long)]
        outcomes: String,

        /// Ladder height (number of rows).
        #[arg(long)]
        height: String,

        /// Seed for a reproducible ladder.
        #[arg(long)]
        seed: Option<u64>,

        /// Print the ladder and board as JSON instead of text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    match cli.command.unwrap_or(Commands::Play { seed: None }) {
        Commands::Play { seed } => run_play(config, seed),
        Commands::Run {
            names,
            outcomes,
            height,
            seed,
            json,
        } => run_once(&config, &names, &outcomes, &height, seed, json),
    }
}

fn load_config(path: Option<&Path>) -> Result<GameConfig> {
    match path {
        Some(path) => {
            let config = GameConfig::from_file(path)
                .with_context(|| format!("loading config from {}", path.display()))?;
            log::info!("loaded config from {}", path.display());
            Ok(config)
        }
        None => Ok(GameConfig::default()),
    }
}

fn run_play(config: GameConfig, seed: Option<u64>) -> Result<()> {
    let stdin = io::stdin();
    let input = ConsoleInput::new(stdin.lock(), io::stdout(), config.all_keyword.clone());
    let output = ConsoleOutput::new(io::stdout());

    let mut session = Session::new(input, output, config);
    if let Some(seed) = seed {
        session = session.with_seed(seed);
    }
    session.play().context("ladder session failed")?;
    Ok(())
}

/// Non-interactive: there is nobody to re-prompt, so invalid arguments are fatal.
fn run_once(
    config: &GameConfig,
    names: &str,
    outcomes: &str,
    height: &str,
    seed: Option<u64>,
    json: bool,
) -> Result<()> {
    let roster = Roster::parse(names, config.delimiter).context("invalid --names")?;
    let outcomes = Outcome::parse_list(outcomes, config.delimiter, roster.len())
        .context("invalid --outcomes")?;
    let height = Height::parse(height, config.max_height).context("invalid --height")?;

    let seeds = seed.map(RngHierarchy::new);
    let game = Game::draw(roster, outcomes, height, seeds.as_ref())?;

    if json {
        let report = serde_json::json!({
            "seed": seed,
            "ladder": game.ladder(),
            "board": game.board(),
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "{}",
            view::render_ladder(game.roster(), game.ladder(), game.outcomes())
        );
        println!();
        println!("{}", view::render_board(game.board()));
    }
    Ok(())
}
