use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info, warn};
use simplelog::{ConfigBuilder, WriteLogger};

use stardeck::core::config::{self, CliOverrides};
use stardeck::core::deck::Deck;
use stardeck::tui;

#[derive(Parser)]
#[command(name = "stardeck", about = "Full-screen slide decks over a starry sky", version)]
struct Args {
    /// Deck file (.toml or .json). Defaults to the built-in deck.
    deck: Option<PathBuf>,

    /// Seed for the star field
    #[arg(long)]
    seed: Option<u64>,

    /// Where to write the log
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Plain background, no stars
    #[arg(long)]
    no_background: bool,

    /// Slide to open on (1-based)
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    start: Option<u64>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let file_config = match config::load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("stardeck: {e}");
            return ExitCode::FAILURE;
        }
    };
    let cli = CliOverrides {
        deck: args.deck,
        seed: args.seed,
        log_file: args.log_file,
        no_background: args.no_background,
    };
    let resolved = config::resolve(&file_config, &cli);

    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }
    if let Some(path) = config::config_path() {
        info!("Config file: {}", path.display());
    }
    for warning in &resolved.warnings {
        warn!("{}", warning);
    }

    let deck = match &resolved.deck_path {
        Some(path) => Deck::load(path),
        None => Deck::builtin(),
    };
    let deck = match deck {
        Ok(deck) => deck,
        Err(e) => {
            error!("Failed to load deck: {}", e);
            eprintln!("stardeck: {e}");
            return ExitCode::FAILURE;
        }
    };
    info!(
        "Stardeck starting: '{}' ({} slides)",
        deck.title(),
        deck.len()
    );

    let start = args
        .start
        .map(|n| usize::try_from(n - 1).unwrap_or(usize::MAX));

    match tui::run(&resolved, deck, start) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Terminal error: {}", e);
            eprintln!("stardeck: {e}");
            ExitCode::FAILURE
        }
    }
}
