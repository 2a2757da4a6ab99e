use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use simplelog::{Config, LevelFilter, WriteLogger};
use snektick::config::{DEFAULT_HEIGHT, DEFAULT_TICK_MS, DEFAULT_WIDTH};
use snektick::{session, GameConfig, GameStatus, Session};
use std::fs::File;
use std::path::PathBuf;
use std::time::{Duration, Instant};

#[derive(Parser)]
#[command(name = "snektick")]
#[command(version, about = "Terminal snake on a fixed tick")]
struct Cli {
    /// Board width in cells
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    width: u16,

    /// Board height in cells
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    height: u16,

    /// Milliseconds between two moves
    #[arg(long, default_value_t = DEFAULT_TICK_MS)]
    tick_ms: u64,

    /// Seed for food placement
    #[arg(long)]
    seed: Option<u64>,

    /// Where to write the log; the terminal belongs to the game
    #[arg(long, default_value = "snektick.log")]
    log_file: PathBuf,

    /// Log every move decision, not just the game lifecycle
    #[arg(long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let log_file = File::create(&cli.log_file)
        .with_context(|| format!("Failed to create log file {}", cli.log_file.display()))?;
    WriteLogger::init(level, Config::default(), log_file)
        .context("Failed to initialize logger")?;

    let seed = cli.seed.unwrap_or_else(rand::random);
    info!("Food seed {}", seed);

    let config = GameConfig::new(cli.width, cli.height)
        .with_tick_interval(Duration::from_millis(cli.tick_ms));
    let game = Session::start(
        &config,
        ChaCha8Rng::seed_from_u64(seed),
        Instant::now(),
    )?;

    match session::run(game)? {
        GameStatus::Won => println!("\nYou filled the board!"),
        GameStatus::Lost => println!("\nGame Over!"),
        GameStatus::InGame => println!("\nBye!"),
    }
    Ok(())
}
