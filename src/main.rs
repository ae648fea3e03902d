//! Command-line front-ends for the Go rules engine.
//!
//! ## Usage
//!
//! - `goban` / `goban gtp` - Start a GTP server for GUI integration
//! - `goban selfplay` - Let two random players finish a game and print the score
//! - `goban demo` - Walk through a capture, a ko and the scoring
//!
//! Logs go to stderr; set `RUST_LOG=goban_rules=debug` to see every move.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use goban_rules::board::{Color, Point};
use goban_rules::constants::DEFAULT_SIZE;
use goban_rules::game::{Game, GamePhase};
use goban_rules::gtp::GtpEngine;
use goban_rules::opponent::{Choice, RandomOpponent};

/// Go rules engine with a GTP front-end
#[derive(Parser)]
#[command(name = "goban")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Board size (NxN)
    #[arg(long, global = true, default_value_t = DEFAULT_SIZE)]
    size: usize,

    /// Seed for the random opponent
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the GTP (Go Text Protocol) server for use with GUI applications
    Gtp,
    /// Play random moves for both colors until two passes end the game
    Selfplay,
    /// Run a short scripted game showing captures, ko and scoring
    Demo,
}

/// Filter used when `RUST_LOG` is unset or unparsable.
const DEFAULT_LOG_DIRECTIVE: &str = "goban_rules=info";

/// Log filter from `RUST_LOG`-style directives, falling back to [`DEFAULT_LOG_DIRECTIVE`].
fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_DIRECTIVE))
}

fn main() -> Result<()> {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(log_filter(rust_log.as_deref()))
        .init();

    let cli = Cli::parse();
    let seeded = cli.seed.map(RandomOpponent::with_seed);

    match cli.command {
        Some(Commands::Gtp) | None => {
            tracing::info!(size = cli.size, "starting GTP server");
            let mut engine = match seeded {
                Some(opponent) => GtpEngine::with_opponent(cli.size, opponent)?,
                None => GtpEngine::new(cli.size)?,
            };
            engine.run()?;
        }
        Some(Commands::Selfplay) => {
            let opponent = seeded.unwrap_or_default();
            run_selfplay(cli.size, opponent)?
        }
        Some(Commands::Demo) => run_demo()?,
    }
    Ok(())
}

fn run_selfplay(size: usize, mut opponent: RandomOpponent) -> Result<()> {
    let mut game = Game::new(size)?;
    // Random play almost always settles long before this.
    let limit = size * size * 10;

    while game.phase() == GamePhase::InProgress && game.current_state().move_number < limit {
        let color = game.current_player();
        match opponent.choose(&game, color) {
            Choice::Place(p) => {
                game.attempt_placement(p, color)?;
            }
            Choice::Pass => {
                game.pass(color)?;
            }
        }
    }

    println!("{}", game.board());
    match game.final_score() {
        Ok(score) => println!(
            "Result: {score} (black {}, white {})",
            score.black, score.white
        ),
        Err(err) => println!("No result after {limit} moves: {err}"),
    }
    Ok(())
}

fn run_demo() -> Result<()> {
    println!("Go rules engine demo\n");

    // Black surrounds a white stone and takes it.
    println!("=== Capture ===");
    let mut game = Game::new(5)?;
    let moves = [
        ((1, 2), Color::Black),
        ((2, 2), Color::White),
        ((2, 1), Color::Black),
        ((0, 0), Color::White),
        ((2, 3), Color::Black),
        ((0, 4), Color::White),
    ];
    for ((row, col), color) in moves {
        game.attempt_placement(Point::new(row, col), color)?;
    }
    let placed = game.attempt_placement(Point::new(3, 2), Color::Black)?;
    println!("Black at (3,2) captured {:?}", placed.captured);
    println!("{}", game.board());

    // White's immediate retake would repeat the previous position.
    println!("=== Ko ===");
    let setup = goban_rules::board::Board::from_rows(&[
        ". B W . .",
        "B W . W .",
        ". B W . .",
        ". . . . .",
        ". . . . .",
    ])
    .ok_or_else(|| anyhow::anyhow!("bad demo position"))?;
    let mut game = Game::from_board(setup, Color::Black)?;
    game.attempt_placement(Point::new(1, 2), Color::Black)?;
    println!("{}", game.board());
    match game.attempt_placement(Point::new(1, 1), Color::White) {
        Ok(_) => println!("White retook the ko"),
        Err(err) => println!("White retake at (1,1): {err}"),
    }

    println!("\n=== Scoring ===");
    game.pass(Color::White)?;
    game.pass(Color::Black)?;
    println!("Two passes, final score: {}", game.final_score()?);
    Ok(())
}
