//! Example demonstrating Sudoku puzzle generation.
//!
//! Generates a puzzle for a difficulty tier and prints the problem, the
//! solution, the seed, and the techniques a hint-driven solve uses.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_puzzle
//! ```
//!
//! Pick a tier:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --difficulty expert
//! ```
//!
//! Reproduce a puzzle from its seed, or derive a seed from a phrase:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --seed <64-hex-chars>
//! cargo run --example generate_puzzle -- --phrase "daily 2026-08-27"
//! ```
//!
//! Carving decisions are logged at debug level:
//!
//! ```sh
//! RUST_LOG=debug cargo run --example generate_puzzle
//! ```

use std::process;

use clap::{Parser, ValueEnum};
use ninefold_generator::{Difficulty, GeneratedPuzzle, PuzzleGenerator, PuzzleSeed};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Tier {
    Easy,
    Medium,
    Hard,
    Expert,
    Master,
}

impl From<Tier> for Difficulty {
    fn from(tier: Tier) -> Self {
        match tier {
            Tier::Easy => Self::Easy,
            Tier::Medium => Self::Medium,
            Tier::Hard => Self::Hard,
            Tier::Expert => Self::Expert,
            Tier::Master => Self::Master,
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Difficulty tier to generate.
    #[arg(long, value_name = "TIER", default_value = "easy")]
    difficulty: Tier,

    /// Seed to reproduce a puzzle, as 64 hex characters.
    #[arg(long, value_name = "SEED", conflicts_with = "phrase")]
    seed: Option<String>,

    /// Phrase to derive a seed from.
    #[arg(long, value_name = "PHRASE")]
    phrase: Option<String>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let seed = match (&args.seed, &args.phrase) {
        (Some(text), _) => match text.parse::<PuzzleSeed>() {
            Ok(seed) => seed,
            Err(e) => {
                eprintln!("Invalid seed: {e}");
                process::exit(2);
            }
        },
        (None, Some(phrase)) => PuzzleSeed::from_phrase(phrase),
        (None, None) => PuzzleSeed::random(),
    };

    let puzzle = PuzzleGenerator::new().generate_with_seed(args.difficulty.into(), seed);
    print_puzzle(&puzzle);
}

fn print_puzzle(puzzle: &GeneratedPuzzle) {
    println!("Seed:");
    println!("  {}", puzzle.seed);
    println!();

    println!("Difficulty:");
    println!(
        "  {} ({} clues, score {})",
        puzzle.difficulty,
        puzzle.clue_count(),
        puzzle.score
    );
    println!();

    println!("Problem:");
    println!("  {}", puzzle.problem);
    println!();
    println!("Solution:");
    println!("  {}", puzzle.solution);
    println!();

    println!("Strategies:");
    for (name, count) in &puzzle.strategies {
        println!("  {name}: {count}");
    }
}
