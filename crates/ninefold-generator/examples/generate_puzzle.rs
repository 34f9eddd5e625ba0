//! Example demonstrating Sudoku puzzle generation.
//!
//! This example shows how to:
//! - Create a `PuzzleGenerator` backed by a `BacktrackSolver`
//! - Generate a puzzle at a chosen difficulty
//! - Reproduce a puzzle from its seed
//! - Sample many puzzles in parallel and report clue statistics
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_puzzle
//! ```
//!
//! Pick a difficulty:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --difficulty hard
//! ```
//!
//! Regenerate a puzzle from a reported seed (64 hex digits):
//!
//! ```sh
//! cargo run --example generate_puzzle -- --seed <SEED>
//! ```
//!
//! Sample in parallel and report the average clue count:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --difficulty medium --samples 100
//! ```

use std::{process, str::FromStr as _};

use clap::{Parser, ValueEnum};
use ninefold_generator::{Difficulty, GeneratedPuzzle, PuzzleGenerator, PuzzleSeed};
use ninefold_solver::BacktrackSolver;
use rayon::prelude::*;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Level {
    Easy,
    Medium,
    Hard,
}

impl From<Level> for Difficulty {
    fn from(level: Level) -> Self {
        match level {
            Level::Easy => Self::Easy,
            Level::Medium => Self::Medium,
            Level::Hard => Self::Hard,
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Difficulty of the generated puzzles.
    #[arg(long, value_name = "LEVEL", default_value = "medium")]
    difficulty: Level,

    /// Seed to regenerate a specific puzzle (64 hex digits).
    #[arg(long, value_name = "SEED")]
    seed: Option<String>,

    /// Number of puzzles to sample in parallel.
    #[arg(long, value_name = "COUNT", default_value_t = 1)]
    samples: usize,
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    let solver = BacktrackSolver::new();
    let generator = PuzzleGenerator::new(&solver);
    let difficulty = Difficulty::from(args.difficulty);

    if let Some(seed) = &args.seed {
        let seed = match PuzzleSeed::from_str(seed) {
            Ok(seed) => seed,
            Err(err) => {
                eprintln!("Invalid seed: {err}");
                process::exit(2);
            }
        };
        print_puzzle(&generator.generate_with_seed(difficulty, seed));
        return;
    }

    if args.samples == 0 {
        eprintln!("--samples must be at least 1.");
        process::exit(1);
    }

    if args.samples == 1 {
        print_puzzle(&generator.generate(difficulty));
        return;
    }

    let puzzles: Vec<GeneratedPuzzle> = (0..args.samples)
        .into_par_iter()
        .map(|_| generator.generate(difficulty))
        .collect();

    for puzzle in &puzzles {
        print_puzzle(puzzle);
    }

    let total: usize = puzzles.iter().map(GeneratedPuzzle::clue_count).sum();
    #[expect(clippy::cast_precision_loss)]
    let average = total as f64 / puzzles.len() as f64;
    println!("Samples:");
    println!("  {} {difficulty} puzzles, {average:.1} clues on average", puzzles.len());
}

fn print_puzzle(puzzle: &GeneratedPuzzle) {
    println!("Seed:");
    println!("  {}", puzzle.seed);
    println!();
    println!("Problem ({} clues, {}):", puzzle.clue_count(), puzzle.difficulty);
    println!("  {}", puzzle.problem);
    println!();
    println!("Solution:");
    println!("  {}", puzzle.solution);
    println!();
}
