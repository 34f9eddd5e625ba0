//! Uniqueness-aware Sudoku puzzle generation.
//!
//! A puzzle is generated subtractively: the solver fills an empty grid with a
//! shuffled candidate order to obtain a random complete solution, then cells
//! are carved out one by one in a shuffled order, keeping a clearing only if
//! the punched grid still has exactly one completion. Carving stops at a
//! clue-count target sampled from the requested [`Difficulty`] band.
//!
//! All randomness flows from a [`PuzzleSeed`], so every generated puzzle is
//! reproducible from the seed it reports.
//!
//! # Examples
//!
//! ```
//! use ninefold_generator::{Difficulty, PuzzleGenerator, PuzzleSeed};
//! use ninefold_solver::BacktrackSolver;
//!
//! let solver = BacktrackSolver::new();
//! let generator = PuzzleGenerator::new(&solver);
//!
//! let puzzle = generator.generate_with_seed(Difficulty::Easy, PuzzleSeed::from_phrase("docs"));
//! assert!(solver.has_unique_solution(&puzzle.problem));
//! assert_eq!(solver.solve(&puzzle.problem), Ok(puzzle.solution.clone()));
//! ```

pub mod difficulty;
pub mod generator;
pub mod seed;

pub use self::{
    difficulty::Difficulty,
    generator::{GeneratedPuzzle, PuzzleGenerator},
    seed::{ParseSeedError, PuzzleSeed},
};
