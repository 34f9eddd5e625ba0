//! Subtractive puzzle generation with a uniqueness guarantee.

use ninefold_core::{DigitGrid, Position};
use ninefold_solver::BacktrackSolver;
use rand::{Rng as _, SeedableRng as _, seq::SliceRandom as _};
use rand_pcg::Pcg64;

use crate::{difficulty::Difficulty, seed::PuzzleSeed};

/// A generated puzzle together with its provenance.
///
/// The `problem` is guaranteed to have exactly one completion, which is the
/// recorded `solution`. Regenerating with the same `seed` and `difficulty`
/// reproduces the puzzle bit for bit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// The puzzle grid, with carved cells empty.
    pub problem: DigitGrid,
    /// The complete grid the puzzle was carved from.
    pub solution: DigitGrid,
    /// The seed all of the puzzle's randomness was derived from.
    pub seed: PuzzleSeed,
    /// The difficulty the puzzle was generated for.
    pub difficulty: Difficulty,
}

impl GeneratedPuzzle {
    /// Returns the number of clues left in the problem.
    ///
    /// Usually within [`Difficulty::clue_range`]; carving stops early when
    /// every remaining removal would make the puzzle ambiguous, so the
    /// achieved count can end up above the band. It is reported rather than
    /// treated as a failure.
    #[must_use]
    pub fn clue_count(&self) -> usize {
        self.problem.filled_count()
    }
}

/// Generates puzzles by carving cells out of a random complete grid.
///
/// Generation runs in two solver-driven phases:
///
/// 1. The solver fills an empty grid with a shuffled candidate order,
///    producing a random complete solution.
/// 2. All 81 positions are shuffled and visited once. Each visited cell is
///    tentatively cleared; if the punched grid still has exactly one
///    completion the clearing sticks, otherwise the digit is restored. The
///    loop stops once the clue count reaches a target sampled from the
///    difficulty band.
///
/// The uniqueness check runs on the punched grid itself; a check seeded from
/// the known solution would never see the second completion that makes a
/// removal illegal.
///
/// # Examples
///
/// ```
/// use ninefold_generator::{Difficulty, PuzzleGenerator, PuzzleSeed};
/// use ninefold_solver::BacktrackSolver;
///
/// let solver = BacktrackSolver::new();
/// let generator = PuzzleGenerator::new(&solver);
///
/// let puzzle = generator.generate_with_seed(Difficulty::Medium, PuzzleSeed::from_phrase("docs"));
/// assert_eq!(puzzle.clue_count(), puzzle.problem.filled_count());
/// assert!(solver.has_unique_solution(&puzzle.problem));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PuzzleGenerator<'a> {
    solver: &'a BacktrackSolver,
}

impl<'a> PuzzleGenerator<'a> {
    /// Creates a generator backed by the given solver.
    #[must_use]
    pub const fn new(solver: &'a BacktrackSolver) -> Self {
        Self { solver }
    }

    /// Generates a puzzle from a freshly drawn random seed.
    ///
    /// The seed is recorded on the returned puzzle, so the result can still
    /// be reproduced later.
    #[must_use]
    pub fn generate(&self, difficulty: Difficulty) -> GeneratedPuzzle {
        self.generate_with_seed(difficulty, PuzzleSeed::random())
    }

    /// Generates a puzzle deterministically from an explicit seed.
    #[must_use]
    pub fn generate_with_seed(&self, difficulty: Difficulty, seed: PuzzleSeed) -> GeneratedPuzzle {
        let mut rng = Pcg64::from_seed(seed.into_bytes());
        let target = rng.random_range(difficulty.clue_range());

        let solution = self
            .solver
            .solve_with(&DigitGrid::new(), &mut rng)
            .expect("an empty grid always has a completion");

        let mut problem = solution.clone();
        let mut positions: Vec<Position> = Position::all().collect();
        positions.shuffle(&mut rng);

        let mut clues = 81;
        for pos in positions {
            if clues <= target {
                break;
            }
            let digit = problem
                .get(pos)
                .expect("carving visits each position once, starting from a full grid");
            problem.clear(pos);
            if self.solver.has_unique_solution(&problem) {
                clues -= 1;
            } else {
                problem.place(pos, digit);
            }
        }

        log::debug!("generated {difficulty} puzzle: {clues} clues (target {target}), seed {seed}");

        GeneratedPuzzle {
            problem,
            solution,
            seed,
            difficulty,
        }
    }
}
