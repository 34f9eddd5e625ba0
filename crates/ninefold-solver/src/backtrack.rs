//! Recursive backtracking search over empty cells.

use derive_more::{Display, Error, IsVariant};
use ninefold_core::{Digit, DigitGrid, Position};
use rand::{Rng, RngCore, seq::SliceRandom};
use tinyvec::ArrayVec;

/// The grid has no valid completion.
///
/// This is a normal outcome, not a failure: it covers both genuinely
/// unsatisfiable grids and input that already violates a row, column, or box
/// constraint, which the solver rejects before searching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("grid has no valid completion")]
pub struct Unsolvable;

/// Outcome of a capped solution count.
///
/// # Examples
///
/// ```
/// use ninefold_core::DigitGrid;
/// use ninefold_solver::{BacktrackSolver, SolutionCount};
///
/// let solver = BacktrackSolver::new();
/// // The empty grid has many completions
/// assert_eq!(solver.solution_count(&DigitGrid::new()), SolutionCount::Multiple);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, IsVariant)]
pub enum SolutionCount {
    /// No completion exists.
    Zero,
    /// Exactly one completion exists.
    Unique,
    /// At least two completions exist.
    Multiple,
}

/// A backtracking Sudoku solver.
///
/// The solver is stateless: every call copies its input grid and searches on
/// the copy, so the caller's grid is never mutated and concurrent calls from
/// independent tasks are safe.
///
/// Two candidate orders are supported. [`solve`] tries digits in ascending
/// order and is fully deterministic; [`solve_with`] shuffles the candidate
/// order at every cell with a caller-supplied RNG, which is how the generator
/// obtains a different random complete grid per seed.
///
/// [`solve`]: Self::solve
/// [`solve_with`]: Self::solve_with
///
/// # Examples
///
/// ```
/// use ninefold_core::DigitGrid;
/// use ninefold_solver::BacktrackSolver;
///
/// let solver = BacktrackSolver::new();
/// let solved = solver.solve(&DigitGrid::new())?;
/// assert!(solved.is_filled());
/// # Ok::<(), ninefold_solver::Unsolvable>(())
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct BacktrackSolver;

/// Empty cells of the grid, in the fixed row-major traversal order.
type EmptyCells = ArrayVec<[Position; 81]>;

impl BacktrackSolver {
    /// Creates a new solver.
    #[must_use]
    pub const fn new() -> Self {
        BacktrackSolver
    }

    /// Finds a completion of the grid, trying candidates in ascending order.
    ///
    /// The input is copied, never mutated. Solving an already filled
    /// consistent grid returns it unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`Unsolvable`] if no completion exists, including when the
    /// input already contains a duplicate digit in a row, column, or box.
    pub fn solve(&self, grid: &DigitGrid) -> Result<DigitGrid, Unsolvable> {
        self.solve_impl(grid, None)
    }

    /// Finds a completion of the grid, trying candidates in a shuffled order
    /// at every cell.
    ///
    /// Run on an empty grid this produces a uniformly varied complete grid,
    /// which seeds puzzle generation. The result is deterministic for a given
    /// RNG state.
    ///
    /// # Errors
    ///
    /// Returns [`Unsolvable`] if no completion exists; see [`solve`].
    ///
    /// [`solve`]: Self::solve
    ///
    /// # Examples
    ///
    /// ```
    /// use ninefold_core::DigitGrid;
    /// use ninefold_solver::BacktrackSolver;
    ///
    /// let solver = BacktrackSolver::new();
    /// let solved = solver.solve_with(&DigitGrid::new(), &mut rand::rng())?;
    /// assert!(solved.is_filled());
    /// # Ok::<(), ninefold_solver::Unsolvable>(())
    /// ```
    pub fn solve_with<R: Rng>(
        &self,
        grid: &DigitGrid,
        rng: &mut R,
    ) -> Result<DigitGrid, Unsolvable> {
        self.solve_impl(grid, Some(rng as &mut dyn RngCore))
    }

    /// Counts the completions of the grid, stopping at `cap`.
    ///
    /// The search is the same backtracking recursion as [`solve`], continued
    /// past the first solution with an early exit once `cap` is reached.
    /// Every leaf of the search tree is a distinct full assignment, so the
    /// count never sees the same completion twice. An inconsistent grid
    /// counts as zero.
    ///
    /// `cap = 2` is all uniqueness checking needs: it distinguishes "exactly
    /// one" from "at least two" without paying for an exhaustive count.
    ///
    /// [`solve`]: Self::solve
    ///
    /// # Examples
    ///
    /// ```
    /// use ninefold_core::DigitGrid;
    /// use ninefold_solver::BacktrackSolver;
    ///
    /// let solver = BacktrackSolver::new();
    /// assert_eq!(solver.count_solutions(&DigitGrid::new(), 2), 2);
    /// ```
    #[must_use]
    pub fn count_solutions(&self, grid: &DigitGrid, cap: usize) -> usize {
        if cap == 0 || grid.check_consistency().is_err() {
            return 0;
        }
        let mut search = Search::new(grid, None, cap);
        search.run(0);
        search.found
    }

    /// Classifies the grid's completion count as zero, unique, or multiple.
    ///
    /// Equivalent to [`count_solutions`] with a cap of 2.
    ///
    /// [`count_solutions`]: Self::count_solutions
    #[must_use]
    pub fn solution_count(&self, grid: &DigitGrid) -> SolutionCount {
        match self.count_solutions(grid, 2) {
            0 => SolutionCount::Zero,
            1 => SolutionCount::Unique,
            _ => SolutionCount::Multiple,
        }
    }

    /// Returns `true` if the grid has exactly one completion.
    #[must_use]
    pub fn has_unique_solution(&self, grid: &DigitGrid) -> bool {
        self.solution_count(grid).is_unique()
    }

    fn solve_impl(
        &self,
        grid: &DigitGrid,
        rng: Option<&mut dyn RngCore>,
    ) -> Result<DigitGrid, Unsolvable> {
        if grid.check_consistency().is_err() {
            return Err(Unsolvable);
        }
        let mut search = Search::new(grid, rng, 1);
        search.run(0);
        search.first.ok_or(Unsolvable)
    }
}

/// State of one backtracking run.
///
/// Holds the working grid, the fixed list of empty cells, the optional RNG
/// for shuffled candidate order, and the solution accumulator with its cap.
struct Search<'a> {
    grid: DigitGrid,
    empties: EmptyCells,
    rng: Option<&'a mut dyn RngCore>,
    cap: usize,
    found: usize,
    first: Option<DigitGrid>,
}

impl<'a> Search<'a> {
    fn new(grid: &DigitGrid, rng: Option<&'a mut dyn RngCore>, cap: usize) -> Self {
        let empties: EmptyCells = grid.empty_positions().collect();
        Self {
            grid: grid.clone(),
            empties,
            rng,
            cap,
            found: 0,
            first: None,
        }
    }

    /// Recurses over `empties[depth..]`, accumulating full assignments.
    ///
    /// Invariant on return: the working grid is restored to its state at
    /// entry, so every level can try its next candidate on a clean board.
    fn run(&mut self, depth: usize) {
        let Some(&pos) = self.empties.get(depth) else {
            // every cell is filled and consistent: one complete solution
            self.found += 1;
            if self.first.is_none() {
                self.first = Some(self.grid.clone());
            }
            return;
        };

        let mut order: ArrayVec<[u8; 9]> = self
            .grid
            .candidates_at(pos)
            .iter()
            .map(|digit| digit.value())
            .collect();
        if let Some(rng) = self.rng.as_deref_mut() {
            order.shuffle(rng);
        }

        for value in order {
            self.grid.place(pos, Digit::from_value(value));
            self.run(depth + 1);
            self.grid.clear(pos);
            if self.found >= self.cap {
                return;
            }
        }
    }
}
