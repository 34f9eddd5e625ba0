//! Backtracking solver for the ninefold Sudoku engine.
//!
//! This crate finds completions of partially filled grids and counts
//! solutions up to a cap, which is what uniqueness-aware puzzle generation
//! needs. The search is plain recursive backtracking over the empty cells in
//! row-major order; the per-cell candidate set prunes aggressively enough
//! that 9x9 boards solve in well under a second.
//!
//! # Examples
//!
//! ```
//! use ninefold_core::DigitGrid;
//! use ninefold_solver::BacktrackSolver;
//!
//! let solver = BacktrackSolver::new();
//! let puzzle: DigitGrid = "
//!     53_ _7_ ___
//!     6__ 195 ___
//!     _98 ___ _6_
//!     8__ _6_ __3
//!     4__ 8_3 __1
//!     7__ _2_ __6
//!     _6_ ___ 28_
//!     ___ 419 __5
//!     ___ _8_ _79
//! "
//! .parse()
//! .unwrap();
//!
//! let solved = solver.solve(&puzzle)?;
//! assert!(solved.is_filled());
//! assert!(solver.has_unique_solution(&puzzle));
//! # Ok::<(), ninefold_solver::Unsolvable>(())
//! ```

pub mod backtrack;

pub use self::backtrack::{BacktrackSolver, SolutionCount, Unsolvable};
