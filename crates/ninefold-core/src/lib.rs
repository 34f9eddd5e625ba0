//! Core data model for the ninefold Sudoku engine.
//!
//! This crate provides the board representation shared by the solver and the
//! puzzle generator. It is deliberately dependency-free: everything here is a
//! small value type with cheap copy/compare semantics.
//!
//! # Overview
//!
//! - [`Digit`]: type-safe Sudoku digit 1-9
//! - [`Position`]: board coordinate (x, y), each in 0-8
//! - [`DigitSet`]: a set of digits backed by a 9-bit mask, used for per-cell
//!   candidate computation
//! - [`DigitGrid`]: the 9x9 board itself, with consistency checking and
//!   conversions to and from plain integer arrays (`0` = empty)
//!
//! # Examples
//!
//! ```
//! use ninefold_core::{Digit, DigitGrid, Position};
//!
//! let mut grid = DigitGrid::new();
//! grid.place(Position::new(4, 4), Digit::D5);
//!
//! // 5 is no longer a candidate elsewhere in the same column
//! let candidates = grid.candidates_at(Position::new(4, 5));
//! assert!(!candidates.contains(Digit::D5));
//! ```

pub mod digit;
pub mod digit_set;
pub mod grid;
pub mod position;

pub use self::{
    digit::Digit,
    digit_set::DigitSet,
    grid::{ConsistencyError, DigitGrid, InvalidValueError, ParseGridError},
    position::Position,
};
