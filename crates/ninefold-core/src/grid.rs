//! The 9x9 Sudoku board.

use std::{
    error::Error,
    fmt::{self, Display},
    str::FromStr,
};

use crate::{digit::Digit, digit_set::DigitSet, position::Position};

/// A 9x9 Sudoku board holding a digit or nothing in each cell.
///
/// Cells are stored in row-major order; `None` is the empty sentinel. A grid
/// makes no consistency promise by itself: [`check_consistency`] reports
/// duplicate digits within a row, column, or box.
///
/// At the external boundary the board is exchanged as a `[[u8; 9]; 9]` array
/// with `0` for empty cells ([`from_values`] / [`to_values`]). A compact text
/// form is available through [`Display`] and [`FromStr`]: digits for filled
/// cells, `_` for empty cells on output; `.`, `_`, and `0` all accepted as
/// empty on input, with whitespace ignored.
///
/// [`check_consistency`]: Self::check_consistency
/// [`from_values`]: Self::from_values
/// [`to_values`]: Self::to_values
///
/// # Examples
///
/// ```
/// use ninefold_core::{Digit, DigitGrid, Position};
///
/// let mut grid = DigitGrid::new();
/// assert_eq!(grid.filled_count(), 0);
///
/// grid.place(Position::new(0, 0), Digit::D5);
/// assert_eq!(grid.get(Position::new(0, 0)), Some(Digit::D5));
/// assert_eq!(grid.filled_count(), 1);
///
/// grid.clear(Position::new(0, 0));
/// assert_eq!(grid.get(Position::new(0, 0)), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitGrid {
    cells: [Option<Digit>; 81],
}

impl Default for DigitGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl DigitGrid {
    /// Creates an empty grid.
    #[must_use]
    pub const fn new() -> Self {
        Self { cells: [None; 81] }
    }

    /// Returns the digit at a position, or `None` if the cell is empty.
    #[must_use]
    pub const fn get(&self, pos: Position) -> Option<Digit> {
        self.cells[pos.index()]
    }

    /// Places a digit at a position, overwriting any previous digit.
    pub const fn place(&mut self, pos: Position, digit: Digit) {
        self.cells[pos.index()] = Some(digit);
    }

    /// Clears the cell at a position.
    pub const fn clear(&mut self, pos: Position) {
        self.cells[pos.index()] = None;
    }

    /// Returns the number of filled cells (the clue count of a puzzle).
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Returns `true` if every cell holds a digit.
    #[must_use]
    pub fn is_filled(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Returns an iterator over the empty positions in row-major order.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        Position::all().filter(|pos| self.get(*pos).is_none())
    }

    /// Returns the set of digits that can legally be placed at a position.
    ///
    /// For an empty cell this is every digit not already present in the
    /// cell's row, column, or 3x3 box. For a filled cell it is the single
    /// digit the cell holds.
    ///
    /// # Examples
    ///
    /// ```
    /// use ninefold_core::{Digit, DigitGrid, Position};
    ///
    /// let mut grid = DigitGrid::new();
    /// grid.place(Position::new(0, 0), Digit::D1);
    /// grid.place(Position::new(1, 1), Digit::D2); // same box as (0, 0)
    ///
    /// let candidates = grid.candidates_at(Position::new(2, 0));
    /// assert!(!candidates.contains(Digit::D1)); // row and box
    /// assert!(!candidates.contains(Digit::D2)); // box
    /// assert_eq!(candidates.len(), 7);
    /// ```
    #[must_use]
    pub fn candidates_at(&self, pos: Position) -> DigitSet {
        if let Some(digit) = self.get(pos) {
            return DigitSet::from_elem(digit);
        }
        let seen = self.row_digits(pos.y()) | self.col_digits(pos.x()) | self.box_digits(pos.box_index());
        seen.complement()
    }

    /// Checks that no digit appears twice in any row, column, or box.
    ///
    /// # Errors
    ///
    /// Returns a [`ConsistencyError`] identifying the second occurrence of
    /// the first duplicate found.
    pub fn check_consistency(&self) -> Result<(), ConsistencyError> {
        for i in 0..9 {
            self.check_house(row_positions(i))?;
            self.check_house(col_positions(i))?;
            self.check_house(box_positions(i))?;
        }
        Ok(())
    }

    /// Returns `true` if [`check_consistency`](Self::check_consistency) passes.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.check_consistency().is_ok()
    }

    /// Builds a grid from a row-major array of values, `0` meaning empty.
    ///
    /// This is the integer contract shared with callers outside the engine.
    /// Consistency is *not* checked here; an inconsistent grid is a valid
    /// value that the solver will report as unsolvable.
    ///
    /// # Errors
    ///
    /// Returns an [`InvalidValueError`] if any value is greater than 9.
    ///
    /// # Examples
    ///
    /// ```
    /// use ninefold_core::{Digit, DigitGrid, Position};
    ///
    /// let mut values = [[0_u8; 9]; 9];
    /// values[2][7] = 4; // row 2, column 7
    ///
    /// let grid = DigitGrid::from_values(values)?;
    /// assert_eq!(grid.get(Position::new(7, 2)), Some(Digit::D4));
    /// assert_eq!(grid.to_values(), values);
    /// # Ok::<(), ninefold_core::InvalidValueError>(())
    /// ```
    #[expect(clippy::cast_possible_truncation)]
    pub fn from_values(values: [[u8; 9]; 9]) -> Result<Self, InvalidValueError> {
        let mut grid = Self::new();
        for (y, row) in values.iter().enumerate() {
            for (x, &value) in row.iter().enumerate() {
                if value == 0 {
                    continue;
                }
                let digit = Digit::try_from_value(value).ok_or(InvalidValueError { value })?;
                grid.place(Position::new(x as u8, y as u8), digit);
            }
        }
        Ok(grid)
    }

    /// Returns the grid as a row-major array of values, `0` meaning empty.
    #[must_use]
    pub fn to_values(&self) -> [[u8; 9]; 9] {
        let mut values = [[0; 9]; 9];
        for pos in Position::all() {
            if let Some(digit) = self.get(pos) {
                values[pos.y() as usize][pos.x() as usize] = digit.value();
            }
        }
        values
    }

    fn row_digits(&self, y: u8) -> DigitSet {
        self.house_digits(row_positions(y))
    }

    fn col_digits(&self, x: u8) -> DigitSet {
        self.house_digits(col_positions(x))
    }

    fn box_digits(&self, index: u8) -> DigitSet {
        self.house_digits(box_positions(index))
    }

    fn house_digits(&self, house: impl Iterator<Item = Position>) -> DigitSet {
        house.filter_map(|pos| self.get(pos)).collect()
    }

    fn check_house(&self, house: impl Iterator<Item = Position>) -> Result<(), ConsistencyError> {
        let mut seen = DigitSet::new();
        for pos in house {
            let Some(digit) = self.get(pos) else {
                continue;
            };
            if seen.contains(digit) {
                return Err(ConsistencyError {
                    position: pos,
                    digit,
                });
            }
            seen.insert(digit);
        }
        Ok(())
    }
}

fn row_positions(y: u8) -> impl Iterator<Item = Position> {
    (0..9).map(move |x| Position::new(x, y))
}

fn col_positions(x: u8) -> impl Iterator<Item = Position> {
    (0..9).map(move |y| Position::new(x, y))
}

fn box_positions(index: u8) -> impl Iterator<Item = Position> {
    let x0 = (index % 3) * 3;
    let y0 = (index / 3) * 3;
    (0..9).map(move |i| Position::new(x0 + i % 3, y0 + i / 3))
}

impl Display for DigitGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            match cell {
                Some(digit) => write!(f, "{digit}")?,
                None => write!(f, "_")?,
            }
        }
        Ok(())
    }
}

impl FromStr for DigitGrid {
    type Err = ParseGridError;

    /// Parses a grid from text.
    ///
    /// Digits 1-9 fill cells; `.`, `_`, and `0` leave them empty; whitespace
    /// is ignored, so multi-line layouts with box gaps parse as written.
    #[expect(clippy::cast_possible_truncation)]
    fn from_str(s: &str) -> Result<Self, ParseGridError> {
        let mut grid = Self::new();
        let mut index = 0;
        for c in s.chars() {
            if c.is_whitespace() {
                continue;
            }
            if index >= 81 {
                return Err(ParseGridError::WrongCellCount(index + 1));
            }
            match c {
                '.' | '_' | '0' => {}
                '1'..='9' => {
                    let digit = Digit::from_value(c as u8 - b'0');
                    grid.place(Position::from_index(index), digit);
                }
                _ => return Err(ParseGridError::UnexpectedCharacter(c)),
            }
            index += 1;
        }
        if index != 81 {
            return Err(ParseGridError::WrongCellCount(index));
        }
        Ok(grid)
    }
}

/// A duplicate digit within a row, column, or box.
///
/// Produced by [`DigitGrid::check_consistency`]; identifies the second
/// occurrence of the duplicated digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsistencyError {
    position: Position,
    digit: Digit,
}

impl ConsistencyError {
    /// Returns the position of the offending cell.
    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }

    /// Returns the duplicated digit.
    #[must_use]
    pub const fn digit(&self) -> Digit {
        self.digit
    }
}

impl Display for ConsistencyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "digit {} at {} duplicates another in its row, column, or box",
            self.digit, self.position
        )
    }
}

impl Error for ConsistencyError {}

/// A cell value outside the range 0-9.
///
/// Produced by [`DigitGrid::from_values`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidValueError {
    value: u8,
}

impl InvalidValueError {
    /// Returns the rejected value.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.value
    }
}

impl Display for InvalidValueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cell value out of range 0-9: {}", self.value)
    }
}

impl Error for InvalidValueError {}

/// A malformed textual grid.
///
/// Produced when parsing a [`DigitGrid`] from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseGridError {
    /// A character that is not a digit, an empty-cell marker, or whitespace.
    UnexpectedCharacter(char),
    /// The text did not contain exactly 81 cells.
    WrongCellCount(usize),
}

impl Display for ParseGridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedCharacter(c) => write!(f, "unexpected character in grid: {c:?}"),
            Self::WrongCellCount(n) => write!(f, "expected 81 cells, found {n}"),
        }
    }
}

impl Error for ParseGridError {}
