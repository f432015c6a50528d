//! A 9×9 grid of optional digits.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use derive_more::{Display as DisplayDerive, Error};

use crate::{Digit, Position};

/// A 9×9 grid of optional digits in row-major order.
///
/// This is the value-only board representation used for puzzles, solutions,
/// and solver input; candidate bookkeeping lives elsewhere.
///
/// # String notation
///
/// Grids parse from and display as the standard 81-character notation:
/// digits `1`-`9` for filled cells, `.`, `_`, or `0` for empty cells.
/// Whitespace is ignored when parsing.
///
/// # Examples
///
/// ```
/// use ninefold_core::{Digit, DigitGrid, Position};
///
/// let mut grid = DigitGrid::new();
/// assert_eq!(grid.filled_count(), 0);
///
/// grid.set(Position::new(0, 0), Some(Digit::D5));
/// assert_eq!(grid.get(Position::new(0, 0)), Some(Digit::D5));
///
/// let parsed: DigitGrid = format!("5{}", ".".repeat(80)).parse().unwrap();
/// assert_eq!(parsed, grid);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitGrid {
    cells: [Option<Digit>; 81],
}

impl DigitGrid {
    /// Creates an empty grid.
    #[must_use]
    pub const fn new() -> Self {
        Self { cells: [None; 81] }
    }

    /// Returns the digit at `pos`, or `None` if the cell is empty.
    #[must_use]
    pub const fn get(&self, pos: Position) -> Option<Digit> {
        self.cells[pos.index() as usize]
    }

    /// Sets or clears the digit at `pos`.
    pub const fn set(&mut self, pos: Position, digit: Option<Digit>) {
        self.cells[pos.index() as usize] = digit;
    }

    /// Returns the number of filled cells.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Returns `true` if every cell is filled.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Returns `true` if no two peers share the same digit.
    ///
    /// Empty cells never conflict; a complete, valid grid satisfies both
    /// [`is_complete`](Self::is_complete) and this check.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        Position::ALL.into_iter().all(|pos| {
            let Some(digit) = self.get(pos) else {
                return true;
            };
            pos.peers().iter().all(|peer| self.get(*peer) != Some(digit))
        })
    }
}

impl Default for DigitGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for DigitGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            match cell {
                Some(digit) => write!(f, "{digit}")?,
                None => write!(f, ".")?,
            }
        }
        Ok(())
    }
}

/// Error returned when parsing a [`DigitGrid`] from a string fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, DisplayDerive, Error)]
pub enum ParseDigitGridError {
    /// The string contains a character that is not a digit, placeholder,
    /// or whitespace.
    #[display("invalid character {_0:?} in grid string")]
    InvalidCharacter(#[error(not(source))] char),
    /// The string does not contain exactly 81 cells.
    #[display("expected 81 cells, found {_0}")]
    WrongLength(#[error(not(source))] usize),
}

impl FromStr for DigitGrid {
    type Err = ParseDigitGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut grid = Self::new();
        let mut count = 0usize;
        for c in s.chars() {
            if c.is_whitespace() {
                continue;
            }
            let digit = match c {
                '.' | '_' | '0' => None,
                '1'..='9' => Digit::new(c as u8 - b'0'),
                _ => return Err(ParseDigitGridError::InvalidCharacter(c)),
            };
            if count >= 81 {
                return Err(ParseDigitGridError::WrongLength(count + 1));
            }
            #[expect(clippy::cast_possible_truncation)]
            grid.set(Position::from_index(count as u8), digit);
            count += 1;
        }
        if count != 81 {
            return Err(ParseDigitGridError::WrongLength(count));
        }
        Ok(grid)
    }
}
