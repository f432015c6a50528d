//! Core data structures for the ninefold Sudoku engine.
//!
//! This crate provides the fundamental, allocation-free types shared by the
//! solver, generator, and game crates:
//!
//! - [`Digit`]: type-safe Sudoku digit 1-9
//! - [`DigitSet`]: a 9-bit candidate mask over digits (the internal
//!   representation of a cell's notes; `0x1FF` means all nine digits)
//! - [`Position`]: a board cell addressed by its row-major linear index,
//!   with constant-time row/column/box derivation and a precomputed
//!   20-cell peer table
//! - [`CellSet`]: an 81-bit set of board positions
//! - [`House`]: a row, column, or 3×3 box
//! - [`DigitGrid`]: 81 optional digits with the standard 81-character
//!   string notation
//!
//! # Examples
//!
//! ```
//! use ninefold_core::{Digit, DigitSet, Position};
//!
//! let pos = Position::new(4, 2);
//! assert_eq!(pos.index(), 2 * 9 + 4);
//! assert_eq!(pos.peers().len(), 20);
//!
//! let mut candidates = DigitSet::FULL;
//! candidates.remove(Digit::D5);
//! assert_eq!(candidates.len(), 8);
//! ```

pub use self::{
    cell_set::CellSet,
    digit::Digit,
    digit_grid::{DigitGrid, ParseDigitGridError},
    digit_set::DigitSet,
    house::House,
    position::Position,
};

pub mod cell_set;
pub mod digit;
pub mod digit_grid;
pub mod digit_set;
pub mod house;
pub mod position;
