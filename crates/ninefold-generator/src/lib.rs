//! Puzzle generation for the ninefold Sudoku crates.
//!
//! [`PuzzleGenerator`] produces uniquely solvable puzzles for a
//! [`Difficulty`] tier. Generation is deterministic in a [`PuzzleSeed`], so
//! puzzles can be reproduced from their seed string alone.

pub use self::{
    difficulty::Difficulty,
    generate::{GeneratedPuzzle, PuzzleGenerator},
    seed::{ParsePuzzleSeedError, PuzzleSeed},
};

pub mod difficulty;
pub mod generate;
pub mod seed;
