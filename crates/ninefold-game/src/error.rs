//! Game input errors.

use derive_more::{Display, Error};

/// Error returned when a player input is not allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// The target cell is a puzzle clue.
    #[display("cannot modify a given cell")]
    CannotModifyGivenCell,
    /// The target cell already holds a digit.
    #[display("cannot add a note to a filled cell")]
    CannotAddNoteToFilledCell,
}
