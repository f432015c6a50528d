//! Per-cell game state.

use derive_more::IsVariant;
use ninefold_core::{Digit, DigitSet};

/// The state of one cell during play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IsVariant)]
pub enum CellState {
    /// A clue from the puzzle; never modifiable.
    Given(Digit),
    /// A digit entered by the player.
    Filled(Digit),
    /// Pencil-mark notes; always non-empty.
    Notes(DigitSet),
    /// No value and no notes.
    Empty,
}

impl CellState {
    /// Returns the cell's digit, whether given or player-filled.
    #[must_use]
    pub const fn digit(self) -> Option<Digit> {
        match self {
            Self::Given(digit) | Self::Filled(digit) => Some(digit),
            Self::Notes(_) | Self::Empty => None,
        }
    }

    /// Returns the cell's notes, empty for non-note cells.
    #[must_use]
    pub const fn notes(self) -> DigitSet {
        match self {
            Self::Notes(notes) => notes,
            Self::Given(_) | Self::Filled(_) | Self::Empty => DigitSet::EMPTY,
        }
    }
}
