//! A player's board: values plus pencil-mark notes.

use ninefold_core::{Digit, DigitGrid, DigitSet, Position};

/// A 9×9 board of values and per-cell candidate notes.
///
/// Unlike [`ConstraintGrid`](crate::ConstraintGrid), nothing here propagates
/// automatically: notes are plain player annotations and may be wrong,
/// stale, or empty. The technique detectors read exactly this state, so
/// hints reason over what the player can actually see.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteGrid {
    values: [Option<Digit>; 81],
    notes: [DigitSet; 81],
}

impl NoteGrid {
    /// Creates an empty board with no values and no notes.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            values: [None; 81],
            notes: [DigitSet::EMPTY; 81],
        }
    }

    /// Creates a board from a digit grid, with empty notes.
    #[must_use]
    pub fn from_digit_grid(grid: &DigitGrid) -> Self {
        let mut this = Self::new();
        for pos in Position::ALL {
            this.values[pos.index() as usize] = grid.get(pos);
        }
        this
    }

    /// Creates a board from a digit grid with fully computed notes.
    ///
    /// Every empty cell gets the digits not placed in any of its peers.
    #[must_use]
    pub fn with_auto_notes(grid: &DigitGrid) -> Self {
        let mut this = Self::from_digit_grid(grid);
        this.auto_fill_notes();
        this
    }

    /// Returns the value at `pos`, if any.
    #[must_use]
    pub const fn value(&self, pos: Position) -> Option<Digit> {
        self.values[pos.index() as usize]
    }

    /// Returns the notes at `pos`.
    ///
    /// Cells with a value always report empty notes.
    #[must_use]
    pub const fn notes(&self, pos: Position) -> DigitSet {
        self.notes[pos.index() as usize]
    }

    /// Places `digit` at `pos`, clearing the cell's notes and erasing the
    /// digit from every peer's notes.
    pub fn set_value(&mut self, pos: Position, digit: Digit) {
        self.values[pos.index() as usize] = Some(digit);
        self.notes[pos.index() as usize] = DigitSet::EMPTY;
        for peer in pos.peers() {
            self.notes[peer.index() as usize].remove(digit);
        }
    }

    /// Clears the value at `pos`, leaving notes empty.
    pub const fn clear_value(&mut self, pos: Position) {
        self.values[pos.index() as usize] = None;
    }

    /// Replaces the notes at `pos`.
    ///
    /// Ignored if the cell has a value.
    pub const fn set_notes(&mut self, pos: Position, notes: DigitSet) {
        if self.values[pos.index() as usize].is_none() {
            self.notes[pos.index() as usize] = notes;
        }
    }

    /// Removes `digit` from the notes at `pos`.
    pub const fn remove_note(&mut self, pos: Position, digit: Digit) {
        self.notes[pos.index() as usize].remove(digit);
    }

    /// Recomputes every empty cell's notes from the placed values.
    pub fn auto_fill_notes(&mut self) {
        for pos in Position::ALL {
            if self.value(pos).is_some() {
                self.notes[pos.index() as usize] = DigitSet::EMPTY;
                continue;
            }
            let mut notes = DigitSet::FULL;
            for peer in pos.peers() {
                if let Some(digit) = self.value(*peer) {
                    notes.remove(digit);
                }
            }
            self.notes[pos.index() as usize] = notes;
        }
    }

    /// Returns `true` if every cell has a value.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.values.iter().all(Option::is_some)
    }

    /// Returns the placed values as a digit grid, discarding notes.
    #[must_use]
    pub fn to_digit_grid(&self) -> DigitGrid {
        let mut grid = DigitGrid::new();
        for pos in Position::ALL {
            grid.set(pos, self.value(pos));
        }
        grid
    }
}

impl Default for NoteGrid {
    fn default() -> Self {
        Self::new()
    }
}
