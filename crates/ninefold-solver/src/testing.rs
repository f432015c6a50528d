//! Test harness for technique detectors.

use ninefold_core::{Digit, DigitGrid, DigitSet, Position};

use crate::{
    hint::{CellEffect, HintStep},
    note_grid::NoteGrid,
    technique::Technique,
};

/// Fluent assertion helper for [`Technique`] implementations.
///
/// Builds a [`NoteGrid`] with auto-filled notes from an 81-cell grid string,
/// optionally adjusts individual cells' notes, runs the technique, and
/// asserts on the resulting step.
///
/// # Examples
///
/// ```
/// use ninefold_core::{Digit, Position};
/// use ninefold_solver::{technique::NakedSingle, testing::TechniqueTester};
///
/// TechniqueTester::new(NakedSingle)
///     .board(&format!("_23456789{}", "_".repeat(72)))
///     .expect_place(Position::new(0, 0), Digit::D1);
/// ```
pub struct TechniqueTester<T> {
    technique: T,
    board: NoteGrid,
}

impl<T: Technique> TechniqueTester<T> {
    /// Creates a tester with an empty board.
    #[must_use]
    pub fn new(technique: T) -> Self {
        Self {
            technique,
            board: NoteGrid::new(),
        }
    }

    /// Sets the board from grid notation and auto-fills its notes.
    ///
    /// # Panics
    ///
    /// Panics if `grid` is not valid grid notation.
    #[must_use]
    #[track_caller]
    pub fn board(mut self, grid: &str) -> Self {
        let parsed: DigitGrid = grid.parse().unwrap_or_else(|e| panic!("bad grid: {e}"));
        self.board = NoteGrid::with_auto_notes(&parsed);
        self
    }

    /// Overrides the notes of a single cell.
    #[must_use]
    pub fn notes(mut self, pos: Position, digits: impl IntoIterator<Item = Digit>) -> Self {
        self.board.set_notes(pos, digits.into_iter().collect());
        self
    }

    /// Runs the technique once.
    #[must_use]
    pub fn find(&self) -> Option<HintStep> {
        self.technique.find_step(&self.board)
    }

    /// Asserts the technique finds a step and returns it.
    #[track_caller]
    pub fn expect_step(&self) -> HintStep {
        let step = self
            .find()
            .unwrap_or_else(|| panic!("{} found no step", self.technique.name()));
        assert_eq!(step.technique, self.technique.name());
        assert!(!step.affected_cells.is_empty(), "step affects no cells");
        step
    }

    /// Asserts the step places `digit` at `pos` and nothing else.
    #[track_caller]
    pub fn expect_place(&self, pos: Position, digit: Digit) {
        let step = self.expect_step();
        assert_eq!(step.affected_cells.len(), 1, "expected a single placement");
        let cell = step.affected_cells[0];
        assert_eq!(cell.position, pos);
        assert_eq!(cell.effect, CellEffect::Place(digit));
    }

    /// Asserts the step eliminates exactly the given notes from the given
    /// cells, in order.
    #[track_caller]
    pub fn expect_eliminations(&self, expected: &[(Position, DigitSet)]) {
        let step = self.expect_step();
        let actual: Vec<(Position, DigitSet)> = step
            .affected_cells
            .iter()
            .map(|cell| match cell.effect {
                CellEffect::Eliminate(digits) => (cell.position, digits),
                CellEffect::Place(digit) => {
                    panic!("expected elimination at {}, found placement of {digit}", cell.position)
                }
            })
            .collect();
        assert_eq!(actual, expected);
    }

    /// Asserts the technique finds nothing.
    #[track_caller]
    pub fn expect_none(&self) {
        if let Some(step) = self.find() {
            panic!(
                "{} unexpectedly found a step: {}",
                self.technique.name(),
                step.description
            );
        }
    }
}
