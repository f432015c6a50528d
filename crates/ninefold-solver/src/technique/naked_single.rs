//! Naked single: a cell with exactly one note left.

use ninefold_core::Position;

use crate::{
    hint::{AffectedCell, CellEffect, HintStep},
    note_grid::NoteGrid,
    technique::{BoxedTechnique, Technique},
};

/// Finds a cell whose notes contain a single digit.
#[derive(Debug, Clone, Copy, Default)]
pub struct NakedSingle;

impl Technique for NakedSingle {
    fn name(&self) -> &'static str {
        "Naked Single"
    }

    fn find_step(&self, board: &NoteGrid) -> Option<HintStep> {
        Position::ALL.into_iter().find_map(|pos| {
            if board.value(pos).is_some() {
                return None;
            }
            let digit = board.notes(pos).as_single()?;
            Some(HintStep {
                technique: self.name(),
                description: format!("{pos} must be {digit}"),
                explanation: format!(
                    "{digit} is the only remaining candidate at {pos}; every other digit \
                     already appears in its row, column, or box."
                ),
                affected_cells: vec![AffectedCell {
                    position: pos,
                    effect: CellEffect::Place(digit),
                }],
            })
        })
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }
}

#[cfg(test)]
mod tests {
    use ninefold_core::Digit;

    use super::*;
    use crate::testing::TechniqueTester;

    #[test]
    fn test_finds_single_candidate_cell() {
        // The first row and column plus the top-left box leave (0, 0) with
        // only one candidate.
        TechniqueTester::new(NakedSingle)
            .board(
                "
                    _23 456 789
                    45_ ___ ___
                    _89 ___ ___
                    2__ ___ ___
                    3__ ___ ___
                    5__ ___ ___
                    6__ ___ ___
                    8__ ___ ___
                    9__ ___ ___
                ",
            )
            .expect_place(Position::new(0, 0), Digit::D1);
    }

    #[test]
    fn test_no_step_without_single() {
        TechniqueTester::new(NakedSingle)
            .board(&format!("12{}", "_".repeat(79)))
            .expect_none();
    }

    #[test]
    fn test_first_single_in_row_major_order() {
        // Two naked singles; the earlier cell wins.
        TechniqueTester::new(NakedSingle)
            .board(
                "
                    _23 456 78_
                    456 789 123
                    789 123 456
                    ___ ___ ___
                    ___ ___ ___
                    ___ ___ ___
                    ___ ___ ___
                    ___ ___ ___
                    ___ ___ ___
                ",
            )
            .expect_place(Position::new(0, 0), Digit::D1);
    }
}
