//! Locked candidates (pointing): a box confines a digit to one line.

use ninefold_core::{Digit, DigitSet, House, Position};
use tinyvec::ArrayVec;

use crate::{
    hint::{AffectedCell, CellEffect, HintStep},
    note_grid::NoteGrid,
    technique::{BoxedTechnique, Technique},
};

/// Finds a box whose candidates for a digit all sit in one row or column,
/// eliminating that digit from the rest of the line.
///
/// Known as a pointing pair or pointing triple, depending on how many cells
/// carry the candidate. Only reported when the elimination removes at least
/// one present note.
#[derive(Debug, Clone, Copy, Default)]
pub struct LockedCandidates;

impl Technique for LockedCandidates {
    fn name(&self) -> &'static str {
        "Locked Candidates"
    }

    fn find_step(&self, board: &NoteGrid) -> Option<HintStep> {
        (0..9).find_map(|index| self.find_in_box(board, index))
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }
}

impl LockedCandidates {
    fn find_in_box(&self, board: &NoteGrid, box_index: u8) -> Option<HintStep> {
        let house = House::Box { index: box_index };
        for digit in Digit::ALL {
            let mut places: ArrayVec<[Position; 9]> = ArrayVec::new();
            for &pos in house.positions() {
                if board.value(pos).is_none() && board.notes(pos).contains(digit) {
                    places.push(pos);
                }
            }
            // A single place is a hidden single, not a pointing pattern.
            let ([first, rest @ ..], 2..=3) = (places.as_slice(), places.len()) else {
                continue;
            };
            let line = if rest.iter().all(|pos| pos.y() == first.y()) {
                House::Row { y: first.y() }
            } else if rest.iter().all(|pos| pos.x() == first.x()) {
                House::Column { x: first.x() }
            } else {
                continue;
            };
            let eliminated: Vec<AffectedCell> = line
                .positions()
                .iter()
                .filter(|pos| {
                    !house.contains(**pos)
                        && board.value(**pos).is_none()
                        && board.notes(**pos).contains(digit)
                })
                .map(|pos| AffectedCell {
                    position: *pos,
                    effect: CellEffect::Eliminate(DigitSet::from_elem(digit)),
                })
                .collect();
            if eliminated.is_empty() {
                continue;
            }
            return Some(HintStep {
                technique: self.name(),
                description: format!("{digit} in {house} is locked into {line}"),
                explanation: format!(
                    "Every candidate for {digit} in {house} lies in {line}, so the digit \
                     cannot appear elsewhere in that {}.",
                    match line {
                        House::Row { .. } => "row",
                        House::Column { .. } | House::Box { .. } => "column",
                    }
                ),
                affected_cells: eliminated,
            });
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::TechniqueTester;

    #[test]
    fn test_pointing_pair_clears_rest_of_row() {
        // In box 0, the digit 1 can only sit in row 0 (rows 1 and 2 of the
        // box are filled), so the rest of row 0 loses the candidate.
        TechniqueTester::new(LockedCandidates)
            .board(
                "
                    ___ ___ ___
                    234 ___ ___
                    567 ___ ___
                    ___ ___ ___
                    ___ ___ ___
                    ___ ___ ___
                    ___ ___ ___
                    ___ ___ ___
                    ___ ___ ___
                ",
            )
            .expect_eliminations(
                &(3..9)
                    .map(|x| (Position::new(x, 0), DigitSet::from_elem(Digit::D1)))
                    .collect::<Vec<_>>(),
            );
    }

    #[test]
    fn test_no_step_when_candidates_span_lines() {
        TechniqueTester::new(LockedCandidates)
            .board(&"_".repeat(81))
            .expect_none();
    }
}
