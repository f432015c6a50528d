//! Naked pair: two cells in a house sharing the same two notes.

use ninefold_core::{House, Position};
use tinyvec::ArrayVec;

use crate::{
    hint::{AffectedCell, CellEffect, HintStep},
    note_grid::NoteGrid,
    technique::{BoxedTechnique, Technique},
};

/// Finds two cells of a house whose notes are the same two digits,
/// eliminating those digits from the rest of the house.
///
/// All 27 houses are scanned in [`House::ALL`] order; a pair is only
/// reported when the elimination removes at least one present note.
#[derive(Debug, Clone, Copy, Default)]
pub struct NakedPair;

impl Technique for NakedPair {
    fn name(&self) -> &'static str {
        "Naked Pair"
    }

    fn find_step(&self, board: &NoteGrid) -> Option<HintStep> {
        House::ALL
            .into_iter()
            .find_map(|house| self.find_in_house(board, house))
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }
}

impl NakedPair {
    fn find_in_house(&self, board: &NoteGrid, house: House) -> Option<HintStep> {
        let mut pair_cells: ArrayVec<[Position; 9]> = ArrayVec::new();
        for &pos in house.positions() {
            if board.value(pos).is_none() && board.notes(pos).len() == 2 {
                pair_cells.push(pos);
            }
        }
        for (i, &first) in pair_cells.iter().enumerate() {
            let pair = board.notes(first);
            for &second in &pair_cells[i + 1..] {
                if board.notes(second) != pair {
                    continue;
                }
                let eliminated: Vec<AffectedCell> = house
                    .positions()
                    .iter()
                    .filter(|pos| {
                        **pos != first
                            && **pos != second
                            && board.value(**pos).is_none()
                            && !(board.notes(**pos) & pair).is_empty()
                    })
                    .map(|pos| AffectedCell {
                        position: *pos,
                        effect: CellEffect::Eliminate(board.notes(*pos) & pair),
                    })
                    .collect();
                if eliminated.is_empty() {
                    continue;
                }
                let mut digits = pair.into_iter();
                let (a, b) = (digits.next()?, digits.next()?);
                return Some(HintStep {
                    technique: self.name(),
                    description: format!("{first} and {second} form a naked pair of {a} and {b}"),
                    explanation: format!(
                        "{first} and {second} can only hold {a} or {b}, so those digits are \
                         spoken for and no other cell of {house} can hold them."
                    ),
                    affected_cells: eliminated,
                });
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use ninefold_core::Digit;

    use super::*;
    use crate::testing::TechniqueTester;

    #[test]
    fn test_pair_clears_rest_of_row() {
        // Row 0 holds 4-9 in its last six cells; column clues cut (0, 0) and
        // (1, 0) down to the pair {1, 2}, which strips those digits from the
        // third cell of the row.
        TechniqueTester::new(NakedPair)
            .board(
                "
                    ___ 456 789
                    ___ ___ ___
                    ___ ___ ___
                    3__ ___ ___
                    _3_ ___ ___
                    ___ ___ ___
                    ___ ___ ___
                    ___ ___ ___
                    ___ ___ ___
                ",
            )
            .expect_eliminations(&[(
                Position::new(2, 0),
                [Digit::D1, Digit::D2].into_iter().collect(),
            )]);
    }

    #[test]
    fn test_no_step_without_matching_pair() {
        TechniqueTester::new(NakedPair)
            .board(&"_".repeat(81))
            .expect_none();
    }
}
