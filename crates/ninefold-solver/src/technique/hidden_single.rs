//! Hidden single: a digit with one remaining place in a house.

use ninefold_core::{Digit, House, Position};
use tinyvec::ArrayVec;

use crate::{
    hint::{AffectedCell, CellEffect, HintStep},
    note_grid::NoteGrid,
    technique::{BoxedTechnique, Technique},
};

/// Finds a house where some digit is noted in exactly one cell.
///
/// Houses are scanned in [`House::ALL`] order, digits ascending within each
/// house.
#[derive(Debug, Clone, Copy, Default)]
pub struct HiddenSingle;

impl Technique for HiddenSingle {
    fn name(&self) -> &'static str {
        "Hidden Single"
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

impl HiddenSingle {
    fn find_in_house(&self, board: &NoteGrid, house: House) -> Option<HintStep> {
        for digit in Digit::ALL {
            if house
                .positions()
                .iter()
                .any(|pos| board.value(*pos) == Some(digit))
            {
                continue;
            }
            let mut places: ArrayVec<[Position; 9]> = ArrayVec::new();
            for &pos in house.positions() {
                if board.value(pos).is_none() && board.notes(pos).contains(digit) {
                    places.push(pos);
                }
            }
            if let [only] = places.as_slice() {
                return Some(HintStep {
                    technique: self.name(),
                    description: format!("{only} must be {digit}"),
                    explanation: format!(
                        "Within {house}, {only} is the only cell where {digit} can go."
                    ),
                    affected_cells: vec![AffectedCell {
                        position: *only,
                        effect: CellEffect::Place(digit),
                    }],
                });
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::TechniqueTester;

    #[test]
    fn test_finds_single_place_in_row() {
        // The 1s below exclude the digit from every cell of row 0 except
        // (8, 0), so the row pins it there.
        TechniqueTester::new(HiddenSingle)
            .board(
                "
                    ___ ___ ___
                    1__ ___ ___
                    ___ 1__ ___
                    ___ ___ 1__
                    _1_ ___ ___
                    ___ _1_ ___
                    ___ ___ _1_
                    __1 ___ ___
                    ___ __1 ___
                ",
            )
            .expect_place(Position::new(8, 0), Digit::D1);
    }

    #[test]
    fn test_skips_digit_already_in_house() {
        // The 5 in row 0 is placed; nothing else pins a digit.
        TechniqueTester::new(HiddenSingle)
            .board(&format!("5{}", "_".repeat(80)))
            .expect_none();
    }

    #[test]
    fn test_no_step_on_open_board() {
        TechniqueTester::new(HiddenSingle)
            .board(&"_".repeat(81))
            .expect_none();
    }
}
