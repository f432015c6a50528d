//! Hint steps and the engine that produces them.

use ninefold_core::{Digit, DigitSet, Position};

use crate::{
    backtrack::BacktrackSolver,
    note_grid::NoteGrid,
    technique::{self, BoxedTechnique},
};

/// What a hint does to one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellEffect {
    /// Place this digit as the cell's value.
    Place(Digit),
    /// Remove these digits from the cell's notes.
    Eliminate(DigitSet),
}

/// One cell touched by a hint, with its effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AffectedCell {
    /// The cell.
    pub position: Position,
    /// What happens to it.
    pub effect: CellEffect,
}

/// A single explainable deduction.
///
/// Steps are produced by [`Technique`](crate::Technique) detectors or the
/// hint engine's fallback, and applied to a [`NoteGrid`] with
/// [`apply`](Self::apply).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HintStep {
    /// Name of the technique that found this step.
    pub technique: &'static str,
    /// Short statement of the action, e.g. `"R1C2 must be 5"`.
    pub description: String,
    /// Why the action is justified.
    pub explanation: String,
    /// The cells the step changes. Never empty.
    pub affected_cells: Vec<AffectedCell>,
}

impl HintStep {
    /// Applies every effect of this step to `board`.
    pub fn apply(&self, board: &mut NoteGrid) {
        for cell in &self.affected_cells {
            match cell.effect {
                CellEffect::Place(digit) => board.set_value(cell.position, digit),
                CellEffect::Eliminate(digits) => {
                    for digit in digits {
                        board.remove_note(cell.position, digit);
                    }
                }
            }
        }
    }
}

/// Runs techniques in difficulty order and falls back to revealing a cell.
///
/// # Examples
///
/// ```
/// use ninefold_core::DigitGrid;
/// use ninefold_solver::{HintEngine, NoteGrid};
///
/// let puzzle: DigitGrid = "
///     53_ _7_ ___
///     6__ 195 ___
///     _98 ___ _6_
///     8__ _6_ __3
///     4__ 8_3 __1
///     7__ _2_ __6
///     _6_ ___ 28_
///     ___ 419 __5
///     ___ _8_ _79
/// "
/// .parse()?;
/// let board = NoteGrid::with_auto_notes(&puzzle);
/// let step = HintEngine::new().hint(&board).unwrap();
/// assert!(!step.affected_cells.is_empty());
/// # Ok::<(), ninefold_core::ParseDigitGridError>(())
/// ```
#[derive(Clone)]
pub struct HintEngine {
    techniques: Vec<BoxedTechnique>,
}

impl HintEngine {
    /// Technique name reported by the fallback step.
    pub const REVEALED_CELL: &'static str = "Revealed Cell";

    /// Creates an engine with every built-in technique, easiest first.
    #[must_use]
    pub fn new() -> Self {
        Self {
            techniques: technique::all_techniques(),
        }
    }

    /// Creates an engine with a custom technique ladder.
    #[must_use]
    pub fn with_techniques(techniques: Vec<BoxedTechnique>) -> Self {
        Self { techniques }
    }

    /// Finds the simplest technique step on `board`, without the fallback.
    #[must_use]
    pub fn find_technique(&self, board: &NoteGrid) -> Option<HintStep> {
        self.techniques
            .iter()
            .find_map(|technique| technique.find_step(board))
    }

    /// Produces a hint for `board`.
    ///
    /// Tries the technique ladder first; when no technique applies, reveals
    /// the first empty cell's solved value instead, so the player is never
    /// stuck. Returns `None` only when the board is complete or its values
    /// admit no solution.
    #[must_use]
    pub fn hint(&self, board: &NoteGrid) -> Option<HintStep> {
        if board.is_complete() {
            return None;
        }
        if let Some(step) = self.find_technique(board) {
            return Some(step);
        }
        Self::reveal_cell(board)
    }

    /// The fallback: solve the board's values and reveal one cell.
    fn reveal_cell(board: &NoteGrid) -> Option<HintStep> {
        let solution = BacktrackSolver::new().solve(&board.to_digit_grid())?;
        let position = Position::ALL.into_iter().find(|pos| board.value(*pos).is_none())?;
        let digit = solution.get(position)?;
        Some(HintStep {
            technique: Self::REVEALED_CELL,
            description: format!("{position} is {digit}"),
            explanation: format!(
                "No simpler technique applies, so the solver reveals that {position} \
                 holds {digit} in the solution."
            ),
            affected_cells: vec![AffectedCell {
                position,
                effect: CellEffect::Place(digit),
            }],
        })
    }
}

impl Default for HintEngine {
    fn default() -> Self {
        Self::new()
    }
}
