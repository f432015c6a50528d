//! Constraint propagation over candidate masks.

use std::collections::VecDeque;

use derive_more::{Display, Error};
use ninefold_core::{Digit, DigitGrid, DigitSet, Position};
use tinyvec::ArrayVec;

/// The grid has a cell or house with no remaining legal candidate.
///
/// Contradictions are an expected outcome of speculative work (backtracking
/// trials, tentative clue removal) and are always recovered locally; they
/// never carry state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("contradiction: a cell or house has no remaining candidate")]
pub struct Contradiction;

/// Propagation state: 81 values and 81 candidate masks.
///
/// All mutation goes
/// through [`assign`](Self::assign) and [`eliminate`](Self::eliminate),
/// which drain an explicit worklist of pending `(cell, digit)` eliminations:
///
/// - removing the last candidate of a cell is a contradiction;
/// - a mask collapsing to one candidate assigns that value, which eliminates
///   it from all 20 peers;
/// - after any elimination, each house containing the cell is re-checked for
///   the eliminated digit: zero remaining places is a contradiction, exactly
///   one remaining place cascades a hidden-single assignment.
///
/// Every drained entry clears at least one candidate bit, so propagation
/// terminates. Backtracking callers checkpoint by cloning the whole grid.
///
/// # Examples
///
/// ```
/// use ninefold_core::{Digit, Position};
/// use ninefold_solver::ConstraintGrid;
///
/// let mut grid = ConstraintGrid::new();
/// grid.assign(Position::new(0, 0), Digit::D5)?;
/// assert_eq!(grid.value(Position::new(0, 0)), Some(Digit::D5));
/// // Peers lose the candidate.
/// assert!(!grid.candidates(Position::new(8, 0)).contains(Digit::D5));
/// # Ok::<(), ninefold_solver::Contradiction>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintGrid {
    values: [Option<Digit>; 81],
    masks: [DigitSet; 81],
    unassigned: usize,
}

type Worklist = VecDeque<(Position, Digit)>;

impl ConstraintGrid {
    /// Creates a grid with no values and all candidates open.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            values: [None; 81],
            masks: [DigitSet::FULL; 81],
            unassigned: 81,
        }
    }

    /// Builds a grid by assigning every clue of a digit grid.
    ///
    /// # Errors
    ///
    /// Returns [`Contradiction`] if the clues are mutually inconsistent or
    /// propagation empties a cell or house.
    pub fn from_digit_grid(grid: &DigitGrid) -> Result<Self, Contradiction> {
        let mut this = Self::new();
        for pos in Position::ALL {
            if let Some(digit) = grid.get(pos) {
                this.assign(pos, digit)?;
            }
        }
        Ok(this)
    }

    /// Returns the assigned value at `pos`, if any.
    #[must_use]
    pub const fn value(&self, pos: Position) -> Option<Digit> {
        self.values[pos.index() as usize]
    }

    /// Returns the candidate mask at `pos`.
    ///
    /// Assigned cells keep a single-bit mask containing their value.
    #[must_use]
    pub const fn candidates(&self, pos: Position) -> DigitSet {
        self.masks[pos.index() as usize]
    }

    /// Returns `true` if every cell has an assigned value.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.unassigned == 0
    }

    /// Returns the unassigned cell with the fewest remaining candidates,
    /// ties broken by first occurrence in row-major order.
    ///
    /// Returns `None` when the grid is complete.
    #[must_use]
    pub fn fewest_candidates_cell(&self) -> Option<Position> {
        let mut best: Option<(usize, Position)> = None;
        for pos in Position::ALL {
            if self.value(pos).is_some() {
                continue;
            }
            let len = self.candidates(pos).len();
            if best.is_none_or(|(best_len, _)| len < best_len) {
                if len == 2 {
                    // No unassigned cell can do better than two candidates.
                    return Some(pos);
                }
                best = Some((len, pos));
            }
        }
        best.map(|(_, pos)| pos)
    }

    /// Returns the assigned values as a digit grid.
    #[must_use]
    pub fn to_digit_grid(&self) -> DigitGrid {
        let mut grid = DigitGrid::new();
        for pos in Position::ALL {
            grid.set(pos, self.value(pos));
        }
        grid
    }

    /// Forces `pos` to `digit` and propagates to a fixed point.
    ///
    /// # Errors
    ///
    /// Returns [`Contradiction`] if `digit` is not a candidate at `pos` or
    /// the cascade empties a cell or house. The grid state is unspecified
    /// after a contradiction; callers restore from a checkpoint.
    pub fn assign(&mut self, pos: Position, digit: Digit) -> Result<(), Contradiction> {
        let mut worklist = Worklist::new();
        self.push_assignment(pos, digit, &mut worklist)?;
        self.drain(&mut worklist)
    }

    /// Removes `digit` as a candidate at `pos` and propagates to a fixed
    /// point.
    ///
    /// # Errors
    ///
    /// Returns [`Contradiction`] under the same conditions as
    /// [`assign`](Self::assign).
    pub fn eliminate(&mut self, pos: Position, digit: Digit) -> Result<(), Contradiction> {
        let mut worklist = Worklist::from([(pos, digit)]);
        self.drain(&mut worklist)
    }

    /// Queues the eliminations implied by assigning `digit` at `pos` and
    /// records the value.
    fn push_assignment(
        &mut self,
        pos: Position,
        digit: Digit,
        worklist: &mut Worklist,
    ) -> Result<(), Contradiction> {
        let mask = self.candidates(pos);
        if !mask.contains(digit) {
            return Err(Contradiction);
        }
        for other in mask.difference(DigitSet::from_elem(digit)) {
            worklist.push_back((pos, other));
        }
        self.record_value(pos, digit, worklist)
    }

    /// Records an assigned value and queues its peer eliminations.
    fn record_value(
        &mut self,
        pos: Position,
        digit: Digit,
        worklist: &mut Worklist,
    ) -> Result<(), Contradiction> {
        match self.value(pos) {
            Some(existing) if existing == digit => Ok(()),
            Some(_) => Err(Contradiction),
            None => {
                self.values[pos.index() as usize] = Some(digit);
                self.unassigned -= 1;
                for peer in pos.peers() {
                    worklist.push_back((*peer, digit));
                }
                Ok(())
            }
        }
    }

    /// Drains pending eliminations until the grid is stable.
    fn drain(&mut self, worklist: &mut Worklist) -> Result<(), Contradiction> {
        while let Some((pos, digit)) = worklist.pop_front() {
            let cell = pos.index() as usize;
            if !self.masks[cell].contains(digit) {
                continue;
            }
            if self.values[cell] == Some(digit) {
                // An already-placed value lost its support.
                return Err(Contradiction);
            }
            self.masks[cell].remove(digit);
            let mask = self.masks[cell];
            if mask.is_empty() {
                return Err(Contradiction);
            }
            if let Some(forced) = mask.as_single() {
                self.record_value(pos, forced, worklist)?;
            }
            self.check_houses(pos, digit, worklist)?;
        }
        Ok(())
    }

    /// Re-checks the houses of `pos` for the just-eliminated `digit`.
    fn check_houses(
        &mut self,
        pos: Position,
        digit: Digit,
        worklist: &mut Worklist,
    ) -> Result<(), Contradiction> {
        for house in pos.houses() {
            let mut places: ArrayVec<[Position; 9]> = ArrayVec::new();
            for &other in house.positions() {
                if self.candidates(other).contains(digit) {
                    places.push(other);
                }
            }
            match places.as_slice() {
                [] => return Err(Contradiction),
                [only] if self.value(*only).is_none() => {
                    // Hidden single: the digit has one place left in this house.
                    self.push_assignment(*only, digit, worklist)?;
                }
                _ => {}
            }
        }
        Ok(())
    }
}

impl Default for ConstraintGrid {
    fn default() -> Self {
        Self::new()
    }
}
