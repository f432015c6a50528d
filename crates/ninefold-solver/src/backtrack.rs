//! Depth-first search over propagation snapshots.

use ninefold_core::DigitGrid;

use crate::propagation::ConstraintGrid;

/// A backtracking Sudoku solver.
///
/// Propagation does most of the work; when the grid stops being forced the
/// solver picks the unassigned cell with the fewest candidates (ties broken
/// row-major) and tries its digits in ascending order, each on a clone of the
/// current state. Contradictions discard the clone and move on.
///
/// # Examples
///
/// ```
/// use ninefold_core::DigitGrid;
/// use ninefold_solver::BacktrackSolver;
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
/// let solution = BacktrackSolver::new().solve(&puzzle).unwrap();
/// assert!(solution.is_complete() && solution.is_valid());
/// assert_eq!(BacktrackSolver::new().count_solutions(&puzzle, 2), 1);
/// # Ok::<(), ninefold_core::ParseDigitGridError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct BacktrackSolver {
    _private: (),
}

impl BacktrackSolver {
    /// Creates a solver.
    #[must_use]
    pub const fn new() -> Self {
        Self { _private: () }
    }

    /// Finds a solution of `grid`, or `None` if it has none.
    ///
    /// When several solutions exist, the search order makes the result
    /// deterministic: the same input always yields the same solution.
    #[must_use]
    #[expect(clippy::unused_self)]
    pub fn solve(&self, grid: &DigitGrid) -> Option<DigitGrid> {
        let state = ConstraintGrid::from_digit_grid(grid).ok()?;
        Self::search_first(state).map(|solved| solved.to_digit_grid())
    }

    /// Counts the solutions of `grid`, stopping at `limit`.
    ///
    /// `count_solutions(grid, 2)` distinguishes the three cases that matter
    /// for puzzle generation: no solution, a unique solution, or more than
    /// one, without ever enumerating the full solution space.
    #[must_use]
    #[expect(clippy::unused_self)]
    pub fn count_solutions(&self, grid: &DigitGrid, limit: usize) -> usize {
        if limit == 0 {
            return 0;
        }
        let Ok(state) = ConstraintGrid::from_digit_grid(grid) else {
            return 0;
        };
        Self::search_count(state, limit)
    }

    fn search_first(state: ConstraintGrid) -> Option<ConstraintGrid> {
        let Some(pos) = state.fewest_candidates_cell() else {
            return Some(state);
        };
        for digit in state.candidates(pos) {
            let mut trial = state.clone();
            if trial.assign(pos, digit).is_ok() {
                if let Some(solved) = Self::search_first(trial) {
                    return Some(solved);
                }
            }
        }
        None
    }

    fn search_count(state: ConstraintGrid, limit: usize) -> usize {
        let Some(pos) = state.fewest_candidates_cell() else {
            return 1;
        };
        let mut found = 0;
        for digit in state.candidates(pos) {
            let mut trial = state.clone();
            if trial.assign(pos, digit).is_ok() {
                found += Self::search_count(trial, limit - found);
                if found >= limit {
                    return limit;
                }
            }
        }
        found
    }
}

#[cfg(test)]
mod tests {
    use ninefold_core::{Digit, Position};

    use super::*;

    const PUZZLE: &str = "
        53_ _7_ ___
        6__ 195 ___
        _98 ___ _6_
        8__ _6_ __3
        4__ 8_3 __1
        7__ _2_ __6
        _6_ ___ 28_
        ___ 419 __5
        ___ _8_ _79
    ";
    const SOLUTION: &str =
        "534678912672195348198342567859761423426853791713924856961537284287419635345286179";

    #[test]
    fn test_solve_classic_puzzle() {
        let puzzle: DigitGrid = PUZZLE.parse().unwrap();
        let solution = BacktrackSolver::new().solve(&puzzle).unwrap();
        assert_eq!(solution.to_string(), SOLUTION);
    }

    #[test]
    fn test_solve_preserves_clues() {
        let puzzle: DigitGrid = PUZZLE.parse().unwrap();
        let solution = BacktrackSolver::new().solve(&puzzle).unwrap();
        for pos in Position::ALL {
            if let Some(clue) = puzzle.get(pos) {
                assert_eq!(solution.get(pos), Some(clue));
            }
        }
    }

    #[test]
    fn test_solve_empty_grid() {
        let solution = BacktrackSolver::new().solve(&DigitGrid::new()).unwrap();
        assert!(solution.is_complete());
        assert!(solution.is_valid());
    }

    #[test]
    fn test_solve_is_deterministic() {
        let solver = BacktrackSolver::new();
        let first = solver.solve(&DigitGrid::new()).unwrap();
        let second = solver.solve(&DigitGrid::new()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_unsolvable_grid() {
        let mut grid = DigitGrid::new();
        // Two identical digits in one row.
        grid.set(Position::new(0, 0), Some(Digit::D1));
        grid.set(Position::new(8, 0), Some(Digit::D1));
        assert_eq!(BacktrackSolver::new().solve(&grid), None);
        assert_eq!(BacktrackSolver::new().count_solutions(&grid, 2), 0);
    }

    #[test]
    fn test_count_solutions_unique() {
        let puzzle: DigitGrid = PUZZLE.parse().unwrap();
        assert_eq!(BacktrackSolver::new().count_solutions(&puzzle, 2), 1);
    }

    #[test]
    fn test_count_solutions_caps_at_limit() {
        let empty = DigitGrid::new();
        assert_eq!(BacktrackSolver::new().count_solutions(&empty, 2), 2);
        assert_eq!(BacktrackSolver::new().count_solutions(&empty, 5), 5);
        assert_eq!(BacktrackSolver::new().count_solutions(&empty, 0), 0);
    }

    #[test]
    fn test_count_solutions_detects_ambiguity() {
        // Clearing the four corners of a digit-swap rectangle (cells holding
        // `a b` over `b a`) leaves at least two completions.
        let solved: DigitGrid = SOLUTION.parse().unwrap();
        let mut cleared = None;
        'outer: for y1 in 0..9 {
            for y2 in (y1 + 1)..9 {
                for x1 in 0..9 {
                    for x2 in (x1 + 1)..9 {
                        if x1 / 3 != x2 / 3 {
                            // Columns must share a box stack so the swap
                            // leaves every box's content unchanged.
                            continue;
                        }
                        let corners = [
                            Position::new(x1, y1),
                            Position::new(x2, y1),
                            Position::new(x1, y2),
                            Position::new(x2, y2),
                        ];
                        let [a, b, c, d] = corners.map(|pos| solved.get(pos));
                        if a == d && b == c && a != b {
                            let mut grid = solved.clone();
                            for pos in corners {
                                grid.set(pos, None);
                            }
                            cleared = Some(grid);
                            break 'outer;
                        }
                    }
                }
            }
        }
        let grid = cleared.expect("a solved grid always has a swap rectangle");
        assert_eq!(BacktrackSolver::new().count_solutions(&grid, 2), 2);
    }
}
