//! Puzzle construction: seed a solution, then carve clues away.

use log::{debug, info};
use ninefold_core::{Digit, DigitGrid, Position};
use ninefold_solver::{BacktrackSolver, HintEngine, NoteGrid};
use rand::{RngExt as _, seq::SliceRandom as _};
use rand_pcg::Pcg64Mcg;

use crate::{difficulty::Difficulty, seed::PuzzleSeed};

/// A generated puzzle and everything known about it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// The puzzle grid, with only the clues filled.
    pub problem: DigitGrid,
    /// The unique solution.
    pub solution: DigitGrid,
    /// The tier the puzzle was generated for.
    pub difficulty: Difficulty,
    /// Score derived from the carved-cell count and tier multiplier.
    pub score: u32,
    /// Techniques a hint-driven solve actually uses, with how often each
    /// fires, in first use order.
    pub strategies: Vec<(&'static str, usize)>,
    /// The seed that reproduces this puzzle.
    pub seed: PuzzleSeed,
}

impl GeneratedPuzzle {
    /// Returns the number of clues in the problem.
    #[must_use]
    pub fn clue_count(&self) -> usize {
        self.problem.filled_count()
    }
}

/// Generates uniquely solvable puzzles.
///
/// Generation is fully deterministic in the seed:
///
/// 1. The three diagonal boxes are filled with random digit permutations.
///    They share no row or column, so any filling is consistent.
/// 2. The backtracking solver completes the rest into a full solution.
/// 3. Cells are carved away in random order. A removal that leaves more
///    than one solution is rolled back; carving stops once the tier's
///    clue target is reached.
///
/// Every intermediate grid therefore keeps exactly one solution, and the
/// reported strategies come from replaying the hint engine on the finished
/// problem rather than from the tier label.
///
/// # Examples
///
/// ```no_run
/// use ninefold_generator::{Difficulty, PuzzleGenerator, PuzzleSeed};
///
/// let generator = PuzzleGenerator::new();
/// let seed = PuzzleSeed::from_phrase("docs");
/// let puzzle = generator.generate_with_seed(Difficulty::Easy, seed);
/// assert_eq!(generator.generate_with_seed(Difficulty::Easy, seed), puzzle);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PuzzleGenerator {
    solver: BacktrackSolver,
}

impl PuzzleGenerator {
    /// Creates a generator.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            solver: BacktrackSolver::new(),
        }
    }

    /// Generates a puzzle of the given tier from a fresh random seed.
    #[must_use]
    pub fn generate(&self, difficulty: Difficulty) -> GeneratedPuzzle {
        self.generate_with_seed(difficulty, PuzzleSeed::random())
    }

    /// Generates the puzzle determined by `seed`.
    ///
    /// # Panics
    ///
    /// Panics if the backtracking solver fails to complete a diagonally
    /// seeded grid, which cannot happen for a correct solver.
    #[must_use]
    pub fn generate_with_seed(&self, difficulty: Difficulty, seed: PuzzleSeed) -> GeneratedPuzzle {
        let mut rng = seed.rng();

        let solution = self.random_solution(&mut rng);
        let target = rng.random_range(difficulty.clue_range());
        let problem = self.carve(&solution, target, &mut rng);

        let clue_count = problem.filled_count();
        let strategies = strategies_for(&problem);
        let score = difficulty.score(clue_count);
        info!(
            "generated {difficulty} puzzle: {clue_count} clues (target {target}), score {score}"
        );

        GeneratedPuzzle {
            problem,
            solution,
            difficulty,
            score,
            strategies,
            seed,
        }
    }

    /// Fills the three diagonal boxes randomly and solves the rest.
    fn random_solution(&self, rng: &mut Pcg64Mcg) -> DigitGrid {
        let mut grid = DigitGrid::new();
        for box_index in [0, 4, 8] {
            let mut digits = Digit::ALL;
            digits.shuffle(rng);
            for (cell, digit) in Position::BOXES[box_index].into_iter().zip(digits) {
                grid.set(cell, Some(digit));
            }
        }
        match self.solver.solve(&grid) {
            Some(solution) => solution,
            None => unreachable!("diagonally seeded grids are always solvable"),
        }
    }

    /// Removes cells in random order while the puzzle stays unique.
    fn carve(&self, solution: &DigitGrid, target: u8, rng: &mut Pcg64Mcg) -> DigitGrid {
        let mut problem = solution.clone();
        let mut order = Position::ALL;
        order.shuffle(rng);

        for pos in order {
            if problem.filled_count() <= usize::from(target) {
                break;
            }
            let digit = problem.get(pos);
            problem.set(pos, None);
            if self.solver.count_solutions(&problem, 2) == 1 {
                debug!("carved {pos}, {} clues left", problem.filled_count());
            } else {
                problem.set(pos, digit);
                debug!("kept {pos}, removal breaks uniqueness");
            }
        }
        problem
    }
}

/// Replays a hint-driven solve and counts how often each technique fires.
fn strategies_for(problem: &DigitGrid) -> Vec<(&'static str, usize)> {
    let engine = HintEngine::new();
    let mut board = NoteGrid::with_auto_notes(problem);
    let mut used: Vec<(&'static str, usize)> = Vec::new();
    while let Some(step) = engine.hint(&board) {
        match used.iter_mut().find(|(name, _)| *name == step.technique) {
            Some((_, count)) => *count += 1,
            None => used.push((step.technique, 1)),
        }
        step.apply(&mut board);
    }
    used
}

#[cfg(test)]
mod tests {
    use ninefold_solver::BacktrackSolver;

    use super::*;

    fn seeded(difficulty: Difficulty, phrase: &str) -> GeneratedPuzzle {
        PuzzleGenerator::new().generate_with_seed(difficulty, PuzzleSeed::from_phrase(phrase))
    }

    #[test]
    fn test_same_seed_same_puzzle() {
        let a = seeded(Difficulty::Medium, "reproducible");
        let b = seeded(Difficulty::Medium, "reproducible");
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = seeded(Difficulty::Medium, "first");
        let b = seeded(Difficulty::Medium, "second");
        assert_ne!(a.problem, b.problem);
    }

    #[test]
    fn test_solution_is_complete_and_valid() {
        let puzzle = seeded(Difficulty::Easy, "solution check");
        assert!(puzzle.solution.is_complete());
        assert!(puzzle.solution.is_valid());
    }

    #[test]
    fn test_problem_is_subset_of_solution() {
        let puzzle = seeded(Difficulty::Hard, "subset check");
        for pos in Position::ALL {
            if let Some(digit) = puzzle.problem.get(pos) {
                assert_eq!(puzzle.solution.get(pos), Some(digit));
            }
        }
    }

    #[test]
    fn test_problem_has_unique_solution() {
        let puzzle = seeded(Difficulty::Expert, "uniqueness check");
        let solver = BacktrackSolver::new();
        assert_eq!(solver.count_solutions(&puzzle.problem, 2), 1);
        assert_eq!(solver.solve(&puzzle.problem), Some(puzzle.solution));
    }

    #[test]
    fn test_easy_clue_count_in_range() {
        let puzzle = seeded(Difficulty::Easy, "clue range check");
        assert!(Difficulty::Easy.clue_range().contains(&clue_count_u8(&puzzle)));
    }

    #[test]
    fn test_score_matches_clue_count() {
        let puzzle = seeded(Difficulty::Medium, "score check");
        assert_eq!(puzzle.score, Difficulty::Medium.score(puzzle.clue_count()));
    }

    #[test]
    fn test_strategies_are_observed_not_assumed() {
        let puzzle = seeded(Difficulty::Easy, "strategy check");
        assert!(!puzzle.strategies.is_empty());
        // Replaying the hint engine yields the recorded counts.
        let mut board = NoteGrid::with_auto_notes(&puzzle.problem);
        let engine = HintEngine::new();
        let mut replayed: Vec<(&'static str, usize)> = Vec::new();
        while let Some(step) = engine.hint(&board) {
            match replayed.iter_mut().find(|(name, _)| *name == step.technique) {
                Some((_, count)) => *count += 1,
                None => replayed.push((step.technique, 1)),
            }
            step.apply(&mut board);
        }
        assert_eq!(puzzle.strategies, replayed);
        assert!(board.is_complete());
        // Every step of the replay is accounted for.
        let total: usize = puzzle.strategies.iter().map(|(_, count)| count).sum();
        assert!(total >= 81 - puzzle.clue_count());
    }

    fn clue_count_u8(puzzle: &GeneratedPuzzle) -> u8 {
        u8::try_from(puzzle.clue_count()).unwrap()
    }
}
