//! A playable Sudoku session.

use ninefold_core::{CellSet, Digit, DigitGrid, DigitSet, Position};
use ninefold_generator::GeneratedPuzzle;
use ninefold_solver::{CellEffect, HintEngine, HintStep, NoteGrid};

use crate::{
    cell::CellState,
    error::GameError,
    history::{HistoryTree, NodeId},
};

/// Number of history nodes a game keeps before pruning old branches.
const HISTORY_CAPACITY: usize = 512;

type Board = [CellState; 81];

/// A Sudoku game session.
///
/// Tracks the board (givens, player digits, and notes), the conflicting
/// cells, and a branching move history. Every successful mutating operation
/// records exactly one history node, including all of its cascading effects,
/// so one undo reverts one player action.
///
/// # Examples
///
/// ```
/// use ninefold_game::Game;
/// use ninefold_generator::{Difficulty, PuzzleGenerator};
///
/// let puzzle = PuzzleGenerator::new().generate(Difficulty::Easy);
/// let game = Game::new(&puzzle);
/// assert!(!game.is_solved());
/// ```
#[derive(Debug, Clone)]
pub struct Game {
    cells: Board,
    solution: DigitGrid,
    conflicts: CellSet,
    history: HistoryTree<Board>,
}

impl Game {
    /// Starts a game from a generated puzzle.
    ///
    /// Clues become given cells and every empty cell starts with auto-filled
    /// notes, matching what the hint engine expects to see.
    #[must_use]
    pub fn new(puzzle: &GeneratedPuzzle) -> Self {
        let notes = NoteGrid::with_auto_notes(&puzzle.problem);
        let mut cells = [CellState::Empty; 81];
        for pos in Position::ALL {
            cells[pos.index() as usize] = match puzzle.problem.get(pos) {
                Some(digit) => CellState::Given(digit),
                None => CellState::Notes(notes.notes(pos)),
            };
        }
        Self {
            cells,
            solution: puzzle.solution.clone(),
            conflicts: CellSet::EMPTY,
            history: HistoryTree::new(cells, "Start", HISTORY_CAPACITY),
        }
    }

    /// Returns the state of the cell at `pos`.
    #[must_use]
    pub const fn cell(&self, pos: Position) -> CellState {
        self.cells[pos.index() as usize]
    }

    /// Returns the stored solution.
    #[must_use]
    pub const fn solution(&self) -> &DigitGrid {
        &self.solution
    }

    /// Returns the cells whose digit clashes with a peer's digit.
    ///
    /// Conflicts are symmetric: when two peers share a digit, both cells are
    /// in the set, givens included.
    #[must_use]
    pub const fn conflicts(&self) -> CellSet {
        self.conflicts
    }

    /// Returns `true` if the board is completely filled with a valid
    /// solution.
    ///
    /// Any valid completion counts, not only the generator's solution.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        let grid = self.to_digit_grid();
        grid.is_complete() && grid.is_valid()
    }

    /// Returns the given and filled digits as a digit grid.
    #[must_use]
    pub fn to_digit_grid(&self) -> DigitGrid {
        let mut grid = DigitGrid::new();
        for pos in Position::ALL {
            grid.set(pos, self.cell(pos).digit());
        }
        grid
    }

    /// Places a player digit at `pos`.
    ///
    /// The digit replaces any previous input in the cell, clears its notes,
    /// and erases the digit from every peer's notes. Placing the digit the
    /// cell already holds is a no-op and records no history.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::CannotModifyGivenCell`] if the cell is a given.
    pub fn place_digit(&mut self, pos: Position, digit: Digit) -> Result<(), GameError> {
        match self.cell(pos) {
            CellState::Given(_) => return Err(GameError::CannotModifyGivenCell),
            CellState::Filled(existing) if existing == digit => return Ok(()),
            CellState::Filled(_) | CellState::Notes(_) | CellState::Empty => {}
        }
        self.set_cell(pos, CellState::Filled(digit));
        for peer in pos.peers() {
            self.drop_note(*peer, digit);
        }
        self.finish_move(format!("Place {digit} at {pos}"));
        Ok(())
    }

    /// Toggles the note `digit` at `pos`.
    ///
    /// An empty cell becomes a notes cell; removing the last note makes the
    /// cell empty again.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::CannotModifyGivenCell`] if the cell is a given,
    /// or [`GameError::CannotAddNoteToFilledCell`] if it holds a player
    /// digit.
    pub fn toggle_note(&mut self, pos: Position, digit: Digit) -> Result<(), GameError> {
        let mut notes = match self.cell(pos) {
            CellState::Given(_) => return Err(GameError::CannotModifyGivenCell),
            CellState::Filled(_) => return Err(GameError::CannotAddNoteToFilledCell),
            CellState::Notes(notes) => notes,
            CellState::Empty => DigitSet::EMPTY,
        };
        if !notes.remove(digit) {
            notes.insert(digit);
        }
        let state = if notes.is_empty() {
            CellState::Empty
        } else {
            CellState::Notes(notes)
        };
        self.set_cell(pos, state);
        self.finish_move(format!("Toggle note {digit} at {pos}"));
        Ok(())
    }

    /// Clears the player input at `pos`, digit or notes.
    ///
    /// Clearing an already empty cell is a no-op and records no history.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::CannotModifyGivenCell`] if the cell is a given.
    pub fn clear_cell(&mut self, pos: Position) -> Result<(), GameError> {
        match self.cell(pos) {
            CellState::Given(_) => return Err(GameError::CannotModifyGivenCell),
            CellState::Empty => return Ok(()),
            CellState::Filled(_) | CellState::Notes(_) => {}
        }
        self.set_cell(pos, CellState::Empty);
        self.finish_move(format!("Clear {pos}"));
        Ok(())
    }

    /// Finds a hint for the current board.
    ///
    /// Returns `None` when the board is complete or its digits admit no
    /// solution.
    #[must_use]
    pub fn hint(&self) -> Option<HintStep> {
        HintEngine::new().hint(&self.to_note_grid())
    }

    /// Applies a hint step as a single move.
    ///
    /// Placements behave like [`place_digit`](Self::place_digit) including
    /// peer note cleanup; eliminations remove notes. The whole step is one
    /// history node.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::CannotModifyGivenCell`] if a placement targets a
    /// given cell; the game state is unchanged in that case.
    pub fn apply_hint(&mut self, step: &HintStep) -> Result<(), GameError> {
        if step
            .affected_cells
            .iter()
            .any(|cell| self.cell(cell.position).is_given())
        {
            return Err(GameError::CannotModifyGivenCell);
        }
        for cell in &step.affected_cells {
            match cell.effect {
                CellEffect::Place(digit) => {
                    self.set_cell(cell.position, CellState::Filled(digit));
                    for peer in cell.position.peers() {
                        self.drop_note(*peer, digit);
                    }
                }
                CellEffect::Eliminate(digits) => {
                    for digit in digits {
                        self.drop_note(cell.position, digit);
                    }
                }
            }
        }
        self.finish_move(format!("Hint: {}", step.description));
        Ok(())
    }

    /// Fills every non-given cell with the solution's digit as one move.
    pub fn solve_remaining(&mut self) {
        for pos in Position::ALL {
            if self.cell(pos).is_given() {
                continue;
            }
            if let Some(digit) = self.solution.get(pos) {
                self.set_cell(pos, CellState::Filled(digit));
            }
        }
        self.finish_move("Solve remaining");
    }

    /// Undoes the last move.
    ///
    /// Returns `false` at the start of the history. The undone move stays in
    /// the tree and can be revisited with [`restore_to`](Self::restore_to).
    pub fn undo(&mut self) -> bool {
        let Some(board) = self.history.undo() else {
            return false;
        };
        self.cells = *board;
        self.update_conflicts();
        true
    }

    /// Jumps to any recorded history node.
    ///
    /// Returns `false` if the node was pruned or never existed.
    pub fn restore_to(&mut self, id: NodeId) -> bool {
        let Some(board) = self.history.restore_to(id) else {
            return false;
        };
        self.cells = *board;
        self.update_conflicts();
        true
    }

    /// Returns the move history.
    #[must_use]
    pub const fn history(&self) -> &HistoryTree<Board> {
        &self.history
    }

    fn to_note_grid(&self) -> NoteGrid {
        let mut board = NoteGrid::new();
        for pos in Position::ALL {
            if let Some(digit) = self.cell(pos).digit() {
                board.set_value(pos, digit);
            }
        }
        // Notes go in afterwards; placing a value scrubs peer notes and must
        // not clobber what the player actually wrote.
        for pos in Position::ALL {
            if let CellState::Notes(notes) = self.cell(pos) {
                board.set_notes(pos, notes);
            }
        }
        board
    }

    const fn set_cell(&mut self, pos: Position, state: CellState) {
        self.cells[pos.index() as usize] = state;
    }

    fn drop_note(&mut self, pos: Position, digit: Digit) {
        if let CellState::Notes(mut notes) = self.cell(pos) {
            notes.remove(digit);
            let state = if notes.is_empty() {
                CellState::Empty
            } else {
                CellState::Notes(notes)
            };
            self.set_cell(pos, state);
        }
    }

    fn finish_move(&mut self, description: impl Into<String>) {
        self.update_conflicts();
        self.history.commit(self.cells, description);
    }

    fn update_conflicts(&mut self) {
        let mut conflicts = CellSet::EMPTY;
        for pos in Position::ALL {
            let Some(digit) = self.cell(pos).digit() else {
                continue;
            };
            if pos
                .peers()
                .iter()
                .any(|peer| self.cell(*peer).digit() == Some(digit))
            {
                conflicts.insert(pos);
            }
        }
        self.conflicts = conflicts;
    }
}

#[cfg(test)]
mod tests {
    use ninefold_generator::{Difficulty, PuzzleGenerator, PuzzleSeed};

    use super::*;

    fn test_puzzle() -> GeneratedPuzzle {
        PuzzleGenerator::new()
            .generate_with_seed(Difficulty::Easy, PuzzleSeed::from_phrase("game tests"))
    }

    fn empty_positions(game: &Game) -> Vec<Position> {
        Position::ALL
            .into_iter()
            .filter(|pos| !game.cell(*pos).is_given() && !game.cell(*pos).is_filled())
            .collect()
    }

    #[test]
    fn test_new_game_marks_givens_and_notes() {
        let puzzle = test_puzzle();
        let game = Game::new(&puzzle);
        for pos in Position::ALL {
            match puzzle.problem.get(pos) {
                Some(digit) => assert_eq!(game.cell(pos), CellState::Given(digit)),
                None => assert!(game.cell(pos).is_notes() || game.cell(pos).is_empty()),
            }
        }
        assert_eq!(game.conflicts(), CellSet::EMPTY);
    }

    #[test]
    fn test_place_digit_cleans_peer_notes() {
        let puzzle = test_puzzle();
        let mut game = Game::new(&puzzle);
        let pos = empty_positions(&game)[0];
        let digit = puzzle.solution.get(pos).unwrap();

        game.place_digit(pos, digit).unwrap();
        assert_eq!(game.cell(pos), CellState::Filled(digit));
        for peer in pos.peers() {
            assert!(!game.cell(*peer).notes().contains(digit));
        }
    }

    #[test]
    fn test_cannot_modify_given_cell() {
        let puzzle = test_puzzle();
        let mut game = Game::new(&puzzle);
        let given = Position::ALL
            .into_iter()
            .find(|pos| game.cell(*pos).is_given())
            .unwrap();

        assert_eq!(
            game.place_digit(given, Digit::D1),
            Err(GameError::CannotModifyGivenCell)
        );
        assert_eq!(
            game.toggle_note(given, Digit::D1),
            Err(GameError::CannotModifyGivenCell)
        );
        assert_eq!(game.clear_cell(given), Err(GameError::CannotModifyGivenCell));
    }

    #[test]
    fn test_note_on_filled_cell_is_rejected() {
        let puzzle = test_puzzle();
        let mut game = Game::new(&puzzle);
        let pos = empty_positions(&game)[0];
        game.place_digit(pos, puzzle.solution.get(pos).unwrap()).unwrap();
        assert_eq!(
            game.toggle_note(pos, Digit::D1),
            Err(GameError::CannotAddNoteToFilledCell)
        );
    }

    #[test]
    fn test_equal_digits_in_row_conflict_only_each_other() {
        // An open board: every cell is playable.
        let puzzle = GeneratedPuzzle {
            problem: DigitGrid::new(),
            solution:
                "534678912672195348198342567859761423426853791713924856961537284287419635345286179"
                    .parse()
                    .unwrap(),
            difficulty: Difficulty::Easy,
            score: 0,
            strategies: Vec::new(),
            seed: PuzzleSeed::from_phrase("manual board"),
        };
        let mut game = Game::new(&puzzle);

        game.place_digit(Position::new(0, 0), Digit::D5).unwrap();
        game.place_digit(Position::new(5, 0), Digit::D5).unwrap();

        let conflicts = game.conflicts();
        assert_eq!(conflicts.len(), 2);
        assert!(conflicts.contains(Position::new(0, 0)));
        assert!(conflicts.contains(Position::new(5, 0)));
    }

    #[test]
    fn test_conflicts_are_symmetric() {
        let puzzle = test_puzzle();
        let mut game = Game::new(&puzzle);
        let empties = empty_positions(&game);
        let first = empties[0];
        let peer = first
            .peers()
            .iter()
            .copied()
            .find(|peer| empties.contains(peer))
            .unwrap();

        // Force the same wrong digit into two peer cells.
        let digit = Digit::ALL
            .into_iter()
            .find(|d| {
                first
                    .peers()
                    .iter()
                    .all(|p| *p == peer || game.cell(*p).digit() != Some(*d))
            })
            .unwrap();
        game.place_digit(first, digit).unwrap();
        game.place_digit(peer, digit).unwrap();

        assert!(game.conflicts().contains(first));
        assert!(game.conflicts().contains(peer));

        game.clear_cell(peer).unwrap();
        assert!(!game.conflicts().contains(first));
        assert!(!game.conflicts().contains(peer));
    }

    #[test]
    fn test_solve_remaining_solves_the_game() {
        let puzzle = test_puzzle();
        let mut game = Game::new(&puzzle);
        assert!(!game.is_solved());
        game.solve_remaining();
        assert!(game.is_solved());
        assert_eq!(game.to_digit_grid(), puzzle.solution);
        // Solving again is idempotent.
        game.solve_remaining();
        assert!(game.is_solved());
    }

    #[test]
    fn test_hint_and_apply_progress_the_game() {
        let puzzle = test_puzzle();
        let mut game = Game::new(&puzzle);
        let step = game.hint().unwrap();
        game.apply_hint(&step).unwrap();
        // Applying hints repeatedly reaches a solved board.
        let mut guard = 0;
        while let Some(step) = game.hint() {
            game.apply_hint(&step).unwrap();
            guard += 1;
            assert!(guard <= 500, "hint loop did not terminate");
        }
        assert!(game.is_solved());
    }

    #[test]
    fn test_undo_reverts_one_whole_move() {
        let puzzle = test_puzzle();
        let mut game = Game::new(&puzzle);
        let before = game.clone();
        let pos = empty_positions(&game)[0];
        let digit = puzzle.solution.get(pos).unwrap();

        game.place_digit(pos, digit).unwrap();
        assert!(game.undo());
        // The placement and all of its note cleanup are gone.
        for check in Position::ALL {
            assert_eq!(game.cell(check), before.cell(check));
        }
        assert_eq!(game.conflicts(), before.conflicts());
    }

    #[test]
    fn test_undo_then_move_creates_branch() {
        let puzzle = test_puzzle();
        let mut game = Game::new(&puzzle);
        let empties = empty_positions(&game);
        let (a, b) = (empties[0], empties[1]);

        game.place_digit(a, puzzle.solution.get(a).unwrap()).unwrap();
        let abandoned = game.history().current_id();
        game.place_digit(b, puzzle.solution.get(b).unwrap()).unwrap();
        assert!(game.undo());
        assert!(game.undo());

        game.toggle_note(a, Digit::D1).unwrap();
        let root = game.history().root_id();
        assert_eq!(game.history().node(root).unwrap().children().len(), 2);

        // The abandoned line is still reachable.
        assert!(game.restore_to(abandoned));
        assert_eq!(game.cell(a), CellState::Filled(puzzle.solution.get(a).unwrap()));
    }

    #[test]
    fn test_undo_at_start_returns_false() {
        let puzzle = test_puzzle();
        let mut game = Game::new(&puzzle);
        assert!(!game.undo());
    }
}
