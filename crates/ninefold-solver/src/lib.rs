//! Solving engine for the ninefold Sudoku crates.
//!
//! Three layers build on each other:
//!
//! 1. [`ConstraintGrid`]: the candidate/propagation engine. Assignments and
//!    eliminations cascade through a worklist until the grid is stable or a
//!    [`Contradiction`] is found.
//! 2. [`BacktrackSolver`]: depth-first search over [`ConstraintGrid`]
//!    snapshots with a minimum-remaining-values heuristic; solves a grid or
//!    counts its solutions up to a cutoff (for uniqueness testing).
//! 3. The technique layer: [`NoteGrid`] models a player's board (values plus
//!    per-cell candidate notes), [`technique`] holds human-style deduction
//!    detectors, and [`HintEngine`] runs them in difficulty order to produce
//!    an explainable [`HintStep`].
//!
//! # Examples
//!
//! ```
//! use ninefold_core::DigitGrid;
//! use ninefold_solver::BacktrackSolver;
//!
//! // An empty grid has many solutions; the solver finds one of them.
//! let empty = DigitGrid::new();
//! let solution = BacktrackSolver::new().solve(&empty).unwrap();
//! assert!(solution.is_complete() && solution.is_valid());
//! assert_eq!(BacktrackSolver::new().count_solutions(&empty, 2), 2);
//! ```

pub use self::{
    backtrack::BacktrackSolver,
    hint::{AffectedCell, CellEffect, HintEngine, HintStep},
    note_grid::NoteGrid,
    propagation::{ConstraintGrid, Contradiction},
    technique::{BoxedTechnique, Technique},
};

pub mod backtrack;
pub mod hint;
pub mod note_grid;
pub mod propagation;
pub mod technique;
pub mod testing;
