//! Game session state for the ninefold Sudoku crates.
//!
//! [`Game`] wraps a generated puzzle into a playable session: player input
//! with given-cell protection, pencil-mark notes with automatic cleanup,
//! symmetric conflict tracking, hints, and a branching bounded
//! [`HistoryTree`] where every move is one undoable node.

pub use self::{
    cell::CellState,
    error::GameError,
    game::Game,
    history::{HistoryNode, HistoryTree, NodeId},
};

pub mod cell;
pub mod error;
pub mod game;
pub mod history;
