//! Human-style deduction techniques.
//!
//! Each technique scans a [`NoteGrid`] for the first instance of its
//! pattern. Detectors are pure pattern matchers over the visible notes: they
//! never solve ahead, so a hint only ever tells the player something the
//! board already shows.
//!
//! Scan order is fixed everywhere so that a given board always yields the
//! same step: cells in row-major order, houses in [`House::ALL`] order
//! (rows, then columns, then boxes), digits ascending.
//!
//! [`House::ALL`]: ninefold_core::House::ALL

use crate::{hint::HintStep, note_grid::NoteGrid};

pub use self::{
    hidden_single::HiddenSingle, locked_candidates::LockedCandidates, naked_pair::NakedPair,
    naked_single::NakedSingle,
};

mod hidden_single;
mod locked_candidates;
mod naked_pair;
mod naked_single;

/// A deduction pattern that can be found on a board and explained.
pub trait Technique {
    /// The technique's display name, e.g. `"Naked Single"`.
    fn name(&self) -> &'static str;

    /// Finds the first instance of this technique on `board`.
    ///
    /// Returns `None` if the pattern does not occur. A returned step must
    /// change the board: place a value, or remove at least one present note.
    fn find_step(&self, board: &NoteGrid) -> Option<HintStep>;

    /// Clones this technique into a box.
    fn clone_box(&self) -> BoxedTechnique;
}

/// A boxed [`Technique`] trait object.
pub type BoxedTechnique = Box<dyn Technique + Send + Sync>;

impl Clone for BoxedTechnique {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// Returns every built-in technique, easiest first.
///
/// The order is the difficulty ladder the hint engine walks: a hint always
/// reports the simplest applicable technique.
#[must_use]
pub fn all_techniques() -> Vec<BoxedTechnique> {
    vec![
        Box::new(NakedSingle),
        Box::new(HiddenSingle),
        Box::new(LockedCandidates),
        Box::new(NakedPair),
    ]
}
