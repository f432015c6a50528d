//! Difficulty tiers.

use std::ops::RangeInclusive;

use derive_more::Display;

/// A difficulty tier, defined by how many clues the puzzle keeps.
///
/// Tiers control the carving target during generation and weight the final
/// score. Fewer clues make a harder puzzle; `Master` goes as low as 17, the
/// minimum for a uniquely solvable Sudoku.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
pub enum Difficulty {
    /// 36 to 42 clues.
    Easy,
    /// 30 to 36 clues.
    Medium,
    /// 26 to 30 clues.
    Hard,
    /// 22 to 26 clues.
    Expert,
    /// 17 to 22 clues.
    Master,
}

impl Difficulty {
    /// All tiers, easiest first.
    pub const ALL: [Self; 5] = [
        Self::Easy,
        Self::Medium,
        Self::Hard,
        Self::Expert,
        Self::Master,
    ];

    /// Returns the clue-count range targeted when carving this tier.
    #[must_use]
    pub const fn clue_range(self) -> RangeInclusive<u8> {
        match self {
            Self::Easy => 36..=42,
            Self::Medium => 30..=36,
            Self::Hard => 26..=30,
            Self::Expert => 22..=26,
            Self::Master => 17..=22,
        }
    }

    /// Returns the score multiplier for this tier.
    #[must_use]
    pub const fn score_multiplier(self) -> u32 {
        match self {
            Self::Easy => 1,
            Self::Medium => 2,
            Self::Hard => 4,
            Self::Expert => 8,
            Self::Master => 16,
        }
    }

    /// Computes the score of a puzzle with `clue_count` clues at this tier.
    ///
    /// The score grows with the number of carved cells, weighted by the
    /// tier multiplier.
    #[must_use]
    pub fn score(self, clue_count: usize) -> u32 {
        #[expect(clippy::cast_possible_truncation)]
        let carved = 81u32.saturating_sub(clue_count as u32);
        carved * 10 * self.score_multiplier()
    }
}
