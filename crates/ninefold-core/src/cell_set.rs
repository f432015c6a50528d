//! An 81-bit set of board positions.

use std::{
    fmt::{self, Debug},
    iter::FusedIterator,
    ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign},
};

use crate::Position;

/// A set of board positions, backed by an 81-bit mask.
///
/// Used for conflict marks, hint condition cells, and other whole-board
/// position bookkeeping.
///
/// # Examples
///
/// ```
/// use ninefold_core::{CellSet, Position};
///
/// let mut set = CellSet::new();
/// set.insert(Position::new(0, 0));
/// set.insert(Position::new(4, 4));
/// assert_eq!(set.len(), 2);
/// assert!(set.contains(Position::new(4, 4)));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CellSet(u128);

impl CellSet {
    const MASK: u128 = (1 << 81) - 1;

    /// The empty set.
    pub const EMPTY: Self = Self(0);

    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Returns the number of positions in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns `true` if the set contains no positions.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns `true` if the set contains `pos`.
    #[must_use]
    pub const fn contains(self, pos: Position) -> bool {
        self.0 & (1 << pos.index()) != 0
    }

    /// Inserts a position; returns `true` if it was not already present.
    pub const fn insert(&mut self, pos: Position) -> bool {
        let before = self.0;
        self.0 |= 1 << pos.index();
        self.0 != before
    }

    /// Removes a position; returns `true` if it was present.
    pub const fn remove(&mut self, pos: Position) -> bool {
        let before = self.0;
        self.0 &= !(1 << pos.index());
        self.0 != before
    }

    /// Returns an iterator over the positions in row-major order.
    #[must_use]
    pub const fn iter(self) -> CellSetIter {
        CellSetIter(self.0 & Self::MASK)
    }
}

impl Debug for CellSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl BitOr for CellSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for CellSet {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for CellSet {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl BitAndAssign for CellSet {
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl FromIterator<Position> for CellSet {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Position>,
    {
        let mut set = Self::EMPTY;
        for pos in iter {
            set.insert(pos);
        }
        set
    }
}

impl IntoIterator for CellSet {
    type Item = Position;
    type IntoIter = CellSetIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the positions of a [`CellSet`] in row-major order.
#[derive(Debug, Clone)]
pub struct CellSetIter(u128);

impl Iterator for CellSetIter {
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        if self.0 == 0 {
            return None;
        }
        #[expect(clippy::cast_possible_truncation)]
        let index = self.0.trailing_zeros() as u8;
        self.0 &= self.0 - 1;
        Some(Position::from_index(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.0.count_ones() as usize;
        (len, Some(len))
    }
}

impl FusedIterator for CellSetIter {}
impl ExactSizeIterator for CellSetIter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_remove_contains() {
        let mut set = CellSet::new();
        let pos = Position::new(8, 8);
        assert!(set.insert(pos));
        assert!(!set.insert(pos));
        assert!(set.contains(pos));
        assert!(set.remove(pos));
        assert!(set.is_empty());
    }

    #[test]
    fn test_iteration_is_row_major() {
        let set: CellSet = [Position::new(3, 1), Position::new(0, 0), Position::new(8, 0)]
            .into_iter()
            .collect();
        let collected: Vec<_> = set.iter().collect();
        assert_eq!(
            collected,
            vec![Position::new(0, 0), Position::new(8, 0), Position::new(3, 1)]
        );
    }

    #[test]
    fn test_set_operations() {
        let a: CellSet = Position::ROWS[0].into_iter().collect();
        let b: CellSet = Position::COLUMNS[0].into_iter().collect();
        assert_eq!((a | b).len(), 17);
        assert_eq!(a & b, [Position::new(0, 0)].into_iter().collect());
    }
}
