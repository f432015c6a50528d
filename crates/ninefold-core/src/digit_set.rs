//! A set of candidate digits for a single cell.

use std::{
    fmt::{self, Debug},
    iter::FusedIterator,
    ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not},
};

use crate::Digit;

/// A set of digits 1-9, backed by a 9-bit mask.
///
/// Bit `d - 1` is set when digit `d` is a member, so `0x1FF` represents all
/// nine digits. This is the internal representation of a cell's candidate
/// notes and the unit the propagation engine operates on.
///
/// # Examples
///
/// ```
/// use ninefold_core::{Digit, DigitSet};
///
/// let mut set = DigitSet::FULL;
/// assert_eq!(set.bits(), 0x1FF);
///
/// set.remove(Digit::D5);
/// assert_eq!(set.len(), 8);
/// assert!(!set.contains(Digit::D5));
///
/// let pair = DigitSet::from_iter([Digit::D2, Digit::D7]);
/// assert_eq!(set & pair, pair);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DigitSet(u16);

impl DigitSet {
    const MASK: u16 = 0x1FF;

    /// The empty set.
    pub const EMPTY: Self = Self(0);
    /// The set containing all nine digits.
    pub const FULL: Self = Self(Self::MASK);

    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Creates a set containing a single digit.
    #[must_use]
    pub const fn from_elem(digit: Digit) -> Self {
        Self(1 << digit.index())
    }

    /// Creates a set from a raw bit mask, returning `None` if any bit above
    /// the ninth is set.
    #[must_use]
    pub const fn try_from_bits(bits: u16) -> Option<Self> {
        if bits & !Self::MASK == 0 {
            Some(Self(bits))
        } else {
            None
        }
    }

    /// Returns the raw bit mask.
    #[must_use]
    pub const fn bits(self) -> u16 {
        self.0
    }

    /// Returns the number of digits in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns `true` if the set contains no digits.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns `true` if the set contains `digit`.
    #[must_use]
    pub const fn contains(self, digit: Digit) -> bool {
        self.0 & (1 << digit.index()) != 0
    }

    /// Inserts a digit; returns `true` if it was not already present.
    pub const fn insert(&mut self, digit: Digit) -> bool {
        let before = self.0;
        self.0 |= 1 << digit.index();
        self.0 != before
    }

    /// Removes a digit; returns `true` if it was present.
    pub const fn remove(&mut self, digit: Digit) -> bool {
        let before = self.0;
        self.0 &= !(1 << digit.index());
        self.0 != before
    }

    /// Returns the sole member if the set has exactly one digit.
    #[must_use]
    pub const fn as_single(self) -> Option<Digit> {
        if self.0.count_ones() == 1 {
            #[expect(clippy::cast_possible_truncation)]
            let index = self.0.trailing_zeros() as u8;
            Some(Digit::from_index(index))
        } else {
            None
        }
    }

    /// Returns the digits in `self` but not in `other`.
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// Returns an iterator over the digits in ascending order.
    #[must_use]
    pub const fn iter(self) -> DigitSetIter {
        DigitSetIter(self.0)
    }
}

impl Default for DigitSet {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Debug for DigitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl BitOr for DigitSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for DigitSet {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for DigitSet {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl BitAndAssign for DigitSet {
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl Not for DigitSet {
    type Output = Self;

    fn not(self) -> Self {
        Self(!self.0 & Self::MASK)
    }
}

impl FromIterator<Digit> for DigitSet {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Digit>,
    {
        let mut set = Self::EMPTY;
        for digit in iter {
            set.insert(digit);
        }
        set
    }
}

impl IntoIterator for DigitSet {
    type Item = Digit;
    type IntoIter = DigitSetIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the digits of a [`DigitSet`] in ascending order.
#[derive(Debug, Clone)]
pub struct DigitSetIter(u16);

impl Iterator for DigitSetIter {
    type Item = Digit;

    fn next(&mut self) -> Option<Digit> {
        if self.0 == 0 {
            return None;
        }
        #[expect(clippy::cast_possible_truncation)]
        let index = self.0.trailing_zeros() as u8;
        self.0 &= self.0 - 1;
        Some(Digit::from_index(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.0.count_ones() as usize;
        (len, Some(len))
    }
}

impl FusedIterator for DigitSetIter {}
impl ExactSizeIterator for DigitSetIter {}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::digit::Digit::*;

    #[test]
    fn test_full_and_empty() {
        assert_eq!(DigitSet::EMPTY.len(), 0);
        assert_eq!(DigitSet::FULL.len(), 9);
        assert_eq!(DigitSet::FULL.bits(), 0x1FF);
        for digit in Digit::ALL {
            assert!(DigitSet::FULL.contains(digit));
        }
    }

    #[test]
    fn test_insert_remove() {
        let mut set = DigitSet::new();
        assert!(set.insert(D3));
        assert!(!set.insert(D3));
        assert!(set.contains(D3));
        assert!(set.remove(D3));
        assert!(!set.remove(D3));
        assert!(set.is_empty());
    }

    #[test]
    fn test_as_single() {
        assert_eq!(DigitSet::from_elem(D7).as_single(), Some(D7));
        assert_eq!(DigitSet::EMPTY.as_single(), None);
        assert_eq!(DigitSet::from_iter([D1, D2]).as_single(), None);
    }

    #[test]
    fn test_iteration_is_ascending() {
        let set = DigitSet::from_iter([D9, D1, D5, D3]);
        let collected: Vec<_> = set.iter().collect();
        assert_eq!(collected, vec![D1, D3, D5, D9]);
    }

    #[test]
    fn test_set_operations() {
        let a = DigitSet::from_iter([D1, D2, D3]);
        let b = DigitSet::from_iter([D2, D3, D4]);

        assert_eq!(a | b, DigitSet::from_iter([D1, D2, D3, D4]));
        assert_eq!(a & b, DigitSet::from_iter([D2, D3]));
        assert_eq!(a.difference(b), DigitSet::from_elem(D1));
        assert_eq!(!DigitSet::FULL, DigitSet::EMPTY);
    }

    #[test]
    fn test_try_from_bits() {
        assert_eq!(DigitSet::try_from_bits(0x1FF), Some(DigitSet::FULL));
        assert_eq!(DigitSet::try_from_bits(0x200), None);
    }

    proptest! {
        #[test]
        fn prop_bits_round_trip(bits in 0u16..0x200) {
            let set = DigitSet::try_from_bits(bits).unwrap();
            prop_assert_eq!(set.bits(), bits);
            prop_assert_eq!(set.iter().count(), set.len());
            let rebuilt: DigitSet = set.iter().collect();
            prop_assert_eq!(rebuilt, set);
        }

        #[test]
        fn prop_complement_partitions(bits in 0u16..0x200) {
            let set = DigitSet::try_from_bits(bits).unwrap();
            prop_assert_eq!(set | !set, DigitSet::FULL);
            prop_assert_eq!(set & !set, DigitSet::EMPTY);
        }
    }
}
