//! Sudoku digit representation.

use std::fmt::{self, Display};

/// A Sudoku digit in the range 1-9.
///
/// Invalid digit values are unrepresentable; conversions from raw integers
/// go through [`Digit::new`] which rejects out-of-range input.
///
/// # Examples
///
/// ```
/// use ninefold_core::Digit;
///
/// let digit = Digit::new(7).unwrap();
/// assert_eq!(digit, Digit::D7);
/// assert_eq!(digit.value(), 7);
/// assert!(Digit::new(0).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Digit {
    /// The digit 1.
    D1 = 1,
    /// The digit 2.
    D2 = 2,
    /// The digit 3.
    D3 = 3,
    /// The digit 4.
    D4 = 4,
    /// The digit 5.
    D5 = 5,
    /// The digit 6.
    D6 = 6,
    /// The digit 7.
    D7 = 7,
    /// The digit 8.
    D8 = 8,
    /// The digit 9.
    D9 = 9,
}

impl Digit {
    /// All nine digits in ascending order.
    pub const ALL: [Self; 9] = [
        Self::D1,
        Self::D2,
        Self::D3,
        Self::D4,
        Self::D5,
        Self::D6,
        Self::D7,
        Self::D8,
        Self::D9,
    ];

    /// Creates a digit from a numeric value, returning `None` outside 1-9.
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        match value {
            1..=9 => Some(Self::ALL[(value - 1) as usize]),
            _ => None,
        }
    }

    /// Creates a digit from a zero-based index (0 maps to 1, 8 maps to 9).
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in the range 0-8.
    #[must_use]
    pub const fn from_index(index: u8) -> Self {
        assert!(index < 9, "digit index out of range");
        Self::ALL[index as usize]
    }

    /// Returns the numeric value of this digit (1-9).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Returns the zero-based index of this digit (0-8).
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8 - 1
    }
}

impl Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.value(), f)
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> u8 {
        digit.value()
    }
}
