//! Reproducible generation seeds.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use derive_more::{Display as DisplayDerive, Error};
use rand::{Rng as _, SeedableRng as _};
use rand_pcg::Pcg64Mcg;
use sha2::{Digest as _, Sha256};

/// A 256-bit puzzle seed.
///
/// The same seed always produces the same puzzle. Seeds display as 64
/// lowercase hex characters and parse back from that form, so they can be
/// shared to reproduce a puzzle exactly.
///
/// # Examples
///
/// ```
/// use ninefold_generator::PuzzleSeed;
///
/// let seed = PuzzleSeed::from_phrase("daily 2026-08-27");
/// let text = seed.to_string();
/// assert_eq!(text.len(), 64);
/// assert_eq!(text.parse::<PuzzleSeed>().unwrap(), seed);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleSeed([u8; 32]);

impl PuzzleSeed {
    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Draws a fresh random seed from the thread RNG.
    #[must_use]
    pub fn random() -> Self {
        let mut bytes = [0; 32];
        rand::rng().fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// Derives a seed from an arbitrary phrase by hashing it with SHA-256.
    ///
    /// Useful for memorable seeds such as `"daily 2026-08-27"`.
    #[must_use]
    pub fn from_phrase(phrase: &str) -> Self {
        Self(Sha256::digest(phrase.as_bytes()).into())
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub const fn bytes(self) -> [u8; 32] {
        self.0
    }

    /// Creates the deterministic RNG driven by this seed.
    pub(crate) fn rng(self) -> Pcg64Mcg {
        let mut state = [0; 16];
        state.copy_from_slice(&self.0[..16]);
        Pcg64Mcg::from_seed(state)
    }
}

impl Display for PuzzleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// Error returned when parsing a [`PuzzleSeed`] from a string fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, DisplayDerive, Error)]
pub enum ParsePuzzleSeedError {
    /// The string is not exactly 64 characters long.
    #[display("expected 64 hex characters, found {_0}")]
    WrongLength(#[error(not(source))] usize),
    /// The string contains a non-hex character.
    #[display("invalid hex character {_0:?}")]
    InvalidCharacter(#[error(not(source))] char),
}

impl FromStr for PuzzleSeed {
    type Err = ParsePuzzleSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.chars().count() != 64 {
            return Err(ParsePuzzleSeedError::WrongLength(s.chars().count()));
        }
        let mut bytes = [0; 32];
        let mut chars = s.chars();
        for byte in &mut bytes {
            let mut value = 0;
            for _ in 0..2 {
                // Length was checked above.
                let c = chars.next().ok_or(ParsePuzzleSeedError::WrongLength(64))?;
                let digit = c
                    .to_digit(16)
                    .ok_or(ParsePuzzleSeedError::InvalidCharacter(c))?;
                #[expect(clippy::cast_possible_truncation)]
                let digit = digit as u8;
                value = value * 16 + digit;
            }
            *byte = value;
        }
        Ok(Self(bytes))
    }
}
