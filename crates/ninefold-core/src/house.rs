//! Rows, columns, and boxes.

use std::fmt::{self, Display};

use crate::Position;

/// A Sudoku house: a row, column, or 3×3 box.
///
/// [`House::ALL`] lists every house in row, column, box order; detectors
/// that scan "row-wise, then column-wise, then box-wise" rely on that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum House {
    /// A row identified by its y coordinate (0-8).
    Row {
        /// Row index (0-8).
        y: u8,
    },
    /// A column identified by its x coordinate (0-8).
    Column {
        /// Column index (0-8).
        x: u8,
    },
    /// A 3×3 box identified by its index (0-8, left to right, top to bottom).
    Box {
        /// Box index (0-8).
        index: u8,
    },
}

impl House {
    /// All 27 houses: rows 0-8, then columns 0-8, then boxes 0-8.
    pub const ALL: [Self; 27] = {
        let mut all = [Self::Row { y: 0 }; 27];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            all[i] = Self::Row { y: i as u8 };
            all[i + 9] = Self::Column { x: i as u8 };
            all[i + 18] = Self::Box { index: i as u8 };
            i += 1;
        }
        all
    };

    /// Returns the nine positions of this house.
    ///
    /// Rows and columns are ordered by the varying coordinate; boxes are
    /// ordered row-major within the box.
    #[must_use]
    pub const fn positions(self) -> &'static [Position; 9] {
        match self {
            Self::Row { y } => &Position::ROWS[y as usize],
            Self::Column { x } => &Position::COLUMNS[x as usize],
            Self::Box { index } => &Position::BOXES[index as usize],
        }
    }

    /// Returns `true` if this house contains `pos`.
    #[must_use]
    pub const fn contains(self, pos: Position) -> bool {
        match self {
            Self::Row { y } => pos.y() == y,
            Self::Column { x } => pos.x() == x,
            Self::Box { index } => pos.box_index() == index,
        }
    }
}

impl Display for House {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Row { y } => write!(f, "row {}", y + 1),
            Self::Column { x } => write!(f, "column {}", x + 1),
            Self::Box { index } => write!(f, "box {}", index + 1),
        }
    }
}
