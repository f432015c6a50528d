//! Board position (cell) addressing.

use std::fmt::{self, Display};

use crate::House;

/// A cell on the 9×9 board, stored as its row-major linear index.
///
/// The row, column, and box of a position are pure functions of the linear
/// index `y * 9 + x`; the box index is `(y / 3) * 3 + x / 3`. The 20-cell
/// peer table and the row/column/box position tables are built at compile
/// time and shared read-only by every component.
///
/// # Examples
///
/// ```
/// use ninefold_core::Position;
///
/// let pos = Position::new(4, 2);
/// assert_eq!(pos.x(), 4);
/// assert_eq!(pos.y(), 2);
/// assert_eq!(pos.index(), 22);
/// assert_eq!(pos.box_index(), 1);
/// assert_eq!(pos.peers().len(), 20);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position(u8);

impl Position {
    /// All 81 positions in row-major order.
    #[expect(clippy::cast_possible_truncation)]
    pub const ALL: [Self; 81] = {
        let mut all = [Self(0); 81];
        let mut i = 0;
        while i < 81 {
            all[i] = Self(i as u8);
            i += 1;
        }
        all
    };

    /// The nine positions of each row, indexed by row.
    #[expect(clippy::cast_possible_truncation)]
    pub const ROWS: [[Self; 9]; 9] = {
        let mut rows = [[Self(0); 9]; 9];
        let mut y = 0;
        while y < 9 {
            let mut x = 0;
            while x < 9 {
                rows[y][x] = Self::new(x as u8, y as u8);
                x += 1;
            }
            y += 1;
        }
        rows
    };

    /// The nine positions of each column, indexed by column.
    #[expect(clippy::cast_possible_truncation)]
    pub const COLUMNS: [[Self; 9]; 9] = {
        let mut columns = [[Self(0); 9]; 9];
        let mut x = 0;
        while x < 9 {
            let mut y = 0;
            while y < 9 {
                columns[x][y] = Self::new(x as u8, y as u8);
                y += 1;
            }
            x += 1;
        }
        columns
    };

    /// The nine positions of each 3×3 box, indexed by box.
    #[expect(clippy::cast_possible_truncation)]
    pub const BOXES: [[Self; 9]; 9] = {
        let mut boxes = [[Self(0); 9]; 9];
        let mut b = 0;
        while b < 9 {
            let mut i = 0;
            while i < 9 {
                boxes[b][i] = Self::from_box(b as u8, i as u8);
                i += 1;
            }
            b += 1;
        }
        boxes
    };

    /// Creates a position from column `x` and row `y`.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is not in the range 0-8.
    #[must_use]
    pub const fn new(x: u8, y: u8) -> Self {
        assert!(x < 9 && y < 9, "position coordinate out of range");
        Self(y * 9 + x)
    }

    /// Creates a position from a row-major linear index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in the range 0-80.
    #[must_use]
    pub const fn from_index(index: u8) -> Self {
        assert!(index < 81, "position index out of range");
        Self(index)
    }

    /// Creates a position from a box index and a cell index within the box.
    ///
    /// Cells within a box are numbered row-major, 0-8.
    ///
    /// # Panics
    ///
    /// Panics if either index is not in the range 0-8.
    #[must_use]
    pub const fn from_box(box_index: u8, cell: u8) -> Self {
        assert!(box_index < 9 && cell < 9, "box coordinate out of range");
        let x = (box_index % 3) * 3 + cell % 3;
        let y = (box_index / 3) * 3 + cell / 3;
        Self::new(x, y)
    }

    /// Returns the column (0-8).
    #[must_use]
    pub const fn x(self) -> u8 {
        self.0 % 9
    }

    /// Returns the row (0-8).
    #[must_use]
    pub const fn y(self) -> u8 {
        self.0 / 9
    }

    /// Returns the row-major linear index (0-80).
    #[must_use]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Returns the index of the 3×3 box containing this position (0-8).
    #[must_use]
    pub const fn box_index(self) -> u8 {
        (self.y() / 3) * 3 + self.x() / 3
    }

    /// Returns the row-major cell index of this position within its box (0-8).
    #[must_use]
    pub const fn box_cell_index(self) -> u8 {
        (self.y() % 3) * 3 + self.x() % 3
    }

    /// Returns the 20 other positions sharing this position's row, column,
    /// or box.
    ///
    /// The table is a process-wide compile-time constant; the returned slice
    /// lists row peers, then column peers, then the remaining box peers.
    #[must_use]
    pub const fn peers(self) -> &'static [Position; 20] {
        &PEERS[self.0 as usize]
    }

    /// Returns the three houses containing this position (row, column, box).
    #[must_use]
    pub const fn houses(self) -> [House; 3] {
        [
            House::Row { y: self.y() },
            House::Column { x: self.x() },
            House::Box {
                index: self.box_index(),
            },
        ]
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R{}C{}", self.y() + 1, self.x() + 1)
    }
}

/// Peer table: for each cell, the 20 cells sharing its row, column, or box.
#[expect(clippy::cast_possible_truncation)]
const PEERS: [[Position; 20]; 81] = {
    let mut peers = [[Position(0); 20]; 81];
    let mut i = 0;
    while i < 81 {
        let pos = Position(i as u8);
        let mut n = 0;
        // Row peers, then column peers, then box peers outside both.
        let mut x = 0;
        while x < 9 {
            if x != pos.x() {
                peers[i][n] = Position::new(x, pos.y());
                n += 1;
            }
            x += 1;
        }
        let mut y = 0;
        while y < 9 {
            if y != pos.y() {
                peers[i][n] = Position::new(pos.x(), y);
                n += 1;
            }
            y += 1;
        }
        let mut cell = 0;
        while cell < 9 {
            let other = Position::from_box(pos.box_index(), cell);
            if other.x() != pos.x() && other.y() != pos.y() {
                peers[i][n] = other;
                n += 1;
            }
            cell += 1;
        }
        assert!(n == 20);
        i += 1;
    }
    peers
};
