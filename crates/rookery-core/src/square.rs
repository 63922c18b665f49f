//! Board coordinates in row-major order.

use std::fmt;

/// Number of rows and of columns on the board.
pub const BOARD_SIZE: u8 = 8;

/// Return `true` if `index` is a valid row or column coordinate.
#[inline]
pub const fn in_range(index: i8) -> bool {
    index >= 0 && index < BOARD_SIZE as i8
}

/// A square on the chess board, encoded as `row * 8 + col`.
///
/// Row 0 is Black's back rank and row 7 is White's, so `(0, 0)` is a8 and
/// `(7, 7)` is h1. A `Square` is always in range; use [`Square::try_new`] or
/// [`Square::offset`] for coordinates that may fall off the board.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Square(u8);

impl Square {
    /// Total number of squares.
    pub const COUNT: usize = 64;

    /// Create a square from a row and column.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is 8 or more. Use [`Square::try_new`] for
    /// coordinates that are not known to be on the board.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Square {
        assert!(row < BOARD_SIZE && col < BOARD_SIZE, "square coordinates out of range");
        Square(row * BOARD_SIZE + col)
    }

    /// Create a square from signed coordinates, returning `None` if either is out of range.
    #[inline]
    pub const fn try_new(row: i8, col: i8) -> Option<Square> {
        if Square::in_bounds(row, col) {
            Some(Square::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Return `true` if both coordinates lie on the board.
    #[inline]
    pub const fn in_bounds(row: i8, col: i8) -> bool {
        in_range(row) && in_range(col)
    }

    /// Create a square from a zero-based index, returning `None` if out of range.
    #[inline]
    pub const fn from_index(index: u8) -> Option<Square> {
        if (index as usize) < Square::COUNT {
            Some(Square(index))
        } else {
            None
        }
    }

    /// Create a square from a zero-based index without bounds checking.
    #[inline]
    pub(crate) const fn from_index_unchecked(index: u8) -> Square {
        debug_assert!((index as usize) < Square::COUNT);
        Square(index)
    }

    /// Return the zero-based index (0..63).
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.0 / BOARD_SIZE
    }

    #[inline]
    pub const fn col(self) -> u8 {
        self.0 % BOARD_SIZE
    }

    /// Step by `(d_row, d_col)`, returning `None` if the target is off the board.
    #[inline]
    pub const fn offset(self, d_row: i8, d_col: i8) -> Option<Square> {
        Square::try_new(self.row() as i8 + d_row, self.col() as i8 + d_col)
    }

    /// Return `true` if this square is on row 0 or row 7.
    #[inline]
    pub const fn is_last_row(self) -> bool {
        let row = self.row();
        row == 0 || row == BOARD_SIZE - 1
    }

    /// Iterate over all 64 squares in row-major order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0u8..64).map(Square)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.col()) as char;
        let rank = BOARD_SIZE - self.row();
        write!(f, "{file}{rank}")
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row(), self.col())
    }
}
