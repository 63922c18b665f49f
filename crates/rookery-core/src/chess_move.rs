//! Chess move representation, bit-packed into a u16.

use std::fmt;

use crate::square::Square;

const SRC_MASK: u16 = 0x003F;
const DST_MASK: u16 = 0x0FC0;
const DST_SHIFT: u32 = 6;

/// A move from one square to another, encoded in 16 bits.
///
/// ```text
/// bits 0-5:  origin square      (0-63)
/// bits 6-11: destination square (0-63)
/// ```
///
/// Two moves are equal iff both squares match.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move(u16);

impl Move {
    /// Filler value for unused move-list slots. Never generated.
    pub(crate) const NULL: Move = Move(0);

    /// Create a move from `source` to `dest`.
    #[inline]
    pub const fn new(source: Square, dest: Square) -> Move {
        Move((source.index() as u16) | ((dest.index() as u16) << DST_SHIFT))
    }

    /// Extract the origin square.
    #[inline]
    pub const fn source(self) -> Square {
        Square::from_index_unchecked((self.0 & SRC_MASK) as u8)
    }

    /// Extract the destination square.
    #[inline]
    pub const fn dest(self) -> Square {
        Square::from_index_unchecked(((self.0 & DST_MASK) >> DST_SHIFT) as u8)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.source(), self.dest())
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}->{:?}", self.source(), self.dest())
    }
}
