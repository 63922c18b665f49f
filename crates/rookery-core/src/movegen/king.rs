//! King move generation. Castling is not generated.

use crate::grid::Grid;
use crate::piece::Piece;
use crate::square::Square;

use super::{MoveList, gen_steps};

/// Adjacent squares, clockwise from straight up.
const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
];

/// Generate single steps onto empty or enemy squares.
pub(super) fn gen_king(grid: &Grid, piece: Piece, origin: Square, list: &mut MoveList) {
    gen_steps(grid, piece, origin, &KING_OFFSETS, list);
}
