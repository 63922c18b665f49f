//! Knight move generation.

use crate::grid::Grid;
use crate::piece::Piece;
use crate::square::Square;

use super::{MoveList, gen_steps};

/// L-shaped jumps, clockwise from two-up-one-right.
const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, 1),
    (-1, 2),
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
];

/// Generate knight jumps onto empty or enemy squares.
pub(super) fn gen_knight(grid: &Grid, piece: Piece, origin: Square, list: &mut MoveList) {
    gen_steps(grid, piece, origin, &KNIGHT_OFFSETS, list);
}
