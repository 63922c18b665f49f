//! Sliding piece (bishop, rook, queen) move generation.

use crate::chess_move::Move;
use crate::grid::Grid;
use crate::piece::Piece;
use crate::square::Square;

use super::MoveList;

pub(super) const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, 1), (-1, -1), (1, 1), (1, -1)];

pub(super) const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];

/// Diagonals first, then orthogonals.
pub(super) const QUEEN_DIRECTIONS: [(i8, i8); 8] = [
    (-1, 1),
    (-1, -1),
    (1, 1),
    (1, -1),
    (-1, 0),
    (0, 1),
    (1, 0),
    (0, -1),
];

/// Walk each ray outward from `origin` until it leaves the board or meets a piece.
///
/// Empty squares are added and the walk continues. An enemy square is added
/// and ends the ray; a friendly square ends it without being added.
pub(super) fn gen_slider(
    grid: &Grid,
    piece: Piece,
    origin: Square,
    directions: &[(i8, i8)],
    list: &mut MoveList,
) {
    let us = piece.color();

    for &(d_row, d_col) in directions {
        let mut current = origin;
        while let Some(dest) = current.offset(d_row, d_col) {
            if grid.is_empty(dest) {
                list.push(Move::new(origin, dest));
                current = dest;
                continue;
            }
            if grid.has_enemy(dest, us) {
                list.push(Move::new(origin, dest));
            }
            break;
        }
    }
}
