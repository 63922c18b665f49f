//! Pawn move generation.

use crate::chess_move::Move;
use crate::grid::Grid;
use crate::piece::Piece;
use crate::square::Square;

use super::MoveList;

/// Generate pawn pushes and diagonal captures.
///
/// The forward scan covers two squares for an unmoved pawn and one otherwise,
/// and stops at the first occupied square whatever its color. Diagonals are
/// capture-only.
pub(super) fn gen_pawn(grid: &Grid, piece: Piece, origin: Square, list: &mut MoveList) {
    let dir = piece.direction();
    let steps: i8 = if piece.has_moved() { 1 } else { 2 };

    // --- Pushes ---
    for step in 1..=steps {
        match origin.offset(dir * step, 0) {
            Some(dest) if grid.is_empty(dest) => list.push(Move::new(origin, dest)),
            _ => break,
        }
    }

    // --- Captures ---
    for d_col in [-1, 1] {
        if let Some(dest) = origin.offset(dir, d_col)
            && grid.has_enemy(dest, piece.color())
        {
            list.push(Move::new(origin, dest));
        }
    }
}
