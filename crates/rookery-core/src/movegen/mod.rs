//! Pseudo-legal move generation.
//!
//! Moves follow each piece's movement rules only: no check detection,
//! castling or en passant.

mod king;
mod knights;
mod pawns;
mod sliders;

use tracing::trace;

use crate::chess_move::Move;
use crate::error::MoveGenError;
use crate::grid::Grid;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

use self::king::gen_king;
use self::knights::gen_knight;
use self::pawns::gen_pawn;
use self::sliders::{BISHOP_DIRECTIONS, QUEEN_DIRECTIONS, ROOK_DIRECTIONS, gen_slider};

/// Largest number of moves a single piece can have (a centralized queen reaches 27).
const MAX_PIECE_MOVES: usize = 32;

/// Stack-allocated buffer for the moves of one piece.
#[derive(Clone, Copy)]
pub struct MoveList {
    moves: [Move; MAX_PIECE_MOVES],
    len: u8,
}

impl MoveList {
    /// Create an empty move list.
    pub const fn new() -> MoveList {
        MoveList {
            moves: [Move::NULL; MAX_PIECE_MOVES],
            len: 0,
        }
    }

    /// Push a move onto the list.
    #[inline]
    pub fn push(&mut self, mv: Move) {
        debug_assert!((self.len as usize) < MAX_PIECE_MOVES);
        self.moves[self.len as usize] = mv;
        self.len += 1;
    }

    /// Return the number of moves in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// Return `true` if the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Remove all moves.
    #[inline]
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Return `true` if `mv` is in the list.
    #[inline]
    pub fn contains(&self, mv: Move) -> bool {
        self.as_slice().contains(&mv)
    }

    /// Return a slice of the moves.
    #[inline]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves[..self.len as usize]
    }
}

impl Default for MoveList {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for MoveList {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for MoveList {}

impl std::fmt::Debug for MoveList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl std::ops::Index<usize> for MoveList {
    type Output = Move;
    #[inline]
    fn index(&self, index: usize) -> &Move {
        &self.as_slice()[index]
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

/// Generate the candidate moves of the piece standing on `origin`.
pub fn generate_moves(grid: &Grid, origin: Square) -> Result<MoveList, MoveGenError> {
    let piece = grid
        .piece_at(origin)
        .ok_or(MoveGenError::EmptySquare { square: origin })?;
    Ok(dispatch(grid, piece, origin))
}

/// Generate the candidate moves of `piece`, which must stand on `origin`.
///
/// # Errors
///
/// Returns [`MoveGenError::EmptySquare`] if `origin` is empty and
/// [`MoveGenError::PieceNotOnOrigin`] if it holds any other piece, including
/// the same kind and color with a different moved flag.
pub fn generate_piece_moves(
    grid: &Grid,
    piece: Piece,
    origin: Square,
) -> Result<MoveList, MoveGenError> {
    match grid.piece_at(origin) {
        None => Err(MoveGenError::EmptySquare { square: origin }),
        Some(occupant) if occupant != piece => Err(MoveGenError::PieceNotOnOrigin {
            piece,
            square: origin,
        }),
        Some(_) => Ok(dispatch(grid, piece, origin)),
    }
}

fn dispatch(grid: &Grid, piece: Piece, origin: Square) -> MoveList {
    let mut list = MoveList::new();
    match piece.kind() {
        PieceKind::Pawn => gen_pawn(grid, piece, origin, &mut list),
        PieceKind::Knight => gen_knight(grid, piece, origin, &mut list),
        PieceKind::Bishop => gen_slider(grid, piece, origin, &BISHOP_DIRECTIONS, &mut list),
        PieceKind::Rook => gen_slider(grid, piece, origin, &ROOK_DIRECTIONS, &mut list),
        PieceKind::Queen => gen_slider(grid, piece, origin, &QUEEN_DIRECTIONS, &mut list),
        PieceKind::King => gen_king(grid, piece, origin, &mut list),
    }
    trace!(piece = %piece, origin = %origin, count = list.len(), "generated candidate moves");
    list
}

/// Push a move to every destination in `offsets` that is on the board and
/// not held by a friendly piece. Shared by the knight and king.
fn gen_steps(grid: &Grid, piece: Piece, origin: Square, offsets: &[(i8, i8)], list: &mut MoveList) {
    for &(d_row, d_col) in offsets {
        if let Some(dest) = origin.offset(d_row, d_col)
            && grid.is_empty_or_enemy(dest, piece.color())
        {
            list.push(Move::new(origin, dest));
        }
    }
}
