//! The 8x8 position grid: authoritative piece placement and occupancy queries.

use crate::color::Color;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::{BOARD_SIZE, Square};

/// Piece placement on all 64 squares, row-major.
///
/// Each square holds at most one piece. All queries take `&self` and have no
/// side effects.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    cells: [Option<Piece>; Square::COUNT],
}

impl Grid {
    /// Return a grid with no pieces.
    pub const fn empty() -> Grid {
        Grid {
            cells: [None; Square::COUNT],
        }
    }

    /// Return the standard starting arrangement.
    pub fn starting_position() -> Grid {
        let mut grid = Grid::empty();
        for color in Color::ALL {
            let pawn_row = color.pawn_row();
            let back_row = color.back_row();
            for col in 0..BOARD_SIZE {
                grid.set(Square::new(pawn_row, col), Some(Piece::new(PieceKind::Pawn, color)));
                let kind = PieceKind::BACK_ROW[col as usize];
                grid.set(Square::new(back_row, col), Some(Piece::new(kind, color)));
            }
        }
        grid
    }

    /// Return the piece on `sq`, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.cells[sq.index()]
    }

    /// Replace the occupant of `sq`, returning the previous one.
    #[inline]
    pub fn set(&mut self, sq: Square, piece: Option<Piece>) -> Option<Piece> {
        std::mem::replace(&mut self.cells[sq.index()], piece)
    }

    /// Remove and return the occupant of `sq`.
    #[inline]
    pub fn take(&mut self, sq: Square) -> Option<Piece> {
        self.cells[sq.index()].take()
    }

    /// Return `true` if `sq` has no occupant.
    #[inline]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.cells[sq.index()].is_none()
    }

    /// Return `true` if `sq` holds a piece of the opposite color to `color`.
    #[inline]
    pub fn has_enemy(&self, sq: Square, color: Color) -> bool {
        self.cells[sq.index()].is_some_and(|p| p.color() != color)
    }

    /// Return `true` if `sq` holds a piece of `color`.
    #[inline]
    pub fn has_team(&self, sq: Square, color: Color) -> bool {
        self.cells[sq.index()].is_some_and(|p| p.color() == color)
    }

    /// Return `true` if a piece of `color` could land on `sq`.
    #[inline]
    pub fn is_empty_or_enemy(&self, sq: Square, color: Color) -> bool {
        self.is_empty(sq) || self.has_enemy(sq, color)
    }

    /// Iterate over every square with its occupant, row-major.
    pub fn squares(&self) -> impl Iterator<Item = (Square, Option<Piece>)> + '_ {
        Square::all().map(|sq| (sq, self.cells[sq.index()]))
    }

    /// Iterate over the squares occupied by `color`, row-major.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.squares().filter_map(move |(sq, occupant)| {
            occupant
                .filter(|p| p.color() == color)
                .map(|p| (sq, p))
        })
    }

    /// Return the number of occupied squares.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }
}

impl std::fmt::Debug for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Grid(\"{self}\")")
    }
}
