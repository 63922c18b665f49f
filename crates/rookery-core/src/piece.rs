//! A colored chess piece with its movement history flag.

use std::fmt;

use crate::color::Color;
use crate::piece_kind::PieceKind;

/// A colored chess piece as it stands on the grid.
///
/// `has_moved` starts out `false` and is set by [`Board::apply`](crate::Board::apply).
/// Only pawns read it (it decides between a one- and two-square push).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    color: Color,
    has_moved: bool,
}

impl Piece {
    /// Create an unmoved piece from a kind and a color.
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Piece {
        Piece {
            kind,
            color,
            has_moved: false,
        }
    }

    /// Parse a placement character into an unmoved piece.
    ///
    /// Uppercase letters produce White pieces; lowercase letters produce Black pieces.
    #[inline]
    pub fn from_fen_char(c: char) -> Option<Piece> {
        let kind = PieceKind::from_fen_char(c)?;
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(Piece::new(kind, color))
    }

    #[inline]
    pub const fn kind(self) -> PieceKind {
        self.kind
    }

    #[inline]
    pub const fn color(self) -> Color {
        self.color
    }

    /// Return `true` once the piece has been moved by the board.
    #[inline]
    pub const fn has_moved(self) -> bool {
        self.has_moved
    }

    /// Return a copy of this piece with the moved flag set.
    #[inline]
    pub const fn moved(self) -> Piece {
        Piece {
            has_moved: true,
            ..self
        }
    }

    /// Row delta of a forward step for this piece's color.
    #[inline]
    pub const fn direction(self) -> i8 {
        self.color.pawn_direction()
    }

    /// Return the placement character: uppercase for White, lowercase for Black.
    #[inline]
    pub fn fen_char(self) -> char {
        let base = self.kind.fen_char();
        match self.color {
            Color::White => base.to_ascii_uppercase(),
            Color::Black => base,
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.fen_char())
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let color_prefix = match self.color {
            Color::White => 'W',
            Color::Black => 'B',
        };
        let kind_char = self.kind.fen_char().to_ascii_uppercase();
        write!(f, "{color_prefix}{kind_char}")?;
        if self.has_moved {
            write!(f, "*")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Piece;
    use crate::color::Color;
    use crate::piece_kind::PieceKind;

    #[test]
    fn new_is_unmoved() {
        for color in Color::ALL {
            for kind in PieceKind::ALL {
                let piece = Piece::new(kind, color);
                assert_eq!(piece.kind(), kind);
                assert_eq!(piece.color(), color);
                assert!(!piece.has_moved(), "{piece:?} should start unmoved");
            }
        }
    }

    #[test]
    fn moved_keeps_identity() {
        let pawn = Piece::new(PieceKind::Pawn, Color::Black);
        let moved = pawn.moved();
        assert!(moved.has_moved());
        assert_eq!(moved.kind(), PieceKind::Pawn);
        assert_eq!(moved.color(), Color::Black);
        assert_ne!(pawn, moved);
    }

    #[test]
    fn direction_follows_color() {
        assert_eq!(Piece::new(PieceKind::Pawn, Color::White).direction(), -1);
        assert_eq!(Piece::new(PieceKind::Pawn, Color::Black).direction(), 1);
    }

    #[test]
    fn from_fen_char_case_sensitivity() {
        assert_eq!(
            Piece::from_fen_char('Q'),
            Some(Piece::new(PieceKind::Queen, Color::White))
        );
        assert_eq!(
            Piece::from_fen_char('n'),
            Some(Piece::new(PieceKind::Knight, Color::Black))
        );
        assert_eq!(Piece::from_fen_char('x'), None);
        assert_eq!(Piece::from_fen_char('8'), None);
    }

    #[test]
    fn display_and_debug() {
        let king = Piece::new(PieceKind::King, Color::White);
        assert_eq!(format!("{king}"), "K");
        assert_eq!(format!("{king:?}"), "WK");
        assert_eq!(format!("{:?}", king.moved()), "WK*");
        assert_eq!(format!("{}", Piece::new(PieceKind::Rook, Color::Black)), "r");
    }

    #[test]
    fn option_piece_stays_small() {
        assert_eq!(std::mem::size_of::<Option<Piece>>(), std::mem::size_of::<Piece>());
    }
}
