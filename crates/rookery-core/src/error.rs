//! Error types for placement parsing, move generation and board mutation.

use crate::chess_move::Move;
use crate::piece::Piece;
use crate::square::Square;

/// Errors that occur when parsing a piece-placement string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlacementError {
    /// The placement string is empty.
    #[error("empty placement string")]
    Empty,
    /// The placement does not describe exactly 8 rows.
    #[error("expected 8 rows in piece placement, found {found}")]
    WrongRowCount {
        /// Number of rows found.
        found: usize,
    },
    /// A row describes more or fewer than 8 squares.
    #[error("row {row} describes {length} squares, expected 8")]
    BadRowLength {
        /// Zero-based row index (0 = Black's back rank).
        row: usize,
        /// Number of squares described.
        length: usize,
    },
    /// An empty-run digit outside `1..=8` appeared in the placement.
    #[error("invalid empty-square count: '{digit}'")]
    InvalidDigit {
        /// The offending digit.
        digit: char,
    },
    /// An unrecognized character appeared in the placement.
    #[error("invalid piece character: '{character}'")]
    InvalidPieceChar {
        /// The invalid character.
        character: char,
    },
}

/// Errors from move generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveGenError {
    /// There is no piece on the requested origin square.
    #[error("no piece on {square}")]
    EmptySquare {
        /// The empty origin square.
        square: Square,
    },
    /// The piece supplied for generation is not the one standing on the origin.
    #[error("{piece} is not on {square}")]
    PieceNotOnOrigin {
        /// The supplied piece.
        piece: Piece,
        /// The origin square.
        square: Square,
    },
}

/// Errors from [`Board`](crate::board::Board) operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// There is no piece on the origin square of the move.
    #[error("no piece on {square}")]
    EmptySquare {
        /// The empty origin square.
        square: Square,
    },
    /// The origin holds a different piece from the one moves were requested for.
    #[error("{piece} is not on {square}")]
    PieceNotOnOrigin {
        /// The requested piece.
        piece: Piece,
        /// The origin square.
        square: Square,
    },
    /// The move is not among the candidates generated for the piece on its origin.
    #[error("{mv} is not a candidate move for the piece on {}", .mv.source())]
    NotACandidate {
        /// The rejected move.
        mv: Move,
    },
}

impl From<MoveGenError> for BoardError {
    fn from(err: MoveGenError) -> Self {
        match err {
            MoveGenError::EmptySquare { square } => BoardError::EmptySquare { square },
            MoveGenError::PieceNotOnOrigin { piece, square } => {
                BoardError::PieceNotOnOrigin { piece, square }
            }
        }
    }
}
