//! Piece-placement strings (the first field of FEN) for [`Grid`].

use std::fmt;
use std::str::FromStr;

use crate::error::PlacementError;
use crate::grid::Grid;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::{BOARD_SIZE, Square};

/// Placement of the standard starting position.
pub const STARTING_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

impl FromStr for Grid {
    type Err = PlacementError;

    /// Parse a placement string, row 0 (Black's back rank) first.
    ///
    /// Anything after the first whitespace is ignored, so a full FEN string
    /// is accepted too. Pawns found off their home row are marked as moved.
    fn from_str(s: &str) -> Result<Grid, PlacementError> {
        let placement = s.split_whitespace().next().ok_or(PlacementError::Empty)?;

        let rows: Vec<&str> = placement.split('/').collect();
        if rows.len() != BOARD_SIZE as usize {
            return Err(PlacementError::WrongRowCount { found: rows.len() });
        }

        let mut grid = Grid::empty();

        for (row, row_str) in rows.iter().enumerate() {
            let mut col: usize = 0;

            for c in row_str.chars() {
                if let Some(digit) = c.to_digit(10) {
                    if !(1..=8).contains(&digit) {
                        return Err(PlacementError::InvalidDigit { digit: c });
                    }
                    col += digit as usize;
                    continue;
                }

                let mut piece =
                    Piece::from_fen_char(c).ok_or(PlacementError::InvalidPieceChar { character: c })?;

                if col >= BOARD_SIZE as usize {
                    return Err(PlacementError::BadRowLength {
                        row,
                        length: col + 1,
                    });
                }

                if piece.kind() == PieceKind::Pawn && row != piece.color().pawn_row() as usize {
                    piece = piece.moved();
                }

                grid.set(Square::new(row as u8, col as u8), Some(piece));
                col += 1;
            }

            if col != BOARD_SIZE as usize {
                return Err(PlacementError::BadRowLength { row, length: col });
            }
        }

        Ok(grid)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIZE {
            let mut empty_count = 0u8;

            for col in 0..BOARD_SIZE {
                match self.piece_at(Square::new(row, col)) {
                    Some(piece) => {
                        if empty_count > 0 {
                            write!(f, "{empty_count}")?;
                            empty_count = 0;
                        }
                        write!(f, "{piece}")?;
                    }
                    None => empty_count += 1,
                }
            }

            if empty_count > 0 {
                write!(f, "{empty_count}")?;
            }
            if row < BOARD_SIZE - 1 {
                write!(f, "/")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::STARTING_PLACEMENT;
    use crate::color::Color;
    use crate::error::PlacementError;
    use crate::grid::Grid;
    use crate::piece_kind::PieceKind;
    use crate::square::Square;

    fn roundtrip(placement: &str) {
        let grid: Grid = placement.parse().unwrap();
        assert_eq!(grid.to_string(), placement, "placement roundtrip failed");
    }

    #[test]
    fn roundtrip_starting() {
        roundtrip(STARTING_PLACEMENT);
    }

    #[test]
    fn roundtrip_middlegame() {
        roundtrip("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R");
    }

    #[test]
    fn roundtrip_empty() {
        roundtrip("8/8/8/8/8/8/8/8");
    }

    #[test]
    fn starting_position_matches_placement() {
        let parsed: Grid = STARTING_PLACEMENT.parse().unwrap();
        assert_eq!(parsed, Grid::starting_position());
    }

    #[test]
    fn full_fen_is_accepted() {
        let grid: Grid = "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1"
            .parse()
            .unwrap();
        let pawn = grid.piece_at(Square::new(4, 4)).unwrap();
        assert_eq!(pawn.kind(), PieceKind::Pawn);
        assert_eq!(pawn.color(), Color::White);
    }

    #[test]
    fn pawns_off_home_row_are_moved() {
        let grid: Grid = "8/p7/8/3p4/4P3/8/7P/8".parse().unwrap();
        assert!(!grid.piece_at(Square::new(1, 0)).unwrap().has_moved());
        assert!(grid.piece_at(Square::new(3, 3)).unwrap().has_moved());
        assert!(grid.piece_at(Square::new(4, 4)).unwrap().has_moved());
        assert!(!grid.piece_at(Square::new(6, 7)).unwrap().has_moved());
    }

    #[test]
    fn error_empty() {
        assert_eq!("   ".parse::<Grid>(), Err(PlacementError::Empty));
    }

    #[test]
    fn error_wrong_row_count() {
        assert_eq!(
            "8/8/8".parse::<Grid>(),
            Err(PlacementError::WrongRowCount { found: 3 })
        );
    }

    #[test]
    fn error_invalid_piece_char() {
        assert_eq!(
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPXPPP/RNBQKBNR".parse::<Grid>(),
            Err(PlacementError::InvalidPieceChar { character: 'X' })
        );
    }

    #[test]
    fn error_invalid_digit() {
        assert_eq!(
            "9/8/8/8/8/8/8/8".parse::<Grid>(),
            Err(PlacementError::InvalidDigit { digit: '9' })
        );
        assert_eq!(
            "8/8/8/8/08/8/8/8".parse::<Grid>(),
            Err(PlacementError::InvalidDigit { digit: '0' })
        );
    }

    #[test]
    fn error_bad_row_length() {
        assert_eq!(
            "rnbqkbnr/ppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR".parse::<Grid>(),
            Err(PlacementError::BadRowLength { row: 1, length: 7 })
        );
        assert_eq!(
            "rnbqkbnrr/8/8/8/8/8/8/8".parse::<Grid>(),
            Err(PlacementError::BadRowLength { row: 0, length: 9 })
        );
    }
}
