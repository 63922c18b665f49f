//! The board controller: grid ownership, candidate lists, and move application.

use tracing::{debug, warn};

use crate::chess_move::Move;
use crate::config::BoardConfig;
use crate::error::BoardError;
use crate::grid::Grid;
use crate::movegen::{MoveList, generate_moves};
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// A game in progress.
///
/// Each piece has a candidate list, stored by the square it stands on. The
/// list is filled by [`Board::calc_moves`] and [`Board::apply`] only accepts
/// moves from it. Every stored list is dropped once a move is applied, since
/// it was generated against the previous grid.
///
/// Turn order is not enforced.
#[derive(Clone)]
pub struct Board {
    grid: Grid,
    /// Latest generated moves for the piece on each square, indexed by [`Square::index()`].
    candidates: [MoveList; Square::COUNT],
    last_move: Option<Move>,
    config: BoardConfig,
}

impl Board {
    /// Return a board in the starting position with the default configuration.
    pub fn new() -> Board {
        Board::with_config(BoardConfig::default())
    }

    /// Return a board in the starting position.
    pub fn with_config(config: BoardConfig) -> Board {
        Board::from_grid(Grid::starting_position(), config)
    }

    /// Return a board holding an arbitrary placement. No candidates are stored yet.
    pub fn from_grid(grid: Grid, config: BoardConfig) -> Board {
        Board {
            grid,
            candidates: [MoveList::new(); Square::COUNT],
            last_move: None,
            config,
        }
    }

    /// Return the current placement.
    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Return the configuration this board was built with.
    #[inline]
    pub fn config(&self) -> BoardConfig {
        self.config
    }

    /// Return the piece on `sq`, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.grid.piece_at(sq)
    }

    /// Return the most recently applied move, or `None` before the first one.
    #[inline]
    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    /// Return the stored candidates of the piece on `origin` (empty when cleared).
    #[inline]
    pub fn candidates(&self, origin: Square) -> &[Move] {
        self.candidates[origin.index()].as_slice()
    }

    /// Generate the moves of the piece on `origin` and store them as its
    /// candidates, replacing any earlier list.
    pub fn calc_moves(&mut self, origin: Square) -> Result<&[Move], BoardError> {
        let moves = generate_moves(&self.grid, origin)?;
        self.candidates[origin.index()] = moves;
        Ok(self.candidates[origin.index()].as_slice())
    }

    /// Drop the stored candidates of the piece on `origin`.
    #[inline]
    pub fn clear_moves(&mut self, origin: Square) {
        self.candidates[origin.index()].clear();
    }

    /// Drop the stored candidates of every piece.
    pub fn clear_all_moves(&mut self) {
        for list in &mut self.candidates {
            list.clear();
        }
    }

    /// Return `true` if `mv` is among the stored candidates of the piece on its origin.
    #[inline]
    pub fn valid_move(&self, mv: Move) -> bool {
        self.candidates[mv.source().index()].contains(mv)
    }

    /// Apply a candidate move and return the captured piece, if any.
    ///
    /// The mover is marked as moved and promoted if it reaches a last row (see
    /// [`Board::check_promotion`]). The move becomes [`Board::last_move`].
    /// All stored candidates are cleared, so every piece must go through
    /// [`Board::calc_moves`] again before its next move.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::EmptySquare`] if nothing stands on the origin and
    /// [`BoardError::NotACandidate`] if `mv` was not generated for that piece.
    /// The board is unchanged on error.
    pub fn apply(&mut self, mv: Move) -> Result<Option<Piece>, BoardError> {
        let source = mv.source();
        let dest = mv.dest();

        let Some(piece) = self.grid.piece_at(source) else {
            warn!(mv = %mv, "rejected move from empty square");
            return Err(BoardError::EmptySquare { square: source });
        };
        if !self.valid_move(mv) {
            warn!(mv = %mv, piece = %piece, "rejected move that is not a candidate");
            return Err(BoardError::NotACandidate { mv });
        }

        let moved = piece.moved();
        self.grid.take(source);
        let captured = self.grid.set(dest, Some(moved));

        self.check_promotion(moved, dest);

        self.clear_all_moves();
        self.last_move = Some(mv);

        debug!(mv = %mv, piece = %piece, captured = ?captured, "applied move");
        Ok(captured)
    }

    /// Generate the candidates of the piece on `mv.source()`, then apply `mv`.
    pub fn play(&mut self, mv: Move) -> Result<Option<Piece>, BoardError> {
        self.calc_moves(mv.source())?;
        self.apply(mv)
    }

    /// Replace the occupant of `dest` with a queen of `piece`'s color if
    /// `dest` is on row 0 or 7 and the promotion policy admits `piece`.
    ///
    /// Returns `true` if a promotion happened.
    pub fn check_promotion(&mut self, piece: Piece, dest: Square) -> bool {
        if !dest.is_last_row() || !self.config.promotion.admits(piece.kind()) {
            return false;
        }
        let queen = Piece::new(PieceKind::Queen, piece.color()).moved();
        self.grid.set(dest, Some(queen));
        debug!(square = %dest, from = %piece, to = %queen, "promoted");
        true
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Board")
            .field("grid", &self.grid)
            .field("last_move", &self.last_move)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
