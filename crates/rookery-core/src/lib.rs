//! Mailbox chessboard: piece placement, pseudo-legal move generation, and move application.

mod board;
mod chess_move;
mod color;
mod config;
mod error;
mod grid;
mod movegen;
mod piece;
mod piece_kind;
mod placement;
mod square;

pub use board::Board;
pub use chess_move::Move;
pub use color::Color;
pub use config::{BoardConfig, ParsePolicyError, PromotionPolicy};
pub use error::{BoardError, MoveGenError, PlacementError};
pub use grid::Grid;
pub use movegen::{MoveList, generate_moves, generate_piece_moves};
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use placement::STARTING_PLACEMENT;
pub use square::{BOARD_SIZE, Square, in_range};
