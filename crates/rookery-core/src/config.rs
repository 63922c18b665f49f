//! Board behavior knobs.

use std::fmt;
use std::str::FromStr;

use crate::piece_kind::PieceKind;

/// Which pieces are turned into a queen when they land on row 0 or row 7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PromotionPolicy {
    /// Only pawns promote.
    #[default]
    PawnsOnly,
    /// Any piece landing on a last row becomes a queen.
    AnyPiece,
}

impl PromotionPolicy {
    /// Return `true` if a piece of `kind` is promoted under this policy.
    #[inline]
    pub const fn admits(self, kind: PieceKind) -> bool {
        match self {
            PromotionPolicy::PawnsOnly => matches!(kind, PieceKind::Pawn),
            PromotionPolicy::AnyPiece => true,
        }
    }
}

impl fmt::Display for PromotionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PromotionPolicy::PawnsOnly => write!(f, "pawns"),
            PromotionPolicy::AnyPiece => write!(f, "any"),
        }
    }
}

/// Error returned when a promotion policy name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown promotion policy \"{0}\", expected \"pawns\" or \"any\"")]
pub struct ParsePolicyError(pub String);

impl FromStr for PromotionPolicy {
    type Err = ParsePolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pawns" | "pawns-only" => Ok(PromotionPolicy::PawnsOnly),
            "any" | "any-piece" => Ok(PromotionPolicy::AnyPiece),
            other => Err(ParsePolicyError(other.to_string())),
        }
    }
}

/// Configuration fixed at [`Board`](crate::board::Board) construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoardConfig {
    /// Promotion rule applied after every move.
    pub promotion: PromotionPolicy,
}
