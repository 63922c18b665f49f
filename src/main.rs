use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use rookery_core::{Board, BoardConfig, Color, Move, PromotionPolicy, Square};

/// Opening moves played by the smoke run: e4 e5 Nf3 Nc6 Bb5.
const OPENING: [((u8, u8), (u8, u8)); 5] = [
    ((6, 4), (4, 4)),
    ((1, 4), (3, 4)),
    ((7, 6), (5, 5)),
    ((0, 1), (2, 2)),
    ((7, 5), (3, 1)),
];

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let promotion = match std::env::var("ROOKERY_PROMOTION") {
        Ok(value) => value
            .parse::<PromotionPolicy>()
            .context("reading ROOKERY_PROMOTION")?,
        Err(_) => PromotionPolicy::default(),
    };
    info!(%promotion, "rookery starting");

    let mut board = Board::with_config(BoardConfig { promotion });

    for color in Color::ALL {
        let origins: Vec<Square> = board.grid().pieces(color).map(|(sq, _)| sq).collect();
        let mut total = 0;
        for origin in origins {
            total += board.calc_moves(origin)?.len();
        }
        info!(%color, moves = total, "candidate moves in starting position");
    }

    for ((from_row, from_col), (to_row, to_col)) in OPENING {
        let mv = Move::new(Square::new(from_row, from_col), Square::new(to_row, to_col));
        board
            .play(mv)
            .with_context(|| format!("playing {mv}"))?;
    }

    info!(
        placement = %board.grid(),
        last_move = ?board.last_move(),
        "opening played"
    );
    Ok(())
}
