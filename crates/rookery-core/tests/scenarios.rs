//! End-to-end scenarios through the public API: setup, generation, and application.

use rookery_core::{
    Board, BoardConfig, BoardError, Color, Grid, Move, PieceKind, PromotionPolicy, Square,
    generate_moves,
};

fn sq(row: u8, col: u8) -> Square {
    Square::new(row, col)
}

fn mv(from: (u8, u8), to: (u8, u8)) -> Move {
    Move::new(sq(from.0, from.1), sq(to.0, to.1))
}

// ── Starting position ────────────────────────────────────────────────────────

#[test]
fn unmoved_white_pawn_has_single_and_double_push() {
    let mut board = Board::new();
    let moves = board.calc_moves(sq(6, 4)).unwrap();
    assert_eq!(moves, [mv((6, 4), (5, 4)), mv((6, 4), (4, 4))]);
}

#[test]
fn white_rook_in_corner_is_boxed_in() {
    let mut board = Board::new();
    assert!(board.calc_moves(sq(7, 0)).unwrap().is_empty());
}

#[test]
fn black_knight_reaches_two_squares() {
    let mut board = Board::new();
    let moves = board.calc_moves(sq(0, 1)).unwrap();
    assert!(moves.contains(&mv((0, 1), (2, 0))));
    assert!(moves.contains(&mv((0, 1), (2, 2))));
    assert_eq!(moves.len(), 2);
}

#[test]
fn every_candidate_is_on_the_board() {
    let mut board = Board::new();
    let moves = [
        mv((6, 4), (4, 4)),
        mv((1, 3), (3, 3)),
        mv((4, 4), (3, 3)),
        mv((0, 3), (3, 3)),
        mv((7, 5), (3, 1)),
    ];
    for m in moves {
        board.play(m).unwrap();
        for origin in Square::all() {
            if board.piece_at(origin).is_none() {
                continue;
            }
            for c in board.calc_moves(origin).unwrap().to_vec() {
                assert!(rookery_core::in_range(c.dest().row() as i8));
                assert!(rookery_core::in_range(c.dest().col() as i8));
                assert!(!board.grid().has_team(c.dest(), board.piece_at(origin).unwrap().color()));
            }
        }
    }
}

// ── A short game ─────────────────────────────────────────────────────────────

#[test]
fn scholars_line_with_capture() {
    let mut board = Board::new();
    let line = [
        mv((6, 4), (4, 4)), // e4
        mv((1, 4), (3, 4)), // e5
        mv((7, 5), (4, 2)), // Bc4
        mv((0, 1), (2, 2)), // Nc6
        mv((7, 3), (3, 7)), // Qh5
        mv((0, 6), (2, 5)), // Nf6
    ];
    for m in line {
        assert_eq!(board.play(m), Ok(None), "{m} should be a quiet candidate");
        assert_eq!(board.last_move(), Some(m));
    }

    let captured = board.play(mv((3, 7), (1, 5))).unwrap(); // Qxf7
    let captured = captured.expect("f7 pawn is captured");
    assert_eq!(captured.kind(), PieceKind::Pawn);
    assert_eq!(captured.color(), Color::Black);

    let queen = board.piece_at(sq(1, 5)).unwrap();
    assert_eq!(queen.kind(), PieceKind::Queen);
    assert_eq!(queen.color(), Color::White);
    assert!(queen.has_moved());
    assert_eq!(board.grid().occupied_count(), 31);
}

#[test]
fn turn_order_is_not_enforced() {
    let mut board = Board::new();
    board.play(mv((6, 0), (5, 0))).unwrap();
    board.play(mv((5, 0), (4, 0))).unwrap();
    assert!(board.piece_at(sq(4, 0)).is_some());
}

#[test]
fn stale_candidates_are_rejected_after_move() {
    let mut board = Board::new();
    board.calc_moves(sq(6, 4)).unwrap();
    board.apply(mv((6, 4), (4, 4))).unwrap();
    // The pawn's list was cleared with the move.
    let err = board.apply(mv((4, 4), (3, 4))).unwrap_err();
    assert_eq!(err, BoardError::NotACandidate { mv: mv((4, 4), (3, 4)) });
}

// ── Promotion policies ───────────────────────────────────────────────────────

#[test]
fn pawn_march_to_promotion() {
    let grid: Grid = "4k3/8/8/8/8/8/P7/4K3".parse().unwrap();
    let mut board = Board::from_grid(grid, BoardConfig::default());
    let path = [
        mv((6, 0), (4, 0)),
        mv((4, 0), (3, 0)),
        mv((3, 0), (2, 0)),
        mv((2, 0), (1, 0)),
        mv((1, 0), (0, 0)),
    ];
    for m in path {
        board.play(m).unwrap();
    }
    assert_eq!(board.piece_at(sq(0, 0)).map(|p| p.kind()), Some(PieceKind::Queen));

    // The new queen moves like one.
    let queen_moves = board.calc_moves(sq(0, 0)).unwrap();
    assert!(queen_moves.contains(&mv((0, 0), (7, 7))));
}

#[test]
fn king_reaching_back_row_depends_on_policy() {
    let placement = "8/4k3/8/8/8/8/8/4K3";
    for (policy, expected) in [
        (PromotionPolicy::PawnsOnly, PieceKind::King),
        (PromotionPolicy::AnyPiece, PieceKind::Queen),
    ] {
        let grid: Grid = placement.parse().unwrap();
        let mut board = Board::from_grid(grid, BoardConfig { promotion: policy });
        board.play(mv((1, 4), (0, 4))).unwrap();
        assert_eq!(
            board.piece_at(sq(0, 4)).map(|p| p.kind()),
            Some(expected),
            "policy {policy}"
        );
        assert_eq!(board.config().promotion, policy);
    }
}

// ── Generator as a pure function ─────────────────────────────────────────────

#[test]
fn generator_does_not_touch_the_grid() {
    let grid = Grid::starting_position();
    let before = grid;
    for origin in Square::all() {
        let _ = generate_moves(&grid, origin);
    }
    assert_eq!(grid, before);
}

#[test]
fn regenerating_on_unchanged_board_is_stable() {
    let mut board = Board::new();
    board.play(mv((6, 3), (4, 3))).unwrap();
    for origin in Square::all() {
        if board.piece_at(origin).is_none() {
            continue;
        }
        let first = board.calc_moves(origin).unwrap().to_vec();
        let second = board.calc_moves(origin).unwrap().to_vec();
        assert_eq!(first, second);
    }
}
