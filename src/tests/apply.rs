//! Move application scenarios.

use crate::types::{CastleRights, Color, Move, Piece, Role, Square};
use crate::{Position, PositionBuilder};

fn white(role: Role) -> Piece {
    Piece::new(Color::White, role)
}

fn black(role: Role) -> Piece {
    Piece::new(Color::Black, role)
}

#[test]
fn test_double_pawn_push_sets_en_passant_right() {
    let mut position = Position::new();

    let reset = position.apply(Move::new(Square::E2, Square::E4));
    assert!(reset, "pawn move must reset the counters");
    assert_eq!(position.board.get(Square::E4), Some(white(Role::Pawn)));
    assert_eq!(position.board.get(Square::E2), None);
    assert_eq!(position.en_passant, Some(Square::E3));
    assert_eq!(position.active_color, Color::Black);

    let reset = position.apply(Move::new(Square::E7, Square::E5));
    assert!(reset);
    assert_eq!(position.en_passant, Some(Square::E6));
}

#[test]
fn test_single_pawn_push_grants_no_right() {
    let mut position = Position::new();
    position.apply(Move::new(Square::E2, Square::E3));
    assert_eq!(position.en_passant, None);
}

#[test]
fn test_non_pawn_move_clears_right_and_increments_clock() {
    let mut position = Position::new();
    position.apply(Move::new(Square::E2, Square::E4));
    assert_eq!(position.en_passant, Some(Square::E3));

    let reset = position.apply(Move::new(Square::G8, Square::F6));
    assert!(!reset, "a quiet knight move resets nothing");
    assert_eq!(position.en_passant, None);
    assert_eq!(position.halfmove_clock, 1);
}

#[test]
fn test_capture_resets_clock() {
    // 1. e4 d5 2. exd5
    let mut position = Position::new();
    position.apply(Move::new(Square::E2, Square::E4));
    position.apply(Move::new(Square::D7, Square::D5));
    let reset = position.apply(Move::new(Square::E4, Square::D5));
    assert!(reset);
    assert_eq!(position.halfmove_clock, 0);
    assert_eq!(position.board.get(Square::D5), Some(white(Role::Pawn)));
    // Exactly one black pawn is gone.
    assert_eq!(position.board.by_color(Color::Black).count(), 15);
}

#[test]
fn test_white_kingside_castle() {
    let mut position = PositionBuilder::new()
        .piece(Square::E1, white(Role::King))
        .piece(Square::H1, white(Role::Rook))
        .piece(Square::E8, black(Role::King))
        .castle_rights(CastleRights::WHITE)
        .build();

    let reset = position.apply(Move::new(Square::E1, Square::G1));
    assert!(!reset, "castling is neither a capture nor a pawn move");
    assert_eq!(position.board.get(Square::G1), Some(white(Role::King)));
    assert_eq!(position.board.get(Square::F1), Some(white(Role::Rook)));
    assert_eq!(position.board.get(Square::E1), None);
    assert_eq!(position.board.get(Square::H1), None);
    assert!(!position.castle_rights.contains(CastleRights::WHITE));
}

#[test]
fn test_white_queenside_castle() {
    let mut position = PositionBuilder::new()
        .piece(Square::E1, white(Role::King))
        .piece(Square::A1, white(Role::Rook))
        .piece(Square::E8, black(Role::King))
        .castle_rights(CastleRights::WHITE)
        .build();

    position.apply(Move::new(Square::E1, Square::C1));
    assert_eq!(position.board.get(Square::C1), Some(white(Role::King)));
    assert_eq!(position.board.get(Square::D1), Some(white(Role::Rook)));
    assert_eq!(position.board.get(Square::A1), None);
    assert!(position.castle_rights.is_empty());
}

#[test]
fn test_black_castles_both_ways() {
    let base = PositionBuilder::new()
        .piece(Square::E8, black(Role::King))
        .piece(Square::A8, black(Role::Rook))
        .piece(Square::H8, black(Role::Rook))
        .piece(Square::E1, white(Role::King))
        .side_to_move(Color::Black)
        .castle_rights(CastleRights::BLACK);

    let mut kingside = base.clone().build();
    kingside.apply(Move::new(Square::E8, Square::G8));
    assert_eq!(kingside.board.get(Square::G8), Some(black(Role::King)));
    assert_eq!(kingside.board.get(Square::F8), Some(black(Role::Rook)));
    assert!(kingside.castle_rights.is_empty());

    let mut queenside = base.build();
    queenside.apply(Move::new(Square::E8, Square::C8));
    assert_eq!(queenside.board.get(Square::C8), Some(black(Role::King)));
    assert_eq!(queenside.board.get(Square::D8), Some(black(Role::Rook)));
    assert!(queenside.castle_rights.is_empty());
}

#[test]
fn test_king_move_clears_both_rights() {
    let mut position = Position::new();
    position.apply(Move::new(Square::E2, Square::E4));
    position.apply(Move::new(Square::E7, Square::E5));
    position.apply(Move::new(Square::E1, Square::E2));
    assert!(!position.castle_rights.contains(CastleRights::WHITE));
    assert!(position.castle_rights.contains(CastleRights::BLACK));
}

#[test]
fn test_rook_move_clears_single_right() {
    let mut position = Position::new();
    position.apply(Move::new(Square::A2, Square::A4));
    position.apply(Move::new(Square::A7, Square::A5));
    position.apply(Move::new(Square::A1, Square::A3));
    assert!(!position
        .castle_rights
        .contains(CastleRights::WHITE_QUEEN_SIDE));
    assert!(position
        .castle_rights
        .contains(CastleRights::WHITE_KING_SIDE));
    assert!(position.castle_rights.contains(CastleRights::BLACK));
}

#[test]
fn test_rights_never_restored() {
    // The rook wanders back home; the right stays gone.
    let mut position = Position::new();
    position.apply(Move::new(Square::H2, Square::H4));
    position.apply(Move::new(Square::H7, Square::H5));
    position.apply(Move::new(Square::H1, Square::H3));
    position.apply(Move::new(Square::A7, Square::A6));
    position.apply(Move::new(Square::H3, Square::H1));
    assert!(!position
        .castle_rights
        .contains(CastleRights::WHITE_KING_SIDE));
}

#[test]
fn test_rook_capture_clears_castle_right() {
    // A bishop takes the unmoved rook on h8; Black's kingside right must
    // die with the rook or later FENs would advertise a phantom right.
    let mut position = PositionBuilder::new()
        .piece(Square::E1, white(Role::King))
        .piece(Square::E8, black(Role::King))
        .piece(Square::H8, black(Role::Rook))
        .piece(Square::B2, white(Role::Bishop))
        .castle_rights(CastleRights::BLACK_KING_SIDE)
        .build();

    let reset = position.apply(Move::new(Square::B2, Square::H8));
    assert!(reset);
    assert!(position.castle_rights.is_empty());
    assert_eq!(position.board.get(Square::H8), Some(white(Role::Bishop)));
}

#[test]
fn test_en_passant_capture_removes_bypassed_pawn() {
    // A white pawn stands on e5; Black answers with the double push d7d5,
    // and White captures en passant onto d6.
    let mut position = PositionBuilder::new()
        .piece(Square::E1, white(Role::King))
        .piece(Square::E8, black(Role::King))
        .piece(Square::E5, white(Role::Pawn))
        .piece(Square::D7, black(Role::Pawn))
        .side_to_move(Color::Black)
        .build();

    position.apply(Move::new(Square::D7, Square::D5));
    assert_eq!(position.en_passant, Some(Square::D6));

    let reset = position.apply(Move::new(Square::E5, Square::D6));
    assert!(reset);
    assert_eq!(position.board.get(Square::D6), Some(white(Role::Pawn)));
    assert_eq!(position.board.get(Square::D5), None, "bypassed pawn removed");
    assert_eq!(position.en_passant, None);
}

#[test]
fn test_black_en_passant_capture() {
    let mut position = PositionBuilder::new()
        .piece(Square::E1, white(Role::King))
        .piece(Square::E8, black(Role::King))
        .piece(Square::D4, black(Role::Pawn))
        .piece(Square::E2, white(Role::Pawn))
        .build();

    position.apply(Move::new(Square::E2, Square::E4));
    assert_eq!(position.en_passant, Some(Square::E3));

    position.apply(Move::new(Square::D4, Square::E3));
    assert_eq!(position.board.get(Square::E3), Some(black(Role::Pawn)));
    assert_eq!(position.board.get(Square::E4), None);
}

#[test]
fn test_promotion() {
    let mut position = PositionBuilder::new()
        .piece(Square::A7, white(Role::Pawn))
        .piece(Square::E1, white(Role::King))
        .piece(Square::C8, black(Role::King))
        .build();

    let reset = position.apply(Move::new_promotion(Square::A7, Square::A8, Role::Queen));
    assert!(reset);
    assert_eq!(position.board.get(Square::A8), Some(white(Role::Queen)));
    assert_eq!(position.board.get(Square::A7), None);
    assert!(position.board.by_role(Role::Pawn).is_empty());
}

#[test]
fn test_promotion_capture() {
    let mut position = PositionBuilder::new()
        .piece(Square::B7, white(Role::Pawn))
        .piece(Square::A8, black(Role::Rook))
        .piece(Square::E1, white(Role::King))
        .piece(Square::E8, black(Role::King))
        .build();

    position.apply(Move::new_promotion(Square::B7, Square::A8, Role::Knight));
    assert_eq!(position.board.get(Square::A8), Some(white(Role::Knight)));
    assert!(position.board.by_role(Role::Rook).is_empty());
}

#[test]
fn test_fullmove_number_advances_after_black() {
    let mut position = Position::new();
    assert_eq!(position.fullmove_number, 1);
    position.apply(Move::new(Square::G1, Square::F3));
    assert_eq!(position.fullmove_number, 1);
    position.apply(Move::new(Square::G8, Square::F6));
    assert_eq!(position.fullmove_number, 2);
}

#[test]
#[should_panic(expected = "no piece on the from-square")]
fn test_apply_from_empty_square_panics() {
    let mut position = Position::new();
    position.apply(Move::new(Square::E4, Square::E5));
}
