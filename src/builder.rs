//! Fluent builder for constructing positions.
//!
//! Allows creating positions piece by piece rather than parsing FEN
//! strings.
//!
//! # Example
//! ```
//! use chess_core::{CastleRights, Color, Piece, PositionBuilder, Role, Square};
//!
//! let position = PositionBuilder::new()
//!     .piece(Square::E1, Piece::new(Color::White, Role::King))
//!     .piece(Square::E8, Piece::new(Color::Black, Role::King))
//!     .piece(Square::H1, Piece::new(Color::White, Role::Rook))
//!     .castle_rights(CastleRights::WHITE_KING_SIDE)
//!     .build();
//! ```

use crate::board::Board;
use crate::position::Position;
use crate::types::{CastleRights, Color, Piece, Square};

/// A fluent builder for `Position` values.
#[derive(Clone, Debug)]
pub struct PositionBuilder {
    pieces: Vec<(Square, Piece)>,
    castle_rights: CastleRights,
    en_passant: Option<Square>,
    active_color: Color,
    halfmove_clock: u32,
    fullmove_number: u32,
}

impl Default for PositionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PositionBuilder {
    /// Create a builder for an empty board with no rights, White to move.
    #[must_use]
    pub fn new() -> Self {
        PositionBuilder {
            pieces: Vec::new(),
            castle_rights: CastleRights::NONE,
            en_passant: None,
            active_color: Color::White,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    /// Place a piece on the board, replacing any earlier placement there.
    #[must_use]
    pub fn piece(mut self, square: Square, piece: Piece) -> Self {
        self.pieces.retain(|(sq, _)| *sq != square);
        self.pieces.push((square, piece));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _)| *sq != square);
        self
    }

    /// Set the side to move.
    #[must_use]
    pub fn side_to_move(mut self, color: Color) -> Self {
        self.active_color = color;
        self
    }

    /// Set the castle rights.
    #[must_use]
    pub fn castle_rights(mut self, rights: CastleRights) -> Self {
        self.castle_rights = rights;
        self
    }

    /// Set the en passant target square.
    #[must_use]
    pub fn en_passant(mut self, target: Square) -> Self {
        self.en_passant = Some(target);
        self
    }

    /// Set the halfmove clock.
    #[must_use]
    pub fn halfmove_clock(mut self, clock: u32) -> Self {
        self.halfmove_clock = clock;
        self
    }

    /// Set the fullmove number.
    #[must_use]
    pub fn fullmove_number(mut self, number: u32) -> Self {
        self.fullmove_number = number;
        self
    }

    /// Build the position.
    #[must_use]
    pub fn build(self) -> Position {
        let mut board = Board::empty();
        for (square, piece) in self.pieces {
            board.place(piece, square);
        }

        Position {
            board,
            castle_rights: self.castle_rights,
            en_passant: self.en_passant,
            active_color: self.active_color,
            halfmove_clock: self.halfmove_clock,
            fullmove_number: self.fullmove_number,
        }
    }
}
