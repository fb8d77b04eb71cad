//! Prelude module for convenient imports.
//!
//! Re-exports the most commonly used types.
//!
//! # Example
//! ```
//! use chess_core::prelude::*;
//! ```

pub use crate::{
    Bitboard, Board, CastleRights, Color, FenError, File, Game, Move, MoveParseError, Piece,
    Position, PositionBuilder, Rank, Role, Square, SquareError, STARTING_FEN,
};
