//! Core chess state: bitboard piece placement, move application and FEN
//! notation.
//!
//! This crate models positions and their evolution under legal moves.
//! It does not generate moves or judge legality; a legality layer is
//! expected to validate moves before handing them to [`Position::apply`]
//! or [`Game::play`].
//!
//! # Example
//! ```
//! use chess_core::{Game, Position, STARTING_FEN};
//!
//! let mut game = Game::new();
//! game.play_uci("e2e4").unwrap();
//! game.play_uci("e7e5").unwrap();
//!
//! let position = Position::try_from_fen(STARTING_FEN).unwrap();
//! assert_eq!(position.to_fen(), STARTING_FEN);
//! ```

mod board;
mod builder;
mod error;
mod fen;
mod game;
mod position;
pub mod prelude;
mod types;

#[cfg(test)]
mod tests;

pub use board::Board;
pub use builder::PositionBuilder;
pub use error::{FenError, MoveParseError, SquareError};
pub use fen::STARTING_FEN;
pub use game::Game;
pub use position::Position;
pub use types::{Bitboard, BitboardIter, CastleRights, Color, File, Move, Piece, Rank, Role, Square};
