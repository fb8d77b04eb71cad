//! Core chess types.
//!
//! The fundamental value types used throughout the crate:
//! - `Color`, `Role` and `Piece` - piece identity
//! - `Square`, `File` and `Rank` - board coordinates
//! - `Bitboard` - 64-bit square-set representation
//! - `Move` - move representation
//! - `CastleRights` - castling state

mod bitboard;
mod castling;
mod moves;
mod piece;
mod square;

pub use bitboard::{Bitboard, BitboardIter};
pub use castling::CastleRights;
pub use moves::Move;
pub use piece::{Color, Piece, Role};
pub use square::{File, Rank, Square};
