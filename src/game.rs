//! Game history: an append-only sequence of positions and moves.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{FenError, MoveParseError};
use crate::position::Position;
use crate::types::Move;

/// The history of a chess game.
///
/// Holds every position reached (one more than the number of moves
/// played; index 0 is the starting position) and every move played.
/// The history is append-only.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Game {
    positions: Vec<Position>,
    moves: Vec<Move>,
}

impl Game {
    /// Create a new game from the standard starting position.
    #[must_use]
    pub fn new() -> Self {
        Game {
            positions: vec![Position::new()],
            moves: Vec::new(),
        }
    }

    /// Create a new game whose starting position is parsed from FEN.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        Ok(Game {
            positions: vec![Position::try_from_fen(fen)?],
            moves: Vec::new(),
        })
    }

    /// The position the game started from.
    #[must_use]
    pub fn starting_position(&self) -> &Position {
        &self.positions[0]
    }

    /// The latest position of the game.
    #[must_use]
    pub fn current_position(&self) -> &Position {
        self.positions.last().expect("history is never empty")
    }

    /// Every position reached, in order. One longer than [`Game::moves`].
    #[must_use]
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    /// Every move played, in order.
    #[must_use]
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Half moves since the last capture or pawn advance.
    #[must_use]
    pub fn halfmove_clock(&self) -> u32 {
        self.current_position().halfmove_clock
    }

    /// The full move number of the next move.
    #[must_use]
    pub fn fullmove_number(&self) -> u32 {
        self.current_position().fullmove_number
    }

    /// FEN of the current position.
    #[must_use]
    pub fn to_fen(&self) -> String {
        self.current_position().to_fen()
    }

    /// Apply a move to the game. The move must be legal.
    ///
    /// The resulting position and the move are appended to the history.
    pub fn play(&mut self, m: Move) {
        let mut position = *self.current_position();
        position.apply(m);
        #[cfg(feature = "logging")]
        log::trace!(
            "move {}: {m}",
            self.moves.len() + 1
        );
        self.positions.push(position);
        self.moves.push(m);
    }

    /// Parse a move in UCI long algebraic notation and play it.
    ///
    /// The parse is syntactic only; the move must still be legal.
    pub fn play_uci(&mut self, uci: &str) -> Result<Move, MoveParseError> {
        let m: Move = uci.parse()?;
        self.play(m);
        Ok(m)
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}
