//! Move type.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::MoveParseError;

use super::piece::Role;
use super::square::Square;

/// A chess move: source and destination squares plus an optional
/// promotion role.
///
/// For castling moves, `from` and `to` are the king's start and end
/// squares; the rook relocation is derived by the move applier, not
/// stored here.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<Role>,
}

impl Move {
    /// Create a new move.
    #[inline]
    #[must_use]
    pub const fn new(from: Square, to: Square) -> Self {
        Move {
            from,
            to,
            promotion: None,
        }
    }

    /// Create a new promotion move.
    #[inline]
    #[must_use]
    pub const fn new_promotion(from: Square, to: Square, promotion: Role) -> Self {
        Move {
            from,
            to,
            promotion: Some(promotion),
        }
    }
}

impl fmt::Display for Move {
    /// Formats the move in UCI long algebraic notation (e.g. "e2e4",
    /// "e7e8q").
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(promotion) = self.promotion {
            write!(f, "{}", promotion.to_char())?;
        }
        Ok(())
    }
}

impl FromStr for Move {
    type Err = MoveParseError;

    /// Parse a move from UCI long algebraic notation.
    ///
    /// This is a purely syntactic parse; whether the move is legal in any
    /// particular position is for a legality layer to decide.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() < 4 || chars.len() > 5 {
            return Err(MoveParseError::InvalidLength { len: chars.len() });
        }

        let square = |file: char, rank: char| {
            String::from_iter([file, rank])
                .parse::<Square>()
                .map_err(|_| MoveParseError::InvalidSquare {
                    notation: s.to_string(),
                })
        };
        let from = square(chars[0], chars[1])?;
        let to = square(chars[2], chars[3])?;

        let promotion = match chars.get(4) {
            None => None,
            Some(&c) => {
                let role =
                    Role::from_char(c).ok_or(MoveParseError::InvalidPromotion { ch: c })?;
                if matches!(role, Role::Pawn | Role::King) {
                    return Err(MoveParseError::InvalidPromotion { ch: c });
                }
                Some(role)
            }
        };

        Ok(Move {
            from,
            to,
            promotion,
        })
    }
}
