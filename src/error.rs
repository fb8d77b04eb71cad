//! Error types.

use std::fmt;

/// Error type for FEN parsing failures.
///
/// Each variant names the offending field or token so the caller can
/// localize the bad input. Parsing is all-or-nothing; no partially-built
/// position ever accompanies one of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// FEN must have exactly six whitespace-separated fields
    WrongFieldCount { found: usize },
    /// Invalid piece character in the board field
    InvalidPiece { ch: char },
    /// Invalid active color field (must be 'w' or 'b')
    InvalidColor { found: String },
    /// Castling field is not one of the 16 valid combinations or "-"
    InvalidCastleRights { found: String },
    /// En passant field is not "-" or a third/sixth rank square
    InvalidEnPassant { found: String },
    /// A move counter field is not a non-negative decimal integer
    InvalidCounter { found: String },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid FEN: ")?;
        match self {
            FenError::WrongFieldCount { found } => {
                write!(f, "expected 6 fields, found {found}")
            }
            FenError::InvalidPiece { ch } => {
                write!(f, "invalid piece character '{ch}'")
            }
            FenError::InvalidColor { found } => {
                write!(f, "invalid color {found:?}, expected \"w\" or \"b\"")
            }
            FenError::InvalidCastleRights { found } => {
                write!(f, "invalid castle rights {found:?}")
            }
            FenError::InvalidEnPassant { found } => {
                write!(f, "invalid en passant square {found:?}")
            }
            FenError::InvalidCounter { found } => {
                write!(f, "invalid move counter {found:?}")
            }
        }
    }
}

impl std::error::Error for FenError {}

/// Error type for algebraic square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Not a file letter a-h followed by a rank digit 1-8
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::InvalidNotation { notation } => {
                write!(f, "invalid square notation {notation:?}")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for UCI move parsing failures.
///
/// These are syntax errors only; this crate has no notion of legality.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Move string has invalid length (must be 4-5 characters)
    InvalidLength { len: usize },
    /// Invalid square notation in move
    InvalidSquare { notation: String },
    /// Invalid promotion piece letter
    InvalidPromotion { ch: char },
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::InvalidLength { len } => {
                write!(f, "move must be 4-5 characters, found {len}")
            }
            MoveParseError::InvalidSquare { notation } => {
                write!(f, "invalid square notation in {notation:?}")
            }
            MoveParseError::InvalidPromotion { ch } => {
                write!(f, "invalid promotion piece '{ch}'")
            }
        }
    }
}

impl std::error::Error for MoveParseError {}
