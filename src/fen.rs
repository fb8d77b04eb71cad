//! FEN notation: the six-field text encoding of a single position.

use std::collections::HashMap;
use std::fmt::Write as _;
use std::str::FromStr;

use once_cell::sync::Lazy;

use crate::board::Board;
use crate::error::FenError;
use crate::position::Position;
use crate::types::{CastleRights, Color, File, Piece, Rank, Square};

/// FEN of the standard starting position.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// All 16 castle-rights combinations plus "-", keyed by their canonical
/// FEN spelling. Built once; the spelling function below is its inverse.
static CASTLE_RIGHTS_FROM_FEN: Lazy<HashMap<String, CastleRights>> = Lazy::new(|| {
    let mut map = HashMap::new();
    for bits in 0..16 {
        let rights = CastleRights::from_u8(bits);
        map.insert(castle_rights_field(rights), rights);
    }
    map
});

/// The 16 legal en passant target squares (third and sixth rank only),
/// keyed by algebraic notation. "-" is handled before lookup.
#[rustfmt::skip]
static EN_PASSANT_FROM_FEN: Lazy<HashMap<&'static str, Square>> = Lazy::new(|| {
    HashMap::from([
        ("a3", Square::A3), ("b3", Square::B3), ("c3", Square::C3), ("d3", Square::D3),
        ("e3", Square::E3), ("f3", Square::F3), ("g3", Square::G3), ("h3", Square::H3),
        ("a6", Square::A6), ("b6", Square::B6), ("c6", Square::C6), ("d6", Square::D6),
        ("e6", Square::E6), ("f6", Square::F6), ("g6", Square::G6), ("h6", Square::H6),
    ])
});

impl Position {
    /// Parse a position from FEN notation.
    ///
    /// The input must consist of exactly six whitespace-separated fields:
    /// board layout, active color, castle rights, en passant target,
    /// halfmove clock and fullmove number.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let result = parse_fen(fen);
        #[cfg(feature = "logging")]
        if let Err(ref err) = result {
            log::debug!("rejected FEN {fen:?}: {err}");
        }
        result
    }

    /// Parse a position from FEN notation.
    ///
    /// # Panics
    /// Panics if the FEN string is invalid. Use [`Position::try_from_fen`]
    /// for fallible parsing.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        match Self::try_from_fen(fen) {
            Ok(position) => position,
            Err(err) => panic!("{err}"),
        }
    }

    /// Convert the position to FEN notation.
    ///
    /// The output is canonical: castle rights in K, Q, k, q order and
    /// empty-square runs as single digits. `try_from_fen` inverts it
    /// exactly.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut fen = String::new();

        for rank in Rank::ALL.iter().rev() {
            let mut empty = 0;
            for file in File::ALL {
                match self.board.get(Square::new(file, *rank)) {
                    Some(piece) => {
                        if empty > 0 {
                            write!(fen, "{empty}").unwrap();
                            empty = 0;
                        }
                        fen.push(piece.to_fen_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                write!(fen, "{empty}").unwrap();
            }
            if *rank != Rank::One {
                fen.push('/');
            }
        }

        let color = match self.active_color {
            Color::White => 'w',
            Color::Black => 'b',
        };
        let en_passant = self
            .en_passant
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        write!(
            fen,
            " {} {} {} {} {}",
            color,
            castle_rights_field(self.castle_rights),
            en_passant,
            self.halfmove_clock,
            self.fullmove_number
        )
        .unwrap();

        fen
    }
}

impl FromStr for Position {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::try_from_fen(s)
    }
}

fn parse_fen(fen: &str) -> Result<Position, FenError> {
    let fields: Vec<&str> = fen.split_whitespace().collect();
    if fields.len() != 6 {
        return Err(FenError::WrongFieldCount {
            found: fields.len(),
        });
    }

    let board = board_from_fen(fields[0])?;

    let active_color = match fields[1] {
        "w" => Color::White,
        "b" => Color::Black,
        other => {
            return Err(FenError::InvalidColor {
                found: other.to_string(),
            })
        }
    };

    let castle_rights =
        CASTLE_RIGHTS_FROM_FEN
            .get(fields[2])
            .copied()
            .ok_or_else(|| FenError::InvalidCastleRights {
                found: fields[2].to_string(),
            })?;

    let en_passant = if fields[3] == "-" {
        None
    } else {
        Some(EN_PASSANT_FROM_FEN.get(fields[3]).copied().ok_or_else(
            || FenError::InvalidEnPassant {
                found: fields[3].to_string(),
            },
        )?)
    };

    let halfmove_clock = parse_counter(fields[4])?;
    let fullmove_number = parse_counter(fields[5])?;

    Ok(Position {
        board,
        castle_rights,
        en_passant,
        active_color,
        halfmove_clock,
        fullmove_number,
    })
}

/// Scan the board field from a8, left to right then top to bottom.
///
/// Digits skip a run of empty squares, '/' drops the cursor to the start
/// of the next rank down (16 indices back), anything else must be a piece
/// letter. The cursor arithmetic wraps modulo 64, as the square helpers
/// document.
fn board_from_fen(field: &str) -> Result<Board, FenError> {
    let mut board = Board::empty();
    let mut sq = Square::A8;

    for c in field.chars() {
        match c {
            '1'..='8' => sq = sq.next_n(c as u8 - b'0'),
            '/' => sq = sq.prev_n(16),
            _ => {
                let piece =
                    Piece::from_fen_char(c).ok_or(FenError::InvalidPiece { ch: c })?;
                board.place(piece, sq);
                sq = sq.next_n(1);
            }
        }
    }

    Ok(board)
}

/// Canonical FEN spelling of a castle-rights set: "KQkq" order, or "-".
fn castle_rights_field(rights: CastleRights) -> String {
    let mut field = String::new();
    for (right, letter) in [
        (CastleRights::WHITE_KING_SIDE, 'K'),
        (CastleRights::WHITE_QUEEN_SIDE, 'Q'),
        (CastleRights::BLACK_KING_SIDE, 'k'),
        (CastleRights::BLACK_QUEEN_SIDE, 'q'),
    ] {
        if rights.contains(right) {
            field.push(letter);
        }
    }
    if field.is_empty() {
        field.push('-');
    }
    field
}

fn parse_counter(field: &str) -> Result<u32, FenError> {
    field
        .parse::<u32>()
        .map_err(|_| FenError::InvalidCounter {
            found: field.to_string(),
        })
}
