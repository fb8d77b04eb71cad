//! Position state and the move-application state machine.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::types::{CastleRights, Color, Move, Piece, Rank, Role, Square};

/// An arbitrary chess position: piece placement plus the state that the
/// board alone does not capture.
///
/// A `Position` is plain value data. It is created by [`Position::new`],
/// by FEN parsing or by a [`crate::PositionBuilder`], and mutated only by
/// [`Position::apply`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Position {
    pub board: Board,
    pub castle_rights: CastleRights,
    /// The square a pawn could capture onto en passant, only ever valid
    /// for the position immediately following a double pawn advance.
    pub en_passant: Option<Square>,
    pub active_color: Color,
    /// Half moves since the last capture or pawn advance.
    pub halfmove_clock: u32,
    /// The full move number of the next move, starting at 1.
    pub fullmove_number: u32,
}

impl Position {
    /// Create the standard starting position.
    #[must_use]
    pub fn new() -> Self {
        Position {
            board: Board::new(),
            castle_rights: CastleRights::ALL,
            en_passant: None,
            active_color: Color::White,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    /// Apply a move to the position. The move must be legal.
    ///
    /// This function trusts its input: it performs no legality checking,
    /// and applying an illegal move silently corrupts the position.
    /// Returns true if the move resets the FIDE 50-move and 75-move rule
    /// counters (a pawn move or a capture). See FIDE Laws of Chess,
    /// Articles 9.3 and 9.6.2. The position's own halfmove clock and full
    /// move number are updated as part of the transition.
    ///
    /// # Panics
    /// Panics if there is no piece on `m.from`; that is a caller bug, not
    /// a recoverable condition.
    pub fn apply(&mut self, m: Move) -> bool {
        let mover = self
            .board
            .get(m.from)
            .expect("apply: no piece on the from-square");
        let capture = self.board.get(m.to).is_some();
        let reset = mover.role == Role::Pawn || capture;

        if self.active_color == Color::Black {
            self.fullmove_number += 1;
        }
        self.active_color = self.active_color.opponent();

        // The incoming right must be read before it is replaced; it decides
        // the en passant capture below.
        let prior_en_passant = self.en_passant.take();
        if mover.role == Role::Pawn {
            match (mover.color, m.from.rank(), m.to.rank()) {
                (Color::White, Rank::Two, Rank::Four) => {
                    self.en_passant = Some(m.from.above());
                }
                (Color::Black, Rank::Seven, Rank::Five) => {
                    self.en_passant = Some(m.from.below());
                }
                _ => {}
            }
        }

        self.board.remove(m.from);

        let mut lost_rights = CastleRights::NONE;
        match mover.role {
            Role::Rook => {
                lost_rights = departed_rook_right(mover.color, m.from);
            }
            Role::King => {
                lost_rights = match mover.color {
                    Color::White => CastleRights::WHITE,
                    Color::Black => CastleRights::BLACK,
                };
                // A castling move also relocates the rook; the rook gets no
                // move record of its own.
                let rook = Piece::new(mover.color, Role::Rook);
                match (m.from, m.to) {
                    (Square::E1, Square::G1) => {
                        self.board.relocate(rook, Square::H1, Square::F1);
                    }
                    (Square::E1, Square::C1) => {
                        self.board.relocate(rook, Square::A1, Square::D1);
                    }
                    (Square::E8, Square::G8) => {
                        self.board.relocate(rook, Square::H8, Square::F8);
                    }
                    (Square::E8, Square::C8) => {
                        self.board.relocate(rook, Square::A8, Square::D8);
                    }
                    _ => {}
                }
            }
            _ => {}
        }
        // Capturing a rook that never left its home square kills that
        // side's right just as surely as the rook moving away would.
        if capture {
            lost_rights.set(home_square_right(m.to));
        }
        self.castle_rights.clear(lost_rights);

        // En passant capture: the captured pawn is not on the destination
        // square but directly behind it.
        if mover.role == Role::Pawn && prior_en_passant == Some(m.to) {
            let captured_square = match mover.color {
                Color::White => m.to.below(),
                Color::Black => m.to.above(),
            };
            self.board.remove(captured_square);
        }

        let placed = match m.promotion {
            Some(role) => Piece::new(mover.color, role),
            None => mover,
        };
        self.board.place(placed, m.to);

        if reset {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock += 1;
        }

        #[cfg(feature = "logging")]
        log::trace!("applied {m}, reset={reset}");

        reset
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::new()
    }
}

/// The castle right a rook departing `from` gives up, if `from` is one of
/// its color's home squares.
const fn departed_rook_right(color: Color, from: Square) -> CastleRights {
    match (color, from) {
        (Color::White, Square::A1) => CastleRights::WHITE_QUEEN_SIDE,
        (Color::White, Square::H1) => CastleRights::WHITE_KING_SIDE,
        (Color::Black, Square::A8) => CastleRights::BLACK_QUEEN_SIDE,
        (Color::Black, Square::H8) => CastleRights::BLACK_KING_SIDE,
        _ => CastleRights::NONE,
    }
}

/// The castle right attached to a rook home square, regardless of color.
const fn home_square_right(sq: Square) -> CastleRights {
    match sq {
        Square::A1 => CastleRights::WHITE_QUEEN_SIDE,
        Square::H1 => CastleRights::WHITE_KING_SIDE,
        Square::A8 => CastleRights::BLACK_QUEEN_SIDE,
        Square::H8 => CastleRights::BLACK_KING_SIDE,
        _ => CastleRights::NONE,
    }
}
