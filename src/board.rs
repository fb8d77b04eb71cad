//! Piece placement keyed by bitboards.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::types::{Bitboard, Color, Piece, Role, Square};

/// The placement of pieces on the 64 squares.
///
/// Represented as six role bitboards (occupancy per role, either color)
/// and two color bitboards (occupancy per color, any role). Invariants:
/// every square is set in at most one role bitboard and at most one color
/// bitboard, and an occupied square is set in exactly one of each.
/// `place` and `relocate` preserve this by clearing the destination
/// across all eight bitboards before setting the mover's bits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Board {
    roles: [Bitboard; 6],
    colors: [Bitboard; 2],
}

/// The standard starting placement.
const STARTING: Board = Board {
    roles: [
        Bitboard(0x00FF_0000_0000_FF00), // Pawns
        Bitboard(0x4200_0000_0000_0042), // Knights
        Bitboard(0x2400_0000_0000_0024), // Bishops
        Bitboard(0x8100_0000_0000_0081), // Rooks
        Bitboard(0x0800_0000_0000_0008), // Queens
        Bitboard(0x1000_0000_0000_0010), // Kings
    ],
    colors: [
        Bitboard(0x0000_0000_0000_FFFF), // White
        Bitboard(0xFFFF_0000_0000_0000), // Black
    ],
};

impl Board {
    /// Create a board with all pieces in their starting positions.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        STARTING
    }

    /// Create a board with no pieces on it.
    #[inline]
    #[must_use]
    pub const fn empty() -> Self {
        Board {
            roles: [Bitboard::EMPTY; 6],
            colors: [Bitboard::EMPTY; 2],
        }
    }

    /// Get the piece at the given square, if any.
    #[must_use]
    pub fn get(&self, sq: Square) -> Option<Piece> {
        for role in Role::ALL {
            if self.roles[role.index()].contains(sq) {
                let color = if self.colors[Color::White.index()].contains(sq) {
                    Color::White
                } else {
                    Color::Black
                };
                return Some(Piece::new(color, role));
            }
        }
        None
    }

    /// Set a piece on a square, removing any piece previously occupying it.
    pub fn place(&mut self, piece: Piece, sq: Square) {
        self.remove(sq);
        self.roles[piece.role.index()].set(sq);
        self.colors[piece.color.index()].set(sq);
    }

    /// Remove the piece on a square, if any.
    pub fn remove(&mut self, sq: Square) {
        for bb in &mut self.roles {
            bb.clear(sq);
        }
        for bb in &mut self.colors {
            bb.clear(sq);
        }
    }

    /// Move a piece between squares, removing any piece previously
    /// occupying the destination.
    pub fn relocate(&mut self, piece: Piece, from: Square, to: Square) {
        self.remove(to);
        self.roles[piece.role.index()].clear(from).set(to);
        self.colors[piece.color.index()].clear(from).set(to);
    }

    /// Bitboard of squares occupied by the given role, either color.
    #[inline]
    #[must_use]
    pub const fn by_role(&self, role: Role) -> Bitboard {
        self.roles[role.index()]
    }

    /// Bitboard of squares occupied by the given color, any role.
    #[inline]
    #[must_use]
    pub const fn by_color(&self, color: Color) -> Bitboard {
        self.colors[color.index()]
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}
