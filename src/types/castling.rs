//! Castle rights type.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The castling rights of both players, as a 4-bit set.
///
/// Rights are advisory: nothing ties them to the actual king and rook
/// placement. The move applier only ever clears rights; it never grants
/// them back.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CastleRights(u8);

impl CastleRights {
    pub const NONE: CastleRights = CastleRights(0);
    pub const WHITE_KING_SIDE: CastleRights = CastleRights(1 << 0);
    pub const WHITE_QUEEN_SIDE: CastleRights = CastleRights(1 << 1);
    pub const BLACK_KING_SIDE: CastleRights = CastleRights(1 << 2);
    pub const BLACK_QUEEN_SIDE: CastleRights = CastleRights(1 << 3);
    /// Both of White's rights
    pub const WHITE: CastleRights = CastleRights(0b0011);
    /// Both of Black's rights
    pub const BLACK: CastleRights = CastleRights(0b1100);
    pub const ALL: CastleRights = CastleRights(0b1111);

    /// Returns true if any of the given rights are set.
    #[inline]
    #[must_use]
    pub const fn contains(self, rights: CastleRights) -> bool {
        self.0 & rights.0 != 0
    }

    /// Set the given rights and return self for chaining.
    #[inline]
    pub fn set(&mut self, rights: CastleRights) -> &mut Self {
        self.0 |= rights.0;
        self
    }

    /// Clear the given rights and return self for chaining.
    #[inline]
    pub fn clear(&mut self, rights: CastleRights) -> &mut Self {
        self.0 &= !rights.0;
        self
    }

    /// Returns true if no rights are set
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Get the raw bitmask value
    #[inline]
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self.0
    }

    /// Create from a raw bitmask value (low 4 bits)
    #[inline]
    #[must_use]
    pub const fn from_u8(value: u8) -> Self {
        CastleRights(value & 0b1111)
    }
}
