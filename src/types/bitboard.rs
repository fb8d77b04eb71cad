//! Bitboard type and operations.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::square::Square;

/// A 64-bit set of squares, one bit per square.
///
/// From LSB to MSB, the bits represent a1, b1, ..., h1, a2, ..., h8.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Bitboard(pub u64);

impl Bitboard {
    pub const EMPTY: Bitboard = Bitboard(0);
    pub const ALL: Bitboard = Bitboard(!0);

    /// Create a bitboard with a single square set
    #[inline]
    #[must_use]
    pub const fn from_square(sq: Square) -> Self {
        Bitboard(1 << sq.index())
    }

    /// Returns true if the given square is set
    #[inline]
    #[must_use]
    pub const fn contains(self, sq: Square) -> bool {
        self.0 & (1 << sq.index()) != 0
    }

    /// Set `sq` and return the bitboard for chaining.
    #[inline]
    pub fn set(&mut self, sq: Square) -> &mut Self {
        self.0 |= 1 << sq.index();
        self
    }

    /// Clear `sq` and return the bitboard for chaining.
    #[inline]
    pub fn clear(&mut self, sq: Square) -> &mut Self {
        self.0 &= !(1 << sq.index());
        self
    }

    /// Toggle `sq` and return the bitboard for chaining.
    #[inline]
    pub fn toggle(&mut self, sq: Square) -> &mut Self {
        self.0 ^= 1 << sq.index();
        self
    }

    /// Returns true if no square is set
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the number of set squares (population count)
    #[inline]
    #[must_use]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// Returns an iterator over the squares set in this bitboard
    #[inline]
    #[must_use]
    pub fn iter(self) -> BitboardIter {
        BitboardIter(self)
    }
}

impl fmt::Display for Bitboard {
    /// Renders the set as an 8x8 grid, rank 8 first.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8).rev() {
            for file in 0..8 {
                let bit = 1u64 << (rank * 8 + file);
                write!(f, "{}", if self.0 & bit != 0 { '1' } else { '.' })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

fn pop_lsb(bb: &mut Bitboard) -> Square {
    let idx = bb.0.trailing_zeros() as u8;
    bb.0 &= bb.0 - 1;
    Square::from_index(idx)
}

/// Iterator over set squares in a `Bitboard`, lowest index first
pub struct BitboardIter(Bitboard);

impl Iterator for BitboardIter {
    type Item = Square;

    fn next(&mut self) -> Option<Self::Item> {
        if self.0.is_empty() {
            None
        } else {
            Some(pop_lsb(&mut self.0))
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.0.count() as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for BitboardIter {}
