//! Square, file and rank types.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::SquareError;

/// A file (column) on the chess board, `A` through `H`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum File {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
}

impl File {
    /// All files in index order (a = 0)
    pub const ALL: [File; 8] = [
        File::A,
        File::B,
        File::C,
        File::D,
        File::E,
        File::F,
        File::G,
        File::H,
    ];

    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> u8 {
        self as u8
    }

    #[inline]
    #[must_use]
    pub(crate) const fn from_index(idx: u8) -> File {
        File::ALL[(idx & 7) as usize]
    }
}

/// A rank (row) on the chess board, `One` (White's back rank) through `Eight`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Rank {
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
}

impl Rank {
    /// All ranks in index order (rank 1 = 0)
    pub const ALL: [Rank; 8] = [
        Rank::One,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
    ];

    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> u8 {
        self as u8
    }

    #[inline]
    #[must_use]
    pub(crate) const fn from_index(idx: u8) -> Rank {
        Rank::ALL[(idx & 7) as usize]
    }
}

/// A square on the chess board, stored as an index 0-63.
///
/// Squares are ordered left to right, then bottom to top: a1 = 0, b1 = 1,
/// ..., h1 = 7, a2 = 8, ..., h8 = 63.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(u8);

#[rustfmt::skip]
impl Square {
    pub const A1: Square = Square(0);
    pub const B1: Square = Square(1);
    pub const C1: Square = Square(2);
    pub const D1: Square = Square(3);
    pub const E1: Square = Square(4);
    pub const F1: Square = Square(5);
    pub const G1: Square = Square(6);
    pub const H1: Square = Square(7);
    pub const A2: Square = Square(8);
    pub const B2: Square = Square(9);
    pub const C2: Square = Square(10);
    pub const D2: Square = Square(11);
    pub const E2: Square = Square(12);
    pub const F2: Square = Square(13);
    pub const G2: Square = Square(14);
    pub const H2: Square = Square(15);
    pub const A3: Square = Square(16);
    pub const B3: Square = Square(17);
    pub const C3: Square = Square(18);
    pub const D3: Square = Square(19);
    pub const E3: Square = Square(20);
    pub const F3: Square = Square(21);
    pub const G3: Square = Square(22);
    pub const H3: Square = Square(23);
    pub const A4: Square = Square(24);
    pub const B4: Square = Square(25);
    pub const C4: Square = Square(26);
    pub const D4: Square = Square(27);
    pub const E4: Square = Square(28);
    pub const F4: Square = Square(29);
    pub const G4: Square = Square(30);
    pub const H4: Square = Square(31);
    pub const A5: Square = Square(32);
    pub const B5: Square = Square(33);
    pub const C5: Square = Square(34);
    pub const D5: Square = Square(35);
    pub const E5: Square = Square(36);
    pub const F5: Square = Square(37);
    pub const G5: Square = Square(38);
    pub const H5: Square = Square(39);
    pub const A6: Square = Square(40);
    pub const B6: Square = Square(41);
    pub const C6: Square = Square(42);
    pub const D6: Square = Square(43);
    pub const E6: Square = Square(44);
    pub const F6: Square = Square(45);
    pub const G6: Square = Square(46);
    pub const H6: Square = Square(47);
    pub const A7: Square = Square(48);
    pub const B7: Square = Square(49);
    pub const C7: Square = Square(50);
    pub const D7: Square = Square(51);
    pub const E7: Square = Square(52);
    pub const F7: Square = Square(53);
    pub const G7: Square = Square(54);
    pub const H7: Square = Square(55);
    pub const A8: Square = Square(56);
    pub const B8: Square = Square(57);
    pub const C8: Square = Square(58);
    pub const D8: Square = Square(59);
    pub const E8: Square = Square(60);
    pub const F8: Square = Square(61);
    pub const G8: Square = Square(62);
    pub const H8: Square = Square(63);
}

impl Square {
    /// Create a square at the given file and rank.
    #[inline]
    #[must_use]
    pub const fn new(file: File, rank: Rank) -> Self {
        Square(rank.index() * 8 + file.index())
    }

    /// Get the file the square is on.
    #[inline]
    #[must_use]
    pub const fn file(self) -> File {
        File::from_index(self.0 % 8)
    }

    /// Get the rank the square is on.
    #[inline]
    #[must_use]
    pub const fn rank(self) -> Rank {
        Rank::from_index(self.0 / 8)
    }

    /// Get the square's index (0-63, a1 = 0, h8 = 63).
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    #[must_use]
    pub(crate) const fn from_index(idx: u8) -> Self {
        Square(idx & 63)
    }

    /// The square one rank up, wrapping around the top of the board.
    ///
    /// Wraparound is an artifact of the index arithmetic, not a geometric
    /// adjacency. Callers on board edges must know what they are doing;
    /// the move applier only calls this where a square above/below is
    /// guaranteed to exist.
    #[inline]
    #[must_use]
    pub(crate) const fn above(self) -> Self {
        Square((self.0 + 8) % 64)
    }

    /// The square one rank down, wrapping around the bottom of the board.
    #[inline]
    #[must_use]
    pub(crate) const fn below(self) -> Self {
        Square(self.0.wrapping_sub(8) % 64)
    }

    /// The square `n` indices after this one, wrapping around.
    ///
    /// Exists for the FEN board scanner (skipping empty-square runs);
    /// wrapped results cross board edges and are not adjacency.
    #[inline]
    #[must_use]
    pub(crate) const fn next_n(self, n: u8) -> Self {
        Square((self.0 + n) % 64)
    }

    /// The square `n` indices before this one, wrapping around.
    ///
    /// Exists for the FEN board scanner's rank-to-rank jump.
    #[inline]
    #[must_use]
    pub(crate) const fn prev_n(self, n: u8) -> Self {
        Square(self.0.wrapping_sub(n) % 64)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            (b'a' + self.file().index()) as char,
            self.rank().index() + 1
        )
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(SquareError::InvalidNotation {
                notation: s.to_string(),
            });
        };

        if !('a'..='h').contains(&file) || !('1'..='8').contains(&rank) {
            return Err(SquareError::InvalidNotation {
                notation: s.to_string(),
            });
        }

        Ok(Square::new(
            File::from_index(file as u8 - b'a'),
            Rank::from_index(rank as u8 - b'1'),
        ))
    }
}
