use crate::chess::Bitboard;
use derive_more::{Display, Error};
use std::{fmt, ops::Sub, str::FromStr};

/// A square on the chess board.
///
/// Squares are addressed by row and column, both in the range `(0..=7)`.
/// Row 0 is black's back row, row 7 is white's.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub struct Square(#[cfg_attr(test, strategy(0u8..64))] u8);

impl Square {
    /// Constructs [`Square`] from a pair of row and column.
    ///
    /// # Panics
    ///
    /// Panics if either `row` or `col` is not in the range (0..=7).
    #[inline(always)]
    pub fn new(row: u8, col: u8) -> Self {
        assert!(row < 8 && col < 8, "square ({row}, {col}) is off the board");
        Square(row * 8 + col)
    }

    /// Constructs [`Square`] from its index in row-major order.
    ///
    /// # Panics
    ///
    /// Panics if `i` is not in the range (0..=63).
    #[inline(always)]
    pub fn from_index(i: u8) -> Self {
        assert!(i < 64, "square index {i} is off the board");
        Square(i)
    }

    /// This square's index in row-major order.
    #[inline(always)]
    pub fn index(&self) -> u8 {
        self.0
    }

    /// This square's row.
    #[inline(always)]
    pub fn row(&self) -> u8 {
        self.0 / 8
    }

    /// This square's column.
    #[inline(always)]
    pub fn col(&self) -> u8 {
        self.0 % 8
    }

    /// Returns a [`Bitboard`] that only contains this square.
    #[inline(always)]
    pub fn bitboard(self) -> Bitboard {
        Bitboard::new(1 << self.0)
    }

    /// Returns an iterator over all [`Square`]s in row-major order.
    pub fn iter() -> impl DoubleEndedIterator<Item = Self> + ExactSizeIterator {
        (0..64).map(Square)
    }
}

/// The displacement between two squares as a pair of row and column deltas.
impl Sub for Square {
    type Output = (i8, i8);

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self::Output {
        (
            self.row() as i8 - rhs.row() as i8,
            self.col() as i8 - rhs.col() as i8,
        )
    }
}

/// The reason why converting a pair of coordinates to a [`Square`] failed.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Error)]
#[display(fmt = "expected row and column in the range `(0..=7)`")]
pub struct SquareOutOfRange;

impl TryFrom<(u8, u8)> for Square {
    type Error = SquareOutOfRange;

    fn try_from((row, col): (u8, u8)) -> Result<Self, Self::Error> {
        if row < 8 && col < 8 {
            Ok(Square::new(row, col))
        } else {
            Err(SquareOutOfRange)
        }
    }
}

/// Prints the square in algebraic coordinates, e.g. `(6, 4)` is `e2`.
impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = char::from(b'a' + self.col());
        let rank = char::from(b'8' - self.row());
        write!(f, "{file}{rank}")
    }
}

/// The reason why parsing [`Square`] failed.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Error)]
#[display(fmt = "failed to parse square, expected a file in `(a..=h)` followed by a rank in `(1..=8)`")]
pub struct ParseSquareError;

impl FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.as_bytes() {
            &[f @ b'a'..=b'h', r @ b'1'..=b'8'] => Ok(Square::new(b'8' - r, f - b'a')),
            _ => Err(ParseSquareError),
        }
    }
}
