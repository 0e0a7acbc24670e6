use crate::chess::Square;
use derive_more::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Constructor, Not};
use std::fmt::{self, Write};

/// A set of squares on a chess board.
#[derive(
    Default,
    Copy,
    Clone,
    Eq,
    PartialEq,
    Hash,
    Constructor,
    BitAnd,
    BitAndAssign,
    BitOr,
    BitOrAssign,
    Not,
)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[repr(transparent)]
pub struct Bitboard(u64);

impl fmt::Debug for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('\n')?;
        for sq in Square::iter() {
            f.write_char(if self.contains(sq) { '■' } else { '◻' })?;
            f.write_char(if sq.col() < 7 { ' ' } else { '\n' })?;
        }

        Ok(())
    }
}

impl Bitboard {
    /// An empty board.
    #[inline(always)]
    pub const fn empty() -> Self {
        Bitboard(0)
    }

    /// The number of [`Square`]s in the set.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.0.count_ones() as _
    }

    /// Whether the board is empty.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Whether this [`Square`] is in the set.
    #[inline(always)]
    pub fn contains(&self, sq: Square) -> bool {
        !(*self & sq.bitboard()).is_empty()
    }

    /// Adds a [`Square`] to this bitboard.
    #[inline(always)]
    pub fn with(self, sq: Square) -> Self {
        self | sq.bitboard()
    }

    /// Removes a [`Square`]s from this bitboard.
    #[inline(always)]
    pub fn without(self, sq: Square) -> Self {
        self & !sq.bitboard()
    }
}

/// An iterator over the [`Square`]s in a [`Bitboard`].
#[derive(Debug)]
pub struct Squares(Bitboard);

impl Iterator for Squares {
    type Item = Square;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        if self.0.is_empty() {
            None
        } else {
            let sq = Square::from_index(self.0 .0.trailing_zeros() as _);
            self.0 = self.0.without(sq);
            Some(sq)
        }
    }

    #[inline(always)]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl ExactSizeIterator for Squares {
    #[inline(always)]
    fn len(&self) -> usize {
        self.0.len()
    }
}

impl IntoIterator for Bitboard {
    type Item = Square;
    type IntoIter = Squares;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter {
        Squares(self)
    }
}

impl FromIterator<Square> for Bitboard {
    #[inline(always)]
    fn from_iter<I: IntoIterator<Item = Square>>(iter: I) -> Self {
        iter.into_iter().fold(Bitboard::empty(), Bitboard::with)
    }
}
