use crate::chess::{Color, Move, ParsePieceError, Piece, Role, Square};
use derive_more::{Display, Error, From};
use std::fmt::{self, Write};
use std::ops::{Index, IndexMut};
use std::str::FromStr;
use tracing::instrument;

/// The chess board.
///
/// Holds what occupies each of the 64 squares and nothing else,
/// in particular it does not validate the placement it holds.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

// We provide a custom implementation of Arbitrary rather than deriving,
// otherwise proptest overflows the stack generating large arrays.
#[cfg(test)]
impl proptest::arbitrary::Arbitrary for Board {
    type Parameters = ();
    type Strategy = proptest::strategy::BoxedStrategy<Board>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        use proptest::prelude::*;

        proptest::collection::vec(any::<Option<Piece>>(), 64)
            .prop_map(|v| {
                let mut board = Board::empty();

                board
                    .squares
                    .iter_mut()
                    .flatten()
                    .zip(v)
                    .for_each(|(s, p)| *s = p);

                board
            })
            .boxed()
    }
}

impl Default for Board {
    fn default() -> Self {
        let mut board = Board::empty();
        board.reset();
        board
    }
}

impl Board {
    /// The major pieces on a back row, ordered by column.
    const BACK_ROW: [Role; 8] = [
        Role::Rook,
        Role::Knight,
        Role::Bishop,
        Role::Queen,
        Role::King,
        Role::Bishop,
        Role::Knight,
        Role::Rook,
    ];

    /// A board without any pieces.
    pub fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    /// The [`Piece`] on the given [`Square`], if any.
    #[inline(always)]
    pub fn get(&self, sq: Square) -> Option<Piece> {
        self[sq]
    }

    /// Places an occupant on the given [`Square`].
    #[inline(always)]
    pub fn set(&mut self, sq: Square, occupant: Option<Piece>) {
        self[sq] = occupant;
    }

    /// Restores the starting layout.
    pub fn reset(&mut self) {
        *self = Board::empty();

        for c in [Color::White, Color::Black] {
            for (col, role) in (0..).zip(Self::BACK_ROW) {
                self.set(Square::new(c.back_row(), col), Some(Piece::new(role, c)));
                self.set(Square::new(c.pawn_row(), col), Some(Piece::new(Role::Pawn, c)));
            }
        }
    }

    /// Moves whatever occupies the source square onto the destination square.
    ///
    /// Whatever stood on the destination is discarded.
    /// The move is assumed to be legal, it is not checked again.
    pub fn apply(&mut self, m: Move) {
        debug_assert!(self[m.whence()].is_some(), "no piece to move on {}", m.whence());
        self[m.whither()] = self[m.whence()].take();
    }

    /// An iterator over all pieces on the board.
    pub fn iter(&self) -> impl Iterator<Item = (Piece, Square)> + '_ {
        Square::iter().filter_map(|sq| Some((self[sq]?, sq)))
    }
}

impl Index<Square> for Board {
    type Output = Option<Piece>;

    #[inline(always)]
    fn index(&self, sq: Square) -> &Self::Output {
        &self.squares[sq.row() as usize][sq.col() as usize]
    }
}

impl IndexMut<Square> for Board {
    #[inline(always)]
    fn index_mut(&mut self, sq: Square) -> &mut Self::Output {
        &mut self.squares[sq.row() as usize][sq.col() as usize]
    }
}

/// Prints the placement row by row starting from row 0,
/// with digits standing for runs of empty squares.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.squares.iter().enumerate() {
            if i > 0 {
                f.write_char('/')?;
            }

            let mut skip = 0;
            for occupant in row {
                match occupant {
                    None => skip += 1,
                    Some(p) => {
                        if skip > 0 {
                            write!(f, "{skip}")?;
                            skip = 0;
                        }

                        fmt::Display::fmt(p, f)?;
                    }
                }
            }

            if skip > 0 {
                write!(f, "{skip}")?;
            }
        }

        Ok(())
    }
}

/// The reason why parsing [`Board`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error, From)]
pub enum ParseBoardError {
    #[display(fmt = "failed to parse board, expected 8 rows separated by `/`")]
    #[from(ignore)]
    InvalidRowCount,
    #[display(fmt = "failed to parse board, expected every row to span 8 squares")]
    #[from(ignore)]
    InvalidRowLength,
    #[display(fmt = "failed to parse board")]
    InvalidPiece(ParsePieceError),
}

impl FromStr for Board {
    type Err = ParseBoardError;

    #[instrument(level = "trace", err)]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<_> = s.split('/').collect();
        if rows.len() != 8 {
            return Err(ParseBoardError::InvalidRowCount);
        }

        let mut board = Board::empty();

        for (row, text) in (0u8..).zip(rows) {
            let mut col = 0u8;
            for c in text.chars() {
                match c.to_digit(10) {
                    Some(n @ 1..=8) => col += n as u8,
                    _ => {
                        if col >= 8 {
                            return Err(ParseBoardError::InvalidRowLength);
                        }

                        board.set(Square::new(row, col), Some(c.try_into()?));
                        col += 1;
                    }
                }

                if col > 8 {
                    return Err(ParseBoardError::InvalidRowLength);
                }
            }

            if col != 8 {
                return Err(ParseBoardError::InvalidRowLength);
            }
        }

        Ok(board)
    }
}
