use crate::chess::{Color, ParseRoleError, Role};
use derive_more::{Display, Error, From};
use std::fmt::{self, Write};
use std::str::FromStr;

/// A chess [piece][`Role`] of a certain [`Color`].
///
/// As text, a piece is a single letter whose case carries the color:
/// **upper case is black** and lower case is white.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub struct Piece {
    role: Role,
    color: Color,
}

impl Piece {
    /// Constructs [`Piece`] from a pair of [`Role`] and [`Color`].
    #[inline(always)]
    pub fn new(role: Role, color: Color) -> Self {
        Piece { role, color }
    }

    /// This piece's [`Role`].
    #[inline(always)]
    pub fn role(&self) -> Role {
        self.role
    }

    /// This piece's [`Color`].
    #[inline(always)]
    pub fn color(&self) -> Color {
        self.color
    }

    /// The letter that encodes this piece.
    pub fn letter(&self) -> char {
        match self.color {
            Color::White => self.role.letter(),
            Color::Black => self.role.letter().to_ascii_uppercase(),
        }
    }

    /// The unicode chess symbol for this piece.
    pub fn figurine(&self) -> char {
        match (self.color, self.role) {
            (Color::White, Role::Pawn) => '♙',
            (Color::White, Role::Knight) => '♘',
            (Color::White, Role::Bishop) => '♗',
            (Color::White, Role::Rook) => '♖',
            (Color::White, Role::Queen) => '♕',
            (Color::White, Role::King) => '♔',
            (Color::Black, Role::Pawn) => '♟',
            (Color::Black, Role::Knight) => '♞',
            (Color::Black, Role::Bishop) => '♝',
            (Color::Black, Role::Rook) => '♜',
            (Color::Black, Role::Queen) => '♛',
            (Color::Black, Role::King) => '♚',
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_char(self.figurine())
        } else {
            f.write_char(self.letter())
        }
    }
}

/// The reason why parsing [`Piece`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error, From)]
#[display(fmt = "failed to parse piece")]
pub struct ParsePieceError(ParseRoleError);

impl TryFrom<char> for Piece {
    type Error = ParsePieceError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        let color = if c.is_ascii_uppercase() {
            Color::Black
        } else {
            Color::White
        };

        Ok(Piece::new(c.to_ascii_lowercase().try_into()?, color))
    }
}

impl FromStr for Piece {
    type Err = ParsePieceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => c.try_into(),
            _ => Err(ParseRoleError.into()),
        }
    }
}
