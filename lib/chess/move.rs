use crate::chess::{ParseSquareError, Square};
use derive_more::{Constructor, DebugCustom, Display, Error, From};
use std::str::FromStr;

/// A chess move in [pure coordinate notation].
///
/// [pure coordinate notation]: https://www.chessprogramming.org/Algebraic_Chess_Notation#Pure_coordinate_notation
#[derive(DebugCustom, Display, Copy, Clone, Eq, PartialEq, Hash, Constructor)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[cfg_attr(test, filter(#self.whence != #self.whither))]
#[debug(fmt = "Move({self})")]
#[display(fmt = "{}{}", whence, whither)]
pub struct Move {
    whence: Square,
    whither: Square,
}

impl Move {
    /// The source [`Square`].
    #[inline(always)]
    pub fn whence(&self) -> Square {
        self.whence
    }

    /// The destination [`Square`].
    #[inline(always)]
    pub fn whither(&self) -> Square {
        self.whither
    }
}

/// The reason why parsing [`Move`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error, From)]
#[display(fmt = "failed to parse move, expected a pair of squares such as `e2e4`")]
pub struct ParseMoveError(ParseSquareError);

impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let i = s.char_indices().nth(2).map_or_else(|| s.len(), |(i, _)| i);
        Ok(Move::new(s[..i].parse()?, s[i..].parse()?))
    }
}
