use crate::options::Options;
use derive_more::Constructor;
use lib::chess::{Color, Square};
use lib::session::Session;
use std::fmt::{self, Display, Formatter, Write};

/// Draws a [`Session`] as a grid of text.
///
/// The selected square is drawn in brackets, the squares it may move to are
/// marked with `*` when empty or drawn in parentheses when occupied.
#[derive(Debug, Copy, Clone, Constructor)]
pub struct Render<'a> {
    session: &'a Session,
    options: &'a Options,
}

impl Render<'_> {
    fn files(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("  ")?;
        for col in 0..8u8 {
            write!(f, " {} ", char::from(b'a' + col))?;
        }

        f.write_char('\n')
    }

    fn cell(&self, f: &mut Formatter<'_>, sq: Square) -> fmt::Result {
        let board = self.session.board();

        let symbol = match board[sq] {
            None => '.',
            Some(p) if self.options.figurines => p.figurine(),
            Some(p) => p.letter(),
        };

        let (open, close) = if self.session.selected() == Some(sq) {
            ('[', ']')
        } else if self.session.highlights().contains(sq) {
            match board[sq] {
                None => return f.write_str(" * "),
                Some(_) => ('(', ')'),
            }
        } else {
            (' ', ' ')
        };

        write!(f, "{open}{symbol}{close}")
    }
}

impl Display for Render<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.options.coordinates {
            self.files(f)?;
        }

        for row in 0..8u8 {
            let rank = 8 - row;

            if self.options.coordinates {
                write!(f, "{rank} ")?;
            }

            for col in 0..8u8 {
                self.cell(f, Square::new(row, col))?;
            }

            if self.options.coordinates {
                write!(f, " {rank}")?;
            }

            f.write_char('\n')?;
        }

        if self.options.coordinates {
            self.files(f)?;
        }

        let turn = match self.session.turn() {
            Color::White => "White",
            Color::Black => "Black",
        };

        write!(f, "Turn: {turn}")
    }
}
