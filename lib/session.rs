use crate::chess::{Bitboard, Board, Color, Move, ParseSquareError, Square};
use derive_more::{Display, Error, From};
use std::str::FromStr;
use tracing::{debug, info, instrument};

/// An input to the [`Session`].
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, From)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum Event {
    /// A square was clicked, tapped, or otherwise picked by the player.
    #[display(fmt = "{}", _0)]
    Activate(Square),
    /// The game starts over.
    #[display(fmt = "reset")]
    #[from(ignore)]
    Reset,
}

/// The reason why parsing [`Event`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error, From)]
#[display(fmt = "failed to parse event, expected `reset` or a square such as `e2`")]
pub struct ParseEventError(ParseSquareError);

impl FromStr for Event {
    type Err = ParseEventError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "reset" => Ok(Event::Reset),
            _ => Ok(Event::Activate(s.parse()?)),
        }
    }
}

/// What a [`Session`] did in response to an [`Event`].
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Activation {
    /// The piece on this square was selected.
    #[display(fmt = "selected {}", _0)]
    Selected(Square),
    /// This move was executed and the turn passed to the opponent.
    #[display(fmt = "moved {}", _0)]
    Moved(Move),
    /// The previous selection was dropped without selecting anything else.
    #[display(fmt = "deselected")]
    Deselected,
    /// Nothing happened.
    #[display(fmt = "ignored")]
    Ignored,
    /// The board was restored to its starting layout.
    #[display(fmt = "reset")]
    Reset,
}

/// The selected square and the squares its piece may move to.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
struct Selection {
    whence: Square,
    destinations: Bitboard,
}

/// The state of a game between two players sharing the board.
///
/// A session alternates between two states, either no piece is selected,
/// or a piece of the side to move is selected and its destinations are highlighted.
/// Activating a highlighted square executes the move, anything else drops the
/// selection and is then handled as if nothing had been selected.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Session {
    board: Board,
    turn: Color,
    selection: Option<Selection>,
}

impl Default for Session {
    fn default() -> Self {
        Session::with_board(Board::default(), Color::White)
    }
}

impl Session {
    /// Starts a new game from the starting layout, white to move.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a game from an arbitrary layout.
    pub fn with_board(board: Board, turn: Color) -> Self {
        Session {
            board,
            turn,
            selection: None,
        }
    }

    /// The side to move.
    #[inline(always)]
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// The current layout of the board.
    #[inline(always)]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The selected square, if any.
    #[inline(always)]
    pub fn selected(&self) -> Option<Square> {
        self.selection.map(|s| s.whence)
    }

    /// The squares the selected piece may move to.
    #[inline(always)]
    pub fn highlights(&self) -> Bitboard {
        self.selection.map_or_else(Bitboard::empty, |s| s.destinations)
    }

    /// Handles an [`Event`].
    pub fn handle(&mut self, event: Event) -> Activation {
        match event {
            Event::Activate(sq) => self.activate(sq),
            Event::Reset => self.reset(),
        }
    }

    /// Handles the activation of a square.
    #[instrument(level = "debug", skip(self), fields(turn = %self.turn), ret)]
    pub fn activate(&mut self, sq: Square) -> Activation {
        let selection = self.selection.take();

        if let Some(s) = selection.filter(|s| s.destinations.contains(sq)) {
            let m = Move::new(s.whence, sq);
            self.board.apply(m);
            self.turn = !self.turn;
            info!(%m, turn = %self.turn, "piece moved");
            return Activation::Moved(m);
        }

        if self.select(sq) {
            Activation::Selected(sq)
        } else if selection.is_some() {
            Activation::Deselected
        } else {
            Activation::Ignored
        }
    }

    /// Drops the selection, if any, leaving the board and the turn untouched.
    pub fn deselect(&mut self) -> Activation {
        match self.selection.take() {
            Some(_) => Activation::Deselected,
            None => Activation::Ignored,
        }
    }

    /// Restores the starting layout with white to move.
    #[instrument(level = "debug", skip(self), ret)]
    pub fn reset(&mut self) -> Activation {
        *self = Session::default();
        info!("game reset");
        Activation::Reset
    }

    /// Selects the piece on the square if it belongs to the side to move.
    fn select(&mut self, whence: Square) -> bool {
        match self.board[whence] {
            Some(piece) if piece.color() == self.turn => {
                let destinations = self.board.destinations(whence, piece);
                debug!(%whence, %piece, moves = destinations.len(), "piece selected");
                self.selection = Some(Selection {
                    whence,
                    destinations,
                });

                true
            }

            _ => false,
        }
    }
}
