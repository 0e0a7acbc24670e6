use anyhow::Error as Anyhow;
use clap::Parser;
use lib::chess::{Bitboard, Board, Square};
use tracing::{info, instrument};

/// Lists the squares the piece on a square may move to.
#[derive(Debug, Parser)]
#[clap(disable_help_flag = true, disable_version_flag = true)]
pub struct Hints {
    /// The board, row by row from black's back row, upper case letters for black pieces.
    #[clap(short, long, default_value_t)]
    board: Board,

    /// The square of the piece to move.
    square: Square,
}

impl Hints {
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        let destinations = hints(&self.board, self.square);
        info!(square = %self.square, count = destinations.len());

        let squares: Vec<_> = destinations.into_iter().map(|sq| sq.to_string()).collect();
        println!("{}", squares.join(" "));

        Ok(())
    }
}

/// The destinations of whatever piece stands on the square.
fn hints(board: &Board, sq: Square) -> Bitboard {
    match board[sq] {
        Some(piece) => board.destinations(sq, piece),
        None => Bitboard::empty(),
    }
}
