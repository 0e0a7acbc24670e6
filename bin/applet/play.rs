use crate::{io::Io, options::Options, render::Render};
use anyhow::Error as Anyhow;
use clap::Parser;
use derive_more::{Display, Error};
use lib::chess::Move;
use lib::session::{Activation, Event, Session};
use std::io::{stdin, stdout, ErrorKind, Read, Write};
use std::str::FromStr;
use tracing::{instrument, warn};

/// Play a game of chess on the terminal.
#[derive(Debug, Default, Parser)]
#[clap(disable_help_flag = true, disable_version_flag = true)]
pub struct Play {
    /// How to draw the board.
    #[clap(short, long, default_value_t)]
    options: Options,
}

impl Play {
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        let mut io = Io::new(stdout(), stdin());
        self.run(&mut io)?;
        Ok(())
    }

    /// Plays until the input ends or the player quits.
    fn run<W: Write, R: Read>(&self, io: &mut Io<W, R>) -> Result<Session, Anyhow> {
        let mut session = Session::new();

        loop {
            io.send(Render::new(&session, &self.options))?;
            io.flush()?;

            let line = match io.recv() {
                Err(e) if e.kind() == ErrorKind::UnexpectedEof => break,
                line => line?,
            };

            match line.trim().parse() {
                Ok(Command::Quit) => break,
                Ok(Command::Event(e)) => io.send(session.handle(e))?,
                Ok(Command::Move(m)) => {
                    // The shorthand never completes a pending selection.
                    session.deselect();
                    match session.activate(m.whence()) {
                        Activation::Selected(_) => io.send(session.activate(m.whither()))?,
                        activation => io.send(activation)?,
                    }
                }

                Err(e) => {
                    warn!(%line, "{}", e);
                    io.send(e)?;
                }
            }
        }

        Ok(session)
    }
}

/// A line of input.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Command {
    Event(Event),
    Move(Move),
    Quit,
}

/// The reason why parsing [`Command`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(fmt = "expected a square such as `e2`, a move such as `e2e4`, `reset` or `quit`")]
struct ParseCommandError;

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "quit" {
            Ok(Command::Quit)
        } else if let Ok(e) = s.parse() {
            Ok(Command::Event(e))
        } else if let Ok(m) = s.parse() {
            Ok(Command::Move(m))
        } else {
            Err(ParseCommandError)
        }
    }
}
