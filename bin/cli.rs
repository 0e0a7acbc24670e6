use crate::applet::Applet;
use anyhow::Error as Anyhow;
use clap::Parser;
use std::{cmp::min, io::stderr};
use tracing::{instrument, Level};
use tracing_subscriber::{filter::Targets, fmt::layer, prelude::*, registry};

/// A two player chess board on the terminal.
///
/// The board is drawn on stdout, diagnostics go to stderr.
#[derive(Parser)]
#[clap(author, version, about)]
pub struct Cli {
    /// How much of the game to log on stderr.
    #[clap(short, long)]
    #[cfg_attr(not(debug_assertions), clap(default_value_t = Level::WARN))]
    #[cfg_attr(debug_assertions, clap(default_value_t = Level::DEBUG))]
    verbosity: Level,

    #[clap(subcommand)]
    applet: Option<Applet>,
}

impl Cli {
    /// Events from this binary and from the rules engine pass at `verbosity`,
    /// those from dependencies never above [`Level::WARN`].
    fn filter(&self) -> Targets {
        Targets::new()
            .with_target(env!("CARGO_CRATE_NAME"), self.verbosity)
            .with_target("lib", self.verbosity)
            .with_default(min(Level::WARN, self.verbosity))
    }

    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        // Lines interleave with the board, so keep them short.
        let writer = layer()
            .compact()
            .without_time()
            .with_writer(stderr);

        registry().with(self.filter()).with(writer).try_init()?;

        self.applet.unwrap_or_default().execute()
    }
}
