use anyhow::Error as Anyhow;
use clap::Parser;

mod applet;
mod cli;
mod io;
mod options;
mod render;

fn main() -> Result<(), Anyhow> {
    cli::Cli::parse().execute()
}
