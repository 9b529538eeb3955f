//! Picket CLI Application
//!
//! Command-line interface for the picker format binding core.

mod args;
mod cli;

use anyhow::Result;
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use Commands::*;

fn main() -> Result<()> {
    env_logger::init();

    let Args { date_format, time_format, command } = Args::parse();

    let mut cli = Cli::new(&date_format, &time_format);

    info!("Picket started");

    match command {
        Translate { format } => cli.translate(&format),
        Parse { text } => cli.parse(&text),
        Merge { date, time } => cli.merge(&date, &time),
        Settings { meridian, language, start_date, end_date, value } => cli.settings(
            meridian,
            &language,
            start_date.as_deref(),
            end_date.as_deref(),
            value.as_deref(),
        ),
    }
}
