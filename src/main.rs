//! sheetsmith - contact sheets via ImageMagick, page-addressable SVG via Inkscape.

mod cli;
mod config;
mod export;
mod logger;
mod sheet;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = Config::load(&cli.config)?;

    match &cli.command {
        Commands::Sheet { args } => cli::sheet::run_sheet(args, &config),
        Commands::Export { args } => cli::export::run_export(args, &config),
    }
}
