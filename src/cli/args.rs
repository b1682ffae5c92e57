//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::DEFAULT_CONFIG_FILE;

/// Contact sheets and page-addressable SVG exports
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (optional, defaults are used when missing)
    #[arg(short = 'C', long, global = true, default_value = DEFAULT_CONFIG_FILE, value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Compose images into a contact sheet with ImageMagick
    #[command(visible_alias = "s")]
    Sheet {
        #[command(flatten)]
        args: SheetArgs,
    },

    /// Export an Inkscape SVG as plain SVG with one <view> per page
    ///
    /// A page labeled "enter_fullscreen" becomes reachable as
    /// output.svg#page-enter-fullscreen.
    #[command(visible_alias = "e")]
    Export {
        #[command(flatten)]
        args: ExportArgs,
    },
}

/// Sheet command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct SheetArgs {
    /// Images to place, in order. Paths are passed to ImageMagick unescaped;
    /// only use trusted file names.
    #[arg(required = true, value_hint = clap::ValueHint::FilePath)]
    pub images: Vec<PathBuf>,

    /// Output image (format follows the extension)
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: PathBuf,

    /// JSON file with explicit regions instead of a grid
    #[arg(short, long, value_hint = clap::ValueHint::FilePath, conflicts_with_all = ["columns", "cell_width", "cell_height", "gap"])]
    pub regions: Option<PathBuf>,

    /// Grid columns
    #[arg(short, long, default_value_t = 4)]
    pub columns: u32,

    /// Grid cell width in pixels
    #[arg(short = 'W', long, default_value_t = 256)]
    pub cell_width: u32,

    /// Grid cell height in pixels
    #[arg(short = 'H', long, default_value_t = 256)]
    pub cell_height: u32,

    /// Space between grid cells in pixels
    #[arg(short, long, default_value_t = 0)]
    pub gap: u32,

    /// Fail when the number of images and regions differ instead of
    /// dropping the extras
    #[arg(long)]
    pub strict: bool,

    /// Print the ImageMagick command without running it
    #[arg(short = 'n', long)]
    pub dry_run: bool,
}

/// Export command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct ExportArgs {
    /// Input Inkscape SVG
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub input: PathBuf,

    /// Output plain SVG that will be used in the web page
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub output: PathBuf,

    /// Skip the Inkscape export and only patch an existing output file
    #[arg(long)]
    pub no_convert: bool,
}
