//! Command-line interface module.

mod args;
pub mod export;
pub mod sheet;

pub use args::{Cli, Commands, ExportArgs, SheetArgs};
