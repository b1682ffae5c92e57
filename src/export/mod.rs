//! Page-addressable SVG export.
//!
//! Given an Inkscape SVG with labeled pages, Inkscape exports a plain SVG
//! version which is then patched with one `<view>` element per page, its id
//! derived from the page label. A page labeled `enter_fullscreen` becomes
//! reachable as `output.svg#page-enter-fullscreen`.
//!
//! # Architecture
//!
//! ```text
//! icons-source.svg ──► inkscape --export-plain-svg ──► icons.svg
//!        │                                                 │
//!        ▼                                                 ▼
//!   find_pages ──► view_from_page ──────────────► append_views
//! ```

mod error;
mod page;
mod patch;

pub use error::ExportError;
pub use page::{View, find_pages, view_from_page};
pub use patch::patch_svg;

use anyhow::{Context, Result};
use std::path::Path;

use crate::{
    config::{Config, Tool},
    debug, log,
    utils::exec::{Cmd, INKSCAPE_FILTER},
};

/// Build the Inkscape plain-SVG export command.
pub fn export_command(program: &str, input: &Path, output: &Path) -> Cmd {
    let mut filename = std::ffi::OsString::from("--export-filename=");
    filename.push(output);

    Cmd::new(program)
        .arg("--export-plain-svg")
        .arg(filename)
        .arg("--")
        .arg(input)
        .filter(&INKSCAPE_FILTER)
}

/// Export `input` as plain SVG to `output` and add a view per page.
pub fn export_svg_for_web(input: &Path, output: &Path, config: &Config) -> Result<Vec<View>> {
    let program = config.tools.require(Tool::Inkscape)?;
    let cmd = export_command(&program.to_string_lossy(), input, output);
    debug!("export"; "{cmd}");

    cmd.run()
        .with_context(|| format!("Failed to export {}", input.display()))?;

    let views = patch_svg(input, output)
        .with_context(|| format!("Failed to patch {}", output.display()))?;
    log!("export"; "{} pages -> {}", views.len(), output.display());
    Ok(views)
}
