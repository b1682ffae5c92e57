//! `sheetsmith export` command.

use anyhow::{Context, Result};

use super::ExportArgs;
use crate::{config::Config, export, log};

pub fn run_export(args: &ExportArgs, config: &Config) -> Result<()> {
    if args.no_convert {
        let views = export::patch_svg(&args.input, &args.output)
            .with_context(|| format!("Failed to patch {}", args.output.display()))?;
        log!("export"; "{} pages -> {}", views.len(), args.output.display());
        return Ok(());
    }

    export::export_svg_for_web(&args.input, &args.output, config)?;
    Ok(())
}
