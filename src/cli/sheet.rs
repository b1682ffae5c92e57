//! `sheetsmith sheet` command.

use anyhow::{Context, Result};

use super::SheetArgs;
use crate::{
    config::{Config, Tool},
    log,
    sheet::{ContactRegions, GridLayout, check_pairing, contact_sheet_command, render_contact_sheet},
};

/// Build the region set requested on the command line.
fn resolve_regions(args: &SheetArgs) -> Result<ContactRegions> {
    let regions = match &args.regions {
        Some(path) => ContactRegions::from_json(path)?,
        None => ContactRegions::grid(
            args.images.len(),
            GridLayout {
                columns: args.columns,
                cell_width: args.cell_width,
                cell_height: args.cell_height,
                gap: args.gap,
            },
        )?,
    };
    Ok(regions)
}

pub fn run_sheet(args: &SheetArgs, config: &Config) -> Result<()> {
    let regions = resolve_regions(args).context("Invalid contact sheet layout")?;
    check_pairing(args.images.len(), regions.len(), args.strict)?;

    if args.dry_run {
        let cmd = contact_sheet_command(
            &config.tools.program(Tool::Magick),
            &args.images,
            &regions,
            &args.output,
            &config.sheet,
        );
        println!("{cmd}");
        return Ok(());
    }

    log!(
        "sheet";
        "{} images on {}x{} -> {}",
        args.images.len().min(regions.len()),
        regions.sheet_width,
        regions.sheet_height,
        args.output.display()
    );
    render_contact_sheet(&args.images, &regions, &args.output, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sheet::LayoutError;
    use std::{fs, path::PathBuf};
    use tempfile::TempDir;

    fn sheet_args(images: &[&str]) -> SheetArgs {
        SheetArgs {
            images: images.iter().map(PathBuf::from).collect(),
            output: PathBuf::from("sheet.png"),
            regions: None,
            columns: 2,
            cell_width: 100,
            cell_height: 100,
            gap: 0,
            strict: false,
            dry_run: true,
        }
    }

    #[test]
    fn test_resolve_grid_regions() {
        let regions = resolve_regions(&sheet_args(&["a.jpg", "b.jpg", "c.jpg"])).unwrap();
        assert_eq!(regions.len(), 3);
        assert_eq!((regions.sheet_width, regions.sheet_height), (200, 200));
    }

    #[test]
    fn test_resolve_json_regions() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("regions.json");
        fs::write(
            &path,
            r#"{"sheet_width": 800, "sheet_height": 600, "regions": [{"x": 0, "y": 0, "w": 800, "h": 600}]}"#,
        )
        .unwrap();

        let mut args = sheet_args(&["a.jpg"]);
        args.regions = Some(path);
        let regions = resolve_regions(&args).unwrap();
        assert_eq!(regions.len(), 1);
        assert_eq!(regions.sheet_width, 800);
    }

    #[test]
    fn test_strict_mismatch_fails_before_running() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("regions.json");
        fs::write(
            &path,
            r#"{"sheet_width": 10, "sheet_height": 10, "regions": [{"x": 0, "y": 0, "w": 5, "h": 5}]}"#,
        )
        .unwrap();

        let mut args = sheet_args(&["a.jpg", "b.jpg"]);
        args.regions = Some(path);
        args.strict = true;

        let err = run_sheet(&args, &Config::default()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<LayoutError>(),
            Some(LayoutError::Mismatch {
                images: 2,
                regions: 1
            })
        ));
    }

    #[test]
    fn test_dry_run_does_not_need_magick() {
        let mut config = Config::default();
        config
            .tools
            .set_program(Tool::Magick, "sheetsmith-missing-magick".into());
        assert!(run_sheet(&sheet_args(&["a.jpg", "b.jpg"]), &config).is_ok());
    }
}
