//! ImageMagick command construction for contact sheets.
//!
//! One `magick` invocation draws every image onto a blank canvas:
//!
//! ```text
//! magick -size 800x600 canvas:none \
//!     -draw "image SrcOver 0,0 400,300 'a.jpg'" -virtual-pixel Edge \
//!     -draw "image SrcOver 400,0 400,300 'b.jpg'" -virtual-pixel Edge \
//!     sheet.png
//! ```
//!
//! # Trusted input only
//!
//! Image paths are interpolated into the `-draw` argument without escaping.
//! ImageMagick offers no documented way to escape a file name inside a draw
//! primitive, so a path containing `'` breaks the directive and a crafted
//! path can inject further draw primitives. Never pass untrusted file names.

use anyhow::{Context, Result};
use std::path::Path;

use super::{ContactRegions, LayoutError, Region};
use crate::{
    config::{Config, SheetConfig, Tool},
    debug, log,
    utils::exec::Cmd,
};

/// Format one `-draw` directive placing `file` at `region`.
pub fn draw_directive(compose: &str, file: &str, region: &Region) -> String {
    format!(
        "image {compose} {},{} {},{} '{file}'",
        region.x, region.y, region.w, region.h
    )
}

/// Build the compositing command without running it.
///
/// Images are paired with regions in order; pairing stops at the shorter of
/// the two sequences.
pub fn contact_sheet_command<P: AsRef<Path>>(
    program: &str,
    photos: &[P],
    regions: &ContactRegions,
    out_file: &Path,
    settings: &SheetConfig,
) -> Cmd {
    let size = format!("{}x{}", regions.sheet_width, regions.sheet_height);
    let canvas = format!("canvas:{}", settings.background);

    let mut cmd = Cmd::new(program).args(["-size", &size, &canvas]);
    for (photo, region) in photos.iter().zip(&regions.regions) {
        let file = photo.as_ref().to_string_lossy();
        cmd = cmd
            .arg("-draw")
            .arg(draw_directive(&settings.compose, &file, region))
            .args(["-virtual-pixel", &settings.virtual_pixel]);
    }
    cmd.arg(out_file)
}

/// Check that every image has a region.
///
/// Without `strict`, a mismatch is only reported and the extra images or
/// regions are dropped by the pairing in [`contact_sheet_command`].
pub fn check_pairing(images: usize, regions: usize, strict: bool) -> Result<(), LayoutError> {
    if images == regions {
        return Ok(());
    }
    if strict {
        return Err(LayoutError::Mismatch { images, regions });
    }
    log!(
        "warning";
        "{images} images but {regions} regions, using the first {}",
        images.min(regions)
    );
    Ok(())
}

/// Compose `photos` into `out_file` with ImageMagick.
pub fn render_contact_sheet<P: AsRef<Path>>(
    photos: &[P],
    regions: &ContactRegions,
    out_file: &Path,
    config: &Config,
) -> Result<()> {
    let program = config.tools.require(Tool::Magick)?;
    let cmd = contact_sheet_command(
        &program.to_string_lossy(),
        photos,
        regions,
        out_file,
        &config.sheet,
    );
    debug!("sheet"; "{cmd}");

    cmd.run()
        .with_context(|| format!("Failed to compose {}", out_file.display()))?;
    Ok(())
}
