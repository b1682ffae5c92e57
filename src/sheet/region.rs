//! Placement regions on the contact sheet canvas.
//!
//! A [`ContactRegions`] is either built from a [`GridLayout`] or loaded from a
//! JSON file:
//!
//! ```json
//! {
//!   "sheet_width": 800,
//!   "sheet_height": 600,
//!   "regions": [
//!     { "x": 0, "y": 0, "w": 400, "h": 300 },
//!     { "x": 400, "y": 0, "w": 400, "h": 300 }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

use super::LayoutError;

/// Where one image lands on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    /// Position in the region set (assigned by order, not read from JSON).
    #[serde(skip)]
    pub index: usize,
    pub x: i32,
    pub y: i32,
    pub w: u32,
    pub h: u32,
}

impl Region {
    pub const fn new(index: usize, x: i32, y: i32, w: u32, h: u32) -> Self {
        Self { index, x, y, w, h }
    }
}

/// Ordered placement regions plus the overall canvas size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRegions {
    pub sheet_width: u32,
    pub sheet_height: u32,
    pub regions: Vec<Region>,
}

/// Row-major grid of equally sized cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    /// Maximum cells per row.
    pub columns: u32,
    pub cell_width: u32,
    pub cell_height: u32,
    /// Space between cells and around the border.
    pub gap: u32,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self {
            columns: 4,
            cell_width: 256,
            cell_height: 256,
            gap: 0,
        }
    }
}

impl ContactRegions {
    /// Create a region set, reindexing `regions` by position.
    pub fn new(
        sheet_width: u32,
        sheet_height: u32,
        regions: Vec<Region>,
    ) -> Result<Self, LayoutError> {
        if sheet_width == 0 || sheet_height == 0 {
            return Err(LayoutError::EmptyCanvas {
                width: sheet_width,
                height: sheet_height,
            });
        }

        let regions = regions
            .into_iter()
            .enumerate()
            .map(|(index, region)| Region { index, ..region })
            .collect();

        Ok(Self {
            sheet_width,
            sheet_height,
            regions,
        })
    }

    /// Lay out `count` cells on a grid.
    ///
    /// The grid is never wider than `count` cells, so a short sheet does not
    /// carry empty columns. Zero images still yield a one-cell canvas.
    pub fn grid(count: usize, layout: GridLayout) -> Result<Self, LayoutError> {
        if layout.columns == 0 {
            return Err(LayoutError::InvalidGrid("columns must be at least 1"));
        }
        if layout.cell_width == 0 || layout.cell_height == 0 {
            return Err(LayoutError::InvalidGrid("cell size must be positive"));
        }

        let count = u32::try_from(count)
            .map_err(|_| LayoutError::InvalidGrid("too many images for one sheet"))?;
        let columns = layout.columns.min(count).max(1);
        let rows = count.div_ceil(columns).max(1);

        let too_large = || LayoutError::InvalidGrid("sheet too large");
        let step_x = layout.cell_width.checked_add(layout.gap).ok_or_else(too_large)?;
        let step_y = layout.cell_height.checked_add(layout.gap).ok_or_else(too_large)?;
        let sheet_width = extent(columns, step_x, layout.gap).ok_or_else(too_large)?;
        let sheet_height = extent(rows, step_y, layout.gap).ok_or_else(too_large)?;

        // Offsets are signed; the last cell starts at `extent - step`.
        i32::try_from(sheet_width - step_x).map_err(|_| too_large())?;
        i32::try_from(sheet_height - step_y).map_err(|_| too_large())?;

        let regions = (0..count)
            .map(|i| {
                let (col, row) = (i % columns, i / columns);
                Region::new(
                    i as usize,
                    (layout.gap + col * step_x) as i32,
                    (layout.gap + row * step_y) as i32,
                    layout.cell_width,
                    layout.cell_height,
                )
            })
            .collect();

        Self::new(sheet_width, sheet_height, regions)
    }

    /// Load a region set from a JSON file.
    pub fn from_json(path: &Path) -> Result<Self, LayoutError> {
        let content =
            fs::read_to_string(path).map_err(|err| LayoutError::Io(path.to_path_buf(), err))?;
        let raw: Self = serde_json::from_str(&content)
            .map_err(|err| LayoutError::Json(path.to_path_buf(), err))?;
        Self::new(raw.sheet_width, raw.sheet_height, raw.regions)
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

/// `cells * step + gap`, or `None` on overflow.
fn extent(cells: u32, step: u32, gap: u32) -> Option<u32> {
    cells.checked_mul(step)?.checked_add(gap)
}
