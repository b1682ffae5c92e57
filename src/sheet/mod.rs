//! Contact sheet composition.
//!
//! Places an ordered list of images onto a transparent canvas, one image per
//! region, by delegating all pixel work to ImageMagick.
//!
//! # Modules
//!
//! - [`region`]: placement regions (grid layout, JSON region files)
//! - [`compose`]: `magick` command construction and execution

mod compose;
mod error;
mod region;

pub use compose::{check_pairing, contact_sheet_command, render_contact_sheet};
pub use error::LayoutError;
pub use region::{ContactRegions, GridLayout, Region};
