//! Contact sheet layout errors.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("canvas must have a positive size, got {width}x{height}")]
    EmptyCanvas { width: u32, height: u32 },

    #[error("invalid grid: {0}")]
    InvalidGrid(&'static str),

    #[error("{images} images but {regions} regions")]
    Mismatch { images: usize, regions: usize },

    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("invalid region file `{0}`")]
    Json(PathBuf, #[source] serde_json::Error),
}
