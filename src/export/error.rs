//! SVG export errors.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("IO error when reading `{0}`")]
    Read(PathBuf, #[source] std::io::Error),

    #[error("IO error when writing `{0}`")]
    Write(PathBuf, #[source] std::io::Error),

    #[error("failed to parse `{0}`")]
    Parse(PathBuf, #[source] roxmltree::Error),

    #[error("page #{index} has no `{attribute}` attribute")]
    MissingAttribute {
        /// Position among the document's pages, starting at 1.
        index: usize,
        attribute: &'static str,
    },
}
