//! `[sheet]` section configuration.
//!
//! ImageMagick settings applied to every contact sheet.
//!
//! # Example
//!
//! ```toml
//! [sheet]
//! background = "none"     # canvas fill, `none` = transparent
//! compose = "SrcOver"     # compose operator of each `-draw image`
//! virtual_pixel = "Edge"  # `-virtual-pixel` policy after each draw
//! ```

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SheetConfig {
    /// Canvas fill passed as `canvas:<background>`.
    pub background: String,
    /// Compose operator used in each draw directive.
    pub compose: String,
    /// Virtual pixel method applied after each draw.
    pub virtual_pixel: String,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            background: "none".to_string(),
            compose: "SrcOver".to_string(),
            virtual_pixel: "Edge".to_string(),
        }
    }
}

impl SheetConfig {
    /// Every value is passed as its own `magick` argument and must be non-empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("background", &self.background),
            ("compose", &self.compose),
            ("virtual_pixel", &self.virtual_pixel),
        ];
        match fields.iter().find(|(_, value)| value.trim().is_empty()) {
            Some((key, _)) => Err(ConfigError::Validation(format!(
                "[sheet] {key} must not be empty"
            ))),
            None => Ok(()),
        }
    }
}
