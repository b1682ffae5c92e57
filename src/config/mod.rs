//! Configuration management for `sheetsmith.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── sheet      # [sheet]
//! │   └── tools      # [tools]
//! ├── error          # ConfigError
//! └── mod.rs         # Config (this file)
//! ```
//!
//! # Sections
//!
//! | Section   | Purpose                                          |
//! |-----------|--------------------------------------------------|
//! | `[tools]` | External binaries (magick, inkscape)             |
//! | `[sheet]` | Contact sheet canvas and draw settings           |
//!
//! The file is optional. Values are resolved as
//! environment (`$MAGICK`, `$INKSCAPE`) > config file > defaults.

mod error;
pub mod section;

pub use error::{ConfigError, MissingTool};
pub use section::{SheetConfig, Tool, ToolsConfig};

use crate::debug;
use serde::{Deserialize, Serialize};
use std::{fs, io::ErrorKind, path::Path};

/// Default config file name, looked up in the current directory.
pub const DEFAULT_CONFIG_FILE: &str = "sheetsmith.toml";

/// Root configuration structure representing sheetsmith.toml
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// External tool locations
    pub tools: ToolsConfig,

    /// Contact sheet settings
    pub sheet: SheetConfig,
}

impl Config {
    /// Load configuration from `path` and apply environment overrides.
    ///
    /// A missing file is not an error: defaults are used instead.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let mut config = match fs::read_to_string(path) {
            Ok(content) => {
                debug!("config"; "loaded {}", path.display());
                Self::from_str(&content)?
            }
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!("config"; "{} not found, using defaults", path.display());
                Self::default()
            }
            Err(err) => return Err(ConfigError::Io(path.to_path_buf(), err)),
        };

        config.apply_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Parse configuration from TOML text.
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.sheet.validate()?;
        Ok(config)
    }

    /// Apply `$MAGICK` / `$INKSCAPE` overrides. Empty values are ignored.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        for tool in [Tool::Magick, Tool::Inkscape] {
            if let Some(program) = lookup(tool.env_var()).filter(|v| !v.is_empty()) {
                debug!("config"; "${} overrides {}", tool.env_var(), tool.config_key());
                self.tools.set_program(tool, program);
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_empty_config() {
        let config = Config::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_parse_full_config() {
        let config = Config::from_str(
            r#"
            [tools]
            magick = "/usr/local/bin/magick"
            inkscape = "inkscape-1.3"

            [sheet]
            background = "white"
            compose = "Over"
            virtual_pixel = "Transparent"
            "#,
        )
        .unwrap();

        assert_eq!(config.tools.magick, "/usr/local/bin/magick");
        assert_eq!(config.tools.inkscape, "inkscape-1.3");
        assert_eq!(config.sheet.background, "white");
        assert_eq!(config.sheet.compose, "Over");
        assert_eq!(config.sheet.virtual_pixel, "Transparent");
    }

    #[test]
    fn test_partial_section_keeps_defaults() {
        let config = Config::from_str("[sheet]\nbackground = \"black\"").unwrap();
        assert_eq!(config.sheet.background, "black");
        assert_eq!(config.sheet.compose, "SrcOver");
        assert_eq!(config.sheet.virtual_pixel, "Edge");
        assert_eq!(config.tools, ToolsConfig::default());
    }

    #[test]
    fn test_empty_sheet_value_rejected() {
        let result = Config::from_str("[sheet]\nvirtual_pixel = \"\"");
        assert!(matches!(
            result,
            Err(ConfigError::Validation(ref msg)) if msg.contains("virtual_pixel")
        ));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result = Config::from_str("[tools]\nconvert = \"convert\"");
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn test_invalid_toml() {
        let result = Config::from_str("[tools\nmagick = 1");
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn test_env_overrides_file() {
        let mut config = Config::from_str("[tools]\ninkscape = \"from-file\"").unwrap();
        config.apply_env(|key| (key == "INKSCAPE").then(|| "from-env".to_string()));

        assert_eq!(config.tools.inkscape, "from-env");
        assert_eq!(config.tools.magick, "magick");
    }

    #[test]
    fn test_empty_env_ignored() {
        let mut config = Config::default();
        config.apply_env(|_| Some(String::new()));
        assert_eq!(config.tools, ToolsConfig::default());
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load(&dir.path().join(DEFAULT_CONFIG_FILE)).unwrap();
        assert_eq!(config.sheet, SheetConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILE);
        fs::write(&path, "[sheet]\ncompose = \"Multiply\"\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.sheet.compose, "Multiply");
    }

    #[test]
    fn test_load_directory_is_io_error() {
        let dir = TempDir::new().unwrap();
        let result = Config::load(dir.path());
        assert!(matches!(result, Err(ConfigError::Io(..))));
    }
}
