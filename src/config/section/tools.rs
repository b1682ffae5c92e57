//! `[tools]` section configuration.
//!
//! External binaries the two pipelines delegate to.
//!
//! # Example
//!
//! ```toml
//! [tools]
//! magick = "magick"              # compositor used by `sheetsmith sheet`
//! inkscape = "~/bin/inkscape"    # converter used by `sheetsmith export`
//! ```
//!
//! Both entries can be overridden with `$MAGICK` / `$INKSCAPE`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::config::{ConfigError, MissingTool};

/// An external tool sheetsmith shells out to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    /// ImageMagick, composes contact sheets.
    Magick,
    /// Inkscape, exports plain SVG.
    Inkscape,
}

impl Tool {
    /// Environment variable overriding the configured program.
    pub const fn env_var(self) -> &'static str {
        match self {
            Self::Magick => "MAGICK",
            Self::Inkscape => "INKSCAPE",
        }
    }

    /// Field path in the config file.
    pub const fn config_key(self) -> &'static str {
        match self {
            Self::Magick => "tools.magick",
            Self::Inkscape => "tools.inkscape",
        }
    }

    /// Binary name used when nothing is configured.
    pub const fn default_program(self) -> &'static str {
        match self {
            Self::Magick => "magick",
            Self::Inkscape => "inkscape",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToolsConfig {
    /// ImageMagick program name or path.
    pub magick: String,
    /// Inkscape program name or path.
    pub inkscape: String,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            magick: Tool::Magick.default_program().to_string(),
            inkscape: Tool::Inkscape.default_program().to_string(),
        }
    }
}

impl ToolsConfig {
    /// Configured program for `tool`, with `~` expanded.
    pub fn program(&self, tool: Tool) -> String {
        let raw = match tool {
            Tool::Magick => &self.magick,
            Tool::Inkscape => &self.inkscape,
        };
        shellexpand::tilde(raw).into_owned()
    }

    /// Replace `tool`'s program (used for environment overrides).
    pub fn set_program(&mut self, tool: Tool, program: String) {
        match tool {
            Tool::Magick => self.magick = program,
            Tool::Inkscape => self.inkscape = program,
        }
    }

    /// Resolve `tool` to an executable path, failing if it is not installed.
    pub fn require(&self, tool: Tool) -> Result<PathBuf, ConfigError> {
        let program = self.program(tool);
        which::which(&program)
            .map_err(|_| ConfigError::ToolNotFound(MissingTool { tool, program }))
    }
}
