//! Configuration error types.

use owo_colors::OwoColorize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

use super::Tool;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Config file parsing error")]
    Toml(#[from] toml::de::Error),

    #[error("Config validation error: {0}")]
    Validation(String),

    #[error("{0}")]
    ToolNotFound(MissingTool),
}

/// An external tool that could not be located on `PATH`.
#[derive(Debug, Clone)]
pub struct MissingTool {
    pub tool: Tool,
    /// The configured program name or path that failed to resolve.
    pub program: String,
}

impl fmt::Display for MissingTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} `{}` not found", "→".red(), self.program)?;
        write!(
            f,
            "\n  {} install it, set ${} or update {}",
            "hint:".yellow(),
            self.tool.env_var(),
            self.tool.config_key().cyan()
        )
    }
}
