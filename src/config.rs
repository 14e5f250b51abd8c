//! Configuration file loading with environment variable overrides.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::Error;
use crate::options::PromptOptions;
use crate::render::RenderConfig;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Renderer defaults.
    #[serde(default)]
    pub render: RenderConfig,

    /// Image backend selection.
    #[serde(default)]
    pub backend: BackendConfig,

    /// Default prompt options (used for any field not given on the command line).
    #[serde(default)]
    pub prompt: PromptOptions,
}

/// Image backend selection.
#[derive(Debug, Default, Deserialize)]
pub struct BackendConfig {
    /// Backend name: `"fallback"`, or `"none"` to disable image generation.
    pub name: Option<String>,
}

impl Config {
    /// Load configuration from the given path, or return defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, Error> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read config {}: {e}", path.display())))?;
        toml::from_str(&contents)
            .map_err(|e| Error::Config(format!("Failed to parse config {}: {e}", path.display())))
    }

    /// Renderer settings, with the output directory taken from
    /// `MATRYOSHKA_OUTPUT_DIR` when set.
    #[must_use]
    pub fn render_config(&self) -> RenderConfig {
        let mut config = self.render.clone();
        if let Ok(dir) = std::env::var("MATRYOSHKA_OUTPUT_DIR") {
            config.output_dir = PathBuf::from(dir);
        }
        config
    }

    /// Backend name, preferring the `MATRYOSHKA_BACKEND` environment variable.
    #[must_use]
    pub fn backend_name(&self) -> Option<String> {
        std::env::var("MATRYOSHKA_BACKEND").ok().or_else(|| self.backend.name.clone())
    }
}

/// Discover the config file path using the resolution order:
/// 1. Explicit path (from `--config` flag)
/// 2. `MATRYOSHKA_CONFIG` environment variable
/// 3. `~/.config/matryoshka/config.toml`
#[must_use]
pub fn discover_config_path(explicit: Option<&str>) -> PathBuf {
    if let Some(p) = explicit {
        return PathBuf::from(p);
    }

    if let Ok(p) = std::env::var("MATRYOSHKA_CONFIG") {
        return PathBuf::from(p);
    }

    default_config_path()
}

/// Default config path: `~/.config/matryoshka/config.toml`.
fn default_config_path() -> PathBuf {
    if let Ok(home) = std::env::var("HOME") {
        PathBuf::from(home).join(".config/matryoshka/config.toml")
    } else {
        PathBuf::from("matryoshka.toml")
    }
}
