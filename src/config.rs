//! Configuration file loading.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Output file settings.
    #[serde(default)]
    pub output: OutputConfig,

    /// Label font settings.
    #[serde(default)]
    pub font: FontConfig,
}

/// Output file settings. Unset fields fall back to built-in defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Output JPEG path.
    pub path: Option<PathBuf>,
    /// JPEG quality, 1 to 100.
    pub quality: Option<u8>,
    /// Whether to write the JSON manifest next to the image.
    pub manifest: Option<bool>,
}

/// Label font settings.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FontConfig {
    /// Scalable font file.
    pub path: Option<PathBuf>,
    /// Font size in pixels per em.
    pub size: Option<f32>,
}

impl Config {
    /// Load configuration from the given path, or return defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load(path: &Path) -> Result<Self, String> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
        toml::from_str(&contents)
            .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
    }
}

/// Discover the config file path using the resolution order:
/// 1. Explicit path (from `--config` flag)
/// 2. `FOOD_FIXTURE_CONFIG` environment variable
/// 3. `food-fixture.toml` in the working directory
#[must_use]
pub fn discover_config_path(explicit: Option<&Path>) -> PathBuf {
    if let Some(p) = explicit {
        return p.to_path_buf();
    }

    if let Ok(p) = std::env::var("FOOD_FIXTURE_CONFIG") {
        return PathBuf::from(p);
    }

    PathBuf::from("food-fixture.toml")
}
