//! Resolution of generation options from CLI flags, config and defaults.

use std::path::PathBuf;

use crate::cli::Cli;
use crate::config::Config;
use crate::fonts::{default_font_path, DEFAULT_FONT_SIZE};
use crate::scene::CANVAS_HEIGHT;

/// Default output file, relative to the working directory.
pub const DEFAULT_OUTPUT: &str = "test-food.jpg";

/// Default JPEG quality.
pub const DEFAULT_QUALITY: u8 = 75;

/// Largest accepted font size: one em as tall as the canvas.
pub const MAX_FONT_SIZE: f32 = CANVAS_HEIGHT as f32;

/// Fully resolved options for one generation run.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateOptions {
    /// Where the JPEG is written.
    pub output: PathBuf,
    /// JPEG quality, 1 to 100.
    pub quality: u8,
    /// Preferred scalable font.
    pub font_path: PathBuf,
    /// Font size in pixels per em.
    pub font_size: f32,
    /// Whether to write the JSON manifest.
    pub manifest: bool,
    /// Background color seed, if reproducible output was requested.
    pub seed: Option<u64>,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT),
            quality: DEFAULT_QUALITY,
            font_path: default_font_path(),
            font_size: DEFAULT_FONT_SIZE,
            manifest: false,
            seed: None,
        }
    }
}

impl GenerateOptions {
    /// Merge CLI flags over config values over defaults, then validate.
    ///
    /// # Errors
    ///
    /// Returns an error if the merged quality or font size is out of range.
    pub fn resolve(cli: &Cli, config: &Config) -> Result<Self, String> {
        let defaults = Self::default();
        let options = Self {
            output: cli
                .output
                .clone()
                .or_else(|| config.output.path.clone())
                .unwrap_or(defaults.output),
            quality: cli.quality.or(config.output.quality).unwrap_or(defaults.quality),
            font_path: cli
                .font
                .clone()
                .or_else(|| config.font.path.clone())
                .unwrap_or(defaults.font_path),
            font_size: cli.font_size.or(config.font.size).unwrap_or(defaults.font_size),
            manifest: cli.manifest || config.output.manifest.unwrap_or(defaults.manifest),
            seed: cli.seed,
        };

        validate_quality(options.quality)?;
        validate_font_size(options.font_size)?;
        Ok(options)
    }
}

/// Validate the JPEG quality parameter.
///
/// # Errors
///
/// Returns an error if the quality is outside 1..=100.
pub fn validate_quality(quality: u8) -> Result<(), String> {
    if (1..=100).contains(&quality) {
        Ok(())
    } else {
        Err(format!("Unsupported quality '{quality}'. Valid: 1-100"))
    }
}

/// Validate the label font size.
///
/// # Errors
///
/// Returns an error if the size is not in `(0, MAX_FONT_SIZE]`.
pub fn validate_font_size(size: f32) -> Result<(), String> {
    if size > 0.0 && size <= MAX_FONT_SIZE {
        Ok(())
    } else {
        Err(format!("Unsupported font size '{size}'. Valid: greater than 0, at most {MAX_FONT_SIZE}"))
    }
}
