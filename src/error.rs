//! Unified error type for food-fixture.

use thiserror::Error;

/// Errors that can abort fixture generation.
///
/// A missing or unparsable label font is not one of them: font acquisition
/// always succeeds by falling back to the built-in bitmap font.
#[derive(Debug, Error)]
pub enum FixtureError {
    /// An I/O error occurred while writing an output file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The canvas could not be encoded.
    #[error("Encode error: {0}")]
    Encode(#[from] image::ImageError),

    /// Configuration error.
    #[error("Config error: {0}")]
    Config(String),

    /// Invalid argument.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The manifest could not be serialized.
    #[error("Manifest error: {0}")]
    Manifest(#[from] serde_json::Error),
}
