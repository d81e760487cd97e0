//! JPEG encoding and manifest output.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use image::codecs::jpeg::JpegEncoder;
use image::{Rgb, RgbImage};
use serde::Serialize;

use crate::error::FixtureError;
use crate::ports::FontKind;
use crate::render::LabelPlacement;
use crate::scene::{serialize_rgb, Shape, LABEL_TEXT, SHAPES};

/// Encode `canvas` as JPEG and write it to `path`, replacing any existing file.
///
/// # Errors
///
/// Returns an error if the file cannot be created or encoding fails.
pub fn save_jpeg(canvas: &RgbImage, path: &Path, quality: u8) -> Result<(), FixtureError> {
    let mut writer = BufWriter::new(File::create(path)?);
    JpegEncoder::new_with_quality(&mut writer, quality).encode_image(canvas)?;
    writer.flush()?;
    Ok(())
}

/// Manifest path for an image: same stem, `.json` extension.
#[must_use]
pub fn manifest_path(image_path: &Path) -> PathBuf {
    image_path.with_extension("json")
}

/// Description of a generated fixture, for tests that consume it.
#[derive(Debug, Serialize)]
pub struct Manifest {
    /// Image file name, without directories, so it resolves next to the manifest.
    pub image: String,
    /// Canvas width.
    pub width: u32,
    /// Canvas height.
    pub height: u32,
    /// Sampled background color.
    #[serde(serialize_with = "serialize_rgb")]
    pub background: Rgb<u8>,
    /// When the fixture was generated.
    pub generated_at: DateTime<Utc>,
    /// Label text and where it landed.
    pub label: ManifestLabel,
    /// Shapes in draw order.
    pub shapes: &'static [Shape],
}

/// Label section of the manifest.
#[derive(Debug, Serialize)]
pub struct ManifestLabel {
    /// Label text.
    pub text: &'static str,
    /// Font that rendered it.
    pub font: FontKind,
    /// Placement on the canvas.
    #[serde(flatten)]
    pub placement: LabelPlacement,
}

impl Manifest {
    /// Describe a freshly rendered canvas.
    #[must_use]
    pub fn new(
        image_path: &Path,
        canvas: &RgbImage,
        background: Rgb<u8>,
        font: FontKind,
        placement: LabelPlacement,
    ) -> Self {
        Self {
            image: image_path
                .file_name()
                .map_or_else(|| image_path.display().to_string(), |n| n.to_string_lossy().into_owned()),
            width: canvas.width(),
            height: canvas.height(),
            background,
            generated_at: Utc::now(),
            label: ManifestLabel { text: LABEL_TEXT, font, placement },
            shapes: &SHAPES,
        }
    }

    /// Write the manifest as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the file write fails.
    pub fn write(&self, path: &Path) -> Result<(), FixtureError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
