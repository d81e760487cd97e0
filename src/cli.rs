//! CLI argument parsing with clap.

use std::path::PathBuf;

use clap::Parser;

/// Generate a synthetic food photo for image-upload and recognition tests.
///
/// With no options, writes `test-food.jpg` to the current directory.
#[derive(Parser, Debug)]
#[command(name = "food-fixture", version, about)]
pub struct Cli {
    /// Output JPEG path [default: test-food.jpg].
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Scalable font for the label [default: platform system font].
    #[arg(long)]
    pub font: Option<PathBuf>,

    /// Label font size in pixels per em [default: 40].
    #[arg(long)]
    pub font_size: Option<f32>,

    /// JPEG quality, 1-100 [default: 75].
    #[arg(short, long)]
    pub quality: Option<u8>,

    /// Seed for the background color, for reproducible output.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Also write a JSON manifest describing the image.
    #[arg(long)]
    pub manifest: bool,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}
