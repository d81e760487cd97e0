//! One fixture generation run, from background color to files on disk.

use image::Rgb;
use log::debug;
use rand::Rng;

use crate::error::FixtureError;
use crate::fonts;
use crate::output::{manifest_path, save_jpeg, Manifest};
use crate::params::GenerateOptions;
use crate::ports::FontKind;
use crate::render::{render, LabelPlacement};
use crate::scene::random_background;

/// What a run produced.
#[derive(Debug, Clone, Copy)]
pub struct Generated {
    /// Sampled background color.
    pub background: Rgb<u8>,
    /// Font that rendered the label.
    pub font: FontKind,
    /// Where the label landed.
    pub placement: LabelPlacement,
}

/// Render the fixture and write it (and optionally its manifest) to disk.
///
/// The background color is drawn from `rng`; everything else is fixed.
///
/// # Errors
///
/// Returns an error if the image or manifest cannot be written. A missing
/// font is not an error.
pub fn generate<R: Rng + ?Sized>(
    options: &GenerateOptions,
    rng: &mut R,
) -> Result<Generated, FixtureError> {
    let background = random_background(rng);
    debug!("Background: {:?}", background.0);

    let font = fonts::acquire(&options.font_path, options.font_size);
    let (canvas, placement) = render(background, font.as_ref());

    save_jpeg(&canvas, &options.output, options.quality)?;
    debug!("Wrote {}", options.output.display());

    if options.manifest {
        let path = manifest_path(&options.output);
        Manifest::new(&options.output, &canvas, background, font.kind(), placement).write(&path)?;
        debug!("Wrote {}", path.display());
    }

    Ok(Generated { background, font: font.kind(), placement })
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn options_in(dir: &std::path::Path) -> GenerateOptions {
        GenerateOptions {
            output: dir.join("test-food.jpg"),
            font_path: dir.join("missing-font.ttf"),
            ..GenerateOptions::default()
        }
    }

    #[test]
    fn writes_800x600_jpeg_with_fallback_font() {
        let dir = std::env::temp_dir().join("food_fixture_generator_basic_test");
        std::fs::create_dir_all(&dir).unwrap();
        let options = options_in(&dir);

        let generated = generate(&options, &mut StdRng::seed_from_u64(1)).unwrap();
        assert_eq!(generated.font, FontKind::Fallback);
        assert!(generated.background.0.iter().all(|&c| c >= 200));

        let decoded = image::open(&options.output).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (800, 600));
        assert!(!dir.join("test-food.json").exists());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn same_seed_same_background() {
        let dir = std::env::temp_dir().join("food_fixture_generator_seed_test");
        std::fs::create_dir_all(&dir).unwrap();
        let options = options_in(&dir);

        let a = generate(&options, &mut StdRng::seed_from_u64(99)).unwrap();
        let b = generate(&options, &mut StdRng::seed_from_u64(99)).unwrap();
        assert_eq!(a.background, b.background);
        assert_eq!(a.placement, b.placement);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn writes_manifest_when_asked() {
        let dir = std::env::temp_dir().join("food_fixture_generator_manifest_test");
        std::fs::create_dir_all(&dir).unwrap();
        let options = GenerateOptions { manifest: true, ..options_in(&dir) };

        let generated = generate(&options, &mut StdRng::seed_from_u64(5)).unwrap();
        let json = std::fs::read_to_string(dir.join("test-food.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["background"], serde_json::json!(generated.background.0));
        assert_eq!(value["label"]["font"], "fallback");

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn unwritable_output_is_an_error() {
        let options = GenerateOptions {
            output: "/nonexistent/dir/test-food.jpg".into(),
            ..GenerateOptions::default()
        };
        assert!(generate(&options, &mut StdRng::seed_from_u64(0)).is_err());
    }
}
