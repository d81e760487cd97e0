//! Label font acquisition: a scalable system font, or the built-in fallback.

use std::path::{Path, PathBuf};

use log::debug;

use crate::adapters::{BitmapFont, TrueTypeFont};
use crate::ports::LabelFont;

/// Default label font size, in pixels per em.
pub const DEFAULT_FONT_SIZE: f32 = 40.0;

/// Platform-specific location of the preferred label font.
#[must_use]
pub fn default_font_path() -> PathBuf {
    if cfg!(target_os = "macos") {
        PathBuf::from("/System/Library/Fonts/Helvetica.ttc")
    } else if cfg!(target_os = "windows") {
        PathBuf::from(r"C:\Windows\Fonts\arial.ttf")
    } else {
        PathBuf::from("/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf")
    }
}

/// Load the font at `path`, or fall back to the built-in bitmap font.
///
/// Never fails. The reason for a fallback is only visible in debug logs.
#[must_use]
pub fn acquire(path: &Path, size: f32) -> Box<dyn LabelFont> {
    match load_scalable(path, size) {
        Ok(font) => {
            debug!("Label font: {} at {size}px", path.display());
            Box::new(font)
        }
        Err(reason) => {
            debug!("Label font: built-in bitmap ({reason})");
            Box::new(BitmapFont)
        }
    }
}

fn load_scalable(path: &Path, size: f32) -> Result<TrueTypeFont, String> {
    let data =
        std::fs::read(path).map_err(|e| format!("failed to read {}: {e}", path.display()))?;
    TrueTypeFont::from_bytes(data, size)
        .map_err(|e| format!("failed to parse {}: {e}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::FontKind;

    #[test]
    fn readable_font_is_scalable() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("test_fixtures/fonts/DejaVuSans.ttf");
        let font = acquire(&path, DEFAULT_FONT_SIZE);
        assert_eq!(font.kind(), FontKind::Scalable);
        assert!(font.measure("Test Food Image").is_some());
    }

    #[test]
    fn missing_file_falls_back() {
        let font = acquire(Path::new("/nonexistent/fonts/Helvetica.ttc"), DEFAULT_FONT_SIZE);
        assert_eq!(font.kind(), FontKind::Fallback);
    }

    #[test]
    fn unparsable_file_falls_back() {
        let dir = std::env::temp_dir().join("food_fixture_fonts_bad_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("broken.ttf");
        std::fs::write(&path, b"not a font at all").unwrap();

        let font = acquire(&path, DEFAULT_FONT_SIZE);
        assert_eq!(font.kind(), FontKind::Fallback);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn directory_path_falls_back() {
        let font = acquire(&std::env::temp_dir(), DEFAULT_FONT_SIZE);
        assert_eq!(font.kind(), FontKind::Fallback);
    }

    #[test]
    fn fallback_still_measures_label() {
        let font = acquire(Path::new("/nonexistent.ttf"), DEFAULT_FONT_SIZE);
        assert!(font.measure("Test Food Image").is_some());
    }

    #[test]
    fn default_path_has_font_extension() {
        let path = default_font_path();
        let ext = path.extension().unwrap().to_string_lossy().to_lowercase();
        assert!(ext == "ttf" || ext == "ttc");
    }
}
