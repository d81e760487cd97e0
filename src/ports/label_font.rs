//! Label font port: measuring and drawing a line of text on the canvas.

use image::{Rgb, RgbImage};
use serde::Serialize;

/// Which kind of font ended up rendering the label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FontKind {
    /// A TrueType/OpenType font loaded from disk.
    Scalable,
    /// The built-in bitmap font.
    Fallback,
}

/// Ink bounding box of a line of text, relative to the draw origin.
///
/// `min_*` are inclusive, `max_*` exclusive. The origin is the top-left corner
/// of the line box, so `min_x` is the left bearing of the first inked glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TextBounds {
    /// Leftmost inked column.
    pub min_x: i32,
    /// Topmost inked row.
    pub min_y: i32,
    /// One past the rightmost inked column.
    pub max_x: i32,
    /// One past the bottom inked row.
    pub max_y: i32,
}

impl TextBounds {
    /// Ink width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        (self.max_x - self.min_x).max(0) as u32
    }

    /// Ink height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        (self.max_y - self.min_y).max(0) as u32
    }

    /// Grow `self` to cover `other`.
    #[must_use]
    pub fn union(self, other: Self) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    /// Translate the box by `(dx, dy)`.
    #[must_use]
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            min_x: self.min_x + dx,
            min_y: self.min_y + dy,
            max_x: self.max_x + dx,
            max_y: self.max_y + dy,
        }
    }
}

/// A font that can lay out and rasterize a single line of text.
///
/// `measure` and `draw` must agree: drawing `text` at origin `(x, y)` never
/// inks a pixel outside `measure(text).offset(x, y)`.
pub trait LabelFont {
    /// The kind of font behind this implementation.
    fn kind(&self) -> FontKind;

    /// Ink bounds of `text`, or `None` if nothing would be drawn.
    fn measure(&self, text: &str) -> Option<TextBounds>;

    /// Draw `text` with its line box's top-left corner at `origin`.
    ///
    /// Pixels falling outside the canvas are clipped.
    fn draw(&self, canvas: &mut RgbImage, origin: (i32, i32), text: &str, color: Rgb<u8>);
}
