//! Fixed layout of the fixture: canvas size, produce shapes and label.

use image::Rgb;
use rand::Rng;
use serde::Serialize;

/// Canvas width in pixels.
pub const CANVAS_WIDTH: u32 = 800;

/// Canvas height in pixels.
pub const CANVAS_HEIGHT: u32 = 600;

/// Lower bound (inclusive) of a background channel.
pub const BACKGROUND_CHANNEL_MIN: u8 = 200;
/// Upper bound (inclusive) of a background channel.
pub const BACKGROUND_CHANNEL_MAX: u8 = 255;

/// Text drawn near the bottom of the canvas.
pub const LABEL_TEXT: &str = "Test Food Image";

/// Label fill color.
pub const LABEL_COLOR: Rgb<u8> = Rgb([50, 50, 50]);

/// Distance from the bottom edge to the top of the label.
pub const LABEL_BOTTOM_OFFSET: u32 = 100;

/// Outline width shared by every shape.
pub const OUTLINE_WIDTH: u32 = 3;

/// Inclusive pixel bounding box `(x0, y0)-(x1, y1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BoundingBox {
    /// Left edge.
    pub x0: i32,
    /// Top edge.
    pub y0: i32,
    /// Right edge.
    pub x1: i32,
    /// Bottom edge.
    pub y1: i32,
}

impl BoundingBox {
    /// Center point, rounded down.
    #[must_use]
    pub fn center(&self) -> (i32, i32) {
        ((self.x0 + self.x1) / 2, (self.y0 + self.y1) / 2)
    }

    /// Horizontal and vertical radii of the inscribed ellipse.
    #[must_use]
    pub fn radii(&self) -> (i32, i32) {
        ((self.x1 - self.x0) / 2, (self.y1 - self.y0) / 2)
    }

    /// Shrink the box by `by` pixels on every side.
    #[must_use]
    pub fn inset(&self, by: i32) -> Self {
        Self { x0: self.x0 + by, y0: self.y0 + by, x1: self.x1 - by, y1: self.y1 - by }
    }
}

/// A stylized piece of produce drawn as an outlined ellipse.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Shape {
    /// Internal name.
    pub name: &'static str,
    /// Ingredient name a recognizer is expected to report for this shape.
    pub label: &'static str,
    /// Box the ellipse is inscribed in.
    pub bbox: BoundingBox,
    /// Interior color.
    #[serde(serialize_with = "serialize_rgb")]
    pub fill: Rgb<u8>,
    /// Outline color.
    #[serde(serialize_with = "serialize_rgb")]
    pub outline: Rgb<u8>,
    /// Outline width, drawn inside `bbox`.
    pub outline_width: u32,
}

/// Shapes in draw order: tomato, lettuce, cucumber.
pub const SHAPES: [Shape; 3] = [
    Shape {
        name: "tomato",
        label: "トマト",
        bbox: BoundingBox { x0: 100, y0: 150, x1: 250, y1: 300 },
        fill: Rgb([255, 99, 71]),
        outline: Rgb([200, 50, 50]),
        outline_width: OUTLINE_WIDTH,
    },
    Shape {
        name: "lettuce",
        label: "レタス",
        bbox: BoundingBox { x0: 300, y0: 200, x1: 500, y1: 400 },
        fill: Rgb([144, 238, 144]),
        outline: Rgb([34, 139, 34]),
        outline_width: OUTLINE_WIDTH,
    },
    Shape {
        name: "cucumber",
        label: "きゅうり",
        bbox: BoundingBox { x0: 550, y0: 100, x1: 700, y1: 350 },
        fill: Rgb([60, 179, 113]),
        outline: Rgb([0, 100, 0]),
        outline_width: OUTLINE_WIDTH,
    },
];

/// Sample a background color, each channel independently and uniformly.
pub fn random_background<R: Rng + ?Sized>(rng: &mut R) -> Rgb<u8> {
    let mut channel = || rng.random_range(BACKGROUND_CHANNEL_MIN..=BACKGROUND_CHANNEL_MAX);
    Rgb([channel(), channel(), channel()])
}

/// Serialize an `Rgb<u8>` as a plain `[r, g, b]` array.
pub fn serialize_rgb<S: serde::Serializer>(color: &Rgb<u8>, s: S) -> Result<S::Ok, S::Error> {
    color.0.serialize(s)
}
