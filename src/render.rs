//! Canvas composition: background, produce shapes and the centered label.

use image::{Rgb, RgbImage};
use imageproc::drawing::draw_filled_ellipse_mut;
use log::debug;
use serde::Serialize;

use crate::ports::{LabelFont, TextBounds};
use crate::scene::{
    Shape, CANVAS_HEIGHT, CANVAS_WIDTH, LABEL_BOTTOM_OFFSET, LABEL_COLOR, LABEL_TEXT, SHAPES,
};

/// Where the label was drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LabelPlacement {
    /// Top-left corner of the line box.
    pub origin: (i32, i32),
    /// Ink box on the canvas, absent if the text has no visible glyphs.
    pub ink: Option<TextBounds>,
}

/// Compute the label origin so that its ink is centered horizontally.
///
/// The top of the line box sits `LABEL_BOTTOM_OFFSET` pixels above the
/// bottom edge.
#[must_use]
pub fn place_label(font: &dyn LabelFont, text: &str) -> LabelPlacement {
    let top = (CANVAS_HEIGHT - LABEL_BOTTOM_OFFSET) as i32;
    match font.measure(text) {
        Some(bounds) => {
            let left = (CANVAS_WIDTH as i32 - bounds.width() as i32).div_euclid(2);
            let origin = (left - bounds.min_x, top);
            LabelPlacement { origin, ink: Some(bounds.offset(origin.0, origin.1)) }
        }
        None => LabelPlacement { origin: (CANVAS_WIDTH as i32 / 2, top), ink: None },
    }
}

/// Draw one outlined ellipse. The outline lies inside the bounding box.
pub fn draw_shape(canvas: &mut RgbImage, shape: &Shape) {
    let (cx, cy) = shape.bbox.center();
    let (rx, ry) = shape.bbox.radii();
    draw_filled_ellipse_mut(canvas, (cx, cy), rx, ry, shape.outline);

    let (ix, iy) = shape.bbox.inset(shape.outline_width as i32).radii();
    if ix > 0 && iy > 0 {
        draw_filled_ellipse_mut(canvas, (cx, cy), ix, iy, shape.fill);
    }
}

/// Compose the full fixture image.
#[must_use]
pub fn render(background: Rgb<u8>, font: &dyn LabelFont) -> (RgbImage, LabelPlacement) {
    let mut canvas = RgbImage::from_pixel(CANVAS_WIDTH, CANVAS_HEIGHT, background);

    for shape in &SHAPES {
        draw_shape(&mut canvas, shape);
    }

    let placement = place_label(font, LABEL_TEXT);
    if let Some(ink) = placement.ink {
        debug!("Label ink {}x{} at ({}, {})", ink.width(), ink.height(), ink.min_x, ink.min_y);
    }
    font.draw(&mut canvas, placement.origin, LABEL_TEXT, LABEL_COLOR);

    (canvas, placement)
}
