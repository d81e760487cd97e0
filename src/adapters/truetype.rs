//! Scalable label font backed by `ab_glyph`.

use ab_glyph::{point, Font, FontVec, GlyphId, InvalidFont, OutlinedGlyph, PxScale, ScaleFont};
use image::{Rgb, RgbImage};
use imageproc::pixelops::interpolate;

use crate::ports::{FontKind, LabelFont, TextBounds};

/// A TrueType/OpenType font at a fixed size.
pub struct TrueTypeFont {
    font: FontVec,
    scale: PxScale,
}

impl TrueTypeFont {
    /// Parse font bytes and size them so one em is `size` pixels.
    ///
    /// Collections (`.ttc`) use their first face.
    ///
    /// # Errors
    ///
    /// Returns an error if `data` is not a font `ab_glyph` can read.
    pub fn from_bytes(data: Vec<u8>, size: f32) -> Result<Self, InvalidFont> {
        let font = FontVec::try_from_vec_and_index(data, 0)?;
        let scale = font.units_per_em().map_or(PxScale::from(size), |upem| {
            PxScale::from(size * font.height_unscaled() / upem)
        });
        Ok(Self { font, scale })
    }

    /// Lay out `text` on one line with the baseline one ascent below the origin.
    fn outline(&self, text: &str) -> Vec<OutlinedGlyph> {
        let scaled = self.font.as_scaled(self.scale);
        let mut caret = point(0.0, scaled.ascent());
        let mut previous: Option<GlyphId> = None;
        let mut outlined = Vec::new();

        for ch in text.chars() {
            let id = scaled.glyph_id(ch);
            if let Some(prev) = previous {
                caret.x += scaled.kern(prev, id);
            }
            let glyph = id.with_scale_and_position(self.scale, caret);
            caret.x += scaled.h_advance(id);
            previous = Some(id);

            if let Some(g) = self.font.outline_glyph(glyph) {
                outlined.push(g);
            }
        }
        outlined
    }
}

impl LabelFont for TrueTypeFont {
    fn kind(&self) -> FontKind {
        FontKind::Scalable
    }

    fn measure(&self, text: &str) -> Option<TextBounds> {
        self.outline(text)
            .iter()
            .map(|g| {
                let b = g.px_bounds();
                TextBounds {
                    min_x: b.min.x as i32,
                    min_y: b.min.y as i32,
                    max_x: b.max.x as i32,
                    max_y: b.max.y as i32,
                }
            })
            .reduce(TextBounds::union)
    }

    fn draw(&self, canvas: &mut RgbImage, origin: (i32, i32), text: &str, color: Rgb<u8>) {
        let (width, height) = (canvas.width() as i32, canvas.height() as i32);
        for g in self.outline(text) {
            let bounds = g.px_bounds();
            let left = origin.0 + bounds.min.x as i32;
            let top = origin.1 + bounds.min.y as i32;
            g.draw(|gx, gy, coverage| {
                let px = left + gx as i32;
                let py = top + gy as i32;
                if coverage <= 0.0 || !(0..width).contains(&px) || !(0..height).contains(&py) {
                    return;
                }
                let pixel = canvas.get_pixel_mut(px as u32, py as u32);
                *pixel = interpolate(color, *pixel, coverage.min(1.0));
            });
        }
    }
}
