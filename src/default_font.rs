//! The built-in fallback font, used whenever the requested font can't be loaded.
//!
//! Glyphs come from the public-domain 8×8 bitmaps in [font8x8] and are scaled up by a
//! whole-number factor so the text is roughly the requested size. Every glyph has the
//! same advance, which also makes this font handy for predictable measurements.

use crate::colour::Colour;
use crate::metrics::{blend_pixel, FontMetrics, TextRenderer};
use crate::units::Px;
use font8x8::{UnicodeFonts, BASIC_FONTS, LATIN_FONTS};
use image::RgbImage;

/// Width and height of a glyph cell before scaling
const CELL: u32 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefaultFont {
    scale: u32,
}

impl DefaultFont {
    /// A bitmap font whose cells are as close to `font_size` pixels as a whole-number
    /// multiple of 8 allows (never smaller than 8)
    pub fn new(font_size: u32) -> DefaultFont {
        DefaultFont {
            scale: (font_size / CELL).max(1),
        }
    }

    /// How many canvas pixels each bitmap pixel covers
    pub fn scale(&self) -> u32 {
        self.scale
    }

    /// The horizontal advance of every character
    pub fn advance(&self) -> u32 {
        CELL * self.scale
    }

    fn glyph(ch: char) -> [u8; 8] {
        BASIC_FONTS
            .get(ch)
            .or_else(|| LATIN_FONTS.get(ch))
            .or_else(|| BASIC_FONTS.get('?'))
            .unwrap_or_default()
    }
}

impl FontMetrics for DefaultFont {
    fn text_width(&self, text: &str) -> Px {
        Px(text.chars().count() as f32 * self.advance() as f32)
    }

    fn text_height(&self, text: &str) -> u32 {
        let inked = text
            .chars()
            .map(Self::glyph)
            .flat_map(|rows| rows.into_iter().enumerate())
            .filter(|&(_, bits)| bits != 0)
            .map(|(row, _)| row as u32);

        let (top, bottom) = inked.fold((u32::MAX, 0), |(top, bottom), row| {
            (top.min(row), bottom.max(row))
        });

        if top > bottom {
            0
        } else {
            (bottom - top + 1) * self.scale
        }
    }
}

impl TextRenderer for DefaultFont {
    fn draw_text(&self, canvas: &mut RgbImage, origin: (i64, i64), text: &str, colour: Colour) {
        let scale = self.scale as i64;
        let mut caret = origin.0;
        for ch in text.chars() {
            for (row, bits) in Self::glyph(ch).iter().enumerate() {
                for col in 0..CELL as i64 {
                    // bit 0 is the leftmost pixel
                    if (bits >> col) & 1 == 0 {
                        continue;
                    }
                    let x = caret + col * scale;
                    let y = origin.1 + row as i64 * scale;
                    for dy in 0..scale {
                        for dx in 0..scale {
                            blend_pixel(canvas, x + dx, y + dy, colour, 1.0);
                        }
                    }
                }
            }
            caret += self.advance() as i64;
        }
    }
}
