use crate::colour::Colour;
use crate::units::Px;
use image::RgbImage;

/// Measurements of rendered text for one face at one size. Wrapping and layout only
/// ever see a font through this trait, so any source of glyph metrics (a parsed
/// TrueType face, the built-in bitmap font, or a fixed-width stand-in in tests) can
/// drive them.
pub trait FontMetrics {
    /// The advance width of `text` rendered on a single line
    fn text_width(&self, text: &str) -> Px;

    /// The height of the ink bounding box of `text`, from the highest ascending
    /// glyph to the lowest descending one. Empty and whitespace-only text has no
    /// ink and measures 0
    fn text_height(&self, text: &str) -> u32;
}

/// A font that can also put its glyphs onto a canvas
pub trait TextRenderer: FontMetrics {
    /// Draw a single line of text with the top of the font's ascender at `origin.1`
    /// and the pen starting at `origin.0`. Anything falling outside the canvas is
    /// clipped.
    fn draw_text(&self, canvas: &mut RgbImage, origin: (i64, i64), text: &str, colour: Colour);
}

/// Blend `colour` into the canvas pixel at (x, y), ignoring coordinates outside
/// the canvas
pub(crate) fn blend_pixel(canvas: &mut RgbImage, x: i64, y: i64, colour: Colour, coverage: f32) {
    if x < 0 || y < 0 || coverage <= 0.0 {
        return;
    }
    let (x, y) = (x as u32, y as u32);
    if x >= canvas.width() || y >= canvas.height() {
        return;
    }
    let under = *canvas.get_pixel(x, y);
    canvas.put_pixel(x, y, colour.blend_over(under, coverage));
}
