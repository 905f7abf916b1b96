use crate::{
    colour::Colour,
    default_font::DefaultFont,
    metrics::{blend_pixel, FontMetrics, TextRenderer},
    CaptionError, Px,
};
use ab_glyph::{Font as _, FontVec, PxScale};
use image::RgbImage;
use owned_ttf_parser::{AsFaceRef, GlyphId, OwnedFace};
use std::path::Path;

/// A parsed font object. Fonts can be TTF or OTF fonts. The face is parsed once for
/// metrics and once more for glyph outlines, which are only needed when text is
/// actually drawn.
///
/// A `Font` is independent of size; use [Font::sized] to get something that can be
/// measured and drawn with.
pub struct Font {
    pub face: OwnedFace,
    outlines: FontVec,
}

impl Font {
    /// Load a font from raw bytes, parsing the font and returning an error if the font
    /// could not be parsed
    pub fn load(bytes: Vec<u8>) -> Result<Font, CaptionError> {
        let outlines = FontVec::try_from_vec(bytes.clone())?;
        let face = OwnedFace::from_vec(bytes, 0)?;

        Ok(Font { face, outlines })
    }

    /// Read and parse a font file
    pub fn load_from_disk<P: AsRef<Path>>(path: P) -> Result<Font, CaptionError> {
        let bytes = std::fs::read(path)?;
        Self::load(bytes)
    }

    /// Obtain the full name of the font, if it has one
    pub fn name(&self) -> Option<String> {
        self.face
            .as_face_ref()
            .names()
            .into_iter()
            .find(|name| name.name_id == owned_ttf_parser::name_id::FULL_NAME && name.is_unicode())
            .and_then(|name| name.to_string())
    }

    fn scaling(&self, size: Px) -> f32 {
        size.0 / self.face.as_face_ref().units_per_em() as f32
    }

    /// Calculate the ascent (distance from the baseline to the top of the font) for the given font size
    pub fn ascent(&self, size: Px) -> Px {
        Px(self.scaling(size) * self.face.as_face_ref().ascender() as f32)
    }

    /// Look up the glyph for a character, falling back to the replacement character
    /// and then to `.notdef`
    fn glyph(&self, ch: char) -> GlyphId {
        let face = self.face.as_face_ref();
        face.glyph_index(ch)
            .or_else(|| face.glyph_index('\u{FFFD}'))
            .unwrap_or(GlyphId(0))
    }

    fn advance(&self, gid: GlyphId, size: Px) -> Px {
        let advance = self.face.as_face_ref().glyph_hor_advance(gid).unwrap_or_default();
        Px(self.scaling(size) * advance as f32)
    }

    /// Calculate the width of a given string of text at the given font size
    pub fn width_of_text(&self, text: &str, size: Px) -> Px {
        text.chars()
            .map(|ch| self.advance(self.glyph(ch), size))
            .sum()
    }

    /// Calculate the height of the inked area of a string of text at the given font
    /// size. Glyphs without outlines (spaces, for one) don't contribute
    pub fn ink_height(&self, text: &str, size: Px) -> Px {
        let face = self.face.as_face_ref();
        let extents = text
            .chars()
            .filter_map(|ch| face.glyph_bounding_box(self.glyph(ch)))
            .fold(None, |acc: Option<(i16, i16)>, bbox| match acc {
                Some((lo, hi)) => Some((lo.min(bbox.y_min), hi.max(bbox.y_max))),
                None => Some((bbox.y_min, bbox.y_max)),
            });

        match extents {
            Some((lo, hi)) => Px(self.scaling(size) * (hi as f32 - lo as f32)),
            None => Px(0.0),
        }
    }

    /// Bind the font to a size so it can be measured and drawn with
    pub fn sized(&self, size: Px) -> SizedFont<'_> {
        SizedFont { font: self, size }
    }
}

/// A [Font] at a particular pixel size (the size of the em square)
#[derive(Clone, Copy)]
pub struct SizedFont<'f> {
    font: &'f Font,
    size: Px,
}

impl SizedFont<'_> {
    pub fn size(&self) -> Px {
        self.size
    }
}

impl FontMetrics for SizedFont<'_> {
    fn text_width(&self, text: &str) -> Px {
        self.font.width_of_text(text, self.size)
    }

    fn text_height(&self, text: &str) -> u32 {
        self.font.ink_height(text, self.size).ceil_u32()
    }
}

impl TextRenderer for SizedFont<'_> {
    fn draw_text(&self, canvas: &mut RgbImage, origin: (i64, i64), text: &str, colour: Colour) {
        let outlines = &self.font.outlines;
        let units_per_em = outlines.units_per_em().unwrap_or(1000.0);
        // ab_glyph scales by ascent-to-descent height rather than by the em square
        let scale = PxScale::from(self.size.0 * outlines.height_unscaled() / units_per_em);

        let baseline = origin.1 as f32 + self.font.ascent(self.size).0;
        let mut caret = origin.0 as f32;
        for ch in text.chars() {
            let gid = self.font.glyph(ch);
            let glyph = ab_glyph::GlyphId(gid.0)
                .with_scale_and_position(scale, ab_glyph::point(caret, baseline));

            if let Some(outlined) = outlines.outline_glyph(glyph) {
                let bounds = outlined.px_bounds();
                outlined.draw(|gx, gy, coverage| {
                    let x = bounds.min.x as i64 + gx as i64;
                    let y = bounds.min.y as i64 + gy as i64;
                    blend_pixel(canvas, x, y, colour, coverage);
                });
            }

            caret += self.font.advance(gid, self.size).0;
        }
    }
}

/// The font a caption is actually rendered with: either the requested face, or the
/// built-in bitmap font when that face could not be loaded
pub enum ResolvedFont<'f> {
    TrueType(SizedFont<'f>),
    Default(DefaultFont),
}

impl ResolvedFont<'_> {
    pub fn is_default(&self) -> bool {
        matches!(self, ResolvedFont::Default(_))
    }
}

impl FontMetrics for ResolvedFont<'_> {
    fn text_width(&self, text: &str) -> Px {
        match self {
            ResolvedFont::TrueType(font) => font.text_width(text),
            ResolvedFont::Default(font) => font.text_width(text),
        }
    }

    fn text_height(&self, text: &str) -> u32 {
        match self {
            ResolvedFont::TrueType(font) => font.text_height(text),
            ResolvedFont::Default(font) => font.text_height(text),
        }
    }
}

impl TextRenderer for ResolvedFont<'_> {
    fn draw_text(&self, canvas: &mut RgbImage, origin: (i64, i64), text: &str, colour: Colour) {
        match self {
            ResolvedFont::TrueType(font) => font.draw_text(canvas, origin, text, colour),
            ResolvedFont::Default(font) => font.draw_text(canvas, origin, text, colour),
        }
    }
}

/// Try to load the font at `path`. Any failure is logged and reported as `None` so the
/// caller can carry on with the built-in font
pub fn load_font_or_default<P: AsRef<Path>>(path: P) -> Option<Font> {
    let path = path.as_ref();
    match Font::load_from_disk(path) {
        Ok(font) => {
            log::debug!(
                "loaded font {} from {}",
                font.name().unwrap_or_else(|| "<unnamed>".to_string()),
                path.display()
            );
            Some(font)
        }
        Err(e) => {
            log::warn!(
                "could not load font {}, falling back to the built-in font: {e}",
                path.display()
            );
            None
        }
    }
}

/// Bind an optional font to a size, substituting the built-in font when there is none
pub fn resolve_font(font: Option<&Font>, size: u32) -> ResolvedFont<'_> {
    match font {
        Some(font) => ResolvedFont::TrueType(font.sized(Px::from(size))),
        None => ResolvedFont::Default(DefaultFont::new(size)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colours;
    use image::Rgb;

    // 2048 units per em, every glyph advances 1233 units
    const MONO: &[u8] = include_bytes!("../assets/DejaVuSansMono.ttf");

    fn mono() -> Font {
        Font::load(MONO.to_vec()).expect("can load the bundled font")
    }

    #[test]
    fn loads_a_truetype_face() {
        let font = mono();
        assert_eq!(font.name().as_deref(), Some("DejaVu Sans Mono"));
        assert_eq!(font.ascent(Px(2048.0)), Px(1901.0));
    }

    #[test]
    fn widths_come_from_glyph_advances() {
        let font = mono();
        assert_eq!(font.width_of_text("Hello", Px(2048.0)), Px(6165.0));
        assert_eq!(font.width_of_text("", Px(2048.0)), Px(0.0));

        let sized = font.sized(Px(24.0));
        assert_eq!(sized.text_width("Hello"), Px(72.24609375));
        // unmapped characters still take up space
        assert_eq!(sized.text_width("\u{10FFFD}"), sized.text_width("H"));
    }

    #[test]
    fn heights_come_from_ink_extents() {
        let font = mono();
        let sized = font.sized(Px(24.0));
        // "H" tops out at 1493 units and "g" descends to -440
        assert_eq!(sized.text_height("Hxg"), 23);
        // "Hello" spans -29 to 1567
        assert_eq!(sized.text_height("Hello"), 19);
        assert_eq!(sized.text_height("   "), 0);
        assert_eq!(sized.text_height(""), 0);
    }

    #[test]
    fn draws_below_the_line_top_from_the_pen() {
        let font = mono();
        let sized = font.sized(Px(24.0));
        let mut canvas = RgbImage::from_pixel(200, 60, Rgb([255, 255, 255]));
        sized.draw_text(&mut canvas, (20, 10), "Hxg", colours::BLACK);

        let inked: Vec<(u32, u32)> = canvas
            .enumerate_pixels()
            .filter(|(_, _, p)| **p != Rgb([255, 255, 255]))
            .map(|(x, y, _)| (x, y))
            .collect();
        assert!(!inked.is_empty());

        let min_x = inked.iter().map(|(x, _)| *x).min().unwrap_or_default();
        let max_x = inked.iter().map(|(x, _)| *x).max().unwrap_or_default();
        let min_y = inked.iter().map(|(_, y)| *y).min().unwrap_or_default();
        let max_y = inked.iter().map(|(_, y)| *y).max().unwrap_or_default();

        assert!((20..=22).contains(&min_x), "ink starts at x={min_x}");
        assert!(max_x as f32 <= 20.0 + sized.text_width("Hxg").0);
        assert!(min_y >= 10, "ink above the line at y={min_y}");
        // ascender plus descender is about 28px at this size
        assert!(max_y < 10 + 28, "ink below the descender at y={max_y}");
        assert!((max_y - min_y + 1).abs_diff(sized.text_height("Hxg")) <= 1);
    }

    #[test]
    fn loads_a_font_from_disk() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/assets/DejaVuSansMono.ttf");
        let font = load_font_or_default(path).expect("font on disk");
        assert!(!resolve_font(Some(&font), 24).is_default());
    }

    #[test]
    fn garbage_bytes_are_not_a_font() {
        let result = Font::load(b"definitely not a font".to_vec());
        assert!(matches!(
            result,
            Err(CaptionError::InvalidFont(_)) | Err(CaptionError::FaceParsingError(_))
        ));
    }

    #[test]
    fn missing_font_file_falls_back() {
        assert!(load_font_or_default("this/font/does/not/exist.ttf").is_none());

        let resolved = resolve_font(None, 24);
        assert!(resolved.is_default());
        assert_eq!(resolved.text_width("ab"), DefaultFont::new(24).text_width("ab"));
    }
}
