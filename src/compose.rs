use crate::colour::{colours, Colour};
use crate::layout::{Alignment, LayoutPlan, DEFAULT_INSET};
use crate::metrics::TextRenderer;
use image::{imageops, RgbImage};

/// How composited text looks: its size, where it sits horizontally, and its colours
#[derive(Debug, Clone, PartialEq)]
pub struct ComposeStyle {
    /// Font size in pixels, which also drives line spacing and padding
    pub font_size: u32,
    pub alignment: Alignment,
    /// Distance from the canvas edge for left and right aligned text
    pub inset: u32,
    pub foreground: Colour,
    pub background: Colour,
}

impl Default for ComposeStyle {
    fn default() -> Self {
        ComposeStyle {
            font_size: 20,
            alignment: Alignment::default(),
            inset: DEFAULT_INSET,
            foreground: colours::BLACK,
            background: colours::WHITE,
        }
    }
}

impl ComposeStyle {
    /// Create a new style: 20px black text, left aligned on white
    pub fn new() -> ComposeStyle {
        ComposeStyle::default()
    }

    /// Set the font size of the style, modifying `self`
    pub fn font_size(&mut self, font_size: u32) -> &mut Self {
        self.font_size = font_size;
        self
    }

    /// Set the alignment of the style, modifying `self`
    pub fn alignment(&mut self, alignment: Alignment) -> &mut Self {
        self.alignment = alignment;
        self
    }

    /// Set the horizontal inset of the style, modifying `self`
    pub fn inset(&mut self, inset: u32) -> &mut Self {
        self.inset = inset;
        self
    }

    /// Set the text colour of the style, modifying `self`
    pub fn foreground<C: Into<Colour>>(&mut self, colour: C) -> &mut Self {
        self.foreground = colour.into();
        self
    }

    /// Set the canvas colour of the style, modifying `self`
    pub fn background<C: Into<Colour>>(&mut self, colour: C) -> &mut Self {
        self.background = colour.into();
        self
    }
}

/// Render `lines` beneath `source` in black on white with the default inset.
///
/// The result is exactly as wide as `source`, with `source` copied unchanged into its
/// top-left corner. See [LayoutPlan] for how the height and line positions are
/// derived from `font_size`.
pub fn compose<F: TextRenderer + ?Sized>(
    source: &RgbImage,
    lines: &[String],
    font: &F,
    font_size: u32,
    alignment: Alignment,
) -> RgbImage {
    let mut style = ComposeStyle::new();
    style.font_size(font_size).alignment(alignment);
    compose_with(source, lines, font, &style)
}

/// Render `lines` beneath `source` using the given style
pub fn compose_with<F: TextRenderer + ?Sized>(
    source: &RgbImage,
    lines: &[String],
    font: &F,
    style: &ComposeStyle,
) -> RgbImage {
    let plan = LayoutPlan::new(
        source.dimensions(),
        lines,
        font,
        style.font_size,
        style.alignment,
        style.inset,
    );
    render_plan(source, &plan, font, style)
}

/// Paint a planned layout onto a freshly allocated canvas
pub fn render_plan<F: TextRenderer + ?Sized>(
    source: &RgbImage,
    plan: &LayoutPlan,
    font: &F,
    style: &ComposeStyle,
) -> RgbImage {
    let mut canvas = RgbImage::from_pixel(plan.width, plan.height, style.background.into());
    imageops::replace(&mut canvas, source, 0, 0);

    for line in plan.lines.iter().filter(|line| !line.text.is_empty()) {
        font.draw_text(&mut canvas, (line.x, line.y), &line.text, style.foreground);
    }

    canvas
}
