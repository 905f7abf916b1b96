use crate::{metrics::FontMetrics, units::Px};

/// The horizontal inset, in pixels, used by left and right alignment unless otherwise
/// configured
pub const DEFAULT_INSET: u32 = 20;

/// Horizontal placement of each caption line on the canvas
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    /// Start every line a fixed inset from the left edge
    #[default]
    Left,
    /// Centre every line on the canvas
    Center,
    /// End every line a fixed inset from the right edge
    Right,
}

/// Spacing between consecutive lines for a given font size
pub fn line_spacing(font_size: u32) -> u32 {
    font_size / 2
}

/// Padding above and below the block of text for a given font size
pub fn padding(font_size: u32) -> u32 {
    (font_size as u64 * 3 / 2).min(u32::MAX as u64) as u32
}

/// Where one line of text goes on the canvas. `y` is the top of the line's ascender
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLine {
    pub text: String,
    pub x: i64,
    pub y: i64,
    pub height: u32,
}

/// The geometry of a captioned image: the size of the new canvas and the position of
/// every line of text on it. The source image always sits at the origin, so only the
/// text needs placing.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutPlan {
    pub width: u32,
    pub height: u32,
    pub line_spacing: u32,
    pub padding: u32,
    pub text_block_height: u32,
    pub lines: Vec<PlacedLine>,
}

impl LayoutPlan {
    /// Plan the layout of `lines` beneath an image of `source_size` (width, height).
    ///
    /// The canvas is as wide as the source and tall enough for the source, the text
    /// block, and `padding` above and below the text. Padding is applied even when
    /// there are no lines at all.
    pub fn new<M: FontMetrics + ?Sized>(
        source_size: (u32, u32),
        lines: &[String],
        metrics: &M,
        font_size: u32,
        alignment: Alignment,
        inset: u32,
    ) -> LayoutPlan {
        let (width, source_height) = source_size;
        let line_spacing = line_spacing(font_size);
        let padding = padding(font_size);

        let heights: Vec<u32> = lines.iter().map(|line| metrics.text_height(line)).collect();
        let text_block_height = match heights.len() {
            0 => 0,
            n => heights
                .iter()
                .fold(0u32, |acc, h| acc.saturating_add(*h))
                .saturating_add(line_spacing.saturating_mul(n as u32 - 1)),
        };
        let height = source_height
            .saturating_add(text_block_height)
            .saturating_add(padding.saturating_mul(2));

        let mut y = source_height as i64 + padding as i64;
        let mut placed = Vec::with_capacity(lines.len());
        for (line, line_height) in lines.iter().zip(heights) {
            let x = horizontal_offset(width, metrics.text_width(line), alignment, inset);
            placed.push(PlacedLine {
                text: line.clone(),
                x,
                y,
                height: line_height,
            });
            y += line_height as i64 + line_spacing as i64;
        }

        log::debug!(
            "planned {}x{height} canvas for {} lines ({text_block_height}px of text, {padding}px padding)",
            width,
            placed.len()
        );

        LayoutPlan {
            width,
            height,
            line_spacing,
            padding,
            text_block_height,
            lines: placed,
        }
    }
}

/// Calculates the x coordinate of a line of the given width. Lines wider than the
/// canvas can start at a negative offset
pub fn horizontal_offset(canvas_width: u32, line_width: Px, alignment: Alignment, inset: u32) -> i64 {
    let canvas_width = Px::from(canvas_width);
    match alignment {
        Alignment::Left => inset as i64,
        Alignment::Right => (canvas_width - line_width - Px::from(inset)).floor(),
        Alignment::Center => ((canvas_width - line_width) / 2.0).floor(),
    }
}
