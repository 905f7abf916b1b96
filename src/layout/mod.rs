//! Text layout utilities for putting captions underneath images.
//!
//! Layout happens in two steps. First the caption text is broken into display lines
//! that fit the width of the image, then those lines are positioned on a canvas large
//! enough to hold both the image and the text.
//!
//! # Wrapping
//!
//! Three strategies are available through [`WrapMode`](crate::layout::WrapMode):
//!
//! - [`wrap_text_by_pixel`](crate::layout::wrap_text_by_pixel) - word-aware wrapping against measured glyph widths
//! - [`wrap_text_by_columns`](crate::layout::wrap_text_by_columns) - word-aware wrapping against a character count
//! - [`split_lines`](crate::layout::split_lines) - no wrapping, explicit newlines only
//!
//! # Example
//!
//! ```
//! use caption_gen::{DefaultFont, Px};
//! use caption_gen::layout::{wrap_text_by_pixel, Alignment, LayoutPlan, DEFAULT_INSET};
//!
//! let font = DefaultFont::new(16);
//! let lines = wrap_text_by_pixel("Hello, world!\n\nA second paragraph.", Px(240.0), &font);
//! assert_eq!(lines, vec!["Hello, world!", "", "A second", "paragraph."]);
//!
//! let plan = LayoutPlan::new((200, 100), &lines, &font, 16, Alignment::Center, DEFAULT_INSET);
//! assert_eq!(plan.width, 200);
//! assert_eq!(plan.lines[0].y, 100 + 24);
//! ```

mod plan;
mod wrap;

pub use plan::*;
pub use wrap::*;
