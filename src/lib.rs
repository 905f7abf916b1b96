//! Render wrapped text underneath an image.
//!
//! Text is wrapped to the width of the image using real font metrics, laid out in a
//! band below the image, and composited onto a new canvas. The image itself is never
//! cropped or scaled.
//!
//! ```
//! use caption_gen::{caption_image, CaptionOptions, Alignment};
//! use image::{Rgb, RgbImage};
//!
//! let photo = RgbImage::from_pixel(320, 240, Rgb([30, 90, 160]));
//! let mut options = CaptionOptions::new();
//! options.default_font().font_size(24).alignment(Alignment::Center);
//!
//! let caption = caption_image(&photo, "Hello world", "holiday photo", &options)
//!     .expect("can caption");
//! assert_eq!(caption.image.width(), 320);
//! assert_eq!(caption.file_name, "holiday_photo.png");
//! ```

mod caption;
pub use caption::*;

mod colour;
pub use colour::*;

mod compose;
pub use compose::*;

mod default_font;
pub use default_font::*;

mod error;
pub use error::*;

mod font;
pub use font::*;

mod image;
pub use self::image::*;

/// Utility functions and structures to wrap and position caption text
pub mod layout;
pub use layout::Alignment;

mod metrics;
pub use metrics::*;

mod units;
pub use units::*;
